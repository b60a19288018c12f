//! The backend rule's asynchronous round-trip: halt, resolve, cache,
//! invalidate on edit.

use std::collections::HashMap;
use std::sync::Mutex;

use pretty_assertions::assert_eq;

use formcheck::prelude::*;

/// Transport with canned responses per value, counting the calls it serves.
struct FakeTransport {
    responses: HashMap<String, Result<BackendResponse, String>>,
    calls: Mutex<u32>,
}

impl FakeTransport {
    fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: Mutex::new(0),
        }
    }

    fn accept(mut self, value: &str) -> Self {
        self.responses.insert(
            value.to_owned(),
            Ok(BackendResponse {
                success: true,
                message: None,
            }),
        );
        self
    }

    fn reject(mut self, value: &str, message: Option<&str>) -> Self {
        self.responses.insert(
            value.to_owned(),
            Ok(BackendResponse {
                success: false,
                message: message.map(str::to_owned),
            }),
        );
        self
    }

    fn fail(mut self, value: &str) -> Self {
        self.responses
            .insert(value.to_owned(), Err("connection refused".to_owned()));
        self
    }

    fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

impl BackendTransport for FakeTransport {
    async fn send(&self, request: &BackendRequest) -> Result<BackendResponse, BackendError> {
        *self.calls.lock().unwrap() += 1;
        match self.responses.get(&request.value) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(BackendError::Transport(message.clone())),
            None => Err(BackendError::Timeout),
        }
    }
}

fn backend_form(value: &str) -> Form {
    Form::new().with(
        FieldDescriptor::text("email", value, "backend").with_backend_url("/verify-email"),
    )
}

fn pending_request(evaluator: &Evaluator, form: &Form) -> BackendRequest {
    let outcome = evaluator.evaluate_form(form).unwrap();
    assert_eq!(outcome.pending.len(), 1);
    outcome.pending[0].clone()
}

#[tokio::test]
async fn accepted_round_trip_settles_the_form() {
    let transport = FakeTransport::new().accept("free@example.com");
    let evaluator = Evaluator::with_defaults();
    let mut form = backend_form("free@example.com");

    let request = pending_request(&evaluator, &form);
    assert_eq!(request.endpoint, "/verify-email");

    resolve_backend(form.field_mut("email").unwrap(), &request, &transport).await;

    let outcome = evaluator.evaluate_form(&form).unwrap();
    assert!(outcome.is_valid());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn server_rejection_message_wins() {
    let transport = FakeTransport::new().reject("taken@example.com", Some("Address is taken"));
    let evaluator = Evaluator::with_defaults();
    let mut form = backend_form("taken@example.com");

    let request = pending_request(&evaluator, &form);
    resolve_backend(form.field_mut("email").unwrap(), &request, &transport).await;

    let outcome = evaluator.evaluate_form(&form).unwrap();
    assert_eq!(outcome.messages, vec!["Address is taken".to_owned()]);
}

#[tokio::test]
async fn rejection_without_message_falls_back_to_the_table() {
    let transport = FakeTransport::new().reject("taken@example.com", None);
    let evaluator = Evaluator::with_defaults();
    let mut form = backend_form("taken@example.com");

    let request = pending_request(&evaluator, &form);
    resolve_backend(form.field_mut("email").unwrap(), &request, &transport).await;

    let outcome = evaluator.evaluate_form(&form).unwrap();
    assert_eq!(outcome.messages, vec!["The value could not be verified".to_owned()]);
}

#[tokio::test]
async fn cached_verdict_is_not_refetched() {
    let transport = FakeTransport::new().accept("free@example.com");
    let evaluator = Evaluator::with_defaults();
    let mut form = backend_form("free@example.com");

    let request = pending_request(&evaluator, &form);
    resolve_backend(form.field_mut("email").unwrap(), &request, &transport).await;

    // subsequent passes answer from the cache
    assert!(evaluator.evaluate_form(&form).unwrap().is_valid());
    assert!(evaluator.evaluate_form(&form).unwrap().is_valid());
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn editing_the_field_invalidates_the_cache() {
    let transport = FakeTransport::new()
        .accept("first@example.com")
        .reject("second@example.com", Some("Address is taken"));
    let evaluator = Evaluator::with_defaults();
    let mut form = backend_form("first@example.com");

    let request = pending_request(&evaluator, &form);
    resolve_backend(form.field_mut("email").unwrap(), &request, &transport).await;
    assert!(evaluator.evaluate_form(&form).unwrap().is_valid());

    form.field_mut("email")
        .unwrap()
        .set_value("second@example.com");

    // back to pending, then rejected after the new round-trip
    let request = pending_request(&evaluator, &form);
    assert_eq!(request.value, "second@example.com");
    resolve_backend(form.field_mut("email").unwrap(), &request, &transport).await;

    let outcome = evaluator.evaluate_form(&form).unwrap();
    assert_eq!(outcome.messages, vec!["Address is taken".to_owned()]);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn transport_failure_reads_as_unverified_and_retries_after_edit() {
    let transport = FakeTransport::new().fail("flaky@example.com");
    let evaluator = Evaluator::with_defaults();
    let mut form = backend_form("flaky@example.com");

    let request = pending_request(&evaluator, &form);
    resolve_backend(form.field_mut("email").unwrap(), &request, &transport).await;

    let outcome = evaluator.evaluate_form(&form).unwrap();
    assert_eq!(outcome.messages, vec!["The value could not be verified".to_owned()]);

    // an edit drops the failed verdict so the check is retried
    form.field_mut("email").unwrap().set_value("flaky@example.com");
    let outcome = evaluator.evaluate_form(&form).unwrap();
    assert_eq!(outcome.pending.len(), 1);
}
