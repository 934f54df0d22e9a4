use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use leptos::prelude::*;

use super::*;
use crate::error::TransportError;
use crate::net::types::AuthResponse;

// =============================================================
// Helpers
// =============================================================

fn filled_form() -> SignUpForm {
    SignUpForm {
        fields: SignUpFields {
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "hunter2".to_owned(),
        },
        agree_to_terms: true,
        phase: SubmitPhase::Idle,
    }
}

fn reply(json: &str) -> Result<AuthResponse, TransportError> {
    Ok(serde_json::from_str(json).unwrap())
}

/// Replays a canned reply and records what the form looked like mid-request.
struct FakeApi<'a> {
    reply: Result<AuthResponse, TransportError>,
    form: &'a RefCell<SignUpForm>,
    calls: Cell<usize>,
    loading_during_request: Cell<Option<bool>>,
    error_during_request: RefCell<Option<String>>,
    sent: RefCell<Option<SignUpRequest>>,
}

impl<'a> FakeApi<'a> {
    fn new(form: &'a RefCell<SignUpForm>, reply: Result<AuthResponse, TransportError>) -> Self {
        Self {
            reply,
            form,
            calls: Cell::new(0),
            loading_during_request: Cell::new(None),
            error_during_request: RefCell::new(None),
            sent: RefCell::new(None),
        }
    }
}

impl AuthApi for FakeApi<'_> {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<AuthResponse, TransportError> {
        self.calls.set(self.calls.get() + 1);
        let form = self.form.borrow();
        self.loading_during_request.set(Some(form.is_loading()));
        *self.error_during_request.borrow_mut() = form.error_message();
        *self.sent.borrow_mut() = Some(request.clone());
        self.reply.clone()
    }
}

#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_owned());
    }
}

fn run(form: SignUpForm, reply: Result<AuthResponse, TransportError>) -> (SignUpForm, usize, Option<bool>, Vec<String>) {
    let cell = RefCell::new(form);
    let api = FakeApi::new(&cell, reply);
    let nav = RecordingNavigator::default();
    block_on(submit_sign_up(&cell, &api, &nav));
    let calls = api.calls.get();
    let loading = api.loading_during_request.get();
    let visited = nav.visited.into_inner();
    (cell.into_inner(), calls, loading, visited)
}

// =============================================================
// Field model
// =============================================================

#[test]
fn default_form_is_idle_and_empty() {
    let form = SignUpForm::default();
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert!(!form.is_loading());
    assert!(form.error_message().is_none());
    assert!(!form.agree_to_terms);
    assert!(SignUpField::ALL.iter().all(|f| form.fields.get(*f).is_empty()));
}

#[test]
fn set_updates_only_the_named_field() {
    let mut fields = SignUpFields::default();
    fields.set(SignUpField::Email, "a@b.c".to_owned());
    assert_eq!(fields.get(SignUpField::Email), "a@b.c");
    assert_eq!(fields.get(SignUpField::Username), "");
    assert_eq!(fields.get(SignUpField::Password), "");
}

#[test]
fn field_specs_follow_render_order() {
    let labels: Vec<_> = SignUpField::ALL.iter().map(|f| f.spec().label).collect();
    assert_eq!(labels, ["Username", "Email", "Password"]);
    assert_eq!(SignUpField::Password.spec().input_type, "password");
    assert_eq!(SignUpField::Username.spec().placeholder, "Choose a username");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn terms_are_checked_before_fields() {
    assert_eq!(
        validate_sign_up(&SignUpFields::default(), false),
        Err(ValidationError::TermsNotAccepted)
    );
    assert_eq!(
        validate_sign_up(&filled_form().fields, false),
        Err(ValidationError::TermsNotAccepted)
    );
}

#[test]
fn each_empty_field_is_rejected() {
    for field in SignUpField::ALL {
        let mut fields = filled_form().fields;
        fields.set(field, String::new());
        assert_eq!(validate_sign_up(&fields, true), Err(ValidationError::MissingFields));
    }
}

#[test]
fn whitespace_counts_as_present() {
    let mut fields = filled_form().fields;
    fields.set(SignUpField::Username, " ".to_owned());
    assert!(validate_sign_up(&fields, true).is_ok());
}

#[test]
fn valid_input_builds_request() {
    let request = validate_sign_up(&filled_form().fields, true).unwrap();
    assert_eq!(request.username, "ada");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "hunter2");
}

// =============================================================
// Phase transitions
// =============================================================

#[test]
fn begin_submit_moves_to_submitting() {
    let mut form = filled_form();
    assert!(form.begin_submit().is_some());
    assert!(form.is_loading());
    assert!(form.error_message().is_none());
}

#[test]
fn begin_submit_ignores_duplicate_while_loading() {
    let mut form = filled_form();
    form.begin_submit();
    assert!(form.begin_submit().is_none());
    assert_eq!(form.phase, SubmitPhase::Submitting);
}

#[test]
fn begin_submit_records_validation_error_without_loading() {
    let mut form = SignUpForm::default();
    assert!(form.begin_submit().is_none());
    assert!(!form.is_loading());
    assert_eq!(
        form.error_message().as_deref(),
        Some("Please agree to the Terms, Privacy Policy and Fees")
    );
}

#[test]
fn begin_submit_clears_previous_error() {
    let mut form = filled_form();
    form.phase = SubmitPhase::Failed(AuthError::Application("Email taken".to_owned()));
    assert!(form.begin_submit().is_some());
    assert!(form.error_message().is_none());
}

#[test]
fn finish_submit_always_leaves_loading() {
    let mut ok = filled_form();
    ok.begin_submit();
    ok.finish_submit(Ok(Some(RegisteredUser {
        id: "1".to_owned(),
        username: "u".to_owned(),
        email: "e".to_owned(),
    })));
    assert_eq!(ok.phase, SubmitPhase::Succeeded);
    assert!(!ok.is_loading());

    let mut failed = filled_form();
    failed.begin_submit();
    failed.finish_submit(Err(AuthError::Application("nope".to_owned())));
    assert!(!failed.is_loading());
    assert_eq!(failed.error_message().as_deref(), Some("nope"));
}

// =============================================================
// Submission flow
// =============================================================

#[test]
fn unaccepted_terms_never_reach_the_network() {
    let mut form = filled_form();
    form.agree_to_terms = false;
    let (form, calls, _, visited) = run(form, reply(r#"{"status":"success"}"#));
    assert_eq!(calls, 0);
    assert!(visited.is_empty());
    assert_eq!(
        form.error_message().as_deref(),
        Some("Please agree to the Terms, Privacy Policy and Fees")
    );
}

#[test]
fn missing_field_never_reaches_the_network() {
    let mut form = filled_form();
    form.fields.password.clear();
    let (form, calls, _, _) = run(form, reply(r#"{"status":"success"}"#));
    assert_eq!(calls, 0);
    assert!(!form.is_loading());
    assert_eq!(form.error_message().as_deref(), Some("All fields are required"));
}

#[test]
fn success_navigates_home_without_error() {
    let (form, calls, loading, visited) = run(
        filled_form(),
        reply(r#"{"status":"success","data":{"id":"1","username":"u","email":"e"}}"#),
    );
    assert_eq!(calls, 1);
    assert_eq!(loading, Some(true));
    assert_eq!(visited, vec!["/".to_owned()]);
    assert_eq!(form.phase, SubmitPhase::Succeeded);
    assert!(form.error_message().is_none());
}

#[test]
fn success_without_data_shows_fallback_and_stays() {
    let (form, _, _, visited) = run(filled_form(), reply(r#"{"status":"success"}"#));
    assert!(visited.is_empty());
    assert_eq!(form.error_message().as_deref(), Some("Signup failed"));
}

#[test]
fn error_message_is_displayed_verbatim() {
    let (form, _, loading, visited) =
        run(filled_form(), reply(r#"{"status":"error","message":"Email taken"}"#));
    assert_eq!(loading, Some(true));
    assert!(visited.is_empty());
    assert!(!form.is_loading());
    assert_eq!(form.error_message().as_deref(), Some("Email taken"));
}

#[test]
fn first_listed_error_is_displayed() {
    let (form, _, _, _) = run(filled_form(), reply(r#"{"status":"error","errors":["Weak password"]}"#));
    assert_eq!(form.error_message().as_deref(), Some("Weak password"));
}

#[test]
fn bare_error_shows_fallback() {
    let (form, _, _, _) = run(filled_form(), reply(r#"{"status":"error"}"#));
    assert_eq!(form.error_message().as_deref(), Some("Signup failed"));
}

#[test]
fn transport_failure_shows_generic_message() {
    let (form, calls, loading, visited) =
        run(filled_form(), Err(TransportError::new("connection refused")));
    assert_eq!(calls, 1);
    assert_eq!(loading, Some(true));
    assert!(visited.is_empty());
    assert!(!form.is_loading());
    assert_eq!(form.error_message().as_deref(), Some("Network error. Please try again."));
}

#[test]
fn retry_clears_error_before_request() {
    let mut form = filled_form();
    form.phase = SubmitPhase::Failed(AuthError::Application("Email taken".to_owned()));
    let cell = RefCell::new(form);
    let api = FakeApi::new(&cell, reply(r#"{"status":"error","message":"Still taken"}"#));
    block_on(submit_sign_up(&cell, &api, &RecordingNavigator::default()));
    assert_eq!(*api.error_during_request.borrow(), None);
    assert_eq!(cell.borrow().error_message().as_deref(), Some("Still taken"));
}

#[test]
fn request_carries_current_field_values() {
    let cell = RefCell::new(filled_form());
    let api = FakeApi::new(&cell, reply(r#"{"status":"error"}"#));
    block_on(submit_sign_up(&cell, &api, &RecordingNavigator::default()));
    assert_eq!(
        *api.sent.borrow(),
        Some(SignUpRequest {
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "hunter2".to_owned(),
        })
    );
}

#[test]
fn submit_while_loading_sends_nothing() {
    let mut form = filled_form();
    form.phase = SubmitPhase::Submitting;
    let (form, calls, _, _) = run(form, reply(r#"{"status":"error"}"#));
    assert_eq!(calls, 0);
    assert_eq!(form.phase, SubmitPhase::Submitting);
}

#[test]
fn success_with_unexpected_data_shape_still_navigates() {
    let (form, _, _, visited) = run(
        filled_form(),
        reply(r#"{"status":"success","data":{"_id":"1","name":"u"}}"#),
    );
    assert_eq!(visited, vec!["/".to_owned()]);
    assert_eq!(form.phase, SubmitPhase::Succeeded);
}

#[test]
fn error_with_empty_data_shows_backend_message() {
    let (form, _, _, visited) =
        run(filled_form(), reply(r#"{"status":"error","message":"Email taken","data":{}}"#));
    assert!(visited.is_empty());
    assert_eq!(form.error_message().as_deref(), Some("Email taken"));
}

// =============================================================
// Submission flow against a reactive signal
// =============================================================

/// Replays a canned reply against a signal-held form, optionally disposing
/// the signal mid-request the way an unmounting page would.
struct SignalApi {
    reply: Result<AuthResponse, TransportError>,
    form: RwSignal<SignUpForm>,
    dispose_during_request: bool,
    loading_during_request: Cell<Option<bool>>,
}

impl AuthApi for SignalApi {
    async fn sign_up(&self, _: &SignUpRequest) -> Result<AuthResponse, TransportError> {
        self.loading_during_request
            .set(Some(self.form.with_untracked(SignUpForm::is_loading)));
        if self.dispose_during_request {
            self.form.dispose();
        }
        self.reply.clone()
    }
}

#[test]
fn signal_store_runs_full_flow() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(filled_form());
        let api = SignalApi {
            reply: reply(r#"{"status":"error","errors":["Weak password"]}"#),
            form,
            dispose_during_request: false,
            loading_during_request: Cell::new(None),
        };
        let nav = RecordingNavigator::default();

        block_on(submit_sign_up(&form, &api, &nav));

        assert_eq!(api.loading_during_request.get(), Some(true));
        assert!(nav.visited.borrow().is_empty());
        assert!(!form.with_untracked(SignUpForm::is_loading));
        assert_eq!(
            form.with_untracked(SignUpForm::error_message).as_deref(),
            Some("Weak password")
        );
    });
}

#[test]
fn signal_store_success_navigates_home() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(filled_form());
        let api = SignalApi {
            reply: reply(r#"{"status":"success","data":{"id":"1","username":"u","email":"e"}}"#),
            form,
            dispose_during_request: false,
            loading_during_request: Cell::new(None),
        };
        let nav = RecordingNavigator::default();

        block_on(submit_sign_up(&form, &api, &nav));

        assert_eq!(*nav.visited.borrow(), vec!["/".to_owned()]);
        assert_eq!(form.with_untracked(|f| f.phase.clone()), SubmitPhase::Succeeded);
    });
}

#[test]
fn disposed_signal_mid_request_is_tolerated() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(filled_form());
        let api = SignalApi {
            reply: reply(r#"{"status":"error","message":"Email taken"}"#),
            form,
            dispose_during_request: true,
            loading_during_request: Cell::new(None),
        };
        let nav = RecordingNavigator::default();

        block_on(submit_sign_up(&form, &api, &nav));

        assert_eq!(api.loading_during_request.get(), Some(true));
        assert!(nav.visited.borrow().is_empty());
        assert!(form.try_get_untracked().is_none());
    });
}
