use std::rc::Rc;

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::config;
use crate::contact::form::{ContactAction, ContactFields};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("submission failed: {reason}")]
pub struct SubmitError {
    reason: String,
}

impl SubmitError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("could not encode contact form: {}", e))
    }
}

/// Delivers a validated contact form somewhere.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, fields: ContactFields) -> Result<(), SubmitError>;
}

/// JSON body of a contact submission.
pub fn encode_payload(fields: &ContactFields) -> Result<String, SubmitError> {
    Ok(serde_json::to_string(fields)?)
}

/// Stand-in for a real contact endpoint: waits, then logs the payload.
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(config::SUBMIT_DELAY_MS)
    }
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, fields: ContactFields) -> Result<(), SubmitError> {
        TimeoutFuture::new(self.delay_ms).await;
        let payload = encode_payload(&fields)?;
        gloo_console::log!("Form submitted:", payload);
        Ok(())
    }
}

/// Shared submitter passed down as a component property.
#[derive(Clone)]
pub struct SubmitterHandle(Rc<dyn Submitter>);

impl SubmitterHandle {
    pub fn new(submitter: impl Submitter + 'static) -> Self {
        Self(Rc::new(submitter))
    }

    pub fn simulated() -> Self {
        Self::new(SimulatedSubmitter::default())
    }
}

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Runs submission `attempt` to completion and returns the action that
/// records its outcome on the form.
pub async fn deliver(submitter: SubmitterHandle, attempt: u32, fields: ContactFields) -> ContactAction {
    let outcome = submitter.0.submit(fields).await;
    match &outcome {
        Ok(()) => log::info!("Contact form submission #{} delivered", attempt),
        Err(e) => log::warn!("Contact form submission #{} not delivered: {}", attempt, e.reason()),
    }
    ContactAction::Completed { attempt, outcome }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::contact::form::{ContactForm, Field, SubmissionStatus};

    #[derive(Default)]
    struct Recording {
        received: Rc<RefCell<Vec<ContactFields>>>,
        fail_with: Option<&'static str>,
    }

    #[async_trait(?Send)]
    impl Submitter for Recording {
        async fn submit(&self, fields: ContactFields) -> Result<(), SubmitError> {
            self.received.borrow_mut().push(fields);
            match self.fail_with {
                Some(reason) => Err(SubmitError::new(reason)),
                None => Ok(()),
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(ContactAction::Edit(Field::Name, "Jane Doe".into()));
        form.apply(ContactAction::Edit(Field::Email, "jane@example.com".into()));
        form.apply(ContactAction::Edit(Field::ProjectType, "webapp".into()));
        form.apply(ContactAction::Edit(Field::Message, "I need a new web application built.".into()));
        form
    }

    // Mirrors the component: submit, then deliver whatever is in flight.
    fn run(form: &mut ContactForm, submitter: &SubmitterHandle) -> Vec<SubmissionStatus> {
        let mut statuses = Vec::new();
        form.apply(ContactAction::Submit);
        statuses.push(form.status());
        if let Some((attempt, fields)) = form.in_flight() {
            let completed = block_on(deliver(submitter.clone(), attempt, fields));
            form.apply(completed);
            statuses.push(form.status());
        }
        statuses
    }

    #[test]
    fn valid_submission_reaches_success_and_resets_fields() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let submitter = SubmitterHandle::new(Recording {
            received: received.clone(),
            fail_with: None,
        });
        let mut form = filled_form();

        let statuses = run(&mut form, &submitter);

        assert_eq!(statuses, vec![SubmissionStatus::Submitting, SubmissionStatus::Success]);
        assert_eq!(form.fields(), &ContactFields::default());
        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].email, "jane@example.com");
    }

    #[test]
    fn invalid_submission_never_reaches_the_submitter() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let submitter = SubmitterHandle::new(Recording {
            received: received.clone(),
            fail_with: None,
        });
        let mut form = filled_form();
        form.apply(ContactAction::Edit(Field::Name, "A".into()));

        let statuses = run(&mut form, &submitter);

        assert_eq!(statuses, vec![SubmissionStatus::Idle]);
        assert!(received.borrow().is_empty());
        assert_eq!(form.visible_error(Field::Name), Some("Name must be at least 2 characters."));
    }

    #[test]
    fn failed_submission_surfaces_error_and_allows_manual_retry() {
        let failing = SubmitterHandle::new(Recording {
            fail_with: Some("connection reset"),
            ..Default::default()
        });
        let mut form = filled_form();

        assert_eq!(run(&mut form, &failing), vec![SubmissionStatus::Submitting, SubmissionStatus::Error]);
        assert_eq!(form.fields().name, "Jane Doe");

        let working = SubmitterHandle::new(Recording::default());
        assert_eq!(run(&mut form, &working), vec![SubmissionStatus::Submitting, SubmissionStatus::Success]);
    }

    #[test]
    fn one_submission_in_flight_at_a_time() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let submitter = SubmitterHandle::new(Recording {
            received: received.clone(),
            fail_with: None,
        });
        let mut form = filled_form();
        form.apply(ContactAction::Submit);
        let (attempt, fields) = form.in_flight().unwrap();

        form.apply(ContactAction::Submit);
        assert_eq!(form.in_flight().map(|(current, _)| current), Some(attempt));

        form.apply(block_on(deliver(submitter, attempt, fields)));
        assert_eq!(received.borrow().len(), 1);
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn encoding_failures_convert_into_submit_errors() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = SubmitError::from(json_error);
        assert!(error.reason().starts_with("could not encode contact form"));
        assert!(error.to_string().starts_with("submission failed: "));
    }

    #[test]
    fn simulated_submitter_waits_one_and_a_half_seconds() {
        assert_eq!(config::SUBMIT_DELAY_MS, 1_500);
        assert_eq!(SimulatedSubmitter::default().delay_ms, config::SUBMIT_DELAY_MS);
        assert_eq!(SimulatedSubmitter::new(10).delay_ms, 10);
    }

    #[test]
    fn payload_is_camel_case_json_of_the_fields() {
        let mut form = filled_form();
        form.apply(ContactAction::Submit);
        let (_, fields) = form.in_flight().unwrap();

        let payload = encode_payload(&fields).unwrap();
        let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "projectType": "webapp",
                "message": "I need a new web application built.",
            })
        );
    }

    #[test]
    fn handles_compare_by_identity() {
        let first = SubmitterHandle::simulated();
        assert!(first == first.clone());
        assert!(first != SubmitterHandle::simulated());
    }
}
