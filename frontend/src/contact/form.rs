use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use yew::functional::Reducible;

use crate::contact::submit::SubmitError;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
            .expect("email pattern compiles");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    ProjectType,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectType {
    Website,
    Webapp,
    Ecommerce,
    Branding,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Website,
        ProjectType::Webapp,
        ProjectType::Ecommerce,
        ProjectType::Branding,
        ProjectType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ProjectType::Website => "website",
            ProjectType::Webapp => "webapp",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Branding => "branding",
            ProjectType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Website => "Website Design",
            ProjectType::Webapp => "Web Application",
            ProjectType::Ecommerce => "E-Commerce",
            ProjectType::Branding => "Branding & Design",
            ProjectType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::ProjectType => &self.project_type,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::ProjectType => self.project_type = value,
            Field::Message => self.message = value,
        }
    }
}

struct FieldRule {
    field: Field,
    check: fn(&str) -> bool,
    message: &'static str,
}

fn min_chars<const N: usize>(value: &str) -> bool {
    value.chars().count() >= N
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn is_project_type(value: &str) -> bool {
    ProjectType::from_value(value).is_some()
}

const RULES: [FieldRule; 4] = [
    FieldRule {
        field: Field::Name,
        check: min_chars::<2>,
        message: "Name must be at least 2 characters.",
    },
    FieldRule {
        field: Field::Email,
        check: is_email,
        message: "Please enter a valid email address.",
    },
    FieldRule {
        field: Field::ProjectType,
        check: is_project_type,
        message: "Please select a project type.",
    },
    FieldRule {
        field: Field::Message,
        check: min_chars::<10>,
        message: "Message must be at least 10 characters.",
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(failed, _)| *failed == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn validate(fields: &ContactFields) -> FieldErrors {
    FieldErrors(
        RULES
            .iter()
            .filter(|rule| !(rule.check)(fields.get(rule.field)))
            .map(|rule| (rule.field, rule.message))
            .collect(),
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

pub enum ContactAction {
    Edit(Field, String),
    Submit,
    Completed {
        attempt: u32,
        outcome: Result<(), SubmitError>,
    },
    DismissBanner,
}

/// Field values and submission lifecycle of the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    show_errors: bool,
    attempt: u32,
    /// Validated snapshot handed to the submitter for `attempt`.
    pending: Option<ContactFields>,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    pub fn errors(&self) -> FieldErrors {
        validate(&self.fields)
    }

    /// Messages stay hidden until the first submit attempt, then track every edit.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.show_errors {
            return None;
        }
        self.errors().get(field)
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    /// Validates and snapshots the fields, returning the new attempt number.
    pub fn begin_submit(&mut self) -> Result<u32, SubmitRejected> {
        if self.status == SubmissionStatus::Submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        let errors = self.errors();
        if !errors.is_empty() {
            self.show_errors = true;
            return Err(SubmitRejected::Invalid(errors));
        }
        self.attempt += 1;
        self.status = SubmissionStatus::Submitting;
        self.pending = Some(self.fields.clone());
        log::info!("Contact form submission #{} started", self.attempt);
        Ok(self.attempt)
    }

    /// Applies the outcome of submission `attempt`. Stale or unexpected
    /// completions are dropped and reported as `false`.
    pub fn complete(&mut self, attempt: u32, outcome: Result<(), SubmitError>) -> bool {
        if self.status != SubmissionStatus::Submitting || attempt != self.attempt {
            log::warn!(
                "Dropping completion of submission #{} (current #{}, status {:?})",
                attempt,
                self.attempt,
                self.status
            );
            return false;
        }
        self.pending = None;
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.fields = ContactFields::default();
                self.show_errors = false;
            }
            Err(e) => {
                log::error!("Contact form submission #{} failed: {}", attempt, e);
                self.status = SubmissionStatus::Error;
            }
        }
        true
    }

    pub fn dismiss_banner(&mut self) {
        if matches!(self.status, SubmissionStatus::Success | SubmissionStatus::Error) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Payload of the submission currently in flight, if any.
    pub fn in_flight(&self) -> Option<(u32, ContactFields)> {
        self.pending.clone().map(|fields| (self.attempt, fields))
    }

    pub fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => self.edit(field, value),
            ContactAction::Submit => {
                if let Err(rejected) = self.begin_submit() {
                    log::info!("Contact form submission rejected: {}", rejected);
                }
            }
            ContactAction::Completed { attempt, outcome } => {
                self.complete(attempt, outcome);
            }
            ContactAction::DismissBanner => self.dismiss_banner(),
        }
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::ProjectType, Field::Message];

    fn jane() -> ContactFields {
        ContactFields {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            project_type: "webapp".to_string(),
            message: "I need a new web application built.".to_string(),
        }
    }

    fn form_with(fields: ContactFields) -> ContactForm {
        let mut form = ContactForm::default();
        for field in FIELDS {
            form.edit(field, fields.get(field).to_string());
        }
        form
    }

    #[test]
    fn valid_fields_pass_every_rule() {
        assert!(validate(&jane()).is_empty());
    }

    #[test]
    fn each_violation_reports_its_message() {
        let cases = [
            (Field::Name, "A", "Name must be at least 2 characters."),
            (Field::Email, "not-an-email", "Please enter a valid email address."),
            (Field::ProjectType, "", "Please select a project type."),
            (Field::Message, "short", "Message must be at least 10 characters."),
        ];
        for (field, value, message) in cases {
            let mut fields = jane();
            fields.set(field, value.to_string());
            let errors = validate(&fields);
            assert_eq!(errors.len(), 1, "{:?}", field);
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn all_four_violations_are_reported_together() {
        let fields = ContactFields {
            name: "A".into(),
            email: "not-an-email".into(),
            project_type: String::new(),
            message: "short".into(),
        };
        let errors = validate(&fields);
        assert_eq!(errors.len(), 4);
        for field in FIELDS {
            assert!(errors.get(field).is_some());
        }
    }

    #[test]
    fn email_shapes() {
        for good in ["jane@example.com", "j.doe+news@mail.example.co.uk", "o'neil@example.io"] {
            assert!(EMAIL_RE.is_match(good), "{}", good);
        }
        for bad in ["not-an-email", "jane@", "@example.com", "jane@example", "jane..doe@example.com", "jane doe@example.com", ""] {
            assert!(!EMAIL_RE.is_match(bad), "{}", bad);
        }
    }

    #[test]
    fn project_type_must_come_from_the_fixed_set() {
        for kind in ProjectType::ALL {
            assert_eq!(ProjectType::from_value(kind.value()), Some(kind));
        }
        let mut fields = jane();
        fields.project_type = "Webapp".into();
        assert_eq!(validate(&fields).get(Field::ProjectType), Some("Please select a project type."));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut fields = jane();
        fields.name = "Zoë".into();
        assert!(validate(&fields).is_empty());
        fields.name = "é".into();
        assert!(validate(&fields).get(Field::Name).is_some());
    }

    #[test]
    fn short_name_rejects_submission_and_stays_idle() {
        let mut form = form_with(ContactFields { name: "A".into(), ..jane() });
        assert_eq!(form.visible_error(Field::Name), None);

        let rejected = form.begin_submit().unwrap_err();
        assert!(matches!(rejected, SubmitRejected::Invalid(_)));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.attempt(), 0);
        assert_eq!(form.visible_error(Field::Name), Some("Name must be at least 2 characters."));
        assert_eq!(form.visible_error(Field::Email), None);
    }

    #[test]
    fn correcting_fields_clears_messages_on_edit() {
        let mut form = form_with(ContactFields::default());
        assert!(form.begin_submit().is_err());
        assert_eq!(form.visible_error(Field::Message), Some("Message must be at least 10 characters."));

        for field in FIELDS {
            form.edit(field, jane().get(field).to_string());
        }
        for field in FIELDS {
            assert_eq!(form.visible_error(field), None);
        }
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn successful_submission_clears_every_field() {
        let mut form = form_with(jane());
        let mut statuses = Vec::new();

        let attempt = form.begin_submit().unwrap();
        statuses.push(form.status());
        assert_eq!(form.in_flight(), Some((attempt, jane())));

        assert!(form.complete(form.attempt(), Ok(())));
        statuses.push(form.status());

        assert_eq!(statuses, vec![SubmissionStatus::Submitting, SubmissionStatus::Success]);
        assert_eq!(form.fields(), &ContactFields::default());
        assert_eq!(form.in_flight(), None);
        assert_eq!(form.fields().get(Field::ProjectType), "");
        assert_eq!(form.visible_error(Field::Name), None);
    }

    #[test]
    fn resubmitting_while_in_flight_has_no_effect() {
        let mut form = form_with(jane());
        form.begin_submit().unwrap();
        let before = form.clone();

        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
        form.apply(ContactAction::Submit);
        assert_eq!(form, before);
        assert_eq!(form.attempt(), 1);
    }

    #[test]
    fn edits_during_flight_do_not_change_the_delivered_snapshot() {
        let mut form = form_with(jane());
        let attempt = form.begin_submit().unwrap();
        form.apply(ContactAction::Edit(Field::Name, "A".into()));

        assert_eq!(form.in_flight(), Some((attempt, jane())));
        assert_eq!(form.fields().name, "A");

        assert!(form.complete(attempt, Err(SubmitError::new("timeout"))));
        assert_eq!(form.in_flight(), None);
        assert_eq!(form.fields().name, "A");
    }

    #[test]
    fn failure_keeps_fields_for_another_try() {
        let mut form = form_with(jane());
        form.begin_submit().unwrap();
        assert!(form.complete(1, Err(SubmitError::new("backend unavailable"))));
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields(), &jane());

        form.begin_submit().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(form.attempt(), 2);
    }

    #[test]
    fn stale_completions_are_dropped() {
        let mut form = form_with(jane());
        assert!(!form.complete(0, Ok(())));
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.begin_submit().unwrap();
        assert!(!form.complete(7, Ok(())));
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(form.fields(), &jane());
    }

    #[test]
    fn dismissing_banner_returns_to_idle() {
        let mut form = form_with(jane());
        form.dismiss_banner();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.begin_submit().unwrap();
        form.dismiss_banner();
        assert_eq!(form.status(), SubmissionStatus::Submitting);

        form.complete(1, Ok(()));
        form.apply(ContactAction::DismissBanner);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn success_can_be_followed_by_a_new_submission() {
        let mut form = form_with(jane());
        form.begin_submit().unwrap();
        form.complete(1, Ok(()));

        assert!(matches!(form.begin_submit(), Err(SubmitRejected::Invalid(_))));
        assert_eq!(form.status(), SubmissionStatus::Success);

        for field in FIELDS {
            form.apply(ContactAction::Edit(field, jane().get(field).to_string()));
        }
        form.apply(ContactAction::Submit);
        assert_eq!(form.in_flight(), Some((2, jane())));
    }
}
