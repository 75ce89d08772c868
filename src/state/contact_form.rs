use std::fmt;
use std::rc::Rc;

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    ProjectDescription,
    Budget,
}

impl Field {
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::ProjectDescription];

    /// Maps an input's `name` attribute to a field.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "company" => Some(Field::Company),
            "projectDescription" => Some(Field::ProjectDescription),
            "budget" => Some(Field::Budget),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::ProjectDescription => "projectDescription",
            Field::Budget => "budget",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Company => "Company",
            Field::ProjectDescription => "Project Description",
            Field::Budget => "Budget Range",
        }
    }

    pub fn is_required(self) -> bool {
        Field::REQUIRED.contains(&self)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_description: String,
    pub budget: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::ProjectDescription => &self.project_description,
            Field::Budget => &self.budget,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::ProjectDescription => &mut self.project_description,
            Field::Budget => &mut self.budget,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FormState::default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Editing,
    Submitted,
    Failed(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("a submission is already being acknowledged")]
    AlreadySubmitted,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    state: FormState,
    status: FormStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            state: FormState::default(),
            status: FormStatus::Editing,
        }
    }
}

impl ContactForm {
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitted(&self) -> bool {
        self.status == FormStatus::Submitted
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.state.slot(field) = value.into();
        if let FormStatus::Failed(_) = self.status {
            self.status = FormStatus::Editing;
        }
    }

    /// Whitespace-only values count as empty.
    pub fn validate(&self) -> Result<(), FormError> {
        match Field::REQUIRED
            .iter()
            .find(|field| self.state.get(**field).trim().is_empty())
        {
            Some(field) => Err(FormError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Simulated submission: no request is made. The caller schedules
    /// `finish` after the acknowledgement delay.
    pub fn submit(&mut self) -> Result<(), FormError> {
        if self.is_submitted() {
            return Err(FormError::AlreadySubmitted);
        }
        self.validate()?;
        self.status = FormStatus::Submitted;
        Ok(())
    }

    /// Ends the acknowledgement and starts over with an empty form.
    pub fn finish(&mut self) {
        *self = ContactForm::default();
    }

    /// Records a failed delivery. The entered values stay so the user can retry.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = FormStatus::Failed(message.into());
    }

    /// Request body a real backend integration would send.
    pub fn payload(&self) -> Value {
        json!({ "contact": self.state })
    }
}

pub enum FormAction {
    SetField(Field, String),
    Submit,
    Finish,
    /// Dispatched by a real delivery backend when sending fails.
    #[allow(dead_code)]
    Fail(String),
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetField(field, value) => next.set_field(field, value),
            FormAction::Submit => {
                if next.submit().is_err() {
                    return self;
                }
            }
            FormAction::Finish => next.finish(),
            FormAction::Fail(message) => next.fail(message),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field(Field::Name, "Ana");
        form.set_field(Field::Email, "ana@x.com");
        form.set_field(Field::ProjectDescription, "Build a site");
        form
    }

    #[test]
    fn set_field_touches_only_that_field() {
        let mut form = filled();
        form.set_field(Field::Company, "Acme");
        assert_eq!(form.state().company, "Acme");
        assert_eq!(form.state().name, "Ana");
        assert_eq!(form.state().phone, "");
    }

    #[test]
    fn submit_then_finish_resets() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(()));
        assert_eq!(form.status(), &FormStatus::Submitted);
        assert_eq!(form.state().name, "Ana");

        form.finish();
        assert_eq!(form.status(), &FormStatus::Editing);
        assert!(form.state().is_empty());
    }

    #[test]
    fn empty_name_blocks_submission() {
        let mut form = filled();
        form.set_field(Field::Name, "");
        assert_eq!(form.submit(), Err(FormError::MissingField(Field::Name)));
        assert_eq!(form.status(), &FormStatus::Editing);
        assert_eq!(form.state().email, "ana@x.com");
    }

    #[test]
    fn blank_description_blocks_submission() {
        let mut form = filled();
        form.set_field(Field::ProjectDescription, "   ");
        assert_eq!(
            form.submit(),
            Err(FormError::MissingField(Field::ProjectDescription))
        );
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut form = filled();
        form.submit().unwrap();
        assert_eq!(form.submit(), Err(FormError::AlreadySubmitted));
    }

    #[test]
    fn failure_keeps_input_and_editing_clears_it() {
        let mut form = filled();
        form.submit().unwrap();
        form.fail("network down");
        assert_eq!(form.status(), &FormStatus::Failed("network down".into()));
        assert_eq!(form.state().project_description, "Build a site");

        form.set_field(Field::Phone, "555");
        assert_eq!(form.status(), &FormStatus::Editing);
        assert_eq!(form.submit(), Ok(()));
    }

    #[test]
    fn field_names_round_trip() {
        for field in [
            Field::Name,
            Field::Email,
            Field::Phone,
            Field::Company,
            Field::ProjectDescription,
            Field::Budget,
        ] {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("message"), None);
    }

    #[test]
    fn error_message_names_the_field() {
        assert_eq!(
            FormError::MissingField(Field::Email).to_string(),
            "Email Address is required"
        );
    }

    #[test]
    fn reducer_ignores_invalid_submit() {
        let state = Rc::new(ContactForm::default());
        let after = state.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&state, &after));

        let state = Rc::new(filled()).reduce(FormAction::Submit);
        assert!(state.is_submitted());
        let state = state.reduce(FormAction::Finish);
        assert_eq!(*state, ContactForm::default());
    }

    #[test]
    fn reducer_failure_keeps_input() {
        let state = Rc::new(filled())
            .reduce(FormAction::Submit)
            .reduce(FormAction::Fail("timeout".into()));
        assert_eq!(state.status(), &FormStatus::Failed("timeout".into()));
        assert_eq!(state.state().name, "Ana");
    }

    #[test]
    fn payload_uses_input_names() {
        let payload = filled().payload();
        assert_eq!(payload["contact"]["projectDescription"], "Build a site");
        assert_eq!(payload["contact"]["budget"], "");
    }
}
