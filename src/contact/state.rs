use std::rc::Rc;

use yew::functional::Reducible;

use super::form::{ContactForm, Field};
use super::validation::ValidationError;
use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success() -> Self {
        Self {
            text: format!(
                "მადლობა თქვენი შეტყობინებისთვის! გთხოვთ დარეკეთ: {}",
                config::CONTACT_PHONE
            ),
            kind: MessageKind::Success,
        }
    }

    pub fn error(error: ValidationError) -> Self {
        Self {
            text: error.user_message().to_string(),
            kind: MessageKind::Error,
        }
    }
}

/// Everything one change to the contact form can do.
///
/// Outcome actions carry the attempt they belong to; the state drops the ones
/// whose attempt has been superseded.
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    SetBusy(bool),
    Begin { attempt: u64 },
    Submitting { attempt: u64 },
    Rejected { attempt: u64, error: ValidationError },
    Accepted { attempt: u64 },
    Reveal { attempt: u64 },
    Hide { attempt: u64 },
}

/// View-model of the contact form, rendered by `ContactSection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub fields: ContactForm,
    pub status: SubmissionStatus,
    pub message: Option<StatusMessage>,
    /// False while the message sits at its pre-fade position.
    pub revealed: bool,
    pub busy: bool,
    pub attempt: u64,
}

impl FormState {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => self.fields.set(field, value),
            FormAction::SetBusy(busy) => self.busy = busy,
            FormAction::Begin { attempt } => {
                self.attempt = attempt;
                self.status = SubmissionStatus::Validating;
                self.message = None;
                self.revealed = false;
            }
            FormAction::Submitting { attempt } if attempt == self.attempt => {
                self.status = SubmissionStatus::Submitting;
            }
            FormAction::Rejected { attempt, error } if attempt == self.attempt => {
                self.status = SubmissionStatus::Failed;
                self.message = Some(StatusMessage::error(error));
                self.revealed = false;
            }
            FormAction::Accepted { attempt } if attempt == self.attempt => {
                self.status = SubmissionStatus::Success;
                self.message = Some(StatusMessage::success());
                self.revealed = false;
                self.fields = ContactForm::default();
            }
            FormAction::Reveal { attempt } if attempt == self.attempt => {
                self.revealed = self.message.is_some();
            }
            FormAction::Hide { attempt } if attempt == self.attempt => {
                self.status = SubmissionStatus::Idle;
                self.message = None;
                self.revealed = false;
            }
            stale => log::debug!("dropping superseded form action {:?}", stale),
        }
    }

    pub fn message_visible(&self) -> bool {
        self.message.is_some()
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}
