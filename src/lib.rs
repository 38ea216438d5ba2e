pub mod config;
pub mod effects;
pub mod hooks;

pub mod contact {
    pub mod controller;
    pub mod form;
    pub mod phone;
    pub mod state;
    pub mod timer;
    pub mod validation;

    pub use controller::{FormSink, FormSubmissionController, ReentryPolicy, SubmitOutcome};
    pub use form::{ContactForm, Field, REQUIRED_FIELDS};
    pub use phone::format_phone_number;
    pub use state::{FormAction, FormState, MessageKind, StatusMessage, SubmissionStatus};
    pub use timer::{BrowserTimer, Timer};
    pub use validation::{is_valid_email, validate, ValidationError};
}

pub mod components {
    pub mod contact_section;
    pub mod counter;
    pub mod press_link;
    pub mod reveal;
    pub mod safe_img;
    pub mod scroll_indicator;
}

pub mod pages {
    pub mod home;
}
