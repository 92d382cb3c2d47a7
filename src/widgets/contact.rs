use serde::Deserialize;

pub const PENDING_LABEL: &str = "Sending...";
pub const SENT_LABEL: &str = "Sent!";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const REJECTED_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";
pub const TRANSPORT_MESSAGE: &str =
    "Something went wrong while sending your message. Please check your connection and try again.";

#[derive(Clone, Debug, Deserialize)]
pub struct ContactResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitFailure {
    Transport,
    // Body was not the expected JSON.
    Decode,
    Rejected,
}

impl SubmitFailure {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Decode => "decode",
            Self::Rejected => "rejected",
        }
    }

    pub fn user_message(self) -> &'static str {
        match self {
            Self::Transport | Self::Decode => TRANSPORT_MESSAGE,
            Self::Rejected => REJECTED_MESSAGE,
        }
    }
}

pub fn classify(response: &ContactResponse) -> Result<String, SubmitFailure> {
    if response.status != "success" {
        return Err(SubmitFailure::Rejected);
    }

    let message = response.message.trim();
    if message.is_empty() {
        Ok(DEFAULT_SUCCESS_MESSAGE.to_string())
    } else {
        Ok(message.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum FormPhase {
    Idle,
    Submitting { original_label: String },
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitLabel {
    Text(String),
    // Restored verbatim as inner HTML so icons and spacing survive.
    Markup(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormView {
    pub submit_disabled: bool,
    pub submit_label: SubmitLabel,
    pub status: Option<(StatusKind, String)>,
    pub reset_fields: bool,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    phase: FormPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Idle,
        }
    }

    // `None` while a request is in flight or after a success.
    pub fn begin(&mut self, current_label_html: &str) -> Option<FormView> {
        match self.phase {
            FormPhase::Submitting { .. } | FormPhase::Succeeded => return None,
            FormPhase::Idle | FormPhase::Failed => {}
        }

        self.phase = FormPhase::Submitting {
            original_label: current_label_html.to_string(),
        };
        Some(FormView {
            submit_disabled: true,
            submit_label: SubmitLabel::Text(PENDING_LABEL.to_string()),
            status: None,
            reset_fields: false,
        })
    }

    pub fn finish(&mut self, outcome: Result<String, SubmitFailure>) -> FormView {
        let original_label = match std::mem::replace(&mut self.phase, FormPhase::Idle) {
            FormPhase::Submitting { original_label } => original_label,
            _ => String::new(),
        };

        match outcome {
            Ok(message) => {
                self.phase = FormPhase::Succeeded;
                FormView {
                    submit_disabled: true,
                    submit_label: SubmitLabel::Text(SENT_LABEL.to_string()),
                    status: Some((StatusKind::Success, message)),
                    reset_fields: true,
                }
            }
            Err(failure) => {
                self.phase = FormPhase::Failed;
                FormView {
                    submit_disabled: false,
                    submit_label: SubmitLabel::Markup(original_label),
                    status: Some((StatusKind::Error, failure.user_message().to_string())),
                    reset_fields: false,
                }
            }
        }
    }
}
