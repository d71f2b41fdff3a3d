use crate::{helpers::dto::ModerationResult, image::ImageFile};

#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    pub token: String,
    pub file: Option<ImageFile>,
}

/// What the session currently shows. A result and an error never coexist.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Pending,
    Displaying(ModerationResult),
    Errored(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SubmitStarted,
    Succeeded(ModerationResult),
    Failed(String),
    FileSelected,
    Cancelled,
}

impl SessionInput {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }
}

impl ViewState {
    pub fn is_pending(&self) -> bool {
        matches!(self, ViewState::Pending)
    }

    pub fn result(&self) -> Option<&ModerationResult> {
        match self {
            ViewState::Displaying(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Errored(message) => Some(message),
            _ => None,
        }
    }
}
