//! Transient user notifications.
//!
//! ERROR HANDLING
//! ==============
//! Every request failure ends here. `Notice::from_api_error` maps the
//! failure taxonomy onto short title/body pairs: one notice per server field
//! error, a message-bearing rejection, a generic rejection, or a connectivity
//! hint. Nothing is re-raised to the view.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use crate::net::error::ApiError;
use crate::state::property_form::Field;

/// How long a notice stays on screen in the browser.
pub const NOTICE_TTL_MS: u64 = 6_000;

pub const CONNECTIVITY_MESSAGE: &str = "No response from the server. Check your connection and try again.";
pub const REJECTED_MESSAGE: &str = "The server responded with an error.";
pub const MALFORMED_MESSAGE: &str = "The server returned data in an unexpected format.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
}

/// Follow-up offered alongside a notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeAction {
    /// Reload the whole page.
    Retry,
    /// Navigate to an in-app path.
    Navigate { label: String, path: String },
    /// Focus the input with this DOM id.
    FocusField(Field),
}

impl NoticeAction {
    pub fn label(&self) -> &str {
        match self {
            Self::Retry => "Retry",
            Self::Navigate { label, .. } => label,
            Self::FocusField(_) => "Go to field",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub tone: NoticeTone,
    pub title: String,
    pub body: String,
    pub action: Option<NoticeAction>,
}

impl Notice {
    fn new(tone: NoticeTone, title: &str, body: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            tone,
            title: title.to_owned(),
            body: body.into(),
            action: None,
        }
    }

    pub fn success(title: &str, body: impl Into<String>) -> Self {
        Self::new(NoticeTone::Success, title, body)
    }

    pub fn error(title: &str, body: impl Into<String>) -> Self {
        Self::new(NoticeTone::Error, title, body)
    }

    #[must_use]
    pub fn with_action(mut self, action: NoticeAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Notices describing a failed request.
    ///
    /// Field errors produce one notice each, with a focus action when the
    /// field is one the form knows.
    pub fn from_api_error(title: &str, err: &ApiError) -> Vec<Self> {
        match err {
            ApiError::Rejected { .. } if !err.field_errors().is_empty() => err
                .field_errors()
                .iter()
                .map(|fe| {
                    let field = fe.field.as_deref().and_then(Field::from_key);
                    let body = match (&fe.field, field) {
                        (_, Some(field)) => format!("{}: {}", field.label(), fe.message),
                        (Some(raw), None) => format!("{raw}: {}", fe.message),
                        (None, None) => fe.message.clone(),
                    };
                    let notice = Self::error(title, body);
                    match field {
                        Some(field) => notice.with_action(NoticeAction::FocusField(field)),
                        None => notice,
                    }
                })
                .collect(),
            ApiError::Rejected { status, .. } => {
                let body = match err.server_message() {
                    Some(message) => format!("{REJECTED_MESSAGE} {message}"),
                    None => format!("{REJECTED_MESSAGE} (status {status})"),
                };
                vec![Self::error(title, body)]
            }
            ApiError::Connectivity(_) => vec![Self::error(title, CONNECTIVITY_MESSAGE)],
            ApiError::Decode(_) => vec![Self::error(title, MALFORMED_MESSAGE)],
            ApiError::Unavailable => vec![Self::error(title, err.to_string())],
        }
    }
}

/// Stack of notices currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticesState {
    pub items: Vec<Notice>,
}

impl NoticesState {
    pub fn extend(&mut self, notices: impl IntoIterator<Item = Notice>) {
        self.items.extend(notices);
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}
