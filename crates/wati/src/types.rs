//! Message payloads for the WATI API.

use serde::Serialize;

/// MIME type used for session file uploads.
pub const PDF_MIME: &str = "application/pdf";

/// An interactive message with reply buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractiveButtonsMessage {
    /// Message text.
    pub body: String,
    /// Reply buttons shown under the text.
    pub buttons: Vec<Button>,
    /// Small print under the buttons.
    pub footer: String,
}

impl InteractiveButtonsMessage {
    /// Create a message with no buttons.
    pub fn new(body: impl Into<String>, footer: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            buttons: Vec::new(),
            footer: footer.into(),
        }
    }

    /// Add a reply button.
    pub fn with_button(mut self, text: impl Into<String>) -> Self {
        self.buttons.push(Button { text: text.into() });
        self
    }
}

/// A reply button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Button {
    /// Button label.
    pub text: String,
}
