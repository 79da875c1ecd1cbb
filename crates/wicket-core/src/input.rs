use serde::{Deserialize, Serialize};

/// A single text field fed through a normalizer on every edit.
///
/// Keeps the raw text as typed next to the normalized digit string, plus
/// the field-local error produced by a failed submit. Editing the field
/// clears any stale error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    raw: String,
    digits: String,
    error: Option<String>,
}

impl InputField {
    pub fn edit(&mut self, raw: &str, normalizer: fn(&str) -> String) {
        self.raw = raw.to_string();
        self.digits = normalizer(raw);
        self.error = None;
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
