//! Accessible description of a rendered field.
//!
//! The terminal has no DOM, so each component reports the ids, roles and ARIA
//! state it would expose. Screen-reader bridges and tests read this instead of
//! scraping the drawn buffer.

/// Error message region shown under an invalid field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRegion {
    pub id: String,
    pub role: &'static str,
    pub message: String,
}

/// Suggestion list attached to a combobox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listbox {
    pub id: String,
    pub role: &'static str,
    pub hidden: bool,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accessibility {
    pub container_class: String,
    pub label_for: String,
    pub label_text: String,
    pub input_id: String,
    pub input_name: String,
    pub role: Option<&'static str>,
    /// ARIA attributes in the order they would appear on the input
    pub aria: Vec<(&'static str, String)>,
    pub error_region: Option<ErrorRegion>,
    pub listbox: Option<Listbox>,
}

impl Accessibility {
    pub fn aria(&self, name: &str) -> Option<&str> {
        self.aria.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    pub fn set_aria(&mut self, name: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.aria.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.aria.push((name, value)),
        }
    }
}

/// Id of the error region for `field_key`
pub fn error_message_id(field_key: &str) -> String {
    format!("{field_key}-errorMsg-id")
}

pub fn bool_attr(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}
