use crate::form::FieldName;

/// Configuration every field component is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProps {
    /// Owning component name, used to namespace generated ids and classes
    pub component_name: String,
    /// Field the component's value lives under in the form context
    pub input_for: FieldName,
    pub label_text: String,
}

impl FieldProps {
    pub fn new(component_name: impl Into<String>, input_for: FieldName, label_text: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            input_for,
            label_text: label_text.into(),
        }
    }

    pub fn field_key(&self) -> &'static str {
        self.input_for.key()
    }
}
