//! Shared form state handed down to every field component.

use super::field::{FieldError, FieldName, FieldValue, FormInputValues};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("field '{0}' is not part of this form")]
    UnknownField(FieldName),
}

/// Field values keyed by name. The key set is fixed when the context is built.
#[derive(Debug, Clone, Default)]
pub struct FormContext {
    fields: BTreeMap<FieldName, FieldValue>,
}

impl FormContext {
    pub fn new(fields: &[FieldName]) -> Self {
        Self {
            fields: fields.iter().map(|name| (*name, FieldValue::default())).collect(),
        }
    }

    /// Context declaring every registration field
    pub fn registration() -> Self {
        Self::new(&FieldName::ALL)
    }

    pub fn get_value(&self, name: FieldName) -> Option<&FieldValue> {
        self.fields.get(&name)
    }

    /// Replace a field's value. Recorded errors are left as they are.
    pub fn set_value(&mut self, name: FieldName, value: Option<String>) -> Result<(), FormError> {
        let field = self.fields.get_mut(&name).ok_or(FormError::UnknownField(name))?;
        log::debug!("set {} = {:?}", name, value.as_deref().map(|v| v.len()));
        field.value = value;
        Ok(())
    }

    /// The error to display for a field: the most recent one recorded
    pub fn get_error(errors: &[FieldError]) -> Option<&FieldError> {
        errors.last()
    }

    /// Error currently displayed for `name`, if any
    pub fn field_error(&self, name: FieldName) -> Option<&FieldError> {
        self.get_value(name)
            .and_then(|field| Self::get_error(&field.errors))
            .filter(|err| err.is_error)
    }

    pub fn set_errors(&mut self, name: FieldName, errors: Vec<FieldError>) -> Result<(), FormError> {
        let field = self.fields.get_mut(&name).ok_or(FormError::UnknownField(name))?;
        field.errors = errors;
        Ok(())
    }

    pub fn clear_errors(&mut self) {
        for field in self.fields.values_mut() {
            field.errors.clear();
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.values().any(FieldValue::has_errors)
    }

    pub fn declared_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.keys().copied()
    }

    /// Snapshot of every declared field, for building a model at submit time
    pub fn input_values(&self) -> FormInputValues {
        let mut values = FormInputValues::default();
        for (name, field) in &self.fields {
            values.set(*name, field.clone());
        }
        values
    }

    /// Replace each declared field's errors with the ones in `values`.
    ///
    /// Fields absent from `values` end up with no errors.
    pub fn apply_errors(&mut self, values: &FormInputValues) {
        for (name, field) in self.fields.iter_mut() {
            field.errors = values.get(*name).map(|v| v.errors.clone()).unwrap_or_default();
        }
    }
}
