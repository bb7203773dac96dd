//! Field names, values and validation error records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every field of the registration form, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Username,
    Email,
    Password,
    PasswordConfirm,
    Place,
    State,
    AgeRange,
    AccountType,
    Dob,
    ExpectedDate,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::PasswordConfirm,
        FieldName::Place,
        FieldName::State,
        FieldName::AgeRange,
        FieldName::AccountType,
        FieldName::Dob,
        FieldName::ExpectedDate,
    ];

    /// Stable key used in generated ids and serialized values
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Username => "username",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::PasswordConfirm => "passwordConfirm",
            FieldName::Place => "place",
            FieldName::State => "state",
            FieldName::AgeRange => "ageRange",
            FieldName::AccountType => "accountType",
            FieldName::Dob => "dob",
            FieldName::ExpectedDate => "expectedDate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.key() == key)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One failed validation rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub is_error: bool,
    pub error_msg: String,
}

impl FieldError {
    pub fn new(error_msg: impl Into<String>) -> Self {
        Self {
            is_error: true,
            error_msg: error_msg.into(),
        }
    }
}

/// Current value of a field plus the errors recorded against it.
///
/// `errors` stays empty until a validation rule fires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub value: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl FieldValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            errors: Vec::new(),
        }
    }

    /// The `{ value: "", errors: [] }` placeholder used for missing fields
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Text content, treating a missing value as empty
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.text().is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Snapshot of the whole form; absent entries are fields the user never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormInputValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_confirm: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_range: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<FieldValue>,
}

impl FormInputValues {
    pub fn get(&self, name: FieldName) -> Option<&FieldValue> {
        self.slot(name).as_ref()
    }

    pub fn set(&mut self, name: FieldName, value: FieldValue) {
        *self.slot_mut(name) = Some(value);
    }

    fn slot(&self, name: FieldName) -> &Option<FieldValue> {
        match name {
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::PasswordConfirm => &self.password_confirm,
            FieldName::Place => &self.place,
            FieldName::State => &self.state,
            FieldName::AgeRange => &self.age_range,
            FieldName::AccountType => &self.account_type,
            FieldName::Dob => &self.dob,
            FieldName::ExpectedDate => &self.expected_date,
        }
    }

    fn slot_mut(&mut self, name: FieldName) -> &mut Option<FieldValue> {
        match name {
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::PasswordConfirm => &mut self.password_confirm,
            FieldName::Place => &mut self.place,
            FieldName::State => &mut self.state,
            FieldName::AgeRange => &mut self.age_range,
            FieldName::AccountType => &mut self.account_type,
            FieldName::Dob => &mut self.dob,
            FieldName::ExpectedDate => &mut self.expected_date,
        }
    }
}
