//! Registration model: two-phase validation of a submitted form.
//!
//! A model is built from a snapshot of the form on every submit, validated
//! once, and its errors are copied back into the shared [`FormContext`].

use super::context::FormContext;
use super::field::{FieldError, FieldName, FieldValue, FormInputValues};
use crate::constants::*;
use crate::utils::date::{self, FORM_DATE_LEN};
use chrono::NaiveDate;

/// How the presence phase reaches a field
pub struct FieldDescriptor {
    pub name: FieldName,
    pub required: bool,
    accessor: fn(&RegisterModel) -> &FieldValue,
    accessor_mut: fn(&mut RegisterModel) -> &mut FieldValue,
}

/// Fields checked by the presence phase, in declaration order
pub static REGISTRATION_FIELDS: [FieldDescriptor; 10] = [
    FieldDescriptor {
        name: FieldName::Username,
        required: true,
        accessor: |m| &m.username,
        accessor_mut: |m| &mut m.username,
    },
    FieldDescriptor {
        name: FieldName::Email,
        required: true,
        accessor: |m| &m.email,
        accessor_mut: |m| &mut m.email,
    },
    FieldDescriptor {
        name: FieldName::Password,
        required: true,
        accessor: |m| &m.password,
        accessor_mut: |m| &mut m.password,
    },
    FieldDescriptor {
        name: FieldName::PasswordConfirm,
        required: true,
        accessor: |m| &m.password_confirm,
        accessor_mut: |m| &mut m.password_confirm,
    },
    FieldDescriptor {
        name: FieldName::Place,
        required: true,
        accessor: |m| &m.place,
        accessor_mut: |m| &mut m.place,
    },
    FieldDescriptor {
        name: FieldName::State,
        required: true,
        accessor: |m| &m.state,
        accessor_mut: |m| &mut m.state,
    },
    FieldDescriptor {
        name: FieldName::AgeRange,
        required: true,
        accessor: |m| &m.age_range,
        accessor_mut: |m| &mut m.age_range,
    },
    FieldDescriptor {
        name: FieldName::AccountType,
        required: true,
        accessor: |m| &m.account_type,
        accessor_mut: |m| &mut m.account_type,
    },
    FieldDescriptor {
        name: FieldName::Dob,
        required: true,
        accessor: |m| &m.dob,
        accessor_mut: |m| &mut m.dob,
    },
    FieldDescriptor {
        name: FieldName::ExpectedDate,
        required: true,
        accessor: |m| &m.expected_date,
        accessor_mut: |m| &mut m.expected_date,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterModel {
    pub username: FieldValue,
    pub email: FieldValue,
    pub password: FieldValue,
    pub password_confirm: FieldValue,
    pub place: FieldValue,
    pub state: FieldValue,
    pub age_range: FieldValue,
    pub account_type: FieldValue,
    pub dob: FieldValue,
    pub expected_date: FieldValue,
}

impl RegisterModel {
    /// Build a model from a form snapshot; missing fields become `{ value: "", errors: [] }`.
    ///
    /// Only values are taken from the snapshot. Every field starts with no errors.
    pub fn new(input: FormInputValues) -> Self {
        let or_empty = |field: Option<FieldValue>| FieldValue {
            value: field.map_or_else(|| Some(String::new()), |f| f.value),
            errors: Vec::new(),
        };
        Self {
            username: or_empty(input.username),
            email: or_empty(input.email),
            password: or_empty(input.password),
            password_confirm: or_empty(input.password_confirm),
            place: or_empty(input.place),
            state: or_empty(input.state),
            age_range: or_empty(input.age_range),
            account_type: or_empty(input.account_type),
            dob: or_empty(input.dob),
            expected_date: or_empty(input.expected_date),
        }
    }

    pub fn field(&self, name: FieldName) -> &FieldValue {
        let descriptor = Self::descriptor(name);
        (descriptor.accessor)(self)
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FieldValue {
        let descriptor = Self::descriptor(name);
        (descriptor.accessor_mut)(self)
    }

    fn descriptor(name: FieldName) -> &'static FieldDescriptor {
        // REGISTRATION_FIELDS is indexed in FieldName declaration order
        &REGISTRATION_FIELDS[name as usize]
    }

    /// Run both validation phases against today's local date.
    ///
    /// Returns `true` if any field ended up with an error.
    pub fn validate(&mut self, valid_states: &[String]) -> bool {
        self.validate_at(valid_states, date::today())
    }

    /// Same as [`RegisterModel::validate`] with an explicit "today".
    pub fn validate_at(&mut self, valid_states: &[String], today: NaiveDate) -> bool {
        self.check_missing();
        if self.has_errors() {
            log::info!("validation stopped after presence phase");
            return true;
        }

        self.check_username_format();
        self.check_password_length();
        self.check_password_match();
        self.check_email_format();
        self.check_dropdown_input(valid_states);
        self.check_dob_length();
        self.check_dob_valid(today);
        self.check_expected_date_valid(today);

        let failed = self.has_errors();
        log::info!("validation finished, errors present: {}", failed);
        failed
    }

    pub fn has_errors(&self) -> bool {
        REGISTRATION_FIELDS.iter().any(|d| (d.accessor)(self).has_errors())
    }

    /// Fields that currently carry at least one error, in declaration order
    pub fn failed_fields(&self) -> Vec<FieldName> {
        REGISTRATION_FIELDS
            .iter()
            .filter(|d| (d.accessor)(self).has_errors())
            .map(|d| d.name)
            .collect()
    }

    pub fn check_missing(&mut self) {
        for descriptor in REGISTRATION_FIELDS.iter().filter(|d| d.required) {
            if (descriptor.accessor)(self).is_blank() {
                self.set_error(descriptor.name, ERROR_REQUIRED);
            }
        }
    }

    pub fn check_username_format(&mut self) {
        if self.username.text().ends_with(FORBIDDEN_USERNAME_SUFFIX) {
            self.set_error(FieldName::Username, ERROR_USERNAME_SUFFIX);
        }
    }

    pub fn check_password_length(&mut self) {
        if self.password.text().chars().count() < PASSWORD_MIN_LEN {
            self.set_error(FieldName::Password, ERROR_PASSWORD_LENGTH);
        }
    }

    pub fn check_password_match(&mut self) {
        if self.password.text() != self.password_confirm.text() {
            self.set_error(FieldName::PasswordConfirm, ERROR_PASSWORD_MATCH);
        }
    }

    pub fn check_email_format(&mut self) {
        if !is_valid_email(self.email.text()) {
            self.set_error(FieldName::Email, ERROR_EMAIL_FORMAT);
        }
    }

    /// The state must be one of the values the combobox offered
    pub fn check_dropdown_input(&mut self, full_list: &[String]) {
        let state = self.state.text();
        if !state.is_empty() && !full_list.iter().any(|item| item == state) {
            self.set_error(FieldName::State, ERROR_INVALID_STATE);
        }
    }

    pub fn check_dob_length(&mut self) {
        if self.dob.text().chars().count() < FORM_DATE_LEN {
            self.set_error(FieldName::Dob, ERROR_DATE_FORMAT);
        }
    }

    pub fn check_dob_valid(&mut self, today: NaiveDate) {
        match date::parse_form_date(self.dob.text()) {
            Ok(dob) if dob > today => self.set_error(FieldName::Dob, ERROR_DOB_FUTURE),
            Ok(_) => {}
            Err(_) => {
                // A short value was already reported by the length check
                if !self.has_message(FieldName::Dob, ERROR_DATE_FORMAT) {
                    self.set_error(FieldName::Dob, ERROR_DATE_FORMAT);
                }
            }
        }
    }

    pub fn check_expected_date_valid(&mut self, today: NaiveDate) {
        match date::parse_form_date(self.expected_date.text()) {
            Ok(expected) if expected <= today => self.set_error(FieldName::ExpectedDate, ERROR_EXPECTED_DATE_PAST),
            Ok(_) => {}
            Err(_) => self.set_error(FieldName::ExpectedDate, ERROR_DATE_FORMAT),
        }
    }

    /// Copy this model's errors into the shared context, replacing what was there
    pub fn write_back(&self, ctx: &mut FormContext) {
        ctx.apply_errors(&self.to_input_values());
    }

    pub fn to_input_values(&self) -> FormInputValues {
        let mut values = FormInputValues::default();
        for descriptor in REGISTRATION_FIELDS.iter() {
            values.set(descriptor.name, (descriptor.accessor)(self).clone());
        }
        values
    }

    fn has_message(&self, name: FieldName, msg: &str) -> bool {
        self.field(name).errors.iter().any(|e| e.error_msg == msg)
    }

    fn set_error(&mut self, name: FieldName, msg: &str) {
        log::debug!("{}: {}", name, msg);
        self.field_mut(name).errors.push(FieldError::new(msg));
    }
}

/// `local@domain` with a 1-64 character local part and a 3-255 character
/// domain made of ASCII letters, digits, `_`, `.` and `-`.
///
/// Only the segment between the first and second `@` is checked as the domain.
pub fn is_valid_email(email: &str) -> bool {
    if !email.contains('@') {
        return false;
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let local_len = local.chars().count();
    if !(EMAIL_LOCAL_MIN_LEN..=EMAIL_LOCAL_MAX_LEN).contains(&local_len) {
        return false;
    }

    let domain_len = domain.chars().count();
    (EMAIL_DOMAIN_MIN_LEN..=EMAIL_DOMAIN_MAX_LEN).contains(&domain_len)
        && domain.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_follow_field_order() {
        for (descriptor, name) in REGISTRATION_FIELDS.iter().zip(FieldName::ALL) {
            assert_eq!(descriptor.name, name);
        }
    }

    #[test]
    fn accessors_reach_matching_field() {
        let mut input = FormInputValues::default();
        for name in FieldName::ALL {
            input.set(name, FieldValue::new(name.key()));
        }
        let model = RegisterModel::new(input);
        for name in FieldName::ALL {
            assert_eq!(model.field(name).text(), name.key());
        }
    }

    #[test]
    fn email_domain_charset() {
        assert!(is_valid_email("a@b-c.d_e"));
        assert!(!is_valid_email("a@exa mple.com"));
        assert!(!is_valid_email("a@ex!ample.com"));
        assert!(!is_valid_email("a@ab"));
        assert!(!is_valid_email("@example.com"));
    }
}
