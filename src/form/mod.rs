//! Form state and validation.
//!
//! - [`field`] - field names, values and error records
//! - [`context`] - the shared state container components read and write
//! - [`model`] - the registration model run at submit time

pub mod context;
pub mod field;
pub mod model;

pub use context::{FormContext, FormError};
pub use field::{FieldError, FieldName, FieldValue, FormInputValues};
pub use model::{RegisterModel, REGISTRATION_FIELDS};
