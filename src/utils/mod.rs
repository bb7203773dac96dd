//! Utility modules for the registration form.
//!
//! # Available Utilities
//!
//! - [`date`] - `MM/DD/YYYY` parsing and formatting plus calendar arithmetic

pub mod date;
