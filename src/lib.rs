//! regform - a terminal registration form
//!
//! This library provides the pieces of a registration form rendered with
//! Ratatui: a shared form-state container, field components (text inputs,
//! a filterable combobox, a calendar-backed date selector), and a
//! registration model that validates a submission in two phases.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`form`] - Form state and validation
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants: validation messages, limits, select options
pub mod constants;

/// Form state container and registration model
pub mod form;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Valid state names offered by the state combobox
pub mod states;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;

pub use form::{FieldError, FieldName, FieldValue, FormContext, FormInputValues, RegisterModel};
