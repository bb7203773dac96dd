//! Constants used throughout the application
//!
//! This module centralizes validation messages, UI text, and other constant values
//! to improve maintainability and consistency.

// Validation messages
pub const ERROR_REQUIRED: &str = "This field is required";
pub const ERROR_USERNAME_SUFFIX: &str = "Username cannot end with \".com\"";
pub const ERROR_PASSWORD_LENGTH: &str = "Password must be at least 8 characters";
pub const ERROR_PASSWORD_MATCH: &str = "Passwords must match";
pub const ERROR_EMAIL_FORMAT: &str = "Email must be in correct format (username@domain)";
pub const ERROR_INVALID_STATE: &str = "Please enter a valid state";
pub const ERROR_DATE_FORMAT: &str = "Please enter valid date (MM/DD/YYYY)";
pub const ERROR_DOB_FUTURE: &str = "DOB must be before today";
pub const ERROR_EXPECTED_DATE_PAST: &str = "Expected date must be after today";

// Validation limits
pub const FORBIDDEN_USERNAME_SUFFIX: &str = ".com";
pub const PASSWORD_MIN_LEN: usize = 8;
pub const EMAIL_LOCAL_MIN_LEN: usize = 1;
pub const EMAIL_LOCAL_MAX_LEN: usize = 64;
pub const EMAIL_DOMAIN_MIN_LEN: usize = 3;
pub const EMAIL_DOMAIN_MAX_LEN: usize = 255;

// Select options
pub const AGE_RANGES: &[&str] = &["Under 18", "18-24", "25-34", "35-44", "45-54", "55-64", "65+"];
pub const ACCOUNT_TYPES: &[&str] = &["Personal", "Business", "Education"];

// Accessibility ids
pub const DROPDOWN_LIST_ID: &str = "dropdown-input-ul";
pub const ROLE_ALERT: &str = "alert";
pub const ROLE_COMBOBOX: &str = "combobox";
pub const ROLE_LISTBOX: &str = "listbox";

// Status messages
pub const SUCCESS_SUBMITTED: &str = "✅ Registration submitted";
pub const ERROR_SUBMIT_FAILED: &str = "❌ Please fix the highlighted fields";
pub const CONFIG_GENERATED: &str = "Generated default config";

// UI sizing
pub const UI_TICK_RATE_MS_DEFAULT: u64 = 100;
pub const UI_TICK_RATE_MS_MIN: u64 = 10;
pub const UI_TICK_RATE_MS_MAX: u64 = 1000;
pub const LIST_MAX_HEIGHT_DEFAULT: u16 = 6;
pub const LIST_MAX_HEIGHT_MIN: u16 = 1;
pub const LIST_MAX_HEIGHT_MAX: u16 = 20;
pub const FORM_MAX_WIDTH: u16 = 64;
