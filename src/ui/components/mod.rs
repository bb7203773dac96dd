//! Reusable form field components

pub mod calendar;
pub mod common;
pub mod date_selector;
pub mod dropdown_input;
pub mod props;
pub mod select_input;
pub mod status_bar;
pub mod text_input;

// Component exports
pub use calendar::Calendar;
pub use date_selector::DateSelector;
pub use dropdown_input::DropdownInput;
pub use props::FieldProps;
pub use select_input::SelectInput;
pub use status_bar::{StatusBar, StatusMessage};
pub use text_input::TextInput;
