//! UI module for regform
//!
//! This module handles the field components, the form that hosts them, and
//! the terminal event loop.

pub mod components;
pub mod core;
pub mod layout;
pub mod register_form;
pub mod renderer;

pub use layout::LayoutManager;
pub use register_form::RegisterForm;
pub use renderer::run_app;
