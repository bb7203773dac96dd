//! Core UI functionality for the registration form.
//!
//! This module contains the building blocks every field component is made of.
//!
//! # Module Components
//!
//! - [`accessibility`] - ids, roles and ARIA state reported by each field
//! - [`actions`] - requests a component hands back to the form
//! - [`component`] - the field component trait and hit testing
//! - [`event_handler`] - terminal event polling
//! - [`listeners`] - form-wide click and key listeners with scoped subscriptions
//!
//! # Architecture
//!
//! 1. **Components** implement [`Component`] and read/write the shared
//!    [`FormContext`](crate::form::FormContext) passed into every call
//! 2. **Actions** tell the form to move focus, submit or quit
//! 3. **Listeners** deliver clicks and key presses anywhere in the form to
//!    the components that subscribed, for as long as they hold a subscription

pub mod accessibility;
pub mod actions;
pub mod component;
pub mod event_handler;
pub mod listeners;

pub use accessibility::{Accessibility, ErrorRegion, Listbox};
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use listeners::{DocumentEvent, DocumentListeners, ListenerKind, Subscription};
