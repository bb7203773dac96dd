//! Form-wide ("document level") event listeners.
//!
//! A component that needs to hear about clicks or key presses anywhere in the
//! form subscribes here. Each subscription is an RAII [`Subscription`]: it is
//! released explicitly, or when dropped, and releasing twice is a no-op.

use crossterm::event::KeyEvent;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Click,
    KeyDown,
}

/// Event delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentEvent {
    Click { column: u16, row: u16 },
    KeyDown(KeyEvent),
}

impl DocumentEvent {
    pub fn kind(&self) -> ListenerKind {
        match self {
            DocumentEvent::Click { .. } => ListenerKind::Click,
            DocumentEvent::KeyDown(_) => ListenerKind::KeyDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Debug, Clone)]
struct ListenerEntry {
    id: ListenerId,
    kind: ListenerKind,
    owner: String,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: Vec<ListenerEntry>,
}

/// Handle to the form's listener registry. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct DocumentListeners {
    inner: Rc<RefCell<Registry>>,
}

impl DocumentListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `owner` for events of `kind`
    pub fn subscribe(&self, owner: &str, kind: ListenerKind) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push(ListenerEntry {
            id,
            kind,
            owner: owner.to_string(),
        });
        log::debug!("listener {:?} added for {} ({:?})", id, owner, kind);

        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
            released: false,
        }
    }

    /// Owners subscribed to `kind`, in subscription order, without duplicates
    pub fn subscribers(&self, kind: ListenerKind) -> Vec<String> {
        let registry = self.inner.borrow();
        let mut owners: Vec<String> = Vec::new();
        for entry in registry.entries.iter().filter(|e| e.kind == kind) {
            if !owners.contains(&entry.owner) {
                owners.push(entry.owner.clone());
            }
        }
        owners
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.inner.borrow().entries.iter().any(|e| e.id == id)
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live subscriptions held by `owner`
    pub fn count_for(&self, owner: &str) -> usize {
        self.inner.borrow().entries.iter().filter(|e| e.owner == owner).count()
    }
}

/// A live listener registration
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
    released: bool,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Remove the listener. Returns `false` if it was already gone.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;

        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut registry = registry.borrow_mut();
        let before = registry.entries.len();
        registry.entries.retain(|e| e.id != self.id);
        let removed = registry.entries.len() != before;
        if removed {
            log::debug!("listener {:?} removed", self.id);
        }
        removed
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
