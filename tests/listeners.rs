use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regform::ui::core::{DocumentEvent, DocumentListeners, ListenerKind};

#[test]
fn test_subscribe_and_release() {
    let listeners = DocumentListeners::new();
    let mut click = listeners.subscribe("a", ListenerKind::Click);
    let key = listeners.subscribe("a", ListenerKind::KeyDown);
    assert_eq!(listeners.len(), 2);
    assert_ne!(click.id(), key.id());
    assert!(listeners.is_registered(click.id()));

    assert!(click.release());
    assert!(click.is_released());
    assert!(!listeners.is_registered(click.id()));
    assert_eq!(listeners.len(), 1);
}

#[test]
fn test_release_is_idempotent() {
    let listeners = DocumentListeners::new();
    let mut sub = listeners.subscribe("a", ListenerKind::Click);
    let _other = listeners.subscribe("b", ListenerKind::Click);

    assert!(sub.release());
    assert!(!sub.release());
    assert!(!sub.release());
    assert_eq!(listeners.len(), 1);
    assert_eq!(listeners.subscribers(ListenerKind::Click), vec!["b".to_string()]);
}

#[test]
fn test_drop_releases() {
    let listeners = DocumentListeners::new();
    {
        let _sub = listeners.subscribe("a", ListenerKind::KeyDown);
        assert_eq!(listeners.count_for("a"), 1);
    }
    assert!(listeners.is_empty());
}

#[test]
fn test_release_after_registry_dropped() {
    let listeners = DocumentListeners::new();
    let mut sub = listeners.subscribe("a", ListenerKind::Click);
    drop(listeners);
    assert!(!sub.release());
    assert!(sub.is_released());
}

#[test]
fn test_subscribers_by_kind_in_order() {
    let listeners = DocumentListeners::new();
    let _a = listeners.subscribe("a", ListenerKind::Click);
    let _b = listeners.subscribe("b", ListenerKind::Click);
    let _a_again = listeners.subscribe("a", ListenerKind::Click);
    let _c = listeners.subscribe("c", ListenerKind::KeyDown);

    assert_eq!(
        listeners.subscribers(ListenerKind::Click),
        vec!["a".to_string(), "b".to_string()]
    );
    assert_eq!(listeners.subscribers(ListenerKind::KeyDown), vec!["c".to_string()]);
    assert_eq!(listeners.count_for("a"), 2);
}

#[test]
fn test_clones_share_registry() {
    let listeners = DocumentListeners::new();
    let clone = listeners.clone();
    let _sub = clone.subscribe("a", ListenerKind::Click);
    assert_eq!(listeners.len(), 1);
}

#[test]
fn test_event_kind() {
    let click = DocumentEvent::Click { column: 1, row: 2 };
    let key = DocumentEvent::KeyDown(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert_eq!(click.kind(), ListenerKind::Click);
    assert_eq!(key.kind(), ListenerKind::KeyDown);
}
