//! Tests for notification_state

use super::*;

#[test]
fn test_info_notification() {
    let notif = Notification::new("Top");
    assert_eq!(notif.message, "Top");
    assert_eq!(notif.notification_type, NotificationType::Info);
    assert_eq!(notif.duration, Duration::from_millis(1500));
    assert_eq!(notif.style.bg, theme::notification::INFO.bg);
    assert!(!notif.is_expired());
}

#[test]
fn test_warning_notification() {
    let notif = Notification::with_type("Invalid config", NotificationType::Warning);
    assert_eq!(notif.notification_type, NotificationType::Warning);
    assert_eq!(notif.duration, Duration::from_secs(10));
    assert_eq!(notif.style.fg, theme::notification::WARNING.fg);
}

#[test]
fn test_expired_notification_is_cleared() {
    let mut state = NotificationState::new();
    state.show("old");
    if let Some(notif) = state.current.as_mut() {
        notif.created_at = Instant::now() - Duration::from_secs(5);
    }

    assert!(state.clear_if_expired());
    assert!(state.current().is_none());
}

#[test]
fn test_fresh_notification_is_kept() {
    let mut state = NotificationState::new();
    state.show_warning("fresh");

    assert!(!state.clear_if_expired());
    assert_eq!(state.current_message(), Some("fresh"));
}

#[test]
fn test_new_notification_replaces_current() {
    let mut state = NotificationState::new();
    state.show("first");
    state.show_warning("second");
    assert_eq!(state.current_message(), Some("second"));
}

#[test]
fn test_default_style_is_info() {
    let style = NotificationStyle::default();
    assert_eq!(style.border, theme::notification::INFO.border);
}
