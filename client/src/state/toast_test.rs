use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Error, "two");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Info, "0");
    for i in 1..=MAX_TOASTS {
        state.push(ToastKind::Info, i.to_string());
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert!(state.items.iter().all(|t| t.id != first));
    assert_eq!(state.items.last().map(|t| t.text.as_str()), Some("4"));
}

#[test]
fn dismiss_removes_only_matching_id() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "saved");
    let b = state.push(ToastKind::Error, "failed");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kind_class_includes_modifier() {
    assert_eq!(ToastKind::Error.class(), "toast toast--error");
}

#[test]
fn error_text_prefers_backend_validation_message() {
    let text = error_text(&ApiError::Validation("Date is fully booked".into()), |_| "generic");
    assert_eq!(text, "Date is fully booked");
}

#[test]
fn error_text_translates_other_errors() {
    let text = error_text(&ApiError::Server(503), |key| if key == "error.server" { "Server error" } else { "?" });
    assert_eq!(text, "Server error");
}
