use super::*;

#[test]
fn order_badges_follow_lifecycle() {
    assert_eq!(Badge::from(OrderStatus::Pending).tone, Tone::Warning);
    assert_eq!(Badge::from(OrderStatus::Delivered).tone, Tone::Success);
    assert_eq!(Badge::from(OrderStatus::Cancelled).key, "order_status.cancelled");
}

#[test]
fn quotation_badges_highlight_customer_decisions() {
    assert_eq!(Badge::from(QuotationStatus::Quoted).tone, Tone::Info);
    assert_eq!(Badge::from(QuotationStatus::Rejected).tone, Tone::Danger);
}

#[test]
fn priority_badges_escalate() {
    assert_eq!(Badge::from(TaskPriority::Low).tone, Tone::Neutral);
    assert_eq!(Badge::from(TaskPriority::High).tone, Tone::Danger);
    assert_eq!(Badge::from(TaskStatus::InProgress).key, "task_status.in_progress");
}

#[test]
fn tone_classes_share_base() {
    for tone in [Tone::Neutral, Tone::Info, Tone::Warning, Tone::Success, Tone::Danger] {
        assert!(tone.class().starts_with("badge badge--"));
    }
}
