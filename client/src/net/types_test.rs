use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_wire_names_are_lowercase() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), serde_json::json!("admin"));
    assert_eq!(serde_json::from_value::<Role>(serde_json::json!("employee")).unwrap(), Role::Employee);
}

#[test]
fn role_staff_covers_employee_and_admin() {
    assert!(!Role::Customer.is_staff());
    assert!(Role::Employee.is_staff());
    assert!(Role::Admin.is_staff());
}

#[test]
fn role_parse_matches_as_str() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("root"), None);
}

// =============================================================================
// User
// =============================================================================

#[test]
fn user_defaults_missing_role_and_active() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "name": "Dana",
        "email": "dana@example.com"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Customer);
    assert!(user.active);
    assert_eq!(user.phone, None);
}

#[test]
fn auth_response_parses_nested_user() {
    let resp: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "tok-1",
        "user": { "id": "u1", "name": "Dana", "email": "d@x.io", "role": "admin" }
    }))
    .unwrap();
    assert_eq!(resp.token, "tok-1");
    assert_eq!(resp.user.role, Role::Admin);
}

#[test]
fn register_request_omits_missing_phone() {
    let req = RegisterRequest {
        name: "Dana".into(),
        email: "d@x.io".into(),
        phone: None,
        password: "secret123".into(),
    };
    let value = serde_json::to_value(req).unwrap();
    assert!(value.get("phone").is_none());
}

// =============================================================================
// Statuses
// =============================================================================

#[test]
fn status_wire_names_match_as_str() {
    for status in OrderStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
    }
    for status in AppointmentStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
    }
    for status in QuotationStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
    }
    for status in TaskStatus::ALL {
        assert_eq!(serde_json::to_value(status).unwrap(), serde_json::json!(status.as_str()));
    }
    for priority in TaskPriority::ALL {
        assert_eq!(serde_json::to_value(priority).unwrap(), serde_json::json!(priority.as_str()));
    }
}

#[test]
fn task_status_in_progress_uses_snake_case() {
    assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
}

#[test]
fn appointment_cancellable_only_before_settled() {
    assert!(AppointmentStatus::Pending.is_cancellable());
    assert!(AppointmentStatus::Confirmed.is_cancellable());
    assert!(!AppointmentStatus::Completed.is_cancellable());
    assert!(!AppointmentStatus::Cancelled.is_cancellable());
}

#[test]
fn quotation_awaits_customer_only_when_quoted() {
    assert!(QuotationStatus::Quoted.awaits_customer());
    assert!(!QuotationStatus::Pending.awaits_customer());
    assert!(!QuotationStatus::Accepted.awaits_customer());
}

// =============================================================================
// Page / filters / orders
// =============================================================================

#[test]
fn page_count_rounds_up_and_never_zero() {
    let page = Page::<u8> { items: vec![], page: 1, per_page: 10, total: 21 };
    assert_eq!(page.page_count(), 3);
    let empty = Page::<u8> { items: vec![], page: 1, per_page: 10, total: 0 };
    assert_eq!(empty.page_count(), 1);
    let broken = Page::<u8> { items: vec![], page: 1, per_page: 0, total: 5 };
    assert_eq!(broken.page_count(), 1);
}

#[test]
fn product_filter_skips_blank_values() {
    let filter = ProductFilter { category: Some("  ".into()), search: Some(" gate ".into()) };
    assert_eq!(filter.query_pairs(), vec![("search", "gate".to_owned())]);
    assert!(ProductFilter::default().query_pairs().is_empty());
}

#[test]
fn order_line_total_multiplies_quantity() {
    let line = OrderLine { product_id: "p1".into(), name: "Bracket".into(), unit_price_cents: 1_250, quantity: 4 };
    assert_eq!(line.line_total_cents(), 5_000);
}

#[test]
fn order_parses_with_defaults() {
    let order: Order = serde_json::from_value(serde_json::json!({
        "id": "o1",
        "items": [],
        "subtotal_cents": 0,
        "total_cents": 0,
        "shipping": {
            "full_name": "Dana", "phone": "555", "address": "1 Forge St",
            "city": "Austin", "postal_code": "78701", "country": "US"
        }
    }))
    .unwrap();
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.tax_cents, 0);
}
