use super::*;

#[test]
fn item_and_action_join_segments() {
    assert_eq!(item(ADMIN_USERS, "u7"), "/api/admin/users/u7");
    assert_eq!(action(ADMIN_ORDERS, "o2", "status"), "/api/admin/orders/o2/status");
}

#[test]
fn named_builders_use_expected_bases() {
    assert_eq!(post("laser-cutting-101"), "/api/blog/laser-cutting-101");
    assert_eq!(product("p9"), "/api/products/p9");
    assert_eq!(appointment_cancel("a1"), "/api/appointments/a1/cancel");
    assert_eq!(quotation_response("q3"), "/api/quotations/q3/respond");
    assert_eq!(order("o5"), "/api/orders/o5");
}

#[test]
fn save_target_posts_to_collection_for_new_records() {
    assert_eq!(save_target(ADMIN_EMPLOYEES, ""), "/api/admin/employees");
    assert_eq!(save_target(ADMIN_EMPLOYEES, "  "), "/api/admin/employees");
    assert_eq!(save_target(ADMIN_EMPLOYEES, "e1"), "/api/admin/employees/e1");
}

#[test]
fn segment_keeps_plain_ids_readable() {
    assert_eq!(segment("laser-cutting_101.v2~b"), "laser-cutting_101.v2~b");
    assert_eq!(segment("soldadura en ñ"), "soldadura%20en%20%C3%B1");
}

#[test]
fn route_params_cannot_leave_their_resource() {
    assert_eq!(post("../admin/users"), "/api/blog/..%2Fadmin%2Fusers");
    assert_eq!(product("p1?admin=1"), "/api/products/p1%3Fadmin%3D1");
    assert_eq!(product("p1#frag"), "/api/products/p1%23frag");
    assert_eq!(order("a/b"), "/api/orders/a%2Fb");
    for id in ["..", "../admin/users", "a?b", "a#b", "/"] {
        let path = post(id);
        let tail = path.strip_prefix("/api/blog/").unwrap();
        assert!(!tail.contains(['/', '?', '#']), "{id:?} escaped its resource: {path}");
        assert_ne!(tail, "..");
    }
}

#[test]
fn dot_only_ids_are_escaped_twice() {
    assert_eq!(post(".."), "/api/blog/%252E%252E");
    assert_eq!(post("."), "/api/blog/%252E");
    assert_eq!(appointment_cancel(".."), "/api/appointments/%252E%252E/cancel");
}
