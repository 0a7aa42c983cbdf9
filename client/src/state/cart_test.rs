use super::*;

fn product(id: &str, price_cents: i64, stock: u32) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Product {id}"),
        description: String::new(),
        category: "hardware".to_owned(),
        price_cents,
        stock,
        image_url: None,
        active: true,
    }
}

// =============================================================
// add / merge / caps
// =============================================================

#[test]
fn add_creates_line() {
    let mut cart = CartState::default();
    assert_eq!(cart.add(&product("p1", 1_000, 5), 2), AddOutcome::Added);
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.item_count(), 2);
}

#[test]
fn add_merges_same_product() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_000, 5), 2);
    cart.add(&product("p1", 1_000, 5), 1);
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].quantity, 3);
}

#[test]
fn add_caps_at_stock() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_000, 3), 2);
    assert_eq!(cart.add(&product("p1", 1_000, 3), 5), AddOutcome::Capped);
    assert_eq!(cart.lines[0].quantity, 3);
}

#[test]
fn add_out_of_stock_leaves_cart_untouched() {
    let mut cart = CartState::default();
    assert_eq!(cart.add(&product("p1", 1_000, 0), 1), AddOutcome::OutOfStock);
    assert!(cart.is_empty());
}

#[test]
fn add_refreshes_price_of_existing_line() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_000, 5), 1);
    cart.add(&product("p1", 1_200, 5), 1);
    assert_eq!(cart.lines[0].unit_price_cents, 1_200);
}

// =============================================================
// set_quantity / remove / clear
// =============================================================

#[test]
fn set_quantity_zero_removes_line() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_000, 5), 2);
    cart.set_quantity("p1", 0);
    assert!(cart.is_empty());
}

#[test]
fn typed_quantity_ignores_blank_and_garbled_input() {
    assert_eq!(parse_quantity(" 3 "), Some(3));
    assert_eq!(parse_quantity("0"), Some(0));
    for raw in ["", "  ", "two", "-1", "1.5"] {
        assert_eq!(parse_quantity(raw), None, "accepted {raw:?}");
    }
}

#[test]
fn garbled_quantity_leaves_line_in_cart() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_000, 5), 2);
    if let Some(qty) = parse_quantity("") {
        cart.set_quantity("p1", qty);
    }
    assert_eq!(cart.lines[0].quantity, 2);
}

#[test]
fn set_quantity_caps_at_stock() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_000, 4), 1);
    cart.set_quantity("p1", 10);
    assert_eq!(cart.lines[0].quantity, 4);
}

#[test]
fn remove_and_clear() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_000, 4), 1);
    cart.add(&product("p2", 500, 4), 1);
    cart.remove("p1");
    assert_eq!(cart.lines.len(), 1);
    cart.clear();
    assert!(cart.is_empty());
}

// =============================================================
// totals
// =============================================================

#[test]
fn totals_empty_cart_is_zero() {
    assert_eq!(CartState::default().totals(), Totals::default());
}

#[test]
fn totals_apply_tax_and_flat_shipping() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 10_000, 10), 1);
    let totals = cart.totals();
    assert_eq!(totals.subtotal_cents, 10_000);
    assert_eq!(totals.tax_cents, 825);
    assert_eq!(totals.shipping_cents, FLAT_SHIPPING_CENTS);
    assert_eq!(totals.total_cents, 10_000 + 825 + 2_500);
}

#[test]
fn totals_round_tax_half_up() {
    let mut cart = CartState::default();
    // 8.25% of 1.00 = 8.25 cents -> 8; of 2.00 = 16.5 cents -> 17.
    cart.add(&product("p1", 100, 10), 1);
    assert_eq!(cart.totals().tax_cents, 8);
    cart.set_quantity("p1", 2);
    assert_eq!(cart.totals().tax_cents, 17);
}

#[test]
fn totals_free_shipping_from_threshold() {
    let mut cart = CartState::default();
    cart.add(&product("p1", FREE_SHIPPING_FROM_CENTS, 2), 1);
    assert_eq!(cart.totals().shipping_cents, 0);
}

#[test]
fn order_lines_mirror_cart() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_250, 9), 3);
    let lines = cart.order_lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_id, "p1");
    assert_eq!(lines[0].line_total_cents(), 3_750);
}

#[test]
fn cart_serializes_for_storage() {
    let mut cart = CartState::default();
    cart.add(&product("p1", 1_250, 9), 3);
    let raw = serde_json::to_string(&cart).unwrap();
    let restored: CartState = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, cart);
}

#[test]
fn load_off_browser_is_empty() {
    assert!(CartState::load().is_empty());
}
