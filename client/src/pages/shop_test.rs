use super::*;

fn product(id: &str, category: &str) -> Product {
    Product {
        id: id.to_owned(),
        name: id.to_owned(),
        description: String::new(),
        category: category.to_owned(),
        price_cents: 1_000,
        stock: 3,
        image_url: None,
        active: true,
    }
}

#[test]
fn merge_categories_keeps_sorted_unique() {
    let mut known = vec!["Hardware".to_owned()];
    merge_categories(&mut known, &[product("a", "Railings"), product("b", "Hardware"), product("c", "")]);
    assert_eq!(known, vec!["Hardware".to_owned(), "Railings".to_owned()]);
}

#[test]
fn add_feedback_maps_every_outcome() {
    assert_eq!(add_feedback(AddOutcome::Added), (ToastKind::Success, "cart.added"));
    assert_eq!(add_feedback(AddOutcome::Capped), (ToastKind::Info, "cart.capped"));
    assert_eq!(add_feedback(AddOutcome::OutOfStock).0, ToastKind::Error);
}
