use super::*;

fn sample_product(id: &str) -> Product {
    Product {
        id: id.to_owned(),
        name: "Wall Bracket".into(),
        description: "Powder-coated steel".into(),
        category: "hardware".into(),
        price_cents: 2_499,
        stock: 40,
        image_url: None,
        active: true,
    }
}

#[test]
fn save_route_creates_on_empty_id() {
    assert_eq!(save_route(endpoints::ADMIN_TASKS, ""), (Method::Post, "/api/admin/tasks".to_owned()));
}

#[test]
fn save_route_updates_existing_id() {
    assert_eq!(save_route(endpoints::ADMIN_TASKS, "t4"), (Method::Put, "/api/admin/tasks/t4".to_owned()));
}

#[test]
fn product_form_serializes_numbers_as_text() {
    let form = product_form(&sample_product("p1"), None);
    let get = |name: &str| form.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone());
    assert_eq!(get("price_cents"), Some("2499".to_owned()));
    assert_eq!(get("stock"), Some("40".to_owned()));
    assert_eq!(get("active"), Some("true".to_owned()));
    assert!(form.files.is_empty());
}

#[test]
fn product_form_attaches_image_under_image_field() {
    let form = product_form(&sample_product(""), Some(PickedFile::from_meta("bracket.png", 1_000)));
    assert_eq!(form.files.len(), 1);
    assert_eq!(form.files[0].0, "image");
}

#[test]
fn post_form_carries_markdown_body_and_cover() {
    let post = BlogPost {
        id: String::new(),
        slug: "tig-vs-mig".into(),
        title: "TIG vs MIG".into(),
        excerpt: "Which weld?".into(),
        body: "# Heading".into(),
        cover_url: None,
        author: None,
        published_at: None,
        published: false,
    };
    let form = post_form(&post, Some(PickedFile::from_meta("cover.webp", 10)));
    assert!(form.fields.contains(&("body".to_owned(), "# Heading".to_owned())));
    assert!(form.fields.contains(&("published".to_owned(), "false".to_owned())));
    assert_eq!(form.files[0].0, "cover");
}

#[test]
fn status_body_serializes_wire_status() {
    let body = StatusBody { status: TaskStatus::InProgress };
    assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({ "status": "in_progress" }));
}
