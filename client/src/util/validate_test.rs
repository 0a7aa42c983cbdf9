use super::*;

// =============================================================================
// Fields
// =============================================================================

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("  Dana "), Ok("Dana".to_owned()));
    assert_eq!(required("   "), Err("validation.required"));
}

#[test]
fn email_accepts_common_addresses() {
    assert_eq!(email(" dana@forge.example "), Ok("dana@forge.example".to_owned()));
    assert!(email("a.b+c@sub.domain.io").is_ok());
}

#[test]
fn email_rejects_malformed() {
    for bad in ["dana", "dana@", "@forge.io", "dana@forge", "da na@forge.io", "a@b@c.io", "a@.io", "a@io."] {
        assert_eq!(email(bad), Err("validation.email"), "accepted {bad:?}");
    }
    assert_eq!(email(""), Err("validation.required"));
}

#[test]
fn phone_is_optional_but_checked() {
    assert_eq!(phone(""), Ok(None));
    assert_eq!(phone("+1 (512) 555-0100"), Ok(Some("+1 (512) 555-0100".to_owned())));
    assert_eq!(phone("555-01"), Err("validation.phone"));
    assert_eq!(phone("call me"), Err("validation.phone"));
}

#[test]
fn password_requires_minimum_length() {
    assert_eq!(password("short"), Err("validation.password_short"));
    assert!(password("longenough").is_ok());
}

#[test]
fn date_checks_shape_and_ranges() {
    assert_eq!(date("2026-11-02"), Ok("2026-11-02".to_owned()));
    assert_eq!(date("2026-13-02"), Err("validation.date"));
    assert_eq!(date("2026-00-10"), Err("validation.date"));
    assert_eq!(date("2026-1-2"), Err("validation.date"));
}

#[test]
fn time_is_24_hour() {
    assert_eq!(time("09:30"), Ok("09:30".to_owned()));
    assert_eq!(time("23:59"), Ok("23:59".to_owned()));
    assert_eq!(time("24:00"), Err("validation.time"));
    assert_eq!(time("9:30"), Err("validation.time"));
    assert_eq!(time("09:60"), Err("validation.time"));
}

#[test]
fn parse_price_handles_decimal_forms() {
    assert_eq!(parse_price("12"), Some(1_200));
    assert_eq!(parse_price("12.5"), Some(1_250));
    assert_eq!(parse_price("12.05"), Some(1_205));
    assert_eq!(parse_price("$1,200.00"), Some(120_000));
    assert_eq!(parse_price("0.99"), Some(99));
}

#[test]
fn parse_price_rejects_bad_input() {
    for bad in ["", "abc", "1.234", "-5", ".5", "1.2.3"] {
        assert_eq!(parse_price(bad), None, "accepted {bad:?}");
    }
}

#[test]
fn price_rejects_zero() {
    assert_eq!(price("0"), Err("validation.price"));
    assert_eq!(price("0.01"), Ok(1));
}

#[test]
fn quantity_optional_positive() {
    assert_eq!(quantity(""), Ok(None));
    assert_eq!(quantity("12"), Ok(Some(12)));
    assert_eq!(quantity("0"), Err("validation.quantity"));
    assert_eq!(quantity("a dozen"), Err("validation.quantity"));
}

#[test]
fn slugify_collapses_punctuation() {
    assert_eq!(slugify("TIG vs. MIG: Which Weld?"), "tig-vs-mig-which-weld");
    assert_eq!(slugify("  Laser   Cutting 101 "), "laser-cutting-101");
}

#[test]
fn slug_rejects_uppercase_and_double_dash() {
    assert!(slug("laser-cutting").is_ok());
    assert_eq!(slug("Laser"), Err("validation.slug"));
    assert_eq!(slug("a--b"), Err("validation.slug"));
    assert_eq!(slug("-a"), Err("validation.slug"));
}

// =============================================================================
// Forms
// =============================================================================

#[test]
fn login_requires_email_and_password() {
    assert_eq!(login("d@x.io", "pw"), Ok(("d@x.io".to_owned(), "pw".to_owned())));
    assert_eq!(login("d@x.io", ""), Err("validation.required"));
    assert_eq!(login("nope", "pw"), Err("validation.email"));
}

#[test]
fn register_checks_confirmation() {
    let mut input = RegisterInput {
        name: "Dana".into(),
        email: "d@x.io".into(),
        phone: String::new(),
        password: "correct horse".into(),
        confirm: "correct horse".into(),
    };
    let req = register(&input).unwrap();
    assert_eq!(req.phone, None);
    input.confirm = "different".into();
    assert_eq!(register(&input), Err("validation.password_mismatch"));
}

#[test]
fn contact_requires_message() {
    let input = ContactRequest {
        name: "Dana".into(),
        email: "d@x.io".into(),
        phone: None,
        subject: "Gate".into(),
        message: "  ".into(),
    };
    assert_eq!(contact(&input), Err("validation.required"));
}

#[test]
fn appointment_drops_blank_notes() {
    let input = NewAppointment {
        service: "Welding".into(),
        date: "2026-12-01".into(),
        time: "10:00".into(),
        notes: Some("   ".into()),
    };
    assert_eq!(appointment(&input).unwrap().notes, None);
}

#[test]
fn quotation_validates_optional_deadline() {
    let mut input = QuotationInput {
        title: "Stair railing".into(),
        description: "12 ft, powder coat".into(),
        material: "steel".into(),
        quantity: "2".into(),
        deadline: String::new(),
    };
    let draft = quotation(&input).unwrap();
    assert_eq!(draft.quantity, Some(2));
    assert_eq!(draft.deadline, None);
    input.deadline = "soon".into();
    assert_eq!(quotation(&input), Err("validation.date"));
}

#[test]
fn shipping_requires_phone() {
    let input = ShippingAddress {
        full_name: "Dana".into(),
        phone: String::new(),
        address: "1 Forge St".into(),
        city: "Austin".into(),
        postal_code: "78701".into(),
        country: "US".into(),
    };
    assert_eq!(shipping(&input), Err("validation.required"));
}

#[test]
fn product_input_round_trips_price() {
    let input = ProductInput {
        id: "p1".into(),
        name: "Bracket".into(),
        description: String::new(),
        category: "hardware".into(),
        price: "24.99".into(),
        stock: "10".into(),
        active: true,
        image_url: None,
    };
    let product = product(&input).unwrap();
    assert_eq!(product.price_cents, 2_499);
    assert_eq!(ProductInput::from_product(&product).price, "24.99");
}

#[test]
fn product_rejects_bad_stock() {
    let input = ProductInput {
        name: "Bracket".into(),
        category: "hardware".into(),
        price: "1".into(),
        stock: "-3".into(),
        ..ProductInput::default()
    };
    assert_eq!(product(&input), Err("validation.stock"));
}

#[test]
fn task_blank_optionals_become_none() {
    let input = TaskInput { title: "Cut plates".into(), ..TaskInput::default() };
    let task = task(&input).unwrap();
    assert_eq!(task.assignee_id, None);
    assert_eq!(task.due_date, None);
    assert_eq!(task.status, TaskStatus::Todo);
}

#[test]
fn post_derives_slug_from_title() {
    let input = BlogPost {
        id: String::new(),
        slug: String::new(),
        title: "Powder Coating Basics".into(),
        excerpt: String::new(),
        body: "Body".into(),
        cover_url: None,
        author: None,
        published_at: None,
        published: true,
    };
    assert_eq!(post(&input).unwrap().slug, "powder-coating-basics");
}
