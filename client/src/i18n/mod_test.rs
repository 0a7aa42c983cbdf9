use std::collections::HashSet;

use super::*;

#[test]
fn parse_accepts_region_and_case_variants() {
    assert_eq!(Locale::parse("es"), Some(Locale::Es));
    assert_eq!(Locale::parse("es-MX"), Some(Locale::Es));
    assert_eq!(Locale::parse("EN_us"), Some(Locale::En));
    assert_eq!(Locale::parse(" en "), Some(Locale::En));
}

#[test]
fn parse_rejects_unsupported() {
    assert_eq!(Locale::parse("fr"), None);
    assert_eq!(Locale::parse(""), None);
}

#[test]
fn translate_prefers_active_locale() {
    assert_eq!(translate(Locale::En, "nav.shop"), "Shop");
    assert_eq!(translate(Locale::Es, "nav.shop"), "Tienda");
}

#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate(Locale::Es, "no.such_key"), "no.such_key");
}

#[test]
fn spanish_covers_every_english_key() {
    let es: HashSet<_> = es::ENTRIES.iter().map(|(k, _)| *k).collect();
    let missing: Vec<_> = en::ENTRIES.iter().map(|(k, _)| *k).filter(|k| !es.contains(k)).collect();
    assert!(missing.is_empty(), "missing es keys: {missing:?}");
}

#[test]
fn tables_have_no_duplicate_keys() {
    for table in [en::ENTRIES, es::ENTRIES] {
        let mut seen = HashSet::new();
        for (key, _) in table {
            assert!(seen.insert(*key), "duplicate key {key}");
        }
    }
}

#[test]
fn status_labels_are_translated() {
    for status in crate::net::types::OrderStatus::ALL {
        assert_ne!(translate(Locale::En, status.label_key()), status.label_key());
    }
    for role in crate::net::types::Role::ALL {
        assert_ne!(translate(Locale::Es, role.label_key()), role.label_key());
    }
}

#[test]
fn initial_locale_defaults_to_english_off_browser() {
    assert_eq!(initial_locale(), Locale::En);
}
