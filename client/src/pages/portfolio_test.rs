use super::*;

fn item(title: &str, category: &str) -> PortfolioItem {
    PortfolioItem {
        id: title.to_lowercase(),
        title: title.to_owned(),
        category: category.to_owned(),
        description: String::new(),
        image_url: None,
        completed_on: None,
    }
}

#[test]
fn categories_are_distinct_in_first_seen_order() {
    let items = vec![item("Gate", "Residential"), item("Canopy", "Commercial"), item("Rail", "residential"), item("Misc", " ")];
    assert_eq!(categories(&items), vec!["Residential".to_owned(), "Commercial".to_owned()]);
}

#[test]
fn in_category_filters_case_insensitively() {
    let items = vec![item("Gate", "Residential"), item("Canopy", "Commercial")];
    assert_eq!(in_category(&items, Some("residential")).len(), 1);
    assert_eq!(in_category(&items, None).len(), 2);
}
