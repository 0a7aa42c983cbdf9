use super::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    name: &'static str,
    city: &'static str,
    open: bool,
}

fn rows() -> Vec<Row> {
    vec![
        Row { name: "Gate repair", city: "Austin", open: true },
        Row { name: "Stair rail", city: "Dallas", open: false },
        Row { name: "Canopy", city: "austin", open: false },
    ]
}

#[test]
fn matches_query_is_case_insensitive() {
    assert!(matches_query("AUS", &["Austin"]));
    assert!(!matches_query("houston", &["Austin", "Dallas"]));
    assert!(matches_query("   ", &[]));
}

#[test]
fn filter_rows_by_text_and_status() {
    let data = rows();
    let pick = |query: &str, open: Option<bool>| filter_rows(&data, query, open, |r: &Row| vec![r.name, r.city], |r: &Row| r.open);
    assert_eq!(pick("austin", None).len(), 2);
    assert_eq!(pick("austin", Some(false)), vec![data[2].clone()]);
    assert_eq!(pick("", Some(true)), vec![data[0].clone()]);
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(5, 0), 1);
}

#[test]
fn clamp_page_keeps_range() {
    assert_eq!(clamp_page(0, 25, 10), 1);
    assert_eq!(clamp_page(9, 25, 10), 3);
    assert_eq!(clamp_page(2, 25, 10), 2);
}

#[test]
fn page_slice_returns_window() {
    let data: Vec<u32> = (1..=25).collect();
    assert_eq!(page_slice(&data, 3, 10), vec![21, 22, 23, 24, 25]);
    assert_eq!(page_slice(&data, 1, 10).len(), 10);
    assert_eq!(page_slice(&data, 99, 10), vec![21, 22, 23, 24, 25]);
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Stage {
    Open,
    Closed,
}

fn stage_name(s: Stage) -> &'static str {
    match s {
        Stage::Open => "open",
        Stage::Closed => "closed",
    }
}

#[test]
fn parse_choice_matches_wire_name() {
    let all = [Stage::Open, Stage::Closed];
    assert_eq!(parse_choice(&all, "closed", stage_name), Some(Stage::Closed));
    assert_eq!(parse_choice(&all, "", stage_name), None);
}

#[test]
fn choice_options_lead_with_all() {
    let options = choice_options(&[Stage::Open, Stage::Closed], stage_name, |_| "stage");
    assert_eq!(options[0], (String::new(), "common.all"));
    assert_eq!(options[2], ("closed".to_owned(), "stage"));
}
