use super::*;

#[test]
fn short_ranges_show_every_page() {
    assert_eq!(page_window(2, 3), vec![Some(1), Some(2), Some(3)]);
    assert_eq!(page_window(1, 1), vec![Some(1)]);
}

#[test]
fn long_ranges_collapse_with_gaps() {
    assert_eq!(page_window(5, 10), vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]);
}

#[test]
fn edges_have_single_gap() {
    assert_eq!(page_window(1, 8), vec![Some(1), Some(2), None, Some(8)]);
    assert_eq!(page_window(8, 8), vec![Some(1), None, Some(7), Some(8)]);
}

#[test]
fn out_of_range_current_is_clamped() {
    assert_eq!(page_window(0, 0), vec![Some(1)]);
    assert_eq!(page_window(99, 3), vec![Some(1), Some(2), Some(3)]);
}
