use super::*;

#[test]
fn tallest_bar_is_full_height() {
    assert_eq!(bar_heights(&[50, 100, 25]), vec![50, 100, 25]);
}

#[test]
fn all_zero_values_draw_flat() {
    assert_eq!(bar_heights(&[0, 0]), vec![0, 0]);
    assert!(bar_heights(&[]).is_empty());
}

#[test]
fn negative_values_clamp_to_zero() {
    assert_eq!(bar_heights(&[-10, 40]), vec![0, 100]);
}
