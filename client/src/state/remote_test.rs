use super::*;

#[test]
fn default_is_idle_and_empty() {
    let remote = Remote::<Vec<u8>>::default();
    assert!(!remote.loading);
    assert!(remote.data.is_none());
    assert!(!remote.is_pending());
}

#[test]
fn start_then_ok_stores_data() {
    let mut remote = Remote::default();
    remote.start();
    assert!(remote.is_pending());
    remote.finish(Ok(vec![1, 2]));
    assert!(!remote.loading);
    assert_eq!(remote.data, Some(vec![1, 2]));
}

#[test]
fn error_keeps_previous_data() {
    let mut remote = Remote::default();
    remote.finish(Ok(vec![1]));
    remote.start();
    assert!(!remote.is_pending());
    remote.finish(Err(ApiError::Server(500)));
    assert_eq!(remote.data, Some(vec![1]));
    assert_eq!(remote.error, Some(ApiError::Server(500)));
}

#[test]
fn start_clears_previous_error() {
    let mut remote = Remote::<u8>::default();
    remote.finish(Err(ApiError::NotFound));
    remote.start();
    assert_eq!(remote.error, None);
}

#[test]
fn upsert_replaces_matching_item() {
    let mut remote = Remote::default();
    remote.finish(Ok(vec![(1, "a"), (2, "b")]));
    remote.upsert((2, "B"), |x| x.0 == 2);
    assert_eq!(remote.data, Some(vec![(1, "a"), (2, "B")]));
}

#[test]
fn upsert_prepends_new_item() {
    let mut remote = Remote::default();
    remote.finish(Ok(vec![(1, "a")]));
    remote.upsert((3, "c"), |x| x.0 == 3);
    assert_eq!(remote.data, Some(vec![(3, "c"), (1, "a")]));
}

#[test]
fn edit_is_noop_without_data() {
    let mut remote = Remote::<Vec<u8>>::default();
    remote.edit(|items| items.push(1));
    assert!(remote.data.is_none());
}
