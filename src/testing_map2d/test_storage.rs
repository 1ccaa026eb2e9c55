use crate::map2d::{create_instance, Map2D};
use crate::testing_map2d::{create_2x2_map, key};

#[test]
fn test_put_into_new_row_grows_size_by_one() {
    let mut map = create_instance::<String, i32, f64>();
    assert_eq!(map.size(), 0);
    map.put(key("A"), 1, 2.3);
    assert_eq!(map.size(), 1);
    map.put(key("B"), 1, 2.5);
    assert_eq!(map.size(), 2);
}

#[test]
fn test_put_replaces_value_under_same_key() {
    let mut map = create_instance::<String, i32, f64>();
    map.put(key("A"), 1, 2.3);
    map.put(key("A"), 1, 9.9);
    assert_eq!(map.get(&key("A"), &1), Some(&9.9));
    // still exactly one entry for the pair
    assert_eq!(map.size(), 1);
}

#[test]
fn test_put_returns_previous_value() {
    let mut map = create_instance::<String, i32, f64>();
    assert_eq!(map.put(key("A"), 1, 2.3), None);
    assert_eq!(map.put(key("A"), 1, 9.9), Some(2.3));
}

#[test]
fn test_size_counts_values_not_rows() {
    let map = create_2x2_map();
    assert_eq!(map.size(), 4);
    assert_eq!(map.row_map_view().len(), 2);
}

#[test]
fn test_get_missing_coordinates() {
    let map = create_2x2_map();
    assert_eq!(map.get(&key("C"), &1), None);
    assert_eq!(map.get(&key("A"), &3), None);
}

#[test]
fn test_get_or_default() {
    let map = create_2x2_map();
    assert_eq!(map.get_or_default(&key("A"), &1, 0.0), 2.3);
    assert_eq!(map.get_or_default(&key("C"), &1, 0.0), 0.0);
}

#[test]
fn test_remove_returns_previous_value() {
    let mut map = create_2x2_map();
    assert_eq!(map.remove(&key("A"), &1), Some(2.3));
    assert_eq!(map.get(&key("A"), &1), None);
    assert_eq!(map.size(), 3);
    // row A still holds column 2
    assert_eq!(map.has_row(&key("A")), true);
}

#[test]
fn test_remove_missing_is_none() {
    let mut map = create_2x2_map();
    assert_eq!(map.remove(&key("C"), &1), None);
    assert_eq!(map.remove(&key("A"), &3), None);
    assert_eq!(map.size(), 4);
}

#[test]
fn test_remove_last_value_prunes_row() {
    let mut map = create_2x2_map();
    map.remove(&key("A"), &1);
    map.remove(&key("A"), &2);
    assert_eq!(map.has_row(&key("A")), false);
    assert_eq!(map.non_empty(), true);
    map.remove(&key("B"), &1);
    map.remove(&key("B"), &2);
    assert_eq!(map.is_empty(), true);
    assert_eq!(map.size(), 0);
}

#[test]
fn test_clear_resets_to_empty() {
    let mut map = create_2x2_map();
    map.clear();
    assert_eq!(map.is_empty(), true);
    assert_eq!(map.non_empty(), false);
    assert_eq!(map.size(), 0);
    assert_eq!(map.has_row(&key("A")), false);
}
