use std::collections::HashMap;
use std::hash::Hash;

use ndarray::Array2;

use crate::map2d::Map2D;

/// Default `Map2D` implementation backed by a map of rows, each row owning
/// its own column to value map. Rows appear on first put and are pruned
/// when their last value is removed, so `has_row` never reports a row that
/// holds nothing.
#[derive(Debug, Clone)]
pub struct HashMap2D<R: Eq + Hash + Clone, C: Eq + Hash + Clone, V: Clone> {
    rows: HashMap<R, HashMap<C, V>>,
}

impl<R: Eq + Hash + Clone, C: Eq + Hash + Clone, V: Clone> HashMap2D<R, C, V> {
    pub fn new() -> Self {
        HashMap2D {
            rows: HashMap::new(),
        }
    }

    /// Iterates every (row key, column key, value) triple in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (&R, &C, &V)> {
        self.rows
            .iter()
            .flat_map(|(row_key, columns)| columns.iter().map(move |(column_key, value)| (row_key, column_key, value)))
    }
}

impl<R: Eq + Hash + Clone, C: Eq + Hash + Clone, V: Clone> Default for HashMap2D<R, C, V> {
    fn default() -> Self {
        HashMap2D::new()
    }
}

impl<R: Eq + Hash + Clone, C: Eq + Hash + Clone, V: Clone> Map2D<R, C, V> for HashMap2D<R, C, V> {
    fn put(&mut self, row_key: R, column_key: C, value: V) -> Option<V> {
        self.rows
            .entry(row_key)
            .or_insert_with(HashMap::new)
            .insert(column_key, value)
    }

    fn get(&self, row_key: &R, column_key: &C) -> Option<&V> {
        self.rows.get(row_key)?.get(column_key)
    }

    fn remove(&mut self, row_key: &R, column_key: &C) -> Option<V> {
        let columns = self.rows.get_mut(row_key)?;
        let removed = columns.remove(column_key);
        if columns.is_empty() {
            self.rows.remove(row_key);
        }
        removed
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn size(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    fn clear(&mut self) {
        self.rows.clear()
    }

    fn row_view(&self, row_key: &R) -> HashMap<C, V> {
        self.rows.get(row_key).cloned().unwrap_or_default()
    }

    fn column_view(&self, column_key: &C) -> HashMap<R, V> {
        let mut result = HashMap::new();
        for (row_key, columns) in &self.rows {
            if let Some(value) = columns.get(column_key) {
                result.insert(row_key.clone(), value.clone());
            }
        }
        result
    }

    fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.rows
            .values()
            .any(|columns| columns.values().any(|v| v == value))
    }

    fn has_key(&self, row_key: &R, column_key: &C) -> bool {
        self.rows
            .get(row_key)
            .map_or(false, |columns| columns.contains_key(column_key))
    }

    fn has_row(&self, row_key: &R) -> bool {
        self.rows.contains_key(row_key)
    }

    fn has_column(&self, column_key: &C) -> bool {
        self.rows
            .values()
            .any(|columns| columns.contains_key(column_key))
    }

    fn row_map_view(&self) -> HashMap<R, HashMap<C, V>> {
        self.rows.clone()
    }

    fn column_map_view(&self) -> HashMap<C, HashMap<R, V>> {
        let mut result = HashMap::new();
        for columns in self.rows.values() {
            for column_key in columns.keys() {
                if !result.contains_key(column_key) {
                    result.insert(column_key.clone(), self.column_view(column_key));
                }
            }
        }
        result
    }
}

impl<V: Clone> From<&Vec<V>> for HashMap2D<usize, usize, V> {
    fn from(vec: &Vec<V>) -> Self {
        let mut map = HashMap2D::new();
        for (i, value) in vec.iter().enumerate() {
            map.put(0, i, value.clone());
        }
        map
    }
}

impl<V: Clone> From<&Array2<V>> for HashMap2D<usize, usize, V> {
    fn from(arr: &Array2<V>) -> Self {
        let mut map = HashMap2D::new();
        for ((row, col), value) in arr.indexed_iter() {
            map.put(row, col, value.clone());
        }
        map
    }
}

#[test]
fn test_from_vec_fills_row_zero() {
    let map = HashMap2D::from(&vec![10, 20, 30]);
    assert_eq!(map.size(), 3);
    assert_eq!(map.get(&0, &0), Some(&10));
    assert_eq!(map.get(&0, &2), Some(&30));
    assert_eq!(map.has_row(&1), false);
}

#[test]
fn test_from_array2_keeps_every_cell() {
    let arr = ndarray::arr2(&[[1, 2, 3], [4, 5, 6]]);
    let map = HashMap2D::from(&arr);
    assert_eq!(map.size(), 6);
    assert_eq!(map.get(&1, &2), Some(&6));
    assert_eq!(map.column_view(&0).len(), 2);
}
