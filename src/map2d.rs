use std::collections::HashMap;
use std::hash::Hash;

use crate::hash_map2d::HashMap2D;

/// A two dimensional map: every value sits under a (row key, column key)
/// pair, like a cell in a sheet. Putting to an occupied pair replaces the
/// value there. Row and column keys use the standard equality and hashing
/// mechanisms, so neither key type needs any ordering.
///
/// All view producing methods hand back independently owned copies; later
/// changes to the map are never visible through an earlier view, and
/// changing a view never touches the map.
pub trait Map2D<R, C, V>
where
    R: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    V: Clone,
{
    /// Puts a value at the given row and column keys, replacing whatever
    /// was there. Returns the value previously held at that coordinate.
    fn put(&mut self, row_key: R, column_key: C, value: V) -> Option<V>;

    /// Gets the value at the given coordinate, `None` if the row does not
    /// exist or the row has nothing under that column.
    fn get(&self, row_key: &R, column_key: &C) -> Option<&V>;

    /// Like `get`, but substituting `default` when the coordinate is empty.
    fn get_or_default(&self, row_key: &R, column_key: &C, default: V) -> V {
        self.get(row_key, column_key).cloned().unwrap_or(default)
    }

    /// Removes and returns the value at the given coordinate, `None` if
    /// there was nothing to remove.
    fn remove(&mut self, row_key: &R, column_key: &C) -> Option<V>;

    fn is_empty(&self) -> bool;

    fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Number of values stored across the whole map, not the row count.
    fn size(&self) -> usize;

    /// Removes every value, returning the map to its initial empty state.
    fn clear(&mut self);

    /// Snapshot of all column to value pairs within one row. Empty map if
    /// the row holds nothing.
    fn row_view(&self, row_key: &R) -> HashMap<C, V>;

    /// Snapshot of all row to value pairs within one column. Scans every
    /// row, there is no column index.
    fn column_view(&self, column_key: &C) -> HashMap<R, V>;

    /// Whether any coordinate holds a value equal to `value`.
    fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq;

    fn has_key(&self, row_key: &R, column_key: &C) -> bool;

    fn has_row(&self, row_key: &R) -> bool;

    fn has_column(&self, column_key: &C) -> bool;

    /// Snapshot of the whole map keyed by row, each inner map its own copy.
    fn row_map_view(&self) -> HashMap<R, HashMap<C, V>>;

    /// Snapshot of the whole map keyed by column.
    fn column_map_view(&self) -> HashMap<C, HashMap<R, V>>;

    /// Copies every column to value pair of the given row into `target`,
    /// a map the caller owns. Leaves `target` untouched when the row is
    /// absent. Returns the map itself for chaining.
    fn fill_map_from_row(&self, target: &mut HashMap<C, V>, row_key: &R) -> &Self {
        for (column_key, value) in self.row_view(row_key) {
            target.insert(column_key, value);
        }
        self
    }

    /// Copies every row to value pair of the given column into `target`.
    fn fill_map_from_column(&self, target: &mut HashMap<R, V>, column_key: &C) -> &Self {
        for (row_key, value) in self.column_view(column_key) {
            target.insert(row_key, value);
        }
        self
    }

    /// Puts every entry of the flat `source` map under the given row, each
    /// source key becoming the column part of the coordinate.
    fn put_all_to_row(&mut self, source: &HashMap<C, V>, row_key: R) -> &mut Self {
        for (column_key, value) in source {
            self.put(row_key.clone(), column_key.clone(), value.clone());
        }
        self
    }

    /// Puts every entry of the flat `source` map under the given column,
    /// each source key becoming the row part of the coordinate.
    fn put_all_to_column(&mut self, source: &HashMap<R, V>, column_key: C) -> &mut Self {
        for (row_key, value) in source {
            self.put(row_key.clone(), column_key.clone(), value.clone());
        }
        self
    }

    /// Puts every (row, column, value) triple of `source` into this map,
    /// replacing on coordinate collision. `source` is only read.
    fn put_all<M>(&mut self, source: &M) -> &mut Self
    where
        M: Map2D<R, C, V>,
    {
        for (row_key, columns) in source.row_map_view() {
            for (column_key, value) in columns {
                self.put(row_key.clone(), column_key, value);
            }
        }
        self
    }

    /// Copies this map into a new one, converting rows, columns and values
    /// through the given functions. When two source coordinates land on the
    /// same converted coordinate, exactly one value survives: last write
    /// wins under the backing map's unspecified iteration order, so which
    /// one is not deterministic across runs.
    fn copy_with_conversion<R2, C2, V2, FR, FC, FV>(
        &self,
        row_fn: FR,
        column_fn: FC,
        value_fn: FV,
    ) -> HashMap2D<R2, C2, V2>
    where
        R2: Eq + Hash + Clone,
        C2: Eq + Hash + Clone,
        V2: Clone,
        FR: Fn(&R) -> R2,
        FC: Fn(&C) -> C2,
        FV: Fn(&V) -> V2,
    {
        let mut result = HashMap2D::new();
        for (row_key, columns) in self.row_map_view() {
            for (column_key, value) in &columns {
                result.put(row_fn(&row_key), column_fn(column_key), value_fn(value));
            }
        }
        result
    }
}

/// Creates a new empty map using the default implementation.
pub fn create_instance<R, C, V>() -> HashMap2D<R, C, V>
where
    R: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    V: Clone,
{
    HashMap2D::new()
}
