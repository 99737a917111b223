//! Lightweight tabular container for flattened API records.
//!
//! A [`Frame`] is an ordered sequence of [`Record`] rows plus the union of
//! their keys as the column list. It carries the handful of primitives the
//! table assemblers need (stacking, filtering, first-occurrence dedup,
//! multi-key sorting, key-column metadata) and nothing else. Frames are
//! built fresh per call and never cached.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

/// One flat row: a mapping from column name to scalar value.
pub type Record = serde_json::Map<String, Value>;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Record>,
    /// Columns designated as the row identifier, when set.
    key: Option<Vec<String>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Union of row keys, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Append one row, extending the column list with any unseen keys.
    pub fn push_row(&mut self, record: Record) {
        for key in record.keys() {
            if !self.columns.iter().any(|c| c == key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(record);
    }

    /// Stack another frame below this one.
    pub fn append(&mut self, other: Frame) {
        for row in other.rows {
            self.push_row(row);
        }
    }

    /// Keep only the rows for which `predicate` returns true.
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&Record) -> bool,
    {
        self.rows.retain(predicate);
    }

    /// Drop rows whose value in `column` duplicates an earlier row,
    /// keeping the first occurrence. Rows missing the column count as
    /// sharing a single null value.
    pub fn dedup_by_column(&mut self, column: &str) {
        let mut seen = HashSet::new();
        self.rows.retain(|row| {
            let value = row.get(column).cloned().unwrap_or(Value::Null);
            seen.insert(value.to_string())
        });
    }

    /// All values of one column, [`Value::Null`] where a row lacks it.
    pub fn column(&self, name: &str) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| row.get(name).cloned().unwrap_or(Value::Null))
            .collect()
    }

    /// Stable sort of the rows by the given columns, in order.
    pub fn sort_by_columns(&mut self, keys: &[&str]) {
        self.rows.sort_by(|a, b| {
            keys.iter().fold(Ordering::Equal, |ord, key| {
                ord.then_with(|| {
                    cmp_values(
                        a.get(*key).unwrap_or(&Value::Null),
                        b.get(*key).unwrap_or(&Value::Null),
                    )
                })
            })
        });
    }

    /// Designate `columns` as the row identifier. The frame does not
    /// enforce uniqueness; see [`Frame::duplicate_keys`].
    pub fn set_key(&mut self, columns: &[&str]) {
        self.key = Some(columns.iter().map(|c| c.to_string()).collect());
    }

    pub fn key(&self) -> Option<&[String]> {
        self.key.as_deref()
    }

    /// Key tuples shared by more than one row. Duplicates are a
    /// data-quality signal for the caller, not an error.
    pub fn duplicate_keys(&self) -> Vec<Vec<Value>> {
        let Some(key) = &self.key else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut out = Vec::new();
        for row in &self.rows {
            let tuple: Vec<Value> = key
                .iter()
                .map(|c| row.get(c).cloned().unwrap_or(Value::Null))
                .collect();
            let fingerprint = Value::Array(tuple.clone()).to_string();
            if !seen.insert(fingerprint.clone()) && reported.insert(fingerprint) {
                out.push(tuple);
            }
        }
        out
    }
}

/// Ordering over heterogeneous JSON scalars: numbers numerically, strings
/// lexicographically, nulls last; mismatched types fall back to a type
/// rank and then the serialized form.
fn cmp_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (x, y) => type_rank(x)
            .cmp(&type_rank(y))
            .then_with(|| x.to_string().cmp(&y.to_string())),
    }
}

fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Bool(_) => 0,
        Value::Number(_) => 1,
        Value::String(_) => 2,
        Value::Array(_) => 3,
        Value::Object(_) => 4,
        Value::Null => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(pairs: &[(&str, Value)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_columns_are_union_of_row_keys() {
        let mut frame = Frame::new();
        frame.push_row(record(&[("a", json!(1))]));
        frame.push_row(record(&[("a", json!(2)), ("b", json!("x"))]));
        assert_eq!(frame.columns(), ["a", "b"]);
        assert_eq!(frame.column("b"), vec![Value::Null, json!("x")]);
    }

    #[test]
    fn test_append_stacks_rows() {
        let mut left = Frame::new();
        left.push_row(record(&[("a", json!(1))]));
        let mut right = Frame::new();
        right.push_row(record(&[("b", json!(2))]));
        left.append(right);
        assert_eq!(left.len(), 2);
        assert_eq!(left.columns(), ["a", "b"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut frame = Frame::new();
        frame.push_row(record(&[("rsid", json!("rs1")), ("n", json!(1))]));
        frame.push_row(record(&[("rsid", json!("rs2")), ("n", json!(2))]));
        frame.push_row(record(&[("rsid", json!("rs1")), ("n", json!(3))]));
        frame.dedup_by_column("rsid");
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.rows()[0]["n"], json!(1));
        assert_eq!(frame.rows()[1]["n"], json!(2));
    }

    #[test]
    fn test_sort_by_columns_multi_key() {
        let mut frame = Frame::new();
        frame.push_row(record(&[("chrom", json!("2")), ("pos", json!(100))]));
        frame.push_row(record(&[("chrom", json!("1")), ("pos", json!(200))]));
        frame.push_row(record(&[("chrom", json!("1")), ("pos", json!(50))]));
        frame.sort_by_columns(&["chrom", "pos"]);
        let positions: Vec<Value> = frame.column("pos");
        assert_eq!(positions, vec![json!(50), json!(200), json!(100)]);
    }

    #[test]
    fn test_sort_puts_nulls_last() {
        let mut frame = Frame::new();
        frame.push_row(record(&[("pos", Value::Null)]));
        frame.push_row(record(&[("pos", json!(3))]));
        frame.sort_by_columns(&["pos"]);
        assert_eq!(frame.column("pos"), vec![json!(3), Value::Null]);
    }

    #[test]
    fn test_duplicate_keys_surfaced() {
        let mut frame = Frame::new();
        frame.push_row(record(&[("c", json!("1")), ("p", json!(10))]));
        frame.push_row(record(&[("c", json!("1")), ("p", json!(10))]));
        frame.push_row(record(&[("c", json!("1")), ("p", json!(11))]));
        frame.set_key(&["c", "p"]);
        let dups = frame.duplicate_keys();
        assert_eq!(dups, vec![vec![json!("1"), json!(10)]]);
    }

    #[test]
    fn test_empty_frame_is_well_formed() {
        let frame = Frame::new();
        assert!(frame.is_empty());
        assert!(frame.columns().is_empty());
        assert!(frame.duplicate_keys().is_empty());
    }
}
