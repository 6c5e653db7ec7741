use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    executor::{row::Table, value::FieldValue},
    parser::ast::{OrderBy, SortOrder},
};

pub struct Sorter;

impl Sorter {
    /// Compares RAW values, so text sorts lexically even when it holds
    /// digits. Null and absent sort last in both directions; across kinds
    /// numbers come before text.
    pub fn cmp_for_sort(a: Option<&FieldValue>, b: Option<&FieldValue>, ascending: bool) -> Ordering {
        let a = a.filter(|v| !v.is_null());
        let b = b.filter(|v| !v.is_null());

        let ord = match (a, b) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => OrderedFloat(*x).cmp(&OrderedFloat(*y)),
            (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => x.cmp(y),
            (Some(FieldValue::Number(_)), Some(_)) => Ordering::Less,
            (Some(_), Some(_)) => Ordering::Greater,
        };

        if ascending { ord } else { ord.reverse() }
    }

    /// Stable composite sort: the first field that differs decides, ties
    /// keep their input order.
    pub fn sort(rows: &mut Table, order_by: &[OrderBy]) {
        if order_by.is_empty() {
            return;
        }
        rows.sort_by(|a, b| {
            for key in order_by {
                let ascending = key.order == SortOrder::Asc;
                let ord = Self::cmp_for_sort(a.get(&key.field_name), b.get(&key.field_name), ascending);
                if !ord.is_eq() {
                    return ord;
                }
            }
            Ordering::Equal
        });
    }

    pub fn limit(rows: &mut Table, limit: Option<usize>) {
        if let Some(limit) = limit {
            rows.truncate(limit);
        }
    }
}
