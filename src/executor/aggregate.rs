use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::{
    executor::{coercion::Coercion, row::{Record, Table}, value::FieldValue},
    parser::ast::{AggregateFunc, AggregateSpec},
};

/// Running state of one aggregate over one set of rows.
///
/// Field values are read with `Coercion::parse_float_prefix`, so a
/// non-numeric value turns SUM/AVG/MIN/MAX into NaN instead of failing.
pub trait Accumulator {
    fn update(&mut self, row: &Record);

    fn finalize(&self) -> FieldValue;
}

#[derive(Default)]
struct CountAcc {
    rows: usize,
}

impl Accumulator for CountAcc {
    fn update(&mut self, _row: &Record) { self.rows += 1; }

    fn finalize(&self) -> FieldValue { FieldValue::from(self.rows) }
}

struct SumAcc {
    field: Option<String>,
    sum: f64,
}

impl Accumulator for SumAcc {
    fn update(&mut self, row: &Record) { self.sum += read(row, &self.field); }

    fn finalize(&self) -> FieldValue { FieldValue::Number(self.sum) }
}

struct AvgAcc {
    field: Option<String>,
    sum: f64,
    rows: usize,
}

impl Accumulator for AvgAcc {
    fn update(&mut self, row: &Record) {
        self.sum += read(row, &self.field);
        self.rows += 1;
    }

    // 0 / 0 on no rows is NaN
    fn finalize(&self) -> FieldValue { FieldValue::Number(self.sum / self.rows as f64) }
}

struct ExtremumAcc {
    field: Option<String>,
    current: f64,
    keep_smaller: bool,
}

impl Accumulator for ExtremumAcc {
    fn update(&mut self, row: &Record) {
        let value = read(row, &self.field);
        self.current = if self.current.is_nan() || value.is_nan() {
            f64::NAN
        } else if self.keep_smaller {
            self.current.min(value)
        } else {
            self.current.max(value)
        };
    }

    fn finalize(&self) -> FieldValue { FieldValue::Number(self.current) }
}

fn read(row: &Record, field: &Option<String>) -> f64 {
    Coercion::parse_float_prefix(field.as_deref().and_then(|f| row.get(f)))
}

/// Fresh accumulator for `spec`. On no rows SUM is 0, AVG NaN, MIN +Inf and MAX -Inf.
pub fn create_accumulator(spec: &AggregateSpec) -> Box<dyn Accumulator> {
    let field = spec.arg.field().map(str::to_string);
    match spec.func {
        AggregateFunc::Count => Box::new(CountAcc::default()),
        AggregateFunc::Sum => Box::new(SumAcc { field, sum: 0.0 }),
        AggregateFunc::Avg => Box::new(AvgAcc { field, sum: 0.0, rows: 0 }),
        AggregateFunc::Min => Box::new(ExtremumAcc { field, current: f64::INFINITY, keep_smaller: true }),
        AggregateFunc::Max => Box::new(ExtremumAcc { field, current: f64::NEG_INFINITY, keep_smaller: false }),
    }
}

/// One component of a group key. Numbers hash by bit pattern through
/// `OrderedFloat`, so NaN groups with NaN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyPart {
    Absent,
    Null,
    Number(OrderedFloat<f64>),
    Text(String),
}

impl From<Option<&FieldValue>> for KeyPart {
    fn from(value: Option<&FieldValue>) -> Self {
        match value {
            None => Self::Absent,
            Some(FieldValue::Null) => Self::Null,
            Some(FieldValue::Number(n)) => Self::Number(OrderedFloat(*n)),
            Some(FieldValue::Text(s)) => Self::Text(s.clone()),
        }
    }
}

type GroupKey = Vec<KeyPart>;

type GroupEntry = (Record, Vec<Box<dyn Accumulator>>);

pub struct Aggregator;

impl Aggregator {
    /// Aggregates over the whole input: exactly one record holding one
    /// column per aggregate, keyed by its expression text.
    pub fn whole_table(rows: &[Record], aggregates: &[AggregateSpec]) -> Record {
        let mut accumulators: Vec<_> = aggregates.iter().map(create_accumulator).collect();
        for row in rows {
            accumulators.iter_mut().for_each(|acc| acc.update(row));
        }

        aggregates
            .iter()
            .zip(accumulators)
            .map(|(spec, acc)| (spec.expression.clone(), acc.finalize()))
            .collect()
    }

    /// Partitions rows by the values of `group_by` and aggregates each group.
    ///
    /// Keys compare structurally, so `("a-b", "c")` and `("a", "b-c")` stay
    /// apart. Groups come out in first-seen order; each record holds the
    /// group fields (from the group's first row, `Null` when absent) followed
    /// by the aggregate columns.
    pub fn grouped(rows: &[Record], group_by: &[String], aggregates: &[AggregateSpec]) -> Table {
        let mut groups: IndexMap<GroupKey, GroupEntry> = IndexMap::new();

        for row in rows {
            let key: GroupKey = group_by.iter().map(|f| KeyPart::from(row.get(f))).collect();
            let entry = groups.entry(key).or_insert_with(|| {
                let head = group_by
                    .iter()
                    .map(|f| (f.clone(), row.get(f).cloned().unwrap_or(FieldValue::Null)))
                    .collect();
                (head, aggregates.iter().map(create_accumulator).collect())
            });
            entry.1.iter_mut().for_each(|acc| acc.update(row));
        }

        groups
            .into_values()
            .map(|(mut record, accumulators)| {
                for (spec, acc) in aggregates.iter().zip(accumulators) {
                    record.insert(spec.expression.clone(), acc.finalize());
                }
                record
            })
            .collect()
    }
}
