use std::cmp::Ordering;

use crate::{
    executor::{coercion::{Coercion, Comparable}, errors::EngineError, row::Record},
    parser::ast::{Clause, ComparisonOp},
};

pub struct Eval;

impl Eval {
    /// Evaluates one WHERE clause against a row. A missing field is an error,
    /// never a silent `false`.
    pub fn evaluate(record: &Record, clause: &Clause) -> Result<bool, EngineError> {
        let Some(row_value) = Coercion::coerce(record.get(&clause.field)) else {
            return Err(EngineError::Field { field: clause.field.clone() });
        };
        let condition_value = Coercion::coerce_text(&clause.value);
        let op = ComparisonOp::try_from(clause.operator.as_str())
            .map_err(|_| EngineError::UnsupportedOperator(clause.operator.clone()))?;

        Ok(Self::compare(&row_value, op, &condition_value))
    }

    /// Conjunction over `clauses`; stops at the first false or error.
    pub fn evaluate_all(record: &Record, clauses: &[Clause]) -> Result<bool, EngineError> {
        for clause in clauses {
            if !Self::evaluate(record, clause)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn compare(l: &Comparable, op: ComparisonOp, r: &Comparable) -> bool {
        match (l, r) {
            (Comparable::Number(a), Comparable::Number(b)) => match op {
                ComparisonOp::Eq => a == b,
                ComparisonOp::NotEq => a != b,
                ComparisonOp::Gt => a > b,
                ComparisonOp::Lt => a < b,
                ComparisonOp::GtEq => a >= b,
                ComparisonOp::LtEq => a <= b,
            },
            (Comparable::Text(a), Comparable::Text(b)) => Self::apply_ordering(op, a.cmp(b)),
            (Comparable::Null, Comparable::Null) => matches!(op, ComparisonOp::Eq),
            (Comparable::Null, _) | (_, Comparable::Null) => matches!(op, ComparisonOp::NotEq),
            // number against text: never equal, ordered lexically by rendering
            (a, b) => match op {
                ComparisonOp::Eq => false,
                ComparisonOp::NotEq => true,
                _ => Self::apply_ordering(op, a.render().cmp(&b.render())),
            },
        }
    }

    fn apply_ordering(op: ComparisonOp, ord: Ordering) -> bool {
        match op {
            ComparisonOp::Eq => ord.is_eq(),
            ComparisonOp::NotEq => ord.is_ne(),
            ComparisonOp::Gt => ord.is_gt(),
            ComparisonOp::Lt => ord.is_lt(),
            ComparisonOp::GtEq => ord.is_ge(),
            ComparisonOp::LtEq => ord.is_le(),
        }
    }
}
