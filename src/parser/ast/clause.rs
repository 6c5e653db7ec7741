use serde::Serialize;

/// One `field op value` comparison of a WHERE clause.
///
/// `operator` and `value` are kept as written: the operator is resolved when
/// the clause is evaluated, and a quoted value keeps its quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clause {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl Clause {
    pub fn new(field: &str, operator: &str, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }
}
