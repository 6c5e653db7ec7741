use crate::{
    executor::{errors::EngineError, predicate::Eval, row::Table},
    parser::ast::Clause,
};

pub struct Filter;

impl Filter {
    /// Keeps the rows satisfying every clause, in input order. The first
    /// failing clause aborts the whole filter.
    pub fn apply(rows: Table, clauses: &[Clause]) -> Result<Table, EngineError> {
        if clauses.is_empty() {
            return Ok(rows);
        }

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            if Eval::evaluate_all(&row, clauses)? {
                out.push(row);
            }
        }
        Ok(out)
    }
}
