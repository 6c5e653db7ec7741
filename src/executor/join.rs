use crate::{
    executor::{row::{Record, Table}, value::FieldValue},
    parser::ast::{JoinCondition, JoinType},
};

/// Combines the main table with one join partner and projects the result.
///
/// Rows match on RAW equality of the condition fields; unlike WHERE, no
/// coercion is applied, so `"1"` never matches `"01"`. A field absent from
/// either row never matches.
pub struct JoinEngine;

impl JoinEngine {
    pub fn join(
        join_type: JoinType,
        main: &[Record],
        joined: &[Record],
        condition: &JoinCondition,
        fields: &[String],
        table: &str,
    ) -> Table {
        match join_type {
            JoinType::Inner => Self::inner(main, joined, condition, fields, table),
            JoinType::Left => Self::left(main, joined, condition, fields, table),
            JoinType::Right => Self::right(main, joined, condition, fields, table),
        }
    }

    /// One row per matching pair; unmatched main rows disappear.
    pub fn inner(main: &[Record], joined: &[Record], condition: &JoinCondition, fields: &[String], table: &str) -> Table {
        main.iter()
            .flat_map(|main_row| {
                joined
                    .iter()
                    .filter(move |join_row| Self::matches(main_row, join_row, condition))
                    .map(move |join_row| Self::project_row(main_row, Some(join_row), fields, table, false))
            })
            .collect()
    }

    /// Like `inner`, but an unmatched main row yields one row whose join side is null.
    pub fn left(main: &[Record], joined: &[Record], condition: &JoinCondition, fields: &[String], table: &str) -> Table {
        let mut out = Vec::new();
        for main_row in main {
            let before = out.len();
            for join_row in joined.iter().filter(|join_row| Self::matches(main_row, join_row, condition)) {
                out.push(Self::project_row(main_row, Some(join_row), fields, table, true));
            }
            if out.len() == before {
                out.push(Self::project_row(main_row, None, fields, table, true));
            }
        }
        out
    }

    /// Driven by the join table: each join row pairs with its FIRST matching
    /// main row only, or with an all-null row shaped like the main table.
    pub fn right(main: &[Record], joined: &[Record], condition: &JoinCondition, fields: &[String], table: &str) -> Table {
        let placeholder = main.first().map(Record::null_shaped).unwrap_or_default();

        joined
            .iter()
            .map(|join_row| {
                let join_value = Self::lookup(join_row, &condition.right);
                let main_row = main
                    .iter()
                    .find(|main_row| Self::raw_eq(Self::lookup(main_row, &condition.left), join_value))
                    .unwrap_or(&placeholder);
                Self::project_row(main_row, Some(join_row), fields, table, true)
            })
            .collect()
    }

    fn matches(main_row: &Record, join_row: &Record, condition: &JoinCondition) -> bool {
        let (_, left) = JoinCondition::split(&condition.left);
        let (_, right) = JoinCondition::split(&condition.right);
        Self::raw_eq(main_row.get(left), join_row.get(right))
    }

    /// Qualified key first, then the bare field name. Only an absent
    /// qualified key falls back; one holding empty text is used as is.
    fn lookup<'a>(row: &'a Record, qualified: &str) -> Option<&'a FieldValue> {
        let (_, field) = JoinCondition::split(qualified);
        row.get(qualified).or_else(|| row.get(field))
    }

    fn raw_eq(a: Option<&FieldValue>, b: Option<&FieldValue>) -> bool {
        matches!((a, b), (Some(a), Some(b)) if a == b)
    }

    /// Builds one output row.
    ///
    /// With `include_all_main_fields` every main key is first copied as
    /// `table.key`, unqualified fields belong to the main table and a missing
    /// join side reads as `Null`. Without it, only fields qualified with the
    /// main table read the main row; everything else reads the join row.
    /// A value absent from its source row is left out.
    pub fn project_row(
        main_row: &Record,
        join_row: Option<&Record>,
        fields: &[String],
        table: &str,
        include_all_main_fields: bool,
    ) -> Record {
        let mut out = Record::new();

        if include_all_main_fields {
            for (key, value) in main_row.iter() {
                out.insert(format!("{table}.{key}"), value.clone());
            }
        }

        for field in fields {
            let (qualifier, name) = JoinCondition::split(field);
            let from_main = if include_all_main_fields {
                qualifier.unwrap_or(table) == table
            } else {
                qualifier == Some(table)
            };

            let value = match (from_main, join_row) {
                (true, _) => main_row.get(name).cloned(),
                (false, Some(join_row)) => join_row.get(name).cloned(),
                (false, None) => Some(FieldValue::Null),
            };
            if let Some(value) = value {
                out.insert(field.clone(), value);
            }
        }

        out
    }
}
