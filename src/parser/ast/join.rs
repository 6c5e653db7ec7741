use serde::Serialize;

use crate::parser::{ParseError, QueryParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
}

impl TryFrom<&str> for JoinType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase().as_str() {
            "INNER" => Ok(Self::Inner),
            "LEFT" => Ok(Self::Left),
            "RIGHT" => Ok(Self::Right),
            other => Err(format!("Unsupported JOIN type: {other}")),
        }
    }
}

/// `ON left = right`. `left` is read from the main row, `right` from the
/// join row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinCondition {
    pub left: String,
    pub right: String,
}

impl JoinCondition {
    pub fn new(left: &str, right: &str) -> Self {
        Self { left: left.to_string(), right: right.to_string() }
    }

    /// Splits `table.field` into its parts; a bare name has no table.
    pub fn split(qualified: &str) -> (Option<&str>, &str) {
        match qualified.split_once('.') {
            Some((table, field)) => (Some(table), field),
            None => (None, qualified),
        }
    }
}

/// The single join partner of a statement. The join keyword is kept as
/// written (`INNER`, `LEFT`, ...) and resolved at execution time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinClause {
    pub join_type: String,
    pub table: String,
    pub condition: JoinCondition,
}

pub struct JoinParser;

impl JoinParser {
    pub fn parse(parser: &mut QueryParser) -> Result<JoinClause, ParseError> {
        let pivot = parser.position;
        let Some(keyword_length) = parser.join_keyword_length() else {
            return ParseError::new("Invalid join", pivot, parser).err();
        };

        let join_type = if parser.comparers.join.compare(parser) {
            "INNER".to_string()
        } else {
            parser.read_word()
        };
        parser.position = pivot;
        parser.jump(keyword_length);
        parser.next_non_whitespace();

        let table = parser.read_word();
        if table.is_empty() {
            return ParseError::new("Expected join table", parser.position, parser).err();
        }
        parser.next_non_whitespace();

        if !parser.comparers.on.compare(parser) {
            return ParseError::new("Expected ON after join table", parser.position, parser).err();
        }
        parser.jump(parser.comparers.on.length);
        parser.next_non_whitespace();

        let left = parser.read_operand();
        parser.next_non_whitespace();
        let op_pivot = parser.position;
        let operator = parser.read_operator();
        if left.is_empty() || operator != "=" {
            return ParseError::new("Join condition must be 'table.field = table.field'", op_pivot, parser).err();
        }
        parser.next_non_whitespace();
        let right = parser.read_operand();
        if right.is_empty() {
            return ParseError::new("Expected right side of join condition", parser.position, parser).err();
        }

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token after join", parser.position, parser).err();
        }

        Ok(JoinClause {
            join_type,
            table,
            condition: JoinCondition { left, right },
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{JoinParser, JoinType}, Phase, QueryParser};

    fn parser_at_join(text: &str) -> QueryParser {
        let mut parser = QueryParser::new(text);
        parser.phase = Phase::Collections;
        assert!(parser.check_next_phase());
        assert_eq!(parser.phase, Phase::Joins);
        parser
    }

    #[test]
    fn inner_join() {
        let mut parser = parser_at_join("INNER JOIN enrollment ON student.id = enrollment.student_id");
        let join = JoinParser::parse(&mut parser).expect("Failed to parse join");

        assert_eq!(join.join_type, "INNER");
        assert_eq!(join.table, "enrollment");
        assert_eq!(join.condition.left, "student.id");
        assert_eq!(join.condition.right, "enrollment.student_id");
        assert_eq!(parser.phase, Phase::EOF);
    }

    #[test]
    fn bare_join_is_inner_and_condition_needs_no_spaces() {
        let mut parser = parser_at_join("JOIN enrollment ON student.id=enrollment.student_id WHERE x = 1");
        let join = JoinParser::parse(&mut parser).expect("Failed to parse join");

        assert_eq!(join.join_type, "INNER");
        assert_eq!(join.condition.right, "enrollment.student_id");
        assert_eq!(parser.phase, Phase::Criteria);
    }

    #[test]
    fn unknown_join_keyword_is_kept_for_the_engine() {
        let mut parser = parser_at_join("full join enrollment ON a.id = b.id");
        let join = JoinParser::parse(&mut parser).expect("Failed to parse join");

        assert_eq!(join.join_type, "full");
        assert!(JoinType::try_from(join.join_type.as_str()).is_err());
    }

    #[test]
    fn join_types_resolve_case_insensitively() {
        assert_eq!(JoinType::try_from("inner"), Ok(JoinType::Inner));
        assert_eq!(JoinType::try_from("Left"), Ok(JoinType::Left));
        assert_eq!(JoinType::try_from("RIGHT"), Ok(JoinType::Right));
        assert!(JoinType::try_from("CROSS").is_err());
    }

    #[test]
    fn missing_on_is_an_error() {
        let mut parser = parser_at_join("LEFT JOIN enrollment WHERE a = 1");
        let err = JoinParser::parse(&mut parser).unwrap_err();
        assert_eq!(err.message, "Expected ON after join table");
    }

    #[test]
    fn non_equality_condition_is_an_error() {
        let mut parser = parser_at_join("LEFT JOIN enrollment ON a.id > b.id");
        assert!(JoinParser::parse(&mut parser).is_err());
    }
}
