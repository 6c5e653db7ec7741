use crate::parser::{ast::Clause, ParseError, Phase, QueryParser};

pub struct WhereParser;

impl WhereParser {
    /// Reads `WHERE field op value [AND field op value]*`.
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<Clause>, ParseError> {
        if !parser.comparers.r#where.compare(parser) {
            return ParseError::new("Invalid where", parser.position, parser).err();
        }
        parser.jump(parser.comparers.r#where.length);

        let mut clauses = vec![];
        while parser.phase == Phase::Criteria {
            clauses.push(Self::parse_clause(parser)?);

            if parser.check_next_phase() {
                break;
            }
            if !parser.comparers.and.compare(parser) {
                return ParseError::new("Expected AND", parser.position, parser).err();
            }
            parser.jump(parser.comparers.and.length);
        }

        Ok(clauses)
    }

    fn parse_clause(parser: &mut QueryParser) -> Result<Clause, ParseError> {
        parser.next_non_whitespace();
        let pivot = parser.position;
        let field = parser.read_operand();
        if field.is_empty() {
            return ParseError::new("Expected field", pivot, parser).err();
        }

        parser.next_non_whitespace();
        let pivot = parser.position;
        let operator = parser.read_operator();
        if operator.is_empty() {
            return ParseError::new("Expected operator", pivot, parser).err();
        }

        parser.next_non_whitespace();
        let pivot = parser.position;
        let value = parser.read_value()?;
        if value.is_empty() {
            return ParseError::new("Expected value", pivot, parser).err();
        }

        Ok(Clause { field, operator, value })
    }
}
