use crate::parser::{ParseError, Phase, QueryParser};

pub struct ProjectionParser;

impl ProjectionParser {
    /// Reads the comma separated projection list that follows `SELECT`.
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<String>, ParseError> {
        let mut fields = vec![];
        while parser.phase == Phase::Projection {
            parser.next_non_whitespace();
            let pivot = parser.position;
            let field = parser.read_item()?;
            if field.is_empty() {
                return ParseError::new("Expected field", pivot, parser).err();
            }
            fields.push(field);
            parser.next_non_whitespace();

            if parser.current() == ',' {
                parser.next();
                continue;
            }
            if !parser.check_next_phase() {
                return ParseError::new("Expected ',' or FROM", parser.position, parser).err();
            }
        }

        Ok(fields)
    }
}
