use crate::parser::{ParseError, QueryParser};

pub struct CollectionParser;

impl CollectionParser {
    /// Reads `FROM table`.
    pub fn parse(parser: &mut QueryParser) -> Result<String, ParseError> {
        if !parser.comparers.from.compare(parser) {
            return ParseError::new("Expected FROM", parser.position, parser).err();
        }
        parser.jump(parser.comparers.from.length);
        parser.next_non_whitespace();

        let pivot = parser.position;
        let table = parser.read_word();
        if table.is_empty() {
            return ParseError::new("Expected table name", pivot, parser).err();
        }

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token after table name", parser.position, parser).err();
        }

        Ok(table)
    }
}
