use crate::parser::{ParseError, QueryParser};

pub struct LimitParser;

impl LimitParser {
    pub fn parse(parser: &mut QueryParser) -> Result<usize, ParseError> {
        if !parser.comparers.limit.compare(parser) {
            return ParseError::new("Invalid limit", parser.position, parser).err();
        }
        parser.jump(parser.comparers.limit.length);
        parser.next_non_whitespace();

        let pivot = parser.position;
        let text = parser.read_word();
        let Ok(limit) = text.parse::<usize>() else {
            return ParseError::new("Invalid limit", pivot, parser).err();
        };

        if !parser.check_next_phase() {
            return ParseError::new("Unexpected token after limit", parser.position, parser).err();
        }

        Ok(limit)
    }
}
