use crate::parser::{ParseError, Phase, QueryParser};

pub struct GroupByParser;

impl GroupByParser {
    pub fn parse(parser: &mut QueryParser) -> Result<Vec<String>, ParseError> {
        if !parser.comparers.group_by.compare(parser) {
            return ParseError::new("Invalid group by", parser.position, parser).err();
        }
        parser.jump(parser.comparers.group_by.length);

        let mut fields = vec![];
        while parser.phase == Phase::Aggregates {
            parser.next_non_whitespace();
            let pivot = parser.position;
            let field = parser.read_word();
            if field.is_empty() {
                return ParseError::new("Expected group by field", pivot, parser).err();
            }
            fields.push(field);
            parser.next_non_whitespace();

            if parser.current() == ',' {
                parser.next();
                continue;
            }
            if !parser.check_next_phase() {
                return ParseError::new("Invalid group by", parser.position, parser).err();
            }
        }

        Ok(fields)
    }
}
