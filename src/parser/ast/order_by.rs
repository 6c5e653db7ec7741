use serde::Serialize;

use crate::parser::{ParseError, Phase, QueryParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderBy {
    pub field_name: String,
    pub order: SortOrder,
}

impl OrderBy {
    pub fn asc(field_name: &str) -> Self {
        Self { field_name: field_name.to_string(), order: SortOrder::Asc }
    }

    pub fn desc(field_name: &str) -> Self {
        Self { field_name: field_name.to_string(), order: SortOrder::Desc }
    }

    pub fn parse_single(parser: &mut QueryParser) -> Result<Self, ParseError> {
        let field_name = parser.read_item()?;
        if field_name.is_empty() {
            return ParseError::new("Expected order by field", parser.position, parser).err();
        }
        parser.next_non_whitespace();

        if parser.comparers.asc.compare(parser) {
            parser.jump(parser.comparers.asc.length);
            return Ok(Self { field_name, order: SortOrder::Asc });
        }

        if parser.comparers.desc.compare(parser) {
            parser.jump(parser.comparers.desc.length);
            return Ok(Self { field_name, order: SortOrder::Desc });
        }

        Ok(Self { field_name, order: SortOrder::Asc })
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Vec<Self>, ParseError> {
        if !parser.comparers.order_by.compare(parser) {
            return ParseError::new("Invalid order by", parser.position, parser).err();
        }
        parser.jump(parser.comparers.order_by.length);

        let mut orders: Vec<Self> = vec![];
        while parser.phase == Phase::OrderBy {
            parser.next_non_whitespace();
            orders.push(Self::parse_single(parser)?);
            parser.next_non_whitespace();

            if parser.current() == ',' {
                parser.next();
                continue;
            }
            if !parser.check_next_phase() {
                return ParseError::new("Invalid order by", parser.position, parser).err();
            }
        }

        Ok(orders)
    }
}
