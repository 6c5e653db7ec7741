// SELECT student.name, enrollment.course
// FROM student
// LEFT JOIN enrollment ON student.id = enrollment.student_id
// WHERE student.age > 20 AND enrollment.course = 'Math'
// GROUP BY enrollment.course
// ORDER BY student.name DESC
// LIMIT 10

use serde::Serialize;

use crate::parser::{
    ast::{AggregateSpec, Clause, CollectionParser, GroupByParser, JoinClause, JoinParser, LimitParser, OrderBy, ProjectionParser, WhereParser},
    ParseError, Phase, QueryParser,
};

/// Parsed form of one SELECT statement. The executor reads it and never
/// validates names again.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct QueryDescription {
    pub fields: Vec<String>,
    /// The aggregate items of `fields`, in projection order.
    pub aggregates: Vec<AggregateSpec>,
    pub table: String,
    pub join: Option<JoinClause>,
    pub where_clauses: Vec<Clause>,
    pub group_by_fields: Option<Vec<String>>,
    pub has_aggregate_without_group_by: bool,
    pub order_by_fields: Option<Vec<OrderBy>>,
    pub limit: Option<usize>,
}

impl QueryDescription {
    pub fn parse(parser: &mut QueryParser) -> Result<Self, ParseError> {
        parser.next_non_whitespace();
        if !parser.comparers.select.compare(parser) {
            return ParseError::new("Expected SELECT", parser.position, parser).err();
        }
        parser.jump(parser.comparers.select.length);
        parser.phase = Phase::Projection;

        let mut query = QueryDescription::default();

        while parser.phase != Phase::EOF {
            match parser.phase {
                Phase::Projection => {
                    query.fields = ProjectionParser::parse(parser)?;
                    if parser.phase != Phase::Collections {
                        return ParseError::new("Expected FROM", parser.position, parser).err();
                    }
                },
                Phase::Collections => query.table = CollectionParser::parse(parser)?,
                Phase::Joins => query.join = Some(JoinParser::parse(parser)?),
                Phase::Criteria => query.where_clauses = WhereParser::parse(parser)?,
                Phase::Aggregates => query.group_by_fields = Some(GroupByParser::parse(parser)?),
                Phase::OrderBy => query.order_by_fields = Some(OrderBy::parse(parser)?),
                Phase::Limit => query.limit = Some(LimitParser::parse(parser)?),
                Phase::EOF => {},
            }
        }

        query.aggregates = query.fields.iter().filter_map(|f| AggregateSpec::parse(f)).collect();
        query.has_aggregate_without_group_by = !query.aggregates.is_empty() && query.group_by_fields.is_none();

        Ok(query)
    }
}

impl TryFrom<&str> for QueryDescription {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parser = QueryParser::new(value);
        QueryDescription::parse(&mut parser)
    }
}
