use crate::parser::WordComparer;

#[derive(Debug)]
pub struct QueryComparers {
    pub select: WordComparer,
    pub from: WordComparer,
    pub join: WordComparer,
    pub on: WordComparer,
    pub r#where: WordComparer,
    pub and: WordComparer,
    pub group_by: WordComparer,
    pub order_by: WordComparer,
    pub asc: WordComparer,
    pub desc: WordComparer,
    pub limit: WordComparer,
}

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT").with_whitespace_postfix(),
            from: WordComparer::new("FROM").with_whitespace_postfix(),
            join: WordComparer::new("JOIN").with_whitespace_postfix(),
            on: WordComparer::new("ON").with_whitespace_postfix(),
            r#where: WordComparer::new("WHERE").with_whitespace_postfix(),
            and: WordComparer::new("AND").with_whitespace_postfix(),
            group_by: WordComparer::new("GROUP BY").with_whitespace_postfix(),
            order_by: WordComparer::new("ORDER BY").with_whitespace_postfix(),
            asc: WordComparer::new("ASC").with_whitespace_postfix().with_eof().with_optional_postfix(',').with_optional_postfix(';'),
            desc: WordComparer::new("DESC").with_whitespace_postfix().with_eof().with_optional_postfix(',').with_optional_postfix(';'),
            limit: WordComparer::new("LIMIT").with_whitespace_postfix(),
        }
    }
}
