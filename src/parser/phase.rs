#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub enum Phase {
    #[default]
    Projection = 0,
    Collections = 1,
    Joins = 2,
    Criteria = 3,
    Aggregates = 4,
    OrderBy = 5,
    Limit = 6,
    EOF = 7,
}
