use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunc {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "COUNT" => Some(Self::Count),
            "SUM" => Some(Self::Sum),
            "AVG" => Some(Self::Avg),
            "MIN" => Some(Self::Min),
            "MAX" => Some(Self::Max),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AggregateArg {
    Star,
    Field(String),
}

impl AggregateArg {
    /// Field the aggregate reads; `*` names none.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Star => None,
            Self::Field(name) => Some(name),
        }
    }
}

/// A `FUNC(arg)` projection item, parsed once when the statement is parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSpec {
    pub func: AggregateFunc,
    pub arg: AggregateArg,
    /// The item as written in the projection; used as the output column name.
    pub expression: String,
}

impl AggregateSpec {
    /// Recognises `FUNC(*)` and `FUNC(field)` / `FUNC(table.field)` with FUNC
    /// one of COUNT, SUM, AVG, MIN, MAX. Anything else is a plain field.
    pub fn parse(expression: &str) -> Option<Self> {
        let inner = expression.strip_suffix(')')?;
        let (name, arg) = inner.split_once('(')?;
        let func = AggregateFunc::from_name(name)?;

        let arg = match arg {
            "*" => AggregateArg::Star,
            field if Self::is_field_name(field) => AggregateArg::Field(field.to_string()),
            _ => return None,
        };

        Some(Self { func, arg, expression: expression.to_string() })
    }

    fn is_field_name(text: &str) -> bool {
        let word = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_alphanumeric() || c == '_');
        match text.split_once('.') {
            Some((table, field)) => word(table) && word(field),
            None => word(text),
        }
    }
}
