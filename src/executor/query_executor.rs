use serde_json::Value;
use tracing::{debug, error};

use crate::{
    database::TableSource,
    executor::{
        aggregate::Aggregator,
        errors::{EngineError, QueryError},
        filter::Filter,
        join::JoinEngine,
        ordering::Sorter,
        row::{Record, Table},
        value::FieldValue,
    },
    parser::{ast::{JoinType, QueryDescription}, QueryParse, SelectParser},
};

/// Runs the stages of one parsed query over tables already in memory:
/// join, filter, then aggregate or order, limit and project.
pub struct QueryExecutor;

impl QueryExecutor {
    pub fn execute(query: &QueryDescription, main: Table, joined: Option<Table>) -> Result<Table, EngineError> {
        let mut rows = match (&query.join, joined) {
            (Some(join), Some(joined)) => {
                let join_type = JoinType::try_from(join.join_type.as_str())
                    .map_err(|_| EngineError::UnsupportedJoinType(join.join_type.clone()))?;
                let fields = Self::join_fields(query);
                let rows = JoinEngine::join(join_type, &main, &joined, &join.condition, &fields, &query.table);
                debug!(join_type = ?join_type, table = %join.table, rows = rows.len(), "query.join");
                rows
            },
            _ => main,
        };

        rows = Filter::apply(rows, &query.where_clauses)?;
        debug!(clauses = query.where_clauses.len(), rows = rows.len(), "query.filter");

        if query.has_aggregate_without_group_by {
            return Ok(vec![Aggregator::whole_table(&rows, &query.aggregates)]);
        }

        if let Some(group_by) = &query.group_by_fields {
            let mut groups = Aggregator::grouped(&rows, group_by, &query.aggregates);
            debug!(groups = groups.len(), "query.group_by");
            Self::order_and_limit(&mut groups, query);
            return Ok(groups);
        }

        Self::order_and_limit(&mut rows, query);
        Ok(Self::project(rows, &query.fields))
    }

    fn order_and_limit(rows: &mut Table, query: &QueryDescription) {
        if let Some(order_by) = &query.order_by_fields {
            Sorter::sort(rows, order_by);
        }
        Sorter::limit(rows, query.limit);
    }

    /// Fields the join stage must carry: every projected field, with an
    /// aggregate replaced by the field it reads, plus the group-by fields.
    fn join_fields(query: &QueryDescription) -> Vec<String> {
        let mut fields: Vec<String> = Vec::new();
        let mut push = |field: &str| {
            if !fields.iter().any(|f| f == field) {
                fields.push(field.to_string());
            }
        };

        for field in &query.fields {
            match query.aggregates.iter().find(|spec| &spec.expression == field) {
                Some(spec) => spec.arg.field().into_iter().for_each(&mut push),
                None => push(field),
            }
        }
        query.group_by_fields.iter().flatten().for_each(|f| push(f));
        fields
    }

    /// Keeps the requested fields by their exact name; missing ones become
    /// `Null` and `*` copies the whole row.
    pub fn project(rows: Table, fields: &[String]) -> Table {
        rows.into_iter()
            .map(|row| {
                let mut out = Record::new();
                for field in fields {
                    if field == "*" {
                        row.iter().for_each(|(k, v)| out.insert(k.clone(), v.clone()));
                    } else {
                        out.insert(field.clone(), row.get(field).cloned().unwrap_or(FieldValue::Null));
                    }
                }
                out
            })
            .collect()
    }
}

/// Entry point: parses a statement, reads its tables from `S` and runs it.
///
/// ```no_run
/// use csvql::{Config, CsvTableSource, QueryEngine};
///
/// # async fn run() -> Result<(), csvql::QueryError> {
/// let engine = QueryEngine::new(CsvTableSource::new(Config::from("data")));
/// let rows = engine.execute_query("SELECT name FROM student ORDER BY name ASC").await?;
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryEngine<S, P = SelectParser> {
    source: S,
    parser: P,
}

impl<S: TableSource> QueryEngine<S, SelectParser> {
    pub fn new(source: S) -> Self {
        Self { source, parser: SelectParser }
    }
}

impl<S: TableSource, P: QueryParse> QueryEngine<S, P> {
    pub fn with_parser(source: S, parser: P) -> Self {
        Self { source, parser }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Every failure comes back as one [`QueryError`] wrapping its cause.
    pub async fn execute_query(&self, sql: &str) -> Result<Vec<Record>, QueryError> {
        run(&self.parser, &self.source, sql).await
    }

    /// Same as [`execute_query`](Self::execute_query), rendered as a JSON array.
    pub async fn execute_json(&self, sql: &str) -> Result<Value, QueryError> {
        let rows = self.execute_query(sql).await?;
        Ok(Value::Array(rows.into_iter().map(Record::into_value).collect()))
    }
}

/// Runs `sql` once against `source` with the default parser.
pub async fn execute_query<S: TableSource>(sql: &str, source: &S) -> Result<Vec<Record>, QueryError> {
    run(&SelectParser, source, sql).await
}

async fn run<S: TableSource, P: QueryParse>(parser: &P, source: &S, sql: &str) -> Result<Vec<Record>, QueryError> {
    let result: Result<Table, EngineError> = async {
        let query = parser.parse_query(sql)?;
        debug!(table = %query.table, join = query.join.is_some(), "query.parsed");

        let main = source.read_table(&query.table).await?;
        let joined = match &query.join {
            Some(join) => Some(source.read_table(&join.table).await?),
            None => None,
        };

        QueryExecutor::execute(&query, main, joined)
    }
    .await;

    result.map_err(|cause| {
        error!(error = %cause, "query.failed");
        QueryError::from(cause)
    })
}
