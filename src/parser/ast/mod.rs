pub mod query;
pub use query::*;

pub mod clause;
pub use clause::*;

pub mod operators;
pub use operators::*;

pub mod aggregate;
pub use aggregate::*;

pub mod join;
pub use join::*;

pub mod order_by;
pub use order_by::*;

pub mod projection_parser;
pub use projection_parser::*;

pub mod collection;
pub use collection::*;

pub mod where_parser;
pub use where_parser::*;

pub mod group_by;
pub use group_by::*;

pub mod limit_parser;
pub use limit_parser::*;
