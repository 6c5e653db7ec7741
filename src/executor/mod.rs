pub mod value;
pub use value::*;

pub mod row;
pub use row::*;

pub mod errors;
pub use errors::*;

pub mod coercion;
pub use coercion::*;

pub mod predicate;
pub use predicate::*;

pub mod join;
pub use join::*;

pub mod filter;
pub use filter::*;

pub mod aggregate;
pub use aggregate::*;

pub mod ordering;
pub use ordering::*;

pub mod query_executor;
pub use query_executor::*;

#[cfg(test)]
mod _tests;
