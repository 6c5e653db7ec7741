pub mod config;
pub use config::*;

pub mod table_source;
pub use table_source::*;

pub mod csv_source;
pub use csv_source::*;

pub mod memory_source;
pub use memory_source::*;
