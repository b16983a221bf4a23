//! Airport lookup and search
//!
//! - `index`: the immutable airport table (built-in or loaded from JSON)
//! - `search`: free-text search over the table

mod data;
pub mod index;
pub mod search;

pub use index::AirportIndex;
pub use search::{SearchEngine, SearchResult};
