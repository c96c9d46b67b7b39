//! Secret word pairs.
//!
//! - `pair`: the `WordPair` dealt for one game
//! - `catalog`: the `WordPairSource` seam and the catalog implementation

mod catalog;
mod pair;

pub use catalog::{WordCatalog, WordPairSource};
pub use pair::WordPair;
