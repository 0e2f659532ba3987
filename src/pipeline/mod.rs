//! The batch rename loop and the collection-merge step

pub mod batch;
pub mod collection;

pub use batch::{process_style, run};
pub use collection::CollectionWriter;
