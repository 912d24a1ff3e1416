pub mod entry;
pub mod lang;

pub use entry::{CuratedEntry, CuratedStore};
pub use lang::Lang;
