pub mod date_range;
pub mod entry;
pub mod highlight;
pub mod journal;

pub use date_range::*;
pub use entry::*;
pub use highlight::*;
pub use journal::*;
