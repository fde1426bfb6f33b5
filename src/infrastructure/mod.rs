pub mod csv_storage;
pub mod parser;
pub mod repository;

#[cfg(test)]
pub mod test_utils;

pub use csv_storage::*;
pub use parser::*;
pub use repository::*;
