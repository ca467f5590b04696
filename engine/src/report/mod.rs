pub mod aggregate;
pub mod export;
pub mod summary;
