pub mod columns;
pub mod csv_loader;
