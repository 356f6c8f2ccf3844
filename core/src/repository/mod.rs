pub mod file;
pub mod traits;

// Re-export
pub use file::CsvFileSource;
pub use traits::RecordSource;
