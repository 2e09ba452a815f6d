//! Data module - CSV loading, cleaning, splitting and writing

pub mod loader;
pub mod processor;
pub mod splitter;
pub mod writer;

pub use loader::load_csv;
pub use processor::Cleaner;
pub use splitter::train_test_split;
pub use writer::write_csv;
