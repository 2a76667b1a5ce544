pub mod engine;
pub mod infrastructure;
pub mod mode;
