pub mod classify;
pub mod decide;
pub mod error;
pub mod gesture;
pub mod preprocess;
