pub mod app;
pub mod persist;
