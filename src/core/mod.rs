pub mod handler;
pub mod translate;
