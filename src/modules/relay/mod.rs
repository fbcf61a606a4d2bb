pub mod handler;
pub mod parser;
pub mod view;
