pub mod client;
pub mod format;
