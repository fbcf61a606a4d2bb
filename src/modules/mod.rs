pub mod relay;
pub mod stats;
pub mod system;
pub mod utils;
