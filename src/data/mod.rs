pub mod activity;
pub mod loader;

pub use activity::*;
pub use loader::*;
