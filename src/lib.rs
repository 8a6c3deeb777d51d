pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod report;
pub mod square;
pub mod validation;

pub use config::Config;
pub use data::*;
pub use error::ActivityError;
pub use square::{run_square_pass, Cropper, PassSummary, Resizer, SquareTransform};
pub use validation::{validate_dataset, Validator, ValidationStats};

pub type Result<T> = anyhow::Result<T>;
