pub mod types;
pub mod validation;

use clap::Parser;

use crate::error::AppError;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the parsed arguments cannot be turned into a config
pub fn args_checks() -> Result<CleanArgs, AppError> {
    CleanArgs::try_from(Args::parse())
}
