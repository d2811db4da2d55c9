use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::controller::api::DEFAULT_API_BASE_URL;
use crate::error::AppError;
use crate::projection::format::DisplayZone;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the statistics API; `/countries` and `/all` are appended to it.
    #[arg(
        long,
        value_name = "API_BASE_URL",
        default_value = DEFAULT_API_BASE_URL,
        value_parser = crate::args::validation::check_api_base_url
    )]
    pub api_base_url: String,
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Upstream request timeout.
    #[arg(
        long,
        value_name = "SECONDS",
        default_value = "10",
        value_parser = crate::args::validation::check_timeout_secs
    )]
    pub request_timeout_secs: u64,
    /// Offset from UTC, in whole hours, used when formatting timestamps.
    #[arg(
        long,
        value_name = "HOURS",
        default_value = "0",
        allow_negative_numbers = true,
        value_parser = crate::args::validation::check_utc_offset_hours
    )]
    pub utc_offset_hours: i32,
    #[arg(
        long,
        value_name = "STATIC_DIR",
        default_value = "./static",
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub static_dir: PathBuf,
    /// Name printed in the page footer.
    #[arg(long, value_name = "SITE_OWNER", default_value = "Jeremy Irvine")]
    pub site_owner: String,
    #[arg(long, value_name = "TITLE", default_value = "Home Page")]
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub api_base_url: String,
    pub bind: String,
    pub port: u16,
    pub request_timeout: Duration,
    pub display_zone: DisplayZone,
    pub static_dir: PathBuf,
    pub site_owner: String,
    pub title: String,
}

impl TryFrom<Args> for CleanArgs {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let display_zone = DisplayZone::from_hours(args.utc_offset_hours).ok_or_else(|| {
            AppError::Config(format!(
                "utc offset of {} hours is out of range",
                args.utc_offset_hours
            ))
        })?;
        Ok(Self {
            api_base_url: args.api_base_url,
            bind: args.bind,
            port: args.port,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
            display_zone,
            static_dir: args.static_dir,
            site_owner: args.site_owner,
            title: args.title,
        })
    }
}
