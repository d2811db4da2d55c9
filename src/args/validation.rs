use reqwest::Url;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_api_base_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value).map_err(|e| format!("The api base url '{value}' is invalid: {e}."))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(format!(
            "The api base url '{value}' must be an http or https url with a host."
        ));
    }
    Ok(value.trim_end_matches('/').to_string())
}

/// # Errors
///
/// Will return `Err` if the value is not a positive number of seconds
pub fn check_timeout_secs(value: &str) -> Result<u64, String> {
    match value.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(format!("The request timeout '{value}' must be a positive number of seconds.")),
    }
}

/// # Errors
///
/// Will return `Err` if the value is not a whole hour offset between -12 and 14
pub fn check_utc_offset_hours(value: &str) -> Result<i32, String> {
    match value.parse::<i32>() {
        Ok(hours) if (-12..=14).contains(&hours) => Ok(hours),
        _ => Err(format!("The utc offset '{value}' must be a whole number of hours from -12 to 14.")),
    }
}

/// # Errors
///
/// Will return `Err` if the directory is not readable
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() || fs::read_dir(&path).is_err() {
        return Err(format!("The static directory '{dir}' is not readable."));
    }
    Ok(path)
}
