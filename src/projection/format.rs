use chrono::{DateTime, FixedOffset, Offset, Utc};

/// Shown wherever a value is unknown.
pub const PLACEHOLDER: &str = "-";

const FRIENDLY_DATE_FORMAT: &str = "%b %d, %Y, %-I:%M %p";
const UPDATED_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Short marker label for a case count.
///
/// Truncates, never rounds: `1_999` is `"1k+"` and `2_999_999` is `"2m+"`.
/// Both thresholds are strict, so exactly `1_000` stays `"1000"`.
#[must_use]
pub fn abbreviate_cases(value: i64) -> String {
    if value > 1_000_000 {
        format!("{}m+", value / 1_000_000)
    } else if value > 1_000 {
        format!("{}k+", value / 1_000)
    } else {
        value.to_string()
    }
}

pub trait Commafy {
    fn commafy(&self) -> String;
}

impl Commafy for i64 {
    fn commafy(&self) -> String {
        group_thousands(&self.unsigned_abs().to_string(), *self < 0)
    }
}

impl Commafy for u64 {
    fn commafy(&self) -> String {
        group_thousands(&self.to_string(), false)
    }
}

impl Commafy for f64 {
    fn commafy(&self) -> String {
        if !self.is_finite() {
            return PLACEHOLDER.to_string();
        }
        let text = self.abs().to_string();
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (text.as_str(), None),
        };
        let mut out = group_thousands(whole, *self < 0.0);
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

fn group_thousands(digits: &str, negative: bool) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `73691855` -> `"73,691,855"`. Unknown values render as [`PLACEHOLDER`].
#[must_use]
pub fn commafy<T: Commafy>(value: Option<T>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.commafy())
}

/// Fixed offset all timestamps are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayZone(FixedOffset);

impl DisplayZone {
    #[must_use]
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    #[must_use]
    pub fn from_hours(hours: i32) -> Option<Self> {
        FixedOffset::east_opt(hours.checked_mul(3600)?).map(Self)
    }

    #[must_use]
    pub fn offset(&self) -> FixedOffset {
        self.0
    }

    fn localize(&self, epoch_ms: i64) -> Option<DateTime<FixedOffset>> {
        DateTime::<Utc>::from_timestamp_millis(epoch_ms).map(|dt| dt.with_timezone(&self.0))
    }

    fn format(&self, epoch_ms: Option<i64>, pattern: &str) -> String {
        epoch_ms
            .and_then(|ms| self.localize(ms))
            .map_or_else(|| PLACEHOLDER.to_string(), |dt| dt.format(pattern).to_string())
    }
}

impl Default for DisplayZone {
    fn default() -> Self {
        Self::utc()
    }
}

/// Panel date, e.g. `"Nov 02, 2020, 3:45 PM"`.
#[must_use]
pub fn friendly_date(epoch_ms: Option<i64>, zone: DisplayZone) -> String {
    zone.format(epoch_ms, FRIENDLY_DATE_FORMAT)
}

/// Marker timestamp, e.g. `"11/2/2020, 3:45:12 PM"`.
#[must_use]
pub fn format_updated(epoch_ms: Option<i64>, zone: DisplayZone) -> String {
    zone.format(epoch_ms, UPDATED_FORMAT)
}
