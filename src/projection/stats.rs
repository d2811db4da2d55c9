use serde::Serialize;

use super::format::{DisplayZone, friendly_date};
use crate::model::AggregateStats;

pub const PANEL_SIZE: usize = 6;
pub const PER_ONE_MILLION: &str = "Per 1 Million";

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct StatField<T> {
    pub label: &'static str,
    pub value: Option<T>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct StatPanelEntry {
    pub primary: StatField<i64>,
    pub secondary: StatField<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatPanel {
    pub entries: [StatPanelEntry; PANEL_SIZE],
    pub last_updated: String,
}

impl Default for StatPanel {
    fn default() -> Self {
        project_stats(None, DisplayZone::utc())
    }
}

fn entry(label: &'static str, value: Option<i64>, per_million: Option<f64>) -> StatPanelEntry {
    StatPanelEntry {
        primary: StatField { label, value },
        secondary: StatField {
            label: PER_ONE_MILLION,
            value: per_million,
        },
    }
}

/// Builds the six panel entries. Missing totals stay `None`.
#[must_use]
pub fn project_stats(stats: Option<&AggregateStats>, zone: DisplayZone) -> StatPanel {
    let counts = stats.map(|s| s.counts.clone()).unwrap_or_default();

    StatPanel {
        entries: [
            entry("Total Cases", counts.cases, counts.cases_per_one_million),
            entry("Total Deaths", counts.deaths, counts.deaths_per_one_million),
            entry("Total Tests", counts.tests, counts.tests_per_one_million),
            entry("Critical Cases", counts.critical, counts.critical_per_one_million),
            entry("Active Cases", counts.active, counts.active_per_one_million),
            entry("Recovered Cases", counts.recovered, counts.recovered_per_one_million),
        ],
        last_updated: friendly_date(stats.and_then(|s| s.updated), zone),
    }
}
