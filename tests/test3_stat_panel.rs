mod common;

use common::fixture_stats;
use pandemic_tracker::model::{AggregateStats, FetchState};
use pandemic_tracker::projection::format::DisplayZone;
use pandemic_tracker::projection::stats::{PANEL_SIZE, PER_ONE_MILLION, project_stats};
use pandemic_tracker::view::tracker::render_stat_panel;
use scraper::{Html, Selector};

const LABELS: [&str; PANEL_SIZE] = [
    "Total Cases",
    "Total Deaths",
    "Total Tests",
    "Critical Cases",
    "Active Cases",
    "Recovered Cases",
];

#[test]
fn test3_six_entries_in_fixed_order() {
    let stats = fixture_stats();
    for panel in [
        project_stats(Some(&stats), DisplayZone::utc()),
        project_stats(Some(&AggregateStats::default()), DisplayZone::utc()),
        project_stats(None, DisplayZone::utc()),
    ] {
        assert_eq!(panel.entries.len(), PANEL_SIZE);
        let labels: Vec<_> = panel.entries.iter().map(|e| e.primary.label).collect();
        assert_eq!(labels, LABELS);
        assert!(panel.entries.iter().all(|e| e.secondary.label == PER_ONE_MILLION));
    }
}

#[test]
fn test3_values_come_from_matching_fields() {
    let panel = project_stats(Some(&fixture_stats()), DisplayZone::utc());

    assert_eq!(panel.entries[0].primary.value, Some(73_691_855));
    assert_eq!(panel.entries[0].secondary.value, Some(9454.0));
    assert_eq!(panel.entries[1].primary.value, Some(1_639_000));
    assert_eq!(panel.entries[2].primary.value, Some(1_100_000_000));
    assert_eq!(panel.entries[4].primary.value, Some(20_302_855));
    assert_eq!(panel.entries[5].secondary.value, Some(6639.1));
    assert_eq!(panel.last_updated, "Nov 02, 2020, 3:45 PM");
}

#[test]
fn test3_zero_and_missing_stay_distinct() {
    let panel = project_stats(Some(&fixture_stats()), DisplayZone::utc());
    let critical = &panel.entries[3];
    assert_eq!(critical.primary.value, Some(0));
    assert_eq!(critical.secondary.value, None);

    let empty = project_stats(None, DisplayZone::utc());
    assert!(empty.entries.iter().all(|e| e.primary.value.is_none() && e.secondary.value.is_none()));
    assert_eq!(empty.last_updated, "-");
}

#[test]
fn test3_rendered_panel_omits_missing_values() {
    let stats = fixture_stats();
    let panel = project_stats(Some(&stats), DisplayZone::utc());
    let html = render_stat_panel(&FetchState::Loaded(stats), &panel).into_string();
    let document = Html::parse_fragment(&html);

    let items = Selector::parse("li.tracker-stat").unwrap();
    let primary = Selector::parse("p.tracker-stat-primary").unwrap();
    let secondary = Selector::parse("p.tracker-stat-secondary").unwrap();

    let stats: Vec<_> = document.select(&items).collect();
    assert_eq!(stats.len(), PANEL_SIZE);

    let first: String = stats[0].select(&primary).next().unwrap().text().collect();
    assert_eq!(first, "73,691,855Total Cases");

    let critical = stats[3];
    let critical_primary: String = critical.select(&primary).next().unwrap().text().collect();
    assert_eq!(critical_primary, "0Critical Cases");
    assert!(critical.select(&secondary).next().is_none());

    let updated = Selector::parse("div.tracker-last-updated p").unwrap();
    let footer: String = document.select(&updated).next().unwrap().text().collect();
    assert_eq!(footer, "Last Updated: Nov 02, 2020, 3:45 PM");
}

#[test]
fn test3_failed_totals_render_an_error_not_zeroes() {
    let panel = project_stats(None, DisplayZone::utc());
    let state: FetchState<AggregateStats> = FetchState::Failed("network error: timed out".into());
    let html = render_stat_panel(&state, &panel).into_string();
    let document = Html::parse_fragment(&html);

    let error = Selector::parse(".tracker-error").unwrap();
    let message: String = document.select(&error).next().unwrap().text().collect();
    assert_eq!(message, "Global totals unavailable: network error: timed out");

    let values = Selector::parse("p.tracker-stat-primary, p.tracker-stat-secondary").unwrap();
    assert_eq!(document.select(&values).count(), 0);
}
