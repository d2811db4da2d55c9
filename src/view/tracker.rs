use maud::{Markup, PreEscaped, html};

use crate::model::{AggregateStats, CountryRecord, FetchState};
use crate::mvu::tracker::{MapLayer, TrackerModel};
use crate::projection::format::commafy;
use crate::projection::stats::StatPanel;

/// Serializes the layer for an inline `<script type="application/json">`.
/// `</` is escaped so a country name can never close the script element.
fn embeddable_json(layer: &MapLayer) -> String {
    serde_json::to_string(&layer.features.collection)
        .unwrap_or_else(|_| r#"{"type":"FeatureCollection","features":[]}"#.to_string())
        .replace("</", "<\\/")
}

#[must_use]
pub fn render_map_layer(
    countries: &FetchState<Vec<CountryRecord>>,
    layer: Option<&MapLayer>,
) -> Markup {
    html! {
        @match (countries, layer) {
            (FetchState::Pending, _) => {
                p class="tracker-status" { "Loading country data..." }
            }
            (FetchState::Failed(reason), _) => {
                p class="tracker-status tracker-error" { "Country data unavailable: " (reason) }
            }
            (FetchState::Loaded(_), Some(layer)) => {
                @if layer.features.is_empty() {
                    p class="tracker-status" { "No country data to display." }
                }
                script id="tracker-features" type="application/json"
                    data-layer-generation=(layer.generation)
                    data-skipped=(layer.features.skipped.len()) {
                    (PreEscaped(embeddable_json(layer)))
                }
            }
            (FetchState::Loaded(_), None) => {
                p class="tracker-status" { "No country data to display." }
            }
        }
    }
}

#[must_use]
pub fn render_stat_panel(stats: &FetchState<AggregateStats>, panel: &StatPanel) -> Markup {
    html! {
        div class="tracker-stats" {
            @match stats {
                FetchState::Pending => {
                    p class="tracker-status" { "Loading global totals..." }
                }
                FetchState::Failed(reason) => {
                    p class="tracker-status tracker-error" { "Global totals unavailable: " (reason) }
                }
                FetchState::Loaded(_) => {}
            }
            ul {
                @for (i, entry) in panel.entries.iter().enumerate() {
                    li class="tracker-stat" id=(format!("Stat-{i}")) {
                        @if let Some(value) = entry.primary.value {
                            p class="tracker-stat-primary" {
                                (commafy(Some(value)))
                                strong { (entry.primary.label) }
                            }
                        }
                        @if let Some(value) = entry.secondary.value {
                            p class="tracker-stat-secondary" {
                                (commafy(Some(value)))
                                strong { (entry.secondary.label) }
                            }
                        }
                    }
                }
            }
        }
        div class="tracker-last-updated" {
            p { "Last Updated: " (panel.last_updated) }
        }
    }
}

/// The fragment swapped into `#tracker`: map data followed by the panel.
#[must_use]
pub fn render_tracker(model: &TrackerModel) -> Markup {
    html! {
        (render_map_layer(&model.countries, model.layer.as_ref()))
        (render_stat_panel(&model.stats, &model.panel))
    }
}
