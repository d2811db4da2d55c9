pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod api;
    pub mod http_handlers;
}
pub mod mvu {
    pub mod runtime;
    pub mod tracker;
}
pub mod projection {
    pub mod feature;
    pub mod format;
    pub mod stats;
}
pub mod view {
    pub mod index;
    pub mod layout;
    pub mod tracker;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";
const LEAFLET_JS_PATH: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS_PATH: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

pub use error::AppError;
pub use model::{AggregateStats, CaseCounts, CountryInfo, CountryRecord, FetchState, MapSettings};
pub use projection::feature::{ProjectedFeatures, project};
pub use projection::format::{DisplayZone, abbreviate_cases, commafy, friendly_date};
pub use projection::stats::{StatPanel, StatPanelEntry, project_stats};
