use maud::Markup;
use tracing::{info, warn};

use crate::controller::api::{TrackerClient, load_state};
use crate::model::{AggregateStats, CountryRecord, FetchState, MapSettings};
use crate::projection::feature::{ProjectedFeatures, project};
use crate::projection::format::DisplayZone;
use crate::projection::stats::{StatPanel, project_stats};
use crate::view::tracker::render_tracker;

/// The overlay currently drawn on the map. `generation` increases every time
/// the layer is replaced, so a stale overlay can always be told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLayer {
    pub generation: u64,
    pub features: ProjectedFeatures,
}

#[derive(Debug, Clone)]
pub struct TrackerModel {
    pub zone: DisplayZone,
    pub settings: MapSettings,
    pub countries: FetchState<Vec<CountryRecord>>,
    pub stats: FetchState<AggregateStats>,
    pub layer: Option<MapLayer>,
    pub layer_generation: u64,
    pub panel: StatPanel,
    pub markup: Option<Markup>,
    layer_stale: bool,
}

impl TrackerModel {
    #[must_use]
    pub fn new(zone: DisplayZone, settings: MapSettings) -> Self {
        Self {
            zone,
            settings,
            countries: FetchState::Pending,
            stats: FetchState::Pending,
            layer: None,
            layer_generation: 0,
            panel: project_stats(None, zone),
            markup: None,
            layer_stale: false,
        }
    }

    /// Swaps in a new overlay and hands back the one it displaced. There is
    /// never more than one layer on the model.
    pub fn replace_layer(&mut self, features: ProjectedFeatures) -> Option<MapLayer> {
        self.layer_generation += 1;
        self.layer_stale = false;
        self.layer.replace(MapLayer {
            generation: self.layer_generation,
            features,
        })
    }

    fn clear_layer(&mut self) -> Option<MapLayer> {
        self.layer_stale = false;
        self.layer.take()
    }

    fn ready_to_render(&self) -> bool {
        !self.countries.is_pending() && !self.stats.is_pending() && !self.layer_stale
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    CountriesLoaded(FetchState<Vec<CountryRecord>>),
    StatsLoaded(FetchState<AggregateStats>),
    LayerProjected(ProjectedFeatures),
    Rendered(Markup),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LoadCountries,
    LoadStats,
    ProjectMapLayer,
    RenderTracker,
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub client: &'a TrackerClient,
}

fn render_if_ready(model: &TrackerModel) -> Vec<Effect> {
    if model.ready_to_render() {
        vec![Effect::RenderTracker]
    } else {
        vec![]
    }
}

pub fn update(model: &mut TrackerModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => {
            model.countries = FetchState::Pending;
            model.stats = FetchState::Pending;
            model.markup = None;
            vec![Effect::LoadCountries, Effect::LoadStats]
        }
        Msg::CountriesLoaded(state) => {
            let loaded = state.is_loaded();
            model.countries = state;
            if loaded {
                model.layer_stale = true;
                vec![Effect::ProjectMapLayer]
            } else {
                model.clear_layer();
                render_if_ready(model)
            }
        }
        Msg::StatsLoaded(state) => {
            model.panel = project_stats(state.as_loaded(), model.zone);
            model.stats = state;
            render_if_ready(model)
        }
        Msg::LayerProjected(features) => {
            if !features.skipped.is_empty() {
                warn!(
                    skipped = features.skipped.len(),
                    countries = ?features.skipped,
                    "countries without geolocation left off the map"
                );
            }
            let previous = model.replace_layer(features);
            info!(
                generation = model.layer_generation,
                replaced = previous.map(|l| l.generation),
                "map layer replaced"
            );
            render_if_ready(model)
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
    }
}

pub async fn run_effect(effect: Effect, model: &TrackerModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadCountries => {
            Msg::CountriesLoaded(load_state("countries", deps.client.fetch_countries().await))
        }
        Effect::LoadStats => Msg::StatsLoaded(load_state("all", deps.client.fetch_stats().await)),
        Effect::ProjectMapLayer => {
            let countries = model.countries.as_loaded().map_or(&[][..], Vec::as_slice);
            Msg::LayerProjected(project(countries, model.zone))
        }
        Effect::RenderTracker => Msg::Rendered(render_tracker(model)),
    }
}
