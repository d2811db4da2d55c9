use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use chrono::Datelike;
use serde_json::json;
use tracing::warn;

use crate::args::CleanArgs;
use crate::controller::api::TrackerClient;
use crate::model::MapSettings;
use crate::mvu::runtime::run_tracker;
use crate::mvu::tracker::{Deps, Msg, TrackerModel};
use crate::projection::feature::project;
use crate::projection::stats::project_stats;
use crate::view::index::render_index_template;

pub const SKIPPED_RECORDS_HEADER: &str = "x-skipped-records";

/// Route table shared by the binary and the integration tests. Static files
/// are mounted separately since their directory comes from the command line.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/tracker", web::get().to(tracker))
        .route("/api/countries", web::get().to(countries_geojson))
        .route("/api/stats", web::get().to(stats_panel))
        .route("/health", web::get().to(HttpResponse::Ok));
}

pub async fn index(args: Data<CleanArgs>) -> impl Responder {
    let year = chrono::Utc::now().year();
    let markup = render_index_template(
        &args.title,
        &MapSettings::default(),
        &args.site_owner,
        year,
    );
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn tracker(client: Data<TrackerClient>, args: Data<CleanArgs>) -> impl Responder {
    let mut model = TrackerModel::new(args.display_zone, MapSettings::default());
    let deps = Deps {
        client: client.get_ref(),
    };
    run_tracker(&mut model, Msg::PageLoad, deps).await;

    match model.markup {
        Some(markup) => HttpResponse::Ok()
            .content_type("text/html")
            .body(markup.into_string()),
        None => HttpResponse::InternalServerError()
            .json(json!({"error": "tracker finished without rendering"})),
    }
}

pub async fn countries_geojson(client: Data<TrackerClient>, args: Data<CleanArgs>) -> impl Responder {
    match client.fetch_countries().await {
        Ok(countries) => {
            let projected = project(&countries, args.display_zone);
            if !projected.skipped.is_empty() {
                warn!(
                    skipped = projected.skipped.len(),
                    "countries without geolocation left out of the feature collection"
                );
            }
            HttpResponse::Ok()
                .insert_header((SKIPPED_RECORDS_HEADER, projected.skipped.len().to_string()))
                .json(&projected.collection)
        }
        Err(e) => {
            warn!(error = %e, "countries fetch failed");
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}

pub async fn stats_panel(client: Data<TrackerClient>, args: Data<CleanArgs>) -> impl Responder {
    match client.fetch_stats().await {
        Ok(stats) => HttpResponse::Ok().json(project_stats(Some(&stats), args.display_zone)),
        Err(e) => {
            warn!(error = %e, "stats fetch failed");
            HttpResponse::BadGateway().json(json!({"error": e.to_string()}))
        }
    }
}
