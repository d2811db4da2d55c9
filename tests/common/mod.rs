#![allow(dead_code)]

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use pandemic_tracker::args::CleanArgs;
use pandemic_tracker::controller::api::TrackerClient;
use pandemic_tracker::model::{AggregateStats, CountryRecord};
use pandemic_tracker::projection::format::DisplayZone;
use std::path::PathBuf;
use std::time::Duration;

pub const COUNTRIES_JSON: &str = include_str!("../fixtures/countries.json");
pub const ALL_JSON: &str = include_str!("../fixtures/all.json");

pub fn fixture_countries() -> Vec<CountryRecord> {
    serde_json::from_str(COUNTRIES_JSON).expect("countries fixture should decode")
}

pub fn fixture_stats() -> AggregateStats {
    serde_json::from_str(ALL_JSON).expect("all fixture should decode")
}

/// Canned answer for one upstream route.
#[derive(Clone, Debug)]
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: r#"{"message":"upstream unavailable"}"#.to_string(),
        }
    }
}

fn respond(canned: &Canned) -> HttpResponse {
    let status = StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json")
        .body(canned.body.clone())
}

/// Starts a local stand-in for the statistics API and returns its base url.
/// Must be called from inside an actix system (`#[actix_web::test]`).
pub fn spawn_upstream(countries: Canned, all: Canned) -> std::io::Result<String> {
    let server = HttpServer::new(move || {
        let countries = countries.clone();
        let all = all.clone();
        App::new()
            .route(
                "/countries",
                web::get().to(move || {
                    let canned = countries.clone();
                    async move { respond(&canned) }
                }),
            )
            .route(
                "/all",
                web::get().to(move || {
                    let canned = all.clone();
                    async move { respond(&canned) }
                }),
            )
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Ok(format!("http://{addr}"))
}

pub fn test_args(api_base_url: &str) -> CleanArgs {
    CleanArgs {
        api_base_url: api_base_url.to_string(),
        bind: "127.0.0.1".to_string(),
        port: 0,
        request_timeout: Duration::from_secs(5),
        display_zone: DisplayZone::utc(),
        static_dir: PathBuf::from("./static"),
        site_owner: "Jeremy Irvine".to_string(),
        title: "Home Page".to_string(),
    }
}

pub fn test_client(api_base_url: &str) -> TrackerClient {
    TrackerClient::new(api_base_url, Duration::from_secs(5)).expect("client should build")
}
