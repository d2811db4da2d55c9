use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use pandemic_tracker::args;
use pandemic_tracker::controller::api::TrackerClient;
use pandemic_tracker::controller::http_handlers::configure_routes;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = args::args_checks()?;
    let client = TrackerClient::new(&args.api_base_url, args.request_timeout)?;
    let bind_address = (args.bind.clone(), args.port);
    let static_dir = args.static_dir.clone();

    info!(
        api = %client.base_url(),
        "listening on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(client.clone()))
            .app_data(Data::new(args.clone()))
            .configure(configure_routes)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(bind_address)?
    .run()
    .await?;
    Ok(())
}
