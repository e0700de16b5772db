use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlers, Logger};
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::info;

mod comment;
mod config;
mod feed;
mod middleware;
mod post;
mod router;
mod utils;
use config::index::AppConfig;
use middleware::not_found::not_found;
use post::post_seed::load_seed;
use post::post_service::PostService;
use router::index::routes;
use serde_json::json;
use utils::helpers::service_name;

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Ignite feed is up",
        "httpStatusCode": StatusCode::OK.as_u16(),
        "service": service_name(),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let seed = load_seed(config.seed_path.as_deref())?;

    let post_service = web::Data::new(PostService::from_seed(
        seed,
        config.viewer.author.clone(),
    ));
    let viewer = web::Data::new(config.viewer.clone());

    info!("Starting server on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(post_service.clone())
            .app_data(viewer.clone())
            .configure(routes)
            .wrap(ErrorHandlers::new().handler(StatusCode::NOT_FOUND, not_found))
            .service(health)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
