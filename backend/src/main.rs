mod config;
mod services;

use crate::config::Config;
use crate::services::proxy::Upstream;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let upstream = Upstream::new(&config.api_url);

    info!("Server running at {}", url);
    info!("Forwarding /api to {}", config.api_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(upstream.clone()))
            .service(services::proxy::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
