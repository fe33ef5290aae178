use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::{error, info};

use pushkind_pricewatch::db::establish_connection_pool;
use pushkind_pricewatch::models::config::ServerConfig;
use pushkind_pricewatch::repository::DieselRepository;
use pushkind_pricewatch::routes;
use pushkind_pricewatch::settings::load_section;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let server_config: ServerConfig = match load_section("server") {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);
    info!(
        "Serving the CRUD API on {}:{}",
        bind_address.0, bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
