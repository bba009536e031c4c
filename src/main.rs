use actix_web::{App, HttpServer, web};
use serde::Deserialize;

use reader_buddy::db::establish_connection_pool;
use reader_buddy::repository::DieselRepository;
use reader_buddy::routes;

/// Runtime configuration, read from `config.yaml` and the environment.
#[derive(Debug, Clone, Deserialize)]
struct ServerConfig {
    database_url: String,
    host: String,
    port: u16,
}

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    config::Config::builder()
        .set_default("database_url", "reader_buddy.db")?
        .set_default("host", "127.0.0.1")?
        .set_default("port", 8080)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = load_config().map_err(std::io::Error::other)?;

    let pool = establish_connection_pool(&config.database_url)
        .map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    log::info!("Starting server on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .service(routes::main::health)
            // `search` must be registered ahead of the `{id}` matchers.
            .service(routes::bookmarks::search_bookmarks)
            .service(routes::bookmarks::list_bookmarks)
            .service(routes::bookmarks::get_bookmark)
            .service(routes::bookmarks::create_bookmark)
            .service(routes::bookmarks::update_bookmark)
            .service(routes::bookmarks::delete_bookmark)
            .service(routes::bookmarks::list_tags)
            .service(routes::books::search_books)
            .service(routes::books::list_books)
            .service(routes::books::get_book)
            .service(routes::books::create_book)
            .service(routes::books::update_book)
            .service(routes::books::delete_book)
            .service(routes::readings::list_readings)
            .service(routes::readings::start_reading)
            .service(routes::readings::update_reading)
            .service(routes::readings::delete_reading)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
