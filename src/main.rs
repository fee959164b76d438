use actix_web::{middleware::Logger, web, App, HttpServer};

use training_server::{app_state::AppState, config::Config, db::Database, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let db = Database::connect(&config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    let state = AppState::new(config, &db)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    log::info!("Starting HTTP server on {}:{}", bind_address.0, bind_address.1);

    let server_db = db.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(server_db.clone()))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await?;

    db.shutdown().await;
    Ok(())
}
