use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use mock_interview_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!(
        "Starting mock interview server on {}:{}",
        bind_address.0,
        bind_address.1
    );

    let upload_settings = web::Data::new(state.upload_settings.clone());
    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .app_data(state.clone())
            .app_data(upload_settings.clone())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
