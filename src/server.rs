use actix_cors::Cors;
use actix_web::{dev::Server, http::header, middleware, web, App, HttpServer};
use tracing::info;

use crate::{
    configuration::{AppState, State},
    controller::{docs, interest_rates, mortgage_check, version},
    error::Error,
};

pub async fn server_task(app_state: &AppState<State>) -> Result<(), Error> {
    let app = app_state.clone();
    tokio::spawn(async move {
        let server = init_server(app)?;
        server.await?;
        Ok(())
    })
    .await?
}

/// Route table shared by the server and the HTTP tests.
pub fn routes(json_limit: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(json_config(json_limit)).service(
            web::scope("/api")
                .service(interest_rates::index)
                .service(mortgage_check::index)
                .service(version::index)
                .service(docs::index),
        );
    }
}

fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| Error::InvalidRequest(err.to_string()).into())
}

fn init_server(app_state: AppState<State>) -> Result<Server, Error> {
    let host = app_state.config.server_host.to_owned();
    let port = app_state.config.port;
    let workers = app_state.config.workers;

    info!("Starting server on {}:{}", host, port);

    let server = HttpServer::new(move || {
        let app = app_state.clone();
        let cors_access_all = app.config.allows_any_origin();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _| {
                if cors_access_all {
                    return true;
                }
                let allowed = &app.config.allowed_origins;
                if let Ok(origin) = origin.to_str() {
                    return allowed.iter().any(|item| item == origin);
                }
                false
            })
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::ACCEPT])
            .allowed_header(header::CONTENT_TYPE);

        App::new()
            .wrap(cors)
            .wrap(middleware::Compress::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes(app_state.config.json_limit))
    })
    .workers(workers)
    .bind((host, port))?
    .disable_signals()
    .run();
    Ok(server)
}
