use tracing::{error, info, Level};

use mortgage::{
    catalog::RateCatalog,
    configuration::{
        get_configuration, set_configuration, AppState, Config, State,
    },
    error::Error,
    server,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let result = app_main().await;

    if let Err(err) = &result {
        error!("{}", err);
    }

    result
}

async fn app_main() -> Result<(), Error> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_level(true)
        .with_max_level(Level::INFO)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match init() {
        Ok(config) => config,
        Err(e) => return Err(Error::ConfigurationError(e.to_string())),
    };

    let catalog = RateCatalog::initialize()?;
    let app_state = AppState::new(State::new(config, catalog));

    server::server_task(&app_state).await?;
    info!("Server stopped");

    Ok(())
}

fn init() -> Result<Config, Error> {
    set_configuration()?;
    let config = get_configuration()?;
    Ok(config)
}
