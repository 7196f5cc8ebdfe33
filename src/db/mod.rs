use mongodb::{
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Database,
};

use crate::{config::Config, errors::AppResult};

/// Driver options for the submission store, sized from the `MONGO_*` settings.
pub async fn client_options(config: &Config) -> AppResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.mongo_conn_string).await?;

    options.server_api = Some(ServerApi::builder().version(ServerApiVersion::V1).build());
    options.app_name = Some("vibe-lab-server".to_string());
    options.max_pool_size = Some(config.mongo_max_pool_size);
    options.min_pool_size = Some(config.mongo_min_pool_size);
    options.connect_timeout = Some(config.mongo_timeout);
    options.server_selection_timeout = Some(config.mongo_timeout);

    Ok(options)
}

/// Opens the configured database. The driver connects lazily, so the first
/// command against the returned handle is what reaches the server.
pub async fn connect(config: &Config) -> AppResult<Database> {
    let client = Client::with_options(client_options(config).await?)?;

    log::info!(
        "MongoDB client ready for database '{}' (pool {}..={}, timeout {:?})",
        config.mongo_db_name,
        config.mongo_min_pool_size,
        config.mongo_max_pool_size,
        config.mongo_timeout
    );

    Ok(client.database(&config.mongo_db_name))
}
