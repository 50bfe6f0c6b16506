pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;

use config::Config;

#[tokio::main]
async fn main() -> error::Result<()> {
    observability::init_tracing();

    config::load_optional_env(config::ENV_FILE);

    api::server::start_server(Config::default()).await
}
