mod client;
mod config;
mod protocol;

use std::env;

use config::ClientConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let mut config = ClientConfig::from_env();
    if let Some(base) = env::args().nth(1) {
        config = config.with_api_base(&base);
    }

    log::info!("using game server at {}", config.api_base);
    client::run_client(config)
}
