use anyhow::Context;
use arcade::kernel::config::load_config;
use arcade::kernel::domain::constants::DEFAULT_CONFIG_FILE;
use arcade_logger::Logger;
use arcade_server::Server;

#[arcade_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg =
        load_config(Some(DEFAULT_CONFIG_FILE)).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
