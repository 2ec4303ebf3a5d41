use atelier_web::ServerConfig;

use crate::cli::{Cli, ServeArgs};
use crate::error::CliError;

use super::desk_config;

pub async fn run(cli: &Cli, args: &ServeArgs) -> Result<(), CliError> {
    let mut config = ServerConfig::from_env();
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    config.desk = desk_config(cli);

    atelier_web::serve(config).await?;
    Ok(())
}
