use std::time::Instant;

use atelier_core::{AssetClass, DeskSource, Operation};

use crate::cli::InstrumentsArgs;
use crate::error::CliError;

use super::{elapsed_ms, CommandResult};

pub async fn brief(desk: &dyn DeskSource) -> Result<CommandResult, CliError> {
    let started = Instant::now();
    let brief = desk.service_brief().await;
    let latency_ms = elapsed_ms(started);

    Ok(
        CommandResult::ok(Operation::GetServiceBrief, serde_json::to_value(&brief)?)
            .with_latency(latency_ms),
    )
}

pub async fn instruments(
    args: &InstrumentsArgs,
    desk: &dyn DeskSource,
) -> Result<CommandResult, CliError> {
    let warning = match args.asset_class.as_deref() {
        None => Some(String::from("no asset class given; instrument list is empty")),
        Some(key) if AssetClass::from_key(key).is_none() => Some(format!(
            "unknown asset class '{key}'; expected one of: {}",
            known_classes()
        )),
        Some(_) => None,
    };

    let started = Instant::now();
    let instruments = desk.instruments(args.asset_class.clone()).await;
    let latency_ms = elapsed_ms(started);

    let mut result =
        CommandResult::ok(Operation::ListInstruments, serde_json::to_value(&instruments)?)
            .with_total(instruments.len())
            .with_latency(latency_ms);
    if let Some(warning) = warning {
        result = result.with_warning(warning);
    }
    Ok(result)
}

fn known_classes() -> String {
    AssetClass::ALL
        .iter()
        .map(|class| class.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
