use std::time::Instant;

use atelier_core::{DeskSource, Operation};

use crate::cli::BondArgs;
use crate::error::CliError;

use super::{elapsed_ms, CommandResult};

pub async fn list(desk: &dyn DeskSource) -> Result<CommandResult, CliError> {
    let started = Instant::now();
    let listing = desk.list_bond_summaries().await;
    let latency_ms = elapsed_ms(started);

    Ok(CommandResult::ok(
        Operation::ListBondSummaries,
        serde_json::to_value(&listing.summaries)?,
    )
    .with_total(listing.total)
    .with_latency(latency_ms))
}

pub async fn detail(args: &BondArgs, desk: &dyn DeskSource) -> Result<CommandResult, CliError> {
    let started = Instant::now();
    let bond = desk.bond_detail(args.id.clone()).await?;
    let latency_ms = elapsed_ms(started);

    Ok(CommandResult::ok(Operation::GetBondDetail, serde_json::to_value(&bond)?)
        .with_latency(latency_ms))
}
