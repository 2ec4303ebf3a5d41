use atelier_core::{Envelope, Instrument, ServiceBrief};
use axum::extract::{RawQuery, State};
use axum::Json;

use crate::params::QueryParams;
use crate::AppState;

/// GET /api/service-brief
pub async fn service_brief(State(state): State<AppState>) -> Json<Envelope<ServiceBrief>> {
    Json(Envelope::bare(state.desk().service_brief().await))
}

/// GET /api/instruments?assetClass=
pub async fn instruments(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Json<Envelope<Vec<Instrument>>> {
    let asset_class = QueryParams::parse(raw.as_deref()).first("assetClass");
    Json(Envelope::bare(state.desk().instruments(asset_class).await))
}
