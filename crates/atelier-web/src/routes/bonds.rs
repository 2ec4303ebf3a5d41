use atelier_core::{BondRecord, BondSummary, CountMeta, Envelope};
use axum::extract::{Path, State};
use axum::Json;

use crate::{AppError, AppState};

/// GET /api/bonds
pub async fn list_bonds(
    State(state): State<AppState>,
) -> Json<Envelope<Vec<BondSummary>, CountMeta>> {
    Json(state.desk().list_bond_summaries().await.into())
}

/// GET /api/bonds/:id
pub async fn bond_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<BondRecord>>, AppError> {
    let bond = state.desk().bond_detail(id).await?;
    Ok(Json(Envelope::bare(bond)))
}
