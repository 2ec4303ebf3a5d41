//! # Atelier Web
//!
//! axum binding of the atelier desk for the browser front-end.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /api/stocks` | [`routes::stocks::list_stocks`] |
//! | `GET /api/bonds` | [`routes::bonds::list_bonds`] |
//! | `GET /api/bonds/:id` | [`routes::bonds::bond_detail`] |
//! | `GET /api/service-brief` | [`routes::onboarding::service_brief`] |
//! | `GET /api/instruments` | [`routes::onboarding::instruments`] |
//! | `GET /health` | [`routes::health::health`] |

pub mod app;
pub mod error;
pub mod params;
pub mod routes;
pub mod state;

pub use app::{create_app, serve, ServerConfig};
pub use error::AppError;
pub use state::AppState;
