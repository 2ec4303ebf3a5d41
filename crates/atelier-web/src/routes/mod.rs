//! Route handlers, one module per page group of the front-end.

pub mod bonds;
pub mod health;
pub mod onboarding;
pub mod stocks;
