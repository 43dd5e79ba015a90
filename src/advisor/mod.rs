//! Advisor
//!
//! Two layers of guidance: a deterministic oracle (fortune, advice,
//! weather, expedition routes) that needs no I/O, and an optional async
//! HTTP client for richer advice. The client is a side channel: any
//! failure degrades to a fixed fallback string and never surfaces into
//! a primary operation.

pub mod client;
pub mod oracle;
pub mod routes;

pub use client::AdvisorClient;
pub use oracle::{cultivation_advice, fortune, weather_forecast, WeatherForecast};
pub use routes::{plan_expedition, ExpeditionPlan};
