//! Core library for the `clima` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The location-provider and forecast-provider seams
//! - Pure formatting and daily aggregation of forecast data
//! - Map-marker descriptors and the shared forecast service
//!
//! It is used by `clima-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod daily;
pub mod format;
pub mod location;
pub mod markers;
pub mod model;
pub mod provider;
pub mod service;

pub use config::Config;
pub use location::{FixedLocation, LocationError, LocationProvider};
pub use markers::{MapRegion, Marker};
pub use model::{ConditionDescriptor, Coordinate, ForecastEntry, ForecastResponse};
pub use provider::ForecastProvider;
pub use service::{DayView, ForecastReport, ForecastService, MapView, PanelView, ScreenState};
