//! Shared resolve→fetch→format pipeline.
//!
//! Each consuming view owns one [`ScreenState`] slot and replaces it with
//! the result of [`ForecastService::load`]. The pipeline is a plain future;
//! dropping it cancels the in-flight request, so a torn-down caller can
//! never be written to.

use tracing::{debug, error, warn};

use crate::daily;
use crate::format::{
    humidity_pct, icon_url, kelvin_to_celsius, translate_condition, visibility_km, wind_speed_ms,
    weekday_name,
};
use crate::location::{LocationError, LocationProvider};
use crate::markers::{MapRegion, Marker, build_markers};
use crate::model::{Coordinate, ForecastEntry, ForecastResponse};
use crate::provider::ForecastProvider;

/// Observable state of a view-owned forecast slot.
#[derive(Debug, Default)]
pub enum ScreenState {
    #[default]
    Loading,
    Ready(ForecastReport),
    Failed(String),
}

/// Resolved position plus the response it produced.
#[derive(Debug, Clone)]
pub struct ForecastReport {
    pub position: Coordinate,
    pub response: ForecastResponse,
}

/// Display-ready current conditions, taken from the first entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub temperature_c: String,
    pub condition: String,
    pub temp_min_c: String,
    pub temp_max_c: String,
    pub humidity: String,
    pub wind_speed: String,
    pub visibility_km: String,
}

/// Display-ready forecast list row.
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub dt_txt: String,
    pub weekday: Option<&'static str>,
    pub condition: Option<String>,
    pub icon_url: Option<String>,
    pub temperature_c: String,
    pub humidity: String,
    pub wind_speed: String,
}

/// Region and markers for the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub region: MapRegion,
    pub markers: Vec<Marker>,
}

impl ForecastReport {
    /// Current-conditions panel, or `None` when the response has no entries.
    pub fn panel(&self) -> Option<PanelView> {
        let entry = self.response.list.first()?;

        Some(PanelView {
            temperature_c: kelvin_to_celsius(entry.main.temp),
            condition: entry
                .condition()
                .map(|c| translate_condition(&c.description).to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            temp_min_c: kelvin_to_celsius(entry.main.temp_min),
            temp_max_c: kelvin_to_celsius(entry.main.temp_max),
            humidity: humidity_pct(entry.main.humidity),
            wind_speed: wind_speed_ms(entry.wind.speed),
            visibility_km: visibility_km(entry.visibility),
        })
    }

    /// One row per day, sampled from the 3-hour list.
    pub fn daily(&self) -> Vec<DayView> {
        daily::daily_forecast(&self.response.list)
            .into_iter()
            .map(day_view)
            .collect()
    }

    /// The next `count` raw 3-hour rows.
    pub fn upcoming(&self, count: usize) -> Vec<DayView> {
        daily::upcoming(&self.response.list, count)
            .iter()
            .map(day_view)
            .collect()
    }

    pub fn map(&self) -> MapView {
        MapView {
            region: MapRegion::around(self.position),
            markers: build_markers(self.position, &self.response),
        }
    }
}

fn day_view(entry: &ForecastEntry) -> DayView {
    let condition = entry.condition();

    DayView {
        dt_txt: entry.dt_txt.clone(),
        weekday: weekday_name(&entry.dt_txt),
        condition: condition.map(|c| translate_condition(&c.description).to_string()),
        icon_url: condition.map(|c| icon_url(&c.icon)),
        temperature_c: kelvin_to_celsius(entry.main.temp),
        humidity: humidity_pct(entry.main.humidity),
        wind_speed: wind_speed_ms(entry.wind.speed),
    }
}

/// Composes the location seam with the forecast provider.
#[derive(Debug)]
pub struct ForecastService {
    location: Box<dyn LocationProvider>,
    provider: Box<dyn ForecastProvider>,
}

impl ForecastService {
    pub fn new(location: Box<dyn LocationProvider>, provider: Box<dyn ForecastProvider>) -> Self {
        Self { location, provider }
    }

    /// Resolve the position, fetch the forecast, and return the resulting
    /// state. Never panics; denial and fetch failure become
    /// [`ScreenState::Failed`] with the logged diagnostic.
    pub async fn load(&self) -> ScreenState {
        let position = match self.location.current_position().await {
            Ok(position) => position,
            Err(LocationError::PermissionDenied) => {
                warn!("Location permission denied");
                return ScreenState::Failed(LocationError::PermissionDenied.to_string());
            }
            Err(err) => {
                error!(error = %err, "Failed to resolve location");
                return ScreenState::Failed(err.to_string());
            }
        };

        debug!(
            lat = position.latitude,
            lon = position.longitude,
            "Resolved position"
        );

        match self.provider.fetch_forecast(&position).await {
            Ok(response) => ScreenState::Ready(ForecastReport { position, response }),
            Err(err) => {
                error!(error = %err, "Error fetching weather data");
                ScreenState::Failed(format!("{err:#}"))
            }
        }
    }
}
