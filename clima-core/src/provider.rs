use crate::{Config, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

use crate::model::{Coordinate, ForecastResponse};

pub mod openweather;

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    /// Single GET for the 5-day/3-hour forecast at a position.
    async fn fetch_forecast(&self, position: &Coordinate) -> anyhow::Result<ForecastResponse>;
}

/// Construct the forecast provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn ForecastProvider>> {
    let api_key = config.api_key()?;

    Ok(Box::new(OpenWeatherProvider::new(api_key.to_owned())))
}
