use serde::{Deserialize, Serialize};

/// Single (latitude, longitude) pair, resolved once per session and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One 5-day/3-hour forecast response. Each fetch replaces the previous
/// response wholesale; entries are ordered ascending by timestamp by the
/// upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour weather sample.
///
/// Fields the provider omits in practice deserialize to `None` instead of
/// failing at the point of access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Provider timestamp, "YYYY-MM-DD HH:MM:SS".
    pub dt_txt: String,
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<ConditionDescriptor>,
    pub wind: WindBlock,
    /// Meters.
    pub visibility: Option<u32>,
}

impl ForecastEntry {
    /// First condition descriptor, if the provider sent any.
    pub fn condition(&self) -> Option<&ConditionDescriptor> {
        self.weather.first()
    }
}

/// Temperatures in Kelvin, humidity in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainBlock {
    pub temp: Option<f64>,
    pub temp_min: Option<f64>,
    pub temp_max: Option<f64>,
    pub humidity: Option<u8>,
}

/// Short weather label plus an icon identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDescriptor {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindBlock {
    /// Meters per second.
    pub speed: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_parses_with_all_fields() {
        let entry: ForecastEntry = serde_json::from_str(
            r#"{
                "dt_txt": "2024-06-01 00:00:00",
                "main": { "temp": 300.0, "temp_min": 298.5, "temp_max": 301.2, "humidity": 40 },
                "weather": [ { "description": "clear sky", "icon": "01d" } ],
                "wind": { "speed": 3.4 },
                "visibility": 10000
            }"#,
        )
        .expect("entry should parse");

        assert_eq!(entry.dt_txt, "2024-06-01 00:00:00");
        assert_eq!(entry.main.temp, Some(300.0));
        assert_eq!(entry.main.humidity, Some(40));
        assert_eq!(entry.condition().map(|c| c.icon.as_str()), Some("01d"));
        assert_eq!(entry.wind.speed, Some(3.4));
        assert_eq!(entry.visibility, Some(10000));
    }

    #[test]
    fn entry_parses_with_missing_nested_fields() {
        let entry: ForecastEntry = serde_json::from_str(
            r#"{
                "dt_txt": "2024-06-01 03:00:00",
                "main": {},
                "wind": {}
            }"#,
        )
        .expect("sparse entry should still parse");

        assert_eq!(entry.main.temp, None);
        assert_eq!(entry.main.humidity, None);
        assert!(entry.condition().is_none());
        assert_eq!(entry.wind.speed, None);
        assert_eq!(entry.visibility, None);
    }
}
