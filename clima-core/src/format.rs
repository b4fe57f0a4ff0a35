//! Pure display formatting for provider fields.
//!
//! Every function here is total over its documented domain: absent readings
//! render as "N/A", unknown conditions pass through unchanged, unparseable
//! timestamps yield `None`.

use chrono::{Datelike, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Indexed by day-of-week, 0 = Sunday.
const WEEKDAYS: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

/// Kelvin to Celsius with one decimal place, rounding half away from zero.
pub fn kelvin_to_celsius(kelvin: Option<f64>) -> String {
    match kelvin {
        Some(k) => format!("{:.1}", ((k - 273.15) * 10.0).round() / 10.0),
        None => "N/A".to_string(),
    }
}

/// Exact-match lookup against the Spanish condition mapping. The mapping is
/// not exhaustive; unseen descriptions are returned unchanged.
pub fn translate_condition(condition: &str) -> &str {
    match condition {
        "clear sky" => "cielo despejado",
        "few clouds" => "pocas nubes",
        "scattered clouds" => "nubes dispersas",
        "broken clouds" => "nubes rotas",
        "shower rain" => "lluvia ligera",
        "rain" => "lluvia",
        "thunderstorm" => "tormenta eléctrica",
        "snow" => "nieve",
        "mist" => "niebla",
        "haze" => "neblina",
        "dust" => "polvo",
        "fog" => "niebla",
        "tornado" => "tornado",
        "light rain" => "lluvia ligera",
        other => other,
    }
}

/// High-resolution icon URL for a provider icon code. The code is not
/// validated.
pub fn icon_url(icon_code: &str) -> String {
    format!("http://openweathermap.org/img/wn/{icon_code}@2x.png")
}

/// Localized weekday name for a provider timestamp, or `None` when the
/// timestamp does not parse.
pub fn weekday_name(dt_txt: &str) -> Option<&'static str> {
    let parsed = NaiveDateTime::parse_from_str(dt_txt, TIMESTAMP_FORMAT).ok()?;
    Some(WEEKDAYS[parsed.weekday().num_days_from_sunday() as usize])
}

/// Visibility in kilometers from a reading in meters.
pub fn visibility_km(visibility_m: Option<u32>) -> String {
    match visibility_m {
        Some(m) => format!("{}", f64::from(m) / 1000.0),
        None => "N/A".to_string(),
    }
}

/// Wind speed in meters per second, rendered as the provider sent it.
pub fn wind_speed_ms(speed: Option<f64>) -> String {
    match speed {
        Some(s) => format!("{s}"),
        None => "N/A".to_string(),
    }
}

/// Relative humidity in percent.
pub fn humidity_pct(humidity: Option<u8>) -> String {
    match humidity {
        Some(h) => format!("{h}"),
        None => "N/A".to_string(),
    }
}
