//! Marker and region descriptors for a map rendering surface.
//!
//! The map widget itself is an external collaborator; this module only
//! produces the data it consumes, and no data flows back.

use crate::format::{icon_url, translate_condition};
use crate::model::{Coordinate, ForecastEntry, ForecastResponse};

/// Degrees added to the user's position to fabricate the four nearby
/// points. These are synthetic coordinates, not real places.
const NEARBY_OFFSET_DEG: f64 = 0.05;

const REGION_DELTA_DEG: f64 = 0.05;

/// Center coordinate plus zoom deltas for the map viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRegion {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub fn around(center: Coordinate) -> Self {
        Self {
            center,
            latitude_delta: REGION_DELTA_DEG,
            longitude_delta: REGION_DELTA_DEG,
        }
    }
}

/// One pin on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub title: String,
    pub description: Option<String>,
    pub icon_url: Option<String>,
}

/// Four synthetic points offset north, south, east and west of the user.
pub fn nearby_locations(center: Coordinate) -> [Coordinate; 4] {
    let Coordinate {
        latitude,
        longitude,
    } = center;

    [
        Coordinate {
            latitude: latitude + NEARBY_OFFSET_DEG,
            longitude,
        },
        Coordinate {
            latitude: latitude - NEARBY_OFFSET_DEG,
            longitude,
        },
        Coordinate {
            latitude,
            longitude: longitude + NEARBY_OFFSET_DEG,
        },
        Coordinate {
            latitude,
            longitude: longitude - NEARBY_OFFSET_DEG,
        },
    ]
}

/// User marker plus one marker per nearby point. Nearby marker `i` reuses
/// entry `i` of the single fetched response; markers past the end of a
/// short response carry no condition or icon.
pub fn build_markers(center: Coordinate, response: &ForecastResponse) -> Vec<Marker> {
    let mut markers = Vec::with_capacity(5);

    markers.push(marker_at(
        center,
        "Tu ubicación".to_string(),
        response.list.first(),
    ));

    for (index, coordinate) in nearby_locations(center).into_iter().enumerate() {
        markers.push(marker_at(
            coordinate,
            format!("Ubicación cercana {}", index + 1),
            response.list.get(index),
        ));
    }

    markers
}

fn marker_at(coordinate: Coordinate, title: String, entry: Option<&ForecastEntry>) -> Marker {
    let condition = entry.and_then(ForecastEntry::condition);

    Marker {
        coordinate,
        title,
        description: condition.map(|c| translate_condition(&c.description).to_string()),
        icon_url: condition.map(|c| icon_url(&c.icon)),
    }
}
