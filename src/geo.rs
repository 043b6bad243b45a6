//! Great-circle geodesy over WGS84-ish spherical Earth.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distance in kilometers between two coordinates using the haversine
/// formula. Pure; NaN input propagates NaN, callers validate coordinate
/// ranges.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round to two decimal places, the precision used for stored distances and
/// efficiencies.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
