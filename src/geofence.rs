//! Geofence validation for on-site check-ins.
//!
//! Pure great-circle math: no I/O, deterministic to floating-point precision
//! so check-in audits are reproducible.

use serde::{Deserialize, Serialize};

use crate::config::GEOFENCE_RADIUS_KM;

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS-84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Convenience constructor.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Great-circle distance between two points in kilometers (haversine).
///
/// # Example
///
/// ```
/// use roster_engine::geofence::{Coordinates, distance_km};
///
/// let obelisco = Coordinates::new(-34.6037, -58.3816);
/// assert_eq!(distance_km(obelisco, obelisco), 0.0);
/// ```
pub fn distance_km(p1: Coordinates, p2: Coordinates) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let delta_lat = (p2.latitude - p1.latitude).to_radians();
    let delta_lon = (p2.longitude - p1.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Whether an employee's check-in position is within the site's geofence.
///
/// The radius is the fixed [`GEOFENCE_RADIUS_KM`] tolerance (100 meters),
/// boundary-inclusive.
pub fn is_in_geofence(employee: Coordinates, objective: Coordinates) -> bool {
    is_within_radius(employee, objective, GEOFENCE_RADIUS_KM)
}

/// Boundary-inclusive radius check with a caller-supplied radius.
pub fn is_within_radius(employee: Coordinates, objective: Coordinates, radius_km: f64) -> bool {
    distance_km(employee, objective) <= radius_km
}

#[cfg(test)]
mod tests {
    use super::*;

    // Obelisco, Buenos Aires.
    const SITE: Coordinates = Coordinates {
        latitude: -34.6037,
        longitude: -58.3816,
    };

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_km(SITE, SITE), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let other = Coordinates::new(-34.6090, -58.3838);
        assert_eq!(distance_km(SITE, other), distance_km(other, SITE));
    }

    #[test]
    fn test_known_distance_buenos_aires_to_la_plata() {
        let la_plata = Coordinates::new(-34.9215, -57.9545);
        let d = distance_km(SITE, la_plata);
        // Roughly 52 km by great circle.
        assert!((d - 52.0).abs() < 2.0, "got {d} km");
    }

    #[test]
    fn test_checkin_at_site_is_inside() {
        assert!(is_in_geofence(SITE, SITE));
    }

    #[test]
    fn test_checkin_50m_away_is_inside() {
        // ~50 m north of the site: 1 degree of latitude is ~111.19 km.
        let nearby = Coordinates::new(SITE.latitude + 0.00045, SITE.longitude);
        assert!(distance_km(nearby, SITE) < 0.1);
        assert!(is_in_geofence(nearby, SITE));
    }

    #[test]
    fn test_checkin_500m_away_is_outside() {
        let distant = Coordinates::new(SITE.latitude + 0.0045, SITE.longitude);
        assert!(distance_km(distant, SITE) > 0.1);
        assert!(!is_in_geofence(distant, SITE));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        // An exact-radius synthetic check: is_within_radius uses <=.
        assert!(is_within_radius(SITE, SITE, 0.0));
    }

    #[test]
    fn test_is_in_geofence_agrees_with_distance() {
        let points = [
            Coordinates::new(SITE.latitude + 0.0004, SITE.longitude),
            Coordinates::new(SITE.latitude + 0.0009, SITE.longitude),
            Coordinates::new(SITE.latitude + 0.0020, SITE.longitude - 0.0010),
        ];
        for p in points {
            assert_eq!(
                is_in_geofence(p, SITE),
                distance_km(p, SITE) <= GEOFENCE_RADIUS_KM
            );
        }
    }
}
