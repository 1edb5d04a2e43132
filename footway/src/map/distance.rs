use geo::{HaversineDistance, Point};

use super::Coordinates;

const EARTH_RADIUS_MILES: f64 = 3963.1676;

// Radius used by `geo` for haversine distances in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// Great-circle distance between two points in miles, computed by the
/// [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
pub fn distance_miles(from: &Coordinates, to: &Coordinates) -> f64 {
    let from = Point::new(from.lon, from.lat);
    let to = Point::new(to.lon, to.lat);

    // The distance is proportional to the radius.
    from.haversine_distance(&to) / EARTH_RADIUS_METERS * EARTH_RADIUS_MILES
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} is not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn same_point() {
        let p = Coordinates::new(41.8708, -87.6505);

        assert_eq!(distance_miles(&p, &p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 0.0);

        // 2 * pi * R / 360
        assert_close(distance_miles(&a, &b), 69.17, 0.01);
    }

    #[test]
    fn symmetric() {
        let chicago = Coordinates::new(41.8781, -87.6298);
        let new_york = Coordinates::new(40.7128, -74.0060);

        let there = distance_miles(&chicago, &new_york);
        let back = distance_miles(&new_york, &chicago);

        assert_close(there, back, 1e-9);
        assert_close(there, 711.0, 5.0);
    }

    #[test]
    fn short_hop_in_miles() {
        let a = Coordinates::new(41.87, -87.65);
        let b = Coordinates::new(41.87, -87.649);

        assert_close(distance_miles(&a, &b), 0.051_508_450_5, 1e-10);
    }

    #[test]
    fn monotonic_along_meridian() {
        let origin = Coordinates::new(41.87, -87.65);
        let near = Coordinates::new(41.871, -87.65);
        let far = Coordinates::new(41.872, -87.65);

        assert!(distance_miles(&origin, &near) < distance_miles(&origin, &far));
    }
}
