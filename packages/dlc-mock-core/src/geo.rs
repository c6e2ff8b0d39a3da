//! District-to-coordinate resolution with bounded jitter.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, City};

/// India bounding box: southern latitude limit.
pub const LAT_MIN: f64 = 8.0;
/// India bounding box: northern latitude limit.
pub const LAT_MAX: f64 = 35.5;
/// India bounding box: western longitude limit.
pub const LNG_MIN: f64 = 68.7;
/// India bounding box: eastern longitude limit.
pub const LNG_MAX: f64 = 97.25;

/// A latitude/longitude pair, rounded to 6 decimals on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Builds a coordinate, rounding both axes to 6 decimals.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round6(latitude),
            longitude: round6(longitude),
        }
    }

    /// Whether the point lies inside the national bounding box.
    pub fn in_bounds(&self) -> bool {
        (LAT_MIN..=LAT_MAX).contains(&self.latitude) && (LNG_MIN..=LNG_MAX).contains(&self.longitude)
    }
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Picks the base city for a district without consuming randomness.
///
/// Resolution order, first match wins:
/// 1. exact case-insensitive city name match,
/// 2. case-insensitive substring match in either direction,
/// 3. the state's fallback city,
/// 4. the first city in the catalog.
///
/// Ambiguous fuzzy matches are broken by catalog iteration order.
pub fn base_city(district: &str, state: &str) -> &'static City {
    let district_lower = district.to_lowercase();

    let matched = catalog::CITIES.iter().find(|city| {
        let city_lower = city.name.to_lowercase();
        city_lower == district_lower
            || district_lower.contains(&city_lower)
            || city_lower.contains(&district_lower)
    });

    match matched {
        Some(city) => city,
        None => catalog::fallback_city(state).unwrap_or(&catalog::CITIES[0]),
    }
}

/// Resolves a district to a jittered coordinate near its base city.
///
/// Jitter is uniform and independent per axis, `±jitter` degrees. A jittered
/// point outside the bounding box is discarded in favor of the unperturbed
/// base; there is no retry, so the call stays O(1).
pub fn resolve<R: Rng>(district: &str, state: &str, jitter: f64, rng: &mut R) -> GeoCoordinate {
    let base = base_city(district, state);
    jittered(base, jitter, rng)
}

/// Supplemental generic coordinate: a random catalog city with wider jitter.
pub fn random_city_coordinate<R: Rng>(rng: &mut R) -> GeoCoordinate {
    let index = rng.gen_range(0..catalog::CITIES.len());
    jittered(&catalog::CITIES[index], 0.05, rng)
}

fn jittered<R: Rng>(base: &City, jitter: f64, rng: &mut R) -> GeoCoordinate {
    if jitter == 0.0 {
        return GeoCoordinate::new(base.lat, base.lng);
    }
    let candidate = GeoCoordinate::new(
        base.lat + rng.gen_range(-jitter..jitter),
        base.lng + rng.gen_range(-jitter..jitter),
    );
    if candidate.in_bounds() {
        candidate
    } else {
        GeoCoordinate::new(base.lat, base.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_exact_match_wins() {
        assert_eq!(base_city("Mumbai", "Maharashtra").name, "Mumbai");
        assert_eq!(base_city("lucknow", "Uttar Pradesh").name, "Lucknow");
    }

    #[test]
    fn test_substring_match_district_contains_city() {
        assert_eq!(base_city("Kanpur Nagar", "Uttar Pradesh").name, "Kanpur");
    }

    #[test]
    fn test_substring_match_city_contains_district() {
        assert_eq!(base_city("Pimp", "Maharashtra").name, "Pimpri");
    }

    #[test]
    fn test_state_fallback_for_unknown_district() {
        assert_eq!(base_city("NonexistentTown", "Uttar Pradesh").name, "Lucknow");
        assert_eq!(base_city("Tirunelveli", "Tamil Nadu").name, "Chennai");
    }

    #[test]
    fn test_absolute_fallback_is_first_catalog_entry() {
        let city = base_city("NonexistentTown", "Atlantis");
        assert_eq!(city.name, crate::catalog::CITIES[0].name);
    }

    #[test]
    fn test_fallback_base_stable_under_jitter() {
        // Base-city selection must not depend on the random stream.
        let lucknow = crate::catalog::city_by_name("Lucknow").unwrap();
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let coord = resolve("NonexistentTown", "Uttar Pradesh", 0.02, &mut rng);
            assert!(coord.in_bounds());
            assert!((coord.latitude - lucknow.lat).abs() <= 0.02 + 1e-9);
            assert!((coord.longitude - lucknow.lng).abs() <= 0.02 + 1e-9);
        }
    }

    #[test]
    fn test_bounding_box_holds_for_many_samples() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for i in 0..10_000 {
            let coord = if i % 2 == 0 {
                random_city_coordinate(&mut rng)
            } else {
                resolve("Darjeeling", "West Bengal", 0.02, &mut rng)
            };
            assert!(coord.in_bounds(), "out of bounds: {coord:?}");
        }
    }

    #[test]
    fn test_six_decimal_rounding() {
        let coord = GeoCoordinate::new(19.076123456789, 72.877654321987);
        assert_eq!(coord.latitude, 19.076123);
        assert_eq!(coord.longitude, 72.877654);
    }

    #[test]
    fn test_zero_jitter_returns_base() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let coord = resolve("Mumbai", "Maharashtra", 0.0, &mut rng);
        assert_eq!(coord, GeoCoordinate::new(19.076, 72.8777));
    }
}
