//! Numeric value generators.

use crate::records::Location;
use rand::Rng;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a money-like amount in the given range (inclusive), rounded to cents.
pub fn generate_amount<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    round2(rng.random_range(min..=max)).clamp(min, max)
}

/// Generate coordinates anywhere on the globe with six decimal places.
pub fn generate_location<R: Rng + ?Sized>(rng: &mut R) -> Location {
    let round6 = |v: f64| (v * 1_000_000.0).round() / 1_000_000.0;
    Location {
        lat: round6(rng.random_range(-90.0..=90.0)),
        lng: round6(rng.random_range(-180.0..=180.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.345_6), 2.35);
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_generate_amount() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = generate_amount(&mut rng, 2.0, 30.0);
            assert!((2.0..=30.0).contains(&value));
            assert_eq!(round2(value), value);
        }
    }

    #[test]
    fn test_generate_location() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let location = generate_location(&mut rng);
            assert!((-90.0..=90.0).contains(&location.lat));
            assert!((-180.0..=180.0).contains(&location.lng));
        }
    }
}
