//! Miles and kilometres.

/// Kilometres in one international mile.
pub const KM_PER_MILE: f64 = 1.609344;

pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

pub fn km_to_miles(km: f64) -> f64 {
    km / KM_PER_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_miles() {
        assert_eq!(format!("{:.2}", miles_to_km(10.0)), "16.09");
    }

    #[test]
    fn inverse_conversion() {
        assert!((km_to_miles(miles_to_km(26.2)) - 26.2).abs() < 1e-12);
        assert_eq!(format!("{:.2}", km_to_miles(5.0)), "3.11");
    }

    #[test]
    fn zero_and_negative_pass_through() {
        assert_eq!(miles_to_km(0.0), 0.0);
        assert!(miles_to_km(-1.0) < 0.0);
    }
}
