use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};

const KILOGRAMS_PER_TONNE: f64 = 1000.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Extension trait for mass throughput in tonnes per hour.
///
/// [`uom`] has no metric-tonne-per-hour mass rate unit, which is how pellet
/// mill capacity is quoted.
pub trait Throughput {
    /// Creates a mass rate from a value in t/h.
    fn from_tonnes_per_hour(value: f64) -> Self;

    /// Returns the mass rate in t/h.
    fn tonnes_per_hour(&self) -> f64;
}

impl Throughput for MassRate {
    fn from_tonnes_per_hour(value: f64) -> Self {
        MassRate::new::<kilogram_per_second>(value * KILOGRAMS_PER_TONNE / SECONDS_PER_HOUR)
    }

    fn tonnes_per_hour(&self) -> f64 {
        self.get::<kilogram_per_second>() * SECONDS_PER_HOUR / KILOGRAMS_PER_TONNE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn tonnes_per_hour() {
        let rate = MassRate::from_tonnes_per_hour(10.0);
        assert_relative_eq!(rate.get::<kilogram_per_second>(), 10_000.0 / 3600.0, epsilon = 1e-9);
        assert_relative_eq!(rate.tonnes_per_hour(), 10.0, epsilon = 1e-9);
    }
}
