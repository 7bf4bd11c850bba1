use uom::{
    si::{ISQ, Quantity, SI, area::square_millimeter, f64::{Area, MassRate}},
    typenum::{N1, P1, P2, Z0},
};

use super::Throughput;

/// Open area per unit throughput, m²·s/kg in SI.
pub type OpenAreaPerThroughput = Quantity<ISQ<P2, N1, P1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Accessors for [`OpenAreaPerThroughput`] in mm² per tonne per hour.
pub trait OpenAreaPerThroughputUnits {
    /// Creates the quantity from a value in mm²/(t/h).
    fn from_square_millimeters_per_tonne_hour(value: f64) -> Self;

    /// Returns the value in mm²/(t/h).
    fn square_millimeters_per_tonne_hour(&self) -> f64;
}

impl OpenAreaPerThroughputUnits for OpenAreaPerThroughput {
    fn from_square_millimeters_per_tonne_hour(value: f64) -> Self {
        Area::new::<square_millimeter>(value) / MassRate::from_tonnes_per_hour(1.0)
    }

    fn square_millimeters_per_tonne_hour(&self) -> f64 {
        let area: Area = *self * MassRate::from_tonnes_per_hour(1.0);
        area.get::<square_millimeter>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn area_over_throughput() {
        let area = Area::new::<square_millimeter>(7853.98);
        let rate = MassRate::from_tonnes_per_hour(10.0);
        let per_tonne: OpenAreaPerThroughput = area / rate;

        assert_relative_eq!(
            per_tonne.square_millimeters_per_tonne_hour(),
            785.398,
            max_relative = 1e-12
        );
    }

    #[test]
    fn unit_roundtrip() {
        let q = OpenAreaPerThroughput::from_square_millimeters_per_tonne_hour(42.5);
        assert_relative_eq!(
            q.square_millimeters_per_tonne_hour(),
            42.5,
            max_relative = 1e-12
        );
    }
}
