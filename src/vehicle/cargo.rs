//! Cargo aircraft: adds a fuel-tank-expansion flag and halves its own weight
//! term in the payload formula.

use std::fmt;

use super::{Aircraft, FlyingVehicle, VehicleError};

/// Cargo aircraft built on the shared airframe record.
#[derive(Debug, Clone)]
pub struct CargoVehicle {
    airframe: FlyingVehicle,
    fuel_tank_expansion: bool,
}

impl CargoVehicle {
    /// Build a cargo aircraft. `fuel_tank_expansion` records whether extra
    /// tanks can be fitted and is fixed at construction.
    pub fn new(
        model: impl Into<String>,
        color: impl Into<String>,
        empty_weight_tonnes: f64,
        max_speed_km_h: u32,
        fuel_tank_expansion: bool,
    ) -> Result<Self, VehicleError> {
        Ok(Self {
            airframe: FlyingVehicle::new(model, color, empty_weight_tonnes, max_speed_km_h)?,
            fuel_tank_expansion,
        })
    }

    /// Whether extra fuel tanks can be fitted.
    pub fn fuel_tank_expansion(&self) -> bool {
        self.fuel_tank_expansion
    }
}

impl Aircraft for CargoVehicle {
    fn airframe(&self) -> &FlyingVehicle {
        &self.airframe
    }

    fn airframe_mut(&mut self) -> &mut FlyingVehicle {
        &mut self.airframe
    }

    fn describe(&self) -> String {
        format!(
            "{} fuel tank expansion available: {}.",
            self.airframe.describe(),
            self.fuel_tank_expansion
        )
    }

    /// Payload with only the aircraft's own weight term halved. Routes the
    /// argument through the base validation and recording step.
    fn calculate_payload(&mut self, max_takeoff_weight_tonnes: f64) -> Result<f64, VehicleError> {
        self.airframe
            .record_max_takeoff_weight(max_takeoff_weight_tonnes)?;
        Ok(max_takeoff_weight_tonnes - self.airframe.empty_weight_tonnes() / 2.0)
    }
}

impl fmt::Display for CargoVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
