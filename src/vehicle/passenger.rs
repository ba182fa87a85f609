//! Passenger aircraft: adds a body-type count and reports payload in
//! kilograms instead of tonnes.

use std::fmt;

use super::{Aircraft, FlyingVehicle, VehicleError};

/// Passenger aircraft built on the shared airframe record.
#[derive(Debug, Clone)]
pub struct PassengerVehicle {
    airframe: FlyingVehicle,
    body_type: u32,
}

impl PassengerVehicle {
    /// Build a passenger aircraft. `body_type` counts the engines/fuselage
    /// sections and is fixed at construction.
    pub fn new(
        model: impl Into<String>,
        color: impl Into<String>,
        empty_weight_tonnes: f64,
        max_speed_km_h: u32,
        body_type: u32,
    ) -> Result<Self, VehicleError> {
        Ok(Self {
            airframe: FlyingVehicle::new(model, color, empty_weight_tonnes, max_speed_km_h)?,
            body_type,
        })
    }

    /// Engine/fuselage-section count.
    pub fn body_type(&self) -> u32 {
        self.body_type
    }
}

impl Aircraft for PassengerVehicle {
    fn airframe(&self) -> &FlyingVehicle {
        &self.airframe
    }

    fn airframe_mut(&mut self) -> &mut FlyingVehicle {
        &mut self.airframe
    }

    fn describe(&self) -> String {
        format!("{} Body type: {}.", self.airframe.describe(), self.body_type)
    }

    /// Payload in kilograms rather than tonnes. Routes the argument through
    /// the base validation and recording step, discarding its result.
    fn calculate_payload(&mut self, max_takeoff_weight_tonnes: f64) -> Result<f64, VehicleError> {
        self.airframe
            .record_max_takeoff_weight(max_takeoff_weight_tonnes)?;
        Ok((max_takeoff_weight_tonnes - self.airframe.empty_weight_tonnes()) * 1000.0)
    }
}

impl fmt::Display for PassengerVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
