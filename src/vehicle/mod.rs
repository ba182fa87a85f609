//! Aircraft models sharing one validated airframe record.
//!
//! `FlyingVehicle` holds the attributes every aircraft carries; the passenger
//! and cargo specializations compose it and override only the payload and
//! description operations through the [`Aircraft`] trait.

pub mod cargo;
pub mod passenger;
pub(crate) mod validate;

use std::fmt;

use thiserror::Error;

/// Validation failures raised by constructors, setters, and the payload
/// operation. Errors are never caught internally; they propagate to the
/// caller.
#[derive(Debug, Error)]
pub enum VehicleError {
    /// The argument's runtime shape does not match the expected semantic type
    /// (non-finite float, fractional value where an integer is required).
    #[error("the {field} should be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
    /// The argument is well-typed but zero or negative where a positive
    /// quantity is required.
    #[error("the {field} should be positive")]
    NonPositive { field: &'static str },
}

/// Common operations shared by every aircraft kind.
///
/// Base behaviour lives on [`FlyingVehicle`]; specializations override
/// [`describe`](Aircraft::describe) and
/// [`calculate_payload`](Aircraft::calculate_payload) while inheriting the
/// kinetic-energy and fuel-consumption operations unchanged.
pub trait Aircraft: fmt::Debug {
    /// Shared airframe record backing the common operations.
    fn airframe(&self) -> &FlyingVehicle;

    /// Mutable access to the shared airframe record.
    fn airframe_mut(&mut self) -> &mut FlyingVehicle;

    /// Human-readable description of the aircraft.
    fn describe(&self) -> String {
        self.airframe().describe()
    }

    /// Payload capacity in tonnes: maximum takeoff weight minus empty weight.
    /// Records the validated argument on the airframe as a side effect.
    fn calculate_payload(&mut self, max_takeoff_weight_tonnes: f64) -> Result<f64, VehicleError> {
        self.airframe_mut()
            .record_max_takeoff_weight(max_takeoff_weight_tonnes)?;
        Ok(max_takeoff_weight_tonnes - self.airframe().empty_weight_tonnes())
    }

    /// Kinetic energy in joules at maximum speed. Identical for every
    /// aircraft kind; specializations must not override it.
    fn max_kinetic_energy(&self) -> f64 {
        self.airframe().max_kinetic_energy()
    }

    /// Fuel burn in tonnes per hour, or `None` when the aircraft kind does
    /// not model fuel consumption. No kind in this catalog models it yet.
    fn fuel_consumption(&self) -> Option<f64> {
        None
    }
}

/// Base aircraft record with validated attributes.
///
/// The model is fixed at construction; colour, empty weight, and maximum
/// speed are mutable through guarded setters that reject invalid values
/// without touching the stored ones.
#[derive(Debug, Clone)]
pub struct FlyingVehicle {
    model: String,
    color: String,
    empty_weight_tonnes: f64,
    max_speed_km_h: u32,
    max_takeoff_weight_tonnes: Option<f64>,
}

impl FlyingVehicle {
    /// Build a validated airframe. The empty weight must be a finite positive
    /// number of tonnes and the maximum speed a positive count of km/h.
    pub fn new(
        model: impl Into<String>,
        color: impl Into<String>,
        empty_weight_tonnes: f64,
        max_speed_km_h: u32,
    ) -> Result<Self, VehicleError> {
        Ok(Self {
            model: model.into(),
            color: color.into(),
            empty_weight_tonnes: validate::positive_tonnes("weight", empty_weight_tonnes)?,
            max_speed_km_h: validate::positive_count("max speed", max_speed_km_h)?,
            max_takeoff_weight_tonnes: None,
        })
    }

    /// Model designation, fixed for the lifetime of the aircraft.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Fuselage colour.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Repaint the fuselage.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Mass without passengers or cargo, in tonnes.
    pub fn empty_weight_tonnes(&self) -> f64 {
        self.empty_weight_tonnes
    }

    /// Replace the empty weight. Fails without mutating on a non-finite or
    /// non-positive value.
    pub fn set_empty_weight(&mut self, tonnes: f64) -> Result<(), VehicleError> {
        self.empty_weight_tonnes = validate::positive_tonnes("weight", tonnes)?;
        Ok(())
    }

    /// Maximum speed in km/h.
    pub fn max_speed_km_h(&self) -> u32 {
        self.max_speed_km_h
    }

    /// Replace the maximum speed. Fails without mutating on zero.
    pub fn set_max_speed(&mut self, km_h: u32) -> Result<(), VehicleError> {
        self.max_speed_km_h = validate::positive_count("max speed", km_h)?;
        Ok(())
    }

    /// The most recent maximum takeoff weight passed to the payload
    /// operation, or `None` if it has never run successfully.
    pub fn max_takeoff_weight_tonnes(&self) -> Option<f64> {
        self.max_takeoff_weight_tonnes
    }

    /// Validate and record a maximum takeoff weight. Every payload override
    /// routes its argument through here before applying its own formula.
    pub fn record_max_takeoff_weight(&mut self, tonnes: f64) -> Result<(), VehicleError> {
        self.max_takeoff_weight_tonnes =
            Some(validate::positive_tonnes("max takeoff weight", tonnes)?);
        Ok(())
    }

    /// Base description shared by every aircraft kind.
    pub fn describe(&self) -> String {
        format!(
            "Aircraft {} {}. Weight: {} tonnes. Max speed: {}.",
            self.color, self.model, self.empty_weight_tonnes, self.max_speed_km_h
        )
    }

    /// Kinetic energy in joules at maximum speed: `m * v^2 / 2` with the
    /// speed converted from km/h to m/s (division by 3.6) and the mass in
    /// tonnes.
    pub fn max_kinetic_energy(&self) -> f64 {
        let speed_m_s = f64::from(self.max_speed_km_h) / 3.6;
        self.empty_weight_tonnes * speed_m_s * speed_m_s / 2.0
    }
}

impl Aircraft for FlyingVehicle {
    fn airframe(&self) -> &FlyingVehicle {
        self
    }

    fn airframe_mut(&mut self) -> &mut FlyingVehicle {
        self
    }
}

impl fmt::Display for FlyingVehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
