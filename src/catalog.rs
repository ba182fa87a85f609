//! Fleet catalog loading from YAML manifests.
//!
//! Catalog numbers arrive untyped, so integer fields are coerced here; a
//! fractional engine count or speed has the wrong shape for its field.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::vehicle::cargo::CargoVehicle;
use crate::vehicle::passenger::PassengerVehicle;
use crate::vehicle::{Aircraft, FlyingVehicle, VehicleError, validate};

/// Aircraft record parsed from a fleet manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct AircraftConfig {
    pub model: String,
    pub color: String,
    pub empty_weight_tonnes: f64,
    pub max_speed_km_h: f64,
    pub role: AircraftRoleConfig,
}

/// Role selector in fleet manifests.
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum AircraftRoleConfig {
    #[serde(rename = "utility")]
    Utility,
    #[serde(rename = "passenger")]
    Passenger { body_type: f64 },
    #[serde(rename = "cargo")]
    Cargo { fuel_tank_expansion: bool },
    #[serde(other)]
    Unsupported,
}

/// Errors that can occur while loading a fleet catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read YAML: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid aircraft record: {0}")]
    Vehicle(#[from] VehicleError),
    #[error("aircraft role unsupported for model {model}")]
    UnsupportedRole { model: String },
}

/// Load a fleet catalog and build one aircraft per record.
pub fn load_fleet<P: AsRef<Path>>(path: P) -> Result<Vec<Box<dyn Aircraft>>, CatalogError> {
    let reader = File::open(path)?;
    let configs: Vec<AircraftConfig> = serde_yaml::from_reader(reader)?;
    configs.into_iter().map(|cfg| cfg.try_into()).collect()
}

impl TryFrom<AircraftConfig> for Box<dyn Aircraft> {
    type Error = CatalogError;

    fn try_from(value: AircraftConfig) -> Result<Self, Self::Error> {
        let max_speed = validate::integer_from_raw("max speed", value.max_speed_km_h)?;
        match value.role {
            AircraftRoleConfig::Utility => Ok(Box::new(FlyingVehicle::new(
                value.model,
                value.color,
                value.empty_weight_tonnes,
                max_speed,
            )?)),
            AircraftRoleConfig::Passenger { body_type } => {
                let body_type = validate::integer_from_raw("body type", body_type)?;
                Ok(Box::new(PassengerVehicle::new(
                    value.model,
                    value.color,
                    value.empty_weight_tonnes,
                    max_speed,
                    body_type,
                )?))
            }
            AircraftRoleConfig::Cargo {
                fuel_tank_expansion,
            } => Ok(Box::new(CargoVehicle::new(
                value.model,
                value.color,
                value.empty_weight_tonnes,
                max_speed,
                fuel_tank_expansion,
            )?)),
            AircraftRoleConfig::Unsupported => Err(CatalogError::UnsupportedRole {
                model: value.model,
            }),
        }
    }
}
