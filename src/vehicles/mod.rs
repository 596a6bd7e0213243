//! Vehicles
//!
//! Vehicle compatibility reference data: which models each make offers, the fuel types a model
//! ships with, and the model years parts are tracked for.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod catalog;
pub mod data;
pub mod fitment;
pub mod selection;

pub use catalog::{ModelSpec, VehicleCatalog};

/// Earliest model year parts compatibility is tracked for.
pub const FLOOR_YEAR: i16 = 2010;

/// The current calendar year from the wall clock.
pub fn current_year() -> i16 {
    jiff::Zoned::now().year()
}

/// Vehicle reference data errors.
#[derive(Debug, Error)]
pub enum VehicleError {
    /// YAML parsing error
    #[error("Failed to parse vehicle catalog: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A model's production end precedes its start.
    #[error("Invalid year range for {make} {model}: {start}..{end}")]
    InvalidYearRange {
        /// Vehicle make
        make: String,
        /// Vehicle model
        model: String,
        /// First production year
        start: i16,
        /// Last production year
        end: i16,
    },

    /// A model lists no fuel types.
    #[error("No fuel types configured for {make} {model}")]
    NoFuelTypes {
        /// Vehicle make
        make: String,
        /// Vehicle model
        model: String,
    },

    /// Unrecognised fuel type name.
    #[error("Unknown fuel type: {0}")]
    UnknownFuelType(String),
}

/// Fuel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FuelType {
    /// Petrol
    Petrol,
    /// Diesel
    Diesel,
    /// Compressed natural gas
    #[serde(rename = "CNG")]
    Cng,
    /// Battery electric
    Electric,
    /// Petrol or diesel hybrid
    Hybrid,
    /// Liquefied petroleum gas
    #[serde(rename = "LPG")]
    Lpg,
}

impl FuelType {
    /// Display name, as used in the catalog data.
    pub fn as_str(self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
            FuelType::Cng => "CNG",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
            FuelType::Lpg => "LPG",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = VehicleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "cng" => Ok(FuelType::Cng),
            "electric" | "ev" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            "lpg" => Ok(FuelType::Lpg),
            _ => Err(VehicleError::UnknownFuelType(s.to_string())),
        }
    }
}
