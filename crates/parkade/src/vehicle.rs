//! Vehicles and their size classes

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ParkingError;

/// Size class of a vehicle, which determines how many contiguous spots
/// it needs.
///
/// Serialized under the gate name, the same text `Display` renders; the
/// class names are accepted when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleClass {
    /// Bikes and other small vehicles: one spot
    #[serde(rename = "Bike", alias = "Compact")]
    Compact,

    /// Cars: one spot
    #[serde(rename = "Car", alias = "Standard")]
    Standard,

    /// Trucks: two contiguous spots
    #[serde(rename = "Truck", alias = "Oversized")]
    Oversized,
}

impl VehicleClass {
    /// All classes, smallest first.
    pub const ALL: [VehicleClass; 3] = [
        VehicleClass::Compact,
        VehicleClass::Standard,
        VehicleClass::Oversized,
    ];

    /// Number of contiguous spots a vehicle of this class occupies.
    pub fn run_length(self) -> usize {
        match self {
            VehicleClass::Oversized => 2,
            VehicleClass::Compact | VehicleClass::Standard => 1,
        }
    }

    /// Name shown to people at the gate.
    pub fn display_name(self) -> &'static str {
        match self {
            VehicleClass::Compact => "Bike",
            VehicleClass::Standard => "Car",
            VehicleClass::Oversized => "Truck",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for VehicleClass {
    type Err = ParkingError;

    /// Accepts both the gate names (`Bike`, `Car`, `Truck`) and the class
    /// names, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bike" | "compact" => Ok(VehicleClass::Compact),
            "car" | "standard" => Ok(VehicleClass::Standard),
            "truck" | "oversized" => Ok(VehicleClass::Oversized),
            _ => Err(ParkingError::UnknownVehicleClass(s.to_string())),
        }
    }
}

/// A vehicle occupying one or more spots.
///
/// Every spot of a vehicle's run holds a clone of the same `Arc`, so the
/// id is stored once regardless of run length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: Arc<str>,
    class: VehicleClass,
}

impl Vehicle {
    /// Create a vehicle with the given id and class.
    pub fn new(id: impl Into<Arc<str>>, class: VehicleClass) -> Self {
        Self {
            id: id.into(),
            class,
        }
    }

    /// The vehicle's unique id (plate number).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The vehicle's size class.
    pub fn class(&self) -> VehicleClass {
        self.class
    }

    /// Shorthand for `self.class().run_length()`.
    pub fn run_length(&self) -> usize {
        self.class.run_length()
    }
}
