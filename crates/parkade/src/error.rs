//! Error types for facility operations

use thiserror::Error;

use crate::vehicle::VehicleClass;

/// Main error type for parking operations.
///
/// Every variant is recoverable: a rejected operation leaves the
/// facility exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// The vehicle id is already present in the occupancy index
    #[error("Vehicle {vehicle} is already parked")]
    AlreadyParked {
        /// Offending vehicle id
        vehicle: String,
    },

    /// No floor has a free run long enough for the vehicle
    #[error("Parking facility is full: no run available for a {class} vehicle")]
    Full {
        /// Class that could not be placed
        class: VehicleClass,
    },

    /// The vehicle id is not present in the occupancy index
    #[error("Vehicle {vehicle} not found in the parking facility")]
    NotFound {
        /// Requested vehicle id
        vehicle: String,
    },

    /// Zero floors or zero spots per floor
    #[error("Invalid layout: {floors} floor(s) with {spots_per_floor} spot(s) each")]
    InvalidLayout {
        /// Requested floor count
        floors: usize,
        /// Requested spots per floor
        spots_per_floor: usize,
    },

    /// Vehicle class name did not match any known class
    #[error("Unknown vehicle class: {0}")]
    UnknownVehicleClass(String),
}

impl ParkingError {
    /// Whether this error was caused by a request that may succeed later
    /// once the facility state changes (a full facility may free up).
    pub fn is_transient(&self) -> bool {
        matches!(self, ParkingError::Full { .. })
    }
}

/// Result type alias for parking operations
pub type Result<T> = std::result::Result<T, ParkingError>;
