//! Facility layout configuration

use serde::{Deserialize, Serialize};

use crate::error::{ParkingError, Result};

/// Layout of a facility: how many floors and how many spots on each.
///
/// The layout is fixed once a [`Facility`](crate::Facility) is built from
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityConfig {
    /// Number of floors
    pub floors: usize,

    /// Number of spots on every floor
    pub spots_per_floor: usize,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            floors: 1,
            spots_per_floor: 10,
        }
    }
}

impl FacilityConfig {
    /// Create a config with the given layout.
    pub fn new(floors: usize, spots_per_floor: usize) -> Self {
        Self {
            floors,
            spots_per_floor,
        }
    }

    /// Replace the floor count.
    pub fn with_floors(self, floors: usize) -> Self {
        Self { floors, ..self }
    }

    /// Replace the spots-per-floor count.
    pub fn with_spots_per_floor(self, spots_per_floor: usize) -> Self {
        Self {
            spots_per_floor,
            ..self
        }
    }

    /// Total number of spots in the layout, saturating at `usize::MAX`.
    pub fn capacity(&self) -> usize {
        self.floors.saturating_mul(self.spots_per_floor)
    }

    /// Reject layouts with no floors or no spots.
    pub fn validate(&self) -> Result<()> {
        if self.floors == 0 || self.spots_per_floor == 0 {
            return Err(ParkingError::InvalidLayout {
                floors: self.floors,
                spots_per_floor: self.spots_per_floor,
            });
        }
        Ok(())
    }
}
