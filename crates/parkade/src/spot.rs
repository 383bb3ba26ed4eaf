//! A single parking spot

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::vehicle::Vehicle;

/// Composite spot identifier: floor index plus position on that floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpotId {
    /// Floor the spot belongs to
    pub floor: usize,

    /// Position on the floor, counting from 0
    pub position: usize,
}

impl SpotId {
    /// Create a spot id.
    pub fn new(floor: usize, position: usize) -> Self {
        Self { floor, position }
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.floor, self.position)
    }
}

/// The smallest unit of occupancy state.
///
/// A spot is occupied exactly when it holds an occupant. It does no
/// locking of its own; the owning facility serializes access.
#[derive(Debug, Clone)]
pub struct Spot {
    id: SpotId,
    occupant: Option<Arc<Vehicle>>,
}

impl Spot {
    /// Create an empty spot.
    pub fn new(id: SpotId) -> Self {
        Self { id, occupant: None }
    }

    /// This spot's id.
    pub fn id(&self) -> SpotId {
        self.id
    }

    /// Whether a vehicle currently occupies this spot.
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// The vehicle in this spot, if any.
    pub fn occupant(&self) -> Option<&Vehicle> {
        self.occupant.as_deref()
    }

    /// Put `vehicle` in this spot.
    ///
    /// Returns `false` and leaves the spot untouched if it is already
    /// occupied.
    pub fn park(&mut self, vehicle: Arc<Vehicle>) -> bool {
        if self.occupant.is_some() {
            return false;
        }
        self.occupant = Some(vehicle);
        true
    }

    /// Clear this spot. Returns `false` if it was already empty.
    pub fn leave(&mut self) -> bool {
        self.occupant.take().is_some()
    }

    /// Whether the occupant, if any, has the given id.
    pub(crate) fn is_held_by(&self, vehicle_id: &str) -> bool {
        self.occupant
            .as_ref()
            .is_some_and(|v| v.id() == vehicle_id)
    }
}
