//! A floor: a fixed row of spots with first-fit run allocation

use std::sync::Arc;

use crate::spot::{Spot, SpotId};
use crate::vehicle::{Vehicle, VehicleClass};

/// One floor of the facility.
///
/// The number of spots is fixed when the floor is built. Spots are
/// allocated in contiguous runs, searched left to right.
#[derive(Debug, Clone)]
pub struct Floor {
    index: usize,
    spots: Vec<Spot>,
}

impl Floor {
    /// Create floor `index` with `spot_count` empty spots.
    pub fn new(index: usize, spot_count: usize) -> Self {
        let spots = (0..spot_count)
            .map(|position| Spot::new(SpotId::new(index, position)))
            .collect();
        Self { index, spots }
    }

    /// This floor's index within the facility.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of spots.
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    /// Whether the floor has no spots at all.
    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }

    /// The floor's spots, in position order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Find the lowest position that starts a free run long enough for
    /// `class`.
    ///
    /// Returns `None` when no such run fits within the floor.
    pub fn find_available_run(&self, class: VehicleClass) -> Option<usize> {
        self.spots
            .windows(class.run_length())
            .position(|run| run.iter().all(|spot| !spot.is_occupied()))
    }

    /// Park `vehicle` in the first free run that fits it.
    ///
    /// Returns the start position of the run, or `None` if the floor has
    /// no room for it.
    pub fn park(&mut self, vehicle: Arc<Vehicle>) -> Option<usize> {
        let start = self.find_available_run(vehicle.class())?;
        let run = start..start + vehicle.run_length();
        for spot in &mut self.spots[run] {
            let parked = spot.park(Arc::clone(&vehicle));
            debug_assert!(parked, "run was checked free before parking");
        }
        Some(start)
    }

    /// Free every spot held by `vehicle_id`.
    ///
    /// Returns how many spots were freed; 0 if the vehicle is not on this
    /// floor.
    pub fn release(&mut self, vehicle_id: &str) -> usize {
        self.spots
            .iter_mut()
            .filter(|spot| spot.is_held_by(vehicle_id))
            .map(|spot| spot.leave())
            .filter(|&freed| freed)
            .count()
    }

    /// Number of unoccupied spots.
    ///
    /// Contiguity is ignored: a floor with two free but separated spots
    /// reports 2 even though no Oversized vehicle fits. Use
    /// [`Floor::find_available_run`] for allocation decisions.
    pub fn available_count(&self) -> usize {
        self.spots.iter().filter(|spot| !spot.is_occupied()).count()
    }

    /// Number of occupied spots.
    pub fn occupied_count(&self) -> usize {
        self.len() - self.available_count()
    }
}
