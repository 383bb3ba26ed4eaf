//! The facility: floors, the occupancy index, and the lock around both

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::FacilityConfig;
use crate::error::{ParkingError, Result};
use crate::floor::Floor;
use crate::vehicle::{Vehicle, VehicleClass};

/// Where a vehicle is parked: its floor and the first spot of its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Floor index
    pub floor: usize,

    /// Starting spot position on that floor
    pub spot: usize,
}

impl Location {
    /// Create a location.
    pub fn new(floor: usize, spot: usize) -> Self {
        Self { floor, spot }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor {}, Spot {}", self.floor, self.spot)
    }
}

/// Point-in-time availability of one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorStatus {
    /// Floor index
    pub floor: usize,

    /// Unoccupied spots, ignoring contiguity
    pub available: usize,

    /// Total spots on the floor
    pub capacity: usize,
}

impl fmt::Display for FloorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor {}: {} available spots", self.floor, self.available)
    }
}

/// State guarded by the facility lock.
///
/// A vehicle id is in `index` exactly when its run is occupied at the
/// recorded location.
#[derive(Debug)]
struct Lot {
    floors: Vec<Floor>,
    /// Vehicle id to location, in arrival order
    index: IndexMap<String, Location>,
}

/// A multi-floor parking facility.
///
/// All state sits behind a single reader-writer lock: `park` and `leave`
/// hold the write guard for their whole duration, every query takes a
/// recursive read guard so queries may nest inside
/// [`Facility::with_floors`] even while a writer is queued. A `Facility`
/// is `Send + Sync`; share it with `Arc` or by reference.
///
/// # Example
///
/// ```
/// use parkade::{Facility, Location, ParkingError, VehicleClass};
///
/// let facility = Facility::new(1, 3).unwrap();
///
/// assert_eq!(facility.park("A", VehicleClass::Standard), Ok(Location::new(0, 0)));
/// assert_eq!(facility.park("B", VehicleClass::Oversized), Ok(Location::new(0, 1)));
/// assert!(matches!(
///     facility.park("C", VehicleClass::Standard),
///     Err(ParkingError::Full { .. })
/// ));
///
/// assert_eq!(facility.leave("B"), Ok(Location::new(0, 1)));
/// assert_eq!(facility.query()[0].available, 2);
/// ```
#[derive(Debug)]
pub struct Facility {
    floor_count: usize,
    spots_per_floor: usize,
    lot: RwLock<Lot>,
}

impl Facility {
    /// Build a facility of `floors` floors with `spots_per_floor` spots
    /// each.
    ///
    /// Fails with [`ParkingError::InvalidLayout`] if either count is zero.
    pub fn new(floors: usize, spots_per_floor: usize) -> Result<Self> {
        Self::from_config(&FacilityConfig::new(floors, spots_per_floor))
    }

    /// Build a facility from a validated [`FacilityConfig`].
    pub fn from_config(config: &FacilityConfig) -> Result<Self> {
        config.validate()?;

        let floors = (0..config.floors)
            .map(|index| Floor::new(index, config.spots_per_floor))
            .collect();

        info!(
            "Parking facility opened: {} floor(s) x {} spot(s)",
            config.floors, config.spots_per_floor
        );

        Ok(Self {
            floor_count: config.floors,
            spots_per_floor: config.spots_per_floor,
            lot: RwLock::new(Lot {
                floors,
                index: IndexMap::new(),
            }),
        })
    }

    /// Park a vehicle in the first run that fits, searching floors in
    /// ascending order.
    ///
    /// # Errors
    ///
    /// - [`ParkingError::AlreadyParked`] if `vehicle_id` is already here.
    /// - [`ParkingError::Full`] if no floor has room for `class`.
    ///
    /// Neither error changes any state.
    pub fn park(&self, vehicle_id: &str, class: VehicleClass) -> Result<Location> {
        let mut lot = self.lot.write();

        if lot.index.contains_key(vehicle_id) {
            warn!("Vehicle {} is already parked", vehicle_id);
            return Err(ParkingError::AlreadyParked {
                vehicle: vehicle_id.to_string(),
            });
        }

        let vehicle = Arc::new(Vehicle::new(vehicle_id, class));

        let location = lot.floors.iter_mut().find_map(|floor| {
            floor
                .park(Arc::clone(&vehicle))
                .map(|spot| Location::new(floor.index(), spot))
        });

        match location {
            Some(location) => {
                lot.index.insert(vehicle_id.to_string(), location);
                debug!("Vehicle {} ({}) parked at {}", vehicle_id, class, location);
                Ok(location)
            }
            None => {
                warn!("No run available for {} vehicle {}", class, vehicle_id);
                Err(ParkingError::Full { class })
            }
        }
    }

    /// Remove a vehicle, freeing every spot of its run.
    ///
    /// Returns the location it was parked at.
    ///
    /// # Errors
    ///
    /// [`ParkingError::NotFound`] if `vehicle_id` is not parked here.
    pub fn leave(&self, vehicle_id: &str) -> Result<Location> {
        let mut lot = self.lot.write();

        let Some(location) = lot.index.shift_remove(vehicle_id) else {
            debug!("Vehicle {} not found", vehicle_id);
            return Err(ParkingError::NotFound {
                vehicle: vehicle_id.to_string(),
            });
        };

        let freed = lot.floors[location.floor].release(vehicle_id);
        debug_assert!(freed > 0, "indexed vehicle held no spots");
        debug!(
            "Vehicle {} left {} ({} spot(s) freed)",
            vehicle_id, location, freed
        );

        Ok(location)
    }

    /// Availability of every floor, in ascending floor order.
    pub fn query(&self) -> Vec<FloorStatus> {
        let lot = self.lot.read_recursive();
        lot.floors
            .iter()
            .map(|floor| FloorStatus {
                floor: floor.index(),
                available: floor.available_count(),
                capacity: floor.len(),
            })
            .collect()
    }

    /// Whether no floor has a single free spot.
    ///
    /// Like [`Floor::available_count`], this ignores contiguity: a
    /// facility with scattered single spots is not full even if no
    /// Oversized vehicle can be placed.
    pub fn is_full(&self) -> bool {
        let lot = self.lot.read_recursive();
        lot.floors.iter().all(|floor| floor.available_count() == 0)
    }

    /// Where `vehicle_id` is parked, if it is.
    pub fn locate(&self, vehicle_id: &str) -> Option<Location> {
        self.lot.read_recursive().index.get(vehicle_id).copied()
    }

    /// Number of floors.
    pub fn floor_count(&self) -> usize {
        self.floor_count
    }

    /// Number of spots on each floor.
    pub fn spots_per_floor(&self) -> usize {
        self.spots_per_floor
    }

    /// Total number of spots.
    pub fn capacity(&self) -> usize {
        self.floor_count * self.spots_per_floor
    }

    /// Number of vehicles currently parked. Oversized vehicles count once.
    pub fn parked_count(&self) -> usize {
        self.lot.read_recursive().index.len()
    }

    /// Unoccupied spots across all floors.
    pub fn total_available(&self) -> usize {
        let lot = self.lot.read_recursive();
        lot.floors.iter().map(Floor::available_count).sum()
    }

    /// Every parked vehicle with its location, in arrival order.
    pub fn parked(&self) -> Vec<(String, Location)> {
        let lot = self.lot.read_recursive();
        lot.index
            .iter()
            .map(|(id, location)| (id.clone(), *location))
            .collect()
    }

    /// Run `f` against a consistent view of the floors.
    ///
    /// The read guard is held while `f` runs, so the floors it sees always
    /// agree with [`Facility::locate`]. Other queries may be called from
    /// inside `f`; `park` and `leave` may not, they would wait on the guard
    /// `f` is holding.
    pub fn with_floors<R>(&self, f: impl FnOnce(&[Floor]) -> R) -> R {
        let lot = self.lot.read_recursive();
        f(&lot.floors)
    }
}
