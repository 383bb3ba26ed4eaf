//! # Parkade
//!
//! Spot allocation and occupancy tracking for multi-floor parking
//! facilities.
//!
//! A [`Facility`] owns a fixed set of [`Floor`]s, each a row of [`Spot`]s.
//! Arriving vehicles are placed first-fit: the lowest floor with room
//! wins, and on that floor the lowest starting position of a free run
//! long enough for the vehicle's [`VehicleClass`]. Oversized vehicles
//! need two contiguous spots; everything else needs one.
//!
//! ## Architecture
//!
//! - **Spot**: occupied or free, with the occupying [`Vehicle`]
//! - **Floor**: contiguous-run search and release by vehicle id
//! - **Facility**: floor fallback, the vehicle-to-[`Location`] index, and
//!   the single lock that keeps the two consistent
//!
//! Text menus, input prompts and rendering belong to the caller. The
//! `Display` impls on [`Location`], [`FloorStatus`] and [`ParkingError`]
//! and the [`FromStr`](std::str::FromStr) impl on [`VehicleClass`] keep
//! that layer thin.
//!
//! ## Example
//!
//! ```
//! use parkade::{Facility, Location, VehicleClass};
//!
//! let facility = Facility::new(2, 2)?;
//!
//! facility.park("A", VehicleClass::Standard)?;
//! facility.park("B", VehicleClass::Compact)?;
//! // Floor 0 is full, so the next car goes upstairs
//! assert_eq!(facility.park("C", VehicleClass::Standard)?, Location::new(1, 0));
//!
//! assert_eq!(facility.locate("B"), Some(Location::new(0, 1)));
//! # Ok::<(), parkade::ParkingError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod facility;
pub mod floor;
pub mod spot;
pub mod vehicle;

// Re-export main types
pub use config::FacilityConfig;
pub use error::{ParkingError, Result};
pub use facility::{Facility, FloorStatus, Location};
pub use floor::Floor;
pub use spot::{Spot, SpotId};
pub use vehicle::{Vehicle, VehicleClass};

/// Parkade version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
