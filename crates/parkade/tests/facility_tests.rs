//! Facility tests

use parkade::*;
use pretty_assertions::assert_eq;

fn available(facility: &Facility) -> Vec<usize> {
    facility.query().iter().map(|s| s.available).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_new_facility_is_empty() {
    let facility = Facility::new(3, 4).unwrap();
    assert_eq!(facility.floor_count(), 3);
    assert_eq!(facility.spots_per_floor(), 4);
    assert_eq!(facility.capacity(), 12);
    assert_eq!(facility.parked_count(), 0);
    assert_eq!(facility.total_available(), 12);
    assert!(!facility.is_full());
    assert_eq!(available(&facility), vec![4, 4, 4]);
}

#[test]
fn test_from_config() {
    let config = FacilityConfig::default().with_floors(2).with_spots_per_floor(5);
    let facility = Facility::from_config(&config).unwrap();
    assert_eq!(facility.capacity(), 10);
}

#[test]
fn test_zero_layouts_fail_fast() {
    assert!(matches!(
        Facility::new(0, 0),
        Err(ParkingError::InvalidLayout { .. })
    ));
    assert!(matches!(
        Facility::from_config(&FacilityConfig::new(4, 0)),
        Err(ParkingError::InvalidLayout { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Parking
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_mixed_run_fills_single_floor() {
    let facility = Facility::new(1, 3).unwrap();

    assert_eq!(
        facility.park("A", VehicleClass::Standard),
        Ok(Location::new(0, 0))
    );
    assert_eq!(
        facility.park("B", VehicleClass::Oversized),
        Ok(Location::new(0, 1))
    );
    assert_eq!(
        facility.park("C", VehicleClass::Standard),
        Err(ParkingError::Full {
            class: VehicleClass::Standard
        })
    );

    assert!(facility.is_full());
    assert_eq!(facility.parked_count(), 2);
    assert_eq!(facility.locate("C"), None);
}

#[test]
fn test_first_fit_across_floors() {
    let facility = Facility::new(2, 2).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    facility.park("B", VehicleClass::Compact).unwrap();

    assert_eq!(
        facility.park("C", VehicleClass::Standard),
        Ok(Location::new(1, 0))
    );
    assert_eq!(available(&facility), vec![0, 1]);
}

#[test]
fn test_lower_floor_reused_after_leave() {
    let facility = Facility::new(2, 1).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    facility.park("B", VehicleClass::Standard).unwrap();
    facility.leave("A").unwrap();

    assert_eq!(
        facility.park("C", VehicleClass::Standard),
        Ok(Location::new(0, 0))
    );
}

#[test]
fn test_oversized_falls_through_fragmented_floor() {
    let facility = Facility::new(2, 3).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    facility.park("B", VehicleClass::Standard).unwrap();
    facility.park("C", VehicleClass::Standard).unwrap();
    facility.leave("B").unwrap();

    // Floor 0 has one free spot in the middle: no room for a truck
    assert_eq!(
        facility.park("T", VehicleClass::Oversized),
        Ok(Location::new(1, 0))
    );
    // But a bike still fits in the gap
    assert_eq!(
        facility.park("D", VehicleClass::Compact),
        Ok(Location::new(0, 1))
    );
}

#[test]
fn test_oversized_never_fits_single_spot_floors() {
    let facility = Facility::new(3, 1).unwrap();
    assert_eq!(
        facility.park("T", VehicleClass::Oversized),
        Err(ParkingError::Full {
            class: VehicleClass::Oversized
        })
    );
    assert!(!facility.is_full());
    assert_eq!(facility.parked_count(), 0);
}

#[test]
fn test_available_count_ignores_contiguity() {
    let facility = Facility::new(1, 3).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    facility.park("B", VehicleClass::Standard).unwrap();
    facility.park("C", VehicleClass::Standard).unwrap();
    facility.leave("A").unwrap();
    facility.leave("C").unwrap();

    // Two free spots reported, yet no truck can park
    assert_eq!(available(&facility), vec![2]);
    assert!(!facility.is_full());
    assert!(facility.park("T", VehicleClass::Oversized).is_err());
}

// ═══════════════════════════════════════════════════════════════════════
// Duplicates
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_park_twice_is_rejected() {
    let facility = Facility::new(1, 4).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    let before = facility.query();

    assert_eq!(
        facility.park("A", VehicleClass::Standard),
        Err(ParkingError::AlreadyParked {
            vehicle: "A".to_string()
        })
    );
    assert_eq!(facility.query(), before);
    assert_eq!(facility.parked_count(), 1);
}

#[test]
fn test_park_twice_with_different_class_is_rejected() {
    let facility = Facility::new(1, 4).unwrap();
    facility.park("A", VehicleClass::Compact).unwrap();

    assert!(matches!(
        facility.park("A", VehicleClass::Oversized),
        Err(ParkingError::AlreadyParked { .. })
    ));
    assert_eq!(facility.total_available(), 3);
    assert_eq!(facility.locate("A"), Some(Location::new(0, 0)));
}

#[test]
fn test_duplicate_check_precedes_full_check() {
    let facility = Facility::new(1, 1).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    assert!(matches!(
        facility.park("A", VehicleClass::Standard),
        Err(ParkingError::AlreadyParked { .. })
    ));
}

// ═══════════════════════════════════════════════════════════════════════
// Leaving
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_oversized_leave_frees_both_spots() {
    let facility = Facility::new(1, 2).unwrap();
    assert_eq!(
        facility.park("T1", VehicleClass::Oversized),
        Ok(Location::new(0, 0))
    );
    assert!(facility.is_full());

    assert_eq!(facility.leave("T1"), Ok(Location::new(0, 0)));
    assert_eq!(available(&facility), vec![2]);
    assert_eq!(facility.locate("T1"), None);
}

#[test]
fn test_leave_unknown_vehicle() {
    let facility = Facility::new(2, 2).unwrap();
    assert_eq!(
        facility.leave("ghost"),
        Err(ParkingError::NotFound {
            vehicle: "ghost".to_string()
        })
    );
    assert_eq!(available(&facility), vec![2, 2]);
    assert_eq!(facility.parked_count(), 0);
}

#[test]
fn test_leave_twice() {
    let facility = Facility::new(1, 2).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    assert!(facility.leave("A").is_ok());
    assert!(matches!(
        facility.leave("A"),
        Err(ParkingError::NotFound { .. })
    ));
}

#[test]
fn test_leave_only_touches_own_spots() {
    let facility = Facility::new(1, 4).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    facility.park("T", VehicleClass::Oversized).unwrap();
    facility.park("B", VehicleClass::Compact).unwrap();

    facility.leave("T").unwrap();

    assert_eq!(facility.locate("A"), Some(Location::new(0, 0)));
    assert_eq!(facility.locate("B"), Some(Location::new(0, 3)));
    facility.with_floors(|floors| {
        let held: Vec<Option<&str>> = floors[0]
            .spots()
            .iter()
            .map(|spot| spot.occupant().map(Vehicle::id))
            .collect();
        assert_eq!(held, vec![Some("A"), None, None, Some("B")]);
    });
}

#[test]
fn test_vehicle_can_return_after_leaving() {
    let facility = Facility::new(1, 2).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();
    facility.park("B", VehicleClass::Standard).unwrap();
    facility.leave("A").unwrap();
    facility.leave("B").unwrap();

    assert_eq!(
        facility.park("B", VehicleClass::Oversized),
        Ok(Location::new(0, 0))
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Queries
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_query_reports_every_floor_in_order() {
    let facility = Facility::new(3, 2).unwrap();
    facility.park("T", VehicleClass::Oversized).unwrap();
    facility.park("A", VehicleClass::Standard).unwrap();

    let status = facility.query();
    assert_eq!(
        status,
        vec![
            FloorStatus {
                floor: 0,
                available: 0,
                capacity: 2
            },
            FloorStatus {
                floor: 1,
                available: 1,
                capacity: 2
            },
            FloorStatus {
                floor: 2,
                available: 2,
                capacity: 2
            },
        ]
    );

    let lines: Vec<String> = status.iter().map(ToString::to_string).collect();
    assert_eq!(lines[1], "Floor 1: 1 available spots");
}

#[test]
fn test_parked_lists_arrival_order() {
    let facility = Facility::new(1, 5).unwrap();
    facility.park("C", VehicleClass::Standard).unwrap();
    facility.park("A", VehicleClass::Oversized).unwrap();
    facility.park("B", VehicleClass::Compact).unwrap();
    facility.leave("A").unwrap();

    assert_eq!(
        facility.parked(),
        vec![
            ("C".to_string(), Location::new(0, 0)),
            ("B".to_string(), Location::new(0, 3)),
        ]
    );
}

#[test]
fn test_is_full_across_floors() {
    let facility = Facility::new(2, 1).unwrap();
    facility.park("A", VehicleClass::Compact).unwrap();
    assert!(!facility.is_full());
    facility.park("B", VehicleClass::Compact).unwrap();
    assert!(facility.is_full());
    facility.leave("A").unwrap();
    assert!(!facility.is_full());
}

#[test]
fn test_class_parsing_drives_park() {
    let facility = Facility::new(1, 2).unwrap();
    let class: VehicleClass = "Truck".parse().unwrap();
    let location = facility.park("KA-01-1234", class).unwrap();
    assert_eq!(location.to_string(), "Floor 0, Spot 0");
    assert!(facility.is_full());
}
