//! A single car of the train
//!
//! Every kind shares the same fields. Only the printed label differs.

use std::fmt;

use super::query::PassengerRange;
use super::types::CarKind;

/// A car in the train
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainCar {
    kind: CarKind,
    passengers: u32,
    luggage: u32,
    comfort_level: u32,
}

impl TrainCar {
    pub fn new(kind: CarKind, passengers: u32, luggage: u32, comfort_level: u32) -> Self {
        Self {
            kind,
            passengers,
            luggage,
            comfort_level,
        }
    }

    pub fn passenger(passengers: u32, luggage: u32, comfort_level: u32) -> Self {
        Self::new(CarKind::Passenger, passengers, luggage, comfort_level)
    }

    pub fn baggage(passengers: u32, luggage: u32, comfort_level: u32) -> Self {
        Self::new(CarKind::Baggage, passengers, luggage, comfort_level)
    }

    pub fn luxury(passengers: u32, luggage: u32, comfort_level: u32) -> Self {
        Self::new(CarKind::Luxury, passengers, luggage, comfort_level)
    }

    pub fn kind(&self) -> CarKind {
        self.kind
    }

    pub fn passengers(&self) -> u32 {
        self.passengers
    }

    pub fn luggage(&self) -> u32 {
        self.luggage
    }

    pub fn comfort_level(&self) -> u32 {
        self.comfort_level
    }

    /// One-line description of the car
    pub fn details(&self) -> String {
        self.to_string()
    }

    /// Print the car description to stdout
    pub fn print_details(&self) {
        println!("{}", self);
    }

    /// Whether the passenger count lies inside `range` (both ends inclusive)
    pub fn contains_passengers(&self, range: &PassengerRange) -> bool {
        range.contains(self.passengers)
    }
}

impl fmt::Display for TrainCar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} passengers, {} luggage units, comfort: {}",
            self.kind.label(),
            self.passengers,
            self.luggage,
            self.comfort_level
        )
    }
}
