//! Core types for the train model

use std::fmt;

/// Kind of car in a train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarKind {
    /// Regular seating car
    Passenger,
    /// Car that mostly carries luggage
    Baggage,
    /// Premium seating car
    Luxury,
}

impl CarKind {
    /// Human readable label used when printing car details
    pub fn label(&self) -> &'static str {
        match self {
            CarKind::Passenger => "Passenger car",
            CarKind::Baggage => "Baggage car",
            CarKind::Luxury => "Luxury car",
        }
    }
}

impl fmt::Display for CarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
