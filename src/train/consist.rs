//! The train itself: an ordered list of cars with aggregate queries

use log::{debug, info, warn};
use std::cmp::Reverse;

use super::car::TrainCar;
use super::query::PassengerRange;

/// An ordered collection of cars
#[derive(Debug, Clone, Default)]
pub struct Train {
    cars: Vec<TrainCar>,
}

impl Train {
    pub fn new() -> Self {
        Self { cars: Vec::new() }
    }

    /// The consist the program starts with
    pub fn create_default_train() -> Self {
        let mut train = Self::new();
        train.add_car(TrainCar::passenger(100, 50, 3));
        train.add_car(TrainCar::baggage(0, 200, 1));
        train.add_car(TrainCar::luxury(20, 10, 5));
        train
    }

    /// Append a car to the end of the train
    pub fn add_car(&mut self, car: TrainCar) {
        debug!("Adding car #{}: {}", self.cars.len() + 1, car);
        self.cars.push(car);
    }

    pub fn cars(&self) -> &[TrainCar] {
        &self.cars
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn total_passengers(&self) -> u64 {
        self.cars.iter().map(|car| u64::from(car.passengers())).sum()
    }

    pub fn total_luggage(&self) -> u64 {
        self.cars.iter().map(|car| u64::from(car.luggage())).sum()
    }

    /// Sort by comfort level, highest first
    ///
    /// Cars with equal comfort keep their relative order.
    pub fn sort_cars_by_comfort(&mut self) {
        self.cars
            .sort_by_key(|car| Reverse(car.comfort_level()));
        info!("Sorted {} cars by comfort", self.cars.len());
    }

    /// Cars whose passenger count lies in `range`, in train order
    pub fn cars_in_passenger_range(&self, range: &PassengerRange) -> Vec<&TrainCar> {
        if range.is_empty() {
            warn!(
                "Passenger range is empty (min {} > max {})",
                range.min, range.max
            );
            return Vec::new();
        }

        self.cars
            .iter()
            .filter(|car| car.contains_passengers(range))
            .collect()
    }

    /// Print every car whose passenger count lies in `range`
    pub fn find_cars_by_passenger_range(&self, range: &PassengerRange) {
        let matches = self.cars_in_passenger_range(range);
        debug!("{} of {} cars in range", matches.len(), self.cars.len());
        for car in matches {
            car.print_details();
        }
    }

    pub fn print_all_cars(&self) {
        for car in &self.cars {
            car.print_details();
        }
    }
}
