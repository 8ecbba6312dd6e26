//! Train Cars Library
//!
//! Models a train made of passenger, baggage and luxury cars.

pub mod train;
