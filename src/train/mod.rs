//! Train model
//!
//! Cars, the train that holds them, and passenger range queries.

mod car;
mod consist;
mod query;
mod types;

pub use car::TrainCar;
pub use consist::Train;
pub use query::{prompt_range, PassengerRange, TokenReader};
pub use types::CarKind;
