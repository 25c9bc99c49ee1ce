pub mod city;
pub mod state;
pub mod temperature;

pub use city::{City, CityAverage, CityInput, CityListing, ClimateAverage};
pub use state::{State, StateInput, StateUpdate};
pub use temperature::{Temperature, TemperatureInput};
