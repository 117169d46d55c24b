mod city;
mod country;
mod state;

pub use city::{City, CityInput};
pub use country::{Country, CountryInput};
pub use state::{State, StateInput};
