//! Domain model types

pub mod aircraft;
pub mod airline_data;
pub mod passenger;
pub mod route;

pub use aircraft::Aircraft;
pub use airline_data::AirlineData;
pub use passenger::{Fare, Passenger, PassengerCategory};
pub use route::Route;
