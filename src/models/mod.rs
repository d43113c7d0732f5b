pub mod auth;
pub mod booking;
pub mod car;

pub use auth::{LoginRequest, LoginResponse};
pub use booking::{Booking, NewBooking};
pub use car::{Car, CarUpdate, NewCar, Transmission};
