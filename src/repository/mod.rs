pub mod booking_repo;
pub mod car_repo;
pub mod schema_repo;

pub use booking_repo::BookingRepository;
pub use car_repo::CarRepository;
pub use schema_repo::SchemaRepository;
