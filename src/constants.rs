/// Prefix carried by every log line this service emits.
pub const API_NAME: &str = "[car-rental-api]";

/// Shared admin secret used when `ADMIN_PASSWORD` is not configured.
/// A convenience for low-stakes deployments, not a secure default.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub const DEFAULT_CAR_CATEGORY: &str = "Economy";
pub const DEFAULT_CAR_STATUS: &str = "Available";

pub const CAR_NOT_FOUND: &str = "Car not found";
