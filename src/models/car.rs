use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::constants::{DEFAULT_CAR_CATEGORY, DEFAULT_CAR_STATUS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum Transmission {
    Auto,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub image_url: String,
    pub price_per_day: f64,
    pub transmission: Transmission,
    pub status: String,
}

// Accepts `150.5` as well as `"150.50"`, as admin forms post strings.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| D::Error::custom(format!("Invalid price: {}", s))),
    }
}

fn default_category() -> String {
    DEFAULT_CAR_CATEGORY.to_string()
}

fn default_status() -> String {
    DEFAULT_CAR_STATUS.to_string()
}

/// Body of `POST /api/admin/cars`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewCar {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(deserialize_with = "deserialize_price")]
    #[validate(range(min = 0.0, message = "price_per_day must not be negative"))]
    pub price_per_day: f64,
    pub transmission: Transmission,
    #[serde(default = "default_status")]
    pub status: String,
}

/// Body of `PUT /api/admin/cars/:id`. Every column is overwritten; unlike
/// [`NewCar`], `status` must be given.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(deserialize_with = "deserialize_price")]
    #[validate(range(min = 0.0, message = "price_per_day must not be negative"))]
    pub price_per_day: f64,
    pub transmission: Transmission,
    pub status: String,
}
