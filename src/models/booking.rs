use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i64,
    pub car_id: i64,
    pub car_name: String,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub total_days: i64,
    pub total_price: f64,
    pub status: String,
    #[serde(with = "sqlite_timestamp")]
    pub created_at: NaiveDateTime,
}

/// `CURRENT_TIMESTAMP` text form, e.g. `2024-07-01 12:00:00`.
mod sqlite_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%F %T";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid timestamp {}: {}", s, e)))
    }
}

/// Body of `POST /api/bookings`.
///
/// Stored as submitted: the car is not looked up, dates are free text and the
/// total is not recomputed from the daily rate.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewBooking {
    pub car_id: i64,
    pub car_name: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub total_days: i64,
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn booking_accepts_free_form_dates() {
        let booking: NewBooking = serde_json::from_value(json!({
            "car_id": 999,
            "car_name": "Ghost",
            "start_date": "next tuesday",
            "end_date": "2020-01-01",
            "total_days": 3,
            "total_price": 1.0
        }))
        .unwrap();

        assert_eq!(booking.car_id, 999);
        assert_eq!(booking.start_date, "next tuesday");
        assert!(booking.customer_name.is_none());
    }

    #[test]
    fn created_at_uses_sqlite_timestamp_format() {
        let booking = Booking {
            id: 1,
            car_id: 2,
            car_name: "Toyota Corolla".to_string(),
            customer_name: None,
            customer_phone: None,
            start_date: "2024-07-01".to_string(),
            end_date: "2024-07-04".to_string(),
            total_days: 3,
            total_price: 135.0,
            status: "Pending".to_string(),
            created_at: NaiveDateTime::parse_from_str("2024-07-01 12:00:00", "%F %T").unwrap(),
        };

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["created_at"], "2024-07-01 12:00:00");

        let back: Booking = serde_json::from_value(value).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn booking_requires_car_id() {
        let result = serde_json::from_value::<NewBooking>(json!({
            "car_name": "Ghost",
            "start_date": "2024-01-01",
            "end_date": "2024-01-02",
            "total_days": 1,
            "total_price": 50.0
        }));
        assert!(result.is_err());
    }
}
