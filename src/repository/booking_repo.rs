use sqlx::SqlitePool;

use crate::models::{Booking, NewBooking};

#[derive(Clone)]
pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Status and creation time come from the column defaults.
    pub async fn create(&self, booking: &NewBooking) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO bookings (car_id, car_name, customer_name, customer_phone, start_date, end_date, total_days, total_price)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(booking.car_id)
        .bind(&booking.car_name)
        .bind(&booking.customer_name)
        .bind(&booking.customer_phone)
        .bind(&booking.start_date)
        .bind(&booking.end_date)
        .bind(booking.total_days)
        .bind(booking.total_price)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Newest first. `created_at` has one-second resolution, so ties fall
    /// back to insertion order.
    pub async fn list_recent(&self) -> Result<Vec<Booking>, sqlx::Error> {
        sqlx::query_as::<_, Booking>(
            "SELECT id, car_id, car_name, customer_name, customer_phone, start_date, end_date, total_days, total_price, status, created_at
             FROM bookings ORDER BY created_at DESC, id DESC"
        )
        .fetch_all(&self.pool)
        .await
    }
}
