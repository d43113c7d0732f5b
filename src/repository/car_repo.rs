use sqlx::SqlitePool;

use crate::models::{Car, CarUpdate, NewCar};

#[derive(Clone)]
pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_by_price(&self) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT id, name, category, image_url, price_per_day, transmission, status FROM cars ORDER BY price_per_day ASC"
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(
            "SELECT id, name, category, image_url, price_per_day, transmission, status FROM cars WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Returns the id assigned to the new row.
    pub async fn create(&self, car: &NewCar) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO cars (name, category, image_url, price_per_day, transmission, status) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&car.name)
        .bind(&car.category)
        .bind(&car.image_url)
        .bind(car.price_per_day)
        .bind(car.transmission)
        .bind(&car.status)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrites every column of the row. Returns the number of rows
    /// touched, which is zero for an unknown id.
    pub async fn update(&self, id: i64, car: &CarUpdate) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars SET name = ?, category = ?, image_url = ?, price_per_day = ?, transmission = ?, status = ? WHERE id = ?"
        )
        .bind(&car.name)
        .bind(&car.category)
        .bind(&car.image_url)
        .bind(car.price_per_day)
        .bind(car.transmission)
        .bind(&car.status)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Bookings referencing the car are left in place.
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
