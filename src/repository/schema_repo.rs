use sqlx::migrate::Migrator;
use sqlx::SqlitePool;

use crate::constants::API_NAME;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const CREATE_TABLES: &str = include_str!("../../migrations/20240601000000_create_cars_and_bookings.sql");
const SEED_CARS: &str = include_str!("../../migrations/20240601000001_seed_cars.sql");
const DROP_TABLES: &str = "DROP TABLE IF EXISTS bookings; DROP TABLE IF EXISTS cars;";

/// Owns the `cars` and `bookings` schema.
#[derive(Clone)]
pub struct SchemaRepository {
    pool: SqlitePool,
}

impl SchemaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the tables and seeds the catalog on a fresh database.
    pub async fn bootstrap(&self) -> Result<(), sqlx::migrate::MigrateError> {
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("{} Schema is up to date", API_NAME);
        Ok(())
    }

    /// Round trip through the pool.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Drops both tables, recreates them and reloads the seed catalog.
    ///
    /// The statements run one after another without a transaction; a failure
    /// part way through leaves whatever has already been dropped or created.
    pub async fn reset(&self) -> Result<(), sqlx::Error> {
        tracing::warn!("{} Dropping and recreating cars and bookings", API_NAME);
        sqlx::raw_sql(DROP_TABLES).execute(&self.pool).await?;
        sqlx::raw_sql(CREATE_TABLES).execute(&self.pool).await?;
        sqlx::raw_sql(SEED_CARS).execute(&self.pool).await?;
        Ok(())
    }
}
