use std::{str::FromStr, time::Duration};

use lp_core::{Division, Rank};
use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub mod logs;
pub mod players;

const CREATE_PLAYERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS players (
    player_name TEXT PRIMARY KEY,
    rank TEXT NOT NULL,
    division TEXT NOT NULL,
    current_lp INTEGER NOT NULL
)";

const CREATE_LOGS_TABLE: &str = "CREATE TABLE IF NOT EXISTS logs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    player_name TEXT NOT NULL,
    result TEXT NOT NULL,
    lp_change INTEGER NOT NULL,
    total_lp INTEGER NOT NULL,
    rank TEXT NOT NULL,
    division TEXT NOT NULL,
    FOREIGN KEY (player_name) REFERENCES players (player_name)
)";

/// Backs both the standing and the match log repository with one pool.
#[derive(Clone)]
pub struct SqliteLadderRepository {
    pool: Pool<Sqlite>,
}

impl SqliteLadderRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

pub async fn create_db_pool(db_path: &str) -> Result<Pool<Sqlite>, sqlx::Error> {
    let conn_options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(conn_options)
        .await
}

/// Opens the database named by `LP_TRACKER_DB`.
pub async fn create_db_pool_from_env() -> Result<Pool<Sqlite>, sqlx::Error> {
    let db_path = std::env::var("LP_TRACKER_DB")
        .map_err(|_| sqlx::Error::Configuration("LP_TRACKER_DB env var not set".into()))?;
    create_db_pool(&db_path).await
}

pub async fn init_schema(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PLAYERS_TABLE).execute(pool).await?;
    sqlx::query(CREATE_LOGS_TABLE).execute(pool).await?;
    log::info!("Ladder schema ready");
    Ok(())
}

fn parse_rank(value: &str) -> Result<Rank, String> {
    Rank::from_str(value).map_err(|e| e.to_string())
}

fn parse_division(value: &str) -> Result<Division, String> {
    Division::from_str(value).map_err(|e| e.to_string())
}

#[cfg(test)]
pub(crate) async fn create_test_pool() -> Pool<Sqlite> {
    let conn_options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(conn_options)
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
