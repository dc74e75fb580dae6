use lp_server_app::domain::{
    RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError,
    standing::{PlayerStanding, StandingRepository},
};
use sqlx::{Row, sqlite::SqliteRow};

use crate::{SqliteLadderRepository, parse_division, parse_rank};

impl SqliteLadderRepository {
    pub(crate) fn standing_from_row(row: &SqliteRow) -> Result<PlayerStanding, String> {
        let rank: String = row.try_get("rank").map_err(|e| e.to_string())?;
        let division: String = row.try_get("division").map_err(|e| e.to_string())?;
        Ok(PlayerStanding {
            player_name: row.try_get("player_name").map_err(|e| e.to_string())?,
            rank: parse_rank(&rank)?,
            division: parse_division(&division)?,
            current_lp: row.try_get("current_lp").map_err(|e| e.to_string())?,
        })
    }
}

#[async_trait::async_trait]
impl StandingRepository for SqliteLadderRepository {
    async fn create_standing(&self, standing: PlayerStanding) -> Result<(), RepoCreateError> {
        let result = sqlx::query(
            "INSERT INTO players (player_name, rank, division, current_lp) VALUES (?, ?, ?, ?)
             ON CONFLICT (player_name) DO NOTHING",
        )
        .bind(&standing.player_name)
        .bind(standing.rank.as_str())
        .bind(standing.division.as_str())
        .bind(standing.current_lp)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoCreateError::StorageError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoCreateError::Conflict);
        }
        Ok(())
    }

    async fn get_standing(&self, player_name: &str) -> Result<PlayerStanding, RepoRetrieveError> {
        let row = sqlx::query("SELECT * FROM players WHERE player_name = ?")
            .bind(player_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoRetrieveError::StorageError(e.to_string()))?;
        match row {
            Some(row) => Self::standing_from_row(&row).map_err(RepoRetrieveError::StorageError),
            None => Err(RepoRetrieveError::NotFound),
        }
    }

    async fn update_standing(&self, standing: &PlayerStanding) -> Result<(), RepoUpdateError> {
        let result = sqlx::query(
            "UPDATE players SET rank = ?, division = ?, current_lp = ? WHERE player_name = ?",
        )
        .bind(standing.rank.as_str())
        .bind(standing.division.as_str())
        .bind(standing.current_lp)
        .bind(&standing.player_name)
        .execute(&self.pool)
        .await
        .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepoUpdateError::NotFound);
        }
        Ok(())
    }

    async fn list_player_names(&self) -> Result<Vec<String>, RepoError> {
        sqlx::query_scalar::<_, String>("SELECT player_name FROM players ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))
    }

    async fn list_standings(&self) -> Result<Vec<PlayerStanding>, RepoError> {
        let rows = sqlx::query("SELECT * FROM players ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        rows.iter()
            .map(|row| Self::standing_from_row(row).map_err(RepoError::StorageError))
            .collect()
    }
}
