use std::str::FromStr;

use lp_server_app::domain::{
    RepoError, RepoUpdateError,
    match_log::{MatchLogEntry, MatchLogId, MatchLogRepository, MatchResult, NewMatchLogEntry},
    standing::PlayerStanding,
};
use sqlx::{Executor, Row, Sqlite, sqlite::SqliteRow};

use crate::{SqliteLadderRepository, parse_division, parse_rank};

async fn insert_log<'e, E>(executor: E, entry: &NewMatchLogEntry) -> Result<MatchLogId, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO logs (player_name, result, lp_change, total_lp, rank, division)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&entry.player_name)
    .bind(entry.result.as_str())
    .bind(entry.lp_change as i64)
    .bind(entry.total_lp)
    .bind(entry.rank.as_str())
    .bind(entry.division.as_str())
    .execute(executor)
    .await?;
    Ok(MatchLogId(result.last_insert_rowid()))
}

impl SqliteLadderRepository {
    fn log_from_row(row: &SqliteRow) -> Result<MatchLogEntry, String> {
        let result: String = row.try_get("result").map_err(|e| e.to_string())?;
        let lp_change: i64 = row.try_get("lp_change").map_err(|e| e.to_string())?;
        let rank: String = row.try_get("rank").map_err(|e| e.to_string())?;
        let division: String = row.try_get("division").map_err(|e| e.to_string())?;
        Ok(MatchLogEntry {
            id: MatchLogId(row.try_get("id").map_err(|e| e.to_string())?),
            player_name: row.try_get("player_name").map_err(|e| e.to_string())?,
            result: MatchResult::from_str(&result).map_err(|e| e.to_string())?,
            lp_change: u32::try_from(lp_change)
                .map_err(|_| format!("lp_change {} out of range", lp_change))?,
            total_lp: row.try_get("total_lp").map_err(|e| e.to_string())?,
            rank: parse_rank(&rank)?,
            division: parse_division(&division)?,
        })
    }
}

#[async_trait::async_trait]
impl MatchLogRepository for SqliteLadderRepository {
    async fn append_log(&self, entry: NewMatchLogEntry) -> Result<MatchLogId, RepoError> {
        insert_log(&self.pool, &entry)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))
    }

    async fn list_logs(&self) -> Result<Vec<MatchLogEntry>, RepoError> {
        let rows = sqlx::query("SELECT * FROM logs ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::StorageError(e.to_string()))?;
        rows.iter()
            .map(|row| Self::log_from_row(row).map_err(RepoError::StorageError))
            .collect()
    }

    async fn record_match(
        &self,
        player_name: &str,
        apply: impl FnOnce(PlayerStanding) -> NewMatchLogEntry + Send + 'static,
    ) -> Result<MatchLogEntry, RepoUpdateError> {
        // write lock is held from the first read on
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;

        let row = sqlx::query("SELECT * FROM players WHERE player_name = ?")
            .bind(player_name)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;
        let Some(row) = row else {
            return Err(RepoUpdateError::NotFound);
        };
        let standing = Self::standing_from_row(&row).map_err(RepoUpdateError::StorageError)?;

        let entry = apply(standing);
        let after = entry.standing_after();

        sqlx::query(
            "UPDATE players SET rank = ?, division = ?, current_lp = ? WHERE player_name = ?",
        )
        .bind(after.rank.as_str())
        .bind(after.division.as_str())
        .bind(after.current_lp)
        .bind(player_name)
        .execute(&mut *tx)
        .await
        .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;

        let id = insert_log(&mut *tx, &entry)
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| RepoUpdateError::StorageError(e.to_string()))?;

        Ok(entry.with_id(id))
    }
}
