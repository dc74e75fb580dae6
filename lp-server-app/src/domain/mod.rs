use thiserror::Error;

pub mod leaderboard;
pub mod match_log;
pub mod memory;
pub mod progression;
pub mod standing;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[derive(Debug, Error)]
pub enum RepoRetrieveError {
    #[error("Resource not found")]
    NotFound,
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[derive(Debug, Error)]
pub enum RepoCreateError {
    #[error("Resource conflict")]
    Conflict,
    #[error("Storage error: {0}")]
    StorageError(String),
}

#[derive(Debug, Error)]
pub enum RepoUpdateError {
    #[error("Resource not found")]
    NotFound,
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Formats a signed LP amount the way the ladder views show it: `+N` for
/// gains, the bare number otherwise.
pub fn format_lp_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", delta)
    } else {
        delta.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_lp_delta() {
        assert_eq!(format_lp_delta(50), "+50");
        assert_eq!(format_lp_delta(0), "0");
        assert_eq!(format_lp_delta(-12), "-12");
    }
}
