//! File-based Roster Repository
//!
//! Stores each roster as `<roster_id>.yaml` under a base directory. Writes
//! go to a temporary file first and are renamed into place, so a crash
//! never leaves a half-written roster behind.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, RosterId};
use crate::domain::roster::Roster;
use crate::ports::RosterRepository;

#[derive(Debug, Clone)]
pub struct FileRosterRepository {
    base_path: PathBuf,
}

impl FileRosterRepository {
    /// Create a repository rooted at `base_path`.
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileRosterRepository::new("./data/rosters");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn roster_path(&self, id: &RosterId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", id))
    }

    async fn write(&self, roster: &Roster) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path).await.map_err(io_error)?;

        let yaml = serde_yaml::to_string(roster).map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to serialize roster {}: {}", roster.id(), e),
            )
        })?;

        let path = self.roster_path(roster.id());
        let tmp = path.with_extension("yaml.tmp");
        fs::write(&tmp, yaml).await.map_err(io_error)?;
        fs::rename(&tmp, &path).await.map_err(io_error)?;
        Ok(())
    }

    async fn read(path: &Path) -> Result<Roster, DomainError> {
        let yaml = fs::read_to_string(path).await.map_err(io_error)?;
        serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::new(
                ErrorCode::StorageError,
                format!("Failed to parse {}: {}", path.display(), e),
            )
        })
    }

    async fn exists(&self, id: &RosterId) -> Result<bool, DomainError> {
        fs::try_exists(self.roster_path(id)).await.map_err(io_error)
    }
}

fn io_error(e: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("I/O error: {}", e))
}

fn not_found(id: &RosterId) -> DomainError {
    DomainError::new(ErrorCode::RosterNotFound, format!("Roster not found: {}", id))
}

#[async_trait]
impl RosterRepository for FileRosterRepository {
    async fn save(&self, roster: &Roster) -> Result<(), DomainError> {
        self.write(roster).await
    }

    async fn update(&self, roster: &Roster) -> Result<(), DomainError> {
        if !self.exists(roster.id()).await? {
            return Err(not_found(roster.id()));
        }
        self.write(roster).await
    }

    async fn find_by_id(&self, id: &RosterId) -> Result<Option<Roster>, DomainError> {
        if !self.exists(id).await? {
            return Ok(None);
        }
        Self::read(&self.roster_path(id)).await.map(Some)
    }

    async fn find_open(&self) -> Result<Vec<Roster>, DomainError> {
        if !fs::try_exists(&self.base_path).await.map_err(io_error)? {
            return Ok(Vec::new());
        }

        let mut open = Vec::new();
        let mut entries = fs::read_dir(&self.base_path).await.map_err(io_error)?;
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            match Self::read(&path).await {
                Ok(roster) if roster.status().is_mutable() => open.push(roster),
                Ok(_) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable roster file"),
            }
        }
        open.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(open)
    }
}
