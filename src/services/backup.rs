use crate::domain::Backup;
use crate::error::{Result, SwitchError};
use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

/// Snapshots tracked files under `backup_dir/<timestamp>/` before a switch
/// mutates them. Backups are additive and never pruned automatically.
pub struct BackupService {
    backup_dir: PathBuf,
    tracked: Vec<PathBuf>,
}

impl BackupService {
    pub fn new(backup_dir: impl Into<PathBuf>, tracked: Vec<PathBuf>) -> Self {
        Self {
            backup_dir: backup_dir.into(),
            tracked,
        }
    }

    /// Copies every tracked file that currently exists into a fresh
    /// timestamped directory. A same-second collision with an existing
    /// backup is reported, not retried.
    pub async fn create(&self) -> Result<Backup> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let backup_path = self.backup_dir.join(&timestamp);

        if backup_path.exists() {
            return Err(SwitchError::Other(format!(
                "backup already exists: {timestamp}"
            )));
        }
        tokio::fs::create_dir_all(&backup_path).await?;

        let mut files = Vec::new();
        for file in &self.tracked {
            if !file.exists() {
                continue;
            }
            let name = file
                .file_name()
                .ok_or_else(|| SwitchError::Other(format!("not a file: {}", file.display())))?;
            tokio::fs::copy(file, backup_path.join(name)).await?;
            files.push(file.clone());
        }

        info!("Backup created: {}", backup_path.display());
        Ok(Backup { timestamp, files })
    }

    /// Backup timestamps, most recent first.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut timestamps = Vec::new();
        for entry in std::fs::read_dir(&self.backup_dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                timestamps.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        timestamps.sort();
        timestamps.reverse();
        Ok(timestamps)
    }

    /// Overwrites tracked files with the copies stored under `timestamp`.
    /// Files absent from the backup are left untouched.
    pub async fn restore(&self, timestamp: &str) -> Result<()> {
        let backup_path = self.backup_dir.join(timestamp);
        if !backup_path.exists() {
            return Err(SwitchError::NotFound(format!(
                "backup does not exist: {timestamp}"
            )));
        }

        info!("Restoring backup: {timestamp}");
        for file in &self.tracked {
            let Some(name) = file.file_name() else {
                continue;
            };
            let source = backup_path.join(name);
            if !source.exists() {
                continue;
            }
            if let Some(parent) = file.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::copy(&source, file).await?;
            info!("Restored {}", file.display());
        }

        Ok(())
    }
}
