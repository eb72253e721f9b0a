//! Append-only per-user transcript files: `{dir}/user_{user_id}.log`, one line per entry.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::DialogLogError;

/// Timestamp layout at the start of every line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => f.write_str("USER"),
            Speaker::Bot => f.write_str("BOT"),
        }
    }
}

/// Renders one transcript line including the trailing newline.
/// Backslashes are doubled and line breaks written as `\n`, so an entry never spans lines
/// and a typed `\n` stays distinguishable from a real break.
pub fn format_line(timestamp: &DateTime<Local>, speaker: Speaker, text: &str) -> String {
    let flat = text
        .replace('\\', "\\\\")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n");
    format!("{} {}: {}\n", timestamp.format(TIMESTAMP_FORMAT), speaker, flat)
}

/// Writes dialog transcripts. Appends for one user are serialized; different users never contend.
/// A user's lock is kept only while some append for that user is in flight.
#[derive(Debug)]
pub struct DialogLogger {
    dir: PathBuf,
    user_locks: Mutex<HashMap<i64, Arc<Mutex<()>>>>,
}

impl DialogLogger {
    /// Creates the log directory (if missing) and returns a logger writing into it. Call once at startup.
    pub fn init(dir: impl Into<PathBuf>) -> Result<Self, DialogLogError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| DialogLogError::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;
        info!(dir = %dir.display(), "Dialog log directory ready");
        Ok(Self {
            dir,
            user_locks: Mutex::new(HashMap::new()),
        })
    }

    /// Transcript file for `user_id`.
    pub fn path_for(&self, user_id: i64) -> PathBuf {
        self.dir.join(format!("user_{}.log", user_id))
    }

    /// Appends one entry stamped with the current local time.
    pub async fn log(&self, user_id: i64, speaker: Speaker, text: &str) -> Result<(), DialogLogError> {
        self.log_at(user_id, speaker, text, &Local::now()).await
    }

    pub async fn log_user(&self, user_id: i64, text: &str) -> Result<(), DialogLogError> {
        self.log(user_id, Speaker::User, text).await
    }

    pub async fn log_bot(&self, user_id: i64, text: &str) -> Result<(), DialogLogError> {
        self.log(user_id, Speaker::Bot, text).await
    }

    /// Appends one entry with an explicit timestamp.
    pub async fn log_at(
        &self,
        user_id: i64,
        speaker: Speaker,
        text: &str,
        timestamp: &DateTime<Local>,
    ) -> Result<(), DialogLogError> {
        let line = format_line(timestamp, speaker, text);
        let path = self.path_for(user_id);

        let lock = self.user_lock(user_id).await;
        let result = {
            let _guard = lock.lock().await;
            Self::append(&path, &line).await
        };
        drop(lock);
        self.release_user_lock(user_id).await;

        result?;
        debug!(user_id, speaker = %speaker, path = %path.display(), "Dialog line appended");
        Ok(())
    }

    async fn append(path: &Path, line: &str) -> Result<(), DialogLogError> {
        let append_err = |source| DialogLogError::Append {
            path: path.display().to_string(),
            source,
        };
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(append_err)?;
        file.write_all(line.as_bytes()).await.map_err(append_err)?;
        file.flush().await.map_err(append_err)
    }

    async fn user_lock(&self, user_id: i64) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks.entry(user_id).or_default().clone()
    }

    /// Drops the user's lock once no other append holds or waits on it.
    async fn release_user_lock(&self, user_id: i64) {
        let mut locks = self.user_locks.lock().await;
        if locks
            .get(&user_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&user_id);
        }
    }
}
