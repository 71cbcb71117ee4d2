//! Local notification sinks
//!
//! Sinks that print the notification or hand it to another program through
//! files. The SMTP sink lives in [`super::smtp`].

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use super::composer::Notification;
use crate::error::{AlertError, AlertResult};

/// Something that can deliver a notification
pub trait NotificationSink {
    fn deliver(&self, notification: &Notification) -> AlertResult<()>;
}

/// Prints the notification to stdout (dry run)
#[derive(Debug, Default)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn deliver(&self, notification: &Notification) -> AlertResult<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", notification)
            .and_then(|_| out.flush())
            .map_err(|e| AlertError::Notification(format!("Failed to write to stdout: {}", e)))
    }
}

/// Writes `subject.txt` and `message.txt` into a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub const SUBJECT_FILE: &'static str = "subject.txt";
    pub const MESSAGE_FILE: &'static str = "message.txt";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl NotificationSink for FileSink {
    fn deliver(&self, notification: &Notification) -> AlertResult<()> {
        let write = |name: &str, contents: &str| {
            let path = self.dir.join(name);
            std::fs::write(&path, contents).map_err(|e| {
                AlertError::Notification(format!("Failed to write {}: {}", path.display(), e))
            })
        };

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            AlertError::Notification(format!(
                "Failed to create output directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;
        write(Self::SUBJECT_FILE, &notification.subject)?;
        if let Err(err) = write(Self::MESSAGE_FILE, &notification.body) {
            // Never leave a new subject next to a stale message
            let _ = std::fs::remove_file(self.dir.join(Self::SUBJECT_FILE));
            return Err(err);
        }

        info!(dir = %self.dir.display(), "Wrote notification files");
        Ok(())
    }
}
