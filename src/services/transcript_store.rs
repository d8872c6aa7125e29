use std::path::{Component, Path, PathBuf};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Transcript, TranscriptDocument},
};

/// Reads and writes transcript documents (`video_id`, `count`, `transcript`) as pretty JSON.
pub struct TranscriptStore {
    default_path: PathBuf,
}

impl TranscriptStore {
    pub fn new(default_path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: default_path.into(),
        }
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Resolves an optional caller-chosen file name next to the default transcript file.
    pub fn resolve(&self, outfile: Option<&str>) -> AppResult<PathBuf> {
        let Some(name) = outfile.map(str::trim).filter(|name| !name.is_empty()) else {
            return Ok(self.default_path.clone());
        };

        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(AppError::ValidationError(format!(
                    "outfile {:?} must be a plain file name",
                    name
                )))
            }
        }

        let directory = self
            .default_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(directory.join(name))
    }

    pub async fn save(&self, transcript: &Transcript, outfile: Option<&str>) -> AppResult<PathBuf> {
        let path = self.resolve(outfile)?;
        let body = serde_json::to_string_pretty(transcript)?;
        tokio::fs::write(&path, body).await?;

        log::info!(
            "Wrote {} with {} transcript lines",
            path.display(),
            transcript.count()
        );
        Ok(path)
    }

    pub async fn load(&self) -> AppResult<Transcript> {
        let body = match tokio::fs::read_to_string(&self.default_path).await {
            Ok(body) => body,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::NotFound(format!(
                    "{} not found",
                    self.default_path.display()
                )))
            }
            Err(err) => return Err(err.into()),
        };

        let document: TranscriptDocument = serde_json::from_str(&body).map_err(|e| {
            AppError::ValidationError(format!(
                "{} is not a transcript document: {}",
                self.default_path.display(),
                e
            ))
        })?;

        Ok(document.into_transcript()?)
    }
}
