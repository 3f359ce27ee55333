//! Upload flow: local validation, simulated transfer progress and the
//! processing wait, all guarded by an epoch so late timer callbacks from an
//! abandoned attempt cannot touch a newer one.

use crate::explain::ErrorExplanation;

/// Maximum accepted file size, enforced locally before any network request.
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Displayed progress never exceeds this until the server confirms receipt.
pub const PROGRESS_CEILING: u8 = 90;

/// File the user picked for upload. `media_type` is derived from the file
/// extension by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub media_type: String,
}

/// Phase of the active upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading { progress: u8 },
    Processing,
    Completed,
    Failed(ErrorExplanation),
}

/// State of the upload form plus the attempt lifecycle.
///
/// Every transition that starts or ends an attempt bumps `epoch`; timer
/// callbacks carry the epoch they were scheduled under and are ignored when
/// it no longer matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFlow {
    title: String,
    file: Option<SelectedFile>,
    is_public: bool,
    phase: UploadPhase,
    epoch: u64,
}

impl Default for UploadFlow {
    fn default() -> Self {
        Self {
            title: String::new(),
            file: None,
            is_public: true,
            phase: UploadPhase::Idle,
            epoch: 0,
        }
    }
}

impl UploadFlow {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn phase(&self) -> &UploadPhase {
        &self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn toggle_visibility(&mut self) {
        self.is_public = !self.is_public;
    }

    /// Attach a file to the form. Only allowed while no attempt is running.
    pub fn select_file(&mut self, file: SelectedFile) {
        if matches!(self.phase, UploadPhase::Idle | UploadPhase::Failed(_)) {
            self.file = Some(file);
            self.phase = UploadPhase::Idle;
        }
    }

    /// Validate the form locally and start an attempt.
    ///
    /// Returns the new attempt's epoch on success, or the reason the form is
    /// not submittable. Local rejections never produce a network request.
    pub fn submit(&mut self) -> Result<u64, String> {
        if !matches!(self.phase, UploadPhase::Idle | UploadPhase::Failed(_)) {
            return Err("Ya hay una subida en curso".to_string());
        }
        if self.title.trim().is_empty() {
            return Err("El título es obligatorio".to_string());
        }
        let file = match &self.file {
            Some(file) => file,
            None => return Err("Selecciona un archivo de video".to_string()),
        };
        if !file.media_type.starts_with("video/") {
            return Err("El archivo debe ser un video".to_string());
        }
        if file.size > MAX_UPLOAD_BYTES {
            return Err("El archivo supera el tamaño máximo de 100MB".to_string());
        }

        self.epoch += 1;
        self.phase = UploadPhase::Uploading { progress: 0 };
        Ok(self.epoch)
    }

    /// Advance the simulated transfer progress. Monotonic and capped at
    /// [`PROGRESS_CEILING`]; stale epochs are ignored.
    pub fn tick_progress(&mut self, epoch: u64, increment: u8) {
        if epoch != self.epoch {
            return;
        }
        if let UploadPhase::Uploading { progress } = &mut self.phase {
            *progress = (*progress).saturating_add(increment).min(PROGRESS_CEILING);
        }
    }

    /// The server accepted the file. Progress jumps to 100 and the flow
    /// enters the processing wait.
    pub fn transfer_complete(&mut self, epoch: u64) {
        if epoch != self.epoch {
            return;
        }
        if matches!(self.phase, UploadPhase::Uploading { .. }) {
            self.phase = UploadPhase::Processing;
        }
    }

    /// The post-upload status check fired. Only flips to completed when the
    /// attempt is still the current one and still waiting on processing.
    pub fn processing_elapsed(&mut self, epoch: u64) {
        if epoch != self.epoch {
            return;
        }
        if matches!(self.phase, UploadPhase::Processing) {
            self.phase = UploadPhase::Completed;
        }
    }

    /// The attempt failed. Bumps the epoch so in-flight timers die, keeps the
    /// form contents so the user can retry.
    pub fn fail(&mut self, explanation: ErrorExplanation) {
        self.epoch += 1;
        self.phase = UploadPhase::Failed(explanation);
    }

    /// Retry with the same file and title after a failure.
    pub fn retry(&mut self) -> Result<u64, String> {
        if matches!(self.phase, UploadPhase::Failed(_)) {
            self.phase = UploadPhase::Idle;
        }
        self.submit()
    }

    /// Discard the rejected file and start over with an empty form.
    pub fn select_new_file(&mut self) {
        self.epoch += 1;
        self.title.clear();
        self.file = None;
        self.phase = UploadPhase::Idle;
    }

    /// Reset everything, invalidating any scheduled timers. Used when the
    /// user navigates away from the upload screen.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.title.clear();
        self.file = None;
        self.is_public = true;
        self.phase = UploadPhase::Idle;
    }

    /// Displayed progress percentage, 100 once the transfer is confirmed.
    pub fn progress_percent(&self) -> u8 {
        match &self.phase {
            UploadPhase::Uploading { progress } => *progress,
            UploadPhase::Processing | UploadPhase::Completed => 100,
            _ => 0,
        }
    }
}
