//! Generation/refinement session state machine.
//!
//! A [`Session`] owns the single mutable current-image slot, the last-error
//! slot, and the in-flight phase. At most one external call is in flight at
//! a time: the phase is an explicit three-way enum, so "generating while
//! editing" is unrepresentable, and every transition checks its
//! preconditions before dispatching. Rejected attempts are silent no-ops;
//! nothing is queued.

use crate::error::StudioError;
use crate::export::{self, ExportBridge};
use crate::gemini::ImageModel;
use crate::image::ImagePayload;
use crate::prompt;
use tracing::{debug, warn};

const GENERATE_FALLBACK: &str = "Failed to generate image. Please try again.";
const EDIT_FALLBACK: &str = "Failed to edit image. Please try again.";

/// The session's in-flight state. `Idle` is both the initial state and the
/// state reached after every transition, success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    Editing,
}

/// One interactive session against a single image model.
///
/// State does not persist across sessions; the slots start empty and the
/// machine is reentrant indefinitely.
pub struct Session<M> {
    model: M,
    aspect_ratio: String,
    phase: Phase,
    subject: String,
    refinement: String,
    current_image: Option<ImagePayload>,
    error: Option<String>,
}

impl<M> Session<M> {
    pub fn new(model: M, aspect_ratio: impl Into<String>) -> Self {
        Self {
            model,
            aspect_ratio: aspect_ratio.into(),
            phase: Phase::Idle,
            subject: String::new(),
            refinement: String::new(),
            current_image: None,
            error: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn refinement(&self) -> &str {
        &self.refinement
    }

    pub fn set_refinement(&mut self, text: impl Into<String>) {
        self.refinement = text.into();
    }

    pub fn current_image(&self) -> Option<&ImagePayload> {
        self.current_image.as_ref()
    }

    /// Transport string of the current image, for the rendering surface.
    pub fn current_image_url(&self) -> Option<String> {
        self.current_image.as_ref().map(ImagePayload::to_data_url)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_generate(&self) -> bool {
        !self.subject.trim().is_empty() && self.phase == Phase::Idle
    }

    pub fn can_edit(&self) -> bool {
        !self.refinement.trim().is_empty()
            && self.current_image.is_some()
            && self.phase == Phase::Idle
    }

    pub fn can_download(&self) -> bool {
        self.current_image.is_some()
    }

    /// Suggested file name for saving the current image.
    pub fn download_file_name(&self) -> String {
        let extension = self
            .current_image
            .as_ref()
            .map(ImagePayload::extension)
            .unwrap_or("png");
        export::derive_file_name(&self.subject, extension)
    }

    /// Hand the current image to the export bridge. Pure read; no-op when
    /// no image exists.
    pub fn download(&self, bridge: &dyn ExportBridge) -> crate::error::Result<()> {
        let Some(image) = self.current_image.as_ref() else {
            debug!("Download rejected: no image");
            return Ok(());
        };
        bridge.save(&self.download_file_name(), image)
    }
}

impl<M: ImageModel> Session<M> {
    /// Generate a fresh illustration from the subject text.
    ///
    /// No-op unless the subject is non-blank and the session is idle. On
    /// success the previous image (if any) is discarded; on failure the
    /// slot is untouched and the message lands in the error slot. The
    /// phase returns to `Idle` on every path.
    pub async fn submit_generate(&mut self) {
        if !self.can_generate() {
            debug!("Generate rejected: precondition not met");
            return;
        }
        self.error = None;
        self.phase = Phase::Generating;

        let prompt = prompt::compose_generation_prompt(&self.subject);
        match self.model.generate(&prompt, &self.aspect_ratio).await {
            Ok(payload) => {
                self.current_image = Some(payload);
            }
            Err(err) => {
                let message = failure_message(err, GENERATE_FALLBACK);
                warn!("Generation failed: {}", message);
                self.error = Some(message);
            }
        }
        self.phase = Phase::Idle;
    }

    /// Refine the current image with the refinement text.
    ///
    /// No-op unless refinement text is non-blank, an image exists, and the
    /// session is idle. On success the new payload replaces the old one and
    /// the refinement text clears; on failure the text is retained for a
    /// manual retry.
    pub async fn submit_edit(&mut self) {
        if !self.can_edit() {
            debug!("Edit rejected: precondition not met");
            return;
        }
        self.error = None;
        self.phase = Phase::Editing;

        // can_edit() guarantees the slot is occupied
        let Some(source) = self.current_image.clone() else {
            self.phase = Phase::Idle;
            return;
        };
        let instruction = prompt::compose_edit_prompt(&self.refinement);
        match self.model.edit(&source, &instruction).await {
            Ok(payload) => {
                self.current_image = Some(payload);
                self.refinement.clear();
            }
            Err(err) => {
                let message = failure_message(err, EDIT_FALLBACK);
                warn!("Edit failed: {}", message);
                self.error = Some(message);
            }
        }
        self.phase = Phase::Idle;
    }
}

/// Map a transition failure to the message shown to the user.
///
/// `NoImageReturned` surfaces verbatim and a `Remote` fault keeps the
/// capability's own message; blank messages and decode failures fall back
/// to the generic retry prompt.
fn failure_message(err: StudioError, fallback: &str) -> String {
    match err {
        StudioError::NoImageReturned => err.to_string(),
        StudioError::Remote(message) => {
            if message.trim().is_empty() {
                fallback.to_string()
            } else {
                message
            }
        }
        StudioError::Decode => fallback.to_string(),
        other => {
            let message = other.to_string();
            if message.trim().is_empty() {
                fallback.to_string()
            } else {
                message
            }
        }
    }
}
