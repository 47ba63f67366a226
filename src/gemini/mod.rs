//! Client adapter for the Gemini image-generation API.
//!
//! The [`ImageModel`] trait is the seam between the session state machine
//! and the remote capability; [`GeminiClient`] is the live implementation
//! against `generativelanguage.googleapis.com`.

pub mod client;

pub use client::GeminiClient;

use crate::error::Result;
use crate::image::ImagePayload;

/// The external generation capability, as seen by the session.
///
/// Exactly two request kinds exist: text-only generation with an
/// aspect-ratio hint, and refinement of a prior image. No retries, no
/// caching, no cancellation.
pub trait ImageModel {
    /// Generate a new image from a text instruction.
    fn generate(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> impl std::future::Future<Output = Result<ImagePayload>>;

    /// Refine a prior image according to a text instruction.
    fn edit(
        &self,
        source: &ImagePayload,
        instruction: &str,
    ) -> impl std::future::Future<Output = Result<ImagePayload>>;
}
