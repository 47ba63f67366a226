//! Image payload handling.
//!
//! An [`ImagePayload`](codec::ImagePayload) pairs a media type with base64
//! image data. The codec converts between that pair and the self-describing
//! `data:<media-type>;base64,<data>` transport string used both when sending
//! a source image back to the model and when handing an image to the
//! rendering surface.
//!
//! # Submodules
//!
//! - `codec`: Payload type, data-URL parsing and formatting.

pub mod codec;

pub use codec::ImagePayload;
