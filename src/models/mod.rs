// Wire type definitions for the generative image API

pub mod gemini;

pub use gemini::*;
