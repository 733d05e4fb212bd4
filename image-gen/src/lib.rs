//! Offline image generation for the VisionWorks site
//!
//! A fixed list of prompts is sent to the Gemini `generateContent` endpoint
//! one at a time. Each returned image is written to `<out_dir>/<name>.png`;
//! files that already exist are never regenerated.

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod jobs;

pub use batch::{BatchReport, JobOutcome, run_batch};
pub use client::{GeminiClient, ImageGenerator, ModelInfo};
pub use config::{Config, ConfigError};
pub use error::{GenerateError, Result};
pub use jobs::{AspectRatio, BUILTIN_JOBS, GenerationJob};
