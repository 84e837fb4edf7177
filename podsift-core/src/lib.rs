//! # podsift-core
//!
//! Music/speech segmentation pipeline for mono audio.
//!
//! ## Architecture
//!
//! ```text
//! SampleSource → RMS energies (20 ms) → per-second features (MLER, variance)
//!                                             │
//!                                      music/speech labels
//!                                             │
//!                                    ±3 majority smoothing
//!                                             │
//!                                 run detection + segment merging
//!                                             │
//!                                       Vec<Segment>
//! ```
//!
//! The crate only consumes decoded f32 samples and returns segment indices
//! in one-second units. Decoding, fades and cuts belong to the host.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod segment;
pub mod source;

// Convenience re-exports for downstream crates
pub use analysis::LongFrame;
pub use config::PipelineConfig;
pub use error::{PodsiftError, Result};
pub use pipeline::Segmenter;
pub use segment::Segment;
pub use source::{BufferSource, SampleSource};
