//! Frame-level analysis stages: RMS energy, per-second features,
//! classification, and label smoothing.

pub mod classify;
pub mod energy;
pub mod features;
pub mod smooth;

pub use features::LongFrame;
