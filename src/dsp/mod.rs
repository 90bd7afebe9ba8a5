//! Low-level DSP primitives used by the automation layer.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside a processor. They stay focused on the per-sample math
//! so the automation module can layer breakpoint walking on top.

/// Signal multiplication and constant gain.
pub mod amplify;
/// Declicking linear ramp toward a target value.
pub mod ramp;

pub use ramp::Ramp;
