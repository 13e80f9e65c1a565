//! Authentication services.
//!
//! - `context`: injectable session state (`AuthContext`)
//! - `gate`: per-screen guard that waits for resolution (`SessionGate`)

mod context;
mod gate;

pub use context::AuthContext;
pub use gate::{GateOutcome, SessionGate};

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
