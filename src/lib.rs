//! Host-testable library interface for present-demo.
//!
//! Everything that decides what the demo shows lives here: the scene state
//! machine, its renderers, the tick divider, switch decoding and the tune.
//! The hardware drivers sit behind the `Canvas` and `Tone` traits.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and pulls the logic from this crate.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod scene;
pub mod tick_logic;
pub mod ui;

pub use error::Error;
pub use scene::{Demo, Scene};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - tick divider, switch decoding, tune, canvas adapter
// ═══════════════════════════════════════════════════════════════════════════
