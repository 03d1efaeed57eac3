//! glowctl library - Control a Logitech Litra Glow light through the litra CLI.
//!
//! This library exposes the core functionality of the `glowctl` binary for use
//! in tests and other front ends.
//!
//! # Modules
//!
//! - `device`: Command delegator wrapping the external `litra` executable
//! - `config`: Settings file, path resolution and precedence
//! - `error`: Error types with user-recoverable hints
//! - `notify`: Action outcomes and their notifications
//! - `output`: Output mode abstraction (robot/human)
//! - `presets`: Brightness and temperature picker presets
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod device;
pub mod error;
pub mod logging;
pub mod notify;
pub mod output;
pub mod presets;
pub mod theme;
