//! # Vigil - presence keeper for desktop collaboration clients
//!
//! A command-line utility that keeps your status active by periodically
//! focusing the target application, sending a keystroke, restoring the
//! previous focus, and blocking idle sleep in the meantime.
//!
//! ## Features
//!
//! - **Activity Simulation**: Periodic focus-interact-restore sequence
//!   against a configurable target application
//! - **Sleep Prevention**: Holds an idle-sleep assertion for the lifetime
//!   of the run
//! - **Pause Shortcut**: Global Ctrl+Shift+P toggle, gated on a trusted
//!   frontmost application
//! - **Live Dashboard**: In-place terminal status panel, or plain log lines
//!   in debug mode
//! - **Failure Tolerance**: Bounded consecutive-failure recovery with
//!   desktop notifications and a clean threshold shutdown
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vigil::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! # Ok(())
//! # }
//! ```

pub mod libs;
