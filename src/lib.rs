//! # Template Tools
//!
//! Request-scoped helper tools for server-side template rendering:
//! - Tool descriptors that validate a tool class at registration and build a
//!   freshly configured instance per request
//! - Path restrictions limiting which templates may use a tool
//! - A toolbox assembling the tool set for one request from configuration
//! - A link tool resolving MVC action and forward names to URLs
//! - A log adapter forwarding engine messages to the host container's log
//!
//! ## Architecture
//!
//! ```text
//!   setup (once)                         per request
//!   ────────────                         ───────────
//!   Config ─→ Toolbox ─→ ToolInfo ──create(path, props)──→ Box<dyn Tool>
//!                          │                                  │
//!                          └─ PathRestriction                 ├─ Configurable::setup
//!                                                             └─ PropertySet::set_property
//! ```

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod container;
pub mod link;
pub mod logging;
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{BoxError, Config, Error, Result};
