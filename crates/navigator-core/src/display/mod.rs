//! Markdown display formatting for models and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); collections
//! and operation outcomes are formatted through small wrapper types. All
//! output is markdown so the CLI can render it with termimad and the MCP
//! server can return it verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Roadmap, ...)  │───▶│ (GenerateResult,│───▶│    Output       │
//! │                 │    │  Templates)     │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::Templates;
pub use datetime::LocalDateTime;
pub use results::{GenerateResult, ImportResult, StatusUpdateResult};
