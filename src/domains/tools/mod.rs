//! Tools domain module.
//!
//! Tools are operations clients invoke by name through `POST /invoke`.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool names, descriptors and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define `NAME`, `execute()`, `handle()` and `to_descriptor()`
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`

pub mod definitions;
mod error;
mod registry;

pub use definitions::{Sentiment, SentimentPrecedence, TextParams};
pub use error::ToolError;
pub use registry::ToolRegistry;
