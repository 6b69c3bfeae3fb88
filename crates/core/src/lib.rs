//! Project directory and active-project symlink management
//!
//! This crate provides:
//! - Slot naming policy (`current_project`, `project_<NAME>`)
//! - Path resolution against a configured project root and symlink root
//! - Read-only project and slot queries
//! - Slot mutations with conflict detection
//! - New project allocation

pub mod config;
pub mod create;
pub mod error;
pub mod index;
pub mod naming;
pub mod prefixes;
pub mod resolver;
pub mod slots;

// Re-exports
pub use config::Config;
pub use create::{create_project, NewProject};
pub use error::{DirmanError, ErrorKind, InvalidTargetReason, Result};
pub use index::{last_activity, ProjectIndex, SlotEntry};
pub use naming::{matches_slot_pattern, slot_name, slot_name_pattern, SlotPattern};
pub use prefixes::PrefixDescription;
pub use resolver::Layout;
pub use slots::{LinkOptions, SlotManager};
