//! # Line Scanning
//!
//! Single-pass, line-oriented scanning shared by every renderer.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` from local facts only (fence toggle, blank status)
//!
//! 2. **Fence Tracking** (`scanner`): a `Scanner` holds the scan state
//!    (`in_fence` plus the fence buffer) and reports ordinary lines and
//!    closed fences to a `ScanHandler`
//!
//! ## Modules
//!
//! - **`lines`**: splits a document into lines exactly on `\n`
//! - **`fence`**: `CodeFence` owns the fence delimiter
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`scanner`**: `Scanner` state machine and the `scan` entry point
//!
//! ## Key Invariants
//!
//! - Fence toggle lines never reach the handler
//! - Fenced blocks are raw zones: their lines are buffered verbatim and are
//!   never handed out as ordinary lines
//! - An unterminated fence is closed at end of input instead of failing

pub mod classify;
pub mod fence;
pub mod lines;
pub mod scanner;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use fence::CodeFence;
pub use lines::document_lines;
pub use scanner::{ScanHandler, ScanSummary, Scanner, scan};
