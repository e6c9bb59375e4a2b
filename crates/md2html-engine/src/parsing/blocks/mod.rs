//! # Block Parsing
//!
//! Two-phase block handling over a [`LineCursor`](super::lines::LineCursor).
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified on its own
//!    into a `LineClass` (blank, header, list item, fence delimiter, paragraph)
//! 2. **Block Assembly** (`assembler`): a `BlockAssembler` walks the cursor,
//!    switching between scanning, fenced code and list runs, and writes HTML
//!
//! ## Modules
//!
//! - **`kinds`**: block types owning their delimiters (CodeFence, Heading, ListMarker)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`list`**: `ListRun` entries and the level stack that renders them
//! - **`assembler`**: `BlockAssembler` state machine
//!
//! ## Key Invariants
//!
//! - Every opened list and `<li>` is closed exactly once, innermost first
//! - Fenced code blocks are raw zones: no classification or inline work inside
//! - Unterminated fences and lists close at end of input

pub mod assembler;
pub mod classify;
pub mod kinds;
pub mod list;

pub use assembler::BlockAssembler;
pub use classify::{LineClass, MarkdownLineClassifier, classify};
pub use kinds::{CodeFence, Heading, ListKind, ListMarker};
pub use list::{ListEntry, ListRun};
