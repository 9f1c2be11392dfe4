//! # Cadastro
//!
//! An interactive student roster backed by a flat CSV file:
//! - Typed student records keyed by an auto-incrementing matrícula
//! - Whole-file load at startup, whole-file rewrite after every mutation
//! - Insert, search, edit and remove driven by a text menu
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Menu                                  │
//! │          (MainMenu → SearchResult → MainMenu → Exit)         │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │                              │
//!                ▼                              ▼
//!         ┌─────────────┐                ┌─────────────┐
//!         │    Ops      │───── prompts ──│   Console   │
//!         │ (CRUD)      │                │ (BufRead /  │
//!         └──────┬──────┘                │  Write)     │
//!                │                       └─────────────┘
//!                ▼
//!         ┌─────────────┐   load / save  ┌─────────────┐
//!         │   Table     │◄──────────────►│  FileStore  │
//!         │ (in memory) │                │   (CSV)     │
//!         └─────────────┘                └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod storage;
pub mod console;
pub mod ops;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CadastroError, Result};
pub use config::Config;
pub use record::{Field, Student, StudentId};
pub use store::Table;
pub use storage::FileStore;
pub use console::Console;
pub use menu::Menu;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Cadastro
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
