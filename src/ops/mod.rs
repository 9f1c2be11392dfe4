//! Ops Module
//!
//! The four roster operations invoked from the menu.
//!
//! ## Contract
//! - Every operation works on `&mut Table` (or `&Table`) and a `Console`
//! - None of them persist; the menu saves after a `Changed` outcome
//! - Invalid answers are handled at the prompt by asking again
//!
//! Each operation has a console-free core (`apply_edit`, `lookup`, ...) so
//! the table semantics can be exercised without scripting input.

use crate::error::{CadastroError, Result};
use crate::storage::DELIMITER;

mod insert;
mod search;
mod edit;
mod remove;

pub use insert::{insert, insert_student};
pub use search::{lookup, search, show_student, Lookup};
pub use edit::{apply_edit, edit};
pub use remove::{confirm_token, remove, CONFIRM_TOKEN};

/// Check a value typed for a field
///
/// The file format has no escaping, so the delimiter can never be stored.
pub fn check_value(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(CadastroError::Validation(
            "Campo não pode ser vazio. Tente novamente.".to_string(),
        ));
    }
    if value.contains(DELIMITER) {
        return Err(CadastroError::Validation(format!(
            "Campo não pode conter '{}'. Tente novamente.",
            DELIMITER
        )));
    }
    Ok(())
}

/// Whether an operation modified the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
}

impl Outcome {
    pub fn is_changed(self) -> bool {
        self == Outcome::Changed
    }
}
