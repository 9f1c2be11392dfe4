//! Storage Module
//!
//! Persists the whole table to a single CSV file.
//!
//! ## Responsibilities
//! - Load the table once at startup (missing file → empty table)
//! - Rewrite the entire file after every mutation
//! - Reject malformed files outright, no partial recovery
//!
//! ## File Format
//! ```text
//! Matricula,Nome,Rua,Número,Bairro,Cidade,UF,Telefone,Email   ← header
//! 1,Ana,Rua A,10,Centro,Recife,PE,8199990000,ana@mail.com       ← one row per student
//! 2,Bruno,...
//! ```
//! Values are written verbatim. Commas inside a value are not escaped.

mod codec;
mod file;

pub use codec::{decode_table, encode_table, header_line, DELIMITER};
pub use file::FileStore;
