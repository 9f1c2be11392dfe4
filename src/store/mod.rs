//! Store Module
//!
//! In-memory table of student records for the current run.
//!
//! ## Responsibilities
//! - Hold every record, in insertion (file) order
//! - Look records up by id and by name
//! - Hand out new ids without reusing any the table has held
//!
//! ## Data Structure Choice
//! A plain `Vec<Student>`:
//! - Preserves file order, which decides "first match wins" on duplicate names
//! - Rosters are small, linear lookups are fine

mod table;

pub use table::{NameMatch, Table};
