//! Record Module
//!
//! The student record and its fixed field list.
//!
//! ## Layout
//! ```text
//! ┌───────────┬──────┬─────┬────────┬────────┬────────┬────┬──────────┬───────┐
//! │ Matricula │ Nome │ Rua │ Número │ Bairro │ Cidade │ UF │ Telefone │ Email │
//! └───────────┴──────┴─────┴────────┴────────┴────────┴────┴──────────┴───────┘
//!   StudentId   ◄──────────────── Field::ALL (editable) ────────────────────►
//! ```

mod student;

pub use student::Student;

/// Primary key of a student (the matrícula)
pub type StudentId = u64;

/// Header label of the id column
pub const ID_COLUMN: &str = "Matricula";

/// Editable fields of a student, in display and file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Street,
    Number,
    Neighborhood,
    City,
    State,
    Phone,
    Email,
}

impl Field {
    /// Every field, in the fixed order used by prompts, menus and the file
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Street,
        Field::Number,
        Field::Neighborhood,
        Field::City,
        Field::State,
        Field::Phone,
        Field::Email,
    ];

    /// Column header and prompt label
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Street => "Rua",
            Field::Number => "Número",
            Field::Neighborhood => "Bairro",
            Field::City => "Cidade",
            Field::State => "UF",
            Field::Phone => "Telefone",
            Field::Email => "Email",
        }
    }

    /// Position in `Field::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a field by its 1-based menu number
    pub fn from_menu_number(n: usize) -> Option<Field> {
        n.checked_sub(1).and_then(|i| Field::ALL.get(i).copied())
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
