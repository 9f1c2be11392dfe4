//! Search operation
//!
//! A term that parses as an integer is an id lookup; anything else is a
//! case-insensitive exact match on the name.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::Result;
use crate::record::{Student, StudentId};
use crate::store::{NameMatch, Table};

/// How a search term resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Term was numeric and the id exists
    Id(StudentId),

    /// Term matched one or more names; the first in table order wins
    Name(NameMatch),

    /// Numeric term with no such id, or no equal name
    NotFound,
}

impl Lookup {
    pub fn id(&self) -> Option<StudentId> {
        match self {
            Lookup::Id(id) => Some(*id),
            Lookup::Name(m) => Some(m.id),
            Lookup::NotFound => None,
        }
    }
}

/// Resolve a search term against the table
pub fn lookup(table: &Table, term: &str) -> Lookup {
    let term = term.trim();

    if let Ok(n) = term.parse::<i128>() {
        return match StudentId::try_from(n) {
            Ok(id) if table.contains(id) => Lookup::Id(id),
            _ => Lookup::NotFound,
        };
    }

    match table.find_by_name(term) {
        Some(m) => Lookup::Name(m),
        None => Lookup::NotFound,
    }
}

/// Print one student, field by field
pub fn show_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    student: &Student,
) -> Result<()> {
    console.blank()?;
    console.say("--- DADOS DO ALUNO ENCONTRADO ---")?;
    console.say(format!("Matrícula: {}", student.id()))?;
    for (field, value) in student.fields() {
        console.say(format!("{:<10} {}", field.label(), value))?;
    }
    console.say("-----------------------------------")
}

/// Ask for a term, report the result and return the matching id
pub fn search<R: BufRead, W: Write>(
    table: &Table,
    console: &mut Console<R, W>,
) -> Result<Option<StudentId>> {
    console.blank()?;
    console.say("--- PESQUISAR ALUNO ---")?;

    if table.is_empty() {
        console.say("[ERRO] Não há alunos cadastrados.")?;
        return Ok(None);
    }

    let term = console.read_line("Digite o NÚMERO DE MATRÍCULA ou o NOME do aluno: ")?;
    let found = lookup(table, &term);
    tracing::debug!("Search {:?} resolved to {:?}", term, found);

    if let Lookup::Name(m) = found {
        if m.has_duplicates() {
            tracing::warn!("{} students share the name {:?}", m.count, term);
            console.blank()?;
            console.say("[ALERTA] Múltiplos alunos encontrados com este nome. Exibindo o primeiro:")?;
        }
    }

    match found.id() {
        Some(id) => {
            show_student(console, table.get(id)?)?;
            Ok(Some(id))
        }
        None => {
            console.blank()?;
            console.say(format!(
                "[INFO] Aluno com Matrícula/Nome '{}' NÃO ENCONTRADO.",
                term
            ))?;
            Ok(None)
        }
    }
}
