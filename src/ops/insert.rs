//! Insert operation

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::Result;
use crate::record::{Field, Student, StudentId};
use crate::store::Table;

use super::check_value;

/// Append a student built from `values` under the next free id
pub fn insert_student(table: &mut Table, values: [String; 8]) -> Result<StudentId> {
    for value in &values {
        check_value(value)?;
    }
    let id = table.next_id()?;
    table.insert(Student::new(id, values))?;
    tracing::debug!("Inserted student {}", id);
    Ok(id)
}

/// Prompt for every field and insert the new student
pub fn insert<R: BufRead, W: Write>(
    table: &mut Table,
    console: &mut Console<R, W>,
) -> Result<StudentId> {
    console.blank()?;
    console.say("--- INSERIR NOVO ALUNO ---")?;

    let id = table.next_id()?;
    console.say(format!("Matrícula gerada automaticamente: {}", id))?;

    let mut values: [String; 8] = Default::default();
    for field in Field::ALL {
        values[field.index()] = console.ask(&format!("Digite o {}: ", field), |answer| {
            check_value(answer).map(|_| answer.to_string())
        })?;
    }

    let name = values[Field::Name.index()].clone();
    let id = insert_student(table, values)?;

    console.blank()?;
    console.say(format!("[OK] Aluno {} inserido com a Matrícula {}.", name, id))?;
    Ok(id)
}
