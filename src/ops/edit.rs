//! Edit operation

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::{CadastroError, Result};
use crate::record::{Field, StudentId};
use crate::store::Table;

use super::{check_value, Outcome};

/// Overwrite one field; an empty value leaves the record untouched
pub fn apply_edit(table: &mut Table, id: StudentId, field: Field, value: &str) -> Result<Outcome> {
    let student = table.get_mut(id)?;
    if value.is_empty() {
        return Ok(Outcome::Unchanged);
    }
    check_value(value)?;
    student.set(field, value);
    tracing::debug!("Student {} field {} updated", id, field);
    Ok(Outcome::Changed)
}

/// Menu answer: `0` cancels, `1..=8` picks a field
fn parse_selection(answer: &str) -> Result<Option<Field>> {
    let n: usize = answer
        .parse()
        .map_err(|_| CadastroError::Parse("Entrada inválida. Digite um número.".to_string()))?;
    if n == 0 {
        return Ok(None);
    }
    Field::from_menu_number(n)
        .map(Some)
        .ok_or_else(|| CadastroError::Parse("Opção inválida.".to_string()))
}

/// Let the user change a single field of student `id`
pub fn edit<R: BufRead, W: Write>(
    table: &mut Table,
    id: StudentId,
    console: &mut Console<R, W>,
) -> Result<Outcome> {
    let student = table.get(id)?;

    console.blank()?;
    console.say("--- EDITAR DADOS DO ALUNO ---")?;
    console.blank()?;
    console.say("Escolha o dado a ser editado:")?;
    for (i, (field, value)) in student.fields().enumerate() {
        console.say(format!("{} - {} (Atual: {})", i + 1, field, value))?;
    }
    console.say("0 - CANCELAR EDIÇÃO")?;

    let field = match console.ask("Digite o número da opção desejada: ", parse_selection)? {
        Some(field) => field,
        None => {
            console.say("[INFO] Edição cancelada.")?;
            return Ok(Outcome::Unchanged);
        }
    };

    // Empty is accepted here and turns into a no-op below
    let value = console.ask(&format!("Digite o NOVO valor para {}: ", field), |answer| {
        if answer.is_empty() {
            Ok(String::new())
        } else {
            check_value(answer).map(|_| answer.to_string())
        }
    })?;
    let outcome = apply_edit(table, id, field, &value)?;

    match outcome {
        Outcome::Changed => {
            console.blank()?;
            console.say(format!(
                "[OK] Campo '{}' alterado para '{}' (Matrícula {}).",
                field, value, id
            ))?;
        }
        Outcome::Unchanged => console.say("[INFO] Valor vazio. Nenhum dado foi alterado.")?,
    }
    Ok(outcome)
}
