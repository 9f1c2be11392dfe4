//! Remove operation

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::error::Result;
use crate::record::StudentId;
use crate::store::Table;

use super::Outcome;

/// Answer that confirms a removal ("Sim")
pub const CONFIRM_TOKEN: &str = "S";

/// Case-insensitive check for the confirmation token
pub fn confirm_token(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(CONFIRM_TOKEN)
}

/// Delete student `id` after explicit confirmation
pub fn remove<R: BufRead, W: Write>(
    table: &mut Table,
    id: StudentId,
    console: &mut Console<R, W>,
) -> Result<Outcome> {
    table.get(id)?;

    console.blank()?;
    console.say("--- REMOVER ALUNO ---")?;
    let answer = console.read_line(&format!(
        "ATENÇÃO: Deseja REALMENTE remover o aluno de Matrícula {}? (S/N): ",
        id
    ))?;

    if !confirm_token(&answer) {
        console.say("[INFO] Remoção cancelada.")?;
        return Ok(Outcome::Unchanged);
    }

    table.remove(id)?;
    tracing::debug!("Removed student {}", id);
    console.blank()?;
    console.say(format!(
        "[SUCESSO] Aluno de Matrícula {} removido permanentemente.",
        id
    ))?;
    Ok(Outcome::Changed)
}
