//! Table codec
//!
//! Pure text encoding and decoding of the roster file.

use crate::error::{CadastroError, Result};
use crate::record::{Field, Student, StudentId, ID_COLUMN};
use crate::store::Table;

/// Column separator
pub const DELIMITER: char = ',';

/// Number of columns in every line: id plus the eight fields
const COLUMN_COUNT: usize = 1 + Field::ALL.len();

// =============================================================================
// Encoding
// =============================================================================

/// The header line, without a line terminator
pub fn header_line() -> String {
    let mut header = String::from(ID_COLUMN);
    for field in Field::ALL {
        header.push(DELIMITER);
        header.push_str(field.label());
    }
    header
}

/// Encode a table as the full file contents
///
/// Always emits the header, even for an empty table.
pub fn encode_table(table: &Table) -> String {
    let mut out = header_line();
    out.push('\n');

    for student in table {
        out.push_str(&student.id().to_string());
        for value in student.values() {
            out.push(DELIMITER);
            out.push_str(value);
        }
        out.push('\n');
    }

    out
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode the full file contents into a table
///
/// Line numbers in errors are 1-based. Blank lines are skipped and a
/// trailing `\r` is stripped from every line.
pub fn decode_table(contents: &str) -> Result<Table> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| CadastroError::corrupt(1, "missing header"))?;
    check_header(header_no, header)?;

    let mut table = Table::new();
    for (line_no, line) in lines {
        let student = decode_row(line_no, line)?;
        let id = student.id();
        table.insert(student).map_err(|e| match e {
            CadastroError::DuplicateId(_) => {
                CadastroError::corrupt(line_no, format!("duplicate id {}", id))
            }
            other => other,
        })?;
    }

    Ok(table)
}

fn check_header(line_no: usize, header: &str) -> Result<()> {
    let expected = header_line();
    let cells: Vec<&str> = header.split(DELIMITER).map(str::trim).collect();
    let wanted: Vec<&str> = expected.split(DELIMITER).collect();

    if cells != wanted {
        return Err(CadastroError::corrupt(
            line_no,
            format!("unexpected header '{}', expected '{}'", header, expected),
        ));
    }
    Ok(())
}

/// Decode one data row
fn decode_row(line_no: usize, line: &str) -> Result<Student> {
    let cells: Vec<&str> = line.split(DELIMITER).collect();
    if cells.len() != COLUMN_COUNT {
        return Err(CadastroError::corrupt(
            line_no,
            format!("expected {} columns, found {}", COLUMN_COUNT, cells.len()),
        ));
    }

    let id = parse_id(line_no, cells[0])?;

    let mut values: [String; 8] = Default::default();
    for (slot, cell) in values.iter_mut().zip(&cells[1..]) {
        *slot = (*cell).to_string();
    }

    Ok(Student::new(id, values))
}

fn parse_id(line_no: usize, cell: &str) -> Result<StudentId> {
    let id: StudentId = cell
        .trim()
        .parse()
        .map_err(|_| CadastroError::corrupt(line_no, format!("invalid id '{}'", cell)))?;
    if id == 0 {
        return Err(CadastroError::corrupt(line_no, "id must be positive"));
    }
    Ok(id)
}
