//! Codec Tests
//!
//! Tests for encoding and decoding the roster file.

use cadastro::error::CadastroError;
use cadastro::record::{Field, Student};
use cadastro::storage::{decode_table, encode_table, header_line};
use cadastro::store::Table;

const HEADER: &str = "Matricula,Nome,Rua,Número,Bairro,Cidade,UF,Telefone,Email";

fn full_student(id: u64, name: &str) -> Student {
    Student::new(
        id,
        [
            name.to_string(),
            "Rua das Flores".to_string(),
            "120".to_string(),
            "Boa Viagem".to_string(),
            "Recife".to_string(),
            "PE".to_string(),
            "81999990000".to_string(),
            format!("{}@mail.com", name.to_lowercase()),
        ],
    )
}

fn assert_corrupt_at(result: cadastro::Result<Table>, expected_line: usize) {
    match result {
        Err(CadastroError::CorruptStorage { line, .. }) => assert_eq!(line, expected_line),
        other => panic!("Expected CorruptStorage, got {:?}", other),
    }
}

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_header_line() {
    assert_eq!(header_line(), HEADER);
}

#[test]
fn test_encode_empty_table_writes_header() {
    let encoded = encode_table(&Table::new());
    assert_eq!(encoded, format!("{}\n", HEADER));
}

#[test]
fn test_encode_rows_in_table_order() {
    let mut table = Table::new();
    table.insert(full_student(2, "Bruno")).unwrap();
    table.insert(full_student(1, "Ana")).unwrap();

    let encoded = encode_table(&table);
    let lines: Vec<&str> = encoded.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER);
    assert_eq!(
        lines[1],
        "2,Bruno,Rua das Flores,120,Boa Viagem,Recife,PE,81999990000,bruno@mail.com"
    );
    assert!(lines[2].starts_with("1,Ana,"));
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_reproduces_saved_table() {
    let mut table = Table::new();
    table.insert(full_student(1, "Ana")).unwrap();
    table.insert(full_student(4, "Bruno")).unwrap();
    table.insert(full_student(2, "Carla")).unwrap();

    let decoded = decode_table(&encode_table(&table)).unwrap();

    let original: Vec<&Student> = table.iter().collect();
    let restored: Vec<&Student> = decoded.iter().collect();
    assert_eq!(original, restored);
    assert_eq!(decoded.next_id().unwrap(), 5);
}

#[test]
fn test_decode_header_only() {
    let table = decode_table(&format!("{}\n", HEADER)).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.next_id().unwrap(), 1);
}

#[test]
fn test_decode_crlf_and_blank_lines() {
    let contents = format!(
        "{}\r\n1,Ana,R,1,B,C,PE,9,a@x\r\n\r\n2,Bia,R,2,B,C,SP,8,b@x\r\n",
        HEADER
    );
    let table = decode_table(&contents).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.get(1).unwrap().get(Field::Email), "a@x");
    assert_eq!(table.get(2).unwrap().get(Field::State), "SP");
}

#[test]
fn test_decode_accepts_blank_field() {
    let contents = format!("{}\n3,Ana,,10,Centro,Recife,PE,,ana@mail.com\n", HEADER);
    let table = decode_table(&contents).unwrap();
    let ana = table.get(3).unwrap();
    assert_eq!(ana.get(Field::Street), "");
    assert_eq!(ana.get(Field::Phone), "");
}

#[test]
fn test_decode_empty_file_is_corrupt() {
    assert_corrupt_at(decode_table(""), 1);
}

#[test]
fn test_decode_wrong_header_is_corrupt() {
    let contents = "id,name,street,number,district,city,state,phone,email\n1,a,b,c,d,e,f,g,h\n";
    assert_corrupt_at(decode_table(contents), 1);
}

#[test]
fn test_decode_missing_column_is_corrupt() {
    let contents = format!("{}\n1,Ana,R,1,B,C,PE,9,a@x\n2,Bia,R,2,B,C,SP,8\n", HEADER);
    assert_corrupt_at(decode_table(&contents), 3);
}

#[test]
fn test_decode_extra_column_is_corrupt() {
    // A comma inside a value shifts every later column
    let contents = format!("{}\n1,Silva, Ana,R,1,B,C,PE,9,a@x\n", HEADER);
    assert_corrupt_at(decode_table(&contents), 2);
}

#[test]
fn test_decode_non_numeric_id_is_corrupt() {
    let contents = format!("{}\nabc,Ana,R,1,B,C,PE,9,a@x\n", HEADER);
    assert_corrupt_at(decode_table(&contents), 2);
}

#[test]
fn test_decode_zero_id_is_corrupt() {
    let contents = format!("{}\n0,Ana,R,1,B,C,PE,9,a@x\n", HEADER);
    assert_corrupt_at(decode_table(&contents), 2);
}

#[test]
fn test_decode_largest_id_loads_but_has_no_successor() {
    let contents = format!("{}\n18446744073709551615,Ana,R,1,B,C,PE,9,a@x\n", HEADER);
    let table = decode_table(&contents).unwrap();

    assert_eq!(table.get(u64::MAX).unwrap().name(), "Ana");
    assert!(matches!(
        table.next_id(),
        Err(CadastroError::IdExhausted(u64::MAX))
    ));
}

#[test]
fn test_decode_duplicate_id_is_corrupt() {
    let contents = format!(
        "{}\n1,Ana,R,1,B,C,PE,9,a@x\n1,Bia,R,2,B,C,SP,8,b@x\n",
        HEADER
    );
    assert_corrupt_at(decode_table(&contents), 3);
}
