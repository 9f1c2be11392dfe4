//! Table Tests
//!
//! Tests verify:
//! - Id generation (first id, max + 1, no reuse)
//! - Lookups by id
//! - Case-insensitive name matching and duplicate detection
//! - Removal keeps the order of the remaining rows

use cadastro::error::CadastroError;
use cadastro::record::{Field, Student};
use cadastro::store::Table;

// =============================================================================
// Helper Functions
// =============================================================================

fn student(id: u64, name: &str) -> Student {
    Student::from_pairs(id, [(Field::Name, name), (Field::City, "Recife")])
}

fn table_with(ids_and_names: &[(u64, &str)]) -> Table {
    let mut table = Table::new();
    for (id, name) in ids_and_names {
        table.insert(student(*id, name)).unwrap();
    }
    table
}

// =============================================================================
// Id Generation Tests
// =============================================================================

#[test]
fn test_new_table_is_empty() {
    let table = Table::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_next_id_on_empty_table_is_one() {
    let table = Table::new();
    assert_eq!(table.next_id().unwrap(), 1);
}

#[test]
fn test_next_id_is_max_plus_one() {
    let table = table_with(&[(3, "Ana"), (10, "Bruno"), (7, "Carla")]);
    assert_eq!(table.next_id().unwrap(), 11);
}

#[test]
fn test_next_id_skips_gap_left_by_removal() {
    let mut table = table_with(&[(1, "Ana"), (2, "Bruno"), (3, "Carla")]);
    table.remove(2).unwrap();
    assert_eq!(table.next_id().unwrap(), 4);
}

#[test]
fn test_next_id_not_reused_after_removing_max() {
    let mut table = table_with(&[(1, "Ana"), (2, "Bruno"), (3, "Carla")]);
    table.remove(3).unwrap();
    assert_eq!(table.next_id().unwrap(), 4);

    table.remove(1).unwrap();
    table.remove(2).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.next_id().unwrap(), 4);
}

#[test]
fn test_ids_strictly_increase_across_inserts_and_removals() {
    let mut table = Table::new();
    let mut issued = Vec::new();

    for round in 0..20u64 {
        let id = table.next_id().unwrap();
        table.insert(student(id, "Aluno")).unwrap();
        issued.push(id);

        if round % 3 == 2 {
            table.remove(id).unwrap();
        }
    }

    assert!(issued.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_next_id_after_largest_id_is_exhausted() {
    let table = table_with(&[(1, "Ana"), (u64::MAX, "Bruno")]);
    assert!(matches!(
        table.next_id(),
        Err(CadastroError::IdExhausted(u64::MAX))
    ));
}

#[test]
fn test_next_id_exhausted_even_after_removal() {
    let mut table = table_with(&[(u64::MAX, "Bruno")]);
    table.remove(u64::MAX).unwrap();
    assert!(matches!(
        table.next_id(),
        Err(CadastroError::IdExhausted(u64::MAX))
    ));
}

#[test]
fn test_insert_duplicate_id_rejected() {
    let mut table = table_with(&[(1, "Ana")]);
    let result = table.insert(student(1, "Bruno"));
    assert!(matches!(result, Err(CadastroError::DuplicateId(1))));
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(1).unwrap().name(), "Ana");
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_get_existing() {
    let table = table_with(&[(5, "Bruno")]);
    let found = table.get(5).unwrap();
    assert_eq!(found.id(), 5);
    assert_eq!(found.name(), "Bruno");
}

#[test]
fn test_get_missing_is_not_found() {
    let table = table_with(&[(5, "Bruno")]);
    assert!(matches!(table.get(6), Err(CadastroError::NotFound(6))));
}

#[test]
fn test_get_mut_changes_in_place() {
    let mut table = table_with(&[(5, "Bruno")]);
    table.get_mut(5).unwrap().set(Field::City, "Olinda");
    assert_eq!(table.get(5).unwrap().get(Field::City), "Olinda");
}

#[test]
fn test_find_by_name_ignores_case() {
    let table = table_with(&[(1, "Maria"), (2, "João")]);

    for term in ["Maria", "maria", "MARIA", "mArIa"] {
        let m = table.find_by_name(term).unwrap();
        assert_eq!(m.id, 1);
        assert_eq!(m.count, 1);
        assert!(!m.has_duplicates());
    }
}

#[test]
fn test_find_by_name_is_exact_not_substring() {
    let table = table_with(&[(1, "Maria Silva")]);
    assert!(table.find_by_name("Maria").is_none());
    assert!(table.find_by_name("maria silva").is_some());
}

#[test]
fn test_find_by_name_first_in_table_order() {
    let table = table_with(&[(9, "Ana"), (2, "Bruno"), (4, "ana")]);
    let m = table.find_by_name("ANA").unwrap();
    assert_eq!(m.id, 9);
    assert_eq!(m.count, 2);
    assert!(m.has_duplicates());
}

#[test]
fn test_find_by_name_non_ascii() {
    let table = table_with(&[(1, "JOÃO")]);
    assert_eq!(table.find_by_name("joão").map(|m| m.id), Some(1));
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_remove_returns_row_and_keeps_order() {
    let mut table = table_with(&[(1, "Ana"), (2, "Bruno"), (3, "Carla")]);

    let removed = table.remove(2).unwrap();
    assert_eq!(removed.name(), "Bruno");

    let ids: Vec<u64> = table.iter().map(Student::id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_remove_missing_is_not_found() {
    let mut table = table_with(&[(1, "Ana")]);
    assert!(matches!(table.remove(42), Err(CadastroError::NotFound(42))));
    assert_eq!(table.len(), 1);
}
