//! Table implementation
//!
//! Vec-backed roster with a high-water mark for id generation.

use crate::error::{CadastroError, Result};
use crate::record::{Student, StudentId};

/// Result of a name lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatch {
    /// Id of the first matching student in table order
    pub id: StudentId,

    /// Total number of students sharing the name
    pub count: usize,
}

impl NameMatch {
    pub fn has_duplicates(&self) -> bool {
        self.count > 1
    }
}

/// All student records of one session
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Student>,

    /// Largest id this table has ever held
    high_water: StudentId,
}

impl Table {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Id for the next inserted student
    ///
    /// `1` for a fresh empty table, otherwise one past the largest id held.
    /// Removing the current maximum does not lower the mark.
    pub fn next_id(&self) -> Result<StudentId> {
        let max = self.rows.iter().map(Student::id).max().unwrap_or(0);
        let mark = max.max(self.high_water);
        mark.checked_add(1).ok_or(CadastroError::IdExhausted(mark))
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: StudentId) -> Result<&Student> {
        self.rows
            .iter()
            .find(|s| s.id() == id)
            .ok_or(CadastroError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: StudentId) -> Result<&mut Student> {
        self.rows
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(CadastroError::NotFound(id))
    }

    /// Append a student at the end of the table
    pub fn insert(&mut self, student: Student) -> Result<()> {
        let id = student.id();
        if self.contains(id) {
            return Err(CadastroError::DuplicateId(id));
        }
        self.high_water = self.high_water.max(id);
        self.rows.push(student);
        Ok(())
    }

    /// Delete a student by id, keeping the order of the rest
    pub fn remove(&mut self, id: StudentId) -> Result<Student> {
        let pos = self.position(id).ok_or(CadastroError::NotFound(id))?;
        Ok(self.rows.remove(pos))
    }

    /// Case-insensitive exact match on the name field
    pub fn find_by_name(&self, name: &str) -> Option<NameMatch> {
        let wanted = name.to_lowercase();
        let mut matches = self
            .rows
            .iter()
            .filter(|s| s.name().to_lowercase() == wanted);

        let first = matches.next()?;
        Some(NameMatch {
            id: first.id(),
            count: 1 + matches.count(),
        })
    }

    /// Iterate students in table order
    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.rows.iter()
    }

    fn position(&self, id: StudentId) -> Option<usize> {
        self.rows.iter().position(|s| s.id() == id)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
