//! Student record

use super::{Field, StudentId};

/// One row of the roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: StudentId,
    values: [String; 8],
}

impl Student {
    /// Create a student from values ordered as `Field::ALL`
    pub fn new(id: StudentId, values: [String; 8]) -> Self {
        Self { id, values }
    }

    /// Create a student from `(field, value)` pairs; missing fields are blank
    pub fn from_pairs<I, S>(id: StudentId, pairs: I) -> Self
    where
        I: IntoIterator<Item = (Field, S)>,
        S: Into<String>,
    {
        let mut values: [String; 8] = Default::default();
        for (field, value) in pairs {
            values[field.index()] = value.into();
        }
        Self { id, values }
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Overwrite one field, returning the previous value
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> String {
        std::mem::replace(&mut self.values[field.index()], value.into())
    }

    pub fn name(&self) -> &str {
        self.get(Field::Name)
    }

    /// `(field, value)` pairs in `Field::ALL` order
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    pub fn values(&self) -> &[String; 8] {
        &self.values
    }
}
