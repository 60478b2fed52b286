//! Subjects — one query result row each — and the result set holding them.

use serde::{Deserialize, Serialize};

use super::{PageIdentity, PropertyValueCollection};

/// A result row: the page it is about plus its printed property values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    page: PageIdentity,
    #[serde(default)]
    property_values: Vec<PropertyValueCollection>,
}

impl Subject {
    pub fn new(page: PageIdentity, property_values: Vec<PropertyValueCollection>) -> Self {
        Self { page, property_values }
    }

    pub fn page(&self) -> &PageIdentity { &self.page }

    pub fn property_values(&self) -> &[PropertyValueCollection] { &self.property_values }

    /// First collection whose label matches exactly.
    pub fn get(&self, label: &str) -> Option<&PropertyValueCollection> {
        self.property_values.iter().find(|pv| pv.label() == label)
    }
}

/// An ordered query result set. Order is the output event order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectCollection {
    subjects: Vec<Subject>,
}

impl SubjectCollection {
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self { subjects }
    }

    pub fn subjects(&self) -> &[Subject] { &self.subjects }
    pub fn iter(&self) -> std::slice::Iter<'_, Subject> { self.subjects.iter() }
    pub fn len(&self) -> usize { self.subjects.len() }
    pub fn is_empty(&self) -> bool { self.subjects.is_empty() }
}

impl<'a> IntoIterator for &'a SubjectCollection {
    type Item = &'a Subject;
    type IntoIter = std::slice::Iter<'a, Subject>;

    fn into_iter(self) -> Self::IntoIter {
        self.subjects.iter()
    }
}

impl FromIterator<Subject> for SubjectCollection {
    fn from_iter<I: IntoIterator<Item = Subject>>(iter: I) -> Self {
        Self { subjects: iter.into_iter().collect() }
    }
}
