//! Property descriptors and the value groups a query returns per property.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::RawValue;

/// Type id of date properties.
pub const TYPE_TIME: &str = "_dat";
/// Type id of page properties.
pub const TYPE_PAGE: &str = "_wpg";
pub const TYPE_TEXT: &str = "_txt";
pub const TYPE_NUMBER: &str = "_num";
pub const TYPE_BOOLEAN: &str = "_boo";
pub const TYPE_URI: &str = "_uri";

/// The printed property of a query column: its label and declared type id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    label: String,
    type_id: String,
}

impl PropertyDescriptor {
    pub fn new(label: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self { label: label.into(), type_id: type_id.into() }
    }

    /// Date-typed property.
    pub fn time(label: impl Into<String>) -> Self {
        Self::new(label, TYPE_TIME)
    }

    /// Page-typed property.
    pub fn page(label: impl Into<String>) -> Self {
        Self::new(label, TYPE_PAGE)
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(label, TYPE_TEXT)
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn type_id(&self) -> &str { &self.type_id }
}

/// All values one property has on one subject, in result order.
///
/// Most properties hold a single value, so the values live inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValueCollection {
    property: PropertyDescriptor,
    #[serde(default)]
    values: SmallVec<[RawValue; 1]>,
}

impl PropertyValueCollection {
    pub fn new(property: PropertyDescriptor, values: impl IntoIterator<Item = RawValue>) -> Self {
        Self { property, values: values.into_iter().collect() }
    }

    pub fn property(&self) -> &PropertyDescriptor { &self.property }
    pub fn label(&self) -> &str { self.property.label() }
    pub fn type_id(&self) -> &str { self.property.type_id() }
    pub fn values(&self) -> &[RawValue] { &self.values }
    pub fn first(&self) -> Option<&RawValue> { self.values.first() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn len(&self) -> usize { self.values.len() }
}
