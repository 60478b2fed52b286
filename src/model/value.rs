//! Raw data items as a semantic query returns them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PageIdentity, TemporalValue};

/// One value of one property on one subject.
///
/// Covers the data item kinds a query result carries:
/// - Temporal: Time
/// - Reference: Page, Uri
/// - Scalars: Text, Number, Bool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum RawValue {
    Time(TemporalValue),
    Page(PageIdentity),
    Uri(String),
    Text(String),
    Number(f64),
    Bool(bool),
}

// ============================================================================
// Type checking
// ============================================================================

impl RawValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Time(_) => "TIME",
            RawValue::Page(_) => "PAGE",
            RawValue::Uri(_) => "URI",
            RawValue::Text(_) => "TEXT",
            RawValue::Number(_) => "NUMBER",
            RawValue::Bool(_) => "BOOLEAN",
        }
    }

    pub fn as_time(&self) -> Option<&TemporalValue> {
        match self {
            RawValue::Time(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_page(&self) -> Option<&PageIdentity> {
        match self {
            RawValue::Page(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) | RawValue::Uri(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<TemporalValue> for RawValue { fn from(v: TemporalValue) -> Self { RawValue::Time(v) } }
impl From<PageIdentity> for RawValue { fn from(v: PageIdentity) -> Self { RawValue::Page(v) } }
impl From<String> for RawValue { fn from(v: String) -> Self { RawValue::Text(v) } }
impl From<&str> for RawValue { fn from(v: &str) -> Self { RawValue::Text(v.to_owned()) } }
impl From<f64> for RawValue { fn from(v: f64) -> Self { RawValue::Number(v) } }
impl From<i64> for RawValue { fn from(v: i64) -> Self { RawValue::Number(v as f64) } }
impl From<bool> for RawValue { fn from(v: bool) -> Self { RawValue::Bool(v) } }

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Time(t) => write!(f, "{t}"),
            RawValue::Page(p) => write!(f, "{p}"),
            RawValue::Uri(u) => write!(f, "{u}"),
            RawValue::Text(s) => write!(f, "{s}"),
            RawValue::Number(n) => write!(f, "{n}"),
            RawValue::Bool(b) => write!(f, "{b}"),
        }
    }
}
