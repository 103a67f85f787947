//! Core data model for bindings exports.
//!
//! A bindings file describes a set of named bindings (`Definition`s). Each
//! binding carries a handful of `Property` records addressed by a slot (the
//! `RefAddr` ordinal in the export), and each property is assembled from
//! several input lines.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Type code marking the property that holds the queue name.
pub const QUEUE_TYPE: &str = "QU";
/// Type code marking the property that holds the target client flag (0 = JMS, 1 = MQ).
pub const TARGET_CLIENT_TYPE: &str = "TC";
/// Type code marking the property that holds the coded character set id.
pub const CCSID_TYPE: &str = "CCS";

/// A single property as serialized by the MQ administration tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub content: String,
    #[serde(rename = "type")]
    pub type_code: String,
    pub encoding: String,
}

impl Property {
    /// Mutable access to the field named by an export attribute.
    ///
    /// Only `Content`, `Type` and `Encoding` are recognised; any other name
    /// yields `None` and the caller drops the assignment.
    pub fn field_mut(&mut self, attr_name: &str) -> Option<&mut String> {
        match attr_name {
            "Content" => Some(&mut self.content),
            "Type" => Some(&mut self.type_code),
            "Encoding" => Some(&mut self.encoding),
            _ => None,
        }
    }
}

/// Slot identifier of a property within a definition.
///
/// Slots compare numerically when both sides are unsigned integers, so `"2"`
/// sorts before `"10"`. Numeric slots sort ahead of anything else, and
/// non-numeric slots fall back to plain string order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slot(String);

impl Slot {
    pub fn new(slot: impl Into<String>) -> Self {
        Self(slot.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn ordinal(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.ordinal(), other.ordinal()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which client runtime a binding targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetClient {
    Jms,
    Mq,
}

impl TargetClient {
    /// Classify the raw content of a `TC` property. Only `"0"` means JMS.
    pub fn from_content(content: &str) -> Self {
        if content == "0" {
            TargetClient::Jms
        } else {
            TargetClient::Mq
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetClient::Jms => "JMS",
            TargetClient::Mq => "MQ",
        }
    }
}

impl fmt::Display for TargetClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named binding together with its properties, keyed by slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub name: String,
    pub properties: BTreeMap<Slot, Property>,
}

impl Definition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), properties: BTreeMap::new() }
    }

    /// Apply one `attr_name=value` assignment to the property at `slot`,
    /// creating the property first if this slot has not been seen.
    ///
    /// Returns `false` when the attribute name is not one we track; the
    /// property is still created in that case.
    pub fn update_property(&mut self, slot: &str, attr_name: &str, value: &str) -> bool {
        let property = self.properties.entry(Slot::new(slot)).or_default();
        match property.field_mut(attr_name) {
            Some(field) => {
                *field = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Content of the lowest-slot property carrying `type_code`, if any.
    pub fn lookup(&self, type_code: &str) -> Option<&str> {
        self.properties
            .values()
            .find(|p| p.type_code == type_code)
            .map(|p| p.content.as_str())
    }

    /// Queue name, or the empty string when the binding has none.
    pub fn queue(&self) -> &str {
        self.lookup(QUEUE_TYPE).unwrap_or_default()
    }

    /// Coded character set id, or the empty string when absent.
    pub fn ccsid(&self) -> &str {
        self.lookup(CCSID_TYPE).unwrap_or_default()
    }

    pub fn target_client(&self) -> TargetClient {
        TargetClient::from_content(self.lookup(TARGET_CLIENT_TYPE).unwrap_or_default())
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} contains {{", self.name)?;
        for (i, (slot, prop)) in self.properties.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{}: {{content={}, type={}, encoding={}}}",
                slot, prop.content, prop.type_code, prop.encoding
            )?;
        }
        f.write_str("}")
    }
}

/// Sort definitions by name (ascending, case-sensitive byte order).
pub fn sort_by_name(definitions: &mut [Definition]) {
    definitions.sort_by(|a, b| a.name.cmp(&b.name));
}
