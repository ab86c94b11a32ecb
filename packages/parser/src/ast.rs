use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A parsed value: integer, text, or arbitrarily nested array.
///
/// `Clone` performs a structural deep copy, which is what evaluation
/// references rely on for independence of the copied tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(String),
    Array(Vec<Value>),
}

/// One `NAME := value;` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: Value,
}

/// Root document node: every declaration in source order.
///
/// Redeclared names are all retained; shadowing affects reference
/// resolution during parsing, never the declaration sequence itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub declarations: Vec<Declaration>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }
}

// Serialized as a mapping entry per declaration. Streaming the entries keeps
// source order and lets shadowed names appear more than once, which a
// derived map representation would collapse.
impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.declarations.len()))?;
        for declaration in &self.declarations {
            map.serialize_entry(&declaration.name, &declaration.value)?;
        }
        map.end()
    }
}
