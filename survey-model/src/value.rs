use crate::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use survey_types::{Level, Relation};

/// The payload of a [`crate::KeyValueRecord`].
///
/// On the wire this is a plain JSON value (`"x"`, `3`, `{..}`, `[{..}]`);
/// in Rust the variant is always explicit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Text(String),
    Number(f64),
    Object(Map<String, Value>),
    List(Vec<Map<String, Value>>),
}

/// Discriminant of a [`RecordValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Number,
    Object,
    List,
}

impl RecordValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            RecordValue::Text(_) => ValueKind::Text,
            RecordValue::Number(_) => ValueKind::Number,
            RecordValue::Object(_) => ValueKind::Object,
            RecordValue::List(_) => ValueKind::List,
        }
    }

    /// Empty text, an empty object and an empty list count as no value.
    /// NaN and infinities count as empty too: JSON has no encoding for them
    /// and they serialize as `null`.
    pub fn is_empty(&self) -> bool {
        match self {
            RecordValue::Text(s) => s.is_empty(),
            RecordValue::Number(n) => !n.is_finite(),
            RecordValue::Object(map) => map.is_empty(),
            RecordValue::List(items) => items.is_empty(),
        }
    }

    /// Converts raw JSON, mapping `null` to `None`.
    pub fn from_json(json: Value) -> ModelResult<Option<Self>> {
        match json {
            Value::Null => Ok(None),
            other => Self::try_from(other).map(Some),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RecordValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RecordValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            RecordValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Map<String, Value>]> {
        match self {
            RecordValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Reads a number payload as a [`Level`] code. Fractional or out-of-range
    /// numbers are not levels.
    pub fn as_level(&self) -> Option<Level> {
        let n = self.as_f64()?;
        if !n.is_finite() || n.fract() != 0.0 {
            return None;
        }
        Level::from_code(n as i64)
    }

    /// Reads a text payload as a [`Relation`] code.
    pub fn as_relation(&self) -> Option<Relation> {
        self.as_str()?.parse().ok()
    }

    /// Looks up a value inside an object payload by JSON pointer (e.g. "/title").
    ///
    /// The pointer must name at least one key: `""` returns `None` rather
    /// than the whole object, which is available from [`Self::as_object`].
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let map = self.as_object()?;
        let path = pointer.strip_prefix('/')?;
        let (head, rest) = match path.split_once('/') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let key = head.replace("~1", "/").replace("~0", "~");
        let found = map.get(&key)?;
        match rest {
            Some(rest) => found.pointer(&format!("/{rest}")),
            None => Some(found),
        }
    }
}

impl TryFrom<Value> for RecordValue {
    type Error = ModelError;

    fn try_from(json: Value) -> Result<Self, Self::Error> {
        match json {
            Value::String(s) => Ok(RecordValue::Text(s)),
            Value::Number(n) => n
                .as_f64()
                .map(RecordValue::Number)
                .ok_or(ModelError::UnsupportedValue("number outside f64 range")),
            Value::Object(map) => Ok(RecordValue::Object(map)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Ok(map),
                    _ => Err(ModelError::UnsupportedValue("array of non-objects")),
                })
                .collect::<ModelResult<Vec<_>>>()
                .map(RecordValue::List),
            Value::Bool(_) => Err(ModelError::UnsupportedValue("boolean")),
            Value::Null => Err(ModelError::UnsupportedValue("null")),
        }
    }
}

impl From<&str> for RecordValue {
    fn from(s: &str) -> Self {
        RecordValue::Text(s.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(s: String) -> Self {
        RecordValue::Text(s)
    }
}

impl From<f64> for RecordValue {
    fn from(n: f64) -> Self {
        RecordValue::Number(n)
    }
}

impl From<i64> for RecordValue {
    fn from(n: i64) -> Self {
        RecordValue::Number(n as f64)
    }
}

impl From<i32> for RecordValue {
    fn from(n: i32) -> Self {
        RecordValue::Number(f64::from(n))
    }
}

impl From<Level> for RecordValue {
    fn from(level: Level) -> Self {
        RecordValue::Number(f64::from(level.code()))
    }
}

impl From<Relation> for RecordValue {
    fn from(relation: Relation) -> Self {
        RecordValue::Text(relation.code().to_string())
    }
}

impl From<Map<String, Value>> for RecordValue {
    fn from(map: Map<String, Value>) -> Self {
        RecordValue::Object(map)
    }
}

impl From<Vec<Map<String, Value>>> for RecordValue {
    fn from(items: Vec<Map<String, Value>>) -> Self {
        RecordValue::List(items)
    }
}
