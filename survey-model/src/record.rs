use crate::{MediaLookup, MediaRef, ModelResult, RecordValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One named setting or answer.
///
/// The name is the lookup key; keeping it unique is the owning store's job.
/// Records are never edited in place: [`with_value`](Self::with_value) and
/// [`with_media`](Self::with_media) return a replacement.
///
/// Construction does not validate. Call [`crate::validate`] before handing a
/// record to anything with side effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueRecord {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: Option<RecordValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    media: Option<MediaRef>,
}

/// Raw JSON input before the value is mapped to a [`RecordValue`].
#[derive(Deserialize)]
struct RawRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Value,
    #[serde(default)]
    media: Option<MediaRef>,
}

impl KeyValueRecord {
    pub fn new(name: impl Into<String>, value: impl Into<RecordValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            media: None,
        }
    }

    /// Builds a record from a `{name, value, media?}` JSON object.
    ///
    /// Missing name becomes `""` and missing or `null` value becomes `None`,
    /// so both surface as violations rather than parse errors. A value with
    /// no matching shape (e.g. a boolean) is an error.
    pub fn from_json(json: Value) -> ModelResult<Self> {
        let raw: RawRecord = serde_json::from_value(json)?;
        Ok(Self {
            name: raw.name.unwrap_or_default(),
            value: RecordValue::from_json(raw.value)?,
            media: raw.media,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<&RecordValue> {
        self.value.as_ref()
    }

    pub fn media(&self) -> Option<&MediaRef> {
        self.media.as_ref()
    }

    /// Replacement record carrying `value`.
    #[must_use]
    pub fn with_value(self, value: impl Into<RecordValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..self
        }
    }

    /// Replacement record referencing `media`.
    #[must_use]
    pub fn with_media(self, media: impl Into<MediaRef>) -> Self {
        Self {
            media: Some(media.into()),
            ..self
        }
    }

    /// Resolves the media reference through the owning store, if any.
    pub fn resolve_media<L: MediaLookup>(&self, lookup: &L) -> Option<L::Media> {
        self.media.as_ref().and_then(|m| lookup.lookup(&m.id()))
    }

    /// Extract a string from an object value using a JSON pointer (e.g., "/title").
    pub fn get_str(&self, pointer: &str) -> Option<&str> {
        self.value()?.pointer(pointer).and_then(|v| v.as_str())
    }

    /// Extract a boolean from an object value using a JSON pointer.
    pub fn get_bool(&self, pointer: &str) -> Option<bool> {
        self.value()?.pointer(pointer).and_then(|v| v.as_bool())
    }

    /// Extract a number from an object value using a JSON pointer.
    pub fn get_number(&self, pointer: &str) -> Option<f64> {
        self.value()?.pointer(pointer).and_then(|v| v.as_f64())
    }
}
