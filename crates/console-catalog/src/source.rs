//! Where listing items come from.
//!
//! A listing never fetches; it is handed a slice. [`ItemSource`] is the seam
//! that produces that slice: [`StaticSource`] for the literal datasets and
//! [`JsonSource`] for payloads already obtained from an endpoint or a file.
//!
//! Accepted payload shapes:
//!
//! - a bare array: `[{...}, {...}]`
//! - an envelope: `{"services": [{...}]}`, selected with
//!   [`JsonSource::with_collection`], or picked automatically when the
//!   object has exactly one array member

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use console_core::json::json_kind;
use console_core::{Error, JsonRecord, Result};
use serde_json::Value;

use crate::extension::Extension;
use crate::project::Project;
use crate::service::Service;
use crate::template::Template;

// ============================================================================
// ItemSource
// ============================================================================

/// Produces the items of one listing.
pub trait ItemSource {
    /// The record type produced.
    type Item;

    /// Loads every item, in source order.
    fn load(&self) -> Result<Vec<Self::Item>>;
}

/// Items held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource<T> {
    items: Vec<T>,
}

impl<T> StaticSource<T> {
    /// Wraps a literal array.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone> ItemSource for StaticSource<T> {
    type Item = T;

    fn load(&self) -> Result<Vec<T>> {
        Ok(self.items.clone())
    }
}

// ============================================================================
// FromPayload
// ============================================================================

/// Conversion from one element of a JSON payload array.
pub trait FromPayload: Sized {
    /// Converts `value`, the element at `position` of the payload array.
    fn from_payload(value: Value, position: usize) -> Result<Self>;
}

impl FromPayload for JsonRecord {
    fn from_payload(value: Value, position: usize) -> Result<Self> {
        JsonRecord::from_value(value, position)
    }
}

macro_rules! typed_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromPayload for $ty {
                fn from_payload(value: Value, position: usize) -> Result<Self> {
                    serde_json::from_value(value)
                        .map_err(|e| Error::payload(format!("item {position}: {e}")))
                }
            }
        )*
    };
}

typed_payload!(Template, Extension, Project, Service);

// ============================================================================
// JsonSource
// ============================================================================

/// Items parsed from a JSON payload.
#[derive(Debug, Clone)]
pub struct JsonSource<T> {
    text: String,
    origin: Option<PathBuf>,
    collection: Option<String>,
    _item: PhantomData<fn() -> T>,
}

impl<T: FromPayload> JsonSource<T> {
    /// A payload held in memory.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: None,
            collection: None,
            _item: PhantomData,
        }
    }

    /// Reads a payload from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Ok(Self {
            origin: Some(path.to_path_buf()),
            ..Self::from_text(text)
        })
    }

    /// Takes the array from the `name` member of an envelope object.
    pub fn with_collection(mut self, name: impl Into<String>) -> Self {
        self.collection = Some(name.into());
        self
    }

    /// File the payload was read from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    fn items(&self, payload: Value) -> Result<Vec<Value>> {
        match payload {
            Value::Array(items) => Ok(items),
            Value::Object(mut members) => match &self.collection {
                Some(name) => match members.remove(name) {
                    Some(Value::Array(items)) => Ok(items),
                    Some(other) => Err(Error::payload(format!(
                        "member '{name}' is {}, expected an array",
                        json_kind(&other)
                    ))),
                    None => Err(Error::payload(format!("no member named '{name}'"))),
                },
                None => {
                    let mut arrays = members.into_iter().filter(|(_, v)| v.is_array());
                    match (arrays.next(), arrays.next()) {
                        (Some((_, Value::Array(items))), None) => Ok(items),
                        _ => Err(Error::payload(
                            "object payload needs exactly one array member or a collection name",
                        )),
                    }
                }
            },
            other => Err(Error::payload(format!(
                "payload is {}, expected an array or an object",
                json_kind(&other)
            ))),
        }
    }
}

impl<T: FromPayload> ItemSource for JsonSource<T> {
    type Item = T;

    fn load(&self) -> Result<Vec<T>> {
        let payload: Value = serde_json::from_str(&self.text)?;
        let items = self.items(payload)?;
        log::debug!(
            "loaded {} items from {}",
            items.len(),
            self.origin
                .as_ref()
                .map_or_else(|| "inline payload".to_string(), |p| p.display().to_string())
        );
        items
            .into_iter()
            .enumerate()
            .map(|(position, value)| T::from_payload(value, position))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
