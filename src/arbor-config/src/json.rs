//! Conversion of configurations from and to JSON documents.
//!
//! A configuration maps onto a JSON object. Values become fields with
//! scalar, array or string payloads and subconfigs become nested objects.
//!
//! Two value types cannot be told apart from their plain JSON shape:
//! angles look like doubles and quaternions look like 4-component
//! vectors. These are written as small typed objects instead:
//!
//! ```json
//! { "$__type": "rad", "value": 1.5 }
//! { "$__type": "quaternion", "value": [0.0, 0.0, 0.0, 1.0] }
//! ```

use std::io;

use arbor_math::*;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{value::ValueRef, ConfigValue, Configuration};

/// The reserved key that marks an object as a typed value.
pub const TYPE_KEY: &str = "$__type";

/// The reserved key holding the payload of a typed value.
pub const VALUE_KEY: &str = "value";

const ANGLE_TYPE: &str = "rad";
const QUATERNION_TYPE: &str = "quaternion";

/// Errors that may occur when reading or writing JSON documents.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occured while interacting with the document.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The document is not valid JSON.
    #[error("{0}")]
    Json(serde_json::Error),

    /// The root of the document is something other than an object.
    #[error("root of a configuration document must be an object")]
    NotAnObject,
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match value.classify() {
            Category::Io => Self::Io(value.into()),
            _ => Self::Json(value),
        }
    }
}

/// Options that customize how JSON documents are processed.
#[derive(Clone, Copy, Debug)]
pub struct JsonOptions {
    /// How deeply objects may be nested below the root object.
    ///
    /// Objects past this limit are skipped with a warning. Only
    /// considered when loading.
    pub recursion_limit: i8,
    /// Whether angles and quaternions are written as typed objects.
    ///
    /// Without them, angles are written as plain numbers and
    /// quaternions as 4-component arrays. Such documents load back
    /// as doubles and vectors. Only considered when writing.
    pub typed_wrappers: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            recursion_limit: i8::MAX,
            typed_wrappers: true,
        }
    }
}

fn components<const N: usize>(values: [f32; N]) -> Value {
    Value::Array(values.into_iter().map(Value::from).collect())
}

fn typed(ty: &str, value: Value) -> Value {
    let mut obj = Map::with_capacity(2);
    obj.insert(TYPE_KEY.to_owned(), Value::from(ty));
    obj.insert(VALUE_KEY.to_owned(), value);
    Value::Object(obj)
}

impl ConfigValue {
    /// Converts the value into its JSON representation.
    ///
    /// Empty values produce `null`.
    pub fn to_json(&self) -> Value {
        self.to_json_with(&JsonOptions::default())
    }

    /// Converts the value into its JSON representation using the
    /// given `options`.
    pub fn to_json_with(&self, options: &JsonOptions) -> Value {
        match self.value_ref() {
            ValueRef::Unknown => Value::Null,
            ValueRef::Boolean(v) => Value::Bool(v),
            ValueRef::Integer(v) => Value::from(v),
            ValueRef::Double(v) => Value::from(v),
            ValueRef::Angle(v) if options.typed_wrappers => typed(ANGLE_TYPE, Value::from(v.0)),
            ValueRef::Angle(v) => Value::from(v.0),
            ValueRef::Vector2(v) => components(v.to_array()),
            ValueRef::Vector3(v) => components(v.to_array()),
            ValueRef::Vector4(v) => components(v.to_array()),
            ValueRef::Quaternion(v) if options.typed_wrappers => {
                typed(QUATERNION_TYPE, components(v.to_array()))
            }
            ValueRef::Quaternion(v) => components(v.to_array()),
            ValueRef::Matrix3(v) => components(v.to_array()),
            ValueRef::Matrix4(v) => components(v.to_array()),
            ValueRef::String(v) => Value::from(v),
        }
    }

    /// Decodes a single JSON field payload into a value.
    ///
    /// Returns [`None`] for payloads that have no value representation,
    /// including objects that are not typed values.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some((*v).into()),
            Value::Number(n) => Some(match n.as_i64().and_then(|v| i32::try_from(v).ok()) {
                Some(v) => v.into(),
                None => n.as_f64()?.into(),
            }),
            Value::String(v) => Some(v.as_str().into()),
            Value::Array(elems) => decode_array(elems),
            Value::Object(obj) => decode_typed(obj),
            Value::Null => None,
        }
    }
}

fn decode_floats(elems: &[Value]) -> Option<Vec<f32>> {
    elems
        .iter()
        .map(|v| v.as_f64().map(|v| v as f32))
        .collect()
}

fn decode_array(elems: &[Value]) -> Option<ConfigValue> {
    let floats = decode_floats(elems)?;
    let value: ConfigValue = match floats.len() {
        2 => Vector2::from_array(floats.try_into().ok()?).into(),
        3 => Vector3::from_array(floats.try_into().ok()?).into(),
        4 => Vector4::from_array(floats.try_into().ok()?).into(),
        9 => Matrix3::from_array(floats.try_into().ok()?).into(),
        16 => Matrix4::from_array(floats.try_into().ok()?).into(),
        _ => return None,
    };

    Some(value)
}

fn decode_typed(obj: &Map<String, Value>) -> Option<ConfigValue> {
    let ty = obj.get(TYPE_KEY)?.as_str()?;
    let value = obj.get(VALUE_KEY)?;

    match ty {
        ANGLE_TYPE => value.as_f64().map(|v| Rad(v as f32).into()),
        QUATERNION_TYPE => {
            let floats: [f32; 4] = decode_floats(value.as_array()?)?.try_into().ok()?;
            Some(Quaternion::from_array(floats).into())
        }
        _ => None,
    }
}

struct Loader {
    remaining_depth: i8,
}

impl Loader {
    fn with_recursion_limit<F>(&mut self, f: F) -> Option<usize>
    where
        F: FnOnce(&mut Self) -> usize,
    {
        if self.remaining_depth <= 0 {
            return None;
        }

        self.remaining_depth -= 1;
        let res = f(self);
        self.remaining_depth += 1;

        Some(res)
    }

    fn load(&mut self, config: &mut Configuration, obj: &Map<String, Value>) -> usize {
        let mut count = 0;

        for (name, value) in obj {
            let decoded = ConfigValue::from_json(value);

            match (value, decoded) {
                (_, Some(value)) => {
                    log::trace!("Loaded '{name}' as {}", value.get_type());
                    config.set(name.as_str(), value);
                    count += 1;
                }

                // Objects that do not decode as typed values are subconfigs,
                // even if one of their values is named like the type key.
                (Value::Object(child), None) => {
                    if child.contains_key(TYPE_KEY) {
                        log::debug!("Loading '{name}' as a subconfig; not a known typed value");
                    }

                    let loaded = self.with_recursion_limit(|this| {
                        let subconfig = config.edit_subconfig(name);
                        this.load(subconfig, child)
                    });

                    match loaded {
                        Some(loaded) => count += loaded,
                        None => log::warn!("Skipping '{name}': nesting exceeds the recursion limit"),
                    }
                }

                (value, None) => log::warn!("Skipping '{name}': unsupported value {value}"),
            }
        }

        count
    }
}

impl Configuration {
    /// Loads all fields of the JSON object `root` into this
    /// configuration.
    ///
    /// Existing entries of the same name are replaced. Returns the
    /// number of values that were loaded, including those loaded into
    /// subconfigs.
    pub fn load_from_json(&mut self, root: &Value) -> usize {
        self.load_from_json_with(root, &JsonOptions::default())
    }

    /// Loads all fields of the JSON object `root` into this
    /// configuration using the given `options`.
    pub fn load_from_json_with(&mut self, root: &Value, options: &JsonOptions) -> usize {
        let Some(obj) = root.as_object() else {
            log::warn!("Configuration documents must be JSON objects; nothing loaded");
            return 0;
        };

        let mut loader = Loader {
            remaining_depth: options.recursion_limit,
        };
        let count = loader.load(self, obj);

        log::debug!("Loaded {count} values from JSON");
        count
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self, Error> {
        let root: Value = serde_json::from_str(data)?;
        Self::from_json_value(&root, &JsonOptions::default())
    }

    /// Parses a configuration from JSON data in `reader`.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, Error> {
        Self::from_reader_with(reader, &JsonOptions::default())
    }

    /// Parses a configuration from JSON data in `reader` using the
    /// given `options`.
    pub fn from_reader_with<R: io::Read>(reader: R, options: &JsonOptions) -> Result<Self, Error> {
        let root: Value = serde_json::from_reader(reader)?;
        Self::from_json_value(&root, options)
    }

    fn from_json_value(root: &Value, options: &JsonOptions) -> Result<Self, Error> {
        if !root.is_object() {
            return Err(Error::NotAnObject);
        }

        let mut config = Self::new();
        config.load_from_json_with(root, options);
        Ok(config)
    }

    /// Converts the whole tree into a JSON object.
    pub fn write_to_json(&self) -> Value {
        self.write_to_json_with(&JsonOptions::default())
    }

    /// Converts the whole tree into a JSON object using the given
    /// `options`.
    pub fn write_to_json_with(&self, options: &JsonOptions) -> Value {
        let mut obj = Map::with_capacity(self.num_entries());
        self.write_values(&mut obj, options);
        self.write_subconfigs(&mut obj, options);
        Value::Object(obj)
    }

    /// Writes all values of this configuration into `obj`.
    ///
    /// Subconfigs are not written.
    pub fn write_values_to_json(&self, obj: &mut Map<String, Value>) {
        self.write_values(obj, &JsonOptions::default());
    }

    /// Writes all subconfigs of this configuration as nested objects
    /// into `obj`.
    pub fn write_subconfigs_to_json(&self, obj: &mut Map<String, Value>) {
        self.write_subconfigs(obj, &JsonOptions::default());
    }

    /// Writes the value at `key` into `obj` under the name `json_name`.
    ///
    /// Logs a warning and writes nothing if there is no such value.
    pub fn write_value_to_json(&self, key: &str, json_name: &str, obj: &mut Map<String, Value>) {
        if self.has_value(key) {
            obj.insert(json_name.to_owned(), self.get_value(key).to_json());
        } else {
            log::warn!("Key '{key}' not present in configuration; not written to JSON");
        }
    }

    fn write_values(&self, obj: &mut Map<String, Value>, options: &JsonOptions) {
        for (key, value) in self.values() {
            obj.insert(key.clone(), value.to_json_with(options));
        }
    }

    fn write_subconfigs(&self, obj: &mut Map<String, Value>, options: &JsonOptions) {
        for (name, config) in self.subconfigs() {
            if obj.contains_key(name) {
                log::warn!("Subconfig '{name}' shadows a value of the same name in JSON output");
            }

            let written = config.write_to_json_with(options);
            if config.has_value(TYPE_KEY) {
                let ambiguous = written.as_object().and_then(decode_typed).is_some();
                if ambiguous {
                    log::warn!(
                        "Subconfig '{name}' is written like a typed value and will not load back as a subconfig"
                    );
                } else {
                    log::debug!("Subconfig '{name}' holds a value named '{TYPE_KEY}'");
                }
            }
            obj.insert(name.clone(), written);
        }
    }

    /// Writes the tree as compact JSON into `writer`.
    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer(writer, &self.write_to_json()).map_err(Into::into)
    }

    /// Writes the tree as pretty-printed JSON into `writer`.
    pub fn to_writer_pretty<W: io::Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, &self.write_to_json()).map_err(Into::into)
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.write_to_json().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integers_outside_i32_become_doubles() {
        let v = ConfigValue::from_json(&json!(5_000_000_000i64)).unwrap();
        assert_eq!(v.get::<f64>(), 5_000_000_000.0);

        let v = ConfigValue::from_json(&json!(-7)).unwrap();
        assert_eq!(v.get::<i32>(), -7);
    }

    #[test]
    fn unsupported_payloads() {
        assert!(ConfigValue::from_json(&Value::Null).is_none());
        assert!(ConfigValue::from_json(&json!([1.0])).is_none());
        assert!(ConfigValue::from_json(&json!([1.0, "x"])).is_none());
        assert!(ConfigValue::from_json(&json!({ "$__type": "deg", "value": 1 })).is_none());
        assert!(ConfigValue::from_json(&json!({ "a": 1 })).is_none());
    }

    #[test]
    fn recursion_limit_restores_depth() {
        let mut loader = Loader { remaining_depth: 1 };
        let outer = loader.with_recursion_limit(|l| {
            assert!(l.with_recursion_limit(|_| 1).is_none());
            2
        });
        assert_eq!(outer, Some(2));
        assert_eq!(loader.remaining_depth, 1);
    }
}
