//! Flat, string-typed configuration groups in INI form.
//!
//! Older tooling consumes configurations as INI files where every value
//! is a plain string and nested groups are addressed by slash-separated
//! paths. [`ConfigGroup`] models such a file; it is write-only in the
//! sense that nothing converts it back into a [`Configuration`].

use std::fmt::{self, Write};

use crate::{value::ValueRef, ConfigValue, Configuration};

/// A group of string values and named subgroups.
///
/// Unlike [`Configuration`], both values and groups keep duplicates if
/// added through [`add_value`](Self::add_value) or
/// [`add_group`](Self::add_group).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigGroup {
    values: Vec<(String, String)>,
    groups: Vec<(String, ConfigGroup)>,
}

impl ConfigGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first value named `key`, appending one if none exists.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        match self.values.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.into(),
            None => self.values.push((key.to_owned(), value.into())),
        }
    }

    /// Appends a value named `key`, even if one already exists.
    pub fn add_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.push((key.into(), value.into()));
    }

    /// Gets the first value named `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over all values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Appends a new, empty subgroup named `name` and returns it.
    pub fn add_group(&mut self, name: impl Into<String>) -> &mut ConfigGroup {
        self.groups.push((name.into(), ConfigGroup::new()));
        let last = self.groups.len() - 1;
        &mut self.groups[last].1
    }

    /// Gets the first subgroup named `name`.
    pub fn group(&self, name: &str) -> Option<&ConfigGroup> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, g)| g)
    }

    /// Iterates over all subgroups in insertion order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &ConfigGroup)> {
        self.groups.iter().map(|(n, g)| (n.as_str(), g))
    }

    #[inline]
    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.groups.is_empty()
    }

    fn write_values(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.values {
            f.write_str(key)?;
            f.write_char('=')?;
            write_escaped(f, value)?;
            f.write_char('\n')?;
        }
        Ok(())
    }

    fn write_groups(
        &self,
        f: &mut fmt::Formatter<'_>,
        path: &str,
        wrote_any: &mut bool,
    ) -> fmt::Result {
        for (name, group) in &self.groups {
            let path = if path.is_empty() {
                name.clone()
            } else {
                format!("{path}/{name}")
            };

            if *wrote_any {
                f.write_char('\n')?;
            }
            writeln!(f, "[{path}]")?;
            group.write_values(f)?;
            *wrote_any = true;

            group.write_groups(f, &path, wrote_any)?;
        }
        Ok(())
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    if value.contains('\n') {
        write!(f, "\"\"\"\n{value}\n\"\"\"")
    } else if value.starts_with(char::is_whitespace) || value.ends_with(char::is_whitespace) {
        write!(f, "\"{value}\"")
    } else {
        f.write_str(value)
    }
}

/// Renders the group as INI text.
///
/// Top-level values come first, followed by one `[path]` section per
/// subgroup with nested paths joined by `/`.
impl fmt::Display for ConfigGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_values(f)?;
        let mut wrote_any = !self.values.is_empty();
        self.write_groups(f, "", &mut wrote_any)
    }
}

fn join_components(values: &[f32]) -> String {
    values
        .iter()
        .map(f32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl ConfigValue {
    /// Gets the flat string form used in [`ConfigGroup`]s.
    ///
    /// Math types are written as their space-separated components, and
    /// matrices in column-major order. Empty values have no flat form.
    pub fn to_flat_string(&self) -> Option<String> {
        let s = match self.value_ref() {
            ValueRef::Unknown => return None,
            ValueRef::Boolean(v) => v.to_string(),
            ValueRef::Integer(v) => v.to_string(),
            ValueRef::Angle(v) => v.0.to_string(),
            ValueRef::Double(v) => v.to_string(),
            ValueRef::Vector2(v) => join_components(&v.to_array()),
            ValueRef::Vector3(v) => join_components(&v.to_array()),
            ValueRef::Vector4(v) => join_components(&v.to_array()),
            ValueRef::Quaternion(v) => join_components(&v.to_array()),
            ValueRef::Matrix3(v) => join_components(&v.to_array()),
            ValueRef::Matrix4(v) => join_components(&v.to_array()),
            ValueRef::String(v) => v.to_owned(),
        };

        Some(s)
    }

    /// Stores the flat string form of this value in `group` under `key`.
    ///
    /// Returns `false` and leaves `group` untouched for empty values.
    pub fn put_value_in_config_group(&self, key: &str, group: &mut ConfigGroup) -> bool {
        match self.to_flat_string() {
            Some(s) => {
                group.set_value(key, s);
                true
            }
            None => {
                log::warn!("Value '{key}' has unknown type; not written to config group");
                false
            }
        }
    }
}

impl Configuration {
    /// Builds a [`ConfigGroup`] holding the whole tree.
    ///
    /// Every subconfig becomes a subgroup of the same name.
    pub fn config_group(&self) -> ConfigGroup {
        let mut group = ConfigGroup::new();
        self.put_all_values_in_config_group(&mut group);
        group
    }

    fn put_all_values_in_config_group(&self, group: &mut ConfigGroup) {
        for (key, value) in self.values() {
            value.put_value_in_config_group(key, group);
        }

        for (name, config) in self.subconfigs() {
            let subgroup = group.add_group(name.as_str());
            config.put_all_values_in_config_group(subgroup);
        }
    }
}
