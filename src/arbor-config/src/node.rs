//! Hierarchical trees of configuration values.

use std::{fmt, mem};

use indexmap::{map, IndexMap};

use crate::value::{ConfigType, ConfigValType, ConfigValue};

/// Mapping of value names to their values.
pub type ValueMap = IndexMap<String, ConfigValue>;

/// Mapping of subconfig names to the subconfigs.
pub type ConfigMap = IndexMap<String, Configuration>;

/// A tree of named [`ConfigValue`]s and named child configurations.
///
/// Values and subconfigs live in separate name spaces, so the same name
/// may refer to both a value and a subconfig. Subconfigs are exclusively
/// owned by their parent; cloning a configuration deep-copies the whole
/// tree.
///
/// Lookups of missing or mistyped entries never fail. They log a
/// diagnostic and hand back a default instead.
///
/// # Depth
///
/// Dropping a configuration never recurses, so a tree of any depth can
/// be released safely. Every other whole-tree operation (cloning,
/// comparison, counting, searching, merging and JSON output) recurses
/// once per level of nesting. Trees loaded from JSON are bounded by
/// [`JsonOptions::recursion_limit`](crate::JsonOptions::recursion_limit);
/// trees built in code are only as deep as their builder makes them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Configuration {
    values: ValueMap,
    subconfigs: ConfigMap,
}

impl Drop for Configuration {
    fn drop(&mut self) {
        // Flatten the tree so deeply nested configurations
        // don't overflow the stack when dropped.
        if self.subconfigs.is_empty() {
            return;
        }

        let mut stack: Vec<_> = mem::take(&mut self.subconfigs).into_values().collect();
        while let Some(mut config) = stack.pop() {
            stack.extend(mem::take(&mut config.subconfigs).into_values());
        }
    }
}

impl Configuration {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------- Values ----------------

    /// Gets a copy of the value at `key`.
    ///
    /// Returns an empty [`ConfigValue`] with a warning if there is none.
    pub fn get_value(&self, key: &str) -> ConfigValue {
        match self.values.get(key) {
            Some(value) => value.clone(),
            None => {
                log::warn!("Key '{key}' not present in configuration");
                ConfigValue::new()
            }
        }
    }

    /// Gets the value at `key` as `T`.
    ///
    /// If there is no value or it is not of type `T`, an error is
    /// logged and the default value of `T` is returned.
    pub fn get<T: ConfigType>(&self, key: &str) -> T {
        match self.values.get(key).and_then(ConfigValue::try_get::<T>) {
            Some(value) => value,
            None => {
                log::error!("Key '{key}' not present in configuration as {}", T::TYPE);
                T::default()
            }
        }
    }

    /// Gets the type of the value at `key`.
    ///
    /// Logs an error and returns [`ConfigValType::Unknown`] if absent.
    pub fn get_type(&self, key: &str) -> ConfigValType {
        match self.values.get(key) {
            Some(value) => value.get_type(),
            None => {
                log::error!("Key '{key}' not present in configuration");
                ConfigValType::Unknown
            }
        }
    }

    /// Gets a human-readable representation of the value at `key`.
    ///
    /// When absent, the returned string explains that instead.
    pub fn get_as_string(&self, key: &str) -> String {
        match self.values.get(key) {
            Some(value) => value.get_as_string(),
            None => {
                let msg = format!("Key '{key}' does not represent a valid value in this configuration");
                log::warn!("{msg}");
                msg
            }
        }
    }

    /// Stores `value` at `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes the value at `key` and returns it.
    ///
    /// Returns an empty [`ConfigValue`] with a warning if there is none.
    pub fn remove(&mut self, key: &str) -> ConfigValue {
        match self.values.shift_remove(key) {
            Some(value) => value,
            None => {
                log::warn!("Key '{key}' not present in configuration");
                ConfigValue::new()
            }
        }
    }

    /// Removes the value at `key` if it is of type `T` and returns it.
    ///
    /// Values of other types are left in place; a warning is logged and
    /// the default value of `T` is returned.
    pub fn remove_as<T: ConfigType>(&mut self, key: &str) -> T {
        if self.has_key_of_type(key, T::TYPE) {
            if let Some(value) = self.values.shift_remove(key) {
                return value.get();
            }
        }

        log::warn!("Key '{key}' not present in configuration as {}", T::TYPE);
        T::default()
    }

    /// Whether a value is stored at `key`. Subconfigs are not checked.
    #[inline]
    pub fn has_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Whether the value at `key` is of type `ty`.
    pub fn has_key_of_type(&self, key: &str, ty: ConfigValType) -> bool {
        self.values
            .get(key)
            .is_some_and(|value| value.get_type() == ty)
    }

    /// Gets the keys of all values. Subconfigs are not included.
    pub fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    /// Gets the keys of all values of type `ty`.
    pub fn stored_keys(&self, ty: ConfigValType) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(_, value)| value.get_type() == ty)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Gets a mapping of every value key to the type stored there.
    pub fn value_types(&self) -> IndexMap<&str, ConfigValType> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.get_type()))
            .collect()
    }

    /// Iterates over all values in insertion order.
    pub fn values(&self) -> map::Iter<'_, String, ConfigValue> {
        self.values.iter()
    }

    // ---------------- Counting ----------------

    /// Gets the number of values and subconfigs in this configuration.
    ///
    /// Each subconfig counts as a single entry.
    #[inline]
    pub fn num_entries(&self) -> usize {
        self.values.len() + self.subconfigs.len()
    }

    /// Gets the number of values and subconfigs in the whole tree.
    pub fn config_tree_num_entries(&self) -> usize {
        self.num_entries()
            + self
                .subconfigs
                .values()
                .map(Self::config_tree_num_entries)
                .sum::<usize>()
    }

    /// Gets the number of direct subconfigs.
    #[inline]
    pub fn num_subconfigs(&self) -> usize {
        self.subconfigs.len()
    }

    /// Gets the number of subconfigs nested anywhere in the tree.
    pub fn config_tree_num_subconfigs(&self) -> usize {
        self.subconfigs.len()
            + self
                .subconfigs
                .values()
                .map(Self::config_tree_num_subconfigs)
                .sum::<usize>()
    }

    /// Gets the number of values in this configuration.
    #[inline]
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    /// Gets the number of values held anywhere in the tree.
    pub fn config_tree_num_values(&self) -> usize {
        self.values.len()
            + self
                .subconfigs
                .values()
                .map(Self::config_tree_num_values)
                .sum::<usize>()
    }

    // ---------------- Searching ----------------

    /// Searches the tree for a value named `key`.
    ///
    /// Returns the names of the subconfigs leading to the configuration
    /// holding the value, followed by `key` itself. The result is empty
    /// if no such value exists.
    ///
    /// The search is depth-first: the values of a configuration are
    /// checked before its subconfigs, and subconfigs are visited in
    /// insertion order. The first match wins.
    pub fn find_value(&self, key: &str) -> Vec<String> {
        let mut breadcrumb = Vec::new();
        if self.find_value_internal(key, &mut breadcrumb) {
            breadcrumb.push(key.to_owned());
        }
        breadcrumb
    }

    fn find_value_internal(&self, key: &str, breadcrumb: &mut Vec<String>) -> bool {
        if self.values.contains_key(key) {
            return true;
        }

        for (name, config) in &self.subconfigs {
            breadcrumb.push(name.clone());
            if config.find_value_internal(key, breadcrumb) {
                return true;
            }
            breadcrumb.pop();
        }

        false
    }

    // ---------------- Subconfigs ----------------

    /// Whether a subconfig named `name` exists.
    #[inline]
    pub fn has_subconfig(&self, name: &str) -> bool {
        self.subconfigs.contains_key(name)
    }

    /// Gets the names of all direct subconfigs.
    pub fn subconfig_keys(&self) -> Vec<&str> {
        self.subconfigs.keys().map(String::as_str).collect()
    }

    /// Iterates over all direct subconfigs in insertion order.
    pub fn subconfigs(&self) -> map::Iter<'_, String, Configuration> {
        self.subconfigs.iter()
    }

    /// Gets an independent copy of the subconfig named `name`.
    ///
    /// Changes to the copy never affect this configuration.
    pub fn subconfig_copy<T: From<Configuration>>(&self, name: &str) -> Option<T> {
        self.subconfigs.get(name).cloned().map(T::from)
    }

    /// Borrows the subconfig named `name` for reading.
    ///
    /// # Panics
    ///
    /// Panics when no such subconfig exists. Use
    /// [`try_subconfig_view`](Self::try_subconfig_view) when its
    /// presence is not guaranteed.
    pub fn subconfig_view(&self, name: &str) -> &Configuration {
        match self.subconfigs.get(name) {
            Some(config) => config,
            None => panic!("Subconfiguration with name '{name}' not found in configuration"),
        }
    }

    /// Borrows the subconfig named `name` for reading, if it exists.
    #[inline]
    pub fn try_subconfig_view(&self, name: &str) -> Option<&Configuration> {
        self.subconfigs.get(name)
    }

    /// Borrows the subconfig named `name` for modification, creating
    /// an empty one first if necessary.
    pub fn edit_subconfig(&mut self, name: &str) -> &mut Configuration {
        if !self.subconfigs.contains_key(name) {
            self.subconfigs.insert(name.to_owned(), Configuration::new());
        }
        &mut self.subconfigs[name]
    }

    /// Stores `config` as the subconfig named `name`.
    ///
    /// An existing subconfig of the same name is replaced.
    pub fn set_subconfig(&mut self, name: impl Into<String>, config: Configuration) {
        self.subconfigs.insert(name.into(), config);
    }

    /// Removes the subconfig named `name` and returns it.
    ///
    /// Logs a warning and returns [`None`] when there is none.
    pub fn remove_subconfig(&mut self, name: &str) -> Option<Configuration> {
        let config = self.subconfigs.shift_remove(name);
        if config.is_none() {
            log::warn!("Name '{name}' not present in map of subconfigurations");
        }
        config
    }

    /// Gets the number of entries in the subconfig named `name`.
    ///
    /// Logs a warning and returns 0 when there is none.
    pub fn subconfig_num_entries(&self, name: &str) -> usize {
        match self.subconfigs.get(name) {
            Some(config) => config.num_entries(),
            None => {
                log::warn!("No subconfig found named '{name}'");
                0
            }
        }
    }

    /// Gets the number of entries in the whole tree of the subconfig
    /// named `name`.
    ///
    /// Logs a warning and returns 0 when there is none.
    pub fn subconfig_tree_num_entries(&self, name: &str) -> usize {
        match self.subconfigs.get(name) {
            Some(config) => config.config_tree_num_entries(),
            None => {
                log::warn!("No subconfig found named '{name}'");
                0
            }
        }
    }

    // ---------------- Merging ----------------

    /// Merges `src` into this configuration, recursing into subconfigs.
    ///
    /// Values in `src` replace values of the same name here; subconfigs
    /// missing here are created. Nothing that `src` does not mention
    /// is removed.
    pub fn overwrite_with_config(&mut self, src: &Configuration) {
        if src.num_entries() == 0 {
            return;
        }

        for (key, value) in &src.values {
            self.values.insert(key.clone(), value.clone());
        }

        for (name, config) in &src.subconfigs {
            self.edit_subconfig(name).overwrite_with_config(config);
        }
    }

    // ---------------- Formatting ----------------

    /// Formats every value in the tree, one per line.
    ///
    /// Each line starts with `new_line`. Subconfigs are formatted after
    /// the values with one more tab of indentation.
    pub fn all_vals_as_string(&self, new_line: &str) -> String {
        if self.num_entries() == 0 {
            return format!("{new_line}<empty>");
        }

        let mut res = String::new();
        for (key, value) in &self.values {
            res.push_str(&format!("{new_line}{key}:{value}"));
        }

        let sub_new_line = format!("{new_line}\t");
        for (name, config) in &self.subconfigs {
            res.push_str(&format!(
                "{new_line}Subconfig {name}:{}",
                config.all_vals_as_string(&sub_new_line)
            ));
        }

        res
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.all_vals_as_string("\n"))
    }
}
