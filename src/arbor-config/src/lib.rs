//! Typed, hierarchical configuration trees.
//!
//! A [`Configuration`] maps names to [`ConfigValue`]s, each tagged with
//! one of a closed set of [`ConfigValType`]s, and to nested child
//! configurations. Trees can be merged, searched, counted and converted
//! from and to JSON documents or flat INI-style [`ConfigGroup`]s.
//!
//! Accessors never fail outright. Looking up a missing or mistyped value
//! logs a diagnostic through the [`log`] facade and produces a default.
//!
//! ```
//! use arbor_config::Configuration;
//!
//! let mut config = Configuration::new();
//! config.set("count", 7);
//! config.edit_subconfig("pose").set("x", 1.5);
//!
//! assert_eq!(config.find_value("x"), ["pose", "x"]);
//! assert_eq!(config.config_tree_num_values(), 2);
//! assert_eq!(config.write_to_json().to_string(), r#"{"count":7,"pose":{"x":1.5}}"#);
//! ```

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use arbor_math as math;

pub mod group;
pub use group::ConfigGroup;

pub mod json;
pub use json::{Error, JsonOptions};

mod node;
pub use node::*;

pub mod value;
pub use value::{ConfigType, ConfigValType, ConfigValue, ValueRef};
