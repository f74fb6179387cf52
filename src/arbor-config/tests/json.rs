use std::{fs, io, path::Path};

use arbor_config::{math::*, *};
use serde_json::{json, Value};

fn read_document<P: AsRef<Path>>(path: P) -> Result<Value, Error> {
    let file = fs::File::open(path)?;
    Ok(serde_json::from_reader(io::BufReader::new(file))?)
}

#[test]
fn load_scene() -> Result<(), Error> {
    let doc = read_document("tests/data/scene.json")?;

    let mut config = Configuration::new();
    assert_eq!(config.load_from_json(&doc), 15);

    assert_eq!(config.get::<String>("name"), "kitchen");
    assert_eq!(config.get::<i32>("count"), 7);
    assert!(config.get::<bool>("enabled"));
    assert_eq!(config.get::<f64>("scale"), 0.5);
    assert_eq!(config.get::<f64>("big"), 5_000_000_000.0);
    assert_eq!(config.get::<Vector2>("extent"), Vector2::new(1.0, 2.0));
    assert_eq!(config.get::<Vector3>("origin"), Vector3::new(0.0, 1.5, -2.0));
    assert_eq!(config.get::<Vector4>("tint"), Vector4::new(0.25, 0.5, 0.75, 1.0));
    assert_eq!(config.get::<Quaternion>("rotation"), Quaternion::IDENTITY);
    assert_eq!(config.get::<Rad>("fov"), Rad(1.25));
    assert_eq!(config.get::<Matrix3>("basis"), Matrix3::IDENTITY);

    for skipped in ["missing", "odd", "mixed"] {
        assert!(!config.has_value(skipped), "{skipped}");
    }

    assert!(config.has_subconfig("empty"));
    assert_eq!(config.subconfig_num_entries("empty"), 0);
    assert_eq!(config.num_values(), 11);
    assert_eq!(config.config_tree_num_subconfigs(), 3);
    assert_eq!(config.find_value("x"), ["pose", "x"]);
    assert_eq!(config.find_value("label"), ["pose", "camera", "label"]);

    Ok(())
}

#[test]
fn scene_round_trips() -> Result<(), Error> {
    let doc = read_document("tests/data/scene.json")?;
    let config = Configuration::from_reader(fs::File::open("tests/data/scene.json")?)?;

    let mut reloaded = Configuration::new();
    let written = config.write_to_json();
    assert_eq!(reloaded.load_from_json(&written), config.config_tree_num_values());
    assert_eq!(reloaded, config);

    // Fields that could not be loaded are gone, everything else stays.
    let obj = written.as_object().unwrap();
    assert!(!obj.contains_key("odd"));
    assert_eq!(obj["rotation"], doc["rotation"]);
    assert_eq!(obj["fov"], doc["fov"]);

    Ok(())
}

#[test]
fn writes_values_before_subconfigs() {
    let mut config = Configuration::new();
    config.edit_subconfig("pose").set("x", 1.5);
    config.set("count", 7);

    assert_eq!(
        config.write_to_json().to_string(),
        r#"{"count":7,"pose":{"x":1.5}}"#
    );
}

#[test]
fn every_type_round_trips() {
    let mut config = Configuration::new();
    config.set("bool", false);
    config.set("int", i32::MIN);
    config.set("angle", Rad(-0.5));
    config.set("double", 0.125);
    config.set("v2", Vector2::new(1.0, -1.0));
    config.set("v3", Vector3::new(1.0, 2.0, 3.0));
    config.set("v4", Vector4::new(1.0, 2.0, 3.0, 4.0));
    config.set("quat", Quaternion::from_array([0.5, 0.5, 0.5, 0.5]));
    config.set("m3", Matrix3::from_array(std::array::from_fn(|i| i as f32)));
    config.set("m4", Matrix4::from_array(std::array::from_fn(|i| i as f32 * 0.5)));
    config.set("string", "text");
    config.edit_subconfig("a").edit_subconfig("b").set("c", true);

    let json = serde_json::to_string(&config).unwrap();
    let parsed = Configuration::from_json_str(&json).unwrap();

    assert_eq!(parsed, config);
    for ty in ConfigValType::ALL {
        assert_eq!(parsed.stored_keys(ty).len(), 1, "{ty}");
    }
}

#[test]
fn matrices_are_column_major() {
    let mut config = Configuration::new();
    config.load_from_json(&json!({ "m": [1, 2, 3, 4, 5, 6, 7, 8, 9] }));

    let m = config.get::<Matrix3>("m");
    assert_eq!(m.columns[1], [4.0, 5.0, 6.0]);
    assert_eq!(config.write_to_json()["m"], json!([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]));
}

#[test]
fn plain_wrappers_for_legacy_output() {
    let mut config = Configuration::new();
    config.set("angle", Rad(1.0));
    config.set("quat", Quaternion::IDENTITY);

    let options = JsonOptions {
        typed_wrappers: false,
        ..Default::default()
    };
    let written = config.write_to_json_with(&options);
    assert_eq!(written, json!({ "angle": 1.0, "quat": [0.0, 0.0, 0.0, 1.0] }));

    let mut reloaded = Configuration::new();
    reloaded.load_from_json(&written);
    assert_eq!(reloaded.get_type("angle"), ConfigValType::Double);
    assert_eq!(reloaded.get_type("quat"), ConfigValType::Vector4);
}

#[test]
fn load_replaces_existing_values() {
    let mut config = Configuration::new();
    config.set("count", "seven");
    config.edit_subconfig("pose").set("y", 2.0);

    let loaded = config.load_from_json(&json!({ "count": 7, "pose": { "x": 1.5 } }));

    assert_eq!(loaded, 2);
    assert_eq!(config.get_type("count"), ConfigValType::Integer);
    assert_eq!(config.subconfig_view("pose").num_values(), 2);
}

#[test]
fn non_object_roots() {
    let mut config = Configuration::new();
    assert_eq!(config.load_from_json(&json!([1, 2, 3])), 0);
    assert_eq!(config.num_entries(), 0);

    assert!(matches!(
        Configuration::from_json_str("[1, 2]"),
        Err(Error::NotAnObject)
    ));
    assert!(matches!(
        Configuration::from_json_str("{ nope"),
        Err(Error::Json(_))
    ));
}

#[test]
fn recursion_limit_skips_deep_objects() {
    let doc = json!({ "a": { "b": { "c": { "leaf": 1 } } }, "top": 2 });
    let options = JsonOptions {
        recursion_limit: 2,
        ..Default::default()
    };

    let mut config = Configuration::new();
    assert_eq!(config.load_from_json_with(&doc, &options), 1);

    let b = config.subconfig_view("a").subconfig_view("b");
    assert!(!b.has_subconfig("c"));
    assert_eq!(config.get::<i32>("top"), 2);
}

#[test]
fn subconfigs_shadow_values_on_write() {
    let mut config = Configuration::new();
    config.set("shared", 1);
    config.edit_subconfig("shared").set("inner", true);

    assert_eq!(config.write_to_json(), json!({ "shared": { "inner": true } }));
}

#[test]
fn partial_writes() {
    let mut config = Configuration::new();
    config.set("count", 7);
    config.edit_subconfig("pose").set("x", 1.5);

    let mut values = serde_json::Map::new();
    config.write_values_to_json(&mut values);
    assert_eq!(Value::Object(values), json!({ "count": 7 }));

    let mut subconfigs = serde_json::Map::new();
    config.write_subconfigs_to_json(&mut subconfigs);
    assert_eq!(Value::Object(subconfigs), json!({ "pose": { "x": 1.5 } }));

    let mut renamed = serde_json::Map::new();
    config.write_value_to_json("count", "total", &mut renamed);
    config.write_value_to_json("missing", "missing", &mut renamed);
    assert_eq!(Value::Object(renamed), json!({ "total": 7 }));
}

#[test]
fn non_finite_doubles_become_null() {
    assert_eq!(ConfigValue::from(f64::NAN).to_json(), Value::Null);
}

#[test]
fn subconfig_with_type_key_value_round_trips() {
    let mut config = Configuration::new();
    {
        let meta = config.edit_subconfig("meta");
        meta.set(json::TYPE_KEY, "camera");
        meta.set("fov", 1.5);
    }

    let written = config.write_to_json();
    assert_eq!(written, json!({ "meta": { "$__type": "camera", "fov": 1.5 } }));

    let mut reloaded = Configuration::new();
    assert_eq!(reloaded.load_from_json(&written), 2);
    assert_eq!(reloaded, config);
    assert_eq!(reloaded.subconfig_view("meta").get::<String>("$__type"), "camera");
}

#[test]
fn malformed_typed_values_load_as_subconfigs() {
    let doc = json!({
        "angle": { "$__type": "rad", "value": "wide" },
        "quat": { "$__type": "quaternion", "value": [1, 2] },
    });

    let mut config = Configuration::new();
    assert_eq!(config.load_from_json(&doc), 4);

    assert!(!config.has_value("angle"));
    assert_eq!(config.subconfig_view("angle").get::<String>("value"), "wide");
    assert_eq!(
        config.subconfig_view("quat").get::<Vector2>("value"),
        Vector2::new(1.0, 2.0)
    );
}

#[test]
fn trees_at_the_recursion_limit() {
    let mut doc = json!({ "leaf": true });
    for _ in 0..i8::MAX {
        doc = json!({ "next": doc });
    }

    let mut config = Configuration::new();
    assert_eq!(config.load_from_json(&doc), 1);
    assert_eq!(config.find_value("leaf").len(), i8::MAX as usize + 1);
    assert_eq!(config.config_tree_num_subconfigs(), i8::MAX as usize);

    let copy = config.clone();
    assert_eq!(copy, config);
    assert_eq!(copy.write_to_json(), doc);
}
