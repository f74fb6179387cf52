use arbor_config::{math::*, *};

#[test]
fn flat_strings() {
    assert_eq!(ConfigValue::from(true).to_flat_string().unwrap(), "true");
    assert_eq!(ConfigValue::from(12).to_flat_string().unwrap(), "12");
    assert_eq!(ConfigValue::from(Rad(0.5)).to_flat_string().unwrap(), "0.5");
    assert_eq!(
        ConfigValue::from(Vector3::new(1.0, 2.5, -3.0))
            .to_flat_string()
            .unwrap(),
        "1 2.5 -3"
    );
    assert_eq!(
        ConfigValue::from(Quaternion::IDENTITY).to_flat_string().unwrap(),
        "0 0 0 1"
    );
    assert_eq!(
        ConfigValue::from(Matrix3::IDENTITY).to_flat_string().unwrap(),
        "1 0 0 0 1 0 0 0 1"
    );
    assert_eq!(ConfigValue::new().to_flat_string(), None);
}

#[test]
fn put_value() {
    let mut group = ConfigGroup::new();

    assert!(ConfigValue::from("on").put_value_in_config_group("mode", &mut group));
    assert!(ConfigValue::from(2).put_value_in_config_group("mode", &mut group));
    assert!(!ConfigValue::new().put_value_in_config_group("none", &mut group));

    assert_eq!(group.value("mode"), Some("2"));
    assert_eq!(group.value("none"), None);
    assert_eq!(group.value_count(), 1);
}

#[test]
fn tree_becomes_groups() {
    let mut config = Configuration::new();
    config.set("count", 7);
    {
        let pose = config.edit_subconfig("pose");
        pose.set("x", 1.5);
        pose.edit_subconfig("limits").set("max", Vector2::new(1.0, 2.0));
    }
    config.edit_subconfig("empty");

    let group = config.config_group();
    assert_eq!(group.value("count"), Some("7"));
    assert_eq!(group.group_count(), 2);

    let pose = group.group("pose").unwrap();
    assert_eq!(pose.value("x"), Some("1.5"));
    assert_eq!(pose.group("limits").unwrap().value("max"), Some("1 2"));
    assert!(group.group("empty").unwrap().is_empty());
}

#[test]
fn ini_text() {
    let mut config = Configuration::new();
    config.set("count", 7);
    config.set("title", " padded ");
    config.edit_subconfig("pose").set("x", 1.5);
    config
        .edit_subconfig("pose")
        .edit_subconfig("limits")
        .set("note", "a\nb");

    assert_eq!(
        config.config_group().to_string(),
        "count=7\n\
         title=\" padded \"\n\
         \n\
         [pose]\n\
         x=1.5\n\
         \n\
         [pose/limits]\n\
         note=\"\"\"\na\nb\n\"\"\"\n"
    );
}

#[test]
fn duplicate_groups() {
    let mut group = ConfigGroup::new();
    group.add_group("item").set_value("id", "1");
    group.add_group("item").set_value("id", "2");
    group.add_value("tag", "a");
    group.add_value("tag", "b");

    let ids: Vec<_> = group.groups().map(|(_, g)| g.value("id")).collect();
    assert_eq!(ids, [Some("1"), Some("2")]);
    assert_eq!(group.value("tag"), Some("a"));
    assert_eq!(group.values().count(), 2);
}
