use arbor_config::Configuration;

pub mod find;
pub mod ini;
pub mod json;
pub mod keys;
pub mod merge;
pub mod show;
pub mod stats;

/// Represents a command in the Arbor application.
pub trait Command {
    /// Consumes a command object and executes the handler actions
    /// associated with it.
    ///
    /// On failure, an error will be reported.
    fn handle(self) -> eyre::Result<()>;
}

/// Descends from `config` into the subconfig addressed by a
/// slash-separated `path`.
fn descend<'a>(config: &'a Configuration, path: Option<&str>) -> eyre::Result<&'a Configuration> {
    let Some(path) = path else {
        return Ok(config);
    };

    let mut node = config;
    for name in path.split('/').filter(|n| !n.is_empty()) {
        node = node
            .try_subconfig_view(name)
            .ok_or_else(|| eyre::eyre!("no subconfig named '{name}' along '{path}'"))?;
    }

    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descend_paths() {
        let mut config = Configuration::new();
        config.edit_subconfig("a").edit_subconfig("b").set("leaf", 1);

        assert!(descend(&config, None).unwrap().has_subconfig("a"));
        assert!(descend(&config, Some("a/b/")).unwrap().has_value("leaf"));
        assert!(descend(&config, Some("a/c")).is_err());
    }
}
