use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "CATFORM_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub basic: BasicConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicConfig {
    /// Socket address the HTTP listener binds to.
    pub listen_addr: String,
    pub database_url: String,
    pub max_connections: u32,
    pub loglevel: String,
    /// Directory of `*.hbs` files overriding the bundled templates by name.
    pub templates_dir: Option<PathBuf>,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            database_url: "sqlite:catform.sqlite".to_string(),
            max_connections: 5,
            loglevel: "info".to_string(),
            templates_dir: None,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml` if present, then `CATFORM_*` env vars
    /// (`CATFORM_BASIC__DATABASE_URL=...`).
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_bind_all_interfaces_on_5000() {
        let cfg = Config::default();
        assert_eq!(cfg.basic.listen_addr, "0.0.0.0:5000");
        assert_eq!(cfg.basic.max_connections, 5);
        assert!(cfg.basic.templates_dir.is_none());
    }

    #[test]
    fn toml_and_env_override_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                [basic]
                database_url = "sqlite:from-file.sqlite"
                loglevel = "debug"
                "#,
            )?;
            jail.set_env("CATFORM_BASIC__DATABASE_URL", "sqlite:from-env.sqlite");
            jail.set_env("CATFORM_BASIC__MAX_CONNECTIONS", "2");

            let cfg = Config::load()?;
            assert_eq!(cfg.basic.database_url, "sqlite:from-env.sqlite");
            assert_eq!(cfg.basic.loglevel, "debug");
            assert_eq!(cfg.basic.max_connections, 2);
            assert_eq!(cfg.basic.listen_addr, "0.0.0.0:5000");
            Ok(())
        });
    }
}
