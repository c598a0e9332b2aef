use std::path::Path;

pub use config::ConfigError;

use crate::monitor;
use crate::notify::alertzy;
use crate::raise3d;

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub printer: raise3d::Config,
    #[serde(default)]
    pub alertzy: Option<alertzy::Config>,
    #[serde(default)]
    pub monitor: monitor::Config,
}

/// `raise3d.{toml,yaml,json}` from the working directory if present, then
/// `path` if given, then `RAISE3D_*` environment variables
/// (`RAISE3D_ALERTZY__KEY`, `RAISE3D_MONITOR__INTERVAL`, ...).
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder =
        config::Config::builder().add_source(config::File::with_name("raise3d").required(false));
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }
    builder
        .add_source(
            config::Environment::with_prefix("RAISE3D")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Config>()
}
