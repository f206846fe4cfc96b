pub mod init;
pub mod print;
pub mod transform;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::args::CommonArgs;
use crate::{
    config::{Config, load_config},
    core::{
        rewrite::{PluginOptions, TransformState},
        transform::{TransformOutput, transform_source},
    },
};

/// Settings shared by every file of one command run.
///
/// Root priority follows the plugin: `--cwd` or the config's `cwd`, then the
/// directory holding `.bulbulrc.json`, then the working directory.
pub struct TransformContext {
    pub config: Config,
    pub working_dir: PathBuf,
    pub config_dir: Option<PathBuf>,
    pub options: PluginOptions,
}

impl TransformContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let working_dir = env::current_dir().context("Failed to read working directory")?;
        let loaded = load_config(&working_dir)?;

        let options = match &common.cwd {
            Some(cwd) => PluginOptions {
                cwd: Some(working_dir.join(cwd)),
            },
            None => loaded.config.plugin_options(&loaded.base_dir),
        };
        let config_dir = loaded.from_file.then_some(loaded.base_dir);

        Ok(Self {
            config: loaded.config,
            working_dir,
            config_dir,
            options,
        })
    }

    /// Directory config `includes` are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.config_dir.as_deref().unwrap_or(&self.working_dir)
    }

    pub fn state_for(&self, file: &Path) -> TransformState {
        let state = TransformState::new(self.working_dir.join(file), &self.working_dir);
        match &self.config_dir {
            Some(dir) => state.with_root(dir),
            None => state,
        }
    }

    /// Read and transform one file.
    pub fn transform_file(&self, file: &Path) -> Result<TransformOutput> {
        let code = fs::read_to_string(file)
            .with_context(|| format!("Failed to read file: {}", file.display()))?;
        transform_source(
            &code,
            &file.to_string_lossy(),
            &self.state_for(file),
            &self.options,
        )
    }
}
