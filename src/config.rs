use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "github.jsonl";
pub const DEFAULT_OUTPUT_PATH: &str = "output.csv";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Missing input file: '{0}'. Make sure it exists on disk.")]
    MissingInputFile(PathBuf),
    #[error("Missing output directory: '{0}'. Make sure it exists on disk.")]
    MissingOutputDirectory(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            input_path: env_to_str("CG_INPUT_PATH")
                .unwrap_or_else(|| DEFAULT_INPUT_PATH.into())
                .into(),
            output_path: env_to_str("CG_OUTPUT_PATH")
                .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.into())
                .into(),
        }
    }

    pub fn new<I: Into<PathBuf>, O: Into<PathBuf>>(input_path: I, output_path: O) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn set_input_path<T: Into<PathBuf>>(&mut self, value: T) {
        self.input_path = value.into();
    }

    pub fn set_output_path<T: Into<PathBuf>>(&mut self, value: T) {
        self.output_path = value.into();
    }

    pub fn validate_configuration(&self) -> Result<(), ConfigError> {
        if !self.input_path.is_file() {
            return Err(ConfigError::MissingInputFile(self.input_path.clone()));
        }

        // A bare file name writes to the current directory
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ConfigError::MissingOutputDirectory(parent.to_owned()));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

fn env_to_str(env_key: &str) -> Option<String> {
    std::env::var(env_key).ok().filter(|s| !s.is_empty())
}
