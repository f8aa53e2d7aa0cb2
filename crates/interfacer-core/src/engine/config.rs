use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_DELTA_EXTENSION: &str = "int";
pub const DEFAULT_RESIDUE_EXTENSION: &str = "rsa";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("File extension for {0} cannot be empty")]
    EmptyExtension(&'static str),
}

/// Which accessibility files feed the background frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackgroundScope {
    /// Only the structure's own complex file, `<id>.<ext>`.
    Structure,
    /// Every accessibility file in the source directory.
    Corpus,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown background scope '{0}'. Expected 'structure' or 'corpus'.")]
pub struct ParseScopeError(pub String);

impl BackgroundScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Corpus => "corpus",
        }
    }
}

impl FromStr for BackgroundScope {
    type Err = ParseScopeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structure" | "per-structure" => Ok(Self::Structure),
            "corpus" => Ok(Self::Corpus),
            _ => Err(ParseScopeError(s.to_string())),
        }
    }
}

impl fmt::Display for BackgroundScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFormats {
    pub delta_extension: String,
    pub residue_extension: String,
}

impl Default for FileFormats {
    fn default() -> Self {
        Self {
            delta_extension: DEFAULT_DELTA_EXTENSION.to_string(),
            residue_extension: DEFAULT_RESIDUE_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub scope: BackgroundScope,
    pub formats: FileFormats,
    /// Ignore an existing background cache artifact and overwrite it.
    pub rebuild_background: bool,
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    source_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
    scope: Option<BackgroundScope>,
    delta_extension: Option<String>,
    residue_extension: Option<String>,
    rebuild_background: bool,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_dir(mut self, path: PathBuf) -> Self {
        self.source_dir = Some(path);
        self
    }
    pub fn output_dir(mut self, path: PathBuf) -> Self {
        self.output_dir = Some(path);
        self
    }
    /// Defaults to the output directory when not set.
    pub fn cache_dir(mut self, path: PathBuf) -> Self {
        self.cache_dir = Some(path);
        self
    }
    pub fn scope(mut self, scope: BackgroundScope) -> Self {
        self.scope = Some(scope);
        self
    }
    pub fn delta_extension(mut self, extension: impl Into<String>) -> Self {
        self.delta_extension = Some(extension.into());
        self
    }
    pub fn residue_extension(mut self, extension: impl Into<String>) -> Self {
        self.residue_extension = Some(extension.into());
        self
    }
    pub fn rebuild_background(mut self, rebuild: bool) -> Self {
        self.rebuild_background = rebuild;
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let source_dir = self
            .source_dir
            .ok_or(ConfigError::MissingParameter("source_dir"))?;
        let output_dir = self
            .output_dir
            .ok_or(ConfigError::MissingParameter("output_dir"))?;
        let scope = self.scope.ok_or(ConfigError::MissingParameter("scope"))?;

        let formats = FileFormats {
            delta_extension: normalize_extension(self.delta_extension, DEFAULT_DELTA_EXTENSION)
                .ok_or(ConfigError::EmptyExtension("delta files"))?,
            residue_extension: normalize_extension(
                self.residue_extension,
                DEFAULT_RESIDUE_EXTENSION,
            )
            .ok_or(ConfigError::EmptyExtension("residue accessibility files"))?,
        };

        Ok(AnalysisConfig {
            cache_dir: self.cache_dir.unwrap_or_else(|| output_dir.clone()),
            source_dir,
            output_dir,
            scope,
            formats,
            rebuild_background: self.rebuild_background,
        })
    }
}

fn normalize_extension(value: Option<String>, default: &str) -> Option<String> {
    let value = value.unwrap_or_else(|| default.to_string());
    let trimmed = value.trim().trim_start_matches('.');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
