use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilePathsConfig {
    pub rsa_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub cache_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileBackgroundConfig {
    pub scope: Option<String>,
    pub rebuild: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileFormatsConfig {
    pub delta_extension: Option<String>,
    pub residue_extension: Option<String>,
}

/// Every field is optional; missing values fall back to [`super::defaults::DefaultsConfig`].
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub paths: Option<FilePathsConfig>,
    pub background: Option<FileBackgroundConfig>,
    pub formats: Option<FileFormatsConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "paths.rsa-dir" => {
                    self.paths.get_or_insert_with(Default::default).rsa_dir =
                        Some(PathBuf::from(value));
                }
                "paths.out-dir" => {
                    self.paths.get_or_insert_with(Default::default).out_dir =
                        Some(PathBuf::from(value));
                }
                "paths.cache-dir" => {
                    self.paths.get_or_insert_with(Default::default).cache_dir =
                        Some(PathBuf::from(value));
                }
                "background.scope" => {
                    self.background.get_or_insert_with(Default::default).scope =
                        Some(value.to_string());
                }
                "background.rebuild" => {
                    self.background.get_or_insert_with(Default::default).rebuild =
                        Some(value.parse().map_err(|_| {
                            CliError::Config(format!(
                                "Invalid boolean value for {}: {}",
                                key, value
                            ))
                        })?);
                }
                "formats.delta-extension" => {
                    self.formats
                        .get_or_insert_with(Default::default)
                        .delta_extension = Some(value.to_string());
                }
                "formats.residue-extension" => {
                    self.formats
                        .get_or_insert_with(Default::default)
                        .residue_extension = Some(value.to_string());
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sections() {
        let config = FileConfig::from_toml(
            r#"
            [paths]
            rsa-dir = "data/rsa"
            out-dir = "data/out"
            cache-dir = "data/cache"

            [background]
            scope = "structure"
            rebuild = true

            [formats]
            delta-extension = "delta"
            residue-extension = "acc"
            "#,
        )
        .unwrap();

        let paths = config.paths.unwrap();
        assert_eq!(paths.rsa_dir, Some(PathBuf::from("data/rsa")));
        assert_eq!(paths.cache_dir, Some(PathBuf::from("data/cache")));
        let background = config.background.unwrap();
        assert_eq!(background.scope.as_deref(), Some("structure"));
        assert_eq!(background.rebuild, Some(true));
        assert_eq!(
            config.formats.unwrap().residue_extension.as_deref(),
            Some("acc")
        );
    }

    #[test]
    fn empty_document_is_valid() {
        let config = FileConfig::from_toml("").unwrap();
        assert!(config.paths.is_none());
        assert!(config.background.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml("[paths]\nrsa-directory = \"x\"\n").is_err());
        assert!(FileConfig::from_toml("[output]\nformat = \"csv\"\n").is_err());
    }

    #[test]
    fn set_values_override_file_values() {
        let mut config = FileConfig::from_toml("[background]\nscope = \"corpus\"\n").unwrap();
        config
            .apply_set_values(&[
                "background.scope=structure".to_string(),
                "background.rebuild = true".to_string(),
                "paths.out-dir=elsewhere".to_string(),
            ])
            .unwrap();

        let background = config.background.unwrap();
        assert_eq!(background.scope.as_deref(), Some("structure"));
        assert_eq!(background.rebuild, Some(true));
        assert_eq!(
            config.paths.unwrap().out_dir,
            Some(PathBuf::from("elsewhere"))
        );
    }

    #[test]
    fn malformed_or_unknown_set_values_are_errors() {
        let mut config = FileConfig::default();
        assert!(matches!(
            config.apply_set_values(&["background.scope".to_string()]),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            config.apply_set_values(&["paths.nowhere=x".to_string()]),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            config.apply_set_values(&["background.rebuild=maybe".to_string()]),
            Err(CliError::Config(_))
        ));
    }
}
