use interfacer::engine::config::{
    BackgroundScope, DEFAULT_DELTA_EXTENSION, DEFAULT_RESIDUE_EXTENSION,
};
use std::path::PathBuf;

pub struct DefaultsConfig {
    pub rsa_dir: PathBuf,
    pub out_dir: PathBuf,
    pub scope: BackgroundScope,
    pub rebuild_background: bool,
    pub delta_extension: String,
    pub residue_extension: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            rsa_dir: PathBuf::from("rsa"),
            out_dir: PathBuf::from("interface"),
            scope: BackgroundScope::Corpus,
            rebuild_background: false,
            delta_extension: DEFAULT_DELTA_EXTENSION.to_string(),
            residue_extension: DEFAULT_RESIDUE_EXTENSION.to_string(),
        }
    }
}
