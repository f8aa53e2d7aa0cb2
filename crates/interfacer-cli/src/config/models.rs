use interfacer::engine::config::AnalysisConfig;

pub struct AppConfig {
    /// Upper-cased, de-duplicated, in the order given on the command line.
    pub identifiers: Vec<String>,
    pub analysis: AnalysisConfig,
}
