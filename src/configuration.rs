//! src/configuration.rs
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub source: SourceSettings,
    pub sink: SinkSettings,
}

/// Where the raw documents live: a public bucket and the fixed list of
/// object keys processed in one run.
#[derive(serde::Deserialize, Clone)]
pub struct SourceSettings {
    pub bucket: String,
    pub region: String,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    pub objects: Vec<String>,
}

#[derive(serde::Deserialize, Clone)]
pub struct SinkSettings {
    pub spreadsheet_id: String,
    pub keyfile_path: String,
    pub endpoint: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub batch_size: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_retries: u32,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory.");
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("WORDTALLY")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
