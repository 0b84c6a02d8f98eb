use serde::Deserialize;

const DEFAULT_TARGET_URL: &str = "https://www.aviasales.ru";
const DEFAULT_OUTPUT_PATH: &str = "data/popular_destinations.csv";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub scraper: ScraperSettings,
}

#[derive(Deserialize, Clone)]
pub struct ScraperSettings {
    pub target_url: String,
    pub output_path: String,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("scraper.target_url", DEFAULT_TARGET_URL)?
        .set_default("scraper.output_path", DEFAULT_OUTPUT_PATH)?
        .add_source(config::File::with_name("configuration").required(false))
        .build()?;

    settings.try_deserialize::<Settings>()
}
