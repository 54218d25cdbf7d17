use config::{Config, ConfigError, File};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Settings {
    pub tick_ms: u64,
    // frames longer than this are clamped before reaching the vehicle
    pub max_frame_dt: f64,
    pub save_file: String,
    pub auto_start_engine: bool,
    pub realtime_playback: bool,
    pub log_level: String,
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        Self::from_file("config.yaml")
    }

    pub fn from_file(path: &str) -> Result<Settings, ConfigError> {
        let config = Config::builder()
            .set_default("tick_ms", 16)?
            .set_default("max_frame_dt", 0.1)?
            .set_default("save_file", "savefile.json")?
            .set_default("auto_start_engine", false)?
            .set_default("realtime_playback", false)?
            .set_default("log_level", "info")?
            .add_source(File::with_name(path).required(false))
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    // a frame must move the clock forward or the host loop never ends
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::Message("tick_ms must be at least 1".to_string()));
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::Message(format!(
                "max_frame_dt must be a positive number of seconds, got {}",
                self.max_frame_dt
            )));
        }
        Ok(())
    }
}

lazy_static! {
    pub static ref GLOBAL_CONFIG: Settings = Settings::new().expect("failed to read config file");
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::Settings;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "roadster-settings-{}-{}.yaml",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    fn load(name: &str, contents: &str) -> Result<Settings, config::ConfigError> {
        let path = write_config(name, contents);
        let settings = Settings::from_file(path.to_str().unwrap());
        fs::remove_file(&path).unwrap();
        settings
    }

    #[test]
    fn test_defaults_without_config_file() {
        let settings = Settings::from_file("definitely-not-a-config-file.yaml").unwrap();

        assert_eq!(settings.tick_ms, 16);
        assert_eq!(settings.max_frame_dt, 0.1);
        assert_eq!(settings.save_file, "savefile.json");
        assert!(!settings.auto_start_engine);
        assert!(!settings.realtime_playback);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let settings = load("overrides", "tick_ms: 20\nmax_frame_dt: 0.05\n").unwrap();

        assert_eq!(settings.tick_ms, 20);
        assert_eq!(settings.max_frame_dt, 0.05);
        assert_eq!(settings.save_file, "savefile.json");
    }

    #[test]
    fn test_zero_tick_is_refused() {
        assert!(load("zero-tick", "tick_ms: 0\n").is_err());
    }

    #[test]
    fn test_non_positive_frame_clamp_is_refused() {
        assert!(load("zero-frame", "max_frame_dt: 0.0\n").is_err());
        assert!(load("negative-frame", "max_frame_dt: -0.1\n").is_err());
        assert!(load("nan-frame", "max_frame_dt: .nan\n").is_err());
    }
}
