use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_file: None,
            tracker_config: TrackerConfig::default(),
            sentry_config: SentryConfig::default(),
            http_server: vec!(
                HttpTrackersConfig::default()
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => { c }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and start again, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("log_level", &self.log_level, r"^(off|trace|debug|info|warn|error)$")?;

        let tracker_config = &self.tracker_config;
        if tracker_config.interval == 0 {
            return Err(ConfigurationError::Invalid(String::from("tracker_config.interval must be greater than 0")));
        }
        if tracker_config.max_num_want == 0 {
            return Err(ConfigurationError::Invalid(String::from("tracker_config.max_num_want must be greater than 0")));
        }
        if tracker_config.default_num_want > tracker_config.max_num_want {
            return Err(ConfigurationError::Invalid(format!(
                "tracker_config.default_num_want ({}) exceeds tracker_config.max_num_want ({})",
                tracker_config.default_num_want,
                tracker_config.max_num_want
            )));
        }

        for http_server in &self.http_server {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::Invalid(format!(
                    "http_server.bind_address \"{}\" is not a valid socket address",
                    http_server.bind_address
                )));
            }
            if http_server.threads == 0 {
                return Err(ConfigurationError::Invalid(format!(
                    "http_server \"{}\" needs at least one thread",
                    http_server.bind_address
                )));
            }
        }

        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|error| ConfigurationError::Invalid(format!("bad validation pattern for {name}: {error}")))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::Invalid(format!(
                "{name} \"{value}\" does not match \"{regex_check}\""
            )));
        }
        Ok(())
    }
}
