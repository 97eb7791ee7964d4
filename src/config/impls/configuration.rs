use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::hostname_source::HostnameSource;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::fallback_config::FallbackConfig;
use crate::config::structs::registration_config::RegistrationConfig;
use crate::config::structs::responder_config::ResponderConfig;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            fallback: FallbackConfig {
                domain: String::from("localhost"),
                ssl_cert: None,
                ssl_key: None,
            },
            responder_server: vec!(
                ResponderConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:443"),
                    alpn_protocols: vec![
                        String::from("h2"),
                        String::from("http/1.1"),
                    ],
                }
            ),
            registration_server: vec!(
                RegistrationConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    hostname_source: HostnameSource::url_path,
                    keep_alive: Some(60),
                    request_timeout: Some(30),
                    disconnect_timeout: Some(30),
                    threads: Some(available_parallelism().unwrap().get() as u64),
                    ssl: Some(false),
                    ssl_key: Some(String::from("")),
                    ssl_cert: Some(String::from("")),
                }
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

    pub fn load_from_file(create: bool) -> Result<Configuration, CustomError> {
        let mut config = Configuration::init();
        match Configuration::load_file("config.toml") {
            Ok(c) => { config = c; }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config.toml file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&config).unwrap();
                let save_file = Configuration::save_file("config.toml", config_toml);
                return match save_file {
                    Ok(_) => {
                        eprintln!("Please edit the config.TOML in the root folder, exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("config.toml file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(config.clone());
        Ok(config)
    }

    pub fn validate(config: Configuration) {
        // Check Map
        let mut check_map = vec![
            ("[FALLBACK] Domain", config.fallback.domain.clone(), r"^[a-zA-Z0-9.\-]{1,253}$".to_string()),
        ];
        for (index, responder) in config.responder_server.iter().enumerate() {
            for protocol in responder.alpn_protocols.iter() {
                check_map.push((
                    "[RESPONDER] ALPN protocol",
                    protocol.clone(),
                    r"^[\x21-\x7e]{1,255}$".to_string()
                ));
            }
            Self::validate_bind_address("[RESPONDER] Bind address", index, responder.bind_address.clone());
        }
        for (index, registration) in config.registration_server.iter().enumerate() {
            Self::validate_bind_address("[REGISTRATION] Bind address", index, registration.bind_address.clone());
            if registration.ssl.unwrap_or(false)
                && (registration.ssl_cert.clone().unwrap_or_default().is_empty() || registration.ssl_key.clone().unwrap_or_default().is_empty())
            {
                panic!("[VALIDATE CONFIG] Registration server {} has ssl enabled without ssl_cert and ssl_key", index);
            }
        }
        if config.fallback.ssl_cert.is_some() != config.fallback.ssl_key.is_some() {
            panic!("[VALIDATE CONFIG] Fallback needs both ssl_cert and ssl_key, or neither");
        }

        // Validation
        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex);
        }
    }

    pub fn validate_value(name: &str, value: String, regex: String)
    {
        let regex_check = Regex::new(regex.as_str()).unwrap();
        if !regex_check.is_match(value.as_str()){
            panic!("[VALIDATE CONFIG] Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check);
        }
    }

    pub fn validate_bind_address(name: &str, index: usize, value: String)
    {
        if value.parse::<SocketAddr>().is_err() {
            panic!("[VALIDATE CONFIG] Error checking {} #{} [:] \"{}\" is not a valid socket address", name, index, value);
        }
    }
}
