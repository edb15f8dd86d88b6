use std::collections::HashMap;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, percent_encode};
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Bytes left untouched when escaping a query value: `A-Z a-z 0-9 - _ . ~`.
pub const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub fn parse_query(query: Option<String>) -> HashMap<String, Vec<Vec<u8>>> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(raw_query) = query else {
        return queries;
    };

    for query_item in raw_query.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_name_raw, value_data_raw) = query_item.split_once('=').unwrap_or((query_item, ""));
        let key_name = decode_query_component(key_name_raw);
        let key_name = String::from_utf8_lossy(&key_name).into_owned();
        if key_name.is_empty() {
            continue;
        }
        queries.entry(key_name).or_default().push(decode_query_component(value_data_raw));
    }

    queries
}

/// Decodes one form-encoded query component, `+` standing for a space.
pub fn decode_query_component(component: &str) -> Vec<u8> {
    if component.contains('+') {
        percent_decode_str(&component.replace('+', " ")).collect()
    } else {
        percent_decode_str(component).collect()
    }
}

/// Escapes raw bytes into the canonical form used as a torrent identifier.
pub fn escape_query_value(value: &[u8]) -> String {
    percent_encode(value, QUERY_ESCAPE).to_string()
}

/// Returns the first value given for `field`, if any.
pub fn query_first<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a [u8]> {
    query.get(field)
        .and_then(|values| values.first())
        .map(|value| value.as_slice())
}

pub fn parse_log_level(log_level: &str) -> Option<log::LevelFilter> {
    match log_level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        .chain(fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "{} [{:width$}][{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                    colors.color(record.level()),
                    record.target(),
                    message,
                    width = 5
                ))
            })
            .chain(std::io::stdout())
        );

    if let Some(log_file) = config.log_file.as_ref().filter(|path| !path.is_empty()) {
        let file = fern::log_file(log_file)
            .map_err(|error| CustomError::new(&format!("unable to open log file '{log_file}': {error}")))?;
        dispatch = dispatch.chain(fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{:width$}][{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                    record.level(),
                    record.target(),
                    message,
                    width = 5
                ))
            })
            .chain(file)
        );
    }

    if dispatch.apply().is_err() {
        return Err(CustomError::new("failed to initialize logging"));
    }
    info!("logging initialized.");
    Ok(())
}

/// Escapes text for inclusion in an HTML page.
pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(character)
        }
    }
    escaped
}

pub fn http_check_host_and_port_used(bind_address: &str) -> Result<(), CustomError> {
    if cfg!(target_os = "windows") {
        if let Err(error) = std::net::TcpListener::bind(bind_address) {
            return Err(CustomError::new(&format!("unable to bind to {bind_address}: {error}")));
        }
    }
    Ok(())
}
