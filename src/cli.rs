//! Command-line arguments shared by the terminal and desktop binaries.

use crate::config::CapsLockSource;
use crate::error::{AppError, Result};
use std::path::PathBuf;

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub caps_lock: Option<CapsLockSource>,
    pub translate: Option<String>,
    pub help: bool,
}

pub fn print_usage(bin: &str, terminal: bool) {
    eprintln!("Usage: {} [OPTIONS]", bin);
    eprintln!();
    eprintln!("Type on an AZERTY keyboard, get the text a QWERTY keyboard would produce.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <FILE>       Load settings from FILE instead of the config dir");
    if terminal {
        eprintln!("  --caps-lock <on|off|host> Initial caps lock state (default: ask the host)");
        eprintln!("  -t, --translate <TEXT>    Translate TEXT as typed on AZERTY and print it");
    }
    eprintln!("  -h, --help                Print help");
}

/// Parse arguments, excluding the program name. `--caps-lock` and
/// `--translate` are only accepted when `terminal` is set.
pub fn parse_args<I>(args: I, terminal: bool) -> Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut parsed = Args::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                parsed.help = true;
            }
            "-c" | "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    return Err(AppError::InvalidArgument(
                        "--config requires a file path".to_string(),
                    ));
                };
                parsed.config = Some(PathBuf::from(path));
            }
            "--caps-lock" if terminal => {
                i += 1;
                let Some(value) = args.get(i) else {
                    return Err(AppError::InvalidArgument(
                        "--caps-lock requires a value".to_string(),
                    ));
                };
                parsed.caps_lock = Some(value.parse()?);
            }
            "-t" | "--translate" if terminal => {
                i += 1;
                let Some(text) = args.get(i) else {
                    return Err(AppError::InvalidArgument(
                        "--translate requires a value".to_string(),
                    ));
                };
                parsed.translate = Some(text.clone());
            }
            arg if arg.starts_with('-') => {
                return Err(AppError::InvalidArgument(format!("Unknown option: {}", arg)));
            }
            arg => {
                return Err(AppError::InvalidArgument(format!(
                    "Unexpected argument: {}",
                    arg
                )));
            }
        }
        i += 1;
    }

    Ok(parsed)
}
