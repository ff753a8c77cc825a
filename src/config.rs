use std::path::PathBuf;

use tracing::warn;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Builds a config from the arguments after the program name. One
    /// positional argument is accepted: the listen port. An unparsable
    /// port or extra arguments fall back to the default port with a
    /// warning, never an exit.
    pub fn from_args<I>(mut args: I) -> Self
    where
        I: Iterator<Item = String>,
    {
        let mut cfg = Self::default();

        match (args.next(), args.next()) {
            (None, _) => {}
            (Some(port), None) => match port.parse::<u16>() {
                Ok(port) => cfg.port = port,
                Err(_) => warn!("Invalid port {port:?}, using default port {DEFAULT_PORT}"),
            },
            (Some(_), Some(_)) => warn!("Too many arguments, using default port {DEFAULT_PORT}"),
        }

        cfg
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
