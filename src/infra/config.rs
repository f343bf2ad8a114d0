use std::fmt;

/// How the binary exposes the tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// HTTP listener with the landing page and MCP at `/sse`.
    Server,
    /// MCP over stdin/stdout only.
    Stdio,
}

impl Mode {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "server" => Some(Mode::Server),
            "stdio" => Some(Mode::Stdio),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Server => f.write_str("server"),
            Mode::Stdio => f.write_str("stdio"),
        }
    }
}

pub const DEFAULT_PORT: u16 = 8787;

pub struct Config {
    pub mode: Mode,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let mode = std::env::var("MODE").ok();
        let mode = match mode.as_deref().map(Mode::parse) {
            Some(Some(mode)) => mode,
            Some(None) => {
                tracing::warn!(value = ?mode, "unrecognised MODE, falling back to server");
                Mode::Server
            }
            None => Mode::Server,
        };
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self { mode, port }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, Mode, DEFAULT_PORT};
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_to_server_on_8787() {
        std::env::remove_var("MODE");
        std::env::remove_var("PORT");
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, Mode::Server);
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    #[serial]
    fn parses_env_overrides() {
        std::env::set_var("MODE", "stdio");
        std::env::set_var("PORT", "9090");
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, Mode::Stdio);
        assert_eq!(cfg.port, 9090);
        std::env::remove_var("MODE");
        std::env::remove_var("PORT");
    }

    #[test]
    #[serial]
    fn bad_values_fall_back_to_defaults() {
        std::env::set_var("MODE", "carrier-pigeon");
        std::env::set_var("PORT", "not-a-port");
        let cfg = Config::from_env();
        assert_eq!(cfg.mode, Mode::Server);
        assert_eq!(cfg.port, DEFAULT_PORT);
        std::env::remove_var("MODE");
        std::env::remove_var("PORT");
    }

    #[test]
    fn mode_round_trips_through_display() {
        assert_eq!(Mode::parse(&Mode::Stdio.to_string()), Some(Mode::Stdio));
        assert_eq!(Mode::parse(" Server "), Some(Mode::Server));
    }
}
