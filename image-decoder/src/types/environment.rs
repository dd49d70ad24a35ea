//! Environment configuration for different deployment stages

use std::env;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::Level;

/// Port the service listens on when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5003;

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Directory decoded images are written to
    ///
    /// `IMAGE_STORAGE_DIR` wins when set. Otherwise images land next to the
    /// program: the crate directory in development, the directory holding
    /// the executable everywhere else.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined
    pub fn storage_dir(&self) -> io::Result<PathBuf> {
        if let Ok(dir) = env::var("IMAGE_STORAGE_DIR") {
            return Ok(PathBuf::from(dir));
        }

        match self {
            Self::Development => Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
            Self::Production | Self::Staging => {
                let exe = env::current_exe()?;
                exe.parent().map(PathBuf::from).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("executable {} has no parent directory", exe.display()),
                    )
                })
            }
        }
    }

    /// Port to listen on, from `PORT` or [`DEFAULT_PORT`]
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number
    pub fn port() -> Result<u16, std::num::ParseIntError> {
        env::var("PORT").map_or(Ok(DEFAULT_PORT), |p| p.trim().parse())
    }

    /// Address to bind: all interfaces on [`Self::port`]
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number
    pub fn bind_addr() -> Result<SocketAddr, std::num::ParseIntError> {
        Ok(SocketAddr::from(([0, 0, 0, 0], Self::port()?)))
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Whether logs should be emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Log level, from `TRACING_LEVEL` or the environment default
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }
}
