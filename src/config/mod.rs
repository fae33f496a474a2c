use crate::auth::Credentials;
use crate::error::{Error, Result};

/// Application configuration, loaded once from environment variables.
///
/// `STRAVA_CLIENT_ID` and `STRAVA_CLIENT_SECRET` are always required.
/// `STRAVA_REFRESH_TOKEN` and `STRAVA_CODE` are optional and drive the
/// token flow selection at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: Option<String>,
    pub code: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            client_id: lookup("STRAVA_CLIENT_ID")
                .ok_or_else(|| Error::Config("STRAVA_CLIENT_ID is required".to_string()))?,
            client_secret: lookup("STRAVA_CLIENT_SECRET")
                .ok_or_else(|| Error::Config("STRAVA_CLIENT_SECRET is required".to_string()))?,
            refresh_token: lookup("STRAVA_REFRESH_TOKEN").filter(|v| !v.is_empty()),
            code: lookup("STRAVA_CODE").filter(|v| !v.is_empty()),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.client_id.is_empty() {
            return Err(Error::Config("STRAVA_CLIENT_ID must not be empty".to_string()));
        }
        if self.client_secret.is_empty() {
            return Err(Error::Config(
                "STRAVA_CLIENT_SECRET must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}
