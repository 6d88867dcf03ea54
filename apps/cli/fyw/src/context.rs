//! Everything a command needs: config, client, remembered session.

use crate::error::FywError;

use common::RedactedToken;
use portal_core::config::PortalConfig;
use portal_core::portal_client::PortalClient;
use portal_core::session::SessionStore;

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use log::debug;

pub struct AppContext {
    pub config_dir: PathBuf,
    pub config: PortalConfig,
    pub client: PortalClient,
    pub session: SessionStore,
}

impl AppContext {
    /// Load config (file, then `.env`/environment, then `--api-base-url`) and the session.
    pub fn load(config_dir: &Path, api_base_url: Option<&str>) -> Result<Self, FywError> {
        let mut config = PortalConfig::load(config_dir)?;
        config.apply_env_overrides()?;
        if let Some(url) = api_base_url {
            config.override_base_url(url)?;
        }

        let client = PortalClient::from_config(&config)?;
        let session = SessionStore::load(config_dir)?;

        debug!("Using API at {}", client.base_url());

        Ok(Self {
            config_dir: config_dir.to_path_buf(),
            config,
            client,
            session,
        })
    }

    /// The matric number passed on the command line, else the remembered one.
    #[track_caller]
    pub fn resolve_matric(&self, explicit: Option<&str>) -> Result<String, FywError> {
        explicit
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .or(self.session.matric_number())
            .map(str::to_string)
            .ok_or_else(FywError::not_registered)
    }

    #[track_caller]
    pub fn admin_token(&self) -> Result<RedactedToken, FywError> {
        self.session
            .admin()
            .map(|admin| admin.token.clone())
            .ok_or_else(FywError::not_signed_in)
    }
}

/// `--config-dir` if given, else the platform default. Created if missing.
#[track_caller]
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Result<PathBuf, FywError> {
    let dir = match explicit {
        Some(dir) => dir,
        None => PortalConfig::default_dir()?,
    };

    create_dir_all(&dir)
        .map_err(|e| FywError::fyw(format!("Failed to create config directory: {e}")))?;

    Ok(dir)
}
