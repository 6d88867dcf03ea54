//! Remembered student and admin identity between runs.
//!
//! One small JSON file in the config directory. The student side holds the
//! matric number of whoever last registered or looked themselves up; the
//! admin side holds the bearer token from the last admin login.

use crate::error::session::SessionError;

use common::{ErrorLocation, RedactedToken};
use models::AdminSession;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

const SESSION_FILE_NAME: &str = "session.json";

/// On-disk layout. Only this type ever sees the token as a plain string.
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    #[serde(default)]
    matric_number: Option<String>,
    #[serde(default)]
    admin_token: Option<String>,
    #[serde(default)]
    admin_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub token: RedactedToken,
    pub email: String,
}

#[derive(Debug)]
pub struct SessionStore {
    dir: PathBuf,
    matric_number: Option<String>,
    admin: Option<AdminCredentials>,
}

impl SessionStore {
    /// Load `{dir}/session.json`, or start empty when it does not exist.
    pub fn load(dir: &Path) -> Result<Self, SessionError> {
        let path = dir.join(SESSION_FILE_NAME);

        let stored = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| SessionError::Read {
                location: ErrorLocation::from(Location::caller()),
                path: path.clone(),
                source: e,
            })?;

            serde_json::from_str::<StoredSession>(&contents).map_err(|e| SessionError::Parse {
                location: ErrorLocation::from(Location::caller()),
                path: path.clone(),
                reason: e.to_string(),
            })?
        } else {
            debug!("No session file at {}", path.display());
            StoredSession::default()
        };

        let admin = match (stored.admin_token, stored.admin_email) {
            (Some(token), Some(email)) if !token.is_empty() => Some(AdminCredentials {
                token: RedactedToken::new(token),
                email,
            }),
            _ => None,
        };

        Ok(Self {
            dir: dir.to_path_buf(),
            matric_number: stored.matric_number.filter(|m| !m.trim().is_empty()),
            admin,
        })
    }

    pub fn matric_number(&self) -> Option<&str> {
        self.matric_number.as_deref()
    }

    pub fn remember_student(&mut self, matric_number: &str) -> Result<(), SessionError> {
        self.matric_number = Some(matric_number.trim().to_string());
        self.save()?;
        info!("Remembered student {}", matric_number.trim());
        Ok(())
    }

    pub fn forget_student(&mut self) -> Result<(), SessionError> {
        self.matric_number = None;
        self.save()
    }

    pub fn admin(&self) -> Option<&AdminCredentials> {
        self.admin.as_ref()
    }

    pub fn remember_admin(&mut self, session: &AdminSession) -> Result<(), SessionError> {
        self.admin = Some(AdminCredentials {
            token: session.token.clone(),
            email: session.admin.email.clone(),
        });
        self.save()?;
        info!("Stored admin session for {}", session.admin.email);
        Ok(())
    }

    pub fn forget_admin(&mut self) -> Result<(), SessionError> {
        self.admin = None;
        self.save()
    }

    /// Write through a temp file and rename so a crash never leaves half a file.
    fn save(&self) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| SessionError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: self.dir.clone(),
            source: e,
        })?;

        let stored = StoredSession {
            matric_number: self.matric_number.clone(),
            admin_token: self.admin.as_ref().map(|a| a.token.expose().to_string()),
            admin_email: self.admin.as_ref().map(|a| a.email.clone()),
        };

        let json = serde_json::to_string_pretty(&stored).map_err(|e| SessionError::Serialize {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        let path = self.dir.join(SESSION_FILE_NAME);
        let temp_path = self.dir.join(format!("{SESSION_FILE_NAME}.tmp"));

        std::fs::write(&temp_path, json).map_err(|e| SessionError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &path).map_err(|e| SessionError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: path.clone(),
            source: e,
        })?;

        Ok(())
    }
}
