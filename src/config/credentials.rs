//! Stored login credentials: the backend session cookie captured at login
//! and, when the backend returns one, a bearer token. Both are replayed on
//! every request, mirroring the browser client's cookie + Authorization
//! header pair.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::errors::AppResult;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Raw cookie pair(s) as sent back in Set-Cookie, e.g. "token=abc".
    pub cookie: Option<String>,
    pub token: Option<String>,
    /// Role used at login ("admin" | "employee"), kept for the logout path.
    pub role: Option<String>,
}

impl Credentials {
    pub fn is_logged_in(&self) -> bool {
        self.cookie.is_some() || self.token.is_some()
    }

    /// Load from the credentials file; a missing or corrupt file is an
    /// empty (logged-out) credential set.
    pub fn load() -> Self {
        Self::load_from(&Config::credentials_file())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Credentials::default(),
        }
    }

    pub fn save(&self) -> AppResult<()> {
        self.save_to(&Config::credentials_file())
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| crate::errors::AppError::Other(format!("serialize credentials: {e}")))?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Forget the stored credentials (logout).
    pub fn clear() -> AppResult<()> {
        let path = Config::credentials_file();
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let creds = Credentials::load_from(&dir.path().join("nope.json"));
        assert!(!creds.is_logged_in());
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let creds = Credentials {
            cookie: Some("token=abc".into()),
            token: Some("jwt".into()),
            role: Some("employee".into()),
        };
        creds.save_to(&path).unwrap();
        let back = Credentials::load_from(&path);
        assert!(back.is_logged_in());
        assert_eq!(back.cookie.as_deref(), Some("token=abc"));
        assert_eq!(back.role.as_deref(), Some("employee"));
    }

    #[test]
    fn corrupt_file_is_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "{not json").unwrap();
        assert!(!Credentials::load_from(&path).is_logged_in());
    }
}
