use anyhow::Result;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::SystemTime;
use tracing::{info, warn};

const SECONDS_PER_DAY: u64 = 86_400;

/// Holds the SHA-256 hash of the admin bearer token. The plaintext is only
/// printed when a token is minted.
pub struct KeyManager {
    key_path: PathBuf,
    hash: RwLock<String>,
    ttl_warning_days: u64,
    ttl_limit_days: u64,
}

impl KeyManager {
    pub fn new(key_path: impl AsRef<Path>, ttl_warning_days: u64, ttl_limit_days: u64) -> Result<Self> {
        let km = KeyManager {
            key_path: key_path.as_ref().to_path_buf(),
            hash: RwLock::new(String::new()),
            ttl_warning_days,
            ttl_limit_days,
        };

        if !km.key_path.exists() {
            println!("Generated new admin API key: {}", km.store_new_key()?);
            return Ok(km);
        }

        let days = km.get_age_in_days()?;
        info!("Admin key age: {} days", days);
        if days > ttl_limit_days {
            warn!("Admin key is older than {} days, rotating", ttl_limit_days);
            println!("Rotated admin API key: {}", km.store_new_key()?);
        } else {
            if days > ttl_warning_days {
                warn!("Admin key is older than {} days", ttl_warning_days);
            }
            *km.hash.write().unwrap_or_else(|e| e.into_inner()) =
                fs::read_to_string(&km.key_path)?.trim().to_string();
        }

        Ok(km)
    }

    fn store_new_key(&self) -> Result<String> {
        if let Some(parent) = self.key_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let key = hex::encode(rand::random::<[u8; 32]>());
        let hash = hash_key(&key);
        fs::write(&self.key_path, &hash)?;

        *self.hash.write().unwrap_or_else(|e| e.into_inner()) = hash;
        info!("Admin key hash stored at {}", self.key_path.display());
        Ok(key)
    }

    pub fn validate_token(&self, token: &str) -> bool {
        let stored = self.hash.read().unwrap_or_else(|e| e.into_inner());
        !stored.is_empty() && hash_key(token) == *stored
    }

    pub fn get_age_in_days(&self) -> Result<u64> {
        let modified = fs::metadata(&self.key_path)?.modified()?;
        let age = SystemTime::now().duration_since(modified).unwrap_or_default();
        Ok(age.as_secs() / SECONDS_PER_DAY)
    }

    /// Replaces the key and returns the new plaintext. The previous token stops validating.
    pub fn refresh_key(&self) -> Result<String> {
        info!("Refreshing admin API key");
        self.store_new_key()
    }
}

fn hash_key(key: &str) -> String {
    hex::encode(Sha256::digest(key.as_bytes()))
}
