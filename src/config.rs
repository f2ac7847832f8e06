//! Configuration constants and endpoint resolution for larek
//!
//! Endpoints come from, in order: command line flags, the
//! `LAREK_API_ORIGIN` environment variable, the selected section of the INI
//! profile file, and finally the public demo server.

use crate::cmd_args::CommandLineArgs;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::{Path, PathBuf};

/// Default profile file path for larek
pub const DEFAULT_PROFILE_PATH: &str = "~/.larek/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "LAREK_PROFILE_PATH";

/// Environment variable naming the shop server origin
pub const API_ORIGIN_ENV_VAR: &str = "LAREK_API_ORIGIN";

/// Default log file for larek
pub const DEFAULT_LOG_PATH: &str = "~/.larek/larek.log";

/// Environment variable naming the log file
pub const LOG_FILE_ENV_VAR: &str = "LAREK_LOG_FILE";

pub const DEFAULT_ORIGIN: &str = "https://larek-api.nomoreparties.co";

const API_PATH: &str = "/api/weblarek";
const CDN_PATH: &str = "/content/weblarek";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Get the log file path with `~` expanded, checking environment variable first.
///
/// The terminal is in raw mode while the storefront runs, so logs never go to stderr.
pub fn get_log_path() -> PathBuf {
    let path = std::env::var_os(LOG_FILE_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());
    PathBuf::from(shellexpand::tilde(&path).as_ref())
}

/// One section of the profile file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreProfile {
    pub origin: Option<String>,
    pub api_url: Option<String>,
    pub cdn_url: Option<String>,
}

impl StoreProfile {
    /// Read section `name` from the INI file at `path`.
    ///
    /// A missing file or section is not an error.
    pub fn load(path: &str, name: &str) -> Result<Option<Self>> {
        let expanded = shellexpand::tilde(path);
        let file = Path::new(expanded.as_ref());
        if !file.exists() {
            tracing::debug!("Profile file '{}' does not exist", expanded);
            return Ok(None);
        }

        let ini = Ini::load_from_file(file)
            .with_context(|| format!("Failed to read profile file '{expanded}'"))?;
        let Some(section) = ini.section(Some(name)) else {
            tracing::debug!("Profile '{}' not found in '{}'", name, expanded);
            return Ok(None);
        };

        let value = |key: &str| section.get(key).map(|v| v.trim().to_string());
        Ok(Some(Self {
            origin: value("origin"),
            api_url: value("api_url"),
            cdn_url: value("cdn_url"),
        }))
    }
}

/// Base URLs of the shop API and the image CDN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub api_url: String,
    pub cdn_url: String,
}

impl Endpoints {
    pub fn from_origin(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        Self {
            api_url: format!("{origin}{API_PATH}"),
            cdn_url: format!("{origin}{CDN_PATH}"),
        }
    }

    /// Combine every configuration source, highest precedence first
    pub fn resolve(
        args: &CommandLineArgs,
        env_origin: Option<&str>,
        profile: Option<&StoreProfile>,
    ) -> Self {
        let origin = args
            .origin()
            .or(env_origin)
            .or_else(|| profile.and_then(|p| p.origin.as_deref()))
            .unwrap_or(DEFAULT_ORIGIN);
        let derived = Self::from_origin(origin);

        // An explicit profile URL only wins over an origin from the profile or default
        let origin_is_explicit = args.origin().is_some() || env_origin.is_some();
        let pick = |flag: Option<&str>, from_profile: Option<&String>, derived: String| {
            match (flag, from_profile) {
                (Some(url), _) => url.to_string(),
                (None, Some(url)) if !origin_is_explicit => url.clone(),
                _ => derived,
            }
        };

        Self {
            api_url: pick(
                args.api_url(),
                profile.and_then(|p| p.api_url.as_ref()),
                derived.api_url,
            ),
            cdn_url: pick(
                args.cdn_url(),
                profile.and_then(|p| p.cdn_url.as_ref()),
                derived.cdn_url,
            ),
        }
    }
}

/// Resolve endpoints from the process environment and the profile file
pub fn resolve_endpoints(args: &CommandLineArgs) -> Result<Endpoints> {
    let profile_path = get_profile_path();
    tracing::debug!(
        "Loading profile '{}' from '{}'",
        args.profile(),
        profile_path
    );
    let profile = StoreProfile::load(&profile_path, args.profile())?;
    let env_origin = std::env::var(API_ORIGIN_ENV_VAR).ok();

    let endpoints = Endpoints::resolve(args, env_origin.as_deref(), profile.as_ref());
    tracing::info!(
        "Using API '{}' and CDN '{}'",
        endpoints.api_url,
        endpoints.cdn_url
    );
    Ok(endpoints)
}
