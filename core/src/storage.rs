use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Profile;
use crate::teams;

/// Leser inn profil fra disk (JSON).
/// Hvis filen ikke finnes, returneres en default-profil.
pub fn load_profile(path: &str) -> Result<Profile> {
    if !Path::new(path).exists() {
        log::warn!("fant ikke profil på {}, returnerer default", path);
        return Ok(Profile::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("kunne ikke lese profil fra {path}"))?;
    let profile: Profile =
        serde_json::from_str(&contents).with_context(|| format!("ugyldig profil-JSON i {path}"))?;

    if let Some(team) = profile.team.as_deref() {
        if !teams::is_known(team) {
            log::warn!("ukjent lag i profil: {}", team);
        }
    }

    log::info!("profil lastet fra {}", path);
    Ok(profile)
}

/// Lagrer profil til disk som JSON (pretty-print).
pub fn save_profile(profile: &Profile, path: &str) -> Result<()> {
    let json =
        serde_json::to_string_pretty(profile).context("kunne ikke serialisere profil")?;
    std::fs::write(path, json).with_context(|| format!("kunne ikke skrive profil til {path}"))?;
    log::info!("profil lagret til {}", path);
    Ok(())
}
