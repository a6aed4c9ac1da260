//! Seed sources and the one-per-process [`Seed`].
//!
//! A [`Seed`] is read once, before any draw, from a [`SeedSource`]: the
//! operating system CSPRNG by default, or the raw bytes of a file such as
//! `/dev/urandom`. Reading never fails outright. When the source cannot be
//! used the seed falls back to the wall clock, which is predictable; the
//! fallback is logged at `warn` level and flagged on the returned seed so the
//! caller can surface it.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::conditioning::{SEED_LEN, condition_seed};

/// Where seed material is requested from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Operating system CSPRNG (`getrandom`).
    #[default]
    Os,
    /// Raw bytes read from a file; at most [`SEED_LEN`] bytes are used.
    File(PathBuf),
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Os => write!(f, "os"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Where the material of a seed actually came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOrigin {
    Os,
    File(PathBuf),
    /// Caller-supplied bytes.
    Explicit,
    /// Wall-clock fallback after the requested source failed.
    Clock,
}

impl fmt::Display for SeedOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Os => write!(f, "operating system entropy"),
            Self::File(path) => write!(f, "seed file {}", path.display()),
            Self::Explicit => write!(f, "explicit seed"),
            Self::Clock => write!(f, "system time"),
        }
    }
}

/// Conditioned generator seed.
#[derive(Debug)]
pub struct Seed {
    bytes: [u8; SEED_LEN],
    origin: SeedOrigin,
    fallback_reason: Option<String>,
}

impl Seed {
    /// Read seed material from `source`, falling back to the clock on failure.
    pub fn from_source(source: &SeedSource) -> Self {
        let material = match source {
            SeedSource::Os => read_os().map(|raw| (raw, SeedOrigin::Os)),
            SeedSource::File(path) => {
                read_file(path).map(|raw| (raw, SeedOrigin::File(path.clone())))
            }
        };

        match material {
            Ok((raw, origin)) => {
                log::debug!("seeded from {origin} ({} bytes)", raw.len());
                Self {
                    bytes: condition_seed(&raw),
                    origin,
                    fallback_reason: None,
                }
            }
            Err(reason) => {
                log::warn!("{source}: {reason}; falling back to system time as random seed");
                let mut seed = Self::from_clock();
                seed.fallback_reason = Some(format!("{source}: {reason}"));
                seed
            }
        }
    }

    /// Seed from explicit material. Equal material gives an equal seed.
    pub fn from_bytes(material: &[u8]) -> Self {
        Self {
            bytes: condition_seed(material),
            origin: SeedOrigin::Explicit,
            fallback_reason: None,
        }
    }

    /// Seed from the current wall-clock time. Predictable.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self {
            bytes: condition_seed(&nanos.to_le_bytes()),
            origin: SeedOrigin::Clock,
            fallback_reason: None,
        }
    }

    pub fn bytes(&self) -> [u8; SEED_LEN] {
        self.bytes
    }

    pub fn origin(&self) -> &SeedOrigin {
        &self.origin
    }

    /// True when the requested source failed and the clock was used instead.
    pub fn is_fallback(&self) -> bool {
        self.fallback_reason.is_some()
    }

    /// Why the requested source was not used, if it was not.
    pub fn fallback_reason(&self) -> Option<&str> {
        self.fallback_reason.as_deref()
    }
}

fn read_os() -> Result<Vec<u8>, String> {
    let mut buf = vec![0u8; SEED_LEN];
    getrandom::fill(&mut buf).map_err(|e| e.to_string())?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<Vec<u8>, String> {
    let file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    let mut buf = Vec::with_capacity(SEED_LEN);
    file.take(SEED_LEN as u64)
        .read_to_end(&mut buf)
        .map_err(|e| e.to_string())?;
    if buf.is_empty() {
        return Err("no seed bytes could be read".to_string());
    }
    if buf.len() < SEED_LEN {
        log::debug!("{}: short seed ({} of {SEED_LEN} bytes)", path.display(), buf.len());
    }
    Ok(buf)
}
