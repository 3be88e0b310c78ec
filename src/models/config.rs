use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::energy::{ActivityLevel, Sex};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub units: Units,
    #[serde(default)]
    pub goal: Goal,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub height_cm: Option<f64>,
    pub age_years: Option<u32>,
    #[serde(default)]
    pub sex: Sex,
    #[serde(default)]
    pub activity: ActivityLevel,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Units {
    #[serde(default = "default_system")]
    pub system: String,
}

fn default_system() -> String {
    "metric".to_string()
}

impl Default for Units {
    fn default() -> Self {
        Self {
            system: "metric".to_string(),
        }
    }
}

impl Units {
    pub fn imperial() -> Self {
        Self {
            system: "imperial".to_string(),
        }
    }

    pub fn is_imperial(&self) -> bool {
        self.system == "imperial"
    }
}

/// Weight goal plus the pacing policy used to size the daily calorie
/// adjustment. The two policies are not numerically equivalent; the active
/// one is an explicit config choice, never inferred.
#[derive(Debug, Serialize, Deserialize)]
pub struct Goal {
    pub target_weight_kg: Option<f64>,
    #[serde(default)]
    pub pacing: Pacing,
    #[serde(default = "default_horizon_weeks")]
    pub horizon_weeks: u32,
    #[serde(default = "default_rate_kg_per_week")]
    pub rate_kg_per_week: f64,
}

fn default_horizon_weeks() -> u32 {
    12
}

fn default_rate_kg_per_week() -> f64 {
    0.5
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            target_weight_kg: None,
            pacing: Pacing::Horizon,
            horizon_weeks: 12,
            rate_kg_per_week: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// Amortize the full weight delta over `horizon_weeks`.
    #[default]
    Horizon,
    /// Close the delta at `rate_kg_per_week`.
    Rate,
}

impl std::fmt::Display for Pacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Horizon => write!(f, "horizon"),
            Self::Rate => write!(f, "rate"),
        }
    }
}

impl FromStr for Pacing {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "horizon" => Ok(Self::Horizon),
            "rate" => Ok(Self::Rate),
            _ => anyhow::bail!("invalid pacing: {} (expected horizon/rate)", s),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;

            file.write_all(contents.as_bytes())?;

            // Ensure permissions are 0o600 even if file already existed
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("FITLEDGER_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .expect("cannot resolve home directory")
            .join(".fitledger")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
