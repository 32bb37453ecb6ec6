use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parse::{parse_mm_ss, ParseError};

/// Kjønnskategori – velger hvilken kurvetabell som gjelder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Løpstid. "MM:SS" på JSON-siden, (minutter, sekunder) internt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeMmSs {
    pub minutes: i32,
    pub seconds: i32,
}

impl TimeMmSs {
    pub fn new(minutes: i32, seconds: i32) -> Self {
        Self { minutes, seconds }
    }

    /// Desimalminutter (3000m-kurven regner i minutter).
    pub fn as_minutes(&self) -> f64 {
        f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }

    /// Totalsekunder (400m-kurven regner i sekunder).
    pub fn as_seconds(&self) -> f64 {
        f64::from(self.minutes) * 60.0 + f64::from(self.seconds)
    }
}

impl TryFrom<String> for TimeMmSs {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, ParseError> {
        let (minutes, seconds) = parse_mm_ss(&s)?;
        Ok(Self { minutes, seconds })
    }
}

impl From<TimeMmSs> for String {
    fn from(t: TimeMmSs) -> String {
        format!("{}:{:02}", t.minutes, t.seconds)
    }
}

/// Rå testresultater slik app-laget registrerer dem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResults {
    pub sex: Sex,
    #[serde(default)]
    pub run_3000m: Option<TimeMmSs>,
    #[serde(default)]
    pub sprint_400m: Option<TimeMmSs>,
    #[serde(default)]
    pub pull_ups: Option<i32>,
    #[serde(default)]
    pub push_ups: Option<i32>,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Brukerprofil (speiler profil-dokumentet i app-laget).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub test_results: Option<TestResults>,
}

/// Delscorer per kategori + total (OFS). None = mangler testdata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ScoreSet {
    pub aerobic: Option<u8>,
    pub anaerobic: Option<u8>,
    pub strength: Option<u8>,
    pub overall: Option<u8>,
}

/// Ferdig score-rapport for visningslaget.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScoreReport {
    pub scores: ScoreSet,
    pub badges: Vec<String>,
}
