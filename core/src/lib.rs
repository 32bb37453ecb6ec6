pub mod cli;
pub mod curve;
pub mod models;
pub mod ofs;
pub mod parse;
pub mod report;
pub mod storage;
pub mod teams;

pub use curve::Curve;
pub use models::{Profile, ScoreReport, ScoreSet, Sex, TestResults, TimeMmSs};
pub use ofs::{
    combine_overall, score_endurance, score_endurance_str, score_pull_ups, score_push_ups,
    score_sprint, score_sprint_str, score_strength, score_strength_str,
};
pub use parse::{parse_mm_ss, parse_reps, ParseError};
pub use report::build_report;
pub use storage::{load_profile, save_profile};

use thiserror::Error;

/// Feil fra JSON-inngangen. Input-varianten bærer JSON-stien til feltet
/// som feilet (via serde_path_to_error), til bruk i feilmeldinger i app-laget.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("ugyldig input-JSON: {0}")]
    Input(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// JSON-inn/JSON-ut inngangspunkt for app-laget:
/// testresultater som JSON → score-rapport som JSON.
pub fn score_report_json(results_json: &str) -> Result<String, ReportError> {
    let de = &mut serde_json::Deserializer::from_str(results_json);
    let results: TestResults =
        serde_path_to_error::deserialize(de).map_err(|e| ReportError::Input(e.to_string()))?;

    let report = report::build_report(&results);
    Ok(serde_json::to_string(&report)?)
}
