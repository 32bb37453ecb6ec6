use crate::models::{ScoreReport, ScoreSet, TestResults};
use crate::ofs::{combine_overall, score_endurance, score_sprint, score_strength};

/// Bygger score-rapport fra registrerte testresultater.
/// Kategorier uten data gir ingen delscore; OFS krever alle tre.
pub fn build_report(results: &TestResults) -> ScoreReport {
    let sex = results.sex;

    let aerobic = results
        .run_3000m
        .map(|t| score_endurance(t.minutes, t.seconds, sex));

    let anaerobic = results
        .sprint_400m
        .map(|t| score_sprint(t.minutes, t.seconds, sex));

    // Styrke krever begge øvelsene – halv styrketest gir ingen delscore.
    let strength = match (results.pull_ups, results.push_ups) {
        (Some(pull), Some(push)) => Some(score_strength(pull, push, sex)),
        _ => None,
    };

    let overall = match (aerobic, anaerobic, strength) {
        (Some(a), Some(b), Some(c)) => Some(combine_overall(a, b, c)),
        _ => None,
    };

    let mut badges = Vec::new();
    if aerobic == Some(100) {
        badges.push("Maks kondisjon".to_string());
    }
    if matches!(strength, Some(s) if s >= 90) {
        badges.push("Styrke 90+".to_string());
    }
    if matches!(overall, Some(o) if o >= 90) {
        badges.push("Topp form".to_string());
    }

    ScoreReport {
        scores: ScoreSet {
            aerobic,
            anaerobic,
            strength,
            overall,
        },
        badges,
    }
}
