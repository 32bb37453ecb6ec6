use once_cell::sync::Lazy;

use crate::curve::Curve;
use crate::models::{Sex, TimeMmSs};
use crate::parse::{parse_mm_ss, parse_reps, ParseError};

// Kurvetabellene under er fasit for hele scoringen. Hvert anker er
// (målt verdi, score); segmentene mellom interpoleres lineært og alt
// utenfor klampes til nærmeste ytteranker (0 eller 100).

/// 3000m: samme tabell for begge kjønn i dag (kilden hadde bare én kurve),
/// men oppslaget går via kjønn slik at kvinnekurven kan avvike senere.
static ENDURANCE: Lazy<Curve> =
    Lazy::new(|| Curve::new(&[(9.5, 100.0), (14.25, 60.0), (18.0, 0.0)]));

static SPRINT_MALE: Lazy<Curve> =
    Lazy::new(|| Curve::new(&[(55.0, 100.0), (60.0, 90.0), (80.0, 60.0), (120.0, 0.0)]));

static SPRINT_FEMALE: Lazy<Curve> =
    Lazy::new(|| Curve::new(&[(60.0, 100.0), (82.0, 80.0), (106.0, 60.0), (150.0, 0.0)]));

static PULL_UPS_MALE: Lazy<Curve> = Lazy::new(|| {
    Curve::new(&[(0.0, 0.0), (1.0, 10.0), (9.0, 60.0), (27.0, 90.0), (40.0, 100.0)])
});

// 1 og 2 repetisjoner er faste ankre (55/60), ikke interpolert fra null.
static PULL_UPS_FEMALE: Lazy<Curve> = Lazy::new(|| {
    Curve::new(&[(0.0, 0.0), (1.0, 55.0), (2.0, 60.0), (10.0, 90.0), (15.0, 100.0)])
});

static PUSH_UPS_MALE: Lazy<Curve> =
    Lazy::new(|| Curve::new(&[(0.0, 0.0), (37.0, 60.0), (120.0, 100.0)]));

static PUSH_UPS_FEMALE: Lazy<Curve> = Lazy::new(|| {
    Curve::new(&[(0.0, 0.0), (10.0, 40.0), (20.0, 60.0), (40.0, 80.0), (80.0, 100.0)])
});

fn endurance_curve(_sex: Sex) -> &'static Curve {
    &ENDURANCE
}

fn sprint_curve(sex: Sex) -> &'static Curve {
    match sex {
        Sex::Male => &SPRINT_MALE,
        Sex::Female => &SPRINT_FEMALE,
    }
}

fn pull_up_curve(sex: Sex) -> &'static Curve {
    match sex {
        Sex::Male => &PULL_UPS_MALE,
        Sex::Female => &PULL_UPS_FEMALE,
    }
}

fn push_up_curve(sex: Sex) -> &'static Curve {
    match sex {
        Sex::Male => &PUSH_UPS_MALE,
        Sex::Female => &PUSH_UPS_FEMALE,
    }
}

/// Kondisjonsscore for 3000m – tid som desimalminutter inn i kurven. 0–100.
pub fn score_endurance(minutes: i32, seconds: i32, sex: Sex) -> u8 {
    let t = TimeMmSs::new(minutes, seconds).as_minutes();
    endurance_curve(sex).score(t)
}

/// Som [`score_endurance`], men med "MM:SS"-tekst.
pub fn score_endurance_str(time: &str, sex: Sex) -> Result<u8, ParseError> {
    let (minutes, seconds) = parse_mm_ss(time)?;
    Ok(score_endurance(minutes, seconds, sex))
}

/// Sprintscore for 400m – tid som totalsekunder inn i kurven. 0–100.
pub fn score_sprint(minutes: i32, seconds: i32, sex: Sex) -> u8 {
    let t = TimeMmSs::new(minutes, seconds).as_seconds();
    sprint_curve(sex).score(t)
}

/// Som [`score_sprint`], men med "MM:SS"-tekst.
pub fn score_sprint_str(time: &str, sex: Sex) -> Result<u8, ParseError> {
    let (minutes, seconds) = parse_mm_ss(time)?;
    Ok(score_sprint(minutes, seconds, sex))
}

/// Kroppshevinger. Negative reps klampes til 0-score, over makspunktet 100.
pub fn score_pull_ups(reps: i32, sex: Sex) -> u8 {
    pull_up_curve(sex).score(f64::from(reps))
}

/// Armhevinger. Samme klamp-policy som kroppshevinger.
pub fn score_push_ups(reps: i32, sex: Sex) -> u8 {
    push_up_curve(sex).score(f64::from(reps))
}

/// Styrke = 0.5 × kroppshevinger + 0.5 × armhevinger, avrundet.
pub fn score_strength(pull_up_reps: i32, push_up_reps: i32, sex: Sex) -> u8 {
    let pull = f64::from(score_pull_ups(pull_up_reps, sex));
    let push = f64::from(score_push_ups(push_up_reps, sex));
    (0.5 * pull + 0.5 * push).round() as u8
}

/// Som [`score_strength`], men med repetisjonstall som tekst.
pub fn score_strength_str(
    pull_up_reps: &str,
    push_up_reps: &str,
    sex: Sex,
) -> Result<u8, ParseError> {
    Ok(score_strength(
        parse_reps(pull_up_reps)?,
        parse_reps(push_up_reps)?,
        sex,
    ))
}

/// Kombiner OFS: aritmetisk snitt av de tre kategoriscorene, avrundet.
/// Delscorene er allerede 0–100, så totalen er det også.
pub fn combine_overall(aerobic: u8, anaerobic: u8, strength: u8) -> u8 {
    let sum = f64::from(aerobic) + f64::from(anaerobic) + f64::from(strength);
    (sum / 3.0).round() as u8
}
