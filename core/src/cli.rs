use crate::models::Profile;
use crate::report::build_report;

/// Skriver en enkel score-rapport til stdout.
pub fn print_score_report(profile: &Profile) {
    println!("--- Score Report ---");
    if let Some(name) = &profile.name {
        println!("Navn: {}", name);
    }
    if let Some(team) = &profile.team {
        println!("Lag:  {}", team);
    }

    match &profile.test_results {
        Some(results) => {
            let report = build_report(results);
            let s = &report.scores;
            println!("Kondis (3000m): {}", fmt_score(s.aerobic));
            println!("Sprint (400m):  {}", fmt_score(s.anaerobic));
            println!("Styrke:         {}", fmt_score(s.strength));
            println!("Totalt (OFS):   {}", fmt_score(s.overall));
            if !report.badges.is_empty() {
                println!("Badges: {}", report.badges.join(", "));
            }
        }
        None => println!("Ingen testresultater registrert."),
    }
}

fn fmt_score(score: Option<u8>) -> String {
    match score {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
