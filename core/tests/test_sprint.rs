use fitgraph_core::{score_sprint, score_sprint_str, Sex};

#[test]
fn test_male_breakpoints() {
    assert_eq!(score_sprint(0, 55, Sex::Male), 100);
    assert_eq!(score_sprint(1, 0, Sex::Male), 90);
    assert_eq!(score_sprint(1, 20, Sex::Male), 60);
    assert_eq!(score_sprint(2, 0, Sex::Male), 0);
}

#[test]
fn test_female_breakpoints() {
    assert_eq!(score_sprint(1, 0, Sex::Female), 100);
    assert_eq!(score_sprint(1, 22, Sex::Female), 80);
    assert_eq!(score_sprint(1, 46, Sex::Female), 60);
    assert_eq!(score_sprint(2, 30, Sex::Female), 0);
}

#[test]
fn test_interpolated_values() {
    // herrer 1:10 i segmentet (60,90)–(80,60): 90 - 1.5*10 = 75
    assert_eq!(score_sprint(1, 10, Sex::Male), 75);
    // herrer 1:30 i segmentet (80,60)–(120,0): 60 - 1.5*10 = 45
    assert_eq!(score_sprint(1, 30, Sex::Male), 45);
    // kvinner 1:30 i segmentet (82,80)–(106,60): 80 - 20/24*8 = 73.3 → 73
    assert_eq!(score_sprint(1, 30, Sex::Female), 73);
}

#[test]
fn test_clamp_fast_and_slow() {
    assert_eq!(score_sprint(0, 40, Sex::Male), 100);
    assert_eq!(score_sprint(0, -30, Sex::Female), 100);
    assert_eq!(score_sprint(10, 0, Sex::Male), 0);
    assert_eq!(score_sprint(10, 0, Sex::Female), 0);
}

#[test]
fn test_monotonic_non_increasing_both_sexes() {
    for sex in [Sex::Male, Sex::Female] {
        let mut prev = 100u8;
        for sec in 0..=300 {
            let s = score_sprint(0, sec, sex);
            assert!(s <= prev, "score økte ved {} sek ({:?})", sec, sex);
            prev = s;
        }
    }
}

#[test]
fn test_string_variant_matches_numeric() {
    let fra_tekst = score_sprint_str("1:22", Sex::Female).unwrap();
    assert_eq!(fra_tekst, score_sprint(1, 22, Sex::Female));
}
