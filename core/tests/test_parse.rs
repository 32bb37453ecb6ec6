use fitgraph_core::{
    parse_mm_ss, parse_reps, score_endurance_str, score_strength_str, ParseError, Sex,
};

#[test]
fn test_parse_mm_ss_ok() {
    assert_eq!(parse_mm_ss("9:30").unwrap(), (9, 30));
    assert_eq!(parse_mm_ss("0:55").unwrap(), (0, 55));
    // whitespace rundt delene tolereres
    assert_eq!(parse_mm_ss(" 12 : 05 ").unwrap(), (12, 5));
}

#[test]
fn test_parse_mm_ss_invalid() {
    // ren tekst, manglende sekunder, og for mange deler skal alle feile
    for input in ["abc", "9", "9:30:00", "9:xx", "", ":"] {
        let err = parse_mm_ss(input).unwrap_err();
        match err {
            ParseError::InvalidFormat { input: i, expected } => {
                assert_eq!(i, input);
                assert_eq!(expected, "MM:SS");
            }
        }
    }
}

#[test]
fn test_parse_reps() {
    assert_eq!(parse_reps("25").unwrap(), 25);
    assert_eq!(parse_reps(" 0 ").unwrap(), 0);
    assert!(parse_reps("mange").is_err());
    assert!(parse_reps("12.5").is_err());
}

#[test]
fn test_endurance_str_propagates_parse_error() {
    assert!(score_endurance_str("abc", Sex::Male).is_err());
    assert!(score_endurance_str("9", Sex::Male).is_err());
}

#[test]
fn test_strength_str_propagates_parse_error() {
    assert!(score_strength_str("ti", "30", Sex::Male).is_err());
    assert!(score_strength_str("10", "tretti", Sex::Male).is_err());
    assert!(score_strength_str("10", "30", Sex::Male).is_ok());
}

#[test]
fn test_error_message_carries_input() {
    let err = parse_mm_ss("abc").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("abc"), "feilmelding mangler input: {}", msg);
    assert!(msg.contains("MM:SS"), "feilmelding mangler format: {}", msg);
}
