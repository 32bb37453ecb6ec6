use thiserror::Error;

/// Feil ved parsing av tekst-input. Numeriske verdier utenfor fysiologisk
/// område er IKKE feil (de klampes i kurvene) – kun ugyldig tekst feiler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("ugyldig format: '{input}' (forventet {expected})")]
    InvalidFormat {
        input: String,
        expected: &'static str,
    },
}

/// "MM:SS" → (minutter, sekunder). Feiler på alt annet enn to heltallsdeler.
pub fn parse_mm_ss(s: &str) -> Result<(i32, i32), ParseError> {
    let invalid = || ParseError::InvalidFormat {
        input: s.to_string(),
        expected: "MM:SS",
    };

    let mut parts = s.split(':');
    let (Some(min), Some(sec), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let min: i32 = min.trim().parse().map_err(|_| invalid())?;
    let sec: i32 = sec.trim().parse().map_err(|_| invalid())?;
    Ok((min, sec))
}

/// Repetisjonstall som tekst → heltall.
pub fn parse_reps(s: &str) -> Result<i32, ParseError> {
    s.trim().parse().map_err(|_| ParseError::InvalidFormat {
        input: s.to_string(),
        expected: "heltall (repetisjoner)",
    })
}
