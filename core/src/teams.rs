/// Statisk, read-only lagliste (speiler valglisten i app-frontenden).
/// Bevisst konstant – aldri muterbar global state.
pub const TEAMS: &[&str] = &["Alfa", "Bravo", "Charlie", "Delta", "Echo"];

/// Oppslag uavhengig av store/små bokstaver.
pub fn is_known(name: &str) -> bool {
    TEAMS.iter().any(|t| t.eq_ignore_ascii_case(name))
}
