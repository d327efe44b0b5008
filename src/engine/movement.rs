pub enum DirectionMatch<'a> {
    None,
    One(&'a str),
    /// Labels that all matched; the caller should ask the player to pick.
    Ambiguous(Vec<&'a str>),
}

/// Resolve free-form player input against a room's exit labels (as listed
/// in a snapshot, declaration order).
///
/// An exact label match (case-insensitive) wins outright. Failing that, a
/// single-character input matches labels by first letter, so "n" works for
/// "north" but only while no other exit starts with the same letter. This is
/// an input convenience for shells; the engine's own `go` demands the exact
/// declared label.
pub fn resolve_direction<'a>(labels: &'a [String], input: &str) -> DirectionMatch<'a> {
    let input = input.trim();
    if input.is_empty() {
        return DirectionMatch::None;
    }

    if let Some(label) = labels.iter().find(|l| l.eq_ignore_ascii_case(input)) {
        return DirectionMatch::One(label);
    }

    // Abbreviations: only if the input is EXACTLY one character (e.g. "s")
    let mut chars = input.chars();
    let abbrev = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return DirectionMatch::None,
    };

    let abbrev_matches: Vec<&str> = labels
        .iter()
        .filter(|l| {
            l.chars()
                .next()
                .map(|c| c.eq_ignore_ascii_case(&abbrev))
                .unwrap_or(false)
        })
        .map(|l| l.as_str())
        .collect();

    match abbrev_matches.len() {
        0 => DirectionMatch::None,
        1 => DirectionMatch::One(abbrev_matches[0]),
        _ => DirectionMatch::Ambiguous(abbrev_matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_match_ignores_case() {
        let exits = labels(&["north", "east"]);
        match resolve_direction(&exits, "North") {
            DirectionMatch::One(label) => assert_eq!(label, "north"),
            _ => panic!("expected a unique match"),
        }
    }

    #[test]
    fn single_letter_abbreviation_resolves_when_unique() {
        let exits = labels(&["north", "east"]);
        match resolve_direction(&exits, "n") {
            DirectionMatch::One(label) => assert_eq!(label, "north"),
            _ => panic!("expected a unique match"),
        }
    }

    #[test]
    fn shared_first_letter_is_ambiguous() {
        let exits = labels(&["up", "under"]);
        match resolve_direction(&exits, "u") {
            DirectionMatch::Ambiguous(matched) => assert_eq!(matched, vec!["up", "under"]),
            _ => panic!("expected ambiguity"),
        }
    }

    #[test]
    fn multi_letter_prefixes_do_not_abbreviate() {
        let exits = labels(&["north"]);
        assert!(matches!(
            resolve_direction(&exits, "nor"),
            DirectionMatch::None
        ));
    }

    #[test]
    fn unknown_direction_matches_nothing() {
        let exits = labels(&["north"]);
        assert!(matches!(
            resolve_direction(&exits, "south"),
            DirectionMatch::None
        ));
        assert!(matches!(resolve_direction(&exits, ""), DirectionMatch::None));
    }
}
