use super::models::{PlayerRecord, Roster};

/// Outcome of looking up one query name in the roster
#[derive(Debug, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a PlayerRecord),
    NotFound,
    Ambiguous(Vec<&'a PlayerRecord>),
}

/// Resolves a query against rostered, active players by case-insensitive substring.
///
/// Lenient mode takes the first match in roster order. Strict mode only accepts
/// several matches when exactly one of them is an exact full-name match.
pub fn resolve<'a>(roster: &'a Roster, query: &str, strict: bool) -> Resolution<'a> {
    let needle = query.trim().to_lowercase();
    let mut matches = roster
        .iter()
        .filter(|p| p.is_eligible() && name_contains(p, &needle));

    if !strict {
        return matches.next().map_or(Resolution::NotFound, Resolution::Found);
    }

    let candidates: Vec<&PlayerRecord> = matches.collect();
    match candidates.as_slice() {
        [] => Resolution::NotFound,
        [only] => Resolution::Found(*only),
        _ => {
            let exact: Vec<&PlayerRecord> = candidates
                .iter()
                .copied()
                .filter(|p| p.name().to_lowercase() == needle)
                .collect();
            match exact.as_slice() {
                [player] => Resolution::Found(*player),
                _ => Resolution::Ambiguous(candidates),
            }
        }
    }
}

/// Every player whose name contains the query, rostered or not
pub fn search<'a>(roster: &'a Roster, query: &str) -> Vec<&'a PlayerRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    roster.iter().filter(|p| name_contains(p, &needle)).collect()
}

fn name_contains(player: &PlayerRecord, needle: &str) -> bool {
    player
        .full_name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(needle))
}
