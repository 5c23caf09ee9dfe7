//! Output helpers shared by command handlers.

use crate::fpl::ranking::RankedTeam;

/// Capitalise the first letter of every word, lowercasing the rest.
///
/// A "word" starts after any non-alphabetic character, so `nott'm forest`
/// becomes `Nott'M Forest`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// `Arsenal (ARS) - Strength: 1234.57 (Previously chosen)`
pub fn format_ranked_line(team: &RankedTeam) -> String {
    let chosen = if team.previously_chosen {
        " (Previously chosen)"
    } else {
        ""
    };
    format!(
        "{} ({}) - Strength: {:.2}{}",
        team.name, team.short_name, team.score, chosen
    )
}
