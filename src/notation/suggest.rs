use super::notation::Notation;
use super::outcome::Parse;
use super::outcome::classify;
use super::token::Token;
use super::token::tokenize;
use crate::MAX_SUGGESTION_DISTANCE;
use crate::MAX_SUGGESTION_INPUT;
use crate::MAX_SUGGESTIONS;
use crate::cards::Rank;
use std::cmp::Reverse;

/// Nearby canonical hands for text that did not parse.
///
/// Corrections of an impossible '1' rank come first, then the closest
/// catalogue entries by edit distance. At most [`MAX_SUGGESTIONS`].
pub fn suggest(text: &str) -> Vec<Notation> {
    let cleaned = clean(text);
    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
    for notation in corrections(&cleaned).into_iter().chain(nearest(&cleaned)) {
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
        if !suggestions.contains(&notation) {
            suggestions.push(notation);
        }
    }
    suggestions
}

/// Uppercase, no whitespace, "10" spelled as T.
fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
        .replace("10", "T")
}

/// A lone '1' can only have meant a ten.
fn corrections(cleaned: &str) -> Vec<Notation> {
    if !cleaned.contains('1') {
        return Vec::new();
    }
    match classify(&tokenize(&cleaned.replace('1', "T"))) {
        Ok(Parse::Valid { notation }) => vec![notation],
        Ok(Parse::NeedsSuitedness { pending, .. }) => pending.options().to_vec(),
        _ => Vec::new(),
    }
}

/// Catalogue entries within edit distance, closest first. Among equally
/// close entries, those sharing more of the typed ranks come first, then
/// catalogue order. Something of the input has to survive, so the
/// distance stays below the input length.
fn nearest(cleaned: &str) -> Vec<Notation> {
    let length = cleaned.chars().count();
    if length > MAX_SUGGESTION_INPUT {
        return Vec::new();
    }
    let limit = MAX_SUGGESTION_DISTANCE.min(length.saturating_sub(1));
    let ranks = tokenize(cleaned).iter().filter_map(Token::rank).collect::<Vec<_>>();
    let mut scored = Notation::all()
        .map(|notation| (distance(cleaned, notation), shared(&ranks, notation), notation))
        .filter(|(d, _, _)| *d <= limit)
        .inspect(|(d, _, notation)| log::trace!("{:<32}{:<8}{}", "suggestion candidate", notation.to_string(), d))
        .collect::<Vec<_>>();
    scored.sort_by_key(|(d, s, _)| (*d, Reverse(*s)));
    scored.into_iter().map(|(_, _, notation)| notation).collect()
}

/// How many of the notation's two ranks were typed, each typed rank
/// counted once.
fn shared(ranks: &[Rank], notation: Notation) -> usize {
    let mut ranks = ranks.to_vec();
    [notation.high(), notation.low()]
        .into_iter()
        .filter(|rank| match ranks.iter().position(|r| r == rank) {
            Some(i) => {
                ranks.swap_remove(i);
                true
            }
            None => false,
        })
        .count()
}

/// Edit distance to the notation, written either rank-first.
fn distance(cleaned: &str, notation: Notation) -> usize {
    let suffix = notation
        .suitedness()
        .map(|s| s.suffix().to_ascii_uppercase().to_string())
        .unwrap_or_default();
    let forward = format!("{}{}{}", notation.high(), notation.low(), suffix);
    let reverse = format!("{}{}{}", notation.low(), notation.high(), suffix);
    levenshtein(cleaned, &forward).min(levenshtein(cleaned, &reverse))
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b = b.chars().collect::<Vec<_>>();
    let mut prev = (0..=b.len()).collect::<Vec<_>>();
    let mut curr = vec![0; b.len() + 1];
    for (i, x) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, y) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(x != *y);
            let delete = prev[j + 1] + 1;
            let insert = curr[j] + 1;
            curr[j + 1] = substitute.min(delete).min(insert);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
