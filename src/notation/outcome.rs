use super::notation::Notation;
use super::notation::Pending;
use super::suggest::suggest;
use super::token::Token;
use super::token::tokenize;
use crate::RANKS_HINT;
use crate::SUITEDNESS_PROMPT;
use crate::cards::Rank;
use crate::cards::Suitedness;

/// Outcome of reading one snapshot of free-text hand input.
///
/// Recomputed from scratch on every change to the input. The only
/// transition a caller drives is `NeedsSuitedness -> Valid`, by appending
/// a suffix to the pending pair and parsing again (see [`Parse::resolve`]).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Parse {
    Empty,
    NeedsSuitedness {
        pending: Pending,
        message: String,
    },
    Valid {
        notation: Notation,
    },
    Invalid {
        message: String,
        suggestions: Vec<Notation>,
    },
}

impl Parse {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NeedsSuitedness { .. } => "needs_suitedness",
            Self::Valid { .. } => "valid",
            Self::Invalid { .. } => "invalid",
        }
    }
    pub fn notation(&self) -> Option<Notation> {
        match self {
            Self::Valid { notation } => Some(*notation),
            _ => None,
        }
    }
    /// Canonical text so far: the full notation, or the pending pair.
    pub fn normalized(&self) -> Option<String> {
        match self {
            Self::Valid { notation } => Some(notation.to_string()),
            Self::NeedsSuitedness { pending, .. } => Some(pending.to_string()),
            _ => None,
        }
    }
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::NeedsSuitedness { message, .. } | Self::Invalid { message, .. } => {
                Some(message.as_str())
            }
            _ => None,
        }
    }
    pub fn suggestions(&self) -> &[Notation] {
        match self {
            Self::Invalid { suggestions, .. } => suggestions.as_slice(),
            _ => &[],
        }
    }
    /// Appends the chosen suffix to the pending pair and parses again.
    /// Any other outcome is returned unchanged.
    pub fn resolve(&self, suitedness: Suitedness) -> Parse {
        match self {
            Self::NeedsSuitedness { pending, .. } => parse(&format!("{}{}", pending, suitedness)),
            other => other.clone(),
        }
    }
}

impl std::fmt::Display for Parse {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Valid { notation } => write!(f, "{:<6}{}", notation.to_string(), notation.label()),
            Self::NeedsSuitedness { pending, message } => write!(f, "{:<6}{}", pending.to_string(), message),
            Self::Invalid { message, suggestions } if suggestions.is_empty() => {
                write!(f, "invalid: {}", message)
            }
            Self::Invalid { message, suggestions } => write!(
                f,
                "invalid: {} (did you mean {}?)",
                message,
                suggestions
                    .iter()
                    .map(Notation::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

/// Reads free-text hand notation. Never panics; every input maps to
/// exactly one [`Parse`].
///
/// ```
/// use handnote::*;
/// assert!(parse(" aks ").normalized().as_deref() == Some("AKs"));
/// assert!(parse("ka").kind() == "needs_suitedness");
/// assert!(parse("").kind() == "empty");
/// ```
pub fn parse(raw: &str) -> Parse {
    let text = raw.trim().to_uppercase();
    if text.is_empty() {
        return Parse::Empty;
    }
    let parse = match classify(&tokenize(&text)) {
        Ok(parse) => parse,
        Err(message) => Parse::Invalid {
            suggestions: suggest(&text),
            message,
        },
    };
    log::debug!("{:<32}{:<32}", format!("parsed {:?}", raw), parse.kind());
    parse
}

/// Label for a canonical hand, e.g. "AKs" -> "Ace-King suited".
///
/// Only meaningful for the text of a `Valid` parse; anything else comes
/// back unchanged.
pub fn display(normalized: &str) -> String {
    Notation::try_from(normalized)
        .map(|notation| notation.label())
        .unwrap_or_else(|_| normalized.to_string())
}

/// Shapes a token stream into an outcome, or explains why it has none.
pub(crate) fn classify(tokens: &[Token]) -> Result<Parse, String> {
    let ranks = tokens.iter().filter_map(Token::rank).count();
    let stray = tokens.iter().find_map(Token::stray);
    match (ranks, stray) {
        (0 | 1, Some(c)) => return Err(format!("'{}' is not a rank; {}", c, RANKS_HINT)),
        (0 | 1, None) => return Err(format!("a hand needs two ranks; {}", RANKS_HINT)),
        (2, _) => {}
        (n, _) => return Err(format!("found {} ranks, but a hand has exactly two", n)),
    }
    match tokens {
        [Token::Rank(a), Token::Rank(b)] => Ok(pair_or_pending(*a, *b)),
        [Token::Rank(a), Token::Rank(b), _] if a == b => Ok(pair_or_pending(*a, *b)),
        [Token::Rank(a), Token::Rank(b), tail] => match tail.suffix() {
            Some(suitedness) => Ok(Parse::Valid {
                notation: Notation::new(*a, *b, suitedness),
            }),
            None => Ok(pair_or_pending(*a, *b)),
        },
        [Token::Rank(a), x, Token::Rank(b), y] => match (x.suit(), y.suit()) {
            (Some(x), Some(y)) if a == b && x == y => Err(format!("{}{} cannot be dealt twice", a, x)),
            (Some(x), Some(y)) => Ok(Parse::Valid {
                notation: Notation::new(*a, *b, Suitedness::from((x, y))),
            }),
            _ => Err(misshapen(stray)),
        },
        _ => Err(misshapen(stray)),
    }
}

fn misshapen(stray: Option<char>) -> String {
    match stray {
        Some(c) => format!("'{}' is not a rank or a suffix", c),
        None => "write both ranks first, then 's' or 'o'".to_string(),
    }
}

fn pair_or_pending(a: Rank, b: Rank) -> Parse {
    match a == b {
        true => Parse::Valid {
            notation: Notation::Pair(a),
        },
        false => Parse::NeedsSuitedness {
            pending: Pending::from((a, b)),
            message: SUITEDNESS_PROMPT.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::MAX_SUGGESTIONS;

    fn normalized(text: &str) -> String {
        parse(text).normalized().unwrap_or_default()
    }

    #[test]
    fn empty_input() {
        assert!(parse("") == Parse::Empty);
        assert!(parse("   ") == Parse::Empty);
        assert!(parse("\t\n") == Parse::Empty);
    }

    #[test]
    fn canonical_examples() {
        assert!(parse("AKs").kind() == "valid" && normalized("AKs") == "AKs");
        assert!(parse("qq").kind() == "valid" && normalized("qq") == "QQ");
        assert!(parse("87o").kind() == "valid" && normalized("87o") == "87o");
    }

    #[test]
    fn distinct_ranks_without_suffix_wait() {
        let parse = parse("ka");
        assert!(parse.kind() == "needs_suitedness");
        assert!(parse.normalized().as_deref() == Some("AK"));
        assert!(parse.message() == Some(SUITEDNESS_PROMPT));
    }

    #[test]
    fn every_pair_any_case_and_padding() {
        for rank in Rank::all() {
            let doubled = format!("{}{}", rank, rank);
            for text in [doubled.clone(), doubled.to_lowercase(), format!("  {} ", doubled)] {
                let parse = parse(&text);
                assert!(parse.notation() == Some(Notation::Pair(rank)));
                assert!(normalized(&text) == doubled);
            }
        }
    }

    #[test]
    fn pairs_ignore_suffix() {
        assert!(normalized("AAs") == "AA");
        assert!(normalized("22o") == "22");
        assert!(normalized("tt x") == "TT");
    }

    #[test]
    fn every_non_pair_with_suffix_any_order_and_case() {
        for notation in Notation::all().filter(|n| !n.is_pair()) {
            let suffix = notation.suitedness().map(|s| s.suffix()).unwrap_or_default();
            let reversed = format!("{}{}{}", notation.low(), notation.high(), suffix);
            assert!(parse(&reversed).notation() == Some(notation));
            assert!(parse(&reversed.to_uppercase()).notation() == Some(notation));
            assert!(parse(&notation.to_string().to_lowercase()).notation() == Some(notation));
        }
    }

    #[test]
    fn every_non_pair_without_suffix_waits() {
        for hi in Rank::all() {
            for lo in Rank::all().into_iter().filter(|lo| *lo < hi) {
                let parse = parse(&format!("{}{}", lo, hi));
                assert!(parse == Parse::NeedsSuitedness {
                    pending: Pending::from((hi, lo)),
                    message: SUITEDNESS_PROMPT.to_string(),
                });
            }
        }
    }

    #[test]
    fn unrecognized_trailing_char_waits() {
        assert!(parse("AKx").kind() == "needs_suitedness");
        assert!(parse("AKh").kind() == "needs_suitedness");
        assert!(normalized("AK!") == "AK");
    }

    #[test]
    fn only_the_letters_are_suffixes() {
        assert!(parse("AK♠").kind() == "needs_suitedness");
        assert!(parse("AK♥").kind() == "needs_suitedness");
        assert!(parse("ak s").kind() == "valid");
        assert!(normalized("A♠K♠") == "AKs");
        assert!(normalized("A♠Ks") == "AKs");
        assert!(normalized("A♠K♦") == "AKo");
    }

    #[test]
    fn catalogue_round_trips() {
        for notation in Notation::all() {
            assert!(parse(&notation.to_string()) == Parse::Valid { notation });
        }
    }

    #[test]
    fn supplying_suffix_always_resolves() {
        for notation in Notation::all().filter(|n| !n.is_pair()) {
            let waiting = parse(&format!("{}{}", notation.high(), notation.low()));
            let suitedness = notation.suitedness().unwrap();
            let resubmitted = format!("{}{}", waiting.normalized().unwrap(), suitedness);
            assert!(parse(&resubmitted) == Parse::Valid { notation });
            assert!(waiting.resolve(suitedness) == Parse::Valid { notation });
        }
    }

    #[test]
    fn resolve_leaves_other_outcomes() {
        let valid = parse("QQ");
        assert!(valid.resolve(Suitedness::Offsuit) == valid);
        assert!(Parse::Empty.resolve(Suitedness::Suited) == Parse::Empty);
    }

    #[test]
    fn ten_alias() {
        assert!(normalized("10k") == "KT");
        assert!(normalized("K10s") == "KTs");
        assert!(normalized("1010") == "TT");
    }

    #[test]
    fn explicit_cards_infer_suitedness() {
        assert!(normalized("AhKh") == "AKs");
        assert!(normalized("As Kd") == "AKo");
        assert!(normalized("AsKs") == "AKs");
        assert!(normalized("9c9d") == "99");
        assert!(normalized("K♥A♥") == "AKs");
        assert!(parse("AhAh").kind() == "invalid");
    }

    #[test]
    fn invalid_inputs_explain() {
        for text in ["xyz", "A", "1", "AKQ", "AKso", "A?K", "AsK"] {
            let parse = parse(text);
            assert!(parse.kind() == "invalid", "{}", text);
            assert!(!parse.message().unwrap_or_default().is_empty());
            assert!(parse.suggestions().len() <= MAX_SUGGESTIONS);
        }
    }

    #[test]
    fn invalid_message_names_the_culprit() {
        assert!(parse("xyz").message().unwrap().contains("'X'"));
        assert!(parse("AKQ").message().unwrap().contains("3 ranks"));
    }

    #[test]
    fn impossible_rank_suggests_ten() {
        assert!(parse("1Ks").suggestions().first() == Notation::try_from("KTs").ok().as_ref());
        assert!(parse("A1").kind() == "invalid");
    }

    #[test]
    fn display_labels() {
        assert!(display("AKs") == "Ace-King suited");
        assert!(display("87o") == "Eight-Seven offsuit");
        assert!(display("22") == "Two-Two pocket pair");
    }

    #[test]
    fn display_passes_through_garbage() {
        assert!(display("zz") == "zz");
    }

    #[test]
    fn noise_never_panics() {
        const ALPHABET: &[char] = &['A', 'k', 'q', 'T', '1', '0', '9', '2', 's', 'o', 'h', ' ', 'x', '♠', 'ß', '-'];
        for _ in 0..2048 {
            let len = rand::random_range(0..10);
            let text = (0..len)
                .map(|_| ALPHABET[rand::random_range(0..ALPHABET.len())])
                .collect::<String>();
            let parse = parse(&text);
            assert!(parse.suggestions().len() <= MAX_SUGGESTIONS);
            if let Some(notation) = parse.notation() {
                assert!(Notation::try_from(notation.to_string().as_str()) == Ok(notation));
            }
        }
        let _ = parse(&Notation::random().label());
    }
}
