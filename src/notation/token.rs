use crate::cards::Rank;
use crate::cards::Suit;
use crate::cards::Suitedness;

/// One lexical unit of free-text hand input.
///
/// The letter `S` gets its own token: it is the suited suffix when it
/// trails both ranks, and a spade when it follows a rank in card form.
/// Other suits, the spade glyph included, are never a suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Rank(Rank),
    Suit(Suit),
    Suited,
    Offsuit,
    Stray(char),
}

impl Token {
    pub fn rank(&self) -> Option<Rank> {
        match self {
            Self::Rank(r) => Some(*r),
            _ => None,
        }
    }
    /// The suit this token means right after a rank.
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Self::Suit(s) => Some(*s),
            Self::Suited => Some(Suit::S),
            _ => None,
        }
    }
    /// The suitedness this token means when it trails both ranks.
    pub fn suffix(&self) -> Option<Suitedness> {
        match self {
            Self::Suited => Some(Suitedness::Suited),
            Self::Offsuit => Some(Suitedness::Offsuit),
            _ => None,
        }
    }
    pub fn stray(&self) -> Option<char> {
        match self {
            Self::Stray(c) => Some(*c),
            _ => None,
        }
    }
}

/// Lexes text into tokens, ignoring whitespace and case. "10" is one ten.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .peekable();
    while let Some(c) = chars.next() {
        let token = match c {
            '1' if chars.peek() == Some(&'0') => {
                chars.next();
                Token::Rank(Rank::Ten)
            }
            'S' => Token::Suited,
            'O' => Token::Offsuit,
            c => Rank::try_from(c)
                .map(Token::Rank)
                .or_else(|_| Suit::try_from(c).map(Token::Suit))
                .unwrap_or(Token::Stray(c)),
        };
        tokens.push(token);
    }
    tokens
}
