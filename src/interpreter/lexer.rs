use logos::Logos;

/// Represents a lexical token in an infix boolean expression.
///
/// Every token is exactly one character wide. Characters that match none of
/// the variants below are reported by the lexer as errors and skipped by
/// [`tokenize`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A single-letter variable or literal, such as `a`, `T` or `f`.
    #[regex(r"[a-zA-Z]", parse_operand)]
    Operand(char),
    /// `+`
    #[token("+")]
    Or,
    /// `*`
    #[token("*")]
    And,
    /// `^`
    #[token("^")]
    Xor,
    /// `-`
    #[token("-")]
    Not,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// Returns the operator symbol as it appears in postfix output, or `None`
    /// for operands and parentheses.
    #[must_use]
    pub const fn operator_symbol(self) -> Option<char> {
        match self {
            Self::Or => Some('+'),
            Self::And => Some('*'),
            Self::Xor => Some('^'),
            Self::Not => Some('-'),
            Self::Operand(_) | Self::LParen | Self::RParen => None,
        }
    }

    /// Binding strength used when converting infix to postfix.
    ///
    /// Higher binds tighter. `(` has the lowest precedence so that it is never
    /// popped by an operator.
    ///
    /// ## Example
    /// ```
    /// use boolexpr::interpreter::lexer::Token;
    ///
    /// assert!(Token::Xor.precedence() > Token::And.precedence());
    /// assert_eq!(Token::Or.precedence(), Token::Not.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or | Self::Not => 1,
            Self::And => 2,
            Self::Xor => 3,
            Self::Operand(_) | Self::LParen | Self::RParen => 0,
        }
    }
}

/// Extracts the operand letter from the current token slice.
fn parse_operand(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Splits `source` into tokens paired with their byte offset.
///
/// Unrecognised characters, whitespace included, are dropped without an
/// error.
///
/// ## Example
/// ```
/// use boolexpr::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("a + b");
/// assert_eq!(tokens, vec![(Token::Operand('a'), 0), (Token::Or, 2), (Token::Operand('b'), 4)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                tracing::debug!(position, slice = lexer.slice(), "skipping unrecognised input");
            },
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_every_symbol() {
        let kinds: Vec<Token> = tokenize("a+b*c^-(d)").into_iter().map(|(t, _)| t).collect();
        assert_eq!(kinds,
                   vec![Token::Operand('a'),
                        Token::Or,
                        Token::Operand('b'),
                        Token::And,
                        Token::Operand('c'),
                        Token::Xor,
                        Token::Not,
                        Token::LParen,
                        Token::Operand('d'),
                        Token::RParen]);
    }

    #[test]
    fn letters_are_single_character_tokens() {
        let tokens = tokenize("ab");
        assert_eq!(tokens, vec![(Token::Operand('a'), 0), (Token::Operand('b'), 1)]);
    }

    #[test]
    fn unknown_characters_are_dropped() {
        let tokens = tokenize("a / 1 & b");
        assert_eq!(tokens, vec![(Token::Operand('a'), 0), (Token::Operand('b'), 8)]);
    }

    #[test]
    fn operator_symbols_round_trip_through_postfix_form() {
        assert_eq!(Token::Or.operator_symbol(), Some('+'));
        assert_eq!(Token::Not.operator_symbol(), Some('-'));
        assert_eq!(Token::LParen.operator_symbol(), None);
    }
}
