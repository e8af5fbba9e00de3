use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::ParseResult,
    },
};

/// Converts an infix boolean expression to postfix (reverse Polish) form.
///
/// This is a shunting-yard conversion with an explicit operator stack.
/// Precedence from loosest to tightest is `+`/`-`, `*`, `^`. Every operator
/// is treated as left-associative: the stack is popped while its top binds at
/// least as tightly as the incoming operator.
///
/// Letters are emitted immediately. Characters that are neither letters,
/// operators nor parentheses are skipped.
///
/// # Errors
/// - `UnmatchedClosingParen` if a `)` has no `(` to close.
/// - `UnmatchedOpeningParen` if a `(` is still open at the end of input.
///
/// # Example
/// ```
/// use boolexpr::interpreter::converter::convert;
///
/// assert_eq!(convert("a+b*c").unwrap(), "abc*+");
/// assert_eq!(convert("(a+b)*c").unwrap(), "ab+c*");
/// assert!(convert("(a+b").is_err());
/// ```
pub fn convert(expr: &str) -> ParseResult<String> {
    let mut postfix = String::with_capacity(expr.len());
    let mut operators: Vec<(Token, usize)> = Vec::new();

    for (token, position) in tokenize(expr) {
        match token {
            Token::Operand(name) => postfix.push(name),
            Token::LParen => operators.push((token, position)),
            Token::RParen => loop {
                match operators.pop() {
                    Some((Token::LParen, _)) => break,
                    Some((top, _)) => emit(&mut postfix, top),
                    None => return Err(ParseError::UnmatchedClosingParen { position }),
                }
            },
            Token::Or | Token::And | Token::Xor | Token::Not => {
                while let Some(&(top, _)) = operators.last()
                      && top.precedence() >= token.precedence()
                {
                    operators.pop();
                    emit(&mut postfix, top);
                }
                operators.push((token, position));
            },
        }
    }

    while let Some((top, position)) = operators.pop() {
        if top == Token::LParen {
            return Err(ParseError::UnmatchedOpeningParen { position });
        }
        emit(&mut postfix, top);
    }

    tracing::debug!(infix = expr, postfix = %postfix, "converted to postfix");
    Ok(postfix)
}

/// Appends the postfix symbol of an operator token.
fn emit(postfix: &mut String, token: Token) {
    if let Some(symbol) = token.operator_symbol() {
        postfix.push(symbol);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_operators() {
        assert_eq!(convert("a+b").unwrap(), "ab+");
        assert_eq!(convert("a*b").unwrap(), "ab*");
        assert_eq!(convert("a^b").unwrap(), "ab^");
        assert_eq!(convert("-a").unwrap(), "a-");
    }

    #[test]
    fn precedence_orders_operators() {
        assert_eq!(convert("a+b*c").unwrap(), "abc*+");
        assert_eq!(convert("a*b^c").unwrap(), "abc^*");
        assert_eq!(convert("a^b*c").unwrap(), "ab^c*");
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(convert("a+b+c").unwrap(), "ab+c+");
        assert_eq!(convert("a^b^c").unwrap(), "ab^c^");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(convert("(a+b)*c").unwrap(), "ab+c*");
        assert_eq!(convert("-(a*b)").unwrap(), "ab*-");
        assert_eq!(convert("((a))").unwrap(), "a");
    }

    #[test]
    fn unrecognised_characters_are_ignored() {
        assert_eq!(convert(" a + b ").unwrap(), "ab+");
        assert_eq!(convert("a/b").unwrap(), "ab");
        assert_eq!(convert("1&2").unwrap(), "");
    }

    #[test]
    fn empty_input_gives_empty_postfix() {
        assert_eq!(convert("").unwrap(), "");
    }

    #[test]
    fn unmatched_closing_paren_is_reported() {
        assert_eq!(convert("a+b)"), Err(ParseError::UnmatchedClosingParen { position: 3 }));
        assert_eq!(convert(")"), Err(ParseError::UnmatchedClosingParen { position: 0 }));
    }

    #[test]
    fn unmatched_opening_paren_is_reported() {
        assert_eq!(convert("(a+b"), Err(ParseError::UnmatchedOpeningParen { position: 0 }));
        assert_eq!(convert("a*((b)"), Err(ParseError::UnmatchedOpeningParen { position: 2 }));
    }
}
