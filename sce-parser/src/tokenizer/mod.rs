pub mod token;

use ariadne::Fmt;
use logos::{Lexer, Logos};
use sce_attrs::ErrorKind;
use sce_error::{Error, ErrorKind, EXPR};
pub use token::{Token, TokenKind};

/// A character that is not part of the expression alphabet was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown character `{}`", character),
    labels = ["this character"],
    help = format!(
        "expressions may only contain {}, names, integers and the operators `+ - * / ^ =`",
        "brackets".fg(EXPR),
    ),
)]
pub struct UnknownCharacter {
    /// The character that could not be scanned.
    pub character: char,
}

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// Scanning stops at the first character that does not belong to any token.
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        match kind {
            Ok(kind) => tokens.push(Token {
                span: lexer.span(),
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                let span = lexer.span();
                let character = input[span.clone()].chars().next().unwrap_or_default();
                return Err(Error::new(vec![span], UnknownCharacter { character }));
            },
        }
    }

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn single_tokens() {
        compare_tokens("(", [(TokenKind::LeftParen, "(")]);
        compare_tokens(")", [(TokenKind::RightParen, ")")]);
        compare_tokens("+", [(TokenKind::Plus, "+")]);
        compare_tokens("-", [(TokenKind::Minus, "-")]);
        compare_tokens("*", [(TokenKind::Times, "*")]);
        compare_tokens("/", [(TokenKind::Slash, "/")]);
        compare_tokens("^", [(TokenKind::Caret, "^")]);
        compare_tokens("0", [(TokenKind::Integer, "0")]);
        compare_tokens("10", [(TokenKind::Integer, "10")]);
    }

    #[test]
    fn names() {
        compare_tokens("x", [(TokenKind::Name, "x")]);
        compare_tokens("x1", [(TokenKind::Name, "x1")]);
        compare_tokens("x_1", [(TokenKind::Name, "x_1")]);
        compare_tokens("x1a", [(TokenKind::Name, "x1a")]);
    }

    #[test]
    fn digits_then_name() {
        compare_tokens("2x", [(TokenKind::Integer, "2"), (TokenKind::Name, "x")]);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Integer, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Plus, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Integer, "2"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            "(2/-3)^x_0=y",
            [
                (TokenKind::LeftParen, "("),
                (TokenKind::Integer, "2"),
                (TokenKind::Slash, "/"),
                (TokenKind::Minus, "-"),
                (TokenKind::Integer, "3"),
                (TokenKind::RightParen, ")"),
                (TokenKind::Caret, "^"),
                (TokenKind::Name, "x_0"),
                (TokenKind::Equals, "="),
                (TokenKind::Name, "y"),
            ],
        );
    }

    #[test]
    fn complete_keeps_spans() {
        let tokens = tokenize_complete("12+ab").unwrap();
        assert_eq!(&*tokens, &[
            Token { span: 0..2, kind: TokenKind::Integer, lexeme: "12" },
            Token { span: 2..3, kind: TokenKind::Plus, lexeme: "+" },
            Token { span: 3..5, kind: TokenKind::Name, lexeme: "ab" },
        ]);
    }

    #[test]
    fn unknown_character() {
        let err = tokenize_complete("1 + $").unwrap_err();
        assert_eq!(err.spans, vec![4..5]);
        assert_eq!(err.downcast_ref::<UnknownCharacter>(), Some(&UnknownCharacter { character: '$' }));
    }
}
