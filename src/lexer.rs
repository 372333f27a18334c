use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Whitespace as the C locale's `isspace` sees it.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();
        Lexer {
            text: chars,
            pos: 0,
            current_char,
            line: 1,
            column: 1,
        }
    }

    fn advance(&mut self) {
        if self.current_char == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn peek(&self) -> Option<char> {
        self.text.get(self.pos + 1).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if is_space(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if accept(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn integer(&mut self) -> Result<Token, LexError> {
        let line = self.line;

        if self.current_char == Some('0') {
            if self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
                return Err(LexError::InvalidIntLiteral {
                    line,
                    column: self.column,
                });
            }
            self.advance();
            return Ok(Token::new(TokenKind::IntLiteral, "0", line));
        }

        let digits = self.take_while(|ch| ch.is_ascii_digit());
        Ok(Token::new(TokenKind::IntLiteral, digits, line))
    }

    fn id(&mut self) -> Token {
        let line = self.line;
        let name = self.take_while(|ch| ch.is_ascii_alphanumeric() || ch == '_');
        Token::new(TokenKind::Identifier, name, line)
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        let token = Token::new(kind, ch.to_string(), self.line);
        self.advance();
        token
    }

    /// Scans the next token. Once the input is exhausted this keeps
    /// returning the `End` token.
    pub fn get_next_token(&mut self) -> Result<Token, LexError> {
        while let Some(ch) = self.current_char {
            if is_space(ch) {
                self.skip_whitespace();
                continue;
            }

            if ch.is_ascii_digit() {
                return self.integer();
            }

            if ch.is_ascii_alphabetic() || ch == '_' {
                return Ok(self.id());
            }

            let kind = match ch {
                '=' | '+' | '-' | '*' => TokenKind::Operator,
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                ';' => TokenKind::Semicolon,
                _ => {
                    return Err(LexError::UnrecognizedSymbol {
                        symbol: ch,
                        line: self.line,
                        column: self.column,
                    });
                }
            };

            return Ok(self.single(kind, ch));
        }

        Ok(Token::end(self.line))
    }

    /// Scans the whole input. The result ends with exactly one `End` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.get_next_token()?;
            let done = token.is(TokenKind::End);
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|token| token.lexeme)
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens, vec![Token::end(1)]);
    }

    #[test]
    fn test_integer_token() {
        let mut lexer = Lexer::new("123");
        assert_eq!(
            lexer.get_next_token().unwrap(),
            Token::new(TokenKind::IntLiteral, "123", 1)
        );
    }

    #[test]
    fn test_zero_literal() {
        assert_eq!(lexemes("0"), vec!["0", "$"]);
        assert_eq!(lexemes("0+0"), vec!["0", "+", "0", "$"]);
    }

    #[test]
    fn test_zero_followed_by_letter() {
        assert_eq!(
            kinds("0x"),
            vec![TokenKind::IntLiteral, TokenKind::Identifier, TokenKind::End]
        );
    }

    #[test]
    fn test_leading_zero_rejected() {
        assert_eq!(
            tokenize("x = 007;"),
            Err(LexError::InvalidIntLiteral { line: 1, column: 5 })
        );
    }

    #[test]
    fn test_inner_zeros_allowed() {
        assert_eq!(lexemes("1007"), vec!["1007", "$"]);
    }

    #[test]
    fn test_operators() {
        let mut lexer = Lexer::new("= + - *");
        for op in ["=", "+", "-", "*"] {
            assert_eq!(
                lexer.get_next_token().unwrap(),
                Token::new(TokenKind::Operator, op, 1)
            );
        }
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("( ) ;"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Semicolon,
                TokenKind::End,
            ]
        );
    }

    #[test]
    fn test_identifier() {
        assert_eq!(
            lexemes("variable_name x123 _tmp BEGIN"),
            vec!["variable_name", "x123", "_tmp", "BEGIN", "$"]
        );
        assert!(kinds("if while").iter().take(2).all(|k| *k == TokenKind::Identifier));
    }

    #[test]
    fn test_digits_then_identifier() {
        assert_eq!(
            kinds("12ab"),
            vec![TokenKind::IntLiteral, TokenKind::Identifier, TokenKind::End]
        );
    }

    #[test]
    fn test_assignment_statement() {
        let tokens = tokenize("x = 5;").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "x", 1),
                Token::new(TokenKind::Operator, "=", 1),
                Token::new(TokenKind::IntLiteral, "5", 1),
                Token::new(TokenKind::Semicolon, ";", 1),
                Token::end(1),
            ]
        );
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            tokenize("x = 1;\ny = @;"),
            Err(LexError::UnrecognizedSymbol {
                symbol: '@',
                line: 2,
                column: 5,
            })
        );
        assert!(tokenize("x = 4 / 2;").is_err());
    }

    #[test]
    fn test_whitespace_handling() {
        let tokens = tokenize("  \t\n  123  \n ").unwrap();
        assert_eq!(
            tokens,
            vec![Token::new(TokenKind::IntLiteral, "123", 2), Token::end(3)]
        );
    }

    #[test]
    fn test_unicode_spaces_rejected() {
        assert_eq!(
            tokenize("x\u{00A0}= 1;"),
            Err(LexError::UnrecognizedSymbol {
                symbol: '\u{a0}',
                line: 1,
                column: 2,
            })
        );
        assert!(matches!(
            tokenize("x\u{2003}=\u{3000}1;"),
            Err(LexError::UnrecognizedSymbol { symbol: '\u{2003}', .. })
        ));
    }

    #[test]
    fn test_ascii_control_spaces_skipped() {
        assert_eq!(lexemes("x\x0b=\x0c1\r;"), vec!["x", "=", "1", ";", "$"]);
    }

    #[test]
    fn test_single_end_token() {
        let tokens = tokenize("a = 1; b = a;").unwrap();
        let ends = tokens.iter().filter(|t| t.is(TokenKind::End)).count();
        assert_eq!(ends, 1);
        assert!(tokens.last().unwrap().is(TokenKind::End));
    }

    #[test]
    fn test_end_is_sticky() {
        let mut lexer = Lexer::new("x");
        lexer.get_next_token().unwrap();
        assert!(lexer.get_next_token().unwrap().is(TokenKind::End));
        assert!(lexer.get_next_token().unwrap().is(TokenKind::End));
    }
}
