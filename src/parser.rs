use std::io::Write;

use crate::SymbolTable;
use crate::error::{Error, NameError, ParseError};
use crate::token::{Token, TokenKind};

/// Recursive-descent parser that evaluates each production as it is
/// recognized. Every assignment updates `symbols` and writes one
/// `<name> = <value>` line to `out`.
pub struct Parser<'a, W: Write> {
    tokens: &'a [Token],
    index: usize,
    symbols: &'a mut SymbolTable,
    out: &'a mut W,
}

impl<'a, W: Write> Parser<'a, W> {
    /// Fails unless `tokens` ends with an `End` token, as produced by the
    /// lexer.
    pub fn new(
        tokens: &'a [Token],
        symbols: &'a mut SymbolTable,
        out: &'a mut W,
    ) -> Result<Self, ParseError> {
        match tokens.last() {
            Some(last) if last.is(TokenKind::End) => Ok(Parser {
                tokens,
                index: 0,
                symbols,
                out,
            }),
            Some(last) => Err(ParseError::UnexpectedToken {
                found: last.to_string(),
                line: last.line,
            }),
            None => Err(ParseError::UnexpectedToken {
                found: "an empty token stream".to_string(),
                line: 1,
            }),
        }
    }

    fn current_token(&self) -> &'a Token {
        &self.tokens[self.index]
    }

    fn advance(&mut self) {
        if !self.current_token().is(TokenKind::End) {
            self.index += 1;
        }
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current_token().is(kind)
    }

    fn at_operator(&self, op: &str) -> bool {
        let token = self.current_token();
        token.is(TokenKind::Operator) && token.lexeme == op
    }

    fn found(&self) -> (String, usize) {
        let token = self.current_token();
        (token.to_string(), token.line)
    }

    /// program := assignment program | ε
    pub fn program(&mut self) -> Result<(), Error> {
        while !self.at(TokenKind::End) {
            self.assignment()?;
        }
        Ok(())
    }

    /// assignment := Identifier '=' exp ';'
    fn assignment(&mut self) -> Result<(), Error> {
        if !self.at(TokenKind::Identifier) {
            let (found, line) = self.found();
            return Err(ParseError::ExpectedIdentifier { found, line }.into());
        }
        let name = &self.current_token().lexeme;
        self.advance();

        if !self.at_operator("=") {
            let (found, line) = self.found();
            return Err(ParseError::ExpectedAssign { found, line }.into());
        }
        self.advance();

        let value = self.exp()?;

        if !self.at(TokenKind::Semicolon) {
            let (found, line) = self.found();
            return Err(ParseError::ExpectedSemicolon { found, line }.into());
        }
        self.advance();

        self.symbols.insert(name.clone(), value);
        writeln!(self.out, "{} = {}", name, value)?;
        Ok(())
    }

    /// exp := term exp'
    fn exp(&mut self) -> Result<i32, Error> {
        let value = self.term()?;
        self.exp_prime(value)
    }

    /// exp' := '+' term exp' | '-' term exp' | ε
    fn exp_prime(&mut self, mut accumulated: i32) -> Result<i32, Error> {
        loop {
            if self.at_operator("+") {
                self.advance();
                accumulated = accumulated.wrapping_add(self.term()?);
            } else if self.at_operator("-") {
                self.advance();
                accumulated = accumulated.wrapping_sub(self.term()?);
            } else {
                return Ok(accumulated);
            }
        }
    }

    /// term := fact term'
    fn term(&mut self) -> Result<i32, Error> {
        let value = self.fact()?;
        self.term_prime(value)
    }

    /// term' := '*' fact term' | ε
    fn term_prime(&mut self, mut accumulated: i32) -> Result<i32, Error> {
        while self.at_operator("*") {
            self.advance();
            accumulated = accumulated.wrapping_mul(self.fact()?);
        }
        Ok(accumulated)
    }

    /// fact := '(' exp ')' | '+' exp | '-' exp | IntLiteral | Identifier
    ///
    /// A unary sign applies to the whole expression that follows it, so
    /// `-5 + 2` is `-(5 + 2)`.
    fn fact(&mut self) -> Result<i32, Error> {
        let token = self.current_token();

        match token.kind {
            TokenKind::LeftParen => {
                self.advance();
                let value = self.exp()?;
                if !self.at(TokenKind::RightParen) {
                    let (found, line) = self.found();
                    return Err(ParseError::MismatchedParenthesis { found, line }.into());
                }
                self.advance();
                Ok(value)
            }
            TokenKind::Operator if token.lexeme == "+" => {
                self.advance();
                self.exp()
            }
            TokenKind::Operator if token.lexeme == "-" => {
                self.advance();
                Ok(self.exp()?.wrapping_neg())
            }
            TokenKind::IntLiteral => {
                self.advance();
                token.lexeme.parse::<i32>().map_err(|_| {
                    Error::from(ParseError::LiteralOutOfRange {
                        literal: token.lexeme.clone(),
                        line: token.line,
                    })
                })
            }
            TokenKind::Identifier => {
                self.advance();
                self.symbols.get(&token.lexeme).copied().ok_or_else(|| {
                    Error::from(NameError {
                        name: token.lexeme.clone(),
                        line: token.line,
                    })
                })
            }
            _ => {
                let (found, line) = self.found();
                Err(ParseError::UnexpectedToken { found, line }.into())
            }
        }
    }
}

/// Parses and evaluates `tokens`, stopping at the first error.
pub fn run<W: Write>(tokens: &[Token], symbols: &mut SymbolTable, out: &mut W) -> Result<(), Error> {
    Parser::new(tokens, symbols, out)?.program()
}
