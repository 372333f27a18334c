mod token;
mod lexer;
mod parser;
mod interpreter;
mod error;

pub use token::{Token, TokenKind};
pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, run};
pub use interpreter::Interpreter;
pub use error::{Error, LexError, NameError, ParseError};

use std::collections::HashMap;
use std::io::{self, Write};

/// Current value of every assigned variable.
pub type SymbolTable = HashMap<String, i32>;

/// Runs `program` from an empty symbol table, printing one line per
/// assignment to standard output.
pub fn execute(program: &str) -> Result<SymbolTable, Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_with_output(program, &mut out)
}

pub fn execute_with_output<W: Write>(program: &str, out: &mut W) -> Result<SymbolTable, Error> {
    let mut interpreter = Interpreter::new();
    interpreter.interpret(program, out)?;
    out.flush()?;
    Ok(interpreter.into_variables())
}
