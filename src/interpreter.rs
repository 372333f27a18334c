use std::io::Write;

use crate::SymbolTable;
use crate::error::Error;
use crate::lexer::tokenize;
use crate::parser::run;

/// Owns the symbol table across runs. Each call to `interpret` lexes the
/// whole program first, then parses and evaluates it.
pub struct Interpreter {
    variables: SymbolTable,
}

impl Interpreter {
    pub fn new() -> Self {
        Interpreter {
            variables: SymbolTable::new(),
        }
    }

    pub fn interpret<W: Write>(&mut self, program: &str, out: &mut W) -> Result<(), Error> {
        let tokens = tokenize(program)?;
        run(&tokens, &mut self.variables, out)
    }

    pub fn get_variables(&self) -> &SymbolTable {
        &self.variables
    }

    pub fn into_variables(self) -> SymbolTable {
        self.variables
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
