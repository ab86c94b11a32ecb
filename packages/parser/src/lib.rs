pub mod ast;
pub mod error;
pub mod parser;
pub mod tokenizer;

pub use ast::{Declaration, Document, Value};
pub use error::{Error, LexError, ParseError, ParseResult};
pub use parser::Parser;
pub use tokenizer::{tokenize, Token};

/// Tokenize and parse a complete source string in one call.
pub fn parse(source: &str) -> Result<Document, Error> {
    let tokens = tokenize(source)?;
    let mut parser = Parser::new(tokens);
    Ok(parser.parse_document()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let document = parse("A := 1;").unwrap();
        assert_eq!(document.declarations.len(), 1);
    }

    #[test]
    fn test_both_error_layers_surface() {
        assert!(matches!(parse("/* oops"), Err(Error::Lex(_))));
        assert!(matches!(parse("A := ;"), Err(Error::Parse(_))));
    }
}
