//! Debugging dumps behind `cri --tokens` and `cri --ast`.

use cri_lexer::tokenize;
use cri_parse::parse;

use crate::error::CriError;

/// Render the token stream, one token per line.
pub fn dump_tokens(source: &str) -> Result<String, CriError> {
    let tokens = tokenize(source)?;
    let mut out = format!("Tokens ({} tokens):\n", tokens.len());
    for token in &tokens {
        out.push_str(&format!("  {token:?} [{}]\n", token.span));
    }
    Ok(out)
}

/// Render the parsed program fully parenthesized, one statement per line.
pub fn dump_ast(source: &str) -> Result<String, CriError> {
    let program = parse(&tokenize(source)?)?;
    Ok(format!("Statements: {}\n{program}", program.len()))
}
