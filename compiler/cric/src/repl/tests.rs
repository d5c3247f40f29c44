use super::*;
use pretty_assertions::assert_eq;

/// Run a bannerless session with prompt `> ` and return everything written.
fn session(input: &str) -> (String, Repl) {
    let mut repl = Repl::with_config(ReplConfig {
        prompt: "> ".to_owned(),
        banner: false,
    });
    let mut out = Vec::new();
    repl.run(input.as_bytes(), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), repl)
}

#[test]
fn test_default_config() {
    let config = ReplConfig::default();
    assert_eq!(config.prompt, "cri> ");
    assert!(config.banner);
}

#[test]
fn test_banner() {
    let mut out = Vec::new();
    Repl::new().run("exit\n".as_bytes(), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("CRi Language Interpreter v"));
    assert!(out.contains("Type 'exit' to quit.\n\ncri> "));
}

#[test]
fn test_prints_values() {
    let (out, _) = session("print 2 + 3\nexit\n");
    assert_eq!(out, "> 5.0\n> ");
}

#[test]
fn test_exit_is_trimmed_and_case_insensitive() {
    let (out, _) = session("  EXIT  \nprint 1\n");
    assert_eq!(out, "> ");
}

#[test]
fn test_end_of_input_says_goodbye() {
    let (out, _) = session("print 1\n");
    assert_eq!(out, "> 1.0\n> \nGoodbye!\n");
}

#[test]
fn test_blank_lines_are_skipped() {
    let (out, repl) = session("\n   \nexit\n");
    assert_eq!(out, "> > > ");
    assert!(repl.interpreter().output().is_empty());
}

#[test]
fn test_errors_are_reported_and_loop_continues() {
    let (out, _) = session("print 1 / 0\nprint (1\nprint 3 $\nprint 4\nexit\n");
    assert_eq!(
        out,
        "> Error: Division by zero\n\
         > Error: Expected ')' after expression. Got end of input at line 1\n\
         > Error: Unexpected character '$' at line 1, column 9\n\
         > 4.0\n\
         > "
    );
}

#[test]
fn test_output_printed_before_runtime_error_is_shown() {
    let (out, _) = session("print 7 print 1 / 0\nexit\n");
    assert_eq!(out, "> 7.0\nError: Division by zero\n> ");
}

#[test]
fn test_output_log_persists_across_lines() {
    let (_, repl) = session("print 1\n2 + 2\nprint 3\n");
    assert_eq!(repl.interpreter().output(), vec!["1.0", "3.0"]);
}

#[test]
fn test_last_line_without_newline() {
    let (out, _) = session("print 9");
    assert_eq!(out, "> 9.0\n> \nGoodbye!\n");
}

#[test]
fn test_farewell_starts_on_fresh_line() {
    let mut out = Vec::new();
    farewell(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\nGoodbye!\n");
}
