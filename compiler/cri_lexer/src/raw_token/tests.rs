use super::*;
use pretty_assertions::assert_eq;

fn raw(source: &str) -> Vec<Result<RawToken, ()>> {
    RawToken::lexer(source).collect()
}

#[test]
fn test_keyword_wins_over_word_at_equal_length() {
    assert_eq!(raw("print"), vec![Ok(RawToken::Print)]);
}

#[test]
fn test_longer_word_is_not_keyword() {
    assert_eq!(raw("printer"), vec![Ok(RawToken::Word)]);
    assert_eq!(raw("print_1"), vec![Ok(RawToken::Word)]);
}

#[test]
fn test_unicode_letters_continue_a_word() {
    assert_eq!(raw("printé"), vec![Ok(RawToken::Word)]);
    assert_eq!(raw("print²"), vec![Ok(RawToken::Word)]);
    assert_eq!(raw("π"), vec![Ok(RawToken::Word)]);
}

#[test]
fn test_comment_stops_before_newline() {
    let mut lexer = RawToken::lexer("# note\n1");
    assert_eq!(lexer.next(), Some(Ok(RawToken::Comment)));
    assert_eq!(lexer.slice(), "# note");
    assert_eq!(lexer.next(), Some(Ok(RawToken::Newline)));
    assert_eq!(lexer.next(), Some(Ok(RawToken::Number)));
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_decimal_number_is_one_token() {
    let mut lexer = RawToken::lexer("12.375");
    assert_eq!(lexer.next(), Some(Ok(RawToken::Number)));
    assert_eq!(lexer.slice(), "12.375");
    assert_eq!(lexer.next(), None);
}

#[test]
fn test_whitespace_runs_are_single_tokens() {
    let mut lexer = RawToken::lexer(" \t \t1");
    assert_eq!(lexer.next(), Some(Ok(RawToken::Whitespace)));
    assert_eq!(lexer.slice(), " \t \t");
}

#[test]
fn test_unknown_character_is_error() {
    assert_eq!(raw("@"), vec![Err(())]);
}

#[test]
fn test_kind_mapping_drops_trivia() {
    assert_eq!(RawToken::Comment.kind(), None);
    assert_eq!(RawToken::Whitespace.kind(), None);
    assert_eq!(RawToken::Word.kind(), None);
    assert_eq!(RawToken::Caret.kind(), Some(TokenKind::Caret));
    assert_eq!(RawToken::Print.kind(), Some(TokenKind::Print));
}
