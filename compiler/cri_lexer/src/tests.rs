use super::*;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().kinds()
}

fn positions(source: &str) -> Vec<(u32, u32)> {
    tokenize(source)
        .unwrap()
        .iter()
        .map(|t| (t.line, t.column))
        .collect()
}

mod basics {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_tokens() {
        let tokens = tokenize("2 + 3").unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].text, "2");
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].text, "3");
        assert_eq!(tokens[3].kind, TokenKind::Eof);
        assert_eq!(tokens[3].text, "");
    }

    #[test]
    fn test_all_operators() {
        assert_eq!(
            kinds("+ - * / ^"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Caret,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_parens_need_no_spacing() {
        assert_eq!(
            kinds("(1)-(2)"),
            vec![
                TokenKind::LParen,
                TokenKind::Number,
                TokenKind::RParen,
                TokenKind::Minus,
                TokenKind::LParen,
                TokenKind::Number,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_print_statement() {
        let tokens = tokenize("print 42").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Print);
        assert_eq!(tokens[1].kind, TokenKind::Number);
        assert_eq!(tokens[1].text, "42");
    }

    #[test]
    fn test_decimal_literal() {
        let tokens = tokenize("3.25").unwrap();
        assert_eq!(tokens[0].text, "3.25");
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_sign_is_not_part_of_number() {
        assert_eq!(
            kinds("-7"),
            vec![TokenKind::Minus, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_number_directly_before_keyword() {
        assert_eq!(
            kinds("2print 3"),
            vec![
                TokenKind::Number,
                TokenKind::Print,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.kinds(), vec![TokenKind::Eof]);
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    }
}

mod trivia {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_comments_are_filtered() {
        let tokens = tokenize("# comment\nprint 42").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Newline);
        assert_eq!(tokens[1].kind, TokenKind::Print);
        assert_eq!(tokens[2].kind, TokenKind::Number);
    }

    #[test]
    fn test_comment_elides_like_empty_line() {
        let with_comment = tokenize("# comment\nprint 1").unwrap();
        let without = tokenize("\nprint 1").unwrap();
        let strip = |list: &TokenList| -> Vec<(TokenKind, String)> {
            list.iter().map(|t| (t.kind, t.text.clone())).collect()
        };
        assert_eq!(strip(&with_comment), strip(&without));
    }

    #[test]
    fn test_trailing_comment() {
        assert_eq!(
            kinds("print 1 # the answer"),
            vec![TokenKind::Print, TokenKind::Number, TokenKind::Eof]
        );
    }

    #[test]
    fn test_newlines_are_kept() {
        assert_eq!(
            kinds("1\n\n2"),
            vec![
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_tabs_are_whitespace() {
        assert_eq!(
            kinds("\t1\t+\t2"),
            vec![
                TokenKind::Number,
                TokenKind::Plus,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }
}

mod positions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_columns_advance_by_match_width() {
        assert_eq!(positions("2 + 3"), vec![(1, 1), (1, 3), (1, 5), (1, 6)]);
    }

    #[test]
    fn test_newline_resets_column() {
        assert_eq!(positions("1\n22"), vec![(1, 1), (1, 2), (2, 1), (2, 3)]);
    }

    #[test]
    fn test_comment_width_counts() {
        // `# hé` is four characters but five bytes.
        assert_eq!(positions("# hé\n1"), vec![(1, 5), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_spans_are_byte_ranges() {
        let tokens = tokenize("print 10").unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 5));
        assert_eq!(tokens[1].span, Span::new(6, 8));
        assert_eq!(tokens[2].span, Span::point(8));
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("2 $ 3").unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedCharacter {
                ch: '$',
                line: 1,
                column: 3,
                span: Span::new(2, 3),
            }
        );
        assert_eq!(
            err.to_string(),
            "Unexpected character '$' at line 1, column 3"
        );
    }

    #[test]
    fn test_error_position_on_later_line() {
        let err = tokenize("1\n  @").unwrap_err();
        assert_eq!((err.line(), err.column()), (2, 3));
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        let err = tokenize("printer 1").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter { ch: 'p', line: 1, column: 1, .. }
        ));

        let err = tokenize("print5").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { ch: 'p', .. }));
    }

    #[test]
    fn test_keyword_boundary_counts_unicode_letters() {
        let err = tokenize("printé 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected character 'p' at line 1, column 1"
        );
        assert_eq!(err.span(), Span::new(0, 1));
    }

    #[test]
    fn test_identifiers_are_rejected() {
        let err = tokenize("1 + x").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter { ch: 'x', column: 5, .. }
        ));
    }

    #[test]
    fn test_carriage_return_is_illegal() {
        let err = tokenize("1\r\n").unwrap_err();
        assert!(matches!(
            err,
            LexError::UnexpectedCharacter { ch: '\r', column: 2, .. }
        ));
    }

    #[test]
    fn test_non_ascii_is_illegal() {
        let err = tokenize("π").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { ch: 'π', .. }));
    }
}

proptest! {
    #[test]
    fn prop_numeric_literal_is_single_token(whole in 0u64..1_000_000_000, frac in proptest::option::of(0u32..100_000)) {
        let text = match frac {
            Some(f) => format!("{whole}.{f}"),
            None => whole.to_string(),
        };
        let tokens = tokenize(&text).unwrap();
        prop_assert_eq!(tokens.kinds(), vec![TokenKind::Number, TokenKind::Eof]);
        prop_assert_eq!(&tokens[0].text, &text);
    }

    #[test]
    fn prop_valid_source_ends_with_single_eof(source in "(([0-9]{1,4}(\\.[0-9]{1,3})?|[-+*/^()]|print|\n|#[a-z ]{0,8}\n)[ \t])*") {
        let tokens = tokenize(&source).unwrap();
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.as_slice().last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert!(tokens.iter().all(|t| !t.text.contains([' ', '\t', '#'])));
    }
}
