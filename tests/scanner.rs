#[cfg(test)]
mod scanner_tests {
    use rox::error::LoxError;
    use rox::scanner::*;
    use rox::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source);
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    fn assert_token_matches(
        result: &Result<Token, LoxError>,
        expected_type: TokenType,
        expected_lexeme: &str,
    ) {
        match result {
            Ok(token) => {
                assert_eq!(
                    token.token_type, expected_type,
                    "Expected token type {:?}, got {:?}",
                    expected_type, token.token_type
                );
                assert_eq!(
                    token.lexeme, expected_lexeme,
                    "Expected lexeme '{}', got '{}'",
                    expected_lexeme, token.lexeme
                );
            }
            Err(e) => panic!("Expected token but got error: {}", e),
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "({*.,+*})",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::STAR, "*"),
                (TokenType::DOT, "."),
                (TokenType::COMMA, ","),
                (TokenType::PLUS, "+"),
                (TokenType::STAR, "*"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_ternary_punctuation() {
        assert_token_sequence(
            "a ? b : c",
            &[
                (TokenType::IDENTIFIER, "a"),
                (TokenType::QUESTION, "?"),
                (TokenType::IDENTIFIER, "b"),
                (TokenType::COLON, ":"),
                (TokenType::IDENTIFIER, "c"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_unexpected_chars_token_sequence() {
        let results: Vec<_> = Scanner::new(",.$(#").collect();

        // COMMA, DOT, error '$', LEFT_PAREN, error '#', EOF
        assert_eq!(results.len(), 6, "Expected 6 items in result");

        assert_token_matches(&results[0], TokenType::COMMA, ",");
        assert_token_matches(&results[1], TokenType::DOT, ".");
        assert_token_matches(&results[3], TokenType::LEFT_PAREN, "(");
        assert_token_matches(&results[5], TokenType::EOF, "");

        let messages: Vec<String> = results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .map(|e| e.to_string())
            .collect();

        assert_eq!(
            messages,
            vec![
                "[line 1] Error: Unexpected character: $",
                "[line 1] Error: Unexpected character: #",
            ]
        );
    }

    #[test]
    fn line_comment_runs_to_end_of_line() {
        let tokens = scan_tokens("123 // comment // second comment").value;

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].token_type, TokenType::NUMBER(0.0));
        assert_eq!(tokens[1].token_type, TokenType::EOF);
    }

    #[test]
    fn block_comment_counts_lines() {
        let tokens = scan_tokens("/* one\ntwo\nthree */\nx").value;

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, "x");
        assert_eq!(tokens[0].line, 4);
    }

    #[test]
    fn unterminated_block_comment_is_an_error() {
        let scanned = scan_tokens("/* never\nclosed");

        assert_eq!(scanned.errors.len(), 1);
        assert_eq!(scanned.errors[0].message(), "Unterminated block comment.");
    }

    #[test]
    fn keywords_use_maximal_munch() {
        assert_token_sequence(
            "or orchid break breaks",
            &[
                (TokenType::OR, "or"),
                (TokenType::IDENTIFIER, "orchid"),
                (TokenType::BREAK, "break"),
                (TokenType::IDENTIFIER, "breaks"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn string_literal_spans_lines() {
        let tokens = scan_tokens("\"a\nb\" x").value;

        match &tokens[0].token_type {
            TokenType::STRING(s) => assert_eq!(s, "a\nb"),
            other => panic!("expected a string, got {:?}", other),
        }
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn unterminated_string_is_reported() {
        let scanned = scan_tokens("print \"oops");

        assert_eq!(scanned.errors.len(), 1);
        assert_eq!(
            scanned.errors[0].to_string(),
            "[line 1] Error: Unterminated string."
        );
    }

    #[test]
    fn tokens_display_in_tokenize_format() {
        let rendered: Vec<String> = scan_tokens("var x = 12.5;")
            .value
            .iter()
            .map(|t| t.to_string())
            .collect();

        assert_eq!(
            rendered,
            vec![
                "VAR var null",
                "IDENTIFIER x null",
                "EQUAL = null",
                "NUMBER 12.5 12.5",
                "SEMICOLON ; null",
                "EOF  null",
            ]
        );
    }
}
