//! Unit tests for argument tokenizing

use escolor::options::{Control, Reset, Style};
use escolor::{tokenize, Layer, OptionGrammar, Token};

fn lex(args: &[&str]) -> Vec<Token> {
    tokenize(args.iter().copied(), &OptionGrammar::default())
}

#[test]
fn every_long_flag_matches_its_short_flag() {
    for spec in escolor::options::FLAGS {
        let short = format!("-{}", spec.short);
        let long = format!("--{}", spec.long);
        assert_eq!(lex(&[short.as_str(), "RED"]), lex(&[long.as_str(), "RED"]), "{long}");
    }
}

#[test]
fn documented_example_tokenizes_in_order() {
    let tokens = lex(&[
        "-ecg", "RED", "BLUE", "HELLO", "-r", " ", "-cg", "CYAN", "MAGENTA", "WORLD",
    ]);
    assert_eq!(
        tokens,
        vec![
            Token::Control(Control::Escape),
            Token::Color {
                layer: Layer::Foreground,
                value: "RED".to_string()
            },
            Token::Color {
                layer: Layer::Background,
                value: "BLUE".to_string()
            },
            Token::Literal("HELLO".to_string()),
            Token::Reset(Reset::All),
            Token::Literal(" ".to_string()),
            Token::Color {
                layer: Layer::Foreground,
                value: "CYAN".to_string()
            },
            Token::Color {
                layer: Layer::Background,
                value: "MAGENTA".to_string()
            },
            Token::Literal("WORLD".to_string()),
        ]
    );
}

#[test]
fn case_distinguishes_set_from_reset() {
    assert_eq!(
        lex(&["-bB", "-uU"]),
        vec![
            Token::Style(Style::Bold),
            Token::Reset(Reset::Bold),
            Token::Style(Style::Underline),
            Token::Reset(Reset::Underline),
        ]
    );
}

#[test]
fn help_inside_a_cluster_is_still_a_flag() {
    assert_eq!(
        lex(&["-bh"]),
        vec![Token::Style(Style::Bold), Token::Control(Control::Help)]
    );
}

#[test]
fn escaped_option_spelling_stays_literal() {
    assert_eq!(lex(&["\\-E"]), vec![Token::Literal("\\-E".to_string())]);
}

#[test]
fn unknown_long_option_keeps_full_spelling() {
    assert_eq!(
        lex(&["--colour", "red"]),
        vec![
            Token::UnknownFlag("--colour".to_string()),
            Token::Literal("red".to_string()),
        ]
    );
}
