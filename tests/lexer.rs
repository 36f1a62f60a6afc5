use lekhmuji::{
    error::LexError,
    interpreter::lexer::{Lexer, Token},
};

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn int(literal: &str) -> Token {
    Token::Int(literal.to_string())
}

fn assert_tokens(input: &str, expected: &[Token]) {
    let mut lexer = Lexer::new(input);
    for (index, want) in expected.iter().enumerate() {
        let got = lexer.next_token();
        assert_eq!(got, *want, "token {index} of {input:?}");
    }
    assert_eq!(lexer.next_token(), Token::Eof, "trailing tokens left in {input:?}");
}

#[test]
fn full_token_stream() {
    let input = "thoos_muji 界 = 5;
    thoos_muji ten = 10;

    thoos_muji add = kaam_gar_muji(x, y) {
        x + y;
    };

    thoos_muji result = add(five, ten);
    !-/*5;
    5 < 10 > 66;

    yedi_muji (5 < 10) {
        patha_muji sacho_muji;
    } nabhae_chikne {
        patha_muji jhut_muji;
    }

    10 == 10;
    10 != 9;
    ";

    assert_tokens(input,
                  &[Token::Let,
                    ident("界"),
                    Token::Assign,
                    int("5"),
                    Token::Semicolon,
                    Token::Let,
                    ident("ten"),
                    Token::Assign,
                    int("10"),
                    Token::Semicolon,
                    Token::Let,
                    ident("add"),
                    Token::Assign,
                    Token::Function,
                    Token::LParen,
                    ident("x"),
                    Token::Comma,
                    ident("y"),
                    Token::RParen,
                    Token::LBrace,
                    ident("x"),
                    Token::Plus,
                    ident("y"),
                    Token::Semicolon,
                    Token::RBrace,
                    Token::Semicolon,
                    Token::Let,
                    ident("result"),
                    Token::Assign,
                    ident("add"),
                    Token::LParen,
                    ident("five"),
                    Token::Comma,
                    ident("ten"),
                    Token::RParen,
                    Token::Semicolon,
                    Token::Bang,
                    Token::Minus,
                    Token::Slash,
                    Token::Asterisk,
                    int("5"),
                    Token::Semicolon,
                    int("5"),
                    Token::Less,
                    int("10"),
                    Token::Greater,
                    int("66"),
                    Token::Semicolon,
                    Token::If,
                    Token::LParen,
                    int("5"),
                    Token::Less,
                    int("10"),
                    Token::RParen,
                    Token::LBrace,
                    Token::Return,
                    Token::True,
                    Token::Semicolon,
                    Token::RBrace,
                    Token::Else,
                    Token::LBrace,
                    Token::Return,
                    Token::False,
                    Token::Semicolon,
                    Token::RBrace,
                    int("10"),
                    Token::Equal,
                    int("10"),
                    Token::Semicolon,
                    int("10"),
                    Token::NotEqual,
                    int("9"),
                    Token::Semicolon]);
}

#[test]
fn two_character_operators() {
    assert_tokens("<= >= == != = < >",
                  &[Token::LessEqual,
                    Token::GreaterEqual,
                    Token::Equal,
                    Token::NotEqual,
                    Token::Assign,
                    Token::Less,
                    Token::Greater]);
}

#[test]
fn remaining_keywords_and_punctuation() {
    assert_tokens("jaba_samma_muji ghuma_muji % : [ ] { }",
                  &[Token::While,
                    Token::For,
                    Token::Percent,
                    Token::Colon,
                    Token::LBracket,
                    Token::RBracket,
                    Token::LBrace,
                    Token::RBrace]);
}

#[test]
fn khali_muji_is_not_a_keyword() {
    assert_tokens("khali_muji", &[ident("khali_muji")]);
}

#[test]
fn identifiers_may_contain_digits() {
    assert_tokens("x1 _tmp2", &[ident("x1"), ident("_tmp2")]);
}

#[test]
fn string_literals() {
    assert_tokens("\"hello world\" \"\"",
                  &[Token::Str("hello world".to_string()),
                    Token::Str(String::new())]);
}

#[test]
fn unterminated_string_yields_collected_prefix() {
    let mut lexer = Lexer::new("\"abc");
    assert_eq!(lexer.next_token(), Token::Str("abc".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert!(lexer.errors().is_empty());
}

#[test]
fn numeric_literals() {
    assert_tokens("42 3.14 0.5",
                  &[int("42"),
                    Token::Float("3.14".to_string()),
                    Token::Float("0.5".to_string())]);
}

#[test]
fn dot_without_fraction_digits_stays_an_integer() {
    assert_tokens("5.", &[int("5"), Token::Illegal('.')]);
}

#[test]
fn comments_are_skipped() {
    assert_tokens("1 $ this is ignored $ 2", &[int("1"), int("2")]);
}

#[test]
fn unterminated_comment_is_recorded_and_ends_input() {
    let mut lexer = Lexer::new("5 $ never closed");
    assert_eq!(lexer.next_token(), Token::Int("5".to_string()));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.errors(), &[LexError::UnterminatedComment]);
    assert_eq!(lexer.errors()[0].to_string(), "unterminated comment");
}

#[test]
fn illegal_runes() {
    assert_tokens("@", &[Token::Illegal('@')]);
}

#[test]
fn eof_repeats() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}
