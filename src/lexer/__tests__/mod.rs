use super::{Lexer, Source, TokenProperty, TokenType};

fn collect_types(lexer: &mut Lexer) -> Vec<TokenType> {
    let mut types = Vec::new();
    loop {
        let ty = lexer.token(0).ty;
        if ty == TokenType::Eos {
            break types;
        }
        types.push(ty);
        lexer.advance();
    }
}

#[test]
fn literal_kinds_with_blanks_suppressed() {
    let sources = vec![Source::new(
        "test.cw",
        "true false 123 1. .33 \"a\" struct identifier + ++",
    )];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    assert_eq!(
        collect_types(&mut lexer),
        vec![
            TokenType::Bool,
            TokenType::Bool,
            TokenType::Integer,
            TokenType::Float,
            TokenType::Float,
            TokenType::StringLiteral,
            TokenType::Struct,
            TokenType::Identifier,
            TokenType::Plus,
            TokenType::PlusPlus,
        ]
    );
    // the stream stays on eos indefinitely
    assert_eq!(lexer.token(0).ty, TokenType::Eos);
    lexer.advance();
    assert_eq!(lexer.token(0).ty, TokenType::Eos);
    assert_eq!(lexer.token(1).ty, TokenType::Eos);
}

#[test]
fn full_token_inventory() {
    let content = "\n\
        // comment\n\
        true\n\
        false\n\
        123\n\
        1111111111111111111\n\
        1.\n\
        .33\n\
        \"str\" \"\\nstr\"\n\
        struct\nvirtual\nfunc\nvar\nalias\nif\nelse\nfor\nbreak\ncontinue\nreturn\n\
        abc_123\n\
        标识符\n\
        ~\n||\n|=\n|\n^=\n^\n?\n>>=\n>>\n>=\n>\n==\n=\n<<=\n<<\n<=\n<\n::\n:\n/=\n/\n.\n->\n-=\n--\n-\n,\n+=\n++\n+\n*=\n*\n&=\n&&\n&\n%=\n%\n!=\n!\n\
        ;\n[\n]\n(\n)\n{\n}\n";
    let sources = vec![Source::new("test.cw", content)];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    use TokenType::*;
    let expected = vec![
        Bool, Bool, Integer, Integer, Float, Float, StringLiteral, StringLiteral, Struct, Virtual,
        Func, Var, Alias, If, Else, For, Break, Continue, Return, Identifier, Identifier, Tilde,
        PipePipe, PipeEqual, Pipe, CaretEqual, Caret, Question, GreaterGreaterEqual,
        GreaterGreater, GreaterEqual, Greater, EqualEqual, Equal, LessLessEqual, LessLess,
        LessEqual, Less, ColonColon, Colon, SlashEqual, Slash, Period, Arrow, MinusEqual,
        MinusMinus, Minus, Comma, PlusEqual, PlusPlus, Plus, StarEqual, Star, AmpEqual, AmpAmp,
        Amp, PercentEqual, Percent, ExclaimEqual, Exclaim, Semi, LSquare, RSquare, LParen, RParen,
        LBrace, RBrace,
    ];
    assert_eq!(collect_types(&mut lexer), expected);
}

#[test]
fn token_properties() {
    let sources = vec![Source::new(
        "props.cw",
        "abc_123 true 456 'a' 2.5 \"hi\"",
    )];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    assert_eq!(
        lexer.token(0).property,
        TokenProperty::Identifier("abc_123".to_string())
    );
    lexer.advance();
    assert_eq!(lexer.token(0).property, TokenProperty::Bool(true));
    lexer.advance();
    assert_eq!(
        lexer.token(0).property,
        TokenProperty::Integer {
            signed: true,
            precision: 4,
            value: 456
        }
    );
    lexer.advance();
    assert_eq!(
        lexer.token(0).property,
        TokenProperty::Integer {
            signed: true,
            precision: 4,
            value: 'a' as i64
        }
    );
    lexer.advance();
    assert_eq!(
        lexer.token(0).property,
        TokenProperty::Float {
            precision: 8,
            value: 2.5
        }
    );
    lexer.advance();
    assert_eq!(
        lexer.token(0).property,
        TokenProperty::String("hi".to_string())
    );
}

#[test]
fn peek_is_idempotent_and_shifts_on_advance() {
    let sources = vec![Source::new("peek.cw", "a + b")];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    let first_peek = lexer.token(1).clone();
    let second_peek = lexer.token(1).clone();
    assert_eq!(first_peek, second_peek);

    lexer.advance();
    assert_eq!(lexer.token(0), &first_peek);
    assert_eq!(lexer.token(1).ty, TokenType::Identifier);
}

#[test]
fn locations_track_lines_and_columns() {
    let sources = vec![Source::new("loc.cw", "ab cd\n  ef\n")];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    let t = lexer.token(0);
    assert_eq!((t.location.line, t.location.column, t.location.size), (0, 0, 2));
    lexer.advance();
    let t = lexer.token(0);
    assert_eq!((t.location.line, t.location.column, t.location.size), (0, 3, 2));
    lexer.advance();
    let t = lexer.token(0);
    assert_eq!((t.location.line, t.location.column, t.location.size), (1, 2, 2));

    // line starts recorded at every eol
    assert_eq!(lexer.line_pos(0, 0), Some(0));
    assert_eq!(lexer.line_pos(0, 1), Some(6));
    assert_eq!(lexer.line_pos(0, 2), Some(11));
    assert_eq!(lexer.line_pos(0, 3), None);
}

#[test]
fn steps_across_sources() {
    let sources = vec![
        Source::new("one.cw", "a\nb"),
        Source::new("two.cw", "c"),
    ];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    let locations: Vec<(usize, usize, usize)> = std::iter::from_fn(|| {
        let t = lexer.token(0).clone();
        if t.ty == TokenType::Eos {
            return None;
        }
        lexer.advance();
        Some((t.location.file, t.location.line, t.location.column))
    })
    .collect();

    // the cursor restarts at line 0, column 0 in the second source
    assert_eq!(locations, vec![(0, 0, 0), (0, 1, 0), (1, 0, 0)]);
    assert_eq!(lexer.line_pos(1, 0), Some(0));
}

#[test]
fn nul_sentinel_ends_a_source() {
    let sources = vec![Source::new("sentinel.cw", "ab\0")];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    assert_eq!(lexer.token(0).ty, TokenType::Identifier);
    lexer.advance();
    assert_eq!(lexer.token(0).ty, TokenType::Eos);
}

#[test]
fn unmatched_byte_yields_unknown() {
    let sources = vec![Source::new("unknown.cw", "a @ b")];
    let mut lexer = Lexer::new();
    lexer.reset(&sources);

    assert_eq!(lexer.token(0).ty, TokenType::Identifier);
    lexer.advance();
    let unknown = lexer.token(0);
    assert_eq!(unknown.ty, TokenType::Unknown);
    assert!(!unknown.valid());

    // the lexer continues past the offending byte
    lexer.advance();
    assert_eq!(lexer.token(0).ty, TokenType::Identifier);
    lexer.advance();
    assert_eq!(lexer.token(0).ty, TokenType::Eos);
}

#[test]
fn empty_source_list_yields_eos() {
    let mut lexer = Lexer::new();
    lexer.reset(&[]);
    assert_eq!(lexer.token(0).ty, TokenType::Eos);
    assert_eq!(lexer.token(1).ty, TokenType::Eos);
    lexer.advance();
    assert_eq!(lexer.token(0).ty, TokenType::Eos);
}
