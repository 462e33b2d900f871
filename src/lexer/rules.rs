//! The ordered regular-expression rule set the lexer scans with.

use super::TokenType;
use regex::bytes::Regex;

pub(crate) struct LexRule {
    ty: TokenType,
    regexp: Regex,
}

impl LexRule {
    fn new(ty: TokenType, pattern: &str) -> Self {
        let regexp = Regex::new(pattern).expect("lexer rule patterns are valid expressions");
        Self { ty, regexp }
    }

    fn literal(ty: TokenType, value: &str) -> Self {
        Self::new(ty, &format!("^{}", regex::escape(value)))
    }
}

/// All rules in declaration order.
///
/// The scan takes the longest match over every rule; on equal lengths the
/// earlier rule wins, which is why the bool constants and the keywords are
/// declared before the identifier rule.
pub(crate) struct LexRuleSet {
    rules: Vec<LexRule>,
}

impl LexRuleSet {
    pub fn new() -> Self {
        let mut rules = Vec::new();

        // comments
        rules.push(LexRule::new(TokenType::Comment, r"(?-u)^//[^\r\n]*"));

        // constants
        rules.push(LexRule::new(TokenType::Bool, r"^(true|false)"));
        rules.push(LexRule::new(TokenType::Integer, r"^[0-9]+"));
        rules.push(LexRule::new(TokenType::Integer, r"(?-u)^'([^'\\]|\\.+)'"));
        rules.push(LexRule::new(
            TokenType::Float,
            r"^([0-9]*\.[0-9]+|[0-9]+\.[0-9]*)([eE][+-]?[0-9]+)?",
        ));
        rules.push(LexRule::new(
            TokenType::StringLiteral,
            r#"(?-u)^"([^"\\]|\\.)*""#,
        ));

        // keywords
        for (value, ty) in [
            ("struct", TokenType::Struct),
            ("virtual", TokenType::Virtual),
            ("func", TokenType::Func),
            ("var", TokenType::Var),
            ("alias", TokenType::Alias),
            ("if", TokenType::If),
            ("else", TokenType::Else),
            ("for", TokenType::For),
            ("break", TokenType::Break),
            ("continue", TokenType::Continue),
            ("return", TokenType::Return),
        ] {
            rules.push(LexRule::literal(ty, value));
        }

        // identifiers; high-bit bytes pass through as identifier characters
        rules.push(LexRule::new(
            TokenType::Identifier,
            r"(?-u)^[$_A-Za-z\x80-\xFF][$_A-Za-z0-9\x80-\xFF]*",
        ));

        // operators and punctuation
        for (value, ty) in [
            ("~", TokenType::Tilde),
            ("||", TokenType::PipePipe),
            ("|=", TokenType::PipeEqual),
            ("|", TokenType::Pipe),
            ("^=", TokenType::CaretEqual),
            ("^", TokenType::Caret),
            ("?", TokenType::Question),
            (">>=", TokenType::GreaterGreaterEqual),
            (">>", TokenType::GreaterGreater),
            (">=", TokenType::GreaterEqual),
            (">", TokenType::Greater),
            ("==", TokenType::EqualEqual),
            ("=", TokenType::Equal),
            ("<<=", TokenType::LessLessEqual),
            ("<<", TokenType::LessLess),
            ("<=", TokenType::LessEqual),
            ("<", TokenType::Less),
            ("::", TokenType::ColonColon),
            (":", TokenType::Colon),
            ("/=", TokenType::SlashEqual),
            ("/", TokenType::Slash),
            (".", TokenType::Period),
            ("->", TokenType::Arrow),
            ("-=", TokenType::MinusEqual),
            ("--", TokenType::MinusMinus),
            ("-", TokenType::Minus),
            (",", TokenType::Comma),
            ("+=", TokenType::PlusEqual),
            ("++", TokenType::PlusPlus),
            ("+", TokenType::Plus),
            ("*=", TokenType::StarEqual),
            ("*", TokenType::Star),
            ("&=", TokenType::AmpEqual),
            ("&&", TokenType::AmpAmp),
            ("&", TokenType::Amp),
            ("%=", TokenType::PercentEqual),
            ("%", TokenType::Percent),
            ("!=", TokenType::ExclaimEqual),
            ("!", TokenType::Exclaim),
        ] {
            rules.push(LexRule::literal(ty, value));
        }

        // separators
        for (value, ty) in [
            (";", TokenType::Semi),
            ("[", TokenType::LSquare),
            ("]", TokenType::RSquare),
            ("(", TokenType::LParen),
            (")", TokenType::RParen),
            ("{", TokenType::LBrace),
            ("}", TokenType::RBrace),
        ] {
            rules.push(LexRule::literal(ty, value));
        }

        // whitespace and end of file
        rules.push(LexRule::new(TokenType::Blank, r"^[ \t\v\f]+"));
        rules.push(LexRule::new(TokenType::Eol, r"^\r?\n"));
        rules.push(LexRule::new(TokenType::Eof, r"^\x00"));

        Self { rules }
    }

    /// Match every rule at the start of `text`; the longest match wins and
    /// the first rule wins length ties.
    pub fn scan(&self, text: &[u8]) -> Option<(TokenType, usize)> {
        let mut best: Option<(TokenType, usize)> = None;
        for rule in &self.rules {
            if let Some(m) = rule.regexp.find(text) {
                debug_assert_eq!(m.start(), 0);
                let len = m.end();
                if len > 0 && best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((rule.ty, len));
                }
            }
        }
        best
    }
}
