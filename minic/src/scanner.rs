//! Lexeme splitting and token classification.
//!
//! Scanning happens in two steps, matching the shape of the original tool
//! chain: the whole source is first split into lexemes by a separator table
//! (grouping two-character operators like `>=` and stripping `//` comments),
//! then [`Scanner::next_token`] classifies one lexeme per call.  A small
//! amount of state survives between calls: the quoting protocol for
//! character literals, where a `'` lexeme switches the scanner into a mode
//! in which the following lexeme is wrapped and typed as a char.
//!
//! Classification precedence, which the parser depends on:
//!
//! 1. exact match against the reserved-word/punctuation table;
//! 2. the numeric-literal pattern (digits with at most one `.`);
//! 3. a single-quote-delimited one-character literal;
//! 4. otherwise, a lexeme that equals its own uppercasing and starts with a
//!    word character is an identifier;
//! 5. anything else is invalid (symbol 99).
//!
//! Rule 4 is case-sensitive on purpose: it is the behavior this compiler
//! has always had, and lowercase names reject.

use crate::{DataType, Symbol, Value};
use log::debug;
use std::collections::HashMap;

/// Separator strings.  Any of these ends the lexeme being accumulated; the
/// two-character entries are grouped greedily when their first character is
/// itself a separator.
const SEPARATORS: &[&str] = &[
    "(", ")", "\r", "\n", "\t", "+", "-", "*", "/", "%", "|", "&", " ", "!", "?", "@", "$", "^",
    "[", "]", "=", "{", "}", ",", ".", "\\", "\"", ";", ":", "'", "<", "<=", "==", ">", ">=",
    "<>", "//",
];

fn is_separator(s: &str) -> bool {
    SEPARATORS.contains(&s)
}

/// Matches the numeric-literal pattern: digits with at most one decimal
/// point.  (The point never survives integer parsing; see
/// [`Scanner::next_token`].)
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '.')
        && s.chars().filter(|&c| c == '.').count() <= 1
}

/// A classified token, as handed to the parser.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedToken {
    pub lexeme: String,
    pub symbol: Symbol,
    /// Literal value for numeric and character literals.
    pub value: Option<Value>,
    pub ty: DataType,
}

/// The reserved-word and punctuation table.  Built once, up front, and
/// passed to every [`Scanner`]; classification has no hidden global state.
pub struct Classifier {
    keywords: HashMap<&'static str, Symbol>,
}

impl Classifier {
    pub fn new() -> Classifier {
        let mut keywords = HashMap::new();
        keywords.insert("static", Symbol::STATIC);
        keywords.insert("void", Symbol::VOID);
        // 3 is reserved for identifiers
        keywords.insert("public", Symbol::PUBLIC);
        keywords.insert("private", Symbol::PRIVATE);
        keywords.insert("var", Symbol::VAR);
        keywords.insert(":", Symbol::COLON);
        keywords.insert(";", Symbol::SEMI);
        keywords.insert("{", Symbol::LBRACE);
        keywords.insert("}", Symbol::RBRACE);
        keywords.insert("(", Symbol::LPAREN);
        keywords.insert(")", Symbol::RPAREN);
        keywords.insert("$", Symbol::DOLLAR);
        keywords.insert("char", Symbol::CHAR);
        keywords.insert("int", Symbol::INT);
        keywords.insert("get", Symbol::GET);
        keywords.insert("put", Symbol::PUT);
        keywords.insert("if", Symbol::IF);
        keywords.insert("=", Symbol::ASSIGN);
        // 20 is reserved for numeric literals
        keywords.insert("true", Symbol::TRUE);
        keywords.insert("false", Symbol::FALSE);
        keywords.insert(">", Symbol::GT);
        keywords.insert(">=", Symbol::GE);
        keywords.insert("==", Symbol::EQ);
        keywords.insert("<=", Symbol::LE);
        keywords.insert("<", Symbol::LT);
        keywords.insert("<>", Symbol::NE);
        keywords.insert("+", Symbol::PLUS);
        keywords.insert("-", Symbol::MINUS);
        keywords.insert("*", Symbol::STAR);
        keywords.insert("/", Symbol::SLASH);
        keywords.insert("%", Symbol::PERCENT);
        // 34 is reserved for character literals
        keywords.insert("$end", Symbol::END);
        keywords.insert(",", Symbol::COMMA);
        keywords.insert("'", Symbol::QUOTE);
        Classifier { keywords }
    }

    /// Map a lexeme to its grammar symbol.
    pub fn classify(&self, lexeme: &str) -> Symbol {
        if let Some(&symbol) = self.keywords.get(lexeme) {
            return symbol;
        }
        if is_numeric(lexeme) {
            return Symbol::NUM;
        }
        if lexeme.starts_with('\'') && lexeme.ends_with('\'') && lexeme.chars().count() == 3 {
            return Symbol::LITERAL;
        }
        if lexeme == lexeme.to_uppercase()
            && lexeme
                .chars()
                .next()
                .map(|c| c.is_alphanumeric() || c == '_')
                .unwrap_or(false)
        {
            return Symbol::ID;
        }
        Symbol::INVALID
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new()
    }
}

/// Tracks the character-literal quoting protocol between tokens.
#[derive(Copy, Clone, PartialEq)]
enum Quote {
    /// Outside any quotes.
    Outside,
    /// An opening `'` was just produced; the next lexeme is the content.
    Open,
    /// The content was produced; the next `'` closes the literal.
    AwaitClose,
}

/// Produces one classified token per call from a pre-split lexeme stream.
pub struct Scanner<'a> {
    classifier: &'a Classifier,
    lexemes: std::vec::IntoIter<String>,
    quote: Quote,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &str, classifier: &'a Classifier) -> Scanner<'a> {
        let mut lexemes = Vec::new();
        for line in source.lines() {
            split_line(line, &mut lexemes);
        }
        debug!("scanner: {} lexemes", lexemes.len());
        Scanner {
            classifier,
            lexemes: lexemes.into_iter(),
            quote: Quote::Outside,
        }
    }

    /// The next classified token, or `None` once the source is exhausted.
    /// The caller synthesizes the `$end` marker.
    pub fn next_token(&mut self) -> Option<ClassifiedToken> {
        let lexeme = self.lexemes.next()?;

        if is_numeric(&lexeme) {
            // The lexeme shape admits one '.', which integer parsing does
            // not; such a lexeme classifies as invalid rather than dying
            // mid-compile.
            return Some(match lexeme.parse::<i64>() {
                Ok(n) => ClassifiedToken {
                    lexeme,
                    symbol: Symbol::NUM,
                    value: Some(Value::Immediate(n)),
                    ty: DataType::Int,
                },
                Err(_) => ClassifiedToken {
                    lexeme,
                    symbol: Symbol::INVALID,
                    value: None,
                    ty: DataType::Terminal,
                },
            });
        }

        if self.quote == Quote::Open {
            self.quote = Quote::AwaitClose;
            let code = lexeme.chars().next().map(|c| Value::Immediate(c as i64));
            let wrapped = format!("'{}'", lexeme);
            let symbol = self.classifier.classify(&wrapped);
            return Some(ClassifiedToken {
                lexeme: wrapped,
                symbol,
                value: code,
                ty: DataType::Char,
            });
        }
        if lexeme == "'" {
            self.quote = match self.quote {
                Quote::Outside => Quote::Open,
                Quote::AwaitClose => Quote::Outside,
                Quote::Open => Quote::Open,
            };
        }

        let symbol = self.classifier.classify(&lexeme);
        Some(ClassifiedToken {
            lexeme,
            symbol,
            value: None,
            ty: DataType::Terminal,
        })
    }
}

impl Iterator for Scanner<'_> {
    type Item = ClassifiedToken;

    fn next(&mut self) -> Option<ClassifiedToken> {
        self.next_token()
    }
}

/// Split one line into lexemes.  Separators end the pending lexeme; spaces
/// and tabs separate without being emitted; `//` discards the rest of the
/// line.
fn split_line(line: &str, out: &mut Vec<String>) {
    let chars: Vec<char> = line.chars().collect();
    let mut lexeme = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let single = c.to_string();

        if !is_separator(&single) {
            lexeme.push(c);
            i += 1;
            continue;
        }

        // Group two-character separators such as >= and <>.
        let mut separator = single;
        if i + 1 < chars.len() {
            let pair: String = [c, chars[i + 1]].iter().collect();
            if is_separator(&pair) {
                if pair == "//" {
                    // comment: ignore the rest of the line
                    if !lexeme.is_empty() {
                        out.push(lexeme);
                    }
                    return;
                }
                separator = pair;
                i += 1;
            }
        }
        i += 1;

        if !lexeme.is_empty() {
            out.push(std::mem::take(&mut lexeme));
        }
        if separator != " " && separator != "\t" {
            out.push(separator);
        }
    }

    if !lexeme.is_empty() {
        out.push(lexeme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<String> {
        let mut out = Vec::new();
        for line in source.lines() {
            split_line(line, &mut out);
        }
        out
    }

    fn symbols(source: &str) -> Vec<i16> {
        let classifier = Classifier::new();
        Scanner::new(source, &classifier).map(|t| t.symbol.0).collect()
    }

    #[test]
    fn separators_split_and_group() {
        assert_eq!(lexemes("X=3;"), ["X", "=", "3", ";"]);
        assert_eq!(lexemes("A<=B"), ["A", "<=", "B"]);
        assert_eq!(lexemes("A<>B"), ["A", "<>", "B"]);
        assert_eq!(lexemes("A < = B"), ["A", "<", "=", "B"]);
        assert_eq!(lexemes("get ( X )"), ["get", "(", "X", ")"]);
    }

    #[test]
    fn comments_discard_the_rest_of_the_line() {
        assert_eq!(lexemes("X = 3 // trailing\nY"), ["X", "=", "3", "Y"]);
        assert_eq!(lexemes("// whole line\n"), Vec::<String>::new());
    }

    #[test]
    fn classification_precedence() {
        let c = Classifier::new();
        assert_eq!(c.classify("if"), Symbol::IF);
        assert_eq!(c.classify("42"), Symbol::NUM);
        assert_eq!(c.classify("'A'"), Symbol::LITERAL);
        assert_eq!(c.classify("X"), Symbol::ID);
        assert_eq!(c.classify("X1"), Symbol::ID);
        assert_eq!(c.classify("_X"), Symbol::ID);
        // case-sensitivity preserved: lowercase names are not identifiers
        assert_eq!(c.classify("x"), Symbol::INVALID);
        assert_eq!(c.classify("Abc"), Symbol::INVALID);
        assert_eq!(c.classify("'AB'"), Symbol::INVALID);
    }

    #[test]
    fn character_literals_are_quoted_and_valued() {
        let classifier = Classifier::new();
        let mut scanner = Scanner::new("C = 'A'", &classifier);
        assert_eq!(scanner.next_token().unwrap().symbol, Symbol::ID);
        assert_eq!(scanner.next_token().unwrap().symbol, Symbol::ASSIGN);
        assert_eq!(scanner.next_token().unwrap().symbol, Symbol::QUOTE);
        let content = scanner.next_token().unwrap();
        assert_eq!(content.symbol, Symbol::LITERAL);
        assert_eq!(content.lexeme, "'A'");
        assert_eq!(content.value, Some(Value::Immediate('A' as i64)));
        assert_eq!(content.ty, DataType::Char);
        assert_eq!(scanner.next_token().unwrap().symbol, Symbol::QUOTE);
        assert!(scanner.next_token().is_none());
    }

    #[test]
    fn numeric_tokens_carry_their_value() {
        assert_eq!(symbols("X = 42"), [3, 19, 20]);
        let classifier = Classifier::new();
        let tok = Scanner::new("42", &classifier).next_token().unwrap();
        assert_eq!(tok.value, Some(Value::Immediate(42)));
        assert_eq!(tok.ty, DataType::Int);
    }

    #[test]
    fn unparsable_numeric_shapes_are_invalid() {
        // '.' is a separator, so "3.5" splits; the lone dot matches the
        // numeric pattern but not integer parsing, and classifies invalid.
        assert_eq!(symbols("3.5"), [20, 99, 20]);
        assert_eq!(symbols("."), [99]);
        assert!(is_numeric("3.5"));
        assert!(!is_numeric("3a"));
    }
}
