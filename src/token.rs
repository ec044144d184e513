//! Разбиение строки выражения на токены.
//!
//! Токеном считается любая последовательность непробельных символов,
//! поэтому `"3+4"` это один токен, а не три.
//!
//! # Пример
//!
//! ```
//! use roman_calc::token::Tokenizer;
//!
//! let words: Vec<&str> = Tokenizer::new("III + IV").map(|st| st.text).collect();
//! assert_eq!(words, ["III", "+", "IV"]);
//! ```

use thiserror::Error;

/// Токен с информацией о позиции в исходной строке.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SpannedToken<'a> {
    /// Текст токена.
    pub text: &'a str,
    /// Позиция начала токена (в байтах от начала строки).
    pub pos: usize,
}

impl<'a> SpannedToken<'a> {
    /// Создаёт новый токен с позицией.
    pub const fn new(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }
}

/// Ошибка токенизации: выражение состоит не из трёх токенов.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
#[error("invalid format: expected '<operand> <operator> <operand>', got {found} token(s)")]
pub struct TokenError {
    /// Сколько токенов найдено.
    pub found: usize,
    /// Позиция первого лишнего токена, если он есть.
    pub pos: Option<usize>,
}

/// Итератор по токенам входной строки.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Создаёт новый токенизатор для входной строки.
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let byte_len: usize = self
            .input
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum();

        let (consumed, rest) = self.input.split_at(byte_len);
        self.pos += byte_len;
        self.input = rest;
        consumed
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(char::is_whitespace);
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = SpannedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();

        let start_pos = self.pos;
        let text = self.advance_while(|c| !c.is_whitespace());

        if text.is_empty() {
            None
        } else {
            Some(SpannedToken::new(text, start_pos))
        }
    }
}

/// Разбивает строку ровно на три токена: операнд, оператор, операнд.
///
/// # Ошибки
///
/// Возвращает [`TokenError`], если токенов не три.
pub fn split_expression(input: &str) -> Result<[SpannedToken<'_>; 3], TokenError> {
    let tokens: Vec<SpannedToken<'_>> = Tokenizer::new(input).collect();

    match tokens.as_slice() {
        &[left, op, right] => Ok([left, op, right]),
        _ => Err(TokenError {
            found: tokens.len(),
            pos: tokens.get(3).map(|st| st.pos),
        }),
    }
}
