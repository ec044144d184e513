//! Разбор строки `<operand> <operator> <operand>` в [`Expression`].
//!
//! Порядок проверок:
//! 1. Ровно три токена.
//! 2. Оба операнда в одной системе счисления.
//! 3. Оба значения в допустимом диапазоне.
//! 4. Оператор один из `+ - * /`.
//!
//! # Примеры
//!
//! ```
//! use roman_calc::config::OperandRange;
//! use roman_calc::parser::parse;
//!
//! let expr = parse("VI * II", OperandRange::default()).unwrap();
//! assert_eq!(expr.calculate().unwrap(), "XII");
//! ```

use thiserror::Error;

use crate::config::OperandRange;
use crate::expression::{Expression, Operator};
use crate::numeral::{NumeralError, NumeralSystem};
use crate::token::{SpannedToken, TokenError, split_expression};

/// Ошибки, возникающие при разборе выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Выражение состоит не из трёх токенов.
    #[error("{0}")]
    Format(#[from] TokenError),

    /// Операнды записаны в разных системах счисления.
    #[error("mixed number systems: {left} and {right}")]
    MixedSystems {
        left: NumeralSystem,
        right: NumeralSystem,
        /// Позиция правого операнда.
        pos: usize,
    },

    /// Операнд не разбирается в ожидаемой системе.
    #[error("{source}")]
    Numeral {
        source: NumeralError,
        /// Позиция операнда.
        pos: usize,
    },

    /// Значение операнда вне допустимого диапазона.
    #[error("numbers must be between {min} and {max}, got {value}")]
    OutOfRange {
        value: i64,
        min: i64,
        max: i64,
        /// Позиция операнда.
        pos: usize,
    },

    /// Операнд из цифр, не помещающийся даже в `i64`.
    #[error("numbers must be between {min} and {max}, got {token}")]
    TooLarge {
        token: String,
        min: i64,
        max: i64,
        /// Позиция операнда.
        pos: usize,
    },

    /// Неизвестный оператор.
    #[error("invalid operator '{symbol}'")]
    InvalidOperator {
        symbol: String,
        /// Позиция оператора.
        pos: usize,
    },
}

impl ParseError {
    /// Возвращает позицию ошибки, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Format(te) => te.pos,
            Self::MixedSystems { pos, .. }
            | Self::Numeral { pos, .. }
            | Self::OutOfRange { pos, .. }
            | Self::TooLarge { pos, .. }
            | Self::InvalidOperator { pos, .. } => Some(*pos),
        }
    }
}

/// Разборщик выражения с заданным диапазоном операндов.
pub struct Parser<'a> {
    input: &'a str,
    range: OperandRange,
}

impl<'a> Parser<'a> {
    /// Создаёт новый парсер для заданной входной строки.
    #[must_use]
    pub const fn new(input: &'a str, range: OperandRange) -> Self {
        Self { input, range }
    }

    /// Разбирает ввод и возвращает выражение.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`ParseError`] при нарушении формата, смешении систем
    /// счисления, выходе за диапазон или неизвестном операторе.
    pub fn parse(self) -> Result<Expression, ParseError> {
        let [left, op, right] = split_expression(self.input)?;

        let system = Self::classify(left, right)?;
        let left_value = self.operand(system, left)?;
        let right_value = self.operand(system, right)?;

        self.check_range(left_value, left.pos)?;
        self.check_range(right_value, right.pos)?;

        let op = Operator::from_symbol(op.text).ok_or_else(|| ParseError::InvalidOperator {
            symbol: op.text.to_owned(),
            pos: op.pos,
        })?;

        Ok(Expression::new(system, left_value, op, right_value))
    }

    /// Определяет общую систему счисления операндов.
    ///
    /// Если один из операндов не распознан, ожидаемой считается система
    /// другого операнда; если не распознан ни один, арабская.
    fn classify(
        left: SpannedToken<'_>,
        right: SpannedToken<'_>,
    ) -> Result<NumeralSystem, ParseError> {
        match (
            NumeralSystem::detect(left.text),
            NumeralSystem::detect(right.text),
        ) {
            (Some(l), Some(r)) if l == r => Ok(l),
            (Some(l), Some(r)) => Err(ParseError::MixedSystems {
                left: l,
                right: r,
                pos: right.pos,
            }),
            (Some(system), None) | (None, Some(system)) => Ok(system),
            (None, None) => Ok(NumeralSystem::Arabic),
        }
    }

    fn operand(&self, system: NumeralSystem, token: SpannedToken<'_>) -> Result<i64, ParseError> {
        system.parse(token.text).map_err(|source| match source {
            NumeralError::Overflow(token_text) => ParseError::TooLarge {
                token: token_text,
                min: self.range.min(),
                max: self.range.max(),
                pos: token.pos,
            },
            source => ParseError::Numeral {
                source,
                pos: token.pos,
            },
        })
    }

    fn check_range(&self, value: i64, pos: usize) -> Result<(), ParseError> {
        if self.range.contains(value) {
            Ok(())
        } else {
            Err(ParseError::OutOfRange {
                value,
                min: self.range.min(),
                max: self.range.max(),
                pos,
            })
        }
    }
}

/// Разбирает строку в выражение.
///
/// # Ошибки
///
/// Возвращает [`ParseError`] при некорректном вводе.
pub fn parse(input: &str, range: OperandRange) -> Result<Expression, ParseError> {
    Parser::new(input, range).parse()
}
