//! # roman_calc
//!
//! Консольный калькулятор для римских и арабских чисел.
//!
//! Поддерживает:
//! - Выражения вида `<операнд> <оператор> <операнд>`
//! - Операнды от 1 до 10 (диапазон настраивается)
//! - Бинарные операции: `+`, `-`, `*`, `/` (деление целочисленное)
//! - Результат в той же системе счисления, что и операнды
//!
//! # Пример использования
//!
//! ```
//! use roman_calc::calculate;
//!
//! assert_eq!(calculate("III + IV").unwrap(), "VII");
//! assert_eq!(calculate("3 + 4").unwrap(), "7");
//! assert!(calculate("III + 4").is_err());
//! ```

pub mod config;
pub mod expression;
pub mod logging;
pub mod numeral;
pub mod parser;
pub mod token;

use std::io::{self, BufRead, Write};

use crate::config::CalculatorConfig;
use crate::numeral::NumeralError;

/// Общий тип ошибки калькулятора.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Ошибка разбора выражения.
    #[error("{0}")]
    Parse(#[from] parser::ParseError),

    /// Ошибка вычисления.
    #[error("{0}")]
    Eval(#[from] expression::EvalError),
}

/// Вид ошибки без подробностей.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidFormat,
    MixedSystems,
    OutOfRange,
    InvalidOperator,
    DivisionByZero,
    ResultBelowUnity,
    InvalidNumeral,
    NotANumber,
    Overflow,
}

impl CalcError {
    /// Возвращает вид ошибки.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        use crate::expression::EvalError;
        use crate::parser::ParseError;

        match self {
            Self::Parse(ParseError::Format(_)) => ErrorKind::InvalidFormat,
            Self::Parse(ParseError::MixedSystems { .. }) => ErrorKind::MixedSystems,
            Self::Parse(ParseError::OutOfRange { .. } | ParseError::TooLarge { .. }) => {
                ErrorKind::OutOfRange
            }
            Self::Parse(ParseError::InvalidOperator { .. }) => ErrorKind::InvalidOperator,
            Self::Parse(ParseError::Numeral {
                source: NumeralError::InvalidNumeral(_),
                ..
            }) => ErrorKind::InvalidNumeral,
            Self::Parse(ParseError::Numeral {
                source: NumeralError::NotANumber(_),
                ..
            }) => ErrorKind::NotANumber,
            Self::Parse(ParseError::Numeral {
                source: NumeralError::Overflow(_),
                ..
            }) => ErrorKind::OutOfRange,
            Self::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::Eval(EvalError::ResultBelowUnity { .. }) => ErrorKind::ResultBelowUnity,
            Self::Eval(EvalError::Overflow) => ErrorKind::Overflow,
        }
    }

    /// Возвращает позицию ошибки в исходной строке, если она известна.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(pe) => pe.position(),
            Self::Eval(_) => None,
        }
    }
}

/// Калькулятор с фиксированной конфигурацией.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    /// Создаёт калькулятор с заданной конфигурацией.
    #[must_use]
    pub const fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Текущая конфигурация.
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Вычисляет строковое выражение и возвращает результат в системе
    /// счисления операндов.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`CalcError`] при ошибках разбора или вычисления.
    pub fn calculate(&self, input: &str) -> Result<String, CalcError> {
        let expr = parser::parse(input, self.config.operand_range)?;
        tracing::debug!(
            system = %expr.system,
            left = expr.left,
            op = %expr.op,
            right = expr.right,
            "parsed expression"
        );

        let result = expr.calculate()?;
        tracing::debug!(%result, "evaluated");
        Ok(result)
    }
}

/// Вычисляет выражение с настройками по умолчанию.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при ошибках разбора или вычисления.
///
/// # Примеры
///
/// ```
/// use roman_calc::{ErrorKind, calculate};
///
/// assert_eq!(calculate("X / II").unwrap(), "V");
/// assert_eq!(calculate("V - X").unwrap_err().kind(), ErrorKind::ResultBelowUnity);
/// ```
pub fn calculate(input: &str) -> Result<String, CalcError> {
    Calculator::default().calculate(input)
}

const PROMPT: &str = "> ";

/// Запускает интерактивный калькулятор на stdin/stdout.
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn run(calculator: &Calculator) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl(stdin.lock(), stdout.lock(), calculator)
}

/// Цикл чтения и вычисления выражений.
///
/// Читает строки из `input`, пишет ответы в `output`. Для выхода введите
/// `q`, `quit`, `exit` или закройте ввод (Ctrl+D).
///
/// # Ошибки
///
/// Возвращает [`io::Error`] при ошибках чтения/записи.
pub fn repl<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    calculator: &Calculator,
) -> io::Result<()> {
    let range = calculator.config().operand_range;
    writeln!(
        output,
        "Roman/Arabic calculator ({}..={}). Enter an expression or 'q' to quit.",
        range.min(),
        range.max()
    )?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let expr = line.trim();

        if is_quit_command(expr) {
            break;
        }

        if !expr.is_empty() {
            match calculator.calculate(expr) {
                Ok(result) => writeln!(output, "{result}")?,
                Err(e) => {
                    tracing::debug!(kind = ?e.kind(), position = ?e.position(), "rejected: {e}");
                    writeln!(output, "Error: {e}")?;
                }
            }
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(())
}

fn is_quit_command(input: &str) -> bool {
    ["q", "quit", "exit"]
        .iter()
        .any(|cmd| input.eq_ignore_ascii_case(cmd))
}
