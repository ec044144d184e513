//! Бинарное выражение над двумя числами одной системы счисления.
//!
//! # Примеры
//!
//! ```
//! use roman_calc::expression::{Expression, Operator};
//! use roman_calc::numeral::NumeralSystem;
//!
//! let e = Expression::new(NumeralSystem::Roman, 10, Operator::Div, 2);
//! assert_eq!(e.evaluate(), Ok(5));
//! assert_eq!(e.calculate().unwrap(), "V");
//! ```

use std::fmt::Display;

use thiserror::Error;

use crate::numeral::{NumeralSystem, format_roman};

/// Ошибки при вычислении выражения.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("division by zero")]
    DivisionByZero,
    /// Целочисленное переполнение.
    #[error("arithmetic overflow")]
    Overflow,
    /// Результат в римской системе меньше единицы.
    #[error("result is less than I in Roman numerals ({value})")]
    ResultBelowUnity { value: i64 },
}

/// Бинарные операции.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Целочисленное деление с отбрасыванием дробной части.
    Div,
}

impl Operator {
    /// Распознаёт оператор по его записи.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// Запись оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Применить операцию к операндам.
    ///
    /// # Ошибки
    ///
    /// - [`EvalError::DivisionByZero`] при делении на ноль.
    /// - [`EvalError::Overflow`] при переполнении.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        match self {
            Self::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            Self::Sub => left.checked_sub(right).ok_or(EvalError::Overflow),
            Self::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
            Self::Div => {
                if right == 0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    left.checked_div(right).ok_or(EvalError::Overflow)
                }
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Разобранное выражение `<left> <op> <right>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    /// Система счисления обоих операндов и результата.
    pub system: NumeralSystem,
    pub left: i64,
    pub op: Operator,
    pub right: i64,
}

impl Expression {
    /// Создаёт выражение из уже разобранных операндов.
    #[must_use]
    pub const fn new(system: NumeralSystem, left: i64, op: Operator, right: i64) -> Self {
        Self {
            system,
            left,
            op,
            right,
        }
    }

    /// Вычислить значение выражения.
    ///
    /// # Ошибки
    ///
    /// См. [`Operator::apply`].
    pub fn evaluate(&self) -> Result<i64, EvalError> {
        self.op.apply(self.left, self.right)
    }

    /// Вычислить выражение и записать результат в системе операндов.
    ///
    /// # Ошибки
    ///
    /// Ошибки [`Expression::evaluate`], а также
    /// [`EvalError::ResultBelowUnity`] для римского результата меньше I.
    pub fn calculate(&self) -> Result<String, EvalError> {
        let value = self.evaluate()?;
        render(self.system, value)
    }
}

/// Записывает значение в заданной системе счисления.
///
/// # Ошибки
///
/// [`EvalError::ResultBelowUnity`] для римской системы и `value < 1`,
/// [`EvalError::Overflow`], если значение не помещается в `u32`.
pub fn render(system: NumeralSystem, value: i64) -> Result<String, EvalError> {
    match system {
        NumeralSystem::Arabic => Ok(value.to_string()),
        NumeralSystem::Roman => {
            if value < 1 {
                return Err(EvalError::ResultBelowUnity { value });
            }
            let n = u32::try_from(value).map_err(|_| EvalError::Overflow)?;
            Ok(format_roman(n))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ops_apply_match() {
        assert_eq!(Operator::Add.apply(2, 3), Ok(5));
        assert_eq!(Operator::Sub.apply(5, 3), Ok(2));
        assert_eq!(Operator::Mul.apply(4, 3), Ok(12));
        assert_eq!(Operator::Div.apply(7, 2), Ok(3));
        assert_eq!(Operator::Div.apply(1, 10), Ok(0));
    }

    #[test]
    fn div_by_zero_returns_error() {
        assert_eq!(Operator::Div.apply(1, 0), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn overflow_detected() {
        assert_eq!(Operator::Add.apply(i64::MAX, 1), Err(EvalError::Overflow));
        assert_eq!(Operator::Sub.apply(i64::MIN, 1), Err(EvalError::Overflow));
        assert_eq!(Operator::Mul.apply(i64::MAX, 2), Err(EvalError::Overflow));
        assert_eq!(Operator::Div.apply(i64::MIN, -1), Err(EvalError::Overflow));
    }

    #[test]
    fn symbols() {
        for symbol in ["+", "-", "*", "/"] {
            let op = Operator::from_symbol(symbol).unwrap();
            assert_eq!(op.to_string(), symbol);
        }
        assert_eq!(Operator::from_symbol("plus"), None);
        assert_eq!(Operator::from_symbol("%"), None);
    }

    #[test]
    fn calculate_arabic() {
        let e = Expression::new(NumeralSystem::Arabic, 3, Operator::Sub, 10);
        assert_eq!(e.calculate().unwrap(), "-7");
    }

    #[test]
    fn calculate_roman() {
        let e = Expression::new(NumeralSystem::Roman, 3, Operator::Add, 4);
        assert_eq!(e.calculate().unwrap(), "VII");

        let e = Expression::new(NumeralSystem::Roman, 10, Operator::Mul, 10);
        assert_eq!(e.calculate().unwrap(), "C");
    }

    #[test]
    fn roman_below_unity() {
        let e = Expression::new(NumeralSystem::Roman, 5, Operator::Sub, 10);
        assert_eq!(e.calculate(), Err(EvalError::ResultBelowUnity { value: -5 }));

        let e = Expression::new(NumeralSystem::Roman, 1, Operator::Div, 2);
        assert_eq!(e.calculate(), Err(EvalError::ResultBelowUnity { value: 0 }));
    }

    #[test]
    fn roman_too_large_for_u32() {
        assert_eq!(
            render(NumeralSystem::Roman, i64::from(u32::MAX) + 1),
            Err(EvalError::Overflow)
        );
    }
}
