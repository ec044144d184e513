//! Настройки калькулятора.

use thiserror::Error;

use crate::numeral::MAX_ROMAN;

/// Ошибки конфигурации.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Нижняя граница больше верхней.
    #[error("empty operand range: {min} > {max}")]
    EmptyRange { min: i64, max: i64 },
}

/// Допустимый диапазон значений операндов (включительно).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandRange {
    min: i64,
    max: i64,
}

impl OperandRange {
    /// Классический диапазон задачи: от 1 до 10.
    pub const CLASSIC: Self = Self { min: 1, max: 10 };

    /// Всё, что записывается римскими цифрами: от I до MMMCMXCIX.
    pub const FULL_ROMAN: Self = Self {
        min: 1,
        max: MAX_ROMAN as i64,
    };

    /// Создаёт диапазон `[min, max]`.
    ///
    /// # Ошибки
    ///
    /// [`ConfigError::EmptyRange`], если `min > max`.
    pub const fn new(min: i64, max: i64) -> Result<Self, ConfigError> {
        if min > max {
            Err(ConfigError::EmptyRange { min, max })
        } else {
            Ok(Self { min, max })
        }
    }

    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for OperandRange {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Конфигурация калькулятора.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Диапазон, в котором должны лежать оба операнда.
    pub operand_range: OperandRange,
}

impl CalculatorConfig {
    #[must_use]
    pub const fn with_range(operand_range: OperandRange) -> Self {
        Self { operand_range }
    }
}
