//! Преобразование римских и арабских чисел.
//!
//! Римское число разбирается за один проход слева направо: если символ
//! больше предыдущего, предыдущий уже был ошибочно прибавлен, поэтому
//! добавляется `current - 2 * previous`. Обратное преобразование жадное.
//!
//! # Пример
//!
//! ```
//! use roman_calc::numeral::{format_roman, parse_roman};
//!
//! assert_eq!(parse_roman("XIV").unwrap(), 14);
//! assert_eq!(format_roman(1994), "MCMXCIV");
//! ```

use std::fmt::Display;
use std::num::IntErrorKind;

use thiserror::Error;

/// Значения римских цифр.
pub const ROMAN_DIGITS: [(char, u32); 7] = [
    ('I', 1),
    ('V', 5),
    ('X', 10),
    ('L', 50),
    ('C', 100),
    ('D', 500),
    ('M', 1000),
];

/// Пары (значение, запись) для жадного кодирования, строго по убыванию.
pub const ROMAN_VALUES: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Наибольшее число, записываемое без повторения `M` более трёх раз.
pub const MAX_ROMAN: u32 = 3999;

/// Ошибки разбора отдельного операнда.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    /// Строка не является римским числом.
    #[error("invalid Roman numeral '{0}'")]
    InvalidNumeral(String),

    /// Строка не является целым числом.
    #[error("not a number '{0}'")]
    NotANumber(String),

    /// Целое число не помещается в `i64`.
    #[error("number '{0}' does not fit in 64 bits")]
    Overflow(String),
}

/// Система счисления операнда.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// Римские цифры.
    Roman,
    /// Арабские цифры.
    Arabic,
}

impl NumeralSystem {
    /// Определяет систему счисления токена.
    ///
    /// Римскими считаются только канонические записи (см.
    /// [`parse_canonical_roman`]).
    #[must_use]
    pub fn detect(token: &str) -> Option<Self> {
        if parse_canonical_roman(token).is_ok() {
            Some(Self::Roman)
        } else if matches!(parse_arabic(token), Ok(_) | Err(NumeralError::Overflow(_))) {
            Some(Self::Arabic)
        } else {
            None
        }
    }

    /// Разбирает токен в этой системе счисления.
    ///
    /// # Ошибки
    ///
    /// [`NumeralError::InvalidNumeral`] для римской системы,
    /// [`NumeralError::NotANumber`] или [`NumeralError::Overflow`] для арабской.
    pub fn parse(self, token: &str) -> Result<i64, NumeralError> {
        match self {
            Self::Roman => parse_canonical_roman(token).map(i64::from),
            Self::Arabic => parse_arabic(token),
        }
    }
}

impl Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roman => write!(f, "Roman"),
            Self::Arabic => write!(f, "Arabic"),
        }
    }
}

fn digit_value(ch: char) -> Option<u32> {
    ROMAN_DIGITS
        .iter()
        .find(|&&(symbol, _)| symbol == ch)
        .map(|&(_, value)| value)
}

/// Разбирает римское число.
///
/// Разбор нестрогий: проверяется только принадлежность символов таблице,
/// поэтому `"IIII"` даёт 4, а `"IIV"` даёт 5.
///
/// # Ошибки
///
/// [`NumeralError::InvalidNumeral`] для пустой строки, неизвестного символа
/// или переполнения `u32`.
pub fn parse_roman(s: &str) -> Result<u32, NumeralError> {
    let invalid = || NumeralError::InvalidNumeral(s.to_owned());

    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u32 = 0;
    let mut previous: u32 = 0;

    for ch in s.chars() {
        let current = digit_value(ch).ok_or_else(invalid)?;

        // Старшая цифра не меньше удвоенной младшей, разность неотрицательна.
        let step = if current > previous {
            current - 2 * previous
        } else {
            current
        };

        total = total.checked_add(step).ok_or_else(invalid)?;
        previous = current;
    }

    Ok(total)
}

/// Разбирает римское число, допуская только каноническую запись.
///
/// # Ошибки
///
/// [`NumeralError::InvalidNumeral`], если строка не разбирается или
/// отличается от [`format_roman`] своего значения.
///
/// ```
/// use roman_calc::numeral::parse_canonical_roman;
///
/// assert_eq!(parse_canonical_roman("IX").unwrap(), 9);
/// assert!(parse_canonical_roman("VIIII").is_err());
/// ```
pub fn parse_canonical_roman(s: &str) -> Result<u32, NumeralError> {
    let value = parse_roman(s)?;

    if format_roman(value) == s {
        Ok(value)
    } else {
        Err(NumeralError::InvalidNumeral(s.to_owned()))
    }
}

/// Записывает число римскими цифрами.
///
/// Для нуля возвращает пустую строку.
#[must_use]
pub fn format_roman(mut n: u32) -> String {
    let mut out = String::new();

    for &(value, symbol) in &ROMAN_VALUES {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }

    out
}

/// Разбирает десятичное целое число.
///
/// # Ошибки
///
/// [`NumeralError::Overflow`] для числа за пределами `i64`,
/// [`NumeralError::NotANumber`] для всего остального.
pub fn parse_arabic(s: &str) -> Result<i64, NumeralError> {
    s.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            NumeralError::Overflow(s.to_owned())
        }
        _ => NumeralError::NotANumber(s.to_owned()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_table_strictly_descending() {
        assert!(ROMAN_VALUES.windows(2).all(|w| w[0].0 > w[1].0));
    }

    #[test]
    fn format_small_numbers() {
        let expected = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
        for (n, roman) in (1..=10).zip(expected) {
            assert_eq!(format_roman(n), roman);
        }
    }

    #[test]
    fn format_edges() {
        assert_eq!(format_roman(0), "");
        assert_eq!(format_roman(40), "XL");
        assert_eq!(format_roman(MAX_ROMAN), "MMMCMXCIX");
        assert_eq!(format_roman(4000), "MMMM");
    }

    #[test]
    fn round_trip_full_range() {
        for n in 1..=MAX_ROMAN {
            assert_eq!(parse_roman(&format_roman(n)), Ok(n), "n = {n}");
        }
    }

    #[test]
    fn parse_subtractive_pairs() {
        assert_eq!(parse_roman("IV"), Ok(4));
        assert_eq!(parse_roman("XLII"), Ok(42));
        assert_eq!(parse_roman("CMXC"), Ok(990));
        assert_eq!(parse_roman("MCMXCIV"), Ok(1994));
    }

    #[test]
    fn parse_is_permissive() {
        assert_eq!(parse_roman("IIII"), Ok(4));
        assert_eq!(parse_roman("IIV"), Ok(5));
        assert_eq!(parse_roman("VX"), Ok(10));
    }

    #[test]
    fn canonical_rejects_non_canonical() {
        for s in ["IIII", "IIV", "VX", "VV", "IL"] {
            assert_eq!(
                parse_canonical_roman(s),
                Err(NumeralError::InvalidNumeral(s.to_owned())),
                "input: {s}"
            );
        }
        assert_eq!(parse_canonical_roman("XIV"), Ok(14));
    }

    #[test]
    fn parse_roman_errors() {
        assert!(matches!(parse_roman(""), Err(NumeralError::InvalidNumeral(_))));
        assert!(matches!(parse_roman("IIZ"), Err(NumeralError::InvalidNumeral(_))));
        // регистр важен
        assert!(matches!(parse_roman("iv"), Err(NumeralError::InvalidNumeral(_))));
    }

    #[test]
    fn parse_roman_overflow() {
        let huge = "M".repeat(5_000_000);
        assert!(matches!(parse_roman(&huge), Err(NumeralError::InvalidNumeral(_))));
    }

    #[test]
    fn parse_arabic_numbers() {
        assert_eq!(parse_arabic("7"), Ok(7));
        assert_eq!(parse_arabic("+7"), Ok(7));
        assert_eq!(parse_arabic("-3"), Ok(-3));
        assert_eq!(
            parse_arabic("seven"),
            Err(NumeralError::NotANumber("seven".to_owned()))
        );
        assert!(parse_arabic("1.5").is_err());
    }

    #[test]
    fn parse_arabic_overflow() {
        assert_eq!(
            parse_arabic("99999999999999999999"),
            Err(NumeralError::Overflow("99999999999999999999".to_owned()))
        );
        assert!(matches!(
            parse_arabic("-99999999999999999999"),
            Err(NumeralError::Overflow(_))
        ));
        assert_eq!(
            NumeralSystem::detect("99999999999999999999"),
            Some(NumeralSystem::Arabic)
        );
    }

    #[test]
    fn detect_system() {
        assert_eq!(NumeralSystem::detect("VII"), Some(NumeralSystem::Roman));
        assert_eq!(NumeralSystem::detect("7"), Some(NumeralSystem::Arabic));
        assert_eq!(NumeralSystem::detect("IIII"), None);
        assert_eq!(NumeralSystem::detect("plus"), None);
    }
}
