pub mod case_folding;
pub mod composition_exclusions;
pub mod derived_core_properties;
pub mod east_asian_width;
pub mod line_break;
pub mod name_aliases;
pub mod named_sequences;
pub mod numeric_overrides;
pub mod special_casing;
pub mod unicode_data;

pub use name_aliases::NameAlias;
pub use named_sequences::NamedSequence;

use crate::LoadError;

/// содержательная часть строки - без комментария и окружающих пробелов;
/// None - пустая строка или строка целиком из комментария
fn payload(line: &str) -> Option<&str>
{
    let line = match line.split_once('#') {
        Some((data, _)) => data,
        None => line,
    };

    let line = line.trim();

    match line.is_empty() {
        true => None,
        false => Some(line),
    }
}

/// кодпоинт в шестнадцатеричной записи
fn parse_code(value: &str, file: &'static str, line: usize) -> Result<u32, LoadError>
{
    u32::from_str_radix(value.trim(), 16).map_err(|_| LoadError::BadValue {
        file,
        line,
        text: value.to_owned(),
    })
}

/// кодпоинт или диапазон вида XXXX..YYYY (границы включительно)
fn parse_range(value: &str, file: &'static str, line: usize) -> Result<(u32, u32), LoadError>
{
    let (first, last) = match value.split_once("..") {
        Some((first, last)) => (
            parse_code(first, file, line)?,
            parse_code(last, file, line)?,
        ),
        None => {
            let code = parse_code(value, file, line)?;
            (code, code)
        }
    };

    match first <= last {
        true => Ok((first, last)),
        false => Err(LoadError::BadValue {
            file,
            line,
            text: value.to_owned(),
        }),
    }
}

/// последовательность кодпоинтов, разделенных пробелами
fn parse_sequence(value: &str, file: &'static str, line: usize) -> Result<Vec<u32>, LoadError>
{
    value
        .split_whitespace()
        .map(|v| parse_code(v, file, line))
        .collect()
}
