use std::collections::HashMap;

use super::{parse_code, payload};
use crate::properties::NumericValue;
use crate::LoadError;

const FILE: &str = "NumericOverrides.txt";

/// разбор дополнительных числовых значений: кодпоинт;значение
///
/// основной источник - числовые значения иероглифов, которые в UnicodeData.txt
/// не попадают (блоки CJK заданы диапазонами)
pub fn parse(data: &str) -> Result<HashMap<u32, NumericValue>, LoadError>
{
    let mut map: HashMap<u32, NumericValue> = HashMap::new();

    for (number, line) in data.lines().enumerate() {
        let number = number + 1;

        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        let (code, value) = match line.split_once(';') {
            Some((code, value)) => (
                parse_code(code, FILE, number)?,
                NumericValue::try_from(value.trim()).map_err(|_| LoadError::BadValue {
                    file: FILE,
                    line: number,
                    text: value.to_owned(),
                })?,
            ),
            None => {
                return Err(LoadError::FieldCount {
                    file: FILE,
                    line: number,
                    text: line.to_owned(),
                })
            }
        };

        if map.insert(code, value).is_some() {
            return Err(LoadError::DoubleDefinition {
                file: FILE,
                line: number,
                code,
            });
        }
    }

    Ok(map)
}
