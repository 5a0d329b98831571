use std::collections::HashMap;

use super::{parse_code, parse_sequence, payload};
use crate::properties::SpecialCasing;
use crate::LoadError;

const FILE: &str = "SpecialCasing.txt";

/// разбор SpecialCasing.txt: кодпоинт; нижний; заглавный; верхний; [условия;]
///
/// записи с условиями (локаль, контекст - например, финальная сигма)
/// отбрасываются целиком: условные правила применяет потребитель, база данных
/// хранит только безусловные полные преобразования
pub fn parse(data: &str) -> Result<HashMap<u32, SpecialCasing>, LoadError>
{
    let mut map: HashMap<u32, SpecialCasing> = HashMap::new();

    for (number, line) in data.lines().enumerate() {
        let number = number + 1;

        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        let fields: Vec<&str> = line.split(';').collect();

        if fields.len() < 5 {
            return Err(LoadError::FieldCount {
                file: FILE,
                line: number,
                text: line.to_owned(),
            });
        }

        if !fields[4].trim().is_empty() {
            continue;
        }

        let code = parse_code(fields[0], FILE, number)?;

        let casing = SpecialCasing {
            lower: parse_sequence(fields[1], FILE, number)?,
            title: parse_sequence(fields[2], FILE, number)?,
            upper: parse_sequence(fields[3], FILE, number)?,
        };

        if map.insert(code, casing).is_some() {
            return Err(LoadError::DoubleDefinition {
                file: FILE,
                line: number,
                code,
            });
        }
    }

    Ok(map)
}
