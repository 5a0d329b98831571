use std::collections::HashMap;

use super::{parse_code, parse_sequence, payload};
use crate::LoadError;

const FILE: &str = "CaseFolding.txt";

/// разбор CaseFolding.txt: кодпоинт; статус; свертка;
///
/// статусы C (common) и F (full) дают полную свертку регистра;
/// S (simple) и T (turkic) отбрасываются - первый дублирует простое отображение,
/// второй зависит от локали и остается на совести потребителя
pub fn parse(data: &str) -> Result<HashMap<u32, Vec<u32>>, LoadError>
{
    let mut map: HashMap<u32, Vec<u32>> = HashMap::new();

    for (number, line) in data.lines().enumerate() {
        let number = number + 1;

        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        let fields: Vec<&str> = line.split(';').collect();

        if fields.len() < 3 {
            return Err(LoadError::FieldCount {
                file: FILE,
                line: number,
                text: line.to_owned(),
            });
        }

        match fields[1].trim() {
            "C" | "F" => {}
            "S" | "T" => continue,
            _ => {
                return Err(LoadError::BadValue {
                    file: FILE,
                    line: number,
                    text: fields[1].to_owned(),
                })
            }
        }

        let code = parse_code(fields[0], FILE, number)?;
        let mapping = parse_sequence(fields[2], FILE, number)?;

        if map.insert(code, mapping).is_some() {
            return Err(LoadError::DoubleDefinition {
                file: FILE,
                line: number,
                code,
            });
        }
    }

    Ok(map)
}
