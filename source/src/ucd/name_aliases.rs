use super::{parse_code, payload};
use crate::LoadError;

const FILE: &str = "NameAliases.txt";

/// алиас названия символа
/// тип алиаса (correction, control, abbreviation и т.д.) для поиска не нужен
#[derive(Debug, Clone, PartialEq)]
pub struct NameAlias
{
    /// кодпоинт, на который указывает алиас
    pub code: u32,
    /// альтернативное название
    pub name: String,
}

/// разбор NameAliases.txt: кодпоинт;алиас;тип
pub fn parse(data: &str) -> Result<Vec<NameAlias>, LoadError>
{
    let mut aliases = vec![];

    for (number, line) in data.lines().enumerate() {
        let number = number + 1;

        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        let fields: Vec<&str> = line.split(';').collect();

        if fields.len() != 3 {
            return Err(LoadError::FieldCount {
                file: FILE,
                line: number,
                text: line.to_owned(),
            });
        }

        aliases.push(NameAlias {
            code: parse_code(fields[0], FILE, number)?,
            name: fields[1].trim().to_owned(),
        });
    }

    Ok(aliases)
}
