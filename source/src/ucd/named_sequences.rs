use super::{parse_sequence, payload};
use crate::LoadError;

const FILE: &str = "NamedSequences.txt";

/// именованная последовательность кодпоинтов
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSequence
{
    /// название, в том же пространстве имен, что и названия символов
    pub name: String,
    /// кодпоинты последовательности
    pub codes: Vec<u32>,
}

/// разбор NamedSequences.txt: название;кодпоинты через пробел
pub fn parse(data: &str) -> Result<Vec<NamedSequence>, LoadError>
{
    let mut sequences = vec![];

    for (number, line) in data.lines().enumerate() {
        let number = number + 1;

        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        let (name, codes) = match line.split_once(';') {
            Some((name, codes)) => (name.trim(), parse_sequence(codes, FILE, number)?),
            None => {
                return Err(LoadError::FieldCount {
                    file: FILE,
                    line: number,
                    text: line.to_owned(),
                })
            }
        };

        if name.is_empty() || codes.is_empty() {
            return Err(LoadError::BadValue {
                file: FILE,
                line: number,
                text: line.to_owned(),
            });
        }

        sequences.push(NamedSequence {
            name: name.to_owned(),
            codes,
        });
    }

    Ok(sequences)
}
