use super::{parse_range, payload};
use crate::properties::DerivedProperty;
use crate::LoadError;

const FILE: &str = "DerivedCoreProperties.txt";

/// разбор DerivedCoreProperties.txt
///
/// файл содержит десятки свойств; строки со свойствами, которые мы не храним,
/// пропускаются - это не ошибка формата. структурно некорректная строка,
/// как и везде, прерывает сборку
pub fn parse(data: &str) -> Result<Vec<(u32, u32, DerivedProperty)>, LoadError>
{
    let mut ranges = vec![];

    for (number, line) in data.lines().enumerate() {
        let number = number + 1;

        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        let fields: Vec<&str> = line.split(';').collect();

        if fields.len() < 2 {
            return Err(LoadError::FieldCount {
                file: FILE,
                line: number,
                text: line.to_owned(),
            });
        }

        let property = match DerivedProperty::from_name(fields[1].trim()) {
            Some(property) => property,
            None => continue,
        };

        let (first, last) = parse_range(fields[0], FILE, number)?;

        ranges.push((first, last, property));
    }

    Ok(ranges)
}
