use super::{parse_range, payload};
use crate::LoadError;

const FILE: &str = "LineBreak.txt";

/// классы, означающие обязательный разрыв строки
const MANDATORY: [&str; 4] = ["BK", "CR", "LF", "NL"];

/// разбор LineBreak.txt
/// возвращаются только диапазоны с обязательным разрывом - остальные классы
/// относятся к алгоритму переноса строк и в базу не попадают
pub fn parse(data: &str) -> Result<Vec<(u32, u32)>, LoadError>
{
    let mut ranges = vec![];

    for (number, line) in data.lines().enumerate() {
        let number = number + 1;

        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        let (range, class) = match line.split_once(';') {
            Some((range, class)) => (range, class.trim()),
            None => {
                return Err(LoadError::FieldCount {
                    file: FILE,
                    line: number,
                    text: line.to_owned(),
                })
            }
        };

        if MANDATORY.contains(&class) {
            ranges.push(parse_range(range, FILE, number)?);
        }
    }

    Ok(ranges)
}
