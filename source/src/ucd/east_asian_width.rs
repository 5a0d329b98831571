use super::{parse_range, payload};
use crate::properties::EastAsianWidth;
use crate::LoadError;

const FILE: &str = "EastAsianWidth.txt";

/// разбор EastAsianWidth.txt: диапазоны кодпоинтов с классами ширины.
/// кодпоинты, не упомянутые в файле, получают класс по умолчанию (N)
pub fn parse(data: &str) -> Result<Vec<(u32, u32, EastAsianWidth)>, LoadError>
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

        let eaw = EastAsianWidth::try_from(class).map_err(|_| LoadError::BadValue {
            file: FILE,
            line: number,
            text: class.to_owned(),
        })?;

        let (first, last) = parse_range(range, FILE, number)?;

        ranges.push((first, last, eaw));
    }

    Ok(ranges)
}
