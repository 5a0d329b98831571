use super::{parse_code, payload};
use crate::LoadError;

const FILE: &str = "CompositionExclusions.txt";

/// разбор CompositionExclusions.txt
/// исключения композиции не вычисляются, список составляется консорциумом вручную
pub fn parse(data: &str) -> Result<Vec<u32>, LoadError>
{
    let mut exclusions = vec![];

    for (number, line) in data.lines().enumerate() {
        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        exclusions.push(parse_code(line, FILE, number + 1)?);
    }

    Ok(exclusions)
}
