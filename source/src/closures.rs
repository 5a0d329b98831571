use std::collections::HashMap;

use crate::properties::Codepoint;
use crate::LoadError;

/// состояние вычисления замыкания кодпоинта
enum State
{
    /// кодпоинт находится выше по стеку рекурсии
    InProgress,
    /// развернутая декомпозиция
    Done(Vec<u32>),
}

/// полные (развернутые) декомпозиции всех кодпоинтов таблицы
///
/// в UnicodeData.txt декомпозиция хранится в сжатом виде: её элементы могут
/// иметь собственную декомпозицию, причем не обязательно с меньшим кодом.
/// разворачиваем рекурсивно с мемоизацией - общая стоимость ограничена
/// количеством ребер графа, а не глубиной
///
/// canonical = true: по ребрам совместимости не идем
///
/// в результат попадают только кодпоинты, у которых замыкание есть
pub fn closures(
    codepoints: &HashMap<u32, Codepoint>,
    canonical: bool,
) -> Result<HashMap<u32, Vec<u32>>, LoadError>
{
    let mut memo: HashMap<u32, State> = HashMap::new();

    for &code in codepoints.keys() {
        expand(code, codepoints, &mut memo, canonical)?;
    }

    Ok(memo
        .into_iter()
        .filter_map(|(code, state)| match state {
            State::Done(expansion) => Some((code, expansion)),
            State::InProgress => None,
        })
        .collect())
}

/// развернутая декомпозиция кодпоинта; для кодпоинта без декомпозиции - он сам
fn expand(
    code: u32,
    codepoints: &HashMap<u32, Codepoint>,
    memo: &mut HashMap<u32, State>,
    canonical: bool,
) -> Result<Vec<u32>, LoadError>
{
    if let Some(state) = memo.get(&code) {
        return match state {
            State::Done(expansion) => Ok(expansion.clone()),
            // формат UCD гарантирует ацикличность, но повреждённый источник
            // не должен приводить к бесконечной рекурсии
            State::InProgress => Err(LoadError::DecompositionCycle(code)),
        };
    }

    let codepoint = match codepoints.get(&code) {
        Some(codepoint) => codepoint,
        None => return Ok(vec![code]),
    };

    // каноническое замыкание останавливается на теге совместимости
    if codepoint.decomposition.is_empty() || (canonical && codepoint.decomposition_tag.is_some()) {
        return Ok(vec![code]);
    }

    memo.insert(code, State::InProgress);

    let mut expansion = vec![];

    for &component in codepoint.decomposition.iter() {
        expansion.extend(expand(component, codepoints, memo, canonical)?);
    }

    memo.insert(code, State::Done(expansion.clone()));

    Ok(expansion)
}
