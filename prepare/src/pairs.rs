use std::collections::HashMap;

use unicode_database_source::UnicodeData;

use crate::BuildError;

/// упакованный ключ пары: стартер в старшей половине слова, второй - в младшей.
/// один плоский ключ вместо вложенной таблицы - поиск за одно обращение
#[inline]
pub fn pair_key(starter: u32, combining: u32) -> u64
{
    (starter as u64) << 32 | combining as u64
}

/// таблица канонической композиции
///
/// пара попадает в таблицу, только если у результата ровно два элемента
/// канонической декомпозиции (без тега совместимости), результат не исключен
/// из композиции, а первый элемент - стартер
pub fn build(unicode: &UnicodeData) -> Result<HashMap<u64, u32>, BuildError>
{
    let mut pairs: HashMap<u64, u32> = HashMap::new();

    for codepoint in unicode.iter() {
        if codepoint.decomposition.len() != 2
            || codepoint.decomposition_tag.is_some()
            || codepoint.excluded_from_composition
        {
            continue;
        }

        let starter = codepoint.decomposition[0];
        let combining = codepoint.decomposition[1];

        // обе составляющие обязаны быть назначены
        let first = match unicode.get(starter) {
            Some(first) => first,
            None => {
                return Err(BuildError::MissingConstituent {
                    composed: codepoint.code,
                    component: starter,
                })
            }
        };

        if unicode.get(combining).is_none() {
            return Err(BuildError::MissingConstituent {
                composed: codepoint.code,
                component: combining,
            });
        }

        if first.ccc.is_non_starter() {
            continue;
        }

        if pairs.insert(pair_key(starter, combining), codepoint.code).is_some() {
            return Err(BuildError::ConflictingComposition { starter, second: combining });
        }
    }

    log::info!("таблица композиции: {} пар", pairs.len());

    Ok(pairs)
}
