use std::collections::HashMap;

use unicode_database_source::properties::{NumericType, NumericValue};
use unicode_database_source::{UnicodeData, MAX_CODEPOINT};

/// производные отображения, вычисленные из модели символов
///
/// семантический уровень - значения еще не запечены в срезы и общий блок
/// последовательностей, поэтому их можно сравнивать с другой версией напрямую
#[derive(Default)]
pub struct DerivedMappings
{
    pub decimal: HashMap<u32, u8>,
    pub digit: HashMap<u32, u8>,
    pub numeric: HashMap<u32, NumericValue>,
    pub simple_upper: HashMap<u32, u32>,
    pub simple_lower: HashMap<u32, u32>,
    pub simple_title: HashMap<u32, u32>,
    /// (нижний, заглавный, верхний)
    pub special_casing: HashMap<u32, (Vec<u32>, Vec<u32>, Vec<u32>)>,
    /// тег (0 - каноническая декомпозиция, иначе тег + 1) и элементы
    pub raw_decomposition: HashMap<u32, (u8, Vec<u32>)>,
    pub canonical: HashMap<u32, Vec<u32>>,
    pub compat: HashMap<u32, Vec<u32>>,
    pub casefold: HashMap<u32, Vec<u32>>,
    pub combining: HashMap<u32, u8>,
}

/// вычислить производные отображения модели
pub fn derive(unicode: &UnicodeData) -> DerivedMappings
{
    let mut mappings = DerivedMappings::default();

    for codepoint in unicode.iter() {
        let code = codepoint.code;

        // Decimal влечет Digit, Digit влечет Numeric - как и каскад колонок
        // в UnicodeData.txt
        match codepoint.numeric {
            NumericType::None => {}
            NumericType::Decimal(value) => {
                mappings.decimal.insert(code, value);
                mappings.digit.insert(code, value);
                mappings
                    .numeric
                    .insert(code, NumericValue::Integer(value as i64));
            }
            NumericType::Digit(value) => {
                mappings.digit.insert(code, value);
                mappings
                    .numeric
                    .insert(code, NumericValue::Integer(value as i64));
            }
            NumericType::Numeric(value) => {
                mappings.numeric.insert(code, value);
            }
        }

        if let Some(upper) = codepoint.simple_uppercase_mapping {
            mappings.simple_upper.insert(code, upper);
        }

        if let Some(lower) = codepoint.simple_lowercase_mapping {
            mappings.simple_lower.insert(code, lower);
        }

        // пустая колонка заглавной буквы означает "как прописная"
        if let Some(title) = codepoint
            .simple_titlecase_mapping
            .or(codepoint.simple_uppercase_mapping)
        {
            mappings.simple_title.insert(code, title);
        }

        if let Some(casing) = &codepoint.special_casing {
            mappings.special_casing.insert(
                code,
                (
                    casing.lower.clone(),
                    casing.title.clone(),
                    casing.upper.clone(),
                ),
            );
        }

        if !codepoint.decomposition.is_empty() {
            let tag = match codepoint.decomposition_tag {
                Some(tag) => u8::from(tag) + 1,
                None => 0,
            };

            mappings
                .raw_decomposition
                .insert(code, (tag, codepoint.decomposition.clone()));
        }

        if let Some(expansion) = unicode.canonical_closure(code) {
            mappings.canonical.insert(code, expansion.to_vec());
        }

        if let Some(expansion) = unicode.compat_closure(code) {
            mappings.compat.insert(code, expansion.to_vec());
        }

        if let Some(casefold) = &codepoint.casefold {
            mappings.casefold.insert(code, casefold.clone());
        }

        if codepoint.ccc.is_non_starter() {
            mappings.combining.insert(code, u8::from(codepoint.ccc));
        }
    }

    mappings
}

/// дельта отображения: новые и изменившиеся записи плюс ключи-надгробия
pub struct Delta<V>
{
    pub overrides: HashMap<u32, V>,
    pub removed: Vec<u32>,
}

impl<V> From<HashMap<u32, V>> for Delta<V>
{
    /// полная таблица - вырожденная дельта без надгробий
    fn from(overrides: HashMap<u32, V>) -> Self
    {
        Self {
            overrides,
            removed: vec![],
        }
    }
}

/// дельта текущего отображения против эффективных значений базовой версии
///
/// сравнение идет по всему пространству кодпоинтов через запросы к базе:
/// так корректно разрешаются и ее собственные цепочки надгробий, если база
/// сама была собрана инкрементально
pub fn diff<V, F>(current: &HashMap<u32, V>, base_value: F) -> Delta<V>
where
    V: PartialEq + Clone,
    F: Fn(u32) -> Option<V>,
{
    let mut overrides = HashMap::new();
    let mut removed = vec![];

    for code in 0 ..= MAX_CODEPOINT {
        match (current.get(&code), base_value(code)) {
            // значение не изменилось - наследуется от базы
            (Some(value), Some(base)) if *value == base => {}
            (Some(value), _) => {
                overrides.insert(code, value.clone());
            }
            // в базе есть, у нас нет - ключ закрывается надгробием
            (None, Some(_)) => removed.push(code),
            (None, None) => {}
        }
    }

    Delta { overrides, removed }
}
