use std::collections::HashMap;

use crate::closures;
use crate::properties::*;
use crate::ucd;
use crate::ucd::{NameAlias, NamedSequence};
use crate::LoadError;

/// исходные файлы UCD одной версии, по одному на таблицу.
/// чтение с диска остается снаружи - загрузчику передается содержимое
#[derive(Debug, Clone, Copy, Default)]
pub struct UcdFiles<'a>
{
    pub unicode_data: &'a str,
    pub composition_exclusions: &'a str,
    pub line_break: &'a str,
    pub east_asian_width: &'a str,
    pub derived_core_properties: &'a str,
    pub name_aliases: &'a str,
    pub named_sequences: &'a str,
    pub case_folding: &'a str,
    pub special_casing: &'a str,
    /// дополнительные числовые значения; таблица необязательна
    pub numeric_overrides: Option<&'a str>,
}

/// модель символов: полная таблица свойств кодпоинтов, побочные таблицы
/// и заранее вычисленные замыкания декомпозиций
///
/// одна владеющая таблица, передаваемая по ссылке через все этапы сборки
#[derive(Debug)]
pub struct UnicodeData
{
    codepoints: HashMap<u32, Codepoint>,
    canonical: HashMap<u32, Vec<u32>>,
    compat: HashMap<u32, Vec<u32>>,
    /// алиасы названий
    pub aliases: Vec<NameAlias>,
    /// именованные последовательности
    pub sequences: Vec<NamedSequence>,
}

impl UnicodeData
{
    /// загрузка и сведение всех исходных таблиц в модель символов
    pub fn load(files: &UcdFiles) -> Result<Self, LoadError>
    {
        let mut codepoints = ucd::unicode_data::parse(files.unicode_data)?;

        // исключения композиции
        for code in ucd::composition_exclusions::parse(files.composition_exclusions)? {
            entry_mut(&mut codepoints, code, "CompositionExclusions.txt")?
                .excluded_from_composition = true;
        }

        // обязательные разрывы строк; диапазоны могут пересекать
        // неназначенные кодпоинты - пропуски не ошибка
        for (first, last) in ucd::line_break::parse(files.line_break)? {
            for code in first ..= last {
                if let Some(codepoint) = codepoints.get_mut(&code) {
                    codepoint.mandatory_linebreak = true;
                }
            }
        }

        // классы ширины
        for (first, last, eaw) in ucd::east_asian_width::parse(files.east_asian_width)? {
            for code in first ..= last {
                if let Some(codepoint) = codepoints.get_mut(&code) {
                    codepoint.eaw = eaw;
                }
            }
        }

        // производные свойства - только для назначенных кодпоинтов
        for (first, last, property) in
            ucd::derived_core_properties::parse(files.derived_core_properties)?
        {
            for code in first ..= last {
                if let Some(codepoint) = codepoints.get_mut(&code) {
                    codepoint.derived.set(property);
                }
            }
        }

        // свертка регистра: храним только отличающуюся от простого отображения
        for (code, mapping) in ucd::case_folding::parse(files.case_folding)? {
            let codepoint = entry_mut(&mut codepoints, code, "CaseFolding.txt")?;
            let simple = codepoint.simple_lowercase_mapping.unwrap_or(code);

            if mapping != [simple] {
                codepoint.casefold = Some(mapping);
            }
        }

        // полные преобразования регистра: только отличающиеся от простых
        for (code, casing) in ucd::special_casing::parse(files.special_casing)? {
            let codepoint = entry_mut(&mut codepoints, code, "SpecialCasing.txt")?;

            let upper = codepoint.simple_uppercase_mapping.unwrap_or(code);
            let lower = codepoint.simple_lowercase_mapping.unwrap_or(code);
            // пустая колонка заглавной буквы означает "как прописная"
            let title = codepoint.simple_titlecase_mapping.unwrap_or(upper);

            if casing.lower != [lower] || casing.title != [title] || casing.upper != [upper] {
                codepoint.special_casing = Some(casing);
            }
        }

        // дополнительные числовые значения
        if let Some(data) = files.numeric_overrides {
            for (code, value) in ucd::numeric_overrides::parse(data)? {
                entry_mut(&mut codepoints, code, "NumericOverrides.txt")?.numeric =
                    NumericType::Numeric(value);
            }
        }

        let aliases = ucd::name_aliases::parse(files.name_aliases)?;
        let sequences = ucd::named_sequences::parse(files.named_sequences)?;

        // алиасы и элементы последовательностей обязаны ссылаться
        // на назначенные кодпоинты
        for alias in aliases.iter() {
            entry_mut(&mut codepoints, alias.code, "NameAliases.txt")?;
        }

        for sequence in sequences.iter() {
            for &code in sequence.codes.iter() {
                entry_mut(&mut codepoints, code, "NamedSequences.txt")?;
            }
        }

        // замыкания декомпозиций считаются заранее для всех кодпоинтов:
        // дальше по конвейеру они нужны и кодировщику таблиц, и композиции
        let canonical = closures::closures(&codepoints, true)?;
        let compat = closures::closures(&codepoints, false)?;

        Ok(Self {
            codepoints,
            canonical,
            compat,
            aliases,
            sequences,
        })
    }

    /// запись о кодпоинте; None - кодпоинт не назначен
    #[inline]
    pub fn get(&self, code: u32) -> Option<&Codepoint>
    {
        self.codepoints.get(&code)
    }

    #[inline]
    pub fn contains(&self, code: u32) -> bool
    {
        self.codepoints.contains_key(&code)
    }

    /// все назначенные кодпоинты, без определенного порядка
    pub fn iter(&self) -> impl Iterator<Item = &Codepoint>
    {
        self.codepoints.values()
    }

    /// полная каноническая декомпозиция; None - кодпоинт не разворачивается
    #[inline]
    pub fn canonical_closure(&self, code: u32) -> Option<&[u32]>
    {
        self.canonical.get(&code).map(|v| v.as_slice())
    }

    /// полная декомпозиция совместимости; None - кодпоинт не разворачивается
    #[inline]
    pub fn compat_closure(&self, code: u32) -> Option<&[u32]>
    {
        self.compat.get(&code).map(|v| v.as_slice())
    }
}

/// запись о кодпоинте, на который ссылается побочная таблица
fn entry_mut<'a>(
    map: &'a mut HashMap<u32, Codepoint>,
    code: u32,
    file: &'static str,
) -> Result<&'a mut Codepoint, LoadError>
{
    map.get_mut(&code)
        .ok_or(LoadError::UnassignedCodepoint { file, code })
}
