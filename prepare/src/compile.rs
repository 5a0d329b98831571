use std::collections::HashMap;

use unicode_database::{CharacterData, CharacterDatabase, MappedData, NameIndex};
use unicode_database_source::properties::NumericValue;
use unicode_database_source::UnicodeData;

use crate::diff::{self, Delta, DerivedMappings};
use crate::names;
use crate::pairs;
use crate::tables::{self, CompactTables};
use crate::BuildError;

/// параметры сборки
pub struct CompileOptions
{
    /// версия Unicode; попадает в артефакт
    pub version: String,
    /// размер блока компактной таблицы, степень двойки
    pub page_size: u32,
    /// диапазоны CJK Unified Ideographs этой версии
    pub cjk_ranges: Vec<(u32, u32)>,
}

/// запеченное отображение: отсортированные записи и надгробия
pub struct Baked<V>
{
    pub direct: Vec<(u32, V)>,
    pub removed: Vec<u32>,
}

impl<V: Copy> Baked<V>
{
    pub fn as_mapped(&self) -> MappedData<'_, V>
    {
        MappedData {
            direct: &self.direct,
            removed: &self.removed,
        }
    }
}

/// скомпилированная база данных - владеющий двойник CharacterData.
/// отсюда артефакт либо сериализуется эмиттером, либо (в тестах)
/// запрашивается напрямую через as_data()
pub struct CompiledDatabase
{
    pub version: String,
    pub tables: CompactTables,
    /// общий блок последовательностей
    pub expansions: Vec<u32>,
    pub compositions: Vec<(u64, u32)>,
    pub cjk_ranges: Vec<(u32, u32)>,
    pub aliases: Vec<u32>,
    /// ссылки последовательностей в общий блок
    pub sequences: Vec<u32>,
    /// набор название -> кодпоинт для внешнего построителя индекса
    pub name_entries: Vec<(String, u32)>,

    pub decimal: Baked<u8>,
    pub digit: Baked<u8>,
    pub numeric: Baked<NumericValue>,
    pub simple_upper: Baked<u32>,
    pub simple_lower: Baked<u32>,
    pub simple_title: Baked<u32>,
    pub special_casing: Baked<(u32, u32, u32)>,
    pub raw_decomposition: Baked<(u8, u32)>,
    pub canonical: Baked<u32>,
    pub compat: Baked<u32>,
    pub casefold: Baked<u32>,
    pub combining: Baked<u8>,
}

impl CompiledDatabase
{
    /// представление артефакта для запросов и сериализации
    pub fn as_data(&self) -> CharacterData<'_>
    {
        CharacterData {
            version: &self.version,
            index: &self.tables.index,
            blocks: &self.tables.blocks,
            block_bits: self.tables.block_bits,
            records: &self.tables.records,
            expansions: &self.expansions,
            compositions: &self.compositions,
            cjk_ranges: &self.cjk_ranges,
            aliases: &self.aliases,
            sequences: &self.sequences,
            decimal: self.decimal.as_mapped(),
            digit: self.digit.as_mapped(),
            numeric: self.numeric.as_mapped(),
            simple_upper: self.simple_upper.as_mapped(),
            simple_lower: self.simple_lower.as_mapped(),
            simple_title: self.simple_title.as_mapped(),
            special_casing: self.special_casing.as_mapped(),
            raw_decomposition: self.raw_decomposition.as_mapped(),
            canonical: self.canonical.as_mapped(),
            compat: self.compat.as_mapped(),
            casefold: self.casefold.as_mapped(),
            combining: self.combining.as_mapped(),
        }
    }
}

/// собрать базу данных из модели символов
///
/// с базовой версией производные отображения превращаются в дельты;
/// компактная таблица, композиции, диапазоны CJK и набор названий
/// всегда записываются целиком
pub fn compile<N>(
    unicode: &UnicodeData,
    options: &CompileOptions,
    base: Option<&CharacterDatabase<N>>,
) -> Result<CompiledDatabase, BuildError>
where
    N: NameIndex,
{
    let tables = tables::build(unicode, options.page_size)?;

    let mut compositions: Vec<(u64, u32)> = pairs::build(unicode)?.into_iter().collect();
    compositions.sort_unstable_by_key(|entry| entry.0);

    let name_set = names::build(unicode)?;
    let mappings = diff::derive(unicode);

    let mut expansions: Vec<u32> = vec![];

    // значения-слова

    let decimal = bake(delta(&mappings.decimal, base, |base, code| {
        base.decimal_lookup(code)
    }));

    let digit = bake(delta(&mappings.digit, base, |base, code| {
        base.digit_lookup(code)
    }));

    let numeric = bake(delta(&mappings.numeric, base, |base, code| {
        base.numeric_lookup(code)
    }));

    let simple_upper = bake(delta(&mappings.simple_upper, base, |base, code| {
        base.simple_uppercase(code)
    }));

    let simple_lower = bake(delta(&mappings.simple_lower, base, |base, code| {
        base.simple_lowercase(code)
    }));

    let simple_title = bake(delta(&mappings.simple_title, base, |base, code| {
        base.simple_titlecase(code)
    }));

    let combining = bake(delta(&mappings.combining, base, |base, code| {
        base.combining_class(code)
    }));

    // значения-последовательности; дельты считаются по развернутым значениям,
    // ссылки в общий блок появляются только при запекании

    let canonical = bake_expansions(
        delta(&mappings.canonical, base, |base, code| {
            base.canonical_expansion(code).map(<[u32]>::to_vec)
        }),
        &mut expansions,
    )?;

    let compat = bake_expansions(
        delta(&mappings.compat, base, |base, code| {
            base.compat_expansion(code).map(<[u32]>::to_vec)
        }),
        &mut expansions,
    )?;

    let casefold = bake_expansions(
        delta(&mappings.casefold, base, |base, code| {
            base.casefold_lookup(code).map(<[u32]>::to_vec)
        }),
        &mut expansions,
    )?;

    let special_casing = bake_special_casing(
        delta(&mappings.special_casing, base, |base, code| {
            base.special_casing(code)
                .map(|(lower, title, upper)| (lower.to_vec(), title.to_vec(), upper.to_vec()))
        }),
        &mut expansions,
    )?;

    let raw_decomposition = bake_raw_decomposition(
        delta(&mappings.raw_decomposition, base, |base, code| {
            base.raw_decomposition(code).map(|(tag, codes)| {
                let tag = match tag {
                    Some(tag) => u8::from(tag) + 1,
                    None => 0,
                };

                (tag, codes.to_vec())
            })
        }),
        &mut expansions,
    )?;

    // побочные таблицы названий

    let sequences = name_set
        .sequences
        .iter()
        .map(|codes| bake_expansion(&mut expansions, codes))
        .collect::<Result<Vec<u32>, BuildError>>()?;

    log::info!(
        "артефакт {}: общий блок {} слов, композиций {}",
        options.version,
        expansions.len(),
        compositions.len(),
    );

    Ok(CompiledDatabase {
        version: options.version.clone(),
        tables,
        expansions,
        compositions,
        cjk_ranges: options.cjk_ranges.clone(),
        aliases: name_set.aliases,
        sequences,
        name_entries: name_set.entries,
        decimal,
        digit,
        numeric,
        simple_upper,
        simple_lower,
        simple_title,
        special_casing,
        raw_decomposition,
        canonical,
        compat,
        casefold,
        combining,
    })
}

/// дельта против базовой версии; без базы - полная таблица
fn delta<V, N, F>(
    current: &HashMap<u32, V>,
    base: Option<&CharacterDatabase<N>>,
    value: F,
) -> Delta<V>
where
    V: PartialEq + Clone,
    N: NameIndex,
    F: Fn(&CharacterDatabase<N>, u32) -> Option<V>,
{
    match base {
        Some(base) => diff::diff(current, |code| value(base, code)),
        None => Delta::from(current.clone()),
    }
}

/// дельта со значением-словом -> отсортированные срезы
fn bake<V: Copy>(delta: Delta<V>) -> Baked<V>
{
    let mut direct: Vec<(u32, V)> = delta.overrides.into_iter().collect();
    direct.sort_unstable_by_key(|entry| entry.0);

    let mut removed = delta.removed;
    removed.sort_unstable();

    Baked { direct, removed }
}

/// дельта со значением-последовательностью: значения уходят в общий блок,
/// в отображении остаются ссылки
fn bake_expansions(
    delta: Delta<Vec<u32>>,
    pool: &mut Vec<u32>,
) -> Result<Baked<u32>, BuildError>
{
    let mut overrides: Vec<(u32, Vec<u32>)> = delta.overrides.into_iter().collect();
    overrides.sort_unstable_by_key(|entry| entry.0);

    let mut direct = Vec::with_capacity(overrides.len());

    for (code, expansion) in overrides {
        direct.push((code, bake_expansion(pool, &expansion)?));
    }

    let mut removed = delta.removed;
    removed.sort_unstable();

    Ok(Baked { direct, removed })
}

/// полные преобразования регистра: тройка ссылок
fn bake_special_casing(
    delta: Delta<(Vec<u32>, Vec<u32>, Vec<u32>)>,
    pool: &mut Vec<u32>,
) -> Result<Baked<(u32, u32, u32)>, BuildError>
{
    let mut overrides: Vec<(u32, (Vec<u32>, Vec<u32>, Vec<u32>))> =
        delta.overrides.into_iter().collect();
    overrides.sort_unstable_by_key(|entry| entry.0);

    let mut direct = Vec::with_capacity(overrides.len());

    for (code, (lower, title, upper)) in overrides {
        direct.push((
            code,
            (
                bake_expansion(pool, &lower)?,
                bake_expansion(pool, &title)?,
                bake_expansion(pool, &upper)?,
            ),
        ));
    }

    let mut removed = delta.removed;
    removed.sort_unstable();

    Ok(Baked { direct, removed })
}

/// исходные декомпозиции: тег + ссылка
fn bake_raw_decomposition(
    delta: Delta<(u8, Vec<u32>)>,
    pool: &mut Vec<u32>,
) -> Result<Baked<(u8, u32)>, BuildError>
{
    let mut overrides: Vec<(u32, (u8, Vec<u32>))> = delta.overrides.into_iter().collect();
    overrides.sort_unstable_by_key(|entry| entry.0);

    let mut direct = Vec::with_capacity(overrides.len());

    for (code, (tag, codes)) in overrides {
        direct.push((code, (tag, bake_expansion(pool, &codes)?)));
    }

    let mut removed = delta.removed;
    removed.sort_unstable();

    Ok(Baked { direct, removed })
}

/// записать последовательность в общий блок (или вернуть ссылку на уже
/// существующее вхождение); ссылка - позиция << 8 | длина
fn bake_expansion(pool: &mut Vec<u32>, expansion: &[u32]) -> Result<u32, BuildError>
{
    if expansion.len() > 0xFF {
        return Err(BuildError::ExpansionOverflow);
    }

    let pos = match find_subsequence(pool, expansion) {
        Some(pos) => pos,
        None => {
            let pos = pool.len();
            pool.extend_from_slice(expansion);
            pos
        }
    };

    if pos > 0xFF_FFFF {
        return Err(BuildError::ExpansionOverflow);
    }

    Ok((pos as u32) << 8 | expansion.len() as u32)
}

/// найти последовательность среди уже записанных
fn find_subsequence(pool: &[u32], expansion: &[u32]) -> Option<usize>
{
    match expansion.is_empty() {
        true => Some(0),
        false => pool
            .windows(expansion.len())
            .position(|window| window == expansion),
    }
}
