mod index;

pub use index::build_name_index;
pub use index::PlainNameIndex;

use std::collections::HashSet;

use unicode_database::{NAME_ALIASES_START, NAMED_SEQUENCES_START, SYNTHETIC_RANGE_LEN};
use unicode_database_source::properties::Codepoint;
use unicode_database_source::UnicodeData;

use crate::BuildError;

/// подготовленный набор названий
#[derive(Debug)]
pub struct NameSet
{
    /// название -> кодпоинт; для алиасов и последовательностей - синтетический.
    /// именно этот набор передается внешнему построителю индекса названий
    pub entries: Vec<(String, u32)>,
    /// целевые кодпоинты алиасов по смещению слота
    pub aliases: Vec<u32>,
    /// именованные последовательности по смещению слота
    pub sequences: Vec<Vec<u32>>,
}

/// собрать набор названий: явные названия кодпоинтов плюс алиасы и
/// именованные последовательности в зарезервированных синтетических слотах
///
/// хангыль и CJK сюда не попадают: их блоки заданы в UnicodeData.txt
/// диапазонами и явных названий не имеют, обе стороны разрешаются по формулам
pub fn build(unicode: &UnicodeData) -> Result<NameSet, BuildError>
{
    let mut entries: Vec<(String, u32)> = vec![];
    let mut seen: HashSet<&str> = HashSet::new();

    let mut named: Vec<&Codepoint> = unicode.iter().filter(|c| c.name.is_some()).collect();
    named.sort_by_key(|codepoint| codepoint.code);

    for codepoint in named {
        let name = codepoint.name.as_deref().unwrap_or_default();

        if !seen.insert(name) {
            return Err(BuildError::DuplicateName(name.to_owned()));
        }

        entries.push((name.to_owned(), codepoint.code));
    }

    if unicode.aliases.len() > SYNTHETIC_RANGE_LEN as usize {
        return Err(BuildError::SyntheticRangeOverflow {
            kind: "алиасы",
            count: unicode.aliases.len(),
            capacity: SYNTHETIC_RANGE_LEN as usize,
        });
    }

    if unicode.sequences.len() > SYNTHETIC_RANGE_LEN as usize {
        return Err(BuildError::SyntheticRangeOverflow {
            kind: "именованные последовательности",
            count: unicode.sequences.len(),
            capacity: SYNTHETIC_RANGE_LEN as usize,
        });
    }

    let mut aliases = Vec::with_capacity(unicode.aliases.len());

    for (offset, alias) in unicode.aliases.iter().enumerate() {
        if !seen.insert(&alias.name) {
            return Err(BuildError::DuplicateName(alias.name.clone()));
        }

        entries.push((alias.name.clone(), NAME_ALIASES_START + offset as u32));
        aliases.push(alias.code);
    }

    let mut sequences = Vec::with_capacity(unicode.sequences.len());

    for (offset, sequence) in unicode.sequences.iter().enumerate() {
        if !seen.insert(&sequence.name) {
            return Err(BuildError::DuplicateName(sequence.name.clone()));
        }

        entries.push((sequence.name.clone(), NAMED_SEQUENCES_START + offset as u32));
        sequences.push(sequence.codes.clone());
    }

    log::info!(
        "названия: {} записей, из них {} алиасов и {} последовательностей",
        entries.len(),
        aliases.len(),
        sequences.len(),
    );

    Ok(NameSet {
        entries,
        aliases,
        sequences,
    })
}
