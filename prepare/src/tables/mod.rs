use std::collections::HashMap;

use unicode_database::{
    CharacterRecord, FLAG_CASED, FLAG_CASE_IGNORABLE, FLAG_LINEBREAK, FLAG_LOWERCASE,
    FLAG_MIRRORED, FLAG_UPPERCASE, FLAG_XID_CONTINUE, FLAG_XID_START,
};
use unicode_database_source::properties::{Codepoint, DerivedProperty};
use unicode_database_source::{UnicodeData, MAX_CODEPOINT};

use crate::BuildError;

/// максимальный размер пула записей и пула блоков: индекс - один байт.
/// превышение - ошибка сборки, а не повод молча завернуть индекс
pub const MAX_POOL: usize = 256;

/// подготовленная компактная таблица записей
#[derive(Debug)]
pub struct CompactTables
{
    /// пул записей в упакованном виде
    pub records: Vec<u32>,
    /// индекс: номер блока -> слот пула блоков
    pub index: Vec<u8>,
    /// пул дедуплицированных блоков, единым массивом
    pub blocks: Vec<u8>,
    /// количество бит под смещение внутри блока
    pub block_bits: u32,
}

/// сборка двухуровневой таблицы: пул записей + дедуплицированные блоки
/// по page_size кодпоинтов
///
/// подавляющая часть пространства кодпоинтов - это неназначенные кодпоинты
/// и длинные однородные диапазоны (CJK, private use, пустые плоскости),
/// поэтому различных блоков получается немного, хотя само пространство
/// огромно
pub fn build(unicode: &UnicodeData, page_size: u32) -> Result<CompactTables, BuildError>
{
    if !page_size.is_power_of_two() || !(16 ..= 0x10000).contains(&page_size) {
        return Err(BuildError::BadPageSize(page_size));
    }

    let block_bits = page_size.trailing_zeros();

    let mut records: Vec<u32> = vec![];
    let mut record_ids: HashMap<u32, u8> = HashMap::new();

    let mut blocks: Vec<u8> = vec![];
    let mut block_ids: HashMap<Vec<u8>, u8> = HashMap::new();
    let mut index: Vec<u8> = vec![];

    for block_start in (0 ..= MAX_CODEPOINT).step_by(page_size as usize) {
        let mut block = Vec::with_capacity(page_size as usize);

        for code in block_start .. block_start + page_size {
            let packed = record(unicode, code).pack();

            let id = match record_ids.get(&packed) {
                Some(&id) => id,
                None => {
                    if records.len() == MAX_POOL {
                        return Err(BuildError::RecordPoolOverflow { code });
                    }

                    let id = records.len() as u8;

                    records.push(packed);
                    record_ids.insert(packed, id);

                    id
                }
            };

            block.push(id);
        }

        let slot = match block_ids.get(&block) {
            Some(&slot) => slot,
            None => {
                if block_ids.len() == MAX_POOL {
                    return Err(BuildError::BlockPoolOverflow { block: index.len() });
                }

                let slot = block_ids.len() as u8;

                blocks.extend(&block);
                block_ids.insert(block, slot);

                slot
            }
        };

        index.push(slot);
    }

    log::info!(
        "компактная таблица: {} записей, {} блоков по {}, индекс {} байт",
        records.len(),
        block_ids.len(),
        page_size,
        index.len(),
    );

    Ok(CompactTables {
        records,
        index,
        blocks,
        block_bits,
    })
}

/// запись компактной таблицы для кодпоинта
pub fn record(unicode: &UnicodeData, code: u32) -> CharacterRecord
{
    let codepoint = match unicode.get(code) {
        Some(codepoint) => codepoint,
        None => return CharacterRecord::unassigned(),
    };

    CharacterRecord {
        gc: codepoint.gc,
        bc: codepoint.bc,
        eaw: codepoint.eaw,
        flags: flags(codepoint),
    }
}

/// флаги записи
fn flags(codepoint: &Codepoint) -> u8
{
    let mut flags = 0;

    if codepoint.bidi_mirrored {
        flags |= FLAG_MIRRORED;
    }

    if codepoint.mandatory_linebreak {
        flags |= FLAG_LINEBREAK;
    }

    if codepoint.derived.contains(DerivedProperty::XidStart) {
        flags |= FLAG_XID_START;
    }

    if codepoint.derived.contains(DerivedProperty::XidContinue) {
        flags |= FLAG_XID_CONTINUE;
    }

    if codepoint.derived.contains(DerivedProperty::CaseIgnorable) {
        flags |= FLAG_CASE_IGNORABLE;
    }

    if codepoint.derived.contains(DerivedProperty::Uppercase) {
        flags |= FLAG_UPPERCASE;
    }

    if codepoint.derived.contains(DerivedProperty::Lowercase) {
        flags |= FLAG_LOWERCASE;
    }

    if codepoint.derived.contains(DerivedProperty::Cased) {
        flags |= FLAG_CASED;
    }

    flags
}
