use unicode_database_source::properties::NumericValue;

/// результат поиска в отображении
pub enum Found<V>
{
    /// собственная запись
    Value(V),
    /// ключ-надгробие: запись базовой версии закрыта
    Removed,
    /// записи нет, можно спросить базовую версию
    Missing,
}

/// отображение кодпоинт -> значение в виде отсортированных срезов
///
/// в полном артефакте direct содержит все записи, а removed пуст.
/// в инкрементальном - direct хранит только новые и изменившиеся записи,
/// removed - ключи, которые в базовой версии были, а в этой их быть не должно
pub struct MappedData<'a, V>
{
    /// отсортированные пары (кодпоинт, значение)
    pub direct: &'a [(u32, V)],
    /// отсортированные ключи-надгробия
    pub removed: &'a [u32],
}

impl<'a, V: Copy> MappedData<'a, V>
{
    pub const fn empty() -> Self
    {
        Self {
            direct: &[],
            removed: &[],
        }
    }

    /// порядок проверки фиксирован: собственная запись -> надгробие -> мимо.
    /// пропуск проверки надгробий воскрешал бы удаленные записи базовой версии
    pub fn find(&self, code: u32) -> Found<V>
    {
        match self.direct.binary_search_by_key(&code, |entry| entry.0) {
            Ok(index) => Found::Value(self.direct[index].1),
            Err(_) => match self.removed.binary_search(&code).is_ok() {
                true => Found::Removed,
                false => Found::Missing,
            },
        }
    }
}

/// скомпилированный артефакт базы данных символов
///
/// все поля - срезы, пригодные для записи в виде литерала и include!
/// в крейт с данными. последовательности кодпоинтов собраны в общем блоке
/// expansions и адресуются упакованной ссылкой: позиция << 8 | длина
pub struct CharacterData<'a>
{
    /// версия Unicode, из которой собран артефакт
    pub version: &'a str,

    /// индекс: номер блока -> номер блока в пуле
    pub index: &'a [u8],
    /// пул дедуплицированных блоков, по (1 << block_bits) байт каждый;
    /// байт - индекс записи в пуле записей
    pub blocks: &'a [u8],
    /// количество бит под смещение внутри блока
    pub block_bits: u32,
    /// пул записей (категория | bidi | ширина | флаги), не более 256
    pub records: &'a [u32],

    /// общий блок последовательностей кодпоинтов
    pub expansions: &'a [u32],

    /// таблица канонической композиции: (стартер << 32 | второй) -> результат,
    /// отсортирована по ключу
    pub compositions: &'a [(u64, u32)],

    /// диапазоны CJK Unified Ideographs этой версии Unicode
    pub cjk_ranges: &'a [(u32, u32)],

    /// целевые кодпоинты алиасов; индекс - смещение от NAME_ALIASES_START
    pub aliases: &'a [u32],
    /// именованные последовательности (ссылки в expansions);
    /// индекс - смещение от NAMED_SEQUENCES_START
    pub sequences: &'a [u32],

    /// десятичные цифры
    pub decimal: MappedData<'a, u8>,
    /// цифры вне позиционной записи
    pub digit: MappedData<'a, u8>,
    /// числовые значения общего вида
    pub numeric: MappedData<'a, NumericValue>,
    /// простые отображения регистра
    pub simple_upper: MappedData<'a, u32>,
    pub simple_lower: MappedData<'a, u32>,
    pub simple_title: MappedData<'a, u32>,
    /// полные преобразования регистра: ссылки (нижний, заглавный, верхний)
    pub special_casing: MappedData<'a, (u32, u32, u32)>,
    /// исходная декомпозиция: тег (0 - каноническая, иначе тег + 1) и ссылка
    pub raw_decomposition: MappedData<'a, (u8, u32)>,
    /// полные канонические декомпозиции
    pub canonical: MappedData<'a, u32>,
    /// полные декомпозиции совместимости
    pub compat: MappedData<'a, u32>,
    /// полная свертка регистра
    pub casefold: MappedData<'a, u32>,
    /// классы канонического комбинирования (только ненулевые)
    pub combining: MappedData<'a, u8>,
}
