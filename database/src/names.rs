/// интерфейс внешнего индекса названий
///
/// реальный индекс - сжатый бор или минимальный DFA, собираемый отдельным
/// инструментом; конвейеру важны только две операции, обе могут промахнуться.
/// простая hash-реализация живет в сборочном крейте и заменяется любой другой,
/// не затрагивая остальной код
pub trait NameIndex
{
    /// кодпоинт по точному названию
    fn lookup_by_name(&self, name: &str) -> Option<u32>;
    /// название по кодпоинту
    fn lookup_by_codepoint(&self, code: u32) -> Option<&str>;
}

/// начало синтетического диапазона алиасов (внутри Plane 15 PUA)
pub const NAME_ALIASES_START: u32 = 0xF0000;
/// начало синтетического диапазона именованных последовательностей
pub const NAMED_SEQUENCES_START: u32 = 0xF0200;
/// вместимость каждого синтетического диапазона
pub const SYNTHETIC_RANGE_LEN: u32 = 0x200;

/// кодпоинт - синтетический слот алиаса?
#[inline]
pub fn is_alias_slot(code: u32) -> bool
{
    code.wrapping_sub(NAME_ALIASES_START) < SYNTHETIC_RANGE_LEN
}

/// кодпоинт - синтетический слот именованной последовательности?
#[inline]
pub fn is_sequence_slot(code: u32) -> bool
{
    code.wrapping_sub(NAMED_SEQUENCES_START) < SYNTHETIC_RANGE_LEN
}
