use thiserror::Error;

/// ошибка сборки базы данных
///
/// любая из них фатальна: молчаливая подмена значения или усечение индекса
/// означали бы испорченную таблицу у всех потребителей
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError
{
    /// размер блока компактной таблицы не является степенью двойки
    #[error("некорректный размер блока: {0}")]
    BadPageSize(u32),

    /// пул записей не умещается в один байт индекса
    #[error("переполнение пула записей (больше 256), кодпоинт U+{code:04X}")]
    RecordPoolOverflow
    {
        code: u32
    },

    /// пул блоков не умещается в один байт индекса;
    /// если версии Unicode понадобится больше - расширять тип индекса явно
    #[error("переполнение пула блоков (больше 256), блок {block}")]
    BlockPoolOverflow
    {
        block: usize
    },

    /// составляющая композиции не назначена
    #[error("композиция U+{composed:04X}: составляющая U+{component:04X} не назначена")]
    MissingConstituent
    {
        composed: u32, component: u32
    },

    /// две записи дают один и тот же ключ пары
    #[error("конфликт композиции для пары U+{starter:04X}, U+{second:04X}")]
    ConflictingComposition
    {
        starter: u32, second: u32
    },

    /// название встречается дважды
    #[error("повторяющееся название: {0:?}")]
    DuplicateName(String),

    /// алиасы или последовательности не умещаются в синтетический диапазон
    #[error("переполнение синтетического диапазона ({kind}): {count} > {capacity}")]
    SyntheticRangeOverflow
    {
        kind: &'static str,
        count: usize,
        capacity: usize,
    },

    /// ссылка в общий блок последовательностей не умещается в слово
    #[error("переполнение общего блока последовательностей")]
    ExpansionOverflow,
}
