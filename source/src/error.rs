use thiserror::Error;

/// ошибка разбора исходных данных UCD. сборка прерывается на первой же
/// некорректной строке - частично разобранные данные не должны попасть в таблицы
#[derive(Debug, Error, PartialEq)]
pub enum LoadError
{
    /// некорректное количество полей в строке
    #[error("{file}:{line}: некорректное количество полей: {text:?}")]
    FieldCount
    {
        file: &'static str,
        line: usize,
        text: String,
    },

    /// поле не удалось разобрать (неизвестное значение свойства, не-hex кодпоинт и т.п.)
    #[error("{file}:{line}: некорректное значение поля: {text:?}")]
    BadValue
    {
        file: &'static str,
        line: usize,
        text: String,
    },

    /// кодпоинт определен дважды
    #[error("{file}:{line}: повторное определение кодпоинта U+{code:04X}")]
    DoubleDefinition
    {
        file: &'static str,
        line: usize,
        code: u32,
    },

    /// диапазон First / Last остался незакрытым или закрывается без открытия
    #[error("{file}:{line}: некорректный диапазон First/Last: {text:?}")]
    BrokenRange
    {
        file: &'static str,
        line: usize,
        text: String,
    },

    /// строка ссылается на кодпоинт, отсутствующий в основной таблице
    #[error("{file}: кодпоинт U+{code:04X} не назначен")]
    UnassignedCodepoint
    {
        file: &'static str, code: u32
    },

    /// цикл в графе декомпозиций - формат UCD гарантирует ацикличность,
    /// но повреждённые данные не должны приводить к зависанию
    #[error("цикл декомпозиции через U+{0:04X}")]
    DecompositionCycle(u32),
}
