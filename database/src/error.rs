use thiserror::Error;

/// ошибка запроса к базе данных
///
/// промах и некорректный ввод различаются всегда: "0" не может означать
/// одновременно "цифра ноль" и "значения нет"
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError
{
    /// запрошенное необязательное значение отсутствует
    #[error("значение не задано")]
    NotFound,

    /// строка не является названием символа
    #[error("не является названием символа: {0:?}")]
    InvalidName(String),

    /// прямое обращение к зарезервированному синтетическому диапазону
    #[error("кодпоинт U+{0:04X} лежит в зарезервированном диапазоне")]
    ReservedCodepoint(u32),
}
