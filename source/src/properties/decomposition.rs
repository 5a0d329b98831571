use super::PropertiesError;

/// декомпозиция кодпоинта
/// берется из UCD: шестая колонка UnicodeData.txt
#[derive(Debug, Clone)]
pub struct Decomposition
{
    /// элементы декомпозиции
    pub codes: Vec<u32>,
    /// тег; None - каноническая декомпозиция
    pub tag: Option<DecompositionTag>,
}

impl TryFrom<&str> for Decomposition
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        let (tag_string, decomposition_string) = match value.starts_with('<') {
            true => value
                .split_once(' ')
                .ok_or(PropertiesError::UnknownPropertyValue)?,
            false => ("", value),
        };

        let tag = match !tag_string.is_empty() {
            true => Some(DecompositionTag::try_from(tag_string)?),
            false => None,
        };

        let codes = decomposition_string
            .split_whitespace()
            .map(|v| u32::from_str_radix(v, 16).map_err(PropertiesError::from))
            .collect::<Result<Vec<u32>, PropertiesError>>()?;

        Ok(Self { codes, tag })
    }
}

/// тег декомпозиции совместимости
/// флаг наличия + 16 вариантов, достаточно 5 бит
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum DecompositionTag
{
    /// вариант шрифта
    Font = 0,
    /// неразрывная версия пробела или дефиса
    NoBreak = 1,
    /// начальная форма представления (арабский)
    Initial = 2,
    /// средняя форма представления (арабский)
    Medial = 3,
    /// конечная форма представления (арабский)
    Final = 4,
    /// изолированная форма представления (арабский)
    Isolated = 5,
    /// окруженная форма
    Circle = 6,
    /// надстрочная форма
    Super = 7,
    /// подстрочная форма
    Sub = 8,
    /// вертикальная форма представления
    Vertical = 9,
    /// широкая форма (зэнкаку)
    Wide = 10,
    /// узкая форма (ханкаку)
    Narrow = 11,
    /// малая вариантная форма
    Small = 12,
    /// вариант шрифта в квадрате CJK
    Square = 13,
    /// обыкновенная дробь
    Fraction = 14,
    /// прочие символы совместимости
    Compat = 15,
}

impl TryFrom<&str> for DecompositionTag
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "<font>" => Self::Font,
            "<noBreak>" => Self::NoBreak,
            "<initial>" => Self::Initial,
            "<medial>" => Self::Medial,
            "<final>" => Self::Final,
            "<isolated>" => Self::Isolated,
            "<circle>" => Self::Circle,
            "<super>" => Self::Super,
            "<sub>" => Self::Sub,
            "<vertical>" => Self::Vertical,
            "<wide>" => Self::Wide,
            "<narrow>" => Self::Narrow,
            "<small>" => Self::Small,
            "<square>" => Self::Square,
            "<fraction>" => Self::Fraction,
            "<compat>" => Self::Compat,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}

impl TryFrom<u8> for DecompositionTag
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        match value & 0xF0 == 0 {
            true => Ok(unsafe { core::mem::transmute::<u8, DecompositionTag>(value) }),
            false => Err(PropertiesError::UnknownPropertyValue),
        }
    }
}

impl From<DecompositionTag> for u8
{
    #[inline]
    fn from(value: DecompositionTag) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for DecompositionTag
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        let value = match self {
            Self::Font => "<font>",
            Self::NoBreak => "<noBreak>",
            Self::Initial => "<initial>",
            Self::Medial => "<medial>",
            Self::Final => "<final>",
            Self::Isolated => "<isolated>",
            Self::Circle => "<circle>",
            Self::Super => "<super>",
            Self::Sub => "<sub>",
            Self::Vertical => "<vertical>",
            Self::Wide => "<wide>",
            Self::Narrow => "<narrow>",
            Self::Small => "<small>",
            Self::Square => "<square>",
            Self::Fraction => "<fraction>",
            Self::Compat => "<compat>",
        };

        write!(f, "{}", value)
    }
}
