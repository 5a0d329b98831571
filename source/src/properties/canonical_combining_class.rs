use super::PropertiesError;

/// класс канонического комбинирования (Canonical Combining Class, CCC)
/// берется из UCD: четвертая колонка UnicodeData.txt
///
/// 0 - стартер; остальные значения задают порядок переупорядочивания
/// комбинирующих символов при нормализации
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct CanonicalCombiningClass(u8);

impl CanonicalCombiningClass
{
    /// стартер, не участвует в переупорядочивании
    pub const NOT_REORDERED: Self = Self(0);

    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.0 == 0
    }

    #[inline]
    pub fn is_non_starter(&self) -> bool
    {
        self.0 != 0
    }
}

impl From<u8> for CanonicalCombiningClass
{
    #[inline]
    fn from(value: u8) -> Self
    {
        Self(value)
    }
}

impl From<CanonicalCombiningClass> for u8
{
    #[inline]
    fn from(value: CanonicalCombiningClass) -> Self
    {
        value.0
    }
}

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = PropertiesError;

    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        Ok(Self(value.parse::<u8>()?))
    }
}
