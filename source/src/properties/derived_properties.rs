/// производное свойство из DerivedCoreProperties.txt,
/// из всего файла нас интересует только перечисленное ниже
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum DerivedProperty
{
    /// Uppercase - прописная (шире, чем категория Lu)
    Uppercase = 1,
    /// Lowercase - строчная (шире, чем категория Ll)
    Lowercase = 1 << 1,
    /// Cased - символ, имеющий регистр
    Cased = 1 << 2,
    /// Case_Ignorable - игнорируется при определении контекста регистра
    CaseIgnorable = 1 << 3,
    /// XID_Start - допустимое начало идентификатора
    XidStart = 1 << 4,
    /// XID_Continue - допустимое продолжение идентификатора
    XidContinue = 1 << 5,
}

impl DerivedProperty
{
    /// свойство по названию из файла; None - свойство, которое мы не храним
    pub fn from_name(name: &str) -> Option<Self>
    {
        Some(match name {
            "Uppercase" => Self::Uppercase,
            "Lowercase" => Self::Lowercase,
            "Cased" => Self::Cased,
            "Case_Ignorable" => Self::CaseIgnorable,
            "XID_Start" => Self::XidStart,
            "XID_Continue" => Self::XidContinue,
            _ => return None,
        })
    }
}

/// набор производных свойств кодпоинта в виде битовой маски
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DerivedProperties(u8);

impl DerivedProperties
{
    #[inline]
    pub fn set(&mut self, property: DerivedProperty)
    {
        self.0 |= property as u8;
    }

    #[inline]
    pub fn contains(&self, property: DerivedProperty) -> bool
    {
        self.0 & property as u8 != 0
    }
}
