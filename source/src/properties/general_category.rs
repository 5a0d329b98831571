use super::PropertiesError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt
///
/// 30 вариантов; дискриминанты идут подряд и сгруппированы по общим категориям,
/// поэтому принадлежность к группе - это проверка диапазона:
///     LC (Lu, Ll, Lt) - буквы, имеющие регистр
///     L (Lu .. Lo) - буквы
///     M (Mn, Mc, Me) - комбинирующие символы
///     N (Nd, Nl, No) - цифры, числовые символы
///     P (Pc .. Po) - знаки препинания
///     S (Sm, Sc, Sk, So) - прочие символы
///     Z (Zs, Zl, Zp) - разделители
///     C (Cn, Cc, Cf, Cs, Co) - системные символы и неназначенные кодпоинты
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - кодпоинт не назначен; вариант по умолчанию
    Unassigned = 0,

    /// Lu - прописная буква
    UppercaseLetter = 1,
    /// Ll - строчная буква
    LowercaseLetter = 2,
    /// Lt - диграфический символ, первая часть - заглавная
    TitlecaseLetter = 3,
    /// Lm - буква-модификатор
    ModifierLetter = 4,
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5,

    /// Mn - комбинирующий маркер, не занимающий пространства
    NonspacingMark = 6,
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7,
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8,

    /// Nd - десятичная цифра
    DecimalNumber = 9,
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10,
    /// No - прочие числовые символы
    OtherNumber = 11,

    /// Pc - объединяющая пунктуация
    ConnectorPunctuation = 12,
    /// Pd - тире или дефис
    DashPunctuation = 13,
    /// Ps - открывающий знак пунктуации
    OpenPunctuation = 14,
    /// Pe - закрывающий знак пунктуации
    ClosePunctuation = 15,
    /// Pi - начальный знак цитаты
    InitialPunctuation = 16,
    /// Pf - конечный знак цитаты
    FinalPunctuation = 17,
    /// Po - прочие знаки препинания
    OtherPunctuation = 18,

    /// Sm - математический символ
    MathSymbol = 19,
    /// Sc - символ валюты
    CurrencySymbol = 20,
    /// Sk - символ-модификатор
    ModifierSymbol = 21,
    /// So - прочие символы
    OtherSymbol = 22,

    /// Zs - разделитель-пробел
    SpaceSeparator = 23,
    /// Zl - разделитель строк
    LineSeparator = 24,
    /// Zp - разделитель параграфов
    ParagraphSeparator = 25,

    /// Cc - управляющий символ
    Control = 26,
    /// Cf - управляющий символ форматирования
    Format = 27,
    /// Cs - символ-суррогат
    Surrogate = 28,
    /// Co - символ для приватного использования
    PrivateUse = 29,
}

/// последний допустимый дискриминант
const LAST: u8 = GeneralCategory::PrivateUse as u8;

impl GeneralCategory
{
    /// двухбуквенное обозначение категории
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
        }
    }

    /// буква с регистром (LC)
    #[inline]
    pub fn is_cased_letter(&self) -> bool
    {
        (1 ..= 3).contains(&u8::from(*self))
    }

    /// буква (L)
    #[inline]
    pub fn is_letter(&self) -> bool
    {
        (1 ..= 5).contains(&u8::from(*self))
    }

    /// комбинирующий символ (M)
    #[inline]
    pub fn is_combining_mark(&self) -> bool
    {
        (6 ..= 8).contains(&u8::from(*self))
    }

    /// цифра или числовой символ (N)
    #[inline]
    pub fn is_numeric(&self) -> bool
    {
        (9 ..= 11).contains(&u8::from(*self))
    }

    /// знак препинания (P)
    #[inline]
    pub fn is_punctuation(&self) -> bool
    {
        (12 ..= 18).contains(&u8::from(*self))
    }

    /// символ (S)
    #[inline]
    pub fn is_symbol(&self) -> bool
    {
        (19 ..= 22).contains(&u8::from(*self))
    }

    /// разделитель (Z)
    #[inline]
    pub fn is_separator(&self) -> bool
    {
        (23 ..= 25).contains(&u8::from(*self))
    }

    /// системный символ или неназначенный кодпоинт (C)
    #[inline]
    pub fn is_other(&self) -> bool
    {
        let value = u8::from(*self);

        value == 0 || value >= 26
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "Cn" | "" => Self::Unassigned,
            "Lu" => Self::UppercaseLetter,
            "Ll" => Self::LowercaseLetter,
            "Lt" => Self::TitlecaseLetter,
            "Lm" => Self::ModifierLetter,
            "Lo" => Self::OtherLetter,
            "Mn" => Self::NonspacingMark,
            "Mc" => Self::SpacingMark,
            "Me" => Self::EnclosingMark,
            "Nd" => Self::DecimalNumber,
            "Nl" => Self::LetterNumber,
            "No" => Self::OtherNumber,
            "Pc" => Self::ConnectorPunctuation,
            "Pd" => Self::DashPunctuation,
            "Ps" => Self::OpenPunctuation,
            "Pe" => Self::ClosePunctuation,
            "Pi" => Self::InitialPunctuation,
            "Pf" => Self::FinalPunctuation,
            "Po" => Self::OtherPunctuation,
            "Sm" => Self::MathSymbol,
            "Sc" => Self::CurrencySymbol,
            "Sk" => Self::ModifierSymbol,
            "So" => Self::OtherSymbol,
            "Zs" => Self::SpaceSeparator,
            "Zl" => Self::LineSeparator,
            "Zp" => Self::ParagraphSeparator,
            "Cc" => Self::Control,
            "Cf" => Self::Format,
            "Cs" => Self::Surrogate,
            "Co" => Self::PrivateUse,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}

impl TryFrom<u8> for GeneralCategory
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        match value <= LAST {
            true => Ok(unsafe { core::mem::transmute::<u8, GeneralCategory>(value) }),
            false => Err(PropertiesError::UnknownPropertyValue),
        }
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}
