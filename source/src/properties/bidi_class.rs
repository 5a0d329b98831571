use super::PropertiesError;

/// класс направления текста (Bidi Class)
/// берется из UCD: пятая колонка UnicodeData.txt
///
/// группы классов:
///     strong (L, R, AL) - символы с явно заданным направлением
///     weak (EN, ES, ET, AN, CS, NSM, BN) - направление зависит от контекста
///     neutral (B, S, WS, ON) - не влияют на направление письма
///     explicit (LRE .. PDI) - управляющие символы направления
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[repr(u8)]
pub enum BidiClass
{
    /// класс не задан - запись по умолчанию для неназначенных кодпоинтов
    #[default]
    Unset = 0,

    /// L - сильный LTR-символ
    LeftToRight = 1,
    /// R - сильный (не арабский) RTL-символ
    RightToLeft = 2,
    /// AL - сильный арабский RTL-символ
    ArabicLetter = 3,

    /// EN - европейская цифра
    EuropeanNumber = 4,
    /// ES - знаки плюса и минуса
    EuropeanSeparator = 5,
    /// ET - терминатор числового формата, включая символы валют
    EuropeanTerminator = 6,
    /// AN - арабско-индийская цифра
    ArabicNumber = 7,
    /// CS - запятые, двоеточия, слеши
    CommonSeparator = 8,
    /// NSM - не занимающий места комбинирующий символ
    NonspacingMark = 9,
    /// BN - символы форматирования и управляющие коды
    BoundaryNeutral = 10,

    /// B - разделители абзацев
    ParagraphSeparator = 11,
    /// S - разделители сегментов текста
    SegmentSeparator = 12,
    /// WS - пробельные символы
    Whitespace = 13,
    /// ON - прочие нейтральные символы
    OtherNeutral = 14,

    /// LRE - U+202A, вставка слева направо
    LeftToRightEmbedding = 15,
    /// LRO - U+202D, переопределение слева направо
    LeftToRightOverride = 16,
    /// RLE - U+202B, вставка справа налево
    RightToLeftEmbedding = 17,
    /// RLO - U+202E, переопределение справа налево
    RightToLeftOverride = 18,
    /// PDF - U+202C, окончание направляющего форматирования
    PopDirectionalFormat = 19,
    /// LRI - U+2066, изоляция слева направо
    LeftToRightIsolate = 20,
    /// RLI - U+2067, изоляция справа налево
    RightToLeftIsolate = 21,
    /// FSI - U+2068, первая сильная изоляция
    FirstStrongIsolate = 22,
    /// PDI - U+2069, окончание изоляции
    PopDirectionalIsolate = 23,
}

/// последний допустимый дискриминант
const LAST: u8 = BidiClass::PopDirectionalIsolate as u8;

impl BidiClass
{
    /// обозначение класса, как оно записано в UCD
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::Unset => "",
            Self::LeftToRight => "L",
            Self::RightToLeft => "R",
            Self::ArabicLetter => "AL",
            Self::EuropeanNumber => "EN",
            Self::EuropeanSeparator => "ES",
            Self::EuropeanTerminator => "ET",
            Self::ArabicNumber => "AN",
            Self::CommonSeparator => "CS",
            Self::NonspacingMark => "NSM",
            Self::BoundaryNeutral => "BN",
            Self::ParagraphSeparator => "B",
            Self::SegmentSeparator => "S",
            Self::Whitespace => "WS",
            Self::OtherNeutral => "ON",
            Self::LeftToRightEmbedding => "LRE",
            Self::LeftToRightOverride => "LRO",
            Self::RightToLeftEmbedding => "RLE",
            Self::RightToLeftOverride => "RLO",
            Self::PopDirectionalFormat => "PDF",
            Self::LeftToRightIsolate => "LRI",
            Self::RightToLeftIsolate => "RLI",
            Self::FirstStrongIsolate => "FSI",
            Self::PopDirectionalIsolate => "PDI",
        }
    }
}

impl TryFrom<&str> for BidiClass
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        Ok(match abbr {
            "" => Self::Unset,
            "L" => Self::LeftToRight,
            "R" => Self::RightToLeft,
            "AL" => Self::ArabicLetter,
            "EN" => Self::EuropeanNumber,
            "ES" => Self::EuropeanSeparator,
            "ET" => Self::EuropeanTerminator,
            "AN" => Self::ArabicNumber,
            "CS" => Self::CommonSeparator,
            "NSM" => Self::NonspacingMark,
            "BN" => Self::BoundaryNeutral,
            "B" => Self::ParagraphSeparator,
            "S" => Self::SegmentSeparator,
            "WS" => Self::Whitespace,
            "ON" => Self::OtherNeutral,
            "LRE" => Self::LeftToRightEmbedding,
            "LRO" => Self::LeftToRightOverride,
            "RLE" => Self::RightToLeftEmbedding,
            "RLO" => Self::RightToLeftOverride,
            "PDF" => Self::PopDirectionalFormat,
            "LRI" => Self::LeftToRightIsolate,
            "RLI" => Self::RightToLeftIsolate,
            "FSI" => Self::FirstStrongIsolate,
            "PDI" => Self::PopDirectionalIsolate,
            _ => return Err(PropertiesError::UnknownPropertyValue),
        })
    }
}

impl TryFrom<u8> for BidiClass
{
    type Error = PropertiesError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error>
    {
        match value <= LAST {
            true => Ok(unsafe { core::mem::transmute::<u8, BidiClass>(value) }),
            false => Err(PropertiesError::UnknownPropertyValue),
        }
    }
}

impl From<BidiClass> for u8
{
    #[inline]
    fn from(value: BidiClass) -> Self
    {
        value as u8
    }
}
