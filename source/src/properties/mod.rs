mod bidi_class;
mod canonical_combining_class;
mod decomposition;
mod derived_properties;
mod east_asian_width;
mod general_category;
mod numeric_type;

pub use bidi_class::BidiClass;
pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use derived_properties::DerivedProperties;
pub use derived_properties::DerivedProperty;
pub use east_asian_width::EastAsianWidth;
pub use general_category::GeneralCategory;
pub use numeric_type::NumericType;
pub use numeric_type::NumericValue;

/// кодпоинт Unicode со всеми свойствами, собранными из исходных таблиц UCD
#[derive(Debug, Clone, PartialEq)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название; None - плейсхолдеры в угловых скобках (управляющие символы,
    /// диапазоны, private use) и алгоритмически именуемые блоки
    pub name: Option<String>,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// класс направления (bidi class)
    pub bc: BidiClass,
    /// класс ширины символа (east asian width)
    pub eaw: EastAsianWidth,
    /// числовой тип / значение
    pub numeric: NumericType,
    /// "зеркальный" символ двунаправленного текста (bidi mirrored)
    pub bidi_mirrored: bool,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: Option<u32>,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: Option<u32>,
    /// соответствующая заглавная буква
    pub simple_titlecase_mapping: Option<u32>,
    /// тег декомпозиции
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция (в сжатом виде, как записана в UnicodeData.txt)
    pub decomposition: Vec<u32>,
    /// исключение композиции (CompositionExclusions.txt)
    pub excluded_from_composition: bool,
    /// обязательный разрыв строки (LineBreak.txt, классы BK / CR / LF / NL)
    pub mandatory_linebreak: bool,
    /// флаги из DerivedCoreProperties.txt
    pub derived: DerivedProperties,
    /// полные варианты смены регистра, только безусловные правила (SpecialCasing.txt)
    pub special_casing: Option<SpecialCasing>,
    /// полная свертка регистра, если отличается от строчной буквы (CaseFolding.txt)
    pub casefold: Option<Vec<u32>>,
}

impl Codepoint
{
    /// запись по умолчанию для неназначенного кодпоинта
    pub fn unassigned(code: u32) -> Self
    {
        Self {
            code,
            name: None,
            gc: GeneralCategory::Unassigned,
            ccc: CanonicalCombiningClass::default(),
            bc: BidiClass::Unset,
            eaw: EastAsianWidth::Neutral,
            numeric: NumericType::None,
            bidi_mirrored: false,
            simple_uppercase_mapping: None,
            simple_lowercase_mapping: None,
            simple_titlecase_mapping: None,
            decomposition_tag: None,
            decomposition: vec![],
            excluded_from_composition: false,
            mandatory_linebreak: false,
            derived: DerivedProperties::default(),
            special_casing: None,
            casefold: None,
        }
    }

    /// пробельный символ: Zs или bidi-класс WS / B / S
    pub fn is_space(&self) -> bool
    {
        self.gc == GeneralCategory::SpaceSeparator
            || matches!(
                self.bc,
                BidiClass::Whitespace | BidiClass::ParagraphSeparator | BidiClass::SegmentSeparator
            )
    }

    /// буква: Lu, Ll, Lt, Lm, Lo
    pub fn is_alpha(&self) -> bool
    {
        self.gc.is_letter()
    }

    /// прописная: категория Lu или соответствующий флаг из DerivedCoreProperties
    /// (некоторые письменности задают регистр только производным свойством)
    pub fn is_upper(&self) -> bool
    {
        self.gc == GeneralCategory::UppercaseLetter
            || self.derived.contains(DerivedProperty::Uppercase)
    }

    /// строчная: категория Ll или флаг Lowercase
    pub fn is_lower(&self) -> bool
    {
        self.gc == GeneralCategory::LowercaseLetter
            || self.derived.contains(DerivedProperty::Lowercase)
    }

    /// заглавная: только категория Lt, производного свойства не существует
    pub fn is_title(&self) -> bool
    {
        self.gc == GeneralCategory::TitlecaseLetter
    }

    /// имеет регистр: буква с регистром или флаг Cased
    pub fn is_cased(&self) -> bool
    {
        self.gc.is_cased_letter() || self.derived.contains(DerivedProperty::Cased)
    }

    /// печатаемый символ: пробел U+0020 или категория не из групп C и Z
    pub fn is_printable(&self) -> bool
    {
        self.code == 0x20 || !(self.gc.is_other() || self.gc.is_separator())
    }
}

/// полные (многосимвольные) преобразования регистра из SpecialCasing.txt;
/// хранятся только для кодпоинтов, у которых безусловное полное преобразование
/// отличается от простого
#[derive(Debug, Clone, PartialEq)]
pub struct SpecialCasing
{
    pub lower: Vec<u32>,
    pub title: Vec<u32>,
    pub upper: Vec<u32>,
}

/// ошибка разбора значения свойства
#[derive(Debug, PartialEq)]
pub enum PropertiesError
{
    UnknownPropertyValue,
}

impl From<core::num::ParseIntError> for PropertiesError
{
    fn from(_: core::num::ParseIntError) -> Self
    {
        Self::UnknownPropertyValue
    }
}
