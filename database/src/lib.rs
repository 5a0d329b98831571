pub mod cjk;
pub mod hangul;

mod data;
mod error;
mod names;
mod record;

pub use data::CharacterData;
pub use data::Found;
pub use data::MappedData;
pub use error::QueryError;
pub use names::NameIndex;
pub use names::{NAME_ALIASES_START, NAMED_SEQUENCES_START, SYNTHETIC_RANGE_LEN};
pub use record::CharacterRecord;
pub use record::{
    FLAG_CASED, FLAG_CASE_IGNORABLE, FLAG_LINEBREAK, FLAG_LOWERCASE, FLAG_MIRRORED,
    FLAG_UPPERCASE, FLAG_XID_CONTINUE, FLAG_XID_START,
};

use unicode_database_source::properties::{
    BidiClass, DecompositionTag, GeneralCategory, NumericValue,
};
use unicode_database_source::MAX_CODEPOINT;

/// скомпилированная база данных символов
///
/// инкрементальный артефакт держит ссылку на базовую версию: запрос сначала
/// смотрит в собственные записи, затем в надгробия и только потом спускается
/// к базе. все таблицы неизменяемы - запросы безопасны из любого количества
/// параллельных читателей
pub struct CharacterDatabase<'a, N>
{
    data: CharacterData<'a>,
    names: N,
    base: Option<&'a CharacterDatabase<'a, N>>,
}

/// цепочка поиска значения: собственная запись -> надгробие -> базовая версия
macro_rules! chained {
    ($method: ident, $field: ident, $type: ty) => {
        pub fn $method(&self, code: u32) -> Option<$type>
        {
            match self.data.$field.find(code) {
                Found::Value(value) => Some(value),
                Found::Removed => None,
                Found::Missing => self.base.and_then(|base| base.$method(code)),
            }
        }
    };
}

/// то же, но значение - ссылка в общий блок последовательностей;
/// ссылка разрешается в том артефакте, в котором запись найдена
macro_rules! chained_expansion {
    ($method: ident, $field: ident) => {
        pub fn $method(&self, code: u32) -> Option<&'a [u32]>
        {
            match self.data.$field.find(code) {
                Found::Value(entry) => Some(self.expansion(entry)),
                Found::Removed => None,
                Found::Missing => self.base.and_then(|base| base.$method(code)),
            }
        }
    };
}

impl<'a, N> CharacterDatabase<'a, N>
where
    N: NameIndex,
{
    /// полный артефакт
    pub fn new(data: CharacterData<'a>, names: N) -> Self
    {
        Self {
            data,
            names,
            base: None,
        }
    }

    /// инкрементальный артефакт поверх базовой версии
    pub fn with_base(data: CharacterData<'a>, names: N, base: &'a CharacterDatabase<'a, N>) -> Self
    {
        Self {
            data,
            names,
            base: Some(base),
        }
    }

    /// версия Unicode, из которой собран артефакт
    pub fn version(&self) -> &'a str
    {
        self.data.version
    }

    // отображения со значением-словом

    chained!(decimal_lookup, decimal, u8);
    chained!(digit_lookup, digit, u8);
    chained!(numeric_lookup, numeric, NumericValue);
    chained!(simple_uppercase, simple_upper, u32);
    chained!(simple_lowercase, simple_lower, u32);
    chained!(simple_titlecase, simple_title, u32);
    chained!(combining_class, combining, u8);

    // отображения со значением-последовательностью

    chained_expansion!(canonical_expansion, canonical);
    chained_expansion!(compat_expansion, compat);
    chained_expansion!(casefold_lookup, casefold);

    /// полные преобразования регистра: (нижний, заглавный, верхний)
    pub fn special_casing(&self, code: u32) -> Option<(&'a [u32], &'a [u32], &'a [u32])>
    {
        match self.data.special_casing.find(code) {
            Found::Value((lower, title, upper)) => Some((
                self.expansion(lower),
                self.expansion(title),
                self.expansion(upper),
            )),
            Found::Removed => None,
            Found::Missing => self.base.and_then(|base| base.special_casing(code)),
        }
    }

    /// декомпозиция в исходном виде: тег и элементы
    pub fn raw_decomposition(&self, code: u32) -> Option<(Option<DecompositionTag>, &'a [u32])>
    {
        match self.data.raw_decomposition.find(code) {
            Found::Value((tag, entry)) => {
                let tag = match tag {
                    0 => None,
                    value => DecompositionTag::try_from(value - 1).ok(),
                };

                Some((tag, self.expansion(entry)))
            }
            Found::Removed => None,
            Found::Missing => self.base.and_then(|base| base.raw_decomposition(code)),
        }
    }

    // классификация

    /// категория символа, двухбуквенный тег
    pub fn category(&self, code: u32) -> &'static str
    {
        self.record(code).gc.abbr()
    }

    /// класс направления
    pub fn bidirectional(&self, code: u32) -> &'static str
    {
        self.record(code).bc.abbr()
    }

    /// класс ширины символа
    pub fn east_asian_width(&self, code: u32) -> &'static str
    {
        self.record(code).eaw.abbr()
    }

    /// класс канонического комбинирования; 0 - стартер
    pub fn combining(&self, code: u32) -> u8
    {
        self.combining_class(code).unwrap_or(0)
    }

    /// пробельный символ: Zs или bidi-класс WS / B / S
    pub fn isspace(&self, code: u32) -> bool
    {
        let record = self.record(code);

        record.gc == GeneralCategory::SpaceSeparator
            || matches!(
                record.bc,
                BidiClass::Whitespace | BidiClass::ParagraphSeparator | BidiClass::SegmentSeparator
            )
    }

    /// буква: Lu, Ll, Lt, Lm, Lo
    pub fn isalpha(&self, code: u32) -> bool
    {
        self.record(code).gc.is_letter()
    }

    /// обязательный разрыв строки
    pub fn islinebreak(&self, code: u32) -> bool
    {
        self.record(code).has(FLAG_LINEBREAK)
    }

    /// имеет десятичное значение
    pub fn isdecimal(&self, code: u32) -> bool
    {
        self.decimal_lookup(code).is_some()
    }

    /// имеет значение цифры
    pub fn isdigit(&self, code: u32) -> bool
    {
        self.digit_lookup(code).is_some()
    }

    /// имеет числовое значение
    pub fn isnumeric(&self, code: u32) -> bool
    {
        self.numeric_lookup(code).is_some()
    }

    /// буква или числовой символ
    pub fn isalnum(&self, code: u32) -> bool
    {
        self.isalpha(code) || self.isdecimal(code) || self.isdigit(code) || self.isnumeric(code)
    }

    /// прописная: категория Lu или производное свойство Uppercase
    pub fn isupper(&self, code: u32) -> bool
    {
        let record = self.record(code);

        record.gc == GeneralCategory::UppercaseLetter || record.has(FLAG_UPPERCASE)
    }

    /// строчная: категория Ll или производное свойство Lowercase
    pub fn islower(&self, code: u32) -> bool
    {
        let record = self.record(code);

        record.gc == GeneralCategory::LowercaseLetter || record.has(FLAG_LOWERCASE)
    }

    /// заглавная (Lt)
    pub fn istitle(&self, code: u32) -> bool
    {
        self.record(code).gc == GeneralCategory::TitlecaseLetter
    }

    /// имеет регистр
    pub fn iscased(&self, code: u32) -> bool
    {
        let record = self.record(code);

        record.has(FLAG_CASED) || record.gc.is_cased_letter()
    }

    /// игнорируется при определении контекста регистра
    pub fn iscaseignorable(&self, code: u32) -> bool
    {
        self.record(code).has(FLAG_CASE_IGNORABLE)
    }

    /// допустимое начало идентификатора
    pub fn isxidstart(&self, code: u32) -> bool
    {
        self.record(code).has(FLAG_XID_START)
    }

    /// допустимое продолжение идентификатора
    pub fn isxidcontinue(&self, code: u32) -> bool
    {
        self.record(code).has(FLAG_XID_CONTINUE)
    }

    /// печатаемый символ: пробел или категория не из групп C и Z
    pub fn isprintable(&self, code: u32) -> bool
    {
        let record = self.record(code);

        code == 0x20 || !(record.gc.is_other() || record.gc.is_separator())
    }

    /// "зеркальный" символ двунаправленного текста
    pub fn mirrored(&self, code: u32) -> bool
    {
        self.record(code).has(FLAG_MIRRORED)
    }

    // числовые значения

    /// десятичная цифра; отсутствие значения - промах, а не ноль
    pub fn decimal(&self, code: u32) -> Result<u8, QueryError>
    {
        self.decimal_lookup(code).ok_or(QueryError::NotFound)
    }

    /// цифра
    pub fn digit(&self, code: u32) -> Result<u8, QueryError>
    {
        self.digit_lookup(code).ok_or(QueryError::NotFound)
    }

    /// числовое значение; дроби остаются точными рациональными
    pub fn numeric(&self, code: u32) -> Result<NumericValue, QueryError>
    {
        self.numeric_lookup(code).ok_or(QueryError::NotFound)
    }

    // регистр

    /// прописная буква; тождество, если отображение не задано.
    /// ASCII разбирается без обращения к таблицам, результат совпадает с ними
    pub fn toupper(&self, code: u32) -> u32
    {
        if code < 0x80 {
            return match code {
                0x61 ..= 0x7A => code - 0x20,
                _ => code,
            };
        }

        self.simple_uppercase(code).unwrap_or(code)
    }

    /// строчная буква
    pub fn tolower(&self, code: u32) -> u32
    {
        if code < 0x80 {
            return match code {
                0x41 ..= 0x5A => code + 0x20,
                _ => code,
            };
        }

        self.simple_lowercase(code).unwrap_or(code)
    }

    /// заглавная буква; пустое отображение заменяется прописной еще при сборке
    pub fn totitle(&self, code: u32) -> u32
    {
        if code < 0x80 {
            return match code {
                0x61 ..= 0x7A => code - 0x20,
                _ => code,
            };
        }

        self.simple_titlecase(code).unwrap_or(code)
    }

    /// полное преобразование в прописные; без записи в SpecialCasing -
    /// простое отображение длиной в один кодпоинт
    pub fn toupper_full(&self, code: u32) -> Vec<u32>
    {
        match self.special_casing(code) {
            Some((_, _, upper)) => upper.to_vec(),
            None => vec![self.toupper(code)],
        }
    }

    /// полное преобразование в строчные
    pub fn tolower_full(&self, code: u32) -> Vec<u32>
    {
        match self.special_casing(code) {
            Some((lower, _, _)) => lower.to_vec(),
            None => vec![self.tolower(code)],
        }
    }

    /// полное преобразование в заглавные
    pub fn totitle_full(&self, code: u32) -> Vec<u32>
    {
        match self.special_casing(code) {
            Some((_, title, _)) => title.to_vec(),
            None => vec![self.totitle(code)],
        }
    }

    // декомпозиция / композиция

    /// декомпозиция в текстовом виде, как она записана в UnicodeData.txt;
    /// пустая строка - декомпозиции нет
    pub fn decomposition(&self, code: u32) -> String
    {
        let (tag, codes) = match self.raw_decomposition(code) {
            Some(value) => value,
            None => return String::new(),
        };

        let mut result = match tag {
            Some(tag) => tag.to_string(),
            None => String::new(),
        };

        for &component in codes.iter() {
            if !result.is_empty() {
                result.push(' ');
            }

            result.push_str(&format!("{:04X}", component));
        }

        result
    }

    /// полная каноническая декомпозиция; пустой срез - кодпоинт не разворачивается
    pub fn canon_decomposition(&self, code: u32) -> &'a [u32]
    {
        self.canonical_expansion(code).unwrap_or(&[])
    }

    /// полная декомпозиция совместимости
    pub fn compat_decomposition(&self, code: u32) -> &'a [u32]
    {
        self.compat_expansion(code).unwrap_or(&[])
    }

    /// каноническая композиция пары (стартер, комбинируемый)
    pub fn composition(&self, starter: u32, combining: u32) -> Option<u32>
    {
        let key = (starter as u64) << 32 | combining as u64;

        self.data
            .compositions
            .binary_search_by_key(&key, |entry| entry.0)
            .ok()
            .map(|index| self.data.compositions[index].1)
    }

    // названия

    /// название кодпоинта
    ///
    /// синтетические диапазоны алиасов и последовательностей не запрашиваются
    /// напрямую - это некорректный ввод, а не промах
    pub fn name(&self, code: u32) -> Result<String, QueryError>
    {
        if names::is_alias_slot(code) || names::is_sequence_slot(code) {
            return Err(QueryError::ReservedCodepoint(code));
        }

        if let Some(name) = hangul::syllable_name(code) {
            return Ok(name);
        }

        if let Some(name) = cjk::ideograph_name(code, self.data.cjk_ranges) {
            return Ok(name);
        }

        self.names
            .lookup_by_codepoint(code)
            .map(str::to_owned)
            .ok_or(QueryError::NotFound)
    }

    /// кодпоинт по названию: явные названия, хангыль и CJK по формулам;
    /// именованные последовательности разрешаются только по флагу
    pub fn lookup(&self, name: &str, with_named_sequence: bool) -> Result<u32, QueryError>
    {
        self.resolve(name, with_named_sequence, false)
    }

    /// кодпоинт по названию, включая алиасы: попадание в синтетический слот
    /// алиаса разрешается в его целевой кодпоинт
    pub fn lookup_with_alias(&self, name: &str) -> Result<u32, QueryError>
    {
        self.resolve(name, false, true)
    }

    /// именованная последовательность по синтетическому кодпоинту
    pub fn lookup_named_sequence(&self, code: u32) -> Option<&'a [u32]>
    {
        match names::is_sequence_slot(code) {
            true => self
                .data
                .sequences
                .get((code - NAMED_SEQUENCES_START) as usize)
                .map(|&entry| self.expansion(entry)),
            false => None,
        }
    }

    fn resolve(
        &self,
        name: &str,
        with_named_sequence: bool,
        with_alias: bool,
    ) -> Result<u32, QueryError>
    {
        if let Some(code) = hangul::lookup_syllable_name(name) {
            return Ok(code);
        }

        if let Some(code) = cjk::lookup_ideograph_name(name, self.data.cjk_ranges) {
            return Ok(code);
        }

        let invalid = || QueryError::InvalidName(name.to_owned());

        let code = self.names.lookup_by_name(name).ok_or_else(invalid)?;

        if names::is_alias_slot(code) {
            let offset = (code - NAME_ALIASES_START) as usize;

            return match with_alias {
                true => self.data.aliases.get(offset).copied().ok_or_else(invalid),
                false => Err(invalid()),
            };
        }

        if names::is_sequence_slot(code) && !with_named_sequence {
            return Err(invalid());
        }

        Ok(code)
    }

    // внутренности

    /// запись компактной таблицы для кодпоинта
    fn record(&self, code: u32) -> CharacterRecord
    {
        if code > MAX_CODEPOINT {
            return CharacterRecord::unassigned();
        }

        let bits = self.data.block_bits;
        let block = self.data.index[(code >> bits) as usize] as usize;
        let offset = code as usize & ((1 << bits) - 1);
        let id = self.data.blocks[(block << bits) | offset];

        CharacterRecord::unpack(self.data.records[id as usize])
    }

    /// последовательность из общего блока по ссылке (позиция << 8 | длина)
    #[inline]
    fn expansion(&self, entry: u32) -> &'a [u32]
    {
        let pos = (entry >> 8) as usize;
        let len = (entry & 0xFF) as usize;

        &self.data.expansions[pos .. pos + len]
    }
}
