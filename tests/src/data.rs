use unicode_database::CharacterDatabase;
use unicode_database_prepare::compile::{compile, CompileOptions, CompiledDatabase};
use unicode_database_prepare::names::{build_name_index, PlainNameIndex};
use unicode_database_source::{UcdFiles, UnicodeData};

// синтетический снапшот UCD: маленький, но покрывающий все варианты записей -
// диапазоны First/Last (CJK, хангыль, суррогаты, private use), декомпозиции
// с тегами и без, синглтоны, дроби, исключения композиции, алиасы и
// именованные последовательности

/// UnicodeData.txt
pub const UNICODE_DATA: &str = "\
0000;<control>;Cc;0;BN;;;;;N;NULL;;;;
000A;<control>;Cc;0;B;;;;;N;LINE FEED (LF);;;;
000D;<control>;Cc;0;B;;;;;N;CARRIAGE RETURN (CR);;;;
0020;SPACE;Zs;0;WS;;;;;N;;;;;
0021;EXCLAMATION MARK;Po;0;ON;;;;;N;;;;;
0028;LEFT PARENTHESIS;Ps;0;ON;;;;;Y;;;;;
0029;RIGHT PARENTHESIS;Pe;0;ON;;;;;Y;;;;;
0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;
0031;DIGIT ONE;Nd;0;EN;;1;1;1;N;;;;;
0032;DIGIT TWO;Nd;0;EN;;2;2;2;N;;;;;
0034;DIGIT FOUR;Nd;0;EN;;4;4;4;N;;;;;
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0045;LATIN CAPITAL LETTER E;Lu;0;L;;;;;N;;;;0065;
0046;LATIN CAPITAL LETTER F;Lu;0;L;;;;;N;;;;0066;
0048;LATIN CAPITAL LETTER H;Lu;0;L;;;;;N;;;;0068;
0049;LATIN CAPITAL LETTER I;Lu;0;L;;;;;N;;;;0069;
0053;LATIN CAPITAL LETTER S;Lu;0;L;;;;;N;;;;0073;
0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041
0065;LATIN SMALL LETTER E;Ll;0;L;;;;;N;;;0045;;0045
0066;LATIN SMALL LETTER F;Ll;0;L;;;;;N;;;0046;;0046
0068;LATIN SMALL LETTER H;Ll;0;L;;;;;N;;;0048;;0048
0069;LATIN SMALL LETTER I;Ll;0;L;;;;;N;;;0049;;0049
0073;LATIN SMALL LETTER S;Ll;0;L;;;;;N;;;0053;;0053
0085;<control>;Cc;0;B;;;;;N;NEXT LINE (NEL);;;;
00B2;SUPERSCRIPT TWO;No;0;EN;<super> 0032;;2;2;N;;;;;
00BC;VULGAR FRACTION ONE QUARTER;No;0;ON;<fraction> 0031 2044 0034;;;1/4;N;;;;;
00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;;;;00E0;
00C5;LATIN CAPITAL LETTER A WITH RING ABOVE;Lu;0;L;0041 030A;;;;N;;;;00E5;
00DF;LATIN SMALL LETTER SHARP S;Ll;0;L;;;;;N;;;;;
00E0;LATIN SMALL LETTER A WITH GRAVE;Ll;0;L;0061 0300;;;;N;;;00C0;;00C0
00E5;LATIN SMALL LETTER A WITH RING ABOVE;Ll;0;L;0061 030A;;;;N;;;00C5;;00C5
0130;LATIN CAPITAL LETTER I WITH DOT ABOVE;Lu;0;L;;;;;N;;;;0069;
02B0;MODIFIER LETTER SMALL H;Lm;0;L;<super> 0068;;;;N;;;;;
0300;COMBINING GRAVE ACCENT;Mn;230;NSM;;;;;N;;;;;
0307;COMBINING DOT ABOVE;Mn;230;NSM;;;;;N;;;;;
030A;COMBINING RING ABOVE;Mn;230;NSM;;;;;N;;;;;
0328;COMBINING OGONEK;Mn;202;NSM;;;;;N;;;;;
0391;GREEK CAPITAL LETTER ALPHA;Lu;0;L;;;;;N;;;;03B1;
03A3;GREEK CAPITAL LETTER SIGMA;Lu;0;L;;;;;N;;;;03C3;
03B1;GREEK SMALL LETTER ALPHA;Ll;0;L;;;;;N;;;0391;;0391
03C2;GREEK SMALL LETTER FINAL SIGMA;Ll;0;L;;;;;N;;;03A3;;03A3
03C3;GREEK SMALL LETTER SIGMA;Ll;0;L;;;;;N;;;03A3;;03A3
0915;DEVANAGARI LETTER KA;Lo;0;L;;;;;N;;;;;
093C;DEVANAGARI SIGN NUKTA;Mn;7;NSM;;;;;N;;;;;
0958;DEVANAGARI LETTER QA;Lo;0;L;0915 093C;;;;N;;;;;
0F33;TIBETAN DIGIT HALF ZERO;No;0;L;;;;-1/2;N;;;;;
1E9E;LATIN CAPITAL LETTER SHARP S;Lu;0;L;;;;;N;;;;00DF;
2028;LINE SEPARATOR;Zl;0;WS;;;;;N;;;;;
2044;FRACTION SLASH;Sm;0;CS;;;;;N;;;;;
2160;ROMAN NUMERAL ONE;Nl;0;L;<compat> 0049;;;1;N;;;;2170;
2170;SMALL ROMAN NUMERAL ONE;Nl;0;L;<compat> 0069;;;1;N;;;2160;;2160
212B;ANGSTROM SIGN;Lu;0;L;00C5;;;;N;;;;00E5;
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;
4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;
9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;
DB7F;<Non Private Use High Surrogate, Last>;Cs;0;L;;;;;N;;;;;
E000;<Private Use, First>;Co;0;L;;;;;N;;;;;
F8FF;<Private Use, Last>;Co;0;L;;;;;N;;;;;
FB01;LATIN SMALL LIGATURE FI;Ll;0;L;<compat> 0066 0069;;;;N;;;;;
FF01;FULLWIDTH EXCLAMATION MARK;Po;0;ON;<wide> 0021;;;;N;;;;;
";

/// CompositionExclusions.txt
pub const COMPOSITION_EXCLUSIONS: &str = "\
# исключения композиции
0958 # DEVANAGARI LETTER QA
";

/// LineBreak.txt
pub const LINE_BREAK: &str = "\
000A;LF
000D;CR
0020;SP
0041..005A;AL
0085;NL
2028;BK
";

/// EastAsianWidth.txt
pub const EAST_ASIAN_WIDTH: &str = "\
0020;Na
0021..0029;Na
3400..4DBF;W
4E00..9FFF;W
AC00..D7A3;W
E000..F8FF;A
FF01;F
";

/// DerivedCoreProperties.txt
pub const DERIVED_CORE_PROPERTIES: &str = "\
0041..005A    ; Alphabetic # пропускаемое свойство
0041          ; Uppercase
0045..0049    ; Uppercase
0053          ; Uppercase
00C0          ; Uppercase
00C5          ; Uppercase
0130          ; Uppercase
0391          ; Uppercase
03A3          ; Uppercase
1E9E          ; Uppercase
2160          ; Uppercase
212B          ; Uppercase
0061..007A    ; Lowercase
00DF..00E5    ; Lowercase
02B0          ; Lowercase
03B1..03C3    ; Lowercase
2170          ; Lowercase
FB01          ; Lowercase
0041..005A    ; Cased
0061..007A    ; Cased
00C0..00E5    ; Cased
02B0          ; Cased
0130          ; Cased
0391..03C3    ; Cased
1E9E          ; Cased
2160..2170    ; Cased
212B          ; Cased
FB01          ; Cased
02B0          ; Case_Ignorable
0300..032F    ; Case_Ignorable
0300          ; InCB; Extend # строка с тремя полями - тоже пропускается
0041..005A    ; XID_Start
0061..007A    ; XID_Start
00C0..00E5    ; XID_Start
0130          ; XID_Start
02B0          ; XID_Start
0391..03C3    ; XID_Start
0915..0958    ; XID_Start
1E9E          ; XID_Start
2160..2170    ; XID_Start
212B          ; XID_Start
3400..4DBF    ; XID_Start
4E00..9FFF    ; XID_Start
AC00..D7A3    ; XID_Start
FB01          ; XID_Start
0030..0039    ; XID_Continue
0041..005A    ; XID_Continue
0061..007A    ; XID_Continue
00C0..00E5    ; XID_Continue
0130          ; XID_Continue
02B0          ; XID_Continue
0300..032F    ; XID_Continue
0391..03C3    ; XID_Continue
0915..0958    ; XID_Continue
1E9E          ; XID_Continue
2160..2170    ; XID_Continue
212B          ; XID_Continue
3400..4DBF    ; XID_Continue
4E00..9FFF    ; XID_Continue
AC00..D7A3    ; XID_Continue
FB01          ; XID_Continue
";

/// NameAliases.txt
pub const NAME_ALIASES: &str = "\
0000;NULL;control
000A;LINE FEED;control
000A;LF;abbreviation
000D;CARRIAGE RETURN;control
";

/// NamedSequences.txt
pub const NAMED_SEQUENCES: &str = "\
LATIN CAPITAL LETTER A WITH GRAVE AND OGONEK;00C0 0328
GREEK SMALL LETTER ALPHA WITH GRAVE;03B1 0300
";

/// CaseFolding.txt
pub const CASE_FOLDING: &str = "\
0041; C; 0061; # совпадает с простым отображением - не сохраняется
00DF; F; 0073 0073; # LATIN SMALL LETTER SHARP S
0130; F; 0069 0307; # LATIN CAPITAL LETTER I WITH DOT ABOVE
03C2; C; 03C3; # GREEK SMALL LETTER FINAL SIGMA
1E9E; F; 0073 0073; # LATIN CAPITAL LETTER SHARP S
1E9E; S; 00DF; # простая свертка - отбрасывается
";

/// SpecialCasing.txt
pub const SPECIAL_CASING: &str = "\
00DF; 00DF; 0053 0073; 0053 0053; # LATIN SMALL LETTER SHARP S
0130; 0069 0307; 0130; 0130; # LATIN CAPITAL LETTER I WITH DOT ABOVE
03A3; 03C2; 03A3; 03A3; Final_Sigma; # условная запись - отбрасывается
";

/// дополнительные числовые значения иероглифов
pub const NUMERIC_OVERRIDES: &str = "\
4E00;1
5341;10
";

/// диапазоны CJK Unified Ideographs снапшота
pub const CJK_RANGES: [(u32, u32); 2] = [(0x3400, 0x4DBF), (0x4E00, 0x9FFF)];

/// исходные файлы снапшота
pub fn files() -> UcdFiles<'static>
{
    UcdFiles {
        unicode_data: UNICODE_DATA,
        composition_exclusions: COMPOSITION_EXCLUSIONS,
        line_break: LINE_BREAK,
        east_asian_width: EAST_ASIAN_WIDTH,
        derived_core_properties: DERIVED_CORE_PROPERTIES,
        name_aliases: NAME_ALIASES,
        named_sequences: NAMED_SEQUENCES,
        case_folding: CASE_FOLDING,
        special_casing: SPECIAL_CASING,
        numeric_overrides: Some(NUMERIC_OVERRIDES),
    }
}

/// параметры сборки снапшота
pub fn options() -> CompileOptions
{
    CompileOptions {
        version: "15.1.0".to_owned(),
        page_size: 256,
        cjk_ranges: CJK_RANGES.to_vec(),
    }
}

lazy_static! {
    /// разобранная модель символов
    pub static ref UNICODE: UnicodeData = UnicodeData::load(&files()).unwrap();

    /// скомпилированный артефакт
    pub static ref COMPILED: CompiledDatabase =
        compile::<PlainNameIndex>(&UNICODE, &options(), None).unwrap();
}

/// база данных над скомпилированным артефактом
pub fn database() -> CharacterDatabase<'static, PlainNameIndex>
{
    CharacterDatabase::new(COMPILED.as_data(), build_name_index(&COMPILED.name_entries))
}
