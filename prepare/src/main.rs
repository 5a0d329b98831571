use std::error::Error;
use std::fs;
use std::fs::File;

use unicode_database_prepare::compile::{compile, CompileOptions};
use unicode_database_prepare::names::PlainNameIndex;
use unicode_database_prepare::output;
use unicode_database_source::{UcdFiles, UnicodeData};

/// версия UCD, лежащая в ./data/ucd
const VERSION: &str = "15.1.0";

/// диапазоны CJK Unified Ideographs для 15.1.0;
/// при обновлении данных список обновляется вместе с ними
const CJK_RANGES: [(u32, u32); 10] = [
    (0x3400, 0x4DBF),   // Extension A
    (0x4E00, 0x9FFF),   // основной блок
    (0x20000, 0x2A6DF), // Extension B
    (0x2A700, 0x2B739), // Extension C
    (0x2B740, 0x2B81D), // Extension D
    (0x2B820, 0x2CEA1), // Extension E
    (0x2CEB0, 0x2EBE0), // Extension F
    (0x2EBF0, 0x2EE5D), // Extension I
    (0x30000, 0x3134A), // Extension G
    (0x31350, 0x323AF), // Extension H
];

fn main()
{
    env_logger::init();

    if let Err(error) = run() {
        eprintln!("ошибка сборки: {}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>>
{
    let dir = format!("./data/ucd/{}", VERSION);
    let read = |name: &str| fs::read_to_string(format!("{}/{}", dir, name));

    let unicode_data = read("UnicodeData.txt")?;
    let composition_exclusions = read("CompositionExclusions.txt")?;
    let line_break = read("LineBreak.txt")?;
    let east_asian_width = read("EastAsianWidth.txt")?;
    let derived_core_properties = read("DerivedCoreProperties.txt")?;
    let name_aliases = read("NameAliases.txt")?;
    let named_sequences = read("NamedSequences.txt")?;
    let case_folding = read("CaseFolding.txt")?;
    let special_casing = read("SpecialCasing.txt")?;

    // дополнительные числовые значения необязательны
    let numeric_overrides = read("NumericOverrides.txt").ok();

    let files = UcdFiles {
        unicode_data: &unicode_data,
        composition_exclusions: &composition_exclusions,
        line_break: &line_break,
        east_asian_width: &east_asian_width,
        derived_core_properties: &derived_core_properties,
        name_aliases: &name_aliases,
        named_sequences: &named_sequences,
        case_folding: &case_folding,
        special_casing: &special_casing,
        numeric_overrides: numeric_overrides.as_deref(),
    };

    let unicode = UnicodeData::load(&files)?;

    let options = CompileOptions {
        version: VERSION.to_owned(),
        page_size: 256,
        cjk_ranges: CJK_RANGES.to_vec(),
    };

    // полная сборка; инкрементальная запускается с базовой версией,
    // собранной из ее артефакта
    let compiled = compile::<PlainNameIndex>(&unicode, &options, None)?;

    output::write_database(&compiled, &mut File::create("./../data/database.rs.txt")?)?;

    Ok(())
}
