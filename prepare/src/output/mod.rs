use std::io;
use std::io::Write;

use unicode_database_source::properties::NumericValue;

use self::format::{format_num_vec, format_vec, FORMAT_STRING_LENGTH};
use crate::compile::{Baked, CompiledDatabase};

mod format;

/// записать артефакт в виде rust-литерала CharacterData, пригодного
/// для include! в крейт с данными
pub fn write_database(db: &CompiledDatabase, output: &mut impl Write) -> io::Result<()>
{
    writeln!(output, "CharacterData {{")?;
    writeln!(output, "  version: {:?},", db.version)?;

    writeln!(
        output,
        "  index: &[{}  ],",
        format_num_vec(&db.tables.index, FORMAT_STRING_LENGTH)
    )?;

    writeln!(
        output,
        "  blocks: &[{}  ],",
        format_num_vec(&db.tables.blocks, FORMAT_STRING_LENGTH)
    )?;

    writeln!(output, "  block_bits: {},", db.tables.block_bits)?;

    writeln!(
        output,
        "  records: &[{}  ],",
        format_num_vec(&db.tables.records, FORMAT_STRING_LENGTH)
    )?;

    writeln!(
        output,
        "  expansions: &[{}  ],",
        format_num_vec(&db.expansions, FORMAT_STRING_LENGTH)
    )?;

    writeln!(
        output,
        "  compositions: &[{}  ],",
        format_vec(&db.compositions, FORMAT_STRING_LENGTH, |(key, code)| {
            format!("(0x{:X}, 0x{:X})", key, code)
        })
    )?;

    writeln!(
        output,
        "  cjk_ranges: &[{}  ],",
        format_vec(&db.cjk_ranges, FORMAT_STRING_LENGTH, |(first, last)| {
            format!("(0x{:X}, 0x{:X})", first, last)
        })
    )?;

    writeln!(
        output,
        "  aliases: &[{}  ],",
        format_num_vec(&db.aliases, FORMAT_STRING_LENGTH)
    )?;

    writeln!(
        output,
        "  sequences: &[{}  ],",
        format_num_vec(&db.sequences, FORMAT_STRING_LENGTH)
    )?;

    write_mapped(output, "decimal", &db.decimal, |v| v.to_string())?;
    write_mapped(output, "digit", &db.digit, |v| v.to_string())?;
    write_mapped(output, "numeric", &db.numeric, numeric_literal)?;
    write_mapped(output, "simple_upper", &db.simple_upper, hex)?;
    write_mapped(output, "simple_lower", &db.simple_lower, hex)?;
    write_mapped(output, "simple_title", &db.simple_title, hex)?;

    write_mapped(output, "special_casing", &db.special_casing, |(l, t, u)| {
        format!("(0x{:X}, 0x{:X}, 0x{:X})", l, t, u)
    })?;

    write_mapped(output, "raw_decomposition", &db.raw_decomposition, |(tag, entry)| {
        format!("({}, 0x{:X})", tag, entry)
    })?;

    write_mapped(output, "canonical", &db.canonical, hex)?;
    write_mapped(output, "compat", &db.compat, hex)?;
    write_mapped(output, "casefold", &db.casefold, hex)?;
    write_mapped(output, "combining", &db.combining, |v| v.to_string())?;

    writeln!(output, "}}")
}

/// одно отображение в виде литерала MappedData
fn write_mapped<V>(
    output: &mut impl Write,
    name: &str,
    baked: &Baked<V>,
    value: impl Fn(&V) -> String,
) -> io::Result<()>
{
    writeln!(output, "  {}: MappedData {{", name)?;

    writeln!(
        output,
        "    direct: &[{}    ],",
        format_vec(&baked.direct, FORMAT_STRING_LENGTH, |(code, v)| {
            format!("(0x{:X}, {})", code, value(v))
        })
    )?;

    writeln!(
        output,
        "    removed: &[{}    ],",
        format_num_vec(&baked.removed, FORMAT_STRING_LENGTH)
    )?;

    writeln!(output, "  }},")
}

/// числовое значение как литерал; дроби сериализуются точно
fn numeric_literal(value: &NumericValue) -> String
{
    match value {
        NumericValue::Integer(v) => format!("NumericValue::Integer({})", v),
        NumericValue::Rational(num, den) => format!("NumericValue::Rational({}, {})", num, den),
        NumericValue::Float(v) => format!("NumericValue::Float({:?})", v),
    }
}

fn hex(value: &u32) -> String
{
    format!("0x{:X}", value)
}
