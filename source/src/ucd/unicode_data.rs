use std::collections::HashMap;

use super::{parse_code, payload};
use crate::properties::*;
use crate::LoadError;

const FILE: &str = "UnicodeData.txt";

/// количество полей в строке UnicodeData.txt
const FIELDS: usize = 15;

/// разбор UnicodeData.txt - основной таблицы свойств кодпоинтов
///
/// блоки, заданные парой строк <Name, First> / <Name, Last>, материализуются
/// целиком: каждый кодпоинт диапазона получает копию общей записи (без названия).
/// это касается и суррогатов с private use - компактная таблица обязана отвечать
/// на запрос категории для любого кодпоинта
pub fn parse(data: &str) -> Result<HashMap<u32, Codepoint>, LoadError>
{
    let mut map: HashMap<u32, Codepoint> = HashMap::new();

    // открытая граница диапазона: исходное название и запись-шаблон
    let mut range_first: Option<(String, Codepoint)> = None;
    let mut last_number = 0;

    for (number, line) in data.lines().enumerate() {
        let number = number + 1;
        last_number = number;

        let line = match payload(line) {
            Some(line) => line,
            None => continue,
        };

        let props: Vec<&str> = line.split(';').collect();

        if props.len() != FIELDS {
            return Err(LoadError::FieldCount {
                file: FILE,
                line: number,
                text: line.to_owned(),
            });
        }

        let codepoint = parse_record(&props, number)?;
        let name = props[1];

        if name.ends_with(", First>") {
            if range_first.is_some() {
                return Err(broken_range(number, line));
            }

            range_first = Some((name.to_owned(), codepoint));
            continue;
        }

        if name.ends_with(", Last>") {
            let (first_name, first) = match range_first.take() {
                Some(first) => first,
                None => return Err(broken_range(number, line)),
            };

            // названия границ должны отличаться только суффиксом
            if first.code > codepoint.code
                || first_name.trim_end_matches(", First>") != name.trim_end_matches(", Last>")
            {
                return Err(broken_range(number, line));
            }

            for code in first.code ..= codepoint.code {
                let mut entry = first.clone();

                entry.code = code;
                entry.name = None;

                insert(&mut map, entry, number)?;
            }

            continue;
        }

        insert(&mut map, codepoint, number)?;
    }

    match range_first {
        Some((name, _)) => Err(broken_range(last_number, &name)),
        None => Ok(map),
    }
}

/// одна запись таблицы из разобранных полей строки
fn parse_record(props: &[&str], number: usize) -> Result<Codepoint, LoadError>
{
    let bad_value = |text: &str| LoadError::BadValue {
        file: FILE,
        line: number,
        text: text.to_owned(),
    };

    let code = parse_code(props[0], FILE, number)?;

    // плейсхолдеры в угловых скобках (<control>, границы диапазонов) - не названия
    let name = match props[1].starts_with('<') {
        true => None,
        false => Some(props[1].to_owned()),
    };

    let gc = GeneralCategory::try_from(props[2]).map_err(|_| bad_value(props[2]))?;
    let ccc = CanonicalCombiningClass::try_from(props[3]).map_err(|_| bad_value(props[3]))?;
    let bc = BidiClass::try_from(props[4]).map_err(|_| bad_value(props[4]))?;

    let decomposition = Decomposition::try_from(props[5]).map_err(|_| bad_value(props[5]))?;

    let numeric =
        NumericType::try_from((props[6], props[7], props[8])).map_err(|_| bad_value(props[8]))?;

    let bidi_mirrored = match props[9] {
        "Y" => true,
        "N" => false,
        _ => return Err(bad_value(props[9])),
    };

    // колонки 10, 11 (Unicode_1_Name, ISO_Comment) устарели и не разбираются

    let simple_uppercase_mapping = parse_mapping(props[12], number)?;
    let simple_lowercase_mapping = parse_mapping(props[13], number)?;
    let simple_titlecase_mapping = parse_mapping(props[14], number)?;

    Ok(Codepoint {
        code,
        name,
        gc,
        ccc,
        bc,
        eaw: EastAsianWidth::Neutral,
        numeric,
        bidi_mirrored,
        simple_uppercase_mapping,
        simple_lowercase_mapping,
        simple_titlecase_mapping,
        decomposition_tag: decomposition.tag,
        decomposition: decomposition.codes,
        excluded_from_composition: false,
        mandatory_linebreak: false,
        derived: DerivedProperties::default(),
        special_casing: None,
        casefold: None,
    })
}

/// необязательное простое отображение регистра
fn parse_mapping(value: &str, number: usize) -> Result<Option<u32>, LoadError>
{
    match value.is_empty() {
        true => Ok(None),
        false => parse_code(value, FILE, number).map(Some),
    }
}

fn insert(
    map: &mut HashMap<u32, Codepoint>,
    codepoint: Codepoint,
    number: usize,
) -> Result<(), LoadError>
{
    let code = codepoint.code;

    match map.insert(code, codepoint) {
        None => Ok(()),
        Some(_) => Err(LoadError::DoubleDefinition {
            file: FILE,
            line: number,
            code,
        }),
    }
}

fn broken_range(number: usize, text: &str) -> LoadError
{
    LoadError::BrokenRange {
        file: FILE,
        line: number,
        text: text.to_owned(),
    }
}
