// слоги хангыль не хранятся ни в таблице названий, ни в таблицах декомпозиций -
// и название, и код выводятся по формулам из TR: слог = L + V (+ T)

/// начало блока слогов хангыль
pub const S_BASE: u32 = 0xAC00;
/// количество ведущих согласных (L)
pub const L_COUNT: u32 = 19;
/// количество гласных (V)
pub const V_COUNT: u32 = 21;
/// количество завершающих согласных (T), включая отсутствующую
pub const T_COUNT: u32 = 28;
/// кодпоинтов на одну ведущую согласную
pub const N_COUNT: u32 = V_COUNT * T_COUNT;
/// количество слогов хангыль
pub const S_COUNT: u32 = L_COUNT * N_COUNT;

const PREFIX: &str = "HANGUL SYLLABLE ";

/// короткие названия ведущих согласных; пустая строка - немая согласная (иынг)
const JAMO_L: [&str; L_COUNT as usize] = [
    "G", "GG", "N", "D", "DD", "R", "M", "B", "BB", "S", "SS", "", "J", "JJ", "C", "K", "T", "P",
    "H",
];

/// короткие названия гласных
const JAMO_V: [&str; V_COUNT as usize] = [
    "A", "AE", "YA", "YAE", "EO", "E", "YEO", "YE", "O", "WA", "WAE", "OE", "YO", "U", "WEO", "WE",
    "WI", "YU", "EU", "YI", "I",
];

/// короткие названия завершающих согласных; пустая строка - слог LV без T
const JAMO_T: [&str; T_COUNT as usize] = [
    "", "G", "GG", "GS", "N", "NJ", "NH", "D", "L", "LG", "LM", "LB", "LS", "LT", "LP", "LH", "M",
    "B", "BS", "S", "SS", "NG", "J", "C", "K", "T", "P", "H",
];

/// кодпоинт - слог хангыль?
#[inline]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(S_BASE) < S_COUNT
}

/// название слога по формуле: "HANGUL SYLLABLE " + L + V + T
pub fn syllable_name(code: u32) -> Option<String>
{
    let syllable = code.wrapping_sub(S_BASE);

    if syllable >= S_COUNT {
        return None;
    }

    let l = (syllable / N_COUNT) as usize;
    let v = (syllable % N_COUNT / T_COUNT) as usize;
    let t = (syllable % T_COUNT) as usize;

    Some(format!("{}{}{}{}", PREFIX, JAMO_L[l], JAMO_V[v], JAMO_T[t]))
}

/// кодпоинт слога по названию
///
/// названия чамо имеют разную длину, и одни являются префиксами других
/// ("G" и "GG", пустая строка и что угодно) - на каждой из трех позиций
/// жадно берется самое длинное подходящее название. разбор фиксированной
/// ширины или первым совпадением дал бы ложные результаты
pub fn lookup_syllable_name(name: &str) -> Option<u32>
{
    let rest = name.strip_prefix(PREFIX)?;

    let (l, rest) = longest_jamo(rest, &JAMO_L)?;
    let (v, rest) = longest_jamo(rest, &JAMO_V)?;
    let (t, rest) = longest_jamo(rest, &JAMO_T)?;

    match rest.is_empty() {
        true => Some(S_BASE + (l * V_COUNT + v) * T_COUNT + t),
        false => None,
    }
}

/// самое длинное название чамо, являющееся префиксом строки
fn longest_jamo<'a>(rest: &'a str, table: &[&str]) -> Option<(u32, &'a str)>
{
    let mut found: Option<(u32, &'a str)> = None;
    let mut found_len = 0;

    for (index, jamo) in table.iter().enumerate() {
        if let Some(tail) = rest.strip_prefix(jamo) {
            if found.is_none() || jamo.len() > found_len {
                found = Some((index as u32, tail));
                found_len = jamo.len();
            }
        }
    }

    found
}
