// унифицированные иероглифы именуются по формуле от собственного кода;
// какие именно диапазоны считаются unified - зависит от версии Unicode,
// поэтому набор диапазонов не зашивается, а приходит из артефакта

const PREFIX: &str = "CJK UNIFIED IDEOGRAPH-";

/// кодпоинт - унифицированный иероглиф (для переданного набора диапазонов)?
#[inline]
pub fn is_unified_ideograph(code: u32, ranges: &[(u32, u32)]) -> bool
{
    ranges
        .iter()
        .any(|&(first, last)| (first ..= last).contains(&code))
}

/// название иероглифа: "CJK UNIFIED IDEOGRAPH-" + код в hex
pub fn ideograph_name(code: u32, ranges: &[(u32, u32)]) -> Option<String>
{
    match is_unified_ideograph(code, ranges) {
        true => Some(format!("{}{:04X}", PREFIX, code)),
        false => None,
    }
}

/// кодпоинт по названию иероглифа
///
/// hex-часть - 4-6 знаков верхнего регистра; ведущие нули сверх четырех
/// знаков не допускаются, поэтому разобранный код обязан форматироваться
/// обратно в ту же строку
pub fn lookup_ideograph_name(name: &str, ranges: &[(u32, u32)]) -> Option<u32>
{
    let hex = name.strip_prefix(PREFIX)?;

    if !(4 ..= 6).contains(&hex.len())
        || !hex
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'A' ..= b'F').contains(&b))
    {
        return None;
    }

    let code = u32::from_str_radix(hex, 16).ok()?;

    if format!("{:04X}", code) != hex {
        return None;
    }

    match is_unified_ideograph(code, ranges) {
        true => Some(code),
        false => None,
    }
}
