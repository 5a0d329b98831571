use unicode_database::{QueryError, NAMED_SEQUENCES_START, NAME_ALIASES_START};
use unicode_database_tests::data;

#[test]
fn explicit_roundtrip()
{
    let db = data::database();

    // каждый кодпоинт с явным названием находится по нему обратно
    for codepoint in data::UNICODE.iter() {
        if codepoint.name.is_none() {
            continue;
        }

        let name = db.name(codepoint.code).unwrap();

        assert_eq!(name.as_str(), codepoint.name.as_deref().unwrap());
        assert_eq!(db.lookup(&name, false), Ok(codepoint.code), "{}", name);
    }
}

#[test]
fn explicit_lookup()
{
    let db = data::database();

    assert_eq!(db.lookup("SPACE", false), Ok(0x20));
    assert_eq!(db.lookup("LATIN CAPITAL LETTER A", false), Ok(0x41));

    assert_eq!(
        db.lookup("NOT A CHARACTER NAME", false),
        Err(QueryError::InvalidName("NOT A CHARACTER NAME".to_owned()))
    );

    // плейсхолдеры и диапазоны названий не имеют
    assert_eq!(db.name(0x0000), Err(QueryError::NotFound));
    assert_eq!(db.name(0xE123), Err(QueryError::NotFound));
    assert_eq!(db.name(0x10FFFF), Err(QueryError::NotFound));
}

#[test]
fn hangul()
{
    let db = data::database();

    assert_eq!(db.name(0xAC00).unwrap(), "HANGUL SYLLABLE GA");
    assert_eq!(db.lookup("HANGUL SYLLABLE GA", false), Ok(0xAC00));

    assert_eq!(db.name(0xD55C).unwrap(), "HANGUL SYLLABLE HAN");
    assert_eq!(db.lookup("HANGUL SYLLABLE HAN", false), Ok(0xD55C));

    // обратная сторона формулы обязана разбирать жадно: "GGAG", а не "G" + ...
    assert_eq!(
        db.lookup("HANGUL SYLLABLE GGAG", false),
        Ok(0xAC00 + 588 + 1)
    );
}

#[test]
fn cjk()
{
    let db = data::database();

    assert_eq!(db.name(0x4E00).unwrap(), "CJK UNIFIED IDEOGRAPH-4E00");
    assert_eq!(db.lookup("CJK UNIFIED IDEOGRAPH-4E00", false), Ok(0x4E00));
    assert_eq!(db.lookup("CJK UNIFIED IDEOGRAPH-3400", false), Ok(0x3400));

    // вне версионных диапазонов иероглифов нет
    assert!(db.lookup("CJK UNIFIED IDEOGRAPH-20000", false).is_err());
    assert_eq!(db.name(0x20000), Err(QueryError::NotFound));

    // ведущие нули и нижний регистр не принимаются
    assert!(db.lookup("CJK UNIFIED IDEOGRAPH-04E00", false).is_err());
    assert!(db.lookup("CJK UNIFIED IDEOGRAPH-4e00", false).is_err());
}

#[test]
fn aliases()
{
    let db = data::database();

    // алиас разрешается только через lookup_with_alias
    assert_eq!(db.lookup_with_alias("LINE FEED"), Ok(0x0A));
    assert_eq!(db.lookup_with_alias("LF"), Ok(0x0A));
    assert_eq!(db.lookup_with_alias("NULL"), Ok(0x00));

    assert_eq!(
        db.lookup("LINE FEED", false),
        Err(QueryError::InvalidName("LINE FEED".to_owned()))
    );

    // обычные названия через lookup_with_alias тоже работают
    assert_eq!(db.lookup_with_alias("SPACE"), Ok(0x20));
}

#[test]
fn named_sequences()
{
    let db = data::database();

    let name = "LATIN CAPITAL LETTER A WITH GRAVE AND OGONEK";

    // без флага последовательность не разрешается
    assert_eq!(
        db.lookup(name, false),
        Err(QueryError::InvalidName(name.to_owned()))
    );

    let slot = db.lookup(name, true).unwrap();

    assert_eq!(slot, NAMED_SEQUENCES_START);
    assert_eq!(db.lookup_named_sequence(slot), Some(&[0xC0, 0x328][..]));

    let slot = db
        .lookup("GREEK SMALL LETTER ALPHA WITH GRAVE", true)
        .unwrap();

    assert_eq!(slot, NAMED_SEQUENCES_START + 1);
    assert_eq!(db.lookup_named_sequence(slot), Some(&[0x3B1, 0x300][..]));

    // обычный кодпоинт последовательностью не является
    assert_eq!(db.lookup_named_sequence(0x41), None);
}

#[test]
fn reserved_ranges()
{
    let db = data::database();

    // синтетические слоты не запрашиваются напрямую
    assert_eq!(
        db.name(NAME_ALIASES_START),
        Err(QueryError::ReservedCodepoint(NAME_ALIASES_START))
    );
    assert_eq!(
        db.name(NAMED_SEQUENCES_START + 1),
        Err(QueryError::ReservedCodepoint(NAMED_SEQUENCES_START + 1))
    );
}
