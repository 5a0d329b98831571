use unicode_database_tests::data;

#[test]
fn pairs()
{
    let db = data::database();

    assert_eq!(db.composition(0x41, 0x300), Some(0xC0));
    assert_eq!(db.composition(0x61, 0x300), Some(0xE0));
    assert_eq!(db.composition(0x41, 0x30A), Some(0xC5));
    assert_eq!(db.composition(0x61, 0x30A), Some(0xE5));

    assert_eq!(db.composition(0x41, 0x301), None);
    assert_eq!(db.composition(0x300, 0x41), None);
}

#[test]
fn exclusions()
{
    let db = data::database();

    // исключение композиции: декомпозиция есть, пары - нет
    assert_eq!(db.canon_decomposition(0x958), &[0x915, 0x93C]);
    assert_eq!(db.composition(0x915, 0x93C), None);
}

#[test]
fn singletons_are_not_pairs()
{
    let db = data::database();

    // синглтон (ANGSTROM SIGN) не порождает пары
    assert_eq!(db.composition(0xC5, 0), None);
    assert_eq!(db.composition(0x41, 0xC5), None);
}

#[test]
fn consistency()
{
    let db = data::database();

    // для каждой пары (a, b) -> c: каноническая декомпозиция c - это [a, b],
    // и c не исключен из композиции
    for &(key, composed) in data::COMPILED.compositions.iter() {
        let starter = (key >> 32) as u32;
        let combining = key as u32;

        assert_eq!(
            db.canon_decomposition(composed),
            &[starter, combining],
            "U+{:04X}",
            composed
        );

        let codepoint = data::UNICODE.get(composed).unwrap();

        assert!(!codepoint.excluded_from_composition);
        assert_eq!(db.composition(starter, combining), Some(composed));
    }
}
