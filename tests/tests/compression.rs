use unicode_database::{
    FLAG_CASED, FLAG_CASE_IGNORABLE, FLAG_LINEBREAK, FLAG_MIRRORED, FLAG_UPPERCASE,
    FLAG_XID_CONTINUE, FLAG_XID_START,
};
use unicode_database_prepare::tables;
use unicode_database_tests::data;

#[test]
fn exhaustive_equivalence()
{
    let db = data::database();

    // компактная таблица обязана отвечать ровно то же, что и модель символов,
    // для каждого кодпоинта без исключения
    for code in 0 ..= 0x10FFFF {
        let expected = tables::record(&data::UNICODE, code);

        assert_eq!(db.category(code), expected.gc.abbr(), "U+{:04X}", code);
        assert_eq!(db.bidirectional(code), expected.bc.abbr(), "U+{:04X}", code);
        assert_eq!(
            db.east_asian_width(code),
            expected.eaw.abbr(),
            "U+{:04X}",
            code
        );

        assert_eq!(db.mirrored(code), expected.has(FLAG_MIRRORED), "U+{:04X}", code);
        assert_eq!(
            db.islinebreak(code),
            expected.has(FLAG_LINEBREAK),
            "U+{:04X}",
            code
        );
        assert_eq!(
            db.isxidstart(code),
            expected.has(FLAG_XID_START),
            "U+{:04X}",
            code
        );
        assert_eq!(
            db.isxidcontinue(code),
            expected.has(FLAG_XID_CONTINUE),
            "U+{:04X}",
            code
        );
        assert_eq!(
            db.iscaseignorable(code),
            expected.has(FLAG_CASE_IGNORABLE),
            "U+{:04X}",
            code
        );

        // прописная / строчная: категория или производный флаг
        let gc = expected.gc.abbr();

        assert_eq!(
            db.isupper(code),
            gc == "Lu" || expected.has(FLAG_UPPERCASE),
            "U+{:04X}",
            code
        );
        assert_eq!(
            db.iscased(code),
            expected.has(FLAG_CASED) || matches!(gc, "Lu" | "Ll" | "Lt"),
            "U+{:04X}",
            code
        );
    }
}

#[test]
fn pool_bounds()
{
    // пулы записей и блоков укладываются в байтовый индекс
    assert!(data::COMPILED.tables.records.len() <= tables::MAX_POOL);
    assert!(data::COMPILED.tables.blocks.len() % 256 == 0);
    assert!(data::COMPILED.tables.blocks.len() / 256 <= tables::MAX_POOL);

    // индекс покрывает все пространство кодпоинтов
    assert_eq!(data::COMPILED.tables.index.len(), 0x110000 / 256);
}

#[test]
fn combining_equivalence()
{
    let db = data::database();

    for code in 0 ..= 0x10FFFF {
        let expected = match data::UNICODE.get(code) {
            Some(codepoint) => u8::from(codepoint.ccc),
            None => 0,
        };

        assert_eq!(db.combining(code), expected, "U+{:04X}", code);
    }
}
