use unicode_database::{CharacterDatabase, QueryError};
use unicode_database_prepare::compile::compile;
use unicode_database_prepare::names::build_name_index;
use unicode_database_source::properties::NumericValue;
use unicode_database_source::{UcdFiles, UnicodeData};
use unicode_database_tests::data;

/// вторая версия снапшота: у U+0F33 отобрано числовое значение,
/// у U+00BC дробь изменена с 1/4 на 3/4
fn v2_unicode_data() -> String
{
    data::UNICODE_DATA
        .replace(
            "0F33;TIBETAN DIGIT HALF ZERO;No;0;L;;;;-1/2;N;;;;;",
            "0F33;TIBETAN DIGIT HALF ZERO;No;0;L;;;;;N;;;;;",
        )
        .replace(
            "00BC;VULGAR FRACTION ONE QUARTER;No;0;ON;<fraction> 0031 2044 0034;;;1/4;N;;;;;",
            "00BC;VULGAR FRACTION ONE QUARTER;No;0;ON;<fraction> 0031 2044 0034;;;3/4;N;;;;;",
        )
}

#[test]
fn removed_key_is_not_resurrected()
{
    let base = data::database();

    let v2_data = v2_unicode_data();
    let mut files: UcdFiles = data::files();
    files.unicode_data = &v2_data;

    let unicode2 = UnicodeData::load(&files).unwrap();
    let compiled2 = compile(&unicode2, &data::options(), Some(&base)).unwrap();

    let db2 = CharacterDatabase::with_base(
        compiled2.as_data(),
        build_name_index(&compiled2.name_entries),
        &base,
    );

    // ключ, существующий в базе, но удаленный во второй версии,
    // закрыт надгробием - проваливаться в базу нельзя
    assert_eq!(db2.numeric(0xF33), Err(QueryError::NotFound));
    assert!(!db2.isnumeric(0xF33));

    // базовая версия при этом отвечает по-прежнему
    assert_eq!(base.numeric(0xF33), Ok(NumericValue::Rational(-1, 2)));

    // измененное значение перекрыто
    assert_eq!(db2.numeric(0xBC), Ok(NumericValue::Rational(3, 4)));
    assert_eq!(base.numeric(0xBC), Ok(NumericValue::Rational(1, 4)));

    // неизменившиеся значения наследуются от базы
    assert_eq!(db2.numeric(0x31), Ok(NumericValue::Integer(1)));
    assert_eq!(db2.decimal(0x30), Ok(0));
    assert_eq!(db2.casefold_lookup(0xDF), Some(&[0x73, 0x73][..]));
}

#[test]
fn delta_is_sparse()
{
    let base = data::database();

    let v2_data = v2_unicode_data();
    let mut files: UcdFiles = data::files();
    files.unicode_data = &v2_data;

    let unicode2 = UnicodeData::load(&files).unwrap();
    let compiled2 = compile(&unicode2, &data::options(), Some(&base)).unwrap();

    // дельта содержит ровно изменившееся: одна перекрытая дробь,
    // одно надгробие
    assert_eq!(compiled2.numeric.direct.len(), 1);
    assert_eq!(compiled2.numeric.direct[0].0, 0xBC);
    assert_eq!(compiled2.numeric.removed, vec![0xF33]);

    // нетронутые отображения - пустые дельты
    assert!(compiled2.decimal.direct.is_empty());
    assert!(compiled2.decimal.removed.is_empty());
    assert!(compiled2.casefold.direct.is_empty());
    assert!(compiled2.simple_upper.direct.is_empty());
    assert!(compiled2.canonical.direct.is_empty());
    assert!(compiled2.combining.direct.is_empty());
}

#[test]
fn identical_rebuild_is_empty_delta()
{
    let base = data::database();

    let compiled2 = compile(&data::UNICODE, &data::options(), Some(&base)).unwrap();

    // пересборка той же версии против самой себя - дельты пусты целиком
    assert!(compiled2.numeric.direct.is_empty());
    assert!(compiled2.numeric.removed.is_empty());
    assert!(compiled2.special_casing.direct.is_empty());
    assert!(compiled2.raw_decomposition.direct.is_empty());
    assert!(compiled2.compat.direct.is_empty());
    assert!(compiled2.digit.removed.is_empty());
}
