mod common;

use common::MockDao;
use lexattr_record::{Error, Item, MemItemStore, Record, RecordMapper, RecordMeta};
use lexattr_test_utils::init_tracing_for_tests;
use lexattr_types::DecodeError;
use time::macros::datetime;

fn stored_item() -> Item {
    Item::new("12345")
        .with_value("created", "2012-11-05T16:07:29+00:00")
        .with_value("updated", "2012-11-06T08:00:00+00:00")
        .with_value("str_value", "hello")
        .with_value("int_value_1", "0000000000002012")
        .with_value("misc_time", "2012-04-07T08:30:45-04:00")
}

#[test]
fn item_fields_are_decoded() {
    init_tracing_for_tests();
    let mapper = RecordMapper::new();

    let dao: MockDao = mapper.from_item(&stored_item()).unwrap();

    assert_eq!(dao.name(), Some("12345"));
    assert_eq!(dao.meta.created, Some(datetime!(2012-11-05 16:07:29 UTC)));
    assert_eq!(dao.meta.updated, Some(datetime!(2012-11-06 08:00 UTC)));
    assert_eq!(dao.str_value.as_deref(), Some("hello"));
    assert_eq!(dao.int_value_1, Some(2012));
    assert_eq!(dao.misc_time, Some(datetime!(2012-04-07 12:30:45 UTC)));
    assert_eq!(dao.int_value_2, None);
}

#[test]
fn big_integer_fields_decode_the_shifted_range() {
    init_tracing_for_tests();
    let mapper = RecordMapper::new();

    let item = Item::new("big")
        .with_value("int_value_4", "00000000000000000000")
        .with_value("int_value_5", "18446744073709551616");
    let dao: MockDao = mapper.from_item(&item).unwrap();

    assert_eq!(dao.int_value_4, Some(i64::MIN));
    assert_eq!(dao.int_value_5, Some(1 << 63));
}

#[test]
fn undeclared_attributes_are_ignored() {
    init_tracing_for_tests();
    let mapper = RecordMapper::new();

    let item = Item::new("x")
        .with_value("legacy_column", "whatever")
        .with_value("bool_value", "false");
    let dao: MockDao = mapper.from_item(&item).unwrap();

    assert_eq!(dao.bool_value, Some(false));
    assert_eq!(dao.meta, RecordMeta::with_name("x"));
}

#[test]
fn first_value_wins_for_multi_valued_attributes() {
    init_tracing_for_tests();
    let mapper = RecordMapper::new();

    let item = Item::new("x")
        .with_value("str_value", "one")
        .with_value("str_value", "two");
    let dao: MockDao = mapper.from_item(&item).unwrap();

    assert_eq!(dao.str_value.as_deref(), Some("one"));
}

#[test]
fn malformed_values_fail_with_the_attribute_name() {
    init_tracing_for_tests();
    let mapper = RecordMapper::new();

    let cases = [
        ("int_value_3", "12a", DecodeError::InvalidInteger),
        ("float_value", "two", DecodeError::InvalidFloat),
        ("bool_value", "yes", DecodeError::InvalidBoolean),
        ("misc_time", "yesterday", DecodeError::InvalidTimestamp),
        ("created", "2012-11-05", DecodeError::InvalidTimestamp),
    ];
    for (attribute, text, expected) in cases {
        let item = Item::new("bad").with_value(attribute, text);
        let err = mapper.from_item::<MockDao>(&item).unwrap_err();
        assert_eq!(err, Error::decode(attribute, expected), "{attribute}={text}");
    }
}

#[test]
fn first_malformed_field_in_declaration_order_is_reported() {
    init_tracing_for_tests();
    let mapper = RecordMapper::new();

    // Declared order: int_value_1 .. int_value_5, float_value, bool_value, misc_time.
    let item = Item::new("bad")
        .with_value("misc_time", "later")
        .with_value("bool_value", "nah")
        .with_value("float_value", "pi")
        .with_value("int_value_2", "x")
        .with_value("legacy", "ignored");
    let err = mapper.from_item::<MockDao>(&item).unwrap_err();
    assert_eq!(err, Error::decode("int_value_2", DecodeError::InvalidInteger));
}

#[test]
fn value_outside_the_field_type_is_rejected() {
    init_tracing_for_tests();
    let mapper = RecordMapper::new();

    // 2^63 fits the encoding but not an i64 field.
    let item = Item::new("wide").with_value("int_value_4", "18446744073709551616");
    let err = mapper.from_item::<MockDao>(&item).unwrap_err();

    assert!(matches!(
        err,
        Error::Decode {
            ref attribute,
            source: DecodeError::IntegerOutOfRange,
        } if attribute == "int_value_4"
    ));
}

#[test]
fn saved_record_loads_back() {
    init_tracing_for_tests();
    let store = MemItemStore::new();
    let mapper = RecordMapper::new();

    let mut dao = MockDao {
        str_value: Some("round trip".into()),
        int_value_1: Some(329000),
        int_value_4: Some(-42),
        float_value: Some(-0.125),
        bool_value: Some(true),
        misc_time: Some(datetime!(2012-12-05 10:11:12 UTC)),
        ..MockDao::default()
    };
    mapper.save(&mut dao, &store).unwrap();
    let name = dao.name().unwrap().to_owned();

    let loaded: MockDao = mapper.load(&store, &name).unwrap().unwrap();

    // Lifecycle stamps come from the system clock and lose sub-second precision.
    let truncate = |t: time::OffsetDateTime| t.replace_nanosecond(0).unwrap();
    assert_eq!(loaded.meta.created, dao.meta.created.map(truncate));
    assert_eq!(loaded.meta.updated, dao.meta.updated.map(truncate));
    assert_eq!(
        MockDao { meta: dao.meta.clone(), ..loaded },
        dao
    );
}

#[test]
fn loading_an_unknown_name_returns_none() {
    init_tracing_for_tests();
    let store = MemItemStore::new();
    let mapper = RecordMapper::new();

    let loaded: Option<MockDao> = mapper.load(&store, "nope").unwrap();
    assert!(loaded.is_none());
    assert!(store.is_empty().unwrap());
}
