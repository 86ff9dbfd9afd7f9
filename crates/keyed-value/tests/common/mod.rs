use keyed_value::Array;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Same entries in the same order.
#[track_caller]
pub fn assert_same(actual: &Array, expected: &Array) {
    let actual: Vec<_> = actual.iter().collect();
    let expected: Vec<_> = expected.iter().collect();
    assert_eq!(actual, expected);
}
