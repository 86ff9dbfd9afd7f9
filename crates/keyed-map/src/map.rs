use crate::zip::rows;

use std::convert::Infallible;
use std::hash::Hash;

use indexmap::IndexMap;
use log::{debug, trace};

pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(val) => val,
        Err(never) => match never {},
    }
}

/// Maps every value of `values`, passing its key as the second argument.
///
/// The result has the same keys in the same order.
/// `f` is never called for an empty input.
pub fn map_keys<K, V, U>(values: &IndexMap<K, V>, mut f: impl FnMut(&V, &K) -> U) -> IndexMap<K, U>
where
    K: Hash + Eq + Clone,
{
    infallible(try_map_keys(values, |v, k| Ok(f(v, k))))
}

/// Fallible [`map_keys`]. The first error returned by `f` is passed through as is.
pub fn try_map_keys<K, V, U, E>(
    values: &IndexMap<K, V>,
    mut f: impl FnMut(&V, &K) -> Result<U, E>,
) -> Result<IndexMap<K, U>, E>
where
    K: Hash + Eq + Clone,
{
    if values.is_empty() {
        return Ok(IndexMap::new());
    }

    trace!("map_keys: {} entries", values.len());

    let mut ans = IndexMap::with_capacity(values.len());
    for (key, value) in values {
        let mapped = f(value, key)?;
        ans.insert(key.clone(), mapped);
    }
    Ok(ans)
}

/// Maps every value of `values` together with the elements of `args` at the same position.
///
/// `f` receives the value and one element from each of `args`, in order. The key is not passed;
/// supply the keys as one of `args` when the mapper needs them.
///
/// The result reuses the keys of `values`. If any of `args` is shorter than `values`,
/// mapping stops there and the remaining keys are left out.
///
/// `args` is not touched at all when `values` is empty.
pub fn map_with<K, V, T, U>(
    values: &IndexMap<K, V>,
    args: impl IntoIterator<Item = T>,
    mut f: impl FnMut(&V, Vec<T::Item>) -> U,
) -> IndexMap<K, U>
where
    K: Hash + Eq + Clone,
    T: IntoIterator,
{
    infallible(try_map_with(values, args, |v, row| Ok(f(v, row))))
}

/// Fallible [`map_with`]. The first error returned by `f` is passed through as is.
pub fn try_map_with<K, V, T, U, E>(
    values: &IndexMap<K, V>,
    args: impl IntoIterator<Item = T>,
    mut f: impl FnMut(&V, Vec<T::Item>) -> Result<U, E>,
) -> Result<IndexMap<K, U>, E>
where
    K: Hash + Eq + Clone,
    T: IntoIterator,
{
    if values.is_empty() {
        return Ok(IndexMap::new());
    }

    let mut ans = IndexMap::with_capacity(values.len());
    for ((key, value), row) in values.iter().zip(rows(args)) {
        let mapped = f(value, row)?;
        ans.insert(key.clone(), mapped);
    }

    if ans.len() < values.len() {
        debug!("map_with: arguments exhausted after {} of {} entries", ans.len(), values.len());
    }

    Ok(ans)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt::Display;

    fn abc() -> IndexMap<&'static str, &'static str> {
        IndexMap::from([("a", "aaa"), ("b", "bbb")])
    }

    #[test]
    fn key_as_second_argument() {
        let ans = map_keys(&abc(), |v, k| format!("{v}{}", k.to_uppercase()));
        let expected = IndexMap::from([("a", "aaaA".to_owned()), ("b", "bbbB".to_owned())]);
        assert_eq!(ans, expected);
        assert!(ans.keys().eq(abc().keys()));
    }

    #[test]
    fn integer_keys() {
        let input = IndexMap::from([(0, "aaa"), (42, "bbb")]);
        let ans = map_keys(&input, |v, k| format!("{}{}{k}", v[..1].to_uppercase(), &v[1..]));
        assert_eq!(ans, IndexMap::from([(0, "Aaa0".to_owned()), (42, "Bbb42".to_owned())]));
    }

    #[test]
    fn key_order_is_kept() {
        let input = IndexMap::from([("z", 1), ("a", 2), ("m", 3)]);
        let ans = map_keys(&input, |v, _| v * 10);
        assert_eq!(ans.into_iter().collect::<Vec<_>>(), [("z", 10), ("a", 20), ("m", 30)]);
    }

    #[test]
    fn positional_arguments() {
        let arg1: Vec<&dyn Display> = vec![&"+", &"-"];
        let arg2: Vec<&dyn Display> = vec![&42, &123];

        let mut calls = Vec::new();
        let ans = map_with(&abc(), [arg1, arg2], |v, row| {
            calls.push(row.len());
            format!("{v}{}{}", row[0], row[1])
        });

        assert_eq!(ans, IndexMap::from([("a", "aaa+42".to_owned()), ("b", "bbb-123".to_owned())]));
        assert_eq!(calls, [2, 2]);
    }

    #[test]
    fn keys_through_arguments() {
        let input = abc();
        let keys: Vec<String> = input.keys().map(|k| k.to_string()).collect();
        let signs: Vec<String> = vec!["+".into(), "-".into()];

        let ans = map_with(&input, [keys, signs], |v, row| format!("{v}{}{}", row[1], row[0]));
        assert_eq!(ans, IndexMap::from([("a", "aaa+a".to_owned()), ("b", "bbb-b".to_owned())]));
    }

    #[test]
    fn shortest_argument_wins() {
        let input = IndexMap::from([("a", 1), ("b", 2), ("c", 3)]);
        let ans = map_with(&input, [vec![10, 20]], |v, row| v + row[0]);
        assert_eq!(ans, IndexMap::from([("a", 11), ("b", 22)]));
    }

    #[test]
    fn empty_input_never_calls() {
        let empty: IndexMap<&str, &str> = IndexMap::new();

        let ans = map_keys(&empty, |_, _| -> String { panic!("mapper called") });
        assert!(ans.is_empty());

        let args = std::iter::from_fn(|| -> Option<Vec<u8>> { panic!("arguments iterated") });
        let ans = map_with(&empty, args, |_, _| -> String { panic!("mapper called") });
        assert!(ans.is_empty());
    }

    #[test]
    fn mapper_error_passes_through() {
        #[derive(Debug, PartialEq)]
        struct Boom(&'static str);

        let mut seen = Vec::new();
        let ans = try_map_keys(&abc(), |_, k| {
            seen.push(*k);
            if *k == "a" {
                Err(Boom("a"))
            } else {
                Ok(())
            }
        });
        assert_eq!(ans, Err(Boom("a")));
        assert_eq!(seen, ["a"]);
    }
}
