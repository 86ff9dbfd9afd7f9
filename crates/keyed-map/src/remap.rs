use crate::map::infallible;
use crate::zip::rows;

use std::hash::Hash;

use indexmap::IndexMap;
use log::{debug, trace};

/// Builds a new map from the `(key, value)` pairs returned by `f`.
///
/// `f` receives each value and its key. When `f` returns a key that is already present,
/// the later value replaces the former one while the key keeps the position of its first
/// occurrence.
pub fn remap<K, V, K2, U>(values: &IndexMap<K, V>, mut f: impl FnMut(&V, &K) -> (K2, U)) -> IndexMap<K2, U>
where
    K2: Hash + Eq,
{
    infallible(try_remap(values, |v, k| Ok(f(v, k))))
}

/// Fallible [`remap`]. Stops at the first error returned by `f`, discarding the pairs folded so far.
pub fn try_remap<K, V, K2, U, E>(
    values: &IndexMap<K, V>,
    mut f: impl FnMut(&V, &K) -> Result<(K2, U), E>,
) -> Result<IndexMap<K2, U>, E>
where
    K2: Hash + Eq,
{
    if values.is_empty() {
        return Ok(IndexMap::new());
    }

    trace!("remap: {} entries", values.len());

    fold(values.iter().map(|(k, v)| f(v, k)), values.len())
}

/// [`remap`] with positional arguments, see [`map_with`](crate::map_with) for how they are passed.
pub fn remap_with<K, V, T, K2, U>(
    values: &IndexMap<K, V>,
    args: impl IntoIterator<Item = T>,
    mut f: impl FnMut(&V, Vec<T::Item>) -> (K2, U),
) -> IndexMap<K2, U>
where
    T: IntoIterator,
    K2: Hash + Eq,
{
    infallible(try_remap_with(values, args, |v, row| Ok(f(v, row))))
}

pub fn try_remap_with<K, V, T, K2, U, E>(
    values: &IndexMap<K, V>,
    args: impl IntoIterator<Item = T>,
    mut f: impl FnMut(&V, Vec<T::Item>) -> Result<(K2, U), E>,
) -> Result<IndexMap<K2, U>, E>
where
    T: IntoIterator,
    K2: Hash + Eq,
{
    if values.is_empty() {
        return Ok(IndexMap::new());
    }

    let pairs = values.values().zip(rows(args)).map(|(v, row)| f(v, row));
    fold(pairs, values.len())
}

/// Inserts each pair in order. Existing keys are overwritten in place.
fn fold<K, U, E>(
    pairs: impl Iterator<Item = Result<(K, U), E>>,
    capacity: usize,
) -> Result<IndexMap<K, U>, E>
where
    K: Hash + Eq,
{
    let mut ans = IndexMap::with_capacity(capacity);
    let mut overwritten = 0_usize;

    for pair in pairs {
        let (key, value) = pair?;
        if ans.insert(key, value).is_some() {
            overwritten += 1;
        }
    }

    if overwritten > 0 {
        debug!("remap: {overwritten} values overwritten, {} keys left", ans.len());
    }

    Ok(ans)
}
