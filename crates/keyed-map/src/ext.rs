use std::hash::Hash;

use indexmap::IndexMap;

/// Method forms of [`map_keys`](crate::map_keys) and [`remap`](crate::remap).
pub trait KeyedMapExt<K, V> {
    fn map_keys<U>(&self, f: impl FnMut(&V, &K) -> U) -> IndexMap<K, U>;

    fn try_map_keys<U, E>(&self, f: impl FnMut(&V, &K) -> Result<U, E>) -> Result<IndexMap<K, U>, E>;

    fn remap<K2, U>(&self, f: impl FnMut(&V, &K) -> (K2, U)) -> IndexMap<K2, U>
    where
        K2: Hash + Eq;

    fn try_remap<K2, U, E>(&self, f: impl FnMut(&V, &K) -> Result<(K2, U), E>) -> Result<IndexMap<K2, U>, E>
    where
        K2: Hash + Eq;
}

impl<K, V> KeyedMapExt<K, V> for IndexMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn map_keys<U>(&self, f: impl FnMut(&V, &K) -> U) -> IndexMap<K, U> {
        crate::map_keys(self, f)
    }

    fn try_map_keys<U, E>(&self, f: impl FnMut(&V, &K) -> Result<U, E>) -> Result<IndexMap<K, U>, E> {
        crate::try_map_keys(self, f)
    }

    fn remap<K2, U>(&self, f: impl FnMut(&V, &K) -> (K2, U)) -> IndexMap<K2, U>
    where
        K2: Hash + Eq,
    {
        crate::remap(self, f)
    }

    fn try_remap<K2, U, E>(&self, f: impl FnMut(&V, &K) -> Result<(K2, U), E>) -> Result<IndexMap<K2, U>, E>
    where
        K2: Hash + Eq,
    {
        crate::try_remap(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_forms() {
        let lengths = IndexMap::from([("one", 3), ("three", 5), ("two", 3)]);

        let doubled = lengths.map_keys(|len, _| len * 2);
        assert_eq!(doubled, IndexMap::from([("one", 6), ("three", 10), ("two", 6)]));

        let by_len = lengths.remap(|len, word| (*len, *word));
        assert_eq!(by_len.into_iter().collect::<Vec<_>>(), [(3, "two"), (5, "three")]);

        let checked = lengths.try_remap(|len, word| if *len > 4 { Err(*word) } else { Ok((*word, ())) });
        assert_eq!(checked, Err("three"));
    }
}
