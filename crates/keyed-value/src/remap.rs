use crate::error::Error;
use crate::key::Key;
use crate::utils::{arrays, with_row};
use crate::value::{Array, Value};

use log::debug;

/// Builds a new array from the `[key => value]` pairs returned by the mapper.
///
/// The mapper is called as in [`map_keys`](crate::map_keys). Every call must return an
/// array with exactly one entry, otherwise [`Error::InvalidMapperResult`] is returned
/// right away and no further element is mapped.
///
/// A key returned more than once keeps the position of its first occurrence
/// and the value of its last one.
pub fn remap<E>(
    mut mapper: impl FnMut(&[Value]) -> Result<Value, E>,
    values: &Array,
    args: &[Value],
) -> Result<Array, E>
where
    E: From<Error>,
{
    if values.is_empty() {
        return Ok(Array::new());
    }

    let mut call = |input: &[Value]| -> Result<(Key, Value), E> {
        let ans = mapper(input)?;
        Ok(ans.into_pair()?)
    };

    if args.is_empty() {
        debug!("remap: {} entries with keys", values.len());
        return keyed_map::try_remap(values, |v, k| call(&[v.clone(), Value::from(k.clone())]));
    }

    debug!("remap: {} entries with {} extra arguments", values.len(), args.len());

    let args = arrays(args)?;
    let columns = args.into_iter().map(|a| a.values());
    keyed_map::try_remap_with(values, columns, |v, row| call(&with_row(v, row)))
}
