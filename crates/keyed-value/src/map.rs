use crate::error::Error;
use crate::utils::{arrays, with_row};
use crate::value::{Array, Value};

use log::debug;

/// Maps the values of `values`, keeping their keys.
///
/// Without `args`, the mapper is called with `[value, key]`.
/// Otherwise it is called with `[value, args[0][i], args[1][i], ...]`, aligned by position,
/// and the key is not passed. Mapping stops at the shortest of `values` and `args`.
///
/// For an empty `values` nothing is called and `args` is not inspected.
/// Errors returned by the mapper are passed through unchanged.
pub fn map_keys<E>(
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

    if args.is_empty() {
        debug!("map_keys: {} entries with keys", values.len());
        return keyed_map::try_map_keys(values, |v, k| mapper(&[v.clone(), Value::from(k.clone())]));
    }

    debug!("map_keys: {} entries with {} extra arguments", values.len(), args.len());

    let args = arrays(args)?;
    let columns = args.into_iter().map(|a| a.values());
    keyed_map::try_map_with(values, columns, |v, row| mapper(&with_row(v, row)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, list};

    #[test]
    fn non_array_argument() {
        let ans = map_keys(|_| Ok::<_, Error>(Value::Null), &array! { "a" => 1 }, &[Value::from("foo")]);
        assert_eq!(ans, Err(Error::InvalidArgument { index: 0, found: "string".into() }));
    }

    #[test]
    fn shortest_argument_wins() {
        let values = list!["x", "y", "z"];
        let ans = map_keys(
            |args| Ok::<_, Error>(Value::from(format!("{}{}", args[0], args[1]))),
            &values,
            &[Value::from(list![1, 2])],
        );
        assert_eq!(ans, Ok(list!["x1", "y2"]));
    }
}
