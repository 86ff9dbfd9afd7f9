use crate::error::Error;
use crate::value::{Array, Value};

use std::iter;

/// Checks that every extra argument is an array.
pub fn arrays(args: &[Value]) -> Result<Vec<&Array>, Error> {
    let mut ans = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        match arg.as_array() {
            Some(a) => ans.push(a),
            None => return Err(Error::InvalidArgument { index, found: arg.describe() }),
        }
    }
    Ok(ans)
}

/// Mapper arguments for the positional convention: the value, then one element per extra argument.
pub fn with_row(value: &Value, row: Vec<&Value>) -> Vec<Value> {
    iter::once(value).chain(row).cloned().collect()
}
