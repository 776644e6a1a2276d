//! Conversion between [`Value`](failsafe_core::Value) and JSON
//!
//! | Value | JSON |
//! |-------|------|
//! | Null | `null` |
//! | Bool | `true`/`false` |
//! | Int | integer number |
//! | Float (finite) | number with a fraction or exponent |
//! | Float (NaN, ±Inf) | `null` |
//! | String | string |
//! | Array | array |
//! | Object | object |
//! | Callable | not encodable |

mod decode;
mod encode;

pub use decode::from_json;
pub use encode::{to_json, EncodeError};
