//! Decimal conversion of signed 32-bit integers into owned, NUL-terminated strings.

mod convert;
pub use crate::convert::{convert, digit_count, formatted_len};

mod error;
pub use crate::error::{Error, Result};

mod ext;
pub use crate::ext::Itoa;
