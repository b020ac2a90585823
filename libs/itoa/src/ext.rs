use std::ffi::CString;

use crate::convert::convert;
use crate::error::Result;

/// Signed integers that widen losslessly into `i32` and can be converted
/// with [`convert`].
pub trait Itoa {
    fn itoa(&self) -> Result<CString>;
}

macro_rules! itoa_impl_for_integer {
    ($int_type:ty) => {
        impl Itoa for $int_type {
            fn itoa(&self) -> Result<CString> {
                convert(i32::from(*self))
            }
        }
    };
}

itoa_impl_for_integer!(i32);
itoa_impl_for_integer!(i16);
itoa_impl_for_integer!(i8);
