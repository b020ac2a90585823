use std::ffi::CString;

use crate::error::Result;

/// Converts `n` into its base-10 representation.
///
/// The returned string owns a single allocation holding the digits, a
/// leading `'-'` for negative values and the trailing NUL terminator.
///
/// # Errors
///
/// Returns an allocation error if the output buffer cannot be reserved.
pub fn convert(n: i32) -> Result<CString> {
    // i32::MIN has no positive counterpart in i32
    let mut nbr = i64::from(n);
    let len = encoded_len(nbr);
    let mut buf = alloc_buffer(len)?;

    if nbr < 0 {
        nbr = -nbr;
    }

    let mut i = len;
    while nbr != 0 {
        i -= 1;
        buf[i] = b'0' + (nbr % 10) as u8;
        nbr /= 10;
    }

    if n < 0 {
        buf[0] = b'-';
    }

    debug_assert!(buf[..len].iter().all(|b| *b != 0) && buf[len] == 0);
    // SAFETY: every byte before `len` holds a digit or the sign, and the
    // byte at `len` is the zero left by `alloc_buffer`.
    Ok(unsafe { CString::from_vec_with_nul_unchecked(buf) })
}

/// Number of decimal digits of `|n|`. Zero has one digit.
pub fn digit_count(n: i32) -> usize {
    encoded_len(i64::from(n).abs())
}

/// Length of the converted string without its terminator.
pub fn formatted_len(n: i32) -> usize {
    encoded_len(i64::from(n))
}

fn encoded_len(mut nbr: i64) -> usize {
    let mut count = 0;

    if nbr < 0 {
        count += 1;
        nbr = -nbr;
    }

    if nbr == 0 {
        count += 1;
    }

    while nbr != 0 {
        nbr /= 10;
        count += 1;
    }

    count
}

/// Allocates `len + 1` zeroed bytes with `'0'` already in the first slot.
fn alloc_buffer(len: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len + 1)?;
    buf.resize(len + 1, 0);
    buf[0] = b'0';
    Ok(buf)
}
