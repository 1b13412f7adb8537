// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error handling macros.

/// Early return with an error.
///
/// The argument is converted with `Into` into the function's error type.
///
/// # Example
///
/// ```
/// use b9_macros::bail;
///
/// fn check_slot(slot: u32) -> Result<u32, String> {
///     if slot > 0x00FF_FFFF {
///         bail!("slot {} does not fit in an operand", slot);
///     }
///     Ok(slot)
/// }
///
/// assert!(check_slot(1 << 24).is_err());
/// assert_eq!(check_slot(3), Ok(3));
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($msg.into())
    };
    ($fmt:literal, $($arg:tt)*) => {
        return Err(format!($fmt, $($arg)*).into())
    };
    ($err:expr $(,)?) => {
        return Err($err.into())
    };
}
