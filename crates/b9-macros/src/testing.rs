// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Assertions used by the compiler's test suites.
//!
//! Each macro panics with the asserted expression and the offending value,
//! so a failing codegen test shows the error it actually got.

/// Panics unless `$expr` matches `$pat` (and the optional guard).
///
/// ```
/// use b9_macros::assert_matches;
///
/// #[derive(Debug)]
/// enum Slot { Arg(u32), Local(u32) }
///
/// assert_matches!(Slot::Local(2), Slot::Local(n) if n > 1);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match $expr {
            $pat => {}
            ref other => panic!(
                "`{}` did not match `{}`: got {:?}",
                stringify!($expr),
                stringify!($pat),
                other
            ),
        }
    };
    ($expr:expr, $pat:pat if $guard:expr) => {
        match $expr {
            $pat if $guard => {}
            ref other => panic!(
                "`{}` did not match `{} if {}`: got {:?}",
                stringify!($expr),
                stringify!($pat),
                stringify!($guard),
                other
            ),
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
///
/// ```
/// use b9_macros::assert_ok;
///
/// assert_eq!(assert_ok!("42".parse::<u32>()), 42);
/// ```
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(err) => panic!("`{}` failed: {:?}", stringify!($expr), err),
        }
    };
}

/// Unwraps an `Err`, panicking with the value otherwise.
///
/// ```
/// use b9_macros::assert_err;
///
/// let err = assert_err!("x".parse::<u32>());
/// assert!(!err.to_string().is_empty());
/// ```
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => panic!("`{}` unexpectedly succeeded: {:?}", stringify!($expr), value),
            Err(err) => err,
        }
    };
}
