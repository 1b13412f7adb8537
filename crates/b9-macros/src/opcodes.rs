// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enum generation for instruction sets and code tables.

/// Define a fieldless enum with explicit discriminants, a textual mnemonic
/// per variant and checked conversion from the underlying integer.
///
/// Generated items:
/// - `TryFrom<repr>` (error type `()`)
/// - `mnemonic()` and `from_mnemonic(&str)`
/// - `all()` listing variants in declaration order
///
/// # Example
///
/// ```
/// use b9_macros::opcodes;
///
/// opcodes! {
///     /// Stack machine operations.
///     pub enum Opcode: u8 {
///         Nop = 0x00 => "nop",
///         Push = 0x01 => "push",
///         Add = 0x10 => "add",
///     }
/// }
///
/// assert_eq!(Opcode::Push as u8, 0x01);
/// assert_eq!(Opcode::try_from(0x10), Ok(Opcode::Add));
/// assert_eq!(Opcode::try_from(0x02), Err(()));
/// assert_eq!(Opcode::all().len(), 3);
/// ```
#[macro_export]
macro_rules! opcodes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal => $mnemonic:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value
            ),+
        }

        impl ::core::convert::TryFrom<$repr> for $name {
            type Error = ();

            fn try_from(value: $repr) -> ::core::result::Result<Self, ()> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl $name {
            /// Textual mnemonic of this variant.
            pub const fn mnemonic(self) -> &'static str {
                match self {
                    $(Self::$variant => $mnemonic,)+
                }
            }

            /// Looks a variant up by its mnemonic.
            pub fn from_mnemonic(mnemonic: &str) -> ::core::option::Option<Self> {
                match mnemonic {
                    $($mnemonic => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// All variants, in declaration order.
            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(self.mnemonic())
            }
        }
    };
}
