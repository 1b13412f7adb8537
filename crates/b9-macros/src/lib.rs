// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Declarative macros shared by the b9 compiler crates.
//!
//! # Macros Overview
//!
//! ## Bytecode
//! - [`opcodes!`] - Define a `#[repr]` enum with mnemonics and `TryFrom` decoding
//!
//! ## Error Handling
//! - [`bail!`] - Early return with an error
//!
//! ## Testing
//! - [`assert_matches!`] - Assert that a value matches a pattern
//! - [`assert_ok!`] - Assert a `Result` is `Ok` and extract the value
//! - [`assert_err!`] - Assert a `Result` is `Err` and extract the error
//!
//! # Examples
//!
//! ```
//! use b9_macros::*;
//!
//! opcodes! {
//!     pub enum Op: u8 {
//!         Halt = 0 => "halt",
//!         Push = 1 => "push",
//!     }
//! }
//!
//! assert_eq!(Op::try_from(1u8), Ok(Op::Push));
//! assert_eq!(Op::Halt.mnemonic(), "halt");
//! assert_eq!(Op::from_mnemonic("push"), Some(Op::Push));
//! ```

#![warn(missing_docs)]

mod error;
mod opcodes;
mod testing;
