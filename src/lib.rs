//! # limbkit
//!
//! Arbitrary-precision unsigned integer kernels over little-endian limb
//! sequences.
//!
//! A *limb* is the native machine word ([`Limb`]); a magnitude is a slice of
//! limbs where index 0 is the least significant. The kernel modules operate
//! in place on caller-owned buffers of exactly the length an algorithm
//! needs, and report carries, borrows and division by zero as explicit
//! flags rather than trapping:
//!
//! - [`carry`]: increment or decrement a sequence by a bit, a digit, another
//!   sequence, or a fused `sequence * digit + digit` product.
//! - [`mul`]: long and Karatsuba multiplication and squaring.
//! - [`div`]: single-limb long division and Knuth's Algorithm D.
//! - [`shift`]: whole-limb and bit-granular shifts in both directions.
//! - [`complement`]: one's and two's complement formation.
//!
//! [`Magnitude`] is the owned, resizable container built on those kernels.
//! It always holds at least one limb and is kept normalized between calls.
//!
//! ```
//! use limbkit::Magnitude;
//!
//! let a = Magnitude::from(7u32);
//! let b = Magnitude::from(2u32);
//! let (quotient, remainder) = a.checked_div_rem(&b)?;
//! assert_eq!(quotient, Magnitude::from(3u32));
//! assert_eq!(remainder, Magnitude::from(1u32));
//! # Ok::<(), limbkit::Error>(())
//! ```
//!
//! # Reporting versus checked forms
//!
//! Operations that can hit a numeric edge condition return an
//! [`Overflow`], pairing a well-defined partial value with a flag. The
//! `checked_*` methods, and [`Overflow::into_result`], turn a raised flag
//! into an [`Error`]. Operators (`-`, `/`, `%`) panic on the same
//! conditions, like the primitive integer types do.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! limbkit = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/limbkit/0.1.0")]
// Ignored clippy_pedantic lints
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::return_self_not_must_use,
    clippy::similar_names,
)]
#![deny(missing_docs)]
#![no_std]

mod features_check;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Facade around the core and alloc items the kernels use.
mod lib {
    pub(crate) use core::{cmp, fmt, hash, mem, ops, result};

    pub(crate) use alloc::boxed::Box;
    pub(crate) use alloc::string::{String, ToString};
    pub(crate) use alloc::vec;
    pub(crate) use alloc::vec::Vec;
}

pub mod carry;
pub mod compare;
pub mod complement;
pub mod div;
pub mod error;
pub mod limb;
pub mod magnitude;
pub mod mul;
pub mod overflow;
pub mod shift;
pub mod slice;

#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::limb::{Limb, Wide, LIMB_BITS};
#[doc(inline)]
pub use crate::magnitude::Magnitude;
#[doc(inline)]
pub use crate::overflow::Overflow;
#[doc(inline)]
pub use crate::slice::{Limbs, LimbsMut};
