//! # Bitveil Core API
//!
//! Two codecs hide a message inside a carrier image:
//! - a spatial codec for bitmaps, one message bit per pixel byte stored as
//!   the XOR of the two least significant bits
//! - a transform codec for PNG and JPEG images, one message bit per 8×8
//!   block stored in a quantized DCT coefficient of the luminance plane,
//!   colour images keep their chroma
//!
//! The codec is chosen by the carrier's file extension.
//!
//! ## Capacity
//!
//! The bitmap codec stores the 4 byte message length in place of the first 4
//! pixel data bytes instead of growing the file. The file keeps its size and
//! its header stays valid, in exchange those 4 bytes carry no message bits: a
//! bitmap with `n` pixel data bytes holds `(n - 4) / 8` message bytes.
//! Flat black or white regions cannot carry transform codec bits, hiding in
//! them fails with an unstable block error.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust,no_run
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//!
//! let report = bitveil_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier.bmp")
//!     .with_output(temp_dir.path().join("secret.bmp"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//! println!("{} bytes changed", report.changes);
//! ```
//!
//! ## Unveil a message from an image
//!
//! ```rust,no_run
//! let message = bitveil_core::api::unveil::prepare()
//!     .from_secret_file("secret.bmp")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, b"Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod error;
pub mod framing;
pub mod media;
pub mod report;
pub mod result;

pub use bitveil_dct;
pub use crate::error::SteganoError;
pub use crate::framing::MessageFramer;
pub use crate::media::{CodecOptions, DctCodecOptions, Media, Persist};
pub use crate::report::HideReport;
pub use crate::result::Result;
