pub mod bitmap;
pub mod codec_options;
mod persist;
pub mod raster;
pub mod types;

pub use codec_options::{CodecOptions, DctCodecOptions};
pub use persist::Persist;
pub(crate) use persist::write_atomically;
pub use types::*;
