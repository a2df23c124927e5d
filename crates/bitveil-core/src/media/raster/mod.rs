pub mod carrier;
pub mod container;
pub mod dct_codec;

pub use carrier::RasterImage;
pub use container::RasterContainer;
pub use dct_codec::DctCodec;
