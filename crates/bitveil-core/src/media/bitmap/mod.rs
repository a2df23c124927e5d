pub mod container;
pub mod lsb2_codec;
pub mod signal_bit;
pub mod walker;

pub use container::BitmapContainer;
pub use lsb2_codec::Lsb2Codec;
pub use signal_bit::BitExtractor;
pub use walker::CarrierWalker;
