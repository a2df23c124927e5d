use bitveil_core::media::codec_options::{DEFAULT_JPEG_QUALITY, DEFAULT_QUANTIZATION_STEP};
use bitveil_core::{CodecOptions, DctCodecOptions};
use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: quantization step of the block DCT codec (PNG / JPEG carriers)
    #[arg(long = "x-quantization-step", default_value_t = DEFAULT_QUANTIZATION_STEP)]
    pub quantization_step: f64,

    /// Experimental: JPEG quality when a JPEG output is written
    #[arg(
        long = "x-jpeg-quality",
        default_value_t = DEFAULT_JPEG_QUALITY,
        value_parser = clap::value_parser!(u8).range(1..=100)
    )]
    pub jpeg_quality: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            dct: DctCodecOptions::default()
                .with_quantization_step(self.quantization_step)
                .with_jpeg_quality(self.jpeg_quality),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encode(encode::EncodeArgs),
    Decode(decode::DecodeArgs),
    Capacity(capacity::CapacityArgs),
}
