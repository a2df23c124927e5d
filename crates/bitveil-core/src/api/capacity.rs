use std::path::Path;

use crate::media::types::Media;
use crate::Result;

/// How many message bytes the carrier at `carrier` can hold.
pub fn capacity<A: AsRef<Path>>(carrier: A) -> Result<usize> {
    Media::from_file(carrier.as_ref())?.capacity()
}
