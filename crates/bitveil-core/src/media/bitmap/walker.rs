use std::io::Write;

use super::signal_bit::BitExtractor;
use crate::error::SteganoError;
use crate::result::Result;

/// Forward-only cursor over the carrier bytes, one byte per signal bit.
///
/// The source is only ever read; modified bytes go to a separate writer.
pub struct CarrierWalker<'c> {
    carrier: &'c [u8],
    cursor: usize,
}

impl<'c> CarrierWalker<'c> {
    pub fn new(carrier: &'c [u8], start: usize) -> Self {
        Self {
            carrier,
            cursor: start.min(carrier.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.carrier.len() - self.cursor
    }

    /// Hand out the next `n` bytes untouched.
    pub fn take_raw(&mut self, n: usize) -> Result<&'c [u8]> {
        if n > self.remaining() {
            return Err(SteganoError::CapacityExceeded {
                required: n * 8,
                available: self.remaining() * 8,
            });
        }
        let raw = &self.carrier[self.cursor..self.cursor + n];
        self.cursor += n;

        Ok(raw)
    }

    /// Write one carrier byte per bit, with its signal bit set, to `out`.
    ///
    /// Returns how many bytes actually changed.
    pub fn embed<I, W>(&mut self, bits: I, out: &mut W) -> Result<usize>
    where
        I: IntoIterator<Item = bool>,
        W: Write,
    {
        let mut bits = bits.into_iter();
        let mut written = Vec::with_capacity(self.remaining());
        let mut changes = 0;

        while let Some(bit) = bits.next() {
            let Some(&unit) = self.carrier.get(self.cursor) else {
                return Err(SteganoError::CapacityExceeded {
                    required: written.len() + 1 + bits.by_ref().count(),
                    available: written.len(),
                });
            };
            let hidden = BitExtractor::set_signal_bit(unit, bit);
            if hidden != unit {
                changes += 1;
            }
            written.push(hidden);
            self.cursor += 1;
        }
        out.write_all(&written)
            .map_err(|source| SteganoError::WriteError { source })?;

        Ok(changes)
    }

    /// Signal bits of the upcoming bytes, consuming one byte per bit.
    pub fn signal_bits<'s>(&'s mut self) -> impl Iterator<Item = bool> + 's {
        let carrier: &'s [u8] = self.carrier;
        let cursor: &'s mut usize = &mut self.cursor;
        std::iter::from_fn(move || {
            let unit = carrier.get(*cursor)?;
            *cursor += 1;
            Some(BitExtractor::signal_bit(*unit))
        })
    }

    /// Copy everything after the cursor verbatim to `out`.
    pub fn pass_through<W: Write>(self, out: &mut W) -> Result<usize> {
        let rest = &self.carrier[self.cursor..];
        out.write_all(rest)
            .map_err(|source| SteganoError::WriteError { source })?;

        Ok(rest.len())
    }
}
