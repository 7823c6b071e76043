//! Bit-plane codec for flat carrier samples.
//!
//! A frame is the 32-bit big-endian byte count of the payload followed by the
//! payload bits, most significant bit first per byte. Every frame bit lands
//! in the least significant bit of one carrier sample; all other bits of the
//! sample are untouched.

use std::io::Cursor;

use bitstream_io::{BitRead, BitReader, BitWrite, BitWriter};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::PixelveilError;
use crate::result::Result;

/// number of carrier samples occupied by the length prefix
pub const LENGTH_HEADER_BITS: usize = 32;

/// Embeds data into and extracts data from the LSBs of a sample slice
pub struct LsbCodec;

impl LsbCodec {
    /// Embeds `payload` into the least significant bits of `carrier`.
    ///
    /// The carrier is checked for capacity up front and is left untouched
    /// when the framed payload does not fit.
    pub fn embed(carrier: &mut [u8], payload: &[u8]) -> Result<()> {
        let required = LENGTH_HEADER_BITS + payload.len() * 8;
        if required > carrier.len() {
            return Err(PixelveilError::CapacityExceeded {
                required,
                available: carrier.len(),
            });
        }

        let mut frame = Vec::with_capacity(4 + payload.len());
        frame.write_u32::<BigEndian>(payload.len() as u32)?;
        frame.extend_from_slice(payload);

        let mut bits = BitReader::endian(Cursor::new(frame), bitstream_io::BigEndian);
        for sample in carrier.iter_mut().take(required) {
            let bit = bits.read_bit()?;
            *sample = (*sample & (u8::MAX - 1)) | u8::from(bit);
        }

        Ok(())
    }

    /// Extracts the framed payload from the least significant bits of `carrier`.
    ///
    /// The length header is validated against the carrier size before any
    /// payload sample is read, so a tampered or never-encoded carrier fails
    /// with [`PixelveilError::InvalidLengthHeader`] instead of reading out of
    /// bounds.
    pub fn extract(carrier: &[u8]) -> Result<Vec<u8>> {
        if carrier.len() < LENGTH_HEADER_BITS {
            return Err(PixelveilError::CarrierTooShort);
        }

        let header = collect_lsbs(&carrier[..LENGTH_HEADER_BITS])?;
        let mut header = header.as_slice();
        let msg_len = header.read_u32::<BigEndian>()? as usize;

        if msg_len == 0 || msg_len > (carrier.len() - LENGTH_HEADER_BITS) / 8 {
            return Err(PixelveilError::InvalidLengthHeader(msg_len as u32));
        }

        collect_lsbs(&carrier[LENGTH_HEADER_BITS..LENGTH_HEADER_BITS + msg_len * 8])
    }
}

/// packs the LSB of every sample into bytes, MSB first
fn collect_lsbs(samples: &[u8]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(samples.len() / 8);
    {
        let mut bits = BitWriter::endian(&mut bytes, bitstream_io::BigEndian);
        for sample in samples {
            bits.write_bit(sample & 1 == 1)?;
        }
    }

    Ok(bytes)
}
