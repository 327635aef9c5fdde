//! Six-bit armor decoding and bit-level field extraction
//!
//! AIVDM payloads arrive as printable ASCII where every character
//! carries six bits of the original binary message. [`BitBuffer`]
//! accumulates the unpacked bits across sentence fragments;
//! [`BitReader`] extracts big-endian fields from a completed buffer.

use thiserror::Error;

/// Capacity of the reassembly buffer, in bytes
pub(crate) const BIT_BUFFER_BYTES: usize = 2048;

/// Capacity of the reassembly buffer, in bits
pub const BIT_BUFFER_BITS: usize = BIT_BUFFER_BYTES * 8;

/// Payload characters that could not be unpacked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArmorError {
    /// Character outside the six-bit armor alphabet
    ///
    /// Valid payload characters are `'0'..='W'` and `` '`'..='w' ``.
    #[error("payload byte 0x{0:02x} is outside the six-bit armor alphabet")]
    InvalidCharacter(u8),

    /// Appending the payload would exceed [`BIT_BUFFER_BITS`]
    #[error("armored payload overflows the {BIT_BUFFER_BITS} bit reassembly buffer")]
    Overflow,
}

/// Accumulates unpacked message bits, MSB first
///
/// The buffer has a hard capacity of [`BIT_BUFFER_BITS`]. Appends
/// which would exceed it are refused in their entirety; the buffer
/// is never left with a partial payload.
#[derive(Clone)]
pub struct BitBuffer {
    bytes: [u8; BIT_BUFFER_BYTES],
    bit_len: usize,
}

impl BitBuffer {
    /// New empty buffer
    pub fn new() -> Self {
        Self {
            bytes: [0u8; BIT_BUFFER_BYTES],
            bit_len: 0,
        }
    }

    /// Number of valid bits accumulated so far
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// True if no bits have been accumulated
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Discard all accumulated bits
    pub fn clear(&mut self) {
        self.bytes = [0u8; BIT_BUFFER_BYTES];
        self.bit_len = 0;
    }

    /// Unpack an armored payload and append its bits
    ///
    /// Each payload character is mapped to a six-bit value with
    /// `v = c - 48; if v >= 40 { v -= 8 }` and appended MSB first.
    /// The payload is validated before any bit is written: on error
    /// the buffer is unchanged.
    pub fn push_armored(&mut self, payload: &str) -> Result<(), ArmorError> {
        for byte in payload.bytes() {
            if !matches!(byte, b'0'..=b'W' | b'`'..=b'w') {
                return Err(ArmorError::InvalidCharacter(byte));
            }
        }
        if self.bit_len + 6 * payload.len() > BIT_BUFFER_BITS {
            return Err(ArmorError::Overflow);
        }

        for byte in payload.bytes() {
            let mut value = byte - 48;
            if value >= 40 {
                value -= 8;
            }
            for shift in (0..6).rev() {
                if value & (1 << shift) != 0 {
                    self.bytes[self.bit_len / 8] |= 1 << (7 - self.bit_len % 8);
                }
                self.bit_len += 1;
            }
        }

        Ok(())
    }

    /// Drop `pad` trailing fill bits
    ///
    /// The pad digit of the final sentence fragment declares how many
    /// bits of the last armor character are fill, not message.
    pub fn trim_pad(&mut self, pad: u8) {
        self.bit_len = self.bit_len.saturating_sub(usize::from(pad));
    }

    /// Cursor over the accumulated bits
    pub fn reader(&self) -> BitReader<'_> {
        BitReader {
            bytes: &self.bytes,
            bit_len: self.bit_len,
        }
    }
}

impl Default for BitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitBuffer")
            .field("bit_len", &self.bit_len)
            .finish()
    }
}

/// Big-endian field extraction from a completed [`BitBuffer`]
///
/// All accessors are bounds-checked against the valid bit length.
/// Reads that extend past the end yield zero, which matches the
/// zero-initialized semantics that truncated tail fields have in
/// most AIS receivers: a field a short payload does not carry
/// decodes as 0.
#[derive(Clone, Copy, Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    bit_len: usize,
}

/// Six-bit ASCII alphabet, indexed by field value
const SIXBIT_CHARS: &[u8; 64] = b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

impl<'a> BitReader<'a> {
    /// Number of valid bits
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    fn bit(&self, index: usize) -> u64 {
        if index >= self.bit_len {
            return 0;
        }
        u64::from(self.bytes[index / 8] >> (7 - index % 8)) & 0x01
    }

    /// Unsigned field of up to 64 bits at (`start`, `width`)
    pub fn wide(&self, start: usize, width: usize) -> u64 {
        debug_assert!(width <= 64);
        let mut out = 0u64;
        for index in start..start + width {
            out = (out << 1) | self.bit(index);
        }
        out
    }

    /// Unsigned field of up to 32 bits
    pub fn u(&self, start: usize, width: usize) -> u32 {
        debug_assert!(width <= 32);
        self.wide(start, width) as u32
    }

    /// Signed (two's complement) field of up to 32 bits
    pub fn i(&self, start: usize, width: usize) -> i32 {
        debug_assert!(width <= 32);
        let raw = self.wide(start, width);
        let shift = 64 - width;
        (((raw << shift) as i64) >> shift) as i32
    }

    /// Single-bit flag
    pub fn flag(&self, start: usize) -> bool {
        self.bit(start) != 0
    }

    /// Six-bit ASCII text, stopped at `@` and right-trimmed
    pub fn string(&self, start: usize, nbits: usize) -> String {
        let mut text = self.string_raw(start, nbits);
        let trimmed = text.trim_end_matches(' ').len();
        text.truncate(trimmed);
        text
    }

    /// Six-bit ASCII text, stopped at `@` but not trimmed
    pub(crate) fn string_raw(&self, start: usize, nbits: usize) -> String {
        let mut text = String::with_capacity(nbits / 6);
        let mut cursor = start;
        while cursor + 6 <= self.bit_len && cursor + 6 <= start + nbits {
            let value = self.u(cursor, 6) as usize;
            if value == 0 {
                // '@' terminates the field
                break;
            }
            text.push(char::from(SIXBIT_CHARS[value]));
            cursor += 6;
        }
        text
    }

    /// Copy the bit range `start..end` into a byte vector, MSB first
    ///
    /// The final byte is zero-padded on the right when the range is
    /// not a multiple of eight. `end` is clamped to the valid length.
    pub fn raw(&self, start: usize, end: usize) -> Vec<u8> {
        let end = end.min(self.bit_len);
        if start >= end {
            return Vec::new();
        }
        let nbits = end - start;
        let mut out = vec![0u8; (nbits + 7) / 8];
        for offset in 0..nbits {
            if self.bit(start + offset) != 0 {
                out[offset / 8] |= 1 << (7 - offset % 8);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armor_alphabet() {
        let mut buf = BitBuffer::new();

        // '0' is value 0, 'w' is value 63
        buf.push_armored("0").unwrap();
        assert_eq!(buf.bit_len(), 6);
        assert_eq!(buf.reader().u(0, 6), 0);

        buf.clear();
        buf.push_armored("w").unwrap();
        assert_eq!(buf.reader().u(0, 6), 63);

        // 'W' is 39, '`' is 40: the gap characters between them
        // are not part of the alphabet
        buf.clear();
        buf.push_armored("W`").unwrap();
        assert_eq!(buf.reader().u(0, 6), 39);
        assert_eq!(buf.reader().u(6, 6), 40);

        for bad in ["X", "_", "x", "!", " ", "~"] {
            buf.clear();
            assert_eq!(
                buf.push_armored(bad),
                Err(ArmorError::InvalidCharacter(bad.as_bytes()[0]))
            );
            assert!(buf.is_empty());
        }
    }

    #[test]
    fn rejected_payload_leaves_buffer_unchanged() {
        let mut buf = BitBuffer::new();
        buf.push_armored("14").unwrap();
        assert_eq!(buf.push_armored("1X"), Err(ArmorError::InvalidCharacter(b'X')));
        assert_eq!(buf.bit_len(), 12);
        assert_eq!(buf.reader().u(0, 6), 1);
    }

    #[test]
    fn overflow_is_hard_bound() {
        let mut buf = BitBuffer::new();
        let fill = "w".repeat(BIT_BUFFER_BITS / 6);
        buf.push_armored(&fill).unwrap();
        assert_eq!(buf.bit_len(), 6 * (BIT_BUFFER_BITS / 6));

        // 16384 is not a multiple of 6, so one more character is
        // already too many
        assert_eq!(buf.push_armored("0"), Err(ArmorError::Overflow));
        assert_eq!(buf.bit_len(), 6 * (BIT_BUFFER_BITS / 6));
    }

    #[test]
    fn trim_pad_drops_fill_bits() {
        let mut buf = BitBuffer::new();
        buf.push_armored("14").unwrap();
        buf.trim_pad(2);
        assert_eq!(buf.bit_len(), 10);

        buf.trim_pad(20);
        assert_eq!(buf.bit_len(), 0);
    }

    #[test]
    fn signed_fields_sign_extend() {
        let mut buf = BitBuffer::new();
        // '?' is value 15 = 001111; 'w' is 63 = 111111
        buf.push_armored("?w").unwrap();
        assert_eq!(buf.reader().i(0, 6), 15);
        assert_eq!(buf.reader().i(6, 6), -1);
        assert_eq!(buf.reader().i(2, 10), -1 << 4 | 0b1111);
    }

    #[test]
    fn reads_past_end_yield_zero() {
        let mut buf = BitBuffer::new();
        buf.push_armored("w").unwrap();
        let rd = buf.reader();
        assert_eq!(rd.u(0, 6), 63);
        assert_eq!(rd.u(3, 6), 0b111000);
        assert_eq!(rd.u(100, 8), 0);
        assert!(!rd.flag(6));
    }

    #[test]
    fn sixbit_strings() {
        let mut buf = BitBuffer::new();
        // "EXAMPLE" in six-bit values, then '@' terminator, then junk
        // E=5 X=24 A=1 M=13 P=16 L=12 E=5
        for value in [5u8, 24, 1, 13, 16, 12, 5, 0, 63] {
            let ch = if value < 40 { value + 48 } else { value + 56 };
            buf.push_armored(std::str::from_utf8(&[ch]).unwrap()).unwrap();
        }
        assert_eq!(buf.reader().string(0, 54), "EXAMPLE");

        // trailing spaces are trimmed; space is value 32
        buf.clear();
        for value in [5u8, 24, 32, 32] {
            let ch = if value < 40 { value + 48 } else { value + 56 };
            buf.push_armored(std::str::from_utf8(&[ch]).unwrap()).unwrap();
        }
        assert_eq!(buf.reader().string(0, 24), "EX");
    }

    #[test]
    fn raw_slices_realign() {
        let mut buf = BitBuffer::new();
        buf.push_armored("www").unwrap(); // 18 ones
        let bytes = buf.reader().raw(2, 12);
        assert_eq!(bytes, vec![0xff, 0xc0]);

        // clamped to the valid length
        let bytes = buf.reader().raw(12, 100);
        assert_eq!(bytes, vec![0xfc]);
        assert!(buf.reader().raw(18, 30).is_empty());
    }
}
