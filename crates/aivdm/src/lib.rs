//! # aivdm: an AIS maritime tracking message decoder
//!
//! This crate decodes the Automatic Identification System (AIS)
//! broadcasts that ships, base stations, and navigational aids emit
//! on marine VHF, as delivered by receivers in NMEA 0183 `!AIVDM` /
//! `!AIVDO` sentences.
//!
//! ```
//! use aivdm::{render_json, AisDecoder};
//!
//! let mut decoder = AisDecoder::new();
//!
//! let msg = decoder
//!     .decode("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C")
//!     .expect("sentence accepted")
//!     .expect("single-fragment message is complete");
//!
//! assert_eq!(msg.msgtype, 1);
//! assert_eq!(msg.mmsi, 477553000);
//!
//! let report = render_json(&msg, None, true);
//! assert!(report.starts_with("{\"class\":\"AIS\","));
//! assert!(report.ends_with("}\r\n"));
//! ```
//!
//! A session ([`AisDecoder`]) accepts one sentence at a time and
//! emits a typed [`AisMessage`] whenever a message is complete.
//! Multi-sentence messages are reassembled per radio channel;
//! interleaved type 24 static-data halves are joined through a small
//! cache of recent Part A reports. [`render_json`] turns any decoded
//! message into a `\r\n`-terminated JSON record, either with raw
//! wire values or scaled to physical units.
//!
//! Decoding problems (malformed sentences, out-of-order fragments,
//! unknown message types, truncated payloads) surface as [`AisError`]
//! values on the offending call. The session itself never becomes
//! unusable, and no input panics it.
//!
//! Checksum verification is out of scope: radio mode receivers often
//! emit sentences with recalculated or absent checksums, so verify at
//! the transport layer if your source is trustworthy enough to make
//! that worthwhile.

#![forbid(unsafe_code)]

pub mod appdata;
mod assembler;
mod decoder;
mod json;
mod legends;
pub mod message;
mod sentence;
mod sixbit;
mod type24;

pub use appdata::{ApplicationData, OpaqueBits};
pub use decoder::{AisDecoder, AisError};
pub use json::render_json;
pub use legends::{EpfdSource, NavigationStatus};
pub use message::{AisMessage, MessageData, MessageError};
pub use sentence::{Channel, Sentence, SentenceError, MAX_SENTENCE_BYTES};
pub use sixbit::{ArmorError, BitBuffer, BitReader, BIT_BUFFER_BITS};
pub use type24::{Type24Queue, PART_A_CAPACITY};

#[cfg(test)]
pub(crate) mod testutil {
    //! Builders for test bitstreams

    /// Accumulates fields MSB-first, then re-armors them
    #[derive(Clone, Debug, Default)]
    pub(crate) struct BitPacker {
        bits: Vec<bool>,
    }

    impl BitPacker {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// Append the low `width` bits of `value`, MSB first
        pub(crate) fn push(&mut self, value: u64, width: usize) {
            for shift in (0..width).rev() {
                self.bits.push(shift < u64::BITS as usize && value >> shift & 1 != 0);
            }
        }

        /// Append `chars` six-bit characters, padding with `@`
        pub(crate) fn push_str6(&mut self, text: &str, chars: usize) {
            let mut pushed = 0;
            for ch in text.chars().take(chars) {
                let value = match ch {
                    '@'..='_' => ch as u64 - 64,
                    ' '..='?' => ch as u64,
                    other => panic!("{other:?} is not a six-bit character"),
                };
                self.push(value, 6);
                pushed += 1;
            }
            for _ in pushed..chars {
                self.push(0, 6);
            }
        }

        /// Armor the accumulated bits into a payload and pad digit
        pub(crate) fn armor(&self) -> (String, u8) {
            let mut payload = String::with_capacity(self.bits.len() / 6 + 1);
            let mut pad = 0u8;
            for chunk in self.bits.chunks(6) {
                let mut value = 0u8;
                for (n, bit) in chunk.iter().enumerate() {
                    if *bit {
                        value |= 1 << (5 - n);
                    }
                }
                pad = (6 - chunk.len()) as u8;
                payload.push(char::from(if value < 40 { value + 48 } else { value + 56 }));
            }
            (payload, pad)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::sixbit::BitBuffer;

        #[test]
        fn packer_round_trips_through_armor() {
            let mut packer = BitPacker::new();
            packer.push(0b101101, 6);
            packer.push(0x3FF, 10);

            let (payload, pad) = packer.armor();
            assert_eq!(pad, 2);

            let mut buf = BitBuffer::new();
            buf.push_armored(&payload).unwrap();
            buf.trim_pad(pad);
            assert_eq!(buf.bit_len(), 16);
            assert_eq!(buf.reader().u(0, 6), 0b101101);
            assert_eq!(buf.reader().u(6, 10), 0x3FF);
        }
    }
}
