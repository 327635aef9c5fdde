//! Fragment reassembly
//!
//! Long AIS messages span several sentences on the same radio
//! channel. Each channel gets one [`ChannelContext`] which collects
//! payload bits until the final fragment arrives, then hands the
//! completed bitstream to the message decoder.
//!
//! The protocol gives no transaction ids that can be trusted, so the
//! rules are strict: fragment 1 always begins a new sequence, and any
//! other fragment must be the exact successor of the last one
//! accepted. There is no mid-sequence resynchronization.

use crate::decoder::AisError;
use crate::message::AisMessage;
use crate::sentence::Sentence;
use crate::sixbit::{ArmorError, BitBuffer};

#[cfg(not(test))]
use log::debug;
#[cfg(test)]
use std::println as debug;

/// Reassembly state for one radio channel
#[derive(Clone, Debug, Default)]
pub(crate) struct ChannelContext {
    bits: BitBuffer,
    fragments_received: u32,
}

impl ChannelContext {
    /// Feed one sentence into the channel
    ///
    /// Returns `Ok(Some(message))` when the sentence completes a
    /// sequence, `Ok(None)` when more fragments are expected. After a
    /// completed decode the buffer and the fragment counter are back
    /// at zero, whether the decode succeeded or not.
    pub(crate) fn accept(&mut self, sentence: &Sentence<'_>) -> Result<Option<AisMessage>, AisError> {
        if sentence.fragment_index == 1 {
            // fragment 1 restarts unconditionally, discarding any
            // sequence in progress
            if self.fragments_received != 0 {
                debug!(
                    "restarting after {} unfinished fragment(s)",
                    self.fragments_received
                );
            }
            self.bits.clear();
            self.fragments_received = 0;
        } else if sentence.fragment_index != self.fragments_received + 1 {
            return Err(AisError::FragmentOrder {
                expected: self.fragments_received + 1,
                got: sentence.fragment_index,
            });
        }

        if let Err(err) = self.bits.push_armored(sentence.payload) {
            if matches!(err, ArmorError::Overflow) {
                // the sequence cannot continue; drop it whole
                self.bits.clear();
                self.fragments_received = 0;
            }
            return Err(err.into());
        }

        if sentence.fragment_index < sentence.fragment_count {
            self.fragments_received += 1;
            debug!(
                "holding {} bits, awaiting fragment {} of {}",
                self.bits.bit_len(),
                self.fragments_received + 1,
                sentence.fragment_count
            );
            return Ok(None);
        }

        // final fragment: only now do the pad bits come off
        self.bits.trim_pad(sentence.pad);
        let decoded = AisMessage::decode(&self.bits);
        self.bits.clear();
        self.fragments_received = 0;
        Ok(Some(decoded?))
    }

    #[cfg(test)]
    pub(crate) fn pending_bits(&self) -> usize {
        self.bits.bit_len()
    }

    #[cfg(test)]
    pub(crate) fn pending_fragments(&self) -> u32 {
        self.fragments_received
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageError;
    use crate::sentence::Channel;

    fn sentence(count: u32, index: u32, payload: &str, pad: u8) -> Sentence<'static> {
        Sentence {
            fragment_count: count,
            fragment_index: index,
            message_id: None,
            channel: Channel::A,
            payload: Box::leak(payload.to_owned().into_boxed_str()),
            pad,
        }
    }

    #[test]
    fn single_fragment_resets_state() {
        let mut ctx = ChannelContext::default();
        let result = ctx.accept(&sentence(1, 1, "177KQJ5000G?tO`K>RA1wUbN0TKH", 0));
        assert!(matches!(result, Ok(Some(_))));
        assert_eq!(ctx.pending_bits(), 0);
        assert_eq!(ctx.pending_fragments(), 0);
    }

    #[test]
    fn out_of_order_fragment_rejected_without_mutation() {
        let mut ctx = ChannelContext::default();
        let result = ctx.accept(&sentence(2, 2, "177KQJ5000G?tO`K>RA1wUbN0TKH", 0));
        assert!(matches!(
            result,
            Err(AisError::FragmentOrder { expected: 1, got: 2 })
        ));
        assert_eq!(ctx.pending_bits(), 0);

        // the channel is still usable afterwards
        let result = ctx.accept(&sentence(1, 1, "177KQJ5000G?tO`K>RA1wUbN0TKH", 0));
        assert!(matches!(result, Ok(Some(_))));
    }

    #[test]
    fn gap_in_three_part_sequence_rejected() {
        let mut ctx = ChannelContext::default();
        assert!(matches!(
            ctx.accept(&sentence(3, 1, "177KQJ5000", 0)),
            Ok(None)
        ));
        let held = ctx.pending_bits();
        assert!(matches!(
            ctx.accept(&sentence(3, 3, "177KQJ5000", 0)),
            Err(AisError::FragmentOrder { expected: 2, got: 3 })
        ));
        assert_eq!(ctx.pending_bits(), held);
    }

    #[test]
    fn fragment_one_restarts_unfinished_sequence() {
        let mut ctx = ChannelContext::default();
        assert!(matches!(ctx.accept(&sentence(2, 1, "177KQJ5000", 0)), Ok(None)));
        assert_eq!(ctx.pending_fragments(), 1);

        // a fresh single-fragment message interrupts and decodes
        let result = ctx.accept(&sentence(1, 1, "177KQJ5000G?tO`K>RA1wUbN0TKH", 0));
        assert!(matches!(result, Ok(Some(_))));
        assert_eq!(ctx.pending_fragments(), 0);
    }

    #[test]
    fn invalid_armor_does_not_disturb_sequence() {
        let mut ctx = ChannelContext::default();
        assert!(matches!(ctx.accept(&sentence(2, 1, "177KQJ5000", 0)), Ok(None)));
        let held = ctx.pending_bits();

        assert!(matches!(
            ctx.accept(&sentence(2, 2, "bad~armor", 0)),
            Err(AisError::Armor(ArmorError::InvalidCharacter(b'~')))
        ));
        assert_eq!(ctx.pending_bits(), held);
    }

    #[test]
    fn failed_decode_still_clears_state() {
        let mut ctx = ChannelContext::default();
        // type 1 tag but far too short
        let result = ctx.accept(&sentence(1, 1, "1000000", 0));
        assert!(matches!(
            result,
            Err(AisError::Message(MessageError::TooShort { msgtype: 1, .. }))
        ));
        assert_eq!(ctx.pending_bits(), 0);
        assert_eq!(ctx.pending_fragments(), 0);
    }
}
