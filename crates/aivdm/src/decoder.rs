//! Decoder session
//!
//! [`AisDecoder`] owns everything one NMEA stream needs: a
//! reassembly context per radio channel and the type 24 Part A
//! cache. Sessions are independent; feed each input stream its own.

use thiserror::Error;

use crate::assembler::ChannelContext;
use crate::message::{AisMessage, MessageData, MessageError, StaticDataReport};
use crate::sentence::{Sentence, SentenceError};
use crate::sixbit::ArmorError;
use crate::type24::Type24Queue;

/// Sentences that could not be decoded
///
/// Every variant is a per-sentence diagnosis. The session stays
/// valid; the caller decides whether to log and continue.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AisError {
    /// The line is not a well-formed AIVDM/AIVDO sentence
    #[error("malformed sentence: {0}")]
    Sentence(#[from] SentenceError),

    /// The payload could not be unpacked
    #[error(transparent)]
    Armor(#[from] ArmorError),

    /// Fragment out of sequence; the sequence is abandoned
    #[error("got fragment {got}, expected fragment {expected}")]
    FragmentOrder { expected: u32, got: u32 },

    /// The reassembled bitstream is not a decodable message
    #[error(transparent)]
    Message(#[from] MessageError),
}

/// One AIS decoding session
///
/// ```
/// use aivdm::AisDecoder;
///
/// let mut decoder = AisDecoder::new();
/// let msg = decoder
///     .decode("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C")
///     .unwrap()
///     .expect("single-fragment message");
/// assert_eq!(msg.msgtype, 1);
/// assert_eq!(msg.mmsi, 477553000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AisDecoder {
    channels: [ChannelContext; 2],
    type24_queue: Type24Queue,
}

impl AisDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode one NMEA line
    ///
    /// Returns `Ok(Some(message))` for a completed message and
    /// `Ok(None)` when the sentence was accepted but its sequence
    /// needs more fragments. Errors never poison the session.
    pub fn decode(&mut self, line: &str) -> Result<Option<AisMessage>, AisError> {
        let sentence = Sentence::parse(line)?;
        let channel = &mut self.channels[sentence.channel.index()];
        match channel.accept(&sentence)? {
            Some(msg) => Ok(Some(self.resolve_type24(msg))),
            None => Ok(None),
        }
    }

    /// Join type 24 halves through the Part A cache
    fn resolve_type24(&mut self, mut msg: AisMessage) -> AisMessage {
        let mmsi = msg.mmsi;
        if let MessageData::StaticDataReport(ref mut report) = msg.data {
            match report {
                StaticDataReport::PartA { shipname } => {
                    self.type24_queue.record_part_a(mmsi, shipname);
                }
                StaticDataReport::PartB(_) => {
                    if let Some(shipname) = self.type24_queue.lookup(mmsi) {
                        let shipname = shipname.to_owned();
                        let StaticDataReport::PartB(statics) = report.clone() else {
                            unreachable!();
                        };
                        *report = StaticDataReport::Merged { shipname, statics };
                    }
                }
                StaticDataReport::Merged { .. } => {}
            }
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::render_json;
    use crate::message::{HullReference, PositionReport};
    use crate::testutil::BitPacker;

    fn vdm(fragments: u32, index: u32, channel: char, payload: &str, pad: u8) -> String {
        format!("!AIVDM,{fragments},{index},,{channel},{payload},{pad}*00")
    }

    /// Builds the sentences for one message, splitting the armored
    /// payload across `fragments` sentences on `channel`.
    fn sentences_for(packer: &BitPacker, fragments: usize, channel: char) -> Vec<String> {
        let (payload, pad) = packer.armor();
        let chunk = (payload.len() + fragments - 1) / fragments;
        payload
            .as_bytes()
            .chunks(chunk)
            .enumerate()
            .map(|(n, piece)| {
                let last = n == fragments - 1;
                vdm(
                    fragments as u32,
                    n as u32 + 1,
                    channel,
                    std::str::from_utf8(piece).unwrap(),
                    if last { pad } else { 0 },
                )
            })
            .collect()
    }

    #[test]
    fn known_position_report() {
        let mut decoder = AisDecoder::new();
        let msg = decoder
            .decode("!AIVDM,1,1,,A,177KI=011nrFFK1p0wTKII2>06;`,0*27")
            .unwrap()
            .expect("complete message");

        assert_eq!(msg.msgtype, 1);
        assert_eq!(msg.repeat, 0);
        assert_eq!(msg.mmsi, 477550900);
        match msg.data {
            MessageData::Position(PositionReport {
                status,
                turn,
                speed,
                accuracy,
                lon,
                lat,
                course,
                heading,
                second,
                maneuver,
                raim,
                radio,
            }) => {
                assert_eq!(status, 0);
                assert_eq!(turn, 4);
                assert_eq!(speed, 118);
                assert!(accuracy);
                assert_eq!(lon, -47402144);
                assert_eq!(lat, -8372335);
                assert_eq!(course, 2917);
                assert_eq!(heading, 289);
                assert_eq!(second, 7);
                assert_eq!(maneuver, 0);
                assert!(!raim);
                assert_eq!(radio, 25320);
            }
            other => panic!("unexpected decode: {other:?}"),
        }
    }

    #[test]
    fn two_fragment_static_voyage() {
        let mut packer = BitPacker::new();
        packer.push(5, 6);
        packer.push(0, 2);
        packer.push(211339980, 30);
        packer.push(0, 2);
        packer.push(9507219, 30);
        packer.push_str6("ZWEX2  ", 7);
        packer.push_str6("ORINOCO DELTA       ", 20);
        packer.push(70, 8);
        packer.push(45, 9);
        packer.push(42, 9);
        packer.push(8, 6);
        packer.push(6, 6);
        packer.push(1, 4);
        packer.push(6, 4);
        packer.push(14, 5);
        packer.push(20, 5);
        packer.push(0, 6);
        packer.push(43, 8);
        packer.push_str6("ROTTERDAM@@@@@@@@@@@", 20);
        packer.push(0, 2);

        let mut decoder = AisDecoder::new();
        let lines = sentences_for(&packer, 2, 'A');
        assert_eq!(lines.len(), 2);

        assert_eq!(decoder.decode(&lines[0]).unwrap(), None);
        let msg = decoder
            .decode(&lines[1])
            .unwrap()
            .expect("second fragment completes");
        assert_eq!(msg.msgtype, 5);
        assert_eq!(msg.mmsi, 211339980);
        match msg.data {
            MessageData::StaticVoyage(sv) => {
                assert_eq!(sv.shipname, "ORINOCO DELTA");
                assert_eq!(sv.destination, "ROTTERDAM");
            }
            other => panic!("unexpected decode: {other:?}"),
        }
    }

    #[test]
    fn channels_reassemble_independently() {
        let mut packer = BitPacker::new();
        packer.push(5, 6);
        packer.push(0, 2);
        packer.push(211339980, 30);
        packer.push(0, 386); // rest of a minimal type 5

        let mut decoder = AisDecoder::new();
        let on_a = sentences_for(&packer, 2, 'A');
        let on_b = sentences_for(&packer, 2, 'B');

        // interleaved: A1, B1, A2, B2. Both must complete
        assert_eq!(decoder.decode(&on_a[0]).unwrap(), None);
        assert_eq!(decoder.decode(&on_b[0]).unwrap(), None);
        assert!(decoder.decode(&on_a[1]).unwrap().is_some());
        assert!(decoder.decode(&on_b[1]).unwrap().is_some());
    }

    #[test]
    fn errors_do_not_poison_the_session() {
        let mut decoder = AisDecoder::new();

        assert!(decoder.decode("not a sentence").is_err());
        assert!(decoder
            .decode(&format!("!AIVDM,1,1,,A,{},0*00", "1".repeat(190)))
            .is_err());
        assert!(decoder
            .decode("!AIVDM,2,2,,A,177KQJ5000G?tO`K>RA1wUbN0TKH,0*00")
            .is_err());

        // and a good sentence still decodes
        assert!(decoder
            .decode("!AIVDM,1,1,,A,177KI=011nrFFK1p0wTKII2>06;`,0*27")
            .unwrap()
            .is_some());
    }

    fn part_a_line(mmsi: u32, name: &str) -> String {
        let mut packer = BitPacker::new();
        packer.push(24, 6);
        packer.push(0, 2);
        packer.push(u64::from(mmsi), 30);
        packer.push(0, 2);
        let mut padded = name.to_owned();
        while padded.len() < 20 {
            padded.push('@');
        }
        packer.push_str6(&padded, 20);
        sentences_for(&packer, 1, 'A').remove(0)
    }

    fn part_b_line(mmsi: u32) -> String {
        let mut packer = BitPacker::new();
        packer.push(24, 6);
        packer.push(0, 2);
        packer.push(u64::from(mmsi), 30);
        packer.push(1, 2);
        packer.push(36, 8);
        packer.push_str6("ACM", 3);
        packer.push(2, 4);
        packer.push(12345, 20);
        packer.push_str6("WDA1234", 7);
        packer.push(4, 9);
        packer.push(8, 9);
        packer.push(2, 6);
        packer.push(2, 6);
        packer.push(0, 6);
        sentences_for(&packer, 1, 'A').remove(0)
    }

    #[test]
    fn type24_halves_merge() {
        let mut decoder = AisDecoder::new();

        let msg = decoder
            .decode(&part_a_line(123456789, "EXAMPLE"))
            .unwrap()
            .expect("part A decodes");
        assert!(matches!(
            msg.data,
            MessageData::StaticDataReport(StaticDataReport::PartA { .. })
        ));

        let msg = decoder
            .decode(&part_b_line(123456789))
            .unwrap()
            .expect("part B decodes");
        match msg.data {
            MessageData::StaticDataReport(StaticDataReport::Merged { shipname, statics }) => {
                assert_eq!(shipname, "EXAMPLE");
                assert_eq!(statics.callsign, "WDA1234");
                assert_eq!(
                    statics.hull,
                    HullReference::Dimensions(crate::message::Dimensions {
                        to_bow: 4,
                        to_stern: 8,
                        to_port: 2,
                        to_starboard: 2,
                    })
                );
            }
            other => panic!("unexpected decode: {other:?}"),
        }

        // render of the merged report carries the cached name
        let msg = decoder
            .decode(&part_b_line(123456789))
            .unwrap()
            .expect("repeat part B still merges");
        let report = render_json(&msg, None, false);
        assert!(report.contains("\"shipname\":\"EXAMPLE\""));
        assert!(!report.contains("\"part\""));
    }

    #[test]
    fn unmatched_part_b_stands_alone() {
        let mut decoder = AisDecoder::new();
        let msg = decoder
            .decode(&part_b_line(599000001))
            .unwrap()
            .expect("part B decodes");
        assert!(matches!(
            msg.data,
            MessageData::StaticDataReport(StaticDataReport::PartB(_))
        ));
    }

    #[test]
    fn part_a_cache_evicts_oldest() {
        let mut decoder = AisDecoder::new();
        for n in 0..9u32 {
            decoder
                .decode(&part_a_line(100000000 + n, "SHIP"))
                .unwrap();
        }

        // the first vessel was evicted from the 8-entry cache
        let msg = decoder.decode(&part_b_line(100000000)).unwrap().unwrap();
        assert!(matches!(
            msg.data,
            MessageData::StaticDataReport(StaticDataReport::PartB(_))
        ));

        // the second is still cached
        let msg = decoder.decode(&part_b_line(100000001)).unwrap().unwrap();
        assert!(matches!(
            msg.data,
            MessageData::StaticDataReport(StaticDataReport::Merged { .. })
        ));
    }
}
