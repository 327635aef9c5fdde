//! AIVDM/AIVDO sentence splitting and validation
//!
//! A sentence is one comma-delimited NMEA 0183 line like
//!
//! ```text
//! !AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C
//! ```
//!
//! carrying the fragmenting counters, the radio channel, the armored
//! payload, and the pad digit. Checksum verification is left to the
//! transport layer.

use thiserror::Error;

/// Longest sentence accepted, in bytes
///
/// Twice the NMEA 0183 maximum, leaving slack for receivers which
/// emit over-length lines.
pub const MAX_SENTENCE_BYTES: usize = 182;

/// Sentences that could not be split into a fragment record
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SentenceError {
    /// Longer than [`MAX_SENTENCE_BYTES`]
    #[error("sentence exceeds {MAX_SENTENCE_BYTES} bytes")]
    TooLong,

    /// Fewer than the seven required comma-delimited fields
    #[error("sentence has too few fields")]
    MissingFields,

    /// Fragment count or index is not a positive integer
    #[error("unparsable fragment counter {0:?}")]
    BadFragmentCount(String),

    /// Fragment index outside `1..=count`
    #[error("fragment index {index} outside 1..={count}")]
    BadFragmentIndex { index: u32, count: u32 },

    /// Pad field does not begin with a digit `0..=7`
    #[error("invalid pad digit")]
    BadPad,

    /// Channel designator that is not AIS channel A or B
    #[error("unsupported AIS channel {0:?}")]
    BadChannel(String),
}

/// AIS radio channel
///
/// Everything that is not channel A or B, including the bogus
/// `"12"` emitted by some receivers and channel C links, is
/// rejected at parse time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Channel A, 161.975 MHz
    A,
    /// Channel B, 162.025 MHz
    B,
}

impl Channel {
    pub(crate) fn index(self) -> usize {
        match self {
            Channel::A => 0,
            Channel::B => 1,
        }
    }
}

/// One parsed sentence, borrowing its payload from the input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Total fragments in this sequence
    pub fragment_count: u32,
    /// Position of this fragment, starting at 1
    pub fragment_index: u32,
    /// Sequential message id, where the talker assigns one
    pub message_id: Option<u32>,
    /// Radio channel the message was received on
    pub channel: Channel,
    /// Armored six-bit payload
    pub payload: &'a str,
    /// Count of fill bits in the final payload character
    pub pad: u8,
}

impl<'a> Sentence<'a> {
    /// Split and validate one NMEA line
    pub fn parse(line: &'a str) -> Result<Self, SentenceError> {
        if line.len() > MAX_SENTENCE_BYTES {
            return Err(SentenceError::TooLong);
        }

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 7 {
            return Err(SentenceError::MissingFields);
        }

        let fragment_count = parse_counter(fields[1])?;
        let fragment_index = parse_counter(fields[2])?;
        if fragment_index > fragment_count {
            return Err(SentenceError::BadFragmentIndex {
                index: fragment_index,
                count: fragment_count,
            });
        }

        let message_id = fields[3].parse::<u32>().ok();

        let channel = match fields[4] {
            // AIVDO self-reports often leave the channel blank
            "" | "1" | "A" => Channel::A,
            "2" | "B" => Channel::B,
            other => return Err(SentenceError::BadChannel(other.to_owned())),
        };

        let pad = match fields[6].bytes().next() {
            Some(digit @ b'0'..=b'7') => digit - b'0',
            _ => return Err(SentenceError::BadPad),
        };

        Ok(Sentence {
            fragment_count,
            fragment_index,
            message_id,
            channel,
            payload: fields[5],
            pad,
        })
    }
}

fn parse_counter(field: &str) -> Result<u32, SentenceError> {
    match field.parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(SentenceError::BadFragmentCount(field.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_fragment() {
        let line = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";
        let sentence = Sentence::parse(line).unwrap();
        assert_eq!(sentence.fragment_count, 1);
        assert_eq!(sentence.fragment_index, 1);
        assert_eq!(sentence.message_id, None);
        assert_eq!(sentence.channel, Channel::B);
        assert_eq!(sentence.payload, "177KQJ5000G?tO`K>RA1wUbN0TKH");
        assert_eq!(sentence.pad, 0);
    }

    #[test]
    fn multi_fragment_with_id() {
        let line = "!AIVDM,2,2,3,B,1@0000000000000,2*55";
        let sentence = Sentence::parse(line).unwrap();
        assert_eq!(sentence.fragment_count, 2);
        assert_eq!(sentence.fragment_index, 2);
        assert_eq!(sentence.message_id, Some(3));
        assert_eq!(sentence.pad, 2);
    }

    #[test]
    fn channel_designators() {
        let parse_channel = |designator: &str| {
            let line = format!("!AIVDM,1,1,,{designator},14eG,0*00");
            Sentence::parse(&line).map(|s| s.channel)
        };

        assert_eq!(parse_channel("A"), Ok(Channel::A));
        assert_eq!(parse_channel("1"), Ok(Channel::A));
        assert_eq!(parse_channel("B"), Ok(Channel::B));
        assert_eq!(parse_channel("2"), Ok(Channel::B));

        // AIVDO with no channel lands on A
        assert_eq!(parse_channel(""), Ok(Channel::A));

        // two-designator garbage and channel C are refused
        assert_eq!(
            parse_channel("12"),
            Err(SentenceError::BadChannel("12".to_owned()))
        );
        assert_eq!(
            parse_channel("C"),
            Err(SentenceError::BadChannel("C".to_owned()))
        );
    }

    #[test]
    fn overlong_line_rejected() {
        let line = format!("!AIVDM,1,1,,A,{},0*00", "1".repeat(200));
        assert_eq!(Sentence::parse(&line), Err(SentenceError::TooLong));
    }

    #[test]
    fn field_count_enforced() {
        assert_eq!(
            Sentence::parse("!AIVDM,1,1,,A,14eG"),
            Err(SentenceError::MissingFields)
        );
    }

    #[test]
    fn counters_validated() {
        assert!(matches!(
            Sentence::parse("!AIVDM,x,1,,A,14eG,0*00"),
            Err(SentenceError::BadFragmentCount(_))
        ));
        assert!(matches!(
            Sentence::parse("!AIVDM,1,0,,A,14eG,0*00"),
            Err(SentenceError::BadFragmentCount(_))
        ));
        assert_eq!(
            Sentence::parse("!AIVDM,2,3,,A,14eG,0*00"),
            Err(SentenceError::BadFragmentIndex { index: 3, count: 2 })
        );
    }

    #[test]
    fn pad_digit_validated() {
        // pads above 5 never carry data but some receivers emit them
        let pad_of = |digit: &str| {
            let line = format!("!AIVDM,1,1,,A,14eG,{digit}*00");
            Sentence::parse(&line).map(|s| s.pad)
        };

        assert_eq!(pad_of("0"), Ok(0));
        assert_eq!(pad_of("5"), Ok(5));
        assert_eq!(pad_of("6"), Ok(6));
        assert_eq!(pad_of("7"), Ok(7));
        assert_eq!(pad_of("8"), Err(SentenceError::BadPad));
        assert_eq!(pad_of("x"), Err(SentenceError::BadPad));
        assert_eq!(pad_of(""), Err(SentenceError::BadPad));
    }
}
