//! Parsing of the R, G and B text fields into a clamped target color.
//!
//! Any integer is accepted and clamped into 0-255, including integers too
//! large for `i64`. Only text that is not an integer at all is rejected.

use crate::types::{Channel, clamp_channel};
use core::num::IntErrorKind;
use palette::Srgb;

/// Why a text field could not be read as a channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputErrorKind {
    /// The field was empty or only whitespace.
    Empty,

    /// The field contained something other than an integer.
    NotANumber,
}

/// A text field that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputError {
    /// The offending field.
    pub channel: Channel,
    pub kind: InputErrorKind,
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            InputErrorKind::Empty => write!(f, "{} field is empty", self.channel),
            InputErrorKind::NotANumber => write!(f, "{} field is not an integer", self.channel),
        }?;
        write!(f, "; enter numbers between 0 and 255 for R, G, B")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Parses a single field, clamping the result into 0-255.
pub fn parse_channel(channel: Channel, text: &str) -> Result<u8, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputError {
            channel,
            kind: InputErrorKind::Empty,
        });
    }

    match text.parse::<i64>() {
        Ok(value) => Ok(clamp_channel(value)),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(u8::MAX),
            IntErrorKind::NegOverflow => Ok(0),
            _ => Err(InputError {
                channel,
                kind: InputErrorKind::NotANumber,
            }),
        },
    }
}

/// Parses all three fields into a target color.
///
/// Fields are checked in R, G, B order and the first failure is reported.
pub fn parse_target(red: &str, green: &str, blue: &str) -> Result<Srgb<u8>, InputError> {
    Ok(Srgb::new(
        parse_channel(Channel::Red, red)?,
        parse_channel(Channel::Green, green)?,
        parse_channel(Channel::Blue, blue)?,
    ))
}
