//! Core types shared by the animator, input parsing and readouts.

use palette::Srgb;

/// Tick interval of the [`AnimatorProfile::Resumable`] profile (roughly 3 ticks per second).
pub const RESUMABLE_TICK_MILLIS: u64 = 333;

/// Tick interval of the [`AnimatorProfile::Restarting`] profile.
pub const RESTARTING_TICK_MILLIS: u64 = 1000;

/// How the animator behaves across start, continue and completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorProfile {
    /// Start keeps the current color, continue is available and completed
    /// transitions are counted.
    Resumable,

    /// Every start zeroes the current color first. No continue, no counter.
    Restarting,
}

impl AnimatorProfile {
    /// Default tick interval for this profile in milliseconds.
    #[inline]
    pub const fn tick_millis(self) -> u64 {
        match self {
            AnimatorProfile::Resumable => RESUMABLE_TICK_MILLIS,
            AnimatorProfile::Restarting => RESTARTING_TICK_MILLIS,
        }
    }

    /// Whether a start zeroes the current color before ticking.
    #[inline]
    pub const fn restarts_from_black(self) -> bool {
        matches!(self, AnimatorProfile::Restarting)
    }

    /// Whether completed transitions are counted and reported.
    #[inline]
    pub const fn counts_completions(self) -> bool {
        matches!(self, AnimatorProfile::Resumable)
    }
}

/// One of the three color components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Single-letter label used by the input fields and the readout.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }

    /// Reads this channel from a color.
    #[inline]
    pub fn get(self, color: &Srgb<u8>) -> u8 {
        match self {
            Channel::Red => color.red,
            Channel::Green => color.green,
            Channel::Blue => color.blue,
        }
    }

    /// Mutable access to this channel of a color.
    #[inline]
    pub fn get_mut(self, color: &mut Srgb<u8>) -> &mut u8 {
        match self {
            Channel::Red => &mut color.red,
            Channel::Green => &mut color.green,
            Channel::Blue => &mut color.blue,
        }
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Clamps a signed integer into a channel value.
#[inline]
pub fn clamp_channel(value: i64) -> u8 {
    value.clamp(0, u8::MAX as i64) as u8
}

/// Builds a color from three signed integers, clamping each channel to 0-255.
#[inline]
pub fn clamped_rgb(red: i64, green: i64, blue: i64) -> Srgb<u8> {
    Srgb::new(clamp_channel(red), clamp_channel(green), clamp_channel(blue))
}
