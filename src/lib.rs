#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ColorAnimator`**: Steps a swatch from its current color toward a target, one unit per channel per tick
//! - **`AnimatorProfile`**: `Resumable` (333 ms, continue, completion counter) or `Restarting` (1000 ms, zeroes on start)
//! - **`ColorDisplay`**: Trait to implement for whatever renders the swatch
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ServiceTiming`**: When the animator needs to be serviced again
//! - **`RgbReadout`** / **`CompletionReadout`**: The text labels shown next to the swatch
//! - **`AnimatorAction`**: Commands that can be sent to control animators
//!
//! Colors are `Srgb<u8>`, so every channel is always within 0-255. Text input
//! is parsed with [`input::parse_target`], which clamps out-of-range integers.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod time;
pub mod types;
pub mod input;
pub mod readout;
pub mod animator;
pub mod command;

pub use animator::{
    AnimatorError, AnimatorState, ColorAnimator, ColorDisplay, ServiceTiming, TickOutcome,
};
pub use command::{AnimatorAction, AnimatorCommand};
pub use input::{InputError, InputErrorKind, parse_channel, parse_target};
pub use readout::{CompletionReadout, RgbReadout};
pub use time::{TimeDuration, TimeInstant, TimeSource};
pub use types::{
    AnimatorProfile, Channel, RESTARTING_TICK_MILLIS, RESUMABLE_TICK_MILLIS, clamp_channel,
    clamped_rgb,
};

/// The color every animator starts from and resets to.
pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
