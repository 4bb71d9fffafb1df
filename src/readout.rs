//! Text readouts shown next to the swatch.
//!
//! Both readouts implement [`core::fmt::Display`] and can also render into a
//! fixed-capacity [`heapless::String`] for displays without an allocator.

use core::fmt::Write;
use heapless::String;
use palette::Srgb;

/// Capacity that fits the widest RGB readout, `R: 255 | G: 255 | B: 255`.
pub const RGB_READOUT_CAPACITY: usize = 24;

/// Capacity that fits `Completed Transitions: ` followed by any `u32`.
pub const COMPLETION_READOUT_CAPACITY: usize = 33;

/// `R: <r> | G: <g> | B: <b>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbReadout(pub Srgb<u8>);

impl RgbReadout {
    /// Renders the readout without allocating.
    pub fn render(&self) -> String<RGB_READOUT_CAPACITY> {
        let mut text = String::new();
        // Capacity covers the widest possible value.
        let _ = write!(text, "{}", self);
        text
    }
}

impl core::fmt::Display for RgbReadout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "R: {} | G: {} | B: {}",
            self.0.red, self.0.green, self.0.blue
        )
    }
}

/// `Completed Transitions: <n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionReadout(pub u32);

impl CompletionReadout {
    /// Renders the readout without allocating.
    pub fn render(&self) -> String<COMPLETION_READOUT_CAPACITY> {
        let mut text = String::new();
        let _ = write!(text, "{}", self);
        text
    }
}

impl core::fmt::Display for CompletionReadout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Completed Transitions: {}", self.0)
    }
}
