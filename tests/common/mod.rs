//! Shared test infrastructure for color-finder integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use color_finder::{
    AnimatorProfile, ColorAnimator, ColorDisplay, Srgb, TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// Mock display that records every color and completion count it is shown
pub struct MockDisplay {
    colors: heapless::Vec<Srgb<u8>, 600>,
    completions: heapless::Vec<u32, 16>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            colors: heapless::Vec::new(),
            completions: heapless::Vec::new(),
        }
    }

    pub fn last_color(&self) -> Option<Srgb<u8>> {
        self.colors.last().copied()
    }

    pub fn color_history(&self) -> &[Srgb<u8>] {
        &self.colors
    }

    pub fn completion_history(&self) -> &[u32] {
        &self.completions
    }
}

impl ColorDisplay for MockDisplay {
    fn show_color(&mut self, color: Srgb<u8>) {
        let _ = self.colors.push(color);
    }

    fn show_completed(&mut self, count: u32) {
        let _ = self.completions.push(count);
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub type TestAnimator<'t> = ColorAnimator<'t, TestInstant, MockDisplay, MockTimeSource>;

pub fn resumable(timer: &MockTimeSource) -> TestAnimator<'_> {
    ColorAnimator::new(AnimatorProfile::Resumable, MockDisplay::new(), timer)
}

pub fn restarting(timer: &MockTimeSource) -> TestAnimator<'_> {
    ColorAnimator::new(AnimatorProfile::Restarting, MockDisplay::new(), timer)
}

pub fn rgb(red: u8, green: u8, blue: u8) -> Srgb<u8> {
    Srgb::new(red, green, blue)
}

/// Advances the clock by one tick interval and services the animator
pub fn advance_one_tick(animator: &mut TestAnimator<'_>, timer: &MockTimeSource) {
    timer.advance(animator.tick_interval());
    let _ = animator.service();
}
