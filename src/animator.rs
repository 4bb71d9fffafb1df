//! Color animator with state management and tick scheduling.
//!
//! Provides [`ColorAnimator`] which steps a swatch from its current color toward
//! a target, one unit per channel per tick, and the [`ColorDisplay`] trait through
//! which it reports every change to a rendering surface.

use crate::BLACK;
use crate::command::AnimatorAction;
use crate::input::{InputError, parse_target};
use crate::readout::{CompletionReadout, RgbReadout};
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{AnimatorProfile, Channel, clamped_rgb};
use palette::Srgb;

/// Trait for abstracting the surface that shows the swatch.
///
/// Implement this for whatever renders the color (a window, a terminal, an
/// RGB LED). Handle rendering errors internally - these methods cannot fail.
pub trait ColorDisplay {
    /// Shows the current swatch color. Called after every tick and on reset.
    fn show_color(&mut self, color: Srgb<u8>);

    /// Shows the number of completed transitions.
    ///
    /// Only called by animators with a counting profile.
    fn show_completed(&mut self, _count: u32) {}
}

/// Whether the animator is currently ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorState {
    /// No tick is scheduled. The swatch holds its current color.
    Idle,
    /// A tick is scheduled every interval until the target is reached.
    Running,
}

/// Timing information returned by service operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// Service again after the specified delay.
    Delay(D),

    /// Nothing is scheduled. No further servicing is needed until the
    /// animator is started or continued again.
    Complete,
}

/// Result of applying a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// At least one channel moved one unit closer to the target.
    Advanced,
    /// No channel changed. The animator is now idle.
    Completed,
}

/// Errors that can occur during animator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimatorError {
    /// A target field could not be parsed. Nothing was changed.
    InvalidInput(InputError),

    /// Operation called from an invalid state.
    InvalidState {
        /// Human-readable description of the expected state, e.g. "Running"
        expected: &'static str,
        /// The actual current state
        actual: AnimatorState,
    },

    /// Operation is not available on this animator's profile.
    Unsupported {
        operation: &'static str,
        profile: AnimatorProfile,
    },
}

impl core::fmt::Display for AnimatorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AnimatorError::InvalidInput(err) => write!(f, "invalid input: {}", err),
            AnimatorError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {}, but animator is {:?}",
                    expected, actual
                )
            }
            AnimatorError::Unsupported { operation, profile } => {
                write!(f, "{} is not supported by the {:?} profile", operation, profile)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AnimatorError {}

impl From<InputError> for AnimatorError {
    fn from(err: InputError) -> Self {
        AnimatorError::InvalidInput(err)
    }
}

/// Steps a swatch toward a target color on a fixed tick interval.
///
/// Each tick raises every channel that is still below its target by one. Channels
/// never move down: a target below the current color on some channel simply
/// leaves that channel where it is. When a tick changes nothing the animator
/// stops and reports completion.
///
/// The animator does not own a timer. The host loop calls [`service`](Self::service)
/// and sleeps for the returned delay, and every tick that has come due by then
/// is applied.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `D` - Display implementation type
/// * `T` - Time source implementation type
pub struct ColorAnimator<'t, I: TimeInstant, D: ColorDisplay, T: TimeSource<I>> {
    display: D,
    time_source: &'t T,
    profile: AnimatorProfile,
    tick_interval: I::Duration,
    state: AnimatorState,
    current: Srgb<u8>,
    target: Srgb<u8>,
    completed: u32,
    next_tick: Option<I>,
}

impl<'t, I: TimeInstant, D: ColorDisplay, T: TimeSource<I>> ColorAnimator<'t, I, D, T> {
    /// Creates an idle animator showing black, ticking at the profile's default interval.
    pub fn new(profile: AnimatorProfile, mut display: D, time_source: &'t T) -> Self {
        display.show_color(BLACK);

        Self {
            display,
            time_source,
            profile,
            tick_interval: I::Duration::from_millis(profile.tick_millis()),
            state: AnimatorState::Idle,
            current: BLACK,
            target: BLACK,
            completed: 0,
            next_tick: None,
        }
    }

    /// Overrides the tick interval. Takes effect from the next scheduled tick.
    pub fn with_tick_interval(mut self, interval: I::Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Handles an animator action by dispatching to the appropriate method.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming::Delay)` - Animator is running, service after this delay
    /// * `Ok(ServiceTiming::Complete)` - Animator is idle after the action
    /// * `Err` - Operation not supported by this profile
    pub fn handle_action(
        &mut self,
        action: AnimatorAction,
    ) -> Result<ServiceTiming<I::Duration>, AnimatorError> {
        match action {
            AnimatorAction::SetTarget(target) => {
                self.set_target_color(target);
                Ok(self.pending())
            }
            AnimatorAction::Submit(target) => Ok(self.submit_color(target)),
            AnimatorAction::Start => Ok(self.start()),
            AnimatorAction::Stop => {
                self.stop();
                Ok(ServiceTiming::Complete)
            }
            AnimatorAction::Reset => {
                self.reset();
                Ok(ServiceTiming::Complete)
            }
            AnimatorAction::Continue => self.continue_animation(),
        }
    }

    /// Parses the three text fields and sets the target.
    ///
    /// Out-of-range integers are clamped into 0-255. On invalid input nothing
    /// is changed and the error names the offending field.
    pub fn set_target(
        &mut self,
        red: &str,
        green: &str,
        blue: &str,
    ) -> Result<Srgb<u8>, AnimatorError> {
        let target = parse_target(red, green, blue)?;
        self.set_target_color(target);
        Ok(target)
    }

    /// Sets the target from signed integers, clamping each channel into 0-255.
    pub fn set_target_clamped(&mut self, red: i64, green: i64, blue: i64) -> Srgb<u8> {
        let target = clamped_rgb(red, green, blue);
        self.set_target_color(target);
        target
    }

    /// Sets the target color.
    pub fn set_target_color(&mut self, target: Srgb<u8>) {
        self.target = target;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "target set to ({}, {}, {})",
            target.red,
            target.green,
            target.blue
        );
    }

    /// Parses the three text fields, sets the target and starts ticking.
    ///
    /// Either everything happens or, on invalid input, nothing does: the
    /// current color, the target and the running state stay as they were.
    pub fn submit(
        &mut self,
        red: &str,
        green: &str,
        blue: &str,
    ) -> Result<ServiceTiming<I::Duration>, AnimatorError> {
        let target = parse_target(red, green, blue)?;
        Ok(self.submit_color(target))
    }

    /// Sets the target color and starts ticking.
    pub fn submit_color(&mut self, target: Srgb<u8>) -> ServiceTiming<I::Duration> {
        self.set_target_color(target);
        self.start()
    }

    /// Starts ticking toward the current target. Can be called from any state.
    ///
    /// The first tick comes due one interval from now. A `Restarting` animator
    /// zeroes the current color first; a `Resumable` one continues from
    /// whatever color it shows.
    pub fn start(&mut self) -> ServiceTiming<I::Duration> {
        if self.profile.restarts_from_black() {
            self.current = BLACK;
        }

        self.schedule_from_now()
    }

    /// Resumes ticking without touching the current color or the target.
    ///
    /// Does nothing if already running. Only available on the `Resumable` profile.
    pub fn continue_animation(&mut self) -> Result<ServiceTiming<I::Duration>, AnimatorError> {
        if self.profile != AnimatorProfile::Resumable {
            return Err(AnimatorError::Unsupported {
                operation: "continue",
                profile: self.profile,
            });
        }

        if self.state == AnimatorState::Running {
            return Ok(self.pending());
        }

        Ok(self.schedule_from_now())
    }

    /// Stops ticking. The swatch keeps its current color.
    ///
    /// Stopping an idle animator does nothing.
    pub fn stop(&mut self) {
        if self.state != AnimatorState::Running {
            return;
        }

        self.state = AnimatorState::Idle;
        self.next_tick = None;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "animator stopped at ({}, {}, {})",
            self.current.red,
            self.current.green,
            self.current.blue
        );
    }

    /// Stops ticking and sets the swatch back to black. Can be called from any state.
    pub fn reset(&mut self) {
        self.state = AnimatorState::Idle;
        self.next_tick = None;
        self.current = BLACK;
        self.display.show_color(self.current);

        #[cfg(feature = "defmt")]
        defmt::debug!("animator reset");
    }

    /// Services the animator, applying every tick that has come due.
    ///
    /// Must be called from `Running` state. Ticks missed because the host
    /// serviced late are applied in order, each one reported to the display.
    ///
    /// # Returns
    /// - `Ok(ServiceTiming::Delay(duration))` - Service again after this delay
    /// - `Ok(ServiceTiming::Complete)` - Target reached, animator is now idle
    /// - `Err` - Invalid state
    pub fn service(&mut self) -> Result<ServiceTiming<I::Duration>, AnimatorError> {
        if self.state != AnimatorState::Running {
            return Err(AnimatorError::InvalidState {
                expected: "Running",
                actual: self.state,
            });
        }

        let now = self.time_source.now();
        let mut due = self.next_tick.unwrap_or(now);

        while now >= due {
            if self.tick() == TickOutcome::Completed {
                return Ok(ServiceTiming::Complete);
            }

            // On instant overflow the next tick is due immediately. Catching up
            // still ends at the completion tick.
            due = due.checked_add(self.tick_interval).unwrap_or(now);
            self.next_tick = Some(due);
        }

        Ok(ServiceTiming::Delay(due.duration_since(now)))
    }

    /// Applies one step of the animation, independent of the clock.
    ///
    /// Raises each channel below its target by one and shows the result. If no
    /// channel changed, the animator goes idle and, on a counting profile,
    /// records and shows one more completed transition.
    pub fn tick(&mut self) -> TickOutcome {
        let mut changed = false;

        for channel in Channel::ALL {
            let target = channel.get(&self.target);
            let value = channel.get_mut(&mut self.current);
            if *value < target {
                *value += 1;
                changed = true;
            }
        }

        self.display.show_color(self.current);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "tick ({}, {}, {})",
            self.current.red,
            self.current.green,
            self.current.blue
        );

        if changed {
            return TickOutcome::Advanced;
        }

        self.state = AnimatorState::Idle;
        self.next_tick = None;

        if self.profile.counts_completions() {
            self.completed = self.completed.saturating_add(1);
            self.display.show_completed(self.completed);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("transition complete, {} so far", self.completed);

        TickOutcome::Completed
    }

    /// Returns the current state of the animator.
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    /// Returns true if ticks are scheduled.
    pub fn is_running(&self) -> bool {
        self.state == AnimatorState::Running
    }

    /// Returns the color currently shown on the swatch.
    pub fn current_color(&self) -> Srgb<u8> {
        self.current
    }

    /// Returns the color being stepped toward.
    pub fn target_color(&self) -> Srgb<u8> {
        self.target
    }

    /// Returns the number of completed transitions. Always 0 on a non-counting profile.
    pub fn completed_transitions(&self) -> u32 {
        self.completed
    }

    pub fn profile(&self) -> AnimatorProfile {
        self.profile
    }

    pub fn tick_interval(&self) -> I::Duration {
        self.tick_interval
    }

    /// Returns the time until the next tick, if running.
    pub fn time_until_next_tick(&self) -> Option<I::Duration> {
        self.next_tick.map(|due| self.remaining_until(due))
    }

    /// Returns the `R: <r> | G: <g> | B: <b>` readout for the current color.
    pub fn readout(&self) -> RgbReadout {
        RgbReadout(self.current)
    }

    /// Returns the completed transitions readout, if this profile counts them.
    pub fn completion_readout(&self) -> Option<CompletionReadout> {
        self.profile
            .counts_completions()
            .then_some(CompletionReadout(self.completed))
    }

    /// Returns a reference to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Returns a mutable reference to the display.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn schedule_from_now(&mut self) -> ServiceTiming<I::Duration> {
        let now = self.time_source.now();
        self.next_tick = Some(now.checked_add(self.tick_interval).unwrap_or(now));
        self.state = AnimatorState::Running;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "animator running from ({}, {}, {}) toward ({}, {}, {})",
            self.current.red,
            self.current.green,
            self.current.blue,
            self.target.red,
            self.target.green,
            self.target.blue
        );

        self.pending()
    }

    fn pending(&self) -> ServiceTiming<I::Duration> {
        match self.time_until_next_tick() {
            Some(delay) => ServiceTiming::Delay(delay),
            None => ServiceTiming::Complete,
        }
    }

    fn remaining_until(&self, due: I) -> I::Duration {
        let now = self.time_source.now();
        if now >= due {
            I::Duration::ZERO
        } else {
            due.duration_since(now)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{TimeDuration, TimeInstant};
    use heapless::Vec;
    extern crate std;
    use std::string::ToString;

    // Mock Duration type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestDuration(u64);

    impl TimeDuration for TestDuration {
        const ZERO: Self = TestDuration(0);

        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            TestDuration(millis)
        }
    }

    // Mock Instant type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    struct TestInstant(u64);

    impl TimeInstant for TestInstant {
        type Duration = TestDuration;

        fn duration_since(&self, earlier: Self) -> Self::Duration {
            TestDuration(self.0 - earlier.0)
        }

        fn checked_add(self, duration: Self::Duration) -> Option<Self> {
            Some(TestInstant(self.0 + duration.0))
        }
    }

    // Mock display that records every color shown
    struct MockDisplay {
        colors: Vec<Srgb<u8>, 64>,
        completed: Option<u32>,
    }

    impl MockDisplay {
        fn new() -> Self {
            Self {
                colors: Vec::new(),
                completed: None,
            }
        }
    }

    impl ColorDisplay for MockDisplay {
        fn show_color(&mut self, color: Srgb<u8>) {
            let _ = self.colors.push(color);
        }

        fn show_completed(&mut self, count: u32) {
            self.completed = Some(count);
        }
    }

    // Mock time source with controllable time
    struct MockTimeSource {
        current_time: core::cell::Cell<TestInstant>,
    }

    impl MockTimeSource {
        fn new() -> Self {
            Self {
                current_time: core::cell::Cell::new(TestInstant(0)),
            }
        }

        fn advance(&self, duration: TestDuration) {
            let current = self.current_time.get();
            self.current_time.set(TestInstant(current.0 + duration.0));
        }
    }

    impl TimeSource<TestInstant> for MockTimeSource {
        fn now(&self) -> TestInstant {
            self.current_time.get()
        }
    }

    type Animator<'t> = ColorAnimator<'t, TestInstant, MockDisplay, MockTimeSource>;

    #[test]
    fn new_animator_is_idle_and_shows_black() {
        let timer = MockTimeSource::new();
        let animator = Animator::new(AnimatorProfile::Resumable, MockDisplay::new(), &timer);

        assert_eq!(animator.state(), AnimatorState::Idle);
        assert_eq!(animator.current_color(), BLACK);
        assert_eq!(animator.display().colors.as_slice(), &[BLACK]);
    }

    #[test]
    fn profile_sets_default_tick_interval() {
        let timer = MockTimeSource::new();
        let resumable = Animator::new(AnimatorProfile::Resumable, MockDisplay::new(), &timer);
        let restarting = Animator::new(AnimatorProfile::Restarting, MockDisplay::new(), &timer);

        assert_eq!(resumable.tick_interval(), TestDuration(333));
        assert_eq!(restarting.tick_interval(), TestDuration(1000));
    }

    #[test]
    fn service_requires_running_state() {
        let timer = MockTimeSource::new();
        let mut animator = Animator::new(AnimatorProfile::Resumable, MockDisplay::new(), &timer);

        let result = animator.service();
        assert!(matches!(
            result,
            Err(AnimatorError::InvalidState {
                actual: AnimatorState::Idle,
                ..
            })
        ));
    }

    #[test]
    fn start_schedules_first_tick_one_interval_out() {
        let timer = MockTimeSource::new();
        let mut animator = Animator::new(AnimatorProfile::Resumable, MockDisplay::new(), &timer);
        animator.set_target_clamped(1, 1, 1);

        assert_eq!(animator.start(), ServiceTiming::Delay(TestDuration(333)));

        // Nothing is due yet
        timer.advance(TestDuration(100));
        assert_eq!(
            animator.service(),
            Ok(ServiceTiming::Delay(TestDuration(233)))
        );
        assert_eq!(animator.current_color(), BLACK);

        timer.advance(TestDuration(233));
        animator.service().unwrap();
        assert_eq!(animator.current_color(), Srgb::new(1, 1, 1));
    }

    #[test]
    fn late_service_catches_up_missed_ticks() {
        let timer = MockTimeSource::new();
        let mut animator = Animator::new(AnimatorProfile::Restarting, MockDisplay::new(), &timer);
        animator.set_target_clamped(10, 0, 0);
        animator.start();

        timer.advance(TestDuration(3500));
        assert_eq!(
            animator.service(),
            Ok(ServiceTiming::Delay(TestDuration(500)))
        );
        assert_eq!(animator.current_color(), Srgb::new(3, 0, 0));
    }

    #[test]
    fn tick_reports_completion_once_nothing_changes() {
        let timer = MockTimeSource::new();
        let mut animator = Animator::new(AnimatorProfile::Resumable, MockDisplay::new(), &timer);
        animator.set_target_clamped(1, 0, 0);
        animator.start();

        assert_eq!(animator.tick(), TickOutcome::Advanced);
        assert!(animator.is_running());
        assert_eq!(animator.tick(), TickOutcome::Completed);
        assert!(!animator.is_running());
        assert_eq!(animator.completed_transitions(), 1);
        assert_eq!(animator.display().completed, Some(1));
    }

    #[test]
    fn time_until_next_tick_is_none_when_idle() {
        let timer = MockTimeSource::new();
        let mut animator = Animator::new(AnimatorProfile::Resumable, MockDisplay::new(), &timer);
        assert_eq!(animator.time_until_next_tick(), None);

        animator.start();
        assert_eq!(animator.time_until_next_tick(), Some(TestDuration(333)));

        animator.stop();
        assert_eq!(animator.time_until_next_tick(), None);
    }

    #[test]
    fn error_display_names_the_problem() {
        let err = AnimatorError::Unsupported {
            operation: "continue",
            profile: AnimatorProfile::Restarting,
        };
        assert_eq!(
            err.to_string(),
            "continue is not supported by the Restarting profile"
        );
    }
}
