//! Console front end for color-finder
//!
//! Steps a swatch toward the color given on the command line, printing a
//! truecolor block and the RGB readout after every tick.
//!
//! Usage:
//!   cd demos/console
//!   cargo run -- <R> <G> <B> [--restarting] [--interval-ms <ms>]

use color_finder::{
    AnimatorProfile, ColorAnimator, ColorDisplay, CompletionReadout, RgbReadout, ServiceTiming,
    TimeDuration, TimeInstant, TimeSource,
};
use palette::Srgb;
use std::process::ExitCode;
use std::time::{Duration, Instant};

const USAGE: &str = "usage: color-finder-console <R> <G> <B> [--restarting] [--interval-ms <ms>]";

// ============================================================================
// std time wrappers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct StdDuration(Duration);

impl TimeDuration for StdDuration {
    const ZERO: Self = StdDuration(Duration::ZERO);

    fn as_millis(&self) -> u64 {
        self.0.as_millis() as u64
    }

    fn from_millis(millis: u64) -> Self {
        StdDuration(Duration::from_millis(millis))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct StdInstant(Instant);

impl TimeInstant for StdInstant {
    type Duration = StdDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        StdDuration(self.0.saturating_duration_since(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(StdInstant)
    }
}

struct SystemClock;

impl TimeSource<StdInstant> for SystemClock {
    fn now(&self) -> StdInstant {
        StdInstant(Instant::now())
    }
}

// ============================================================================
// Terminal display
// ============================================================================

struct TerminalDisplay;

impl ColorDisplay for TerminalDisplay {
    fn show_color(&mut self, color: Srgb<u8>) {
        println!(
            "\x1b[48;2;{};{};{}m      \x1b[0m  {}",
            color.red,
            color.green,
            color.blue,
            RgbReadout(color)
        );
    }

    fn show_completed(&mut self, count: u32) {
        println!("{}", CompletionReadout(count));
    }
}

// ============================================================================
// Arguments
// ============================================================================

struct Options {
    fields: [String; 3],
    profile: AnimatorProfile,
    interval_ms: Option<u64>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut fields = Vec::with_capacity(3);
    let mut profile = AnimatorProfile::Resumable;
    let mut interval_ms = None;

    let mut args = args;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--restarting" => profile = AnimatorProfile::Restarting,
            "--interval-ms" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--interval-ms needs a value".to_string())?;
                let millis = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid interval: {}", value))?;
                interval_ms = Some(millis);
            }
            _ => fields.push(arg),
        }
    }

    let fields: [String; 3] = fields
        .try_into()
        .map_err(|given: Vec<String>| format!("expected 3 color fields, got {}", given.len()))?;

    Ok(Options {
        fields,
        profile,
        interval_ms,
    })
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let clock = SystemClock;
    let mut animator =
        ColorAnimator::<StdInstant, _, _>::new(options.profile, TerminalDisplay, &clock);
    if let Some(millis) = options.interval_ms {
        animator = animator.with_tick_interval(StdDuration::from_millis(millis));
    }

    let [red, green, blue] = &options.fields;
    let mut timing = match animator.submit(red, green, blue) {
        Ok(timing) => timing,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    while let ServiceTiming::Delay(delay) = timing {
        std::thread::sleep(delay.0);
        timing = match animator.service() {
            Ok(timing) => timing,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            }
        };
    }

    ExitCode::SUCCESS
}
