// Timing, limits and command-line configuration for the visualizer

use crate::heap::Person;
use crate::snapshot::StepKind;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Lightest accepted weight (kg)
pub const MIN_WEIGHT: u32 = 1;

/// Heaviest accepted weight (kg)
pub const MAX_WEIGHT: u32 = 300;

pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 3.0;
pub const DEFAULT_SPEED: f64 = 1.0;

/// Increment used by the speed keys
pub const SPEED_STEP: f64 = 0.25;

/// Weights of the built-in data set, assigned ids 1..=30
const INITIAL_WEIGHTS: [u32; 30] = [
    72, 85, 64, 90, 58, 77, 81, 69, 95, 62, 74, 88, 55, 67, 79, 83, 60, 92, 71, 66, 87, 59, 76,
    80, 68, 94, 63, 73, 86, 70,
];

/// Per-phase animation delays at speed 1.0
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationConfig {
    pub insert_highlight: Duration,
    pub insert_compare: Duration,
    pub insert_swap: Duration,
    pub extract_highlight: Duration,
    pub extract_compare: Duration,
    pub extract_swap: Duration,
    pub step_default: Duration,
}

impl AnimationConfig {
    /// Base delay for a sort step before speed scaling
    pub fn step_delay(&self, kind: StepKind) -> Duration {
        match kind {
            StepKind::ExtractStart => self.extract_highlight,
            StepKind::Compare => self.extract_compare,
            StepKind::Swap => self.extract_swap,
            StepKind::ExtractEnd | StepKind::Complete => self.step_default,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            insert_highlight: Duration::from_millis(500),
            insert_compare: Duration::from_millis(600),
            insert_swap: Duration::from_millis(800),
            extract_highlight: Duration::from_millis(800),
            extract_compare: Duration::from_millis(600),
            extract_swap: Duration::from_millis(800),
            step_default: Duration::from_millis(400),
        }
    }
}

/// Clamp a playback speed into the supported range.
/// Non-finite values fall back to the default speed.
pub fn clamp_speed(speed: f64) -> f64 {
    if speed.is_finite() {
        speed.clamp(MIN_SPEED, MAX_SPEED)
    } else {
        DEFAULT_SPEED
    }
}

/// Build people from weights, assigning ids from 1
pub fn people_from_weights(weights: &[u32]) -> Vec<Person> {
    weights
        .iter()
        .zip(1u32..)
        .map(|(&weight, id)| Person::new(id, weight))
        .collect()
}

/// The built-in starting data set
pub fn initial_people() -> Vec<Person> {
    people_from_weights(&INITIAL_WEIGHTS)
}

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "heapviz", version, about = "Step through max-heap inserts and heap sort")]
pub struct Cli {
    /// Comma-separated starting weights (replaces the built-in data set)
    #[arg(long, value_delimiter = ',', conflicts_with = "empty")]
    pub weights: Option<Vec<String>>,

    /// Start with an empty heap
    #[arg(long)]
    pub empty: bool,

    /// Initial playback speed (0.25 to 3)
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    pub speed: f64,

    /// File that receives log output
    #[arg(long, default_value = "heapviz.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Directory for JSON exports
    #[arg(long, default_value = ".")]
    pub export_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_people() {
        let people = initial_people();
        assert_eq!(people.len(), 30);
        assert_eq!(people[0].person_id, 1);
        assert_eq!(people[29].person_id, 30);
        assert!(people
            .iter()
            .all(|p| (MIN_WEIGHT..=MAX_WEIGHT).contains(&p.weight)));
    }

    #[test]
    fn test_clamp_speed() {
        assert_eq!(clamp_speed(0.1), MIN_SPEED);
        assert_eq!(clamp_speed(5.0), MAX_SPEED);
        assert_eq!(clamp_speed(1.5), 1.5);
        assert_eq!(clamp_speed(f64::NAN), DEFAULT_SPEED);
    }

    #[test]
    fn test_step_delays() {
        let config = AnimationConfig::default();
        assert_eq!(config.step_delay(StepKind::ExtractStart), Duration::from_millis(800));
        assert_eq!(config.step_delay(StepKind::Compare), Duration::from_millis(600));
        assert_eq!(config.step_delay(StepKind::Swap), Duration::from_millis(800));
        assert_eq!(config.step_delay(StepKind::ExtractEnd), Duration::from_millis(400));
        assert_eq!(config.step_delay(StepKind::Complete), Duration::from_millis(400));
    }

    #[test]
    fn test_cli_parses_weights() {
        let cli = Cli::parse_from(["heapviz", "--weights", "80,50,60", "--speed", "2"]);
        assert_eq!(
            cli.weights,
            Some(vec!["80".to_string(), "50".to_string(), "60".to_string()])
        );
        assert_eq!(cli.speed, 2.0);
        assert!(!cli.empty);
    }
}
