use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::settings::{MAX_COUNT, MAX_MINIMUM, RngKind, Settings};

/// Generate passwords that meet per-class minimums and exclusion rules.
///
/// Flags override the saved defaults for this run; add --save to keep them.
#[derive(Parser, Debug, Default)]
#[command(name = "classpass", version)]
pub struct CliFlags {
    /// Password length
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(4..=128))]
    pub length: Option<u16>,

    /// Number of passwords to generate
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_COUNT as i64))]
    pub number: Option<u32>,

    /// Include uppercase letters (A-Z)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub upper: Option<bool>,

    /// Include lowercase letters (a-z)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub lower: Option<bool>,

    /// Include digits (0-9)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub digits: Option<bool>,

    /// Include symbols (!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub symbols: Option<bool>,

    /// Enforce the per-class minimums
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub enforce: Option<bool>,

    /// Minimum uppercase letters
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(0..=MAX_MINIMUM as i64))]
    pub min_upper: Option<u16>,

    /// Minimum lowercase letters
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(0..=MAX_MINIMUM as i64))]
    pub min_lower: Option<u16>,

    /// Minimum digits
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(0..=MAX_MINIMUM as i64))]
    pub min_digits: Option<u16>,

    /// Minimum symbols
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(0..=MAX_MINIMUM as i64))]
    pub min_symbols: Option<u16>,

    /// Exclude ambiguous characters (il1Lo0O)
    #[arg(short = 'a', long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub exclude_ambiguous: Option<bool>,

    /// Exclude similar characters (il1Lo0O|`)
    #[arg(short = 's', long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub exclude_similar: Option<bool>,

    /// Exclude these characters (case-sensitive)
    #[arg(short = 'x', long, value_name = "CHARS")]
    pub exclude: Option<String>,

    /// Random source
    #[arg(long, value_enum)]
    pub rng: Option<RngKind>,

    /// Reproducible output from a seeded generator (not for real passwords)
    #[arg(long, value_name = "SEED", conflicts_with = "rng")]
    pub seed: Option<u64>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board", conflicts_with = "output")]
    pub clipboard: bool,

    /// Append passwords to a file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print passwords only
    #[arg(short, long)]
    pub quiet: bool,

    /// Save these options as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Restore built-in defaults and exit
    #[arg(long, conflicts_with = "save")]
    pub reset: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliFlags {
    /// Overlay explicit flags onto `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(length) = self.length {
            settings.length = length.into();
        }
        if let Some(number) = self.number {
            settings.count = number as usize;
        }

        let toggles = [
            (self.upper, &mut settings.uppercase),
            (self.lower, &mut settings.lowercase),
            (self.digits, &mut settings.digits),
            (self.symbols, &mut settings.symbols),
            (self.enforce, &mut settings.enforce_minimums),
            (self.exclude_ambiguous, &mut settings.exclude_ambiguous),
            (self.exclude_similar, &mut settings.exclude_similar),
        ];
        for (flag, field) in toggles {
            if let Some(value) = flag {
                *field = value;
            }
        }

        let minimums = [
            (self.min_upper, &mut settings.min_uppercase),
            (self.min_lower, &mut settings.min_lowercase),
            (self.min_digits, &mut settings.min_digits),
            (self.min_symbols, &mut settings.min_symbols),
        ];
        for (flag, field) in minimums {
            if let Some(value) = flag {
                *field = value.into();
            }
        }

        if let Some(ref chars) = self.exclude {
            settings.exclude = chars.clone();
        }
        if let Some(rng) = self.rng {
            settings.rng = rng;
        }
    }

    /// Log filter directive for `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
