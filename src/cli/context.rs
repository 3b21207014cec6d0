//! CLI context - bundles settings, flags, and output handling.

use std::io::Write;
use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, info};
use zeroize::Zeroize;

use super::{CliFlags, Error, prompts};
use crate::pass::{self, Password, output};
use crate::rand::{Rand, RandomSource, RngSource};
use crate::settings::{self, MAX_COUNT, RngKind, Settings};

/// Application context for one CLI invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    settings_path: PathBuf,
}

impl Context {
    /// Context backed by the settings file in the user's config directory.
    pub fn new(flags: CliFlags) -> Self {
        Self::with_settings_path(flags, settings::default_path())
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// unreadable, then overlay the flags. `--reset` skips both.
    pub fn with_settings_path(flags: CliFlags, path: PathBuf) -> Self {
        let settings = if flags.reset {
            Settings::default()
        } else {
            let mut settings = Settings::load_from(&path).unwrap_or_else(|e| {
                prompts::warn(flags.quiet, &format!("Failed to load settings: {e}"));
                Settings::default()
            });
            flags.apply(&mut settings);
            settings
        };
        debug!(?settings, "effective settings");

        Self {
            settings,
            flags,
            settings_path: path,
        }
    }

    /// Run to stdout.
    pub fn run(&mut self) -> Result<(), Error> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Run, writing terminal output to `out`.
    pub fn run_with<W: Write>(&mut self, out: &mut W) -> Result<(), Error> {
        if self.flags.reset {
            self.settings.save_to(&self.settings_path)?;
            prompts::settings_reset(self.flags.quiet, &self.settings_path);
            return Ok(());
        }
        if self.flags.save {
            self.settings.save_to(&self.settings_path)?;
            prompts::settings_saved(self.flags.quiet, &self.settings_path);
        }

        let config = self.settings.to_config()?;
        let pool = pass::build(&config)?;
        let mut rng = self.random_source();
        info!(source = rng.name(), pool = pool.len(), "generating");

        let count = self.settings.count.clamp(1, MAX_COUNT);
        let passwords = pass::generate_batch(&config, &pool, &mut rng, count);

        if self.flags.clipboard && self.copy_to_clipboard(&passwords)? {
            return Ok(());
        }

        if let Some(ref path) = self.flags.output {
            let path = output_path(path);
            output::to_file(&path, &passwords)?;
            prompts::passwords_written(self.flags.quiet, passwords.len(), &path);
        } else if self.flags.quiet {
            output::plain(out, &passwords)?;
        } else {
            let header = output::Header {
                source: rng.name(),
                pool_size: pool.len(),
                entropy_bits: pool.entropy_bits(config.length()),
            };
            output::report(out, &header, &passwords)?;
        }
        Ok(())
    }

    fn random_source(&self) -> Box<dyn RandomSource> {
        match (self.flags.seed, self.settings.rng) {
            (Some(seed), _) => Box::new(RngSource::seeded(seed)),
            (None, RngKind::Secure) => Box::new(RngSource::secure()),
            (None, RngKind::Fast) => Box::new(Rand::new()),
        }
    }

    /// Returns true when output is finished: copied, or the user declined
    /// the terminal fallback. False means print instead.
    fn copy_to_clipboard(&self, passwords: &[Password]) -> Result<bool, Error> {
        let mut ctx = match ClipboardContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                debug!(error = %e, "clipboard unavailable");
                return Ok(!prompts::clipboard_fallback_prompt(self.flags.quiet));
            }
        };

        let mut joined = passwords
            .iter()
            .map(Password::as_str)
            .collect::<Vec<_>>()
            .join("\n");
        let result = ctx.set_contents(joined.clone());
        joined.zeroize();
        result.map_err(|e| Error::Clipboard(e.to_string()))?;

        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        prompts::clipboard_copied(self.flags.quiet, passwords.len());
        Ok(true)
    }
}

/// A directory (or "." / trailing slash) gets a default file name.
fn output_path(path: &std::path::Path) -> PathBuf {
    let text = path.to_string_lossy();
    if text == "." || text.ends_with('/') || path.is_dir() {
        path.join("passwords.txt")
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::pass::ConfigError;

    fn context(args: &[&str], dir: &tempfile::TempDir) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("classpass").chain(args.iter().copied()))
                .unwrap();
        Context::with_settings_path(flags, dir.path().join("settings.toml"))
    }

    fn run(args: &[&str], dir: &tempfile::TempDir) -> Result<String, Error> {
        let mut buf = Vec::new();
        context(args, dir).run_with(&mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn quiet_prints_bare_passwords() {
        let dir = tempfile::tempdir().unwrap();
        let text = run(&["-q", "-n", "3", "-l", "20", "--seed", "4"], &dir).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 20));
    }

    #[test]
    fn seeded_runs_repeat() {
        let dir = tempfile::tempdir().unwrap();
        let a = run(&["-q", "--seed", "9"], &dir).unwrap();
        let b = run(&["-q", "--seed", "9"], &dir).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn report_shows_strength() {
        let dir = tempfile::tempdir().unwrap();
        let text = run(&["--seed", "1"], &dir).unwrap();
        assert!(text.contains("Entropy"));
        assert!(text.contains("Source: seeded"));
        assert!(text.contains("Strength:"));
    }

    #[test]
    fn config_errors_surface() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &["-q", "--upper=false", "--lower=false", "--digits=false", "--symbols=false"],
            &dir,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NoClassesSelected)));

        let err = run(&["-q", "-l", "4", "--min-upper", "3", "--min-lower", "3"], &dir).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MinimumsExceedLength(8, 4))));
    }

    #[test]
    fn save_persists_flags() {
        let dir = tempfile::tempdir().unwrap();
        run(&["-q", "--save", "-l", "30", "-a"], &dir).unwrap();

        let saved = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(saved.length, 30);
        assert!(saved.exclude_ambiguous);

        let text = run(&["-q", "--seed", "2"], &dir).unwrap();
        assert_eq!(text.trim_end().chars().count(), 30);
    }

    #[test]
    fn reset_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        run(&["-q", "--save", "-l", "30"], &dir).unwrap();
        let text = run(&["-q", "--reset"], &dir).unwrap();
        assert!(text.is_empty());

        let saved = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(saved, Settings::default());
    }

    #[test]
    fn malformed_settings_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.toml"), "length = [").unwrap();
        let ctx = context(&["-q"], &dir);
        assert_eq!(ctx.settings, Settings::default());
    }

    #[test]
    fn count_from_settings_file_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("settings.toml"), "count = 4000000000\nlength = 4\n").unwrap();
        let text = run(&["-q", "--seed", "3"], &dir).unwrap();
        assert_eq!(text.lines().count(), MAX_COUNT);
    }

    #[test]
    fn huge_minimum_in_settings_reports_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.toml"),
            "min_uppercase = 9223372036854775807\n",
        )
        .unwrap();
        let err = run(&["-q"], &dir).unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MinimumsExceedLength(_, 16))
        ));
    }

    #[test]
    fn file_output() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pw.txt");
        let text = run(&["-q", "-n", "4", "-o", out.to_str().unwrap()], &dir).unwrap();
        assert!(text.is_empty());
        assert_eq!(std::fs::read_to_string(&out).unwrap().lines().count(), 4);
    }

    #[test]
    fn directory_output_gets_default_name() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(output_path(dir.path()), dir.path().join("passwords.txt"));
        let file = dir.path().join("x.txt");
        assert_eq!(output_path(&file), file);
    }
}
