//! Password output: terminal report, plain lines, or file.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::strength::entropy_rating;
use super::{Password, score};
use crate::terminal::{box_bottom, box_line, box_top, styled_strength};

/// What the terminal report shows above the passwords.
pub struct Header<'a> {
    pub source: &'a str,
    pub pool_size: usize,
    pub entropy_bits: f64,
}

/// Boxed report: entropy header, then each password with its strength.
pub fn report<W: Write>(out: &mut W, header: &Header, passwords: &[Password]) -> io::Result<()> {
    box_top(out, "Entropy")?;
    box_line(
        out,
        &format!(
            "{:.1} bits ({})",
            header.entropy_bits,
            entropy_rating(header.entropy_bits)
        ),
    )?;
    box_line(
        out,
        &format!("Source: {} • Pool: {} chars", header.source, header.pool_size),
    )?;
    box_bottom(out)?;
    writeln!(out)?;

    box_top(out, "Passwords")?;
    for password in passwords {
        box_line(out, password.as_str())?;
        box_line(out, &format!("  Strength: {}", styled_strength(&score(password.as_str()))))?;
    }
    box_bottom(out)?;
    out.flush()
}

/// One password per line, nothing else.
pub fn plain<W: Write>(out: &mut W, passwords: &[Password]) -> io::Result<()> {
    for password in passwords {
        writeln!(out, "{}", password)?;
    }
    out.flush()
}

/// Append passwords to `path`, creating it and its parent directory.
pub fn to_file(path: &Path, passwords: &[Password]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    plain(&mut BufWriter::new(file), passwords)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::pass::{CharacterClass, GenerationConfig, generate_batch, pool};
    use crate::rand::RngSource;

    fn passwords(count: usize) -> Vec<Password> {
        let config = GenerationConfig::new(NonZeroUsize::new(12).unwrap())
            .with_minimum(CharacterClass::Symbol, 1);
        let pool = pool::build(&config).unwrap();
        generate_batch(&config, &pool, &mut RngSource::seeded(11), count)
    }

    #[test]
    fn plain_writes_one_per_line() {
        let passwords = passwords(3);
        let mut buf = Vec::new();
        plain(&mut buf, &passwords).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, password) in lines.iter().zip(&passwords) {
            assert_eq!(*line, password.as_str());
        }
    }

    #[test]
    fn report_includes_header_and_strength() {
        let passwords = passwords(2);
        let header = Header {
            source: "seeded",
            pool_size: 94,
            entropy_bits: 78.6,
        };
        let mut buf = Vec::new();
        report(&mut buf, &header, &passwords).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("78.6 bits (Strong)"));
        assert!(text.contains("Source: seeded"));
        assert_eq!(text.matches("Strength:").count(), 2);
        for password in &passwords {
            assert!(text.contains(password.as_str()));
        }
    }

    #[test]
    fn file_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");

        to_file(&path, &passwords(2)).unwrap();
        to_file(&path, &passwords(3)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 5);
    }
}
