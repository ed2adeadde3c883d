//! Per-cell mutation strategies.

use fastrand::Rng;

use crate::schema::ColumnKind;

/// Length of a nonsense replacement string.
pub(crate) const NONSENSE_LEN: usize = 8;

/// Zero-mean Gaussian draw with the given standard deviation, via the
/// Box-Muller transform over the uniform source.
pub(crate) fn gaussian(rng: &mut Rng, sigma: f64) -> f64 {
    // Avoid ln(0)
    let u1 = rng.f64().max(1e-12);
    let u2 = rng.f64();

    let r = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;

    r * theta.cos() * sigma
}

/// Additive noise for a numeric cell. Integer columns truncate the drawn
/// noise toward zero before adding. Returns None when the cell does not
/// parse as a number (e.g. a missing value), leaving it untouched.
pub(crate) fn add_noise(rng: &mut Rng, value: &str, sigma: f64, kind: ColumnKind) -> Option<String> {
    let trimmed = value.trim();
    match kind {
        ColumnKind::Integer => {
            let v: i64 = trimmed.parse().ok()?;
            let noise = gaussian(rng, sigma).trunc() as i64;
            Some(v.saturating_add(noise).to_string())
        }
        ColumnKind::Float => {
            let v: f64 = trimmed.parse().ok()?;
            Some((v + gaussian(rng, sigma)).to_string())
        }
        ColumnKind::Text => None,
    }
}

/// Insert or remove a single character, 50/50.
///
/// Removal only applies when it leaves the value non-empty (length > 1);
/// otherwise the insert branch runs. Positions are char-based so multi-byte
/// values are never split mid-character.
pub(crate) fn add_remove_char(rng: &mut Rng, value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();

    if chars.len() > 1 && rng.bool() {
        let pos = rng.usize(0..chars.len());
        chars
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pos)
            .map(|(_, c)| c)
            .collect()
    } else {
        let pos = rng.usize(0..=chars.len());
        let letter = rng.alphabetic();
        let mut out: String = chars[..pos].iter().collect();
        out.push(letter);
        out.extend(chars[pos..].iter());
        out
    }
}

/// Random 8-character alphanumeric replacement, independent of the original.
pub(crate) fn nonsense(rng: &mut Rng) -> String {
    (0..NONSENSE_LEN).map(|_| rng.alphanumeric()).collect()
}
