use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Fixed-point rendering used by `Vector` and `Matrix` text output.
///
/// The default reproduces the `%6.3f` form: every element right-aligned in a
/// field of 6 characters with 3 fractional digits.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    pub width: usize,
    pub precision: usize,
}

impl FormatConfig {
    pub fn new(width: usize, precision: usize) -> Self {
        Self { width, precision }
    }

    /// Write one element, framed by single spaces, into `out`.
    pub(crate) fn write_element<W: std::fmt::Write>(&self, out: &mut W, value: f64) -> std::fmt::Result {
        write!(
            out,
            " {:>width$.prec$} ",
            value,
            width = self.width,
            prec = self.precision
        )
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            width: 6,
            precision: 3,
        }
    }
}

/// Parses the compact `"<width>.<precision>"` form, e.g. `"6.3"` or `"10.4"`.
impl FromStr for FormatConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, precision) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| format!("Unknown format config: {}. Expected <width>.<precision>", s))?;
        let width = width
            .parse::<usize>()
            .map_err(|e| format!("Invalid width '{}' in format config: {}", width, e))?;
        let precision = precision
            .parse::<usize>()
            .map_err(|e| format!("Invalid precision '{}' in format config: {}", precision, e))?;
        Ok(FormatConfig::new(width, precision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_six_three() {
        let cfg = FormatConfig::default();
        assert_eq!(cfg, FormatConfig::new(6, 3));
    }

    #[test]
    fn write_element_matches_fixed_point() {
        let cfg = FormatConfig::default();
        let mut out = String::new();
        cfg.write_element(&mut out, 1.0).unwrap();
        cfg.write_element(&mut out, -3.5).unwrap();
        assert_eq!(out, "  1.000  -3.500 ");
    }

    #[test]
    fn exact_ties_round_half_to_even() {
        let mut out = String::new();
        let cfg = FormatConfig::default();
        cfg.write_element(&mut out, 0.0625).unwrap();
        cfg.write_element(&mut out, 1.0625).unwrap();
        cfg.write_element(&mut out, 0.1875).unwrap();
        assert_eq!(out, "  0.062   1.062   0.188 ");
    }

    #[test]
    fn wide_values_overflow_the_field() {
        let mut out = String::new();
        FormatConfig::default().write_element(&mut out, 12345.678).unwrap();
        assert_eq!(out, " 12345.678 ");
    }

    #[test]
    fn from_str_compact_form() {
        let cfg: FormatConfig = "8.1".parse().unwrap();
        assert_eq!(cfg.width, 8);
        assert_eq!(cfg.precision, 1);
    }

    #[test]
    fn serializes_to_json() {
        let cfg = FormatConfig::new(10, 4);
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"width\":10"));
        let back: FormatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn from_str_rejects_garbage() {
        assert!("wide".parse::<FormatConfig>().is_err());
        assert!("x.3".parse::<FormatConfig>().is_err());
        assert!("6.".parse::<FormatConfig>().is_err());
    }
}
