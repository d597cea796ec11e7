use std::fmt;
use std::ops::Index;
use std::slice::Iter;
use std::str::FromStr;

use crate::config::FormatConfig;
use crate::error::{checked_len, LinAlgError, Result};

/// A real vector of fixed, positive dimension.
///
/// Equality is plain `f64` comparison per element: `-0.0 == 0.0` holds and a
/// vector containing `NaN` is never equal to anything, itself included.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// Allocate a zero vector of dimension `dim`.
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(LinAlgError::NonPositiveDimension { what: "Vector", dim });
        }
        let len = checked_len("Vector", dim, 1)?;
        Ok(Self {
            data: vec![0.0; len],
        })
    }

    /// Take ownership of `data` as the vector contents. Fails on an empty vec.
    pub fn from_vec(data: Vec<f64>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinAlgError::NonPositiveDimension {
                what: "Vector",
                dim: 0,
            });
        }
        Ok(Self { data })
    }

    /// Read the bracketed text form, e.g. `"[ -1.2 2.0 3.1 ]"`.
    pub fn parse(text: &str) -> Result<Self> {
        text.parse()
    }

    pub fn dim(&self) -> usize {
        self.data.len()
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let err = self.out_of_bounds(index);
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(err),
        }
    }

    /// Resize to `new_dim`, keeping the leading entries and zero-filling any
    /// new trailing ones.
    pub fn change_dim(&mut self, new_dim: usize) -> Result<()> {
        if new_dim == 0 {
            return Err(LinAlgError::NonPositiveDimension {
                what: "Vector",
                dim: new_dim,
            });
        }
        checked_len("Vector", new_dim, 1)?;
        log::trace!("Resizing vector from {} to {}", self.dim(), new_dim);
        self.data.resize(new_dim, 0.0);
        self.data.shrink_to_fit();
        Ok(())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Apply `f` to every element, returning a fresh vector.
    pub fn mapv<F>(&self, f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        Vector {
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    pub fn scalar_add_in_place(&mut self, d: f64) {
        for v in self.data.iter_mut() {
            *v += d;
        }
    }

    pub fn scalar_add(&self, d: f64) -> Vector {
        self.mapv(|v| v + d)
    }

    pub fn scalar_mult_in_place(&mut self, d: f64) {
        for v in self.data.iter_mut() {
            *v *= d;
        }
    }

    pub fn scalar_mult(&self, d: f64) -> Vector {
        self.mapv(|v| v * d)
    }

    pub fn elementwise_add_in_place(&mut self, other: &Vector) -> Result<()> {
        self.check_same_dim(other, "elementwise add")?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += *b;
        }
        Ok(())
    }

    pub fn elementwise_add(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "elementwise add", |a, b| a + b)
    }

    pub fn elementwise_mult_in_place(&mut self, other: &Vector) -> Result<()> {
        self.check_same_dim(other, "elementwise mult")?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a *= *b;
        }
        Ok(())
    }

    pub fn elementwise_mult(&self, other: &Vector) -> Result<Vector> {
        self.zip_with(other, "elementwise mult", |a, b| a * b)
    }

    /// Inner product `Σ v1[i] * v2[i]`, accumulated from `0.0` in index order.
    pub fn inner_prod(v1: &Vector, v2: &Vector) -> Result<f64> {
        v1.check_same_dim(v2, "inner product")?;
        Ok(dot_ordered(v1.as_slice(), v2.as_slice()))
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        Vector::inner_prod(self, other)
    }

    /// Render with the default `%6.3f`-style config. Same as `to_string()`.
    pub fn format(&self) -> String {
        self.format_with(&FormatConfig::default())
    }

    pub fn format_with(&self, config: &FormatConfig) -> String {
        let mut out = String::new();
        // fmt::Write for String never fails
        let _ = self.write_with(&mut out, config);
        out
    }

    fn write_with<W: fmt::Write>(&self, out: &mut W, config: &FormatConfig) -> fmt::Result {
        out.write_char('[')?;
        for &value in self.data.iter() {
            config.write_element(out, value)?;
        }
        out.write_str(" ]")
    }

    fn out_of_bounds(&self, index: usize) -> LinAlgError {
        LinAlgError::IndexOutOfBounds {
            axis: "Vector",
            index,
            len: self.dim(),
        }
    }

    fn check_same_dim(&self, other: &Vector, op: &'static str) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(LinAlgError::DimensionMismatch {
                op,
                lhs: self.dim(),
                rhs: other.dim(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector, op: &'static str, f: F) -> Result<Vector>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_same_dim(other, op)?;
        Ok(Vector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }
}

/// Sequential sum of products. Never reassociated, so results are reproducible.
pub(crate) fn dot_ordered(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter()
        .zip(rhs.iter())
        .fold(0.0, |acc, (a, b)| acc + a * b)
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinAlgError;

    fn try_from(value: Vec<f64>) -> Result<Self> {
        Vector::from_vec(value)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl FromStr for Vector {
    type Err = LinAlgError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: String| LinAlgError::MalformedParse {
            reason,
            input: s.to_string(),
        };

        let tokens: Vec<&str> = s.split_ascii_whitespace().collect();
        let interior = match tokens.as_slice() {
            ["[", interior @ .., "]"] => interior,
            _ => return Err(malformed("missing [ or ]".to_string())),
        };
        if interior.is_empty() {
            return Err(malformed("no values between [ and ]".to_string()));
        }

        let data = interior
            .iter()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|_| malformed(format!("could not parse {}", tok)))
            })
            .collect::<Result<Vec<f64>>>()?;

        log::trace!("Parsed vector of dimension {}", data.len());
        Ok(Vector { data })
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &FormatConfig::default())
    }
}
