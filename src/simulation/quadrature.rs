//! Composite Simpson's rule quadrature, 1D and 2D
//!
//! The 2D routine is a plain nesting of the 1D rule (integrate over x for
//! each y node, then over y), not a tensor-product 2D Simpson scheme. Both
//! are pure: identical inputs give bit-identical results.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum QuadratureError {
    /// Interval is empty or reversed; Simpson needs `a < b`.
    #[error("invalid integration bounds: expected a < b, got a = {a}, b = {b}")]
    InvalidBounds { a: f64, b: f64 },

    /// The composite rule pairs subintervals, so the count must be an even
    /// integer >= 2. Odd counts would silently mis-weight the nodes via
    /// `n/2` truncation, so they are rejected instead.
    #[error("invalid subdivision count {0}: must be an even integer >= 2")]
    InvalidSubdivision(usize),
}

/// Unchecked composite Simpson sum over `[a, b]` with `n` subdivisions.
///
/// With h = (b - a)/n:
///   (h/3) * [ f(a) + f(b)
///             + 4 * sum f(a + (2k-1)h)  for k = 1..=n/2   (odd nodes)
///             + 2 * sum f(a + 2kh)      for k = 1..n/2    (even interior) ]
fn simpson_sum<F>(f: &F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = (b - a) / n as f64;

    let mut odd = 0.0;
    for k in 1..=n / 2 {
        odd += f(a + (2 * k - 1) as f64 * h);
    }

    let mut even = 0.0;
    for k in 1..n / 2 {
        even += f(a + (2 * k) as f64 * h);
    }

    h / 3.0 * (f(a) + f(b) + 4.0 * odd + 2.0 * even)
}

fn check_bounds(a: f64, b: f64) -> Result<(), QuadratureError> {
    // `!(a < b)` also rejects NaN bounds
    if !(a < b) {
        return Err(QuadratureError::InvalidBounds { a, b });
    }
    Ok(())
}

fn check_subdivisions(n: usize) -> Result<(), QuadratureError> {
    if n < 2 || n % 2 != 0 {
        return Err(QuadratureError::InvalidSubdivision(n));
    }
    Ok(())
}

/// Definite integral of `f` over `[a, b]` by composite Simpson's rule.
///
/// Exact for polynomials up to degree 3; O(h^4) local error for smooth
/// integrands. `n` must be even and >= 2.
pub fn simpson_1d<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    check_bounds(a, b)?;
    check_subdivisions(n)?;
    Ok(simpson_sum(&f, a, b, n))
}

/// Definite integral of `f` over the rectangle `[ax, bx] x [ay, by]`,
/// evaluated as a 1D Simpson integral (over y) of 1D Simpson integrals
/// (over x). The same `n` is used on both axes.
pub fn simpson_2d<F>(
    f: F,
    ax: f64,
    bx: f64,
    ay: f64,
    by: f64,
    n: usize,
) -> Result<f64, QuadratureError>
where
    F: Fn(f64, f64) -> f64,
{
    // Validate both axes up front so the inner integral cannot fail mid-sum
    check_bounds(ax, bx)?;
    check_bounds(ay, by)?;
    check_subdivisions(n)?;

    let inner = |y: f64| simpson_sum(&|x: f64| f(x, y), ax, bx, n);
    Ok(simpson_sum(&inner, ay, by, n))
}
