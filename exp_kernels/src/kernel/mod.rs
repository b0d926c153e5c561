//! Named registry of every kernel, for harnesses that select kernels by name.

use std::fmt;

use crate::bits::{fasterexp, fastexp};
use crate::double_lookup::exp_double_lookup;
use crate::rational::{exp_rational_1, exp_rational_2};
use crate::taylor::{
    exp_taylor_1, exp_taylor_1_unrolled, exp_taylor_2, exp_taylor_3, exp_taylor_4, exp_taylor_4a,
};


/// How a kernel approximates `exp`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Taylor,
    Rational,
    DoubleLookup,
    BitPattern,
}

impl Family {
    /// Table-based families return exactly `0.0` at or below [`crate::CUTOFF`].
    pub fn has_cutoff(self) -> bool {
        !matches!(self, Family::BitPattern)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Taylor => "taylor",
            Family::Rational => "rational",
            Family::DoubleLookup => "double lookup",
            Family::BitPattern => "bit pattern",
        };
        f.write_str(name)
    }
}

/// A kernel together with its documented accuracy on `[-16, 0]`.
#[derive(Clone, Copy, Debug)]
pub struct Kernel {
    pub name: &'static str,
    pub family: Family,
    /// Upper bound on `|kernel(x) - exp(x)|` for `x` in `[-16, 0]`.
    pub max_abs_error: f32,
    pub func: fn(f32) -> f32,
}

impl Kernel {
    const fn new(
        name: &'static str,
        family: Family,
        max_abs_error: f32,
        func: fn(f32) -> f32,
    ) -> Self {
        Self {
            name,
            family,
            max_abs_error,
            func,
        }
    }

    #[inline]
    pub fn eval(&self, x: f32) -> f32 {
        (self.func)(x)
    }
}

pub static KERNELS: [Kernel; 11] = [
    Kernel::new("exp_taylor_1", Family::Taylor, 2e-3, exp_taylor_1),
    Kernel::new(
        "exp_taylor_1_unrolled",
        Family::Taylor,
        2e-3,
        exp_taylor_1_unrolled,
    ),
    Kernel::new("exp_taylor_2", Family::Taylor, 1e-4, exp_taylor_2),
    Kernel::new("exp_taylor_3", Family::Taylor, 5e-7, exp_taylor_3),
    Kernel::new("exp_taylor_4", Family::Taylor, 5e-7, exp_taylor_4),
    Kernel::new("exp_taylor_4a", Family::Taylor, 5e-3, exp_taylor_4a),
    Kernel::new("exp_rational_1", Family::Rational, 1e-3, exp_rational_1),
    Kernel::new("exp_rational_2", Family::Rational, 5e-5, exp_rational_2),
    Kernel::new(
        "exp_double_lookup",
        Family::DoubleLookup,
        1e-4,
        exp_double_lookup,
    ),
    Kernel::new("fastexp", Family::BitPattern, 1e-4, fastexp),
    Kernel::new("fasterexp", Family::BitPattern, 5e-2, fasterexp),
];

/// Looks a kernel up by its exact name.
pub fn find(name: &str) -> Option<&'static Kernel> {
    KERNELS.iter().find(|kernel| kernel.name == name)
}
