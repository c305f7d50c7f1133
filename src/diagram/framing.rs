//! Blackboard framing: an integer or half-integer count of twists.
use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

/// A framing value in `½ℤ`, stored as a number of half twists.
///
/// R1 moves shift the framing by a whole twist, R5 moves by a half twist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Framing {
    halves: i64,
}

impl Framing {
    pub const HALF: Framing = Framing { halves: 1 };
    pub const ONE: Framing = Framing { halves: 2 };

    pub fn from_integer(n: i64) -> Self {
        Framing { halves: 2 * n }
    }

    pub fn from_halves(halves: i64) -> Self {
        Framing { halves }
    }

    pub fn halves(&self) -> i64 {
        self.halves
    }

    pub fn is_integer(&self) -> bool {
        self.halves % 2 == 0
    }

    /// The integer value, if the framing is not a half-integer.
    pub fn to_integer(&self) -> Option<i64> {
        self.is_integer().then_some(self.halves / 2)
    }
}

impl From<i64> for Framing {
    fn from(value: i64) -> Self {
        Framing::from_integer(value)
    }
}

impl Add for Framing {
    type Output = Framing;

    fn add(self, rhs: Framing) -> Framing {
        Framing {
            halves: self.halves + rhs.halves,
        }
    }
}

impl Sub for Framing {
    type Output = Framing;

    fn sub(self, rhs: Framing) -> Framing {
        Framing {
            halves: self.halves - rhs.halves,
        }
    }
}

impl Neg for Framing {
    type Output = Framing;

    fn neg(self) -> Framing {
        Framing {
            halves: -self.halves,
        }
    }
}

impl AddAssign for Framing {
    fn add_assign(&mut self, rhs: Framing) {
        self.halves += rhs.halves;
    }
}

impl SubAssign for Framing {
    fn sub_assign(&mut self, rhs: Framing) {
        self.halves -= rhs.halves;
    }
}

impl Zero for Framing {
    fn zero() -> Self {
        Framing { halves: 0 }
    }

    fn is_zero(&self) -> bool {
        self.halves == 0
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_integer() {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "{}/2", self.halves),
        }
    }
}
