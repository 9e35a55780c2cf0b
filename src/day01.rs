use std::fmt;

use tracing::debug;

pub const TARGET: i64 = 2020;

/// Two entries from distinct positions, `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pair {
    pub i: usize,
    pub j: usize,
    pub a: i64,
    pub b: i64,
}

// Widened so neither can overflow for any pair of i64 inputs.
impl Pair {
    pub fn sum(&self) -> i128 {
        i128::from(self.a) + i128::from(self.b)
    }

    pub fn product(&self) -> i128 {
        i128::from(self.a) * i128::from(self.b)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} × {} = {}", self.a, self.b, self.product())
    }
}

/// Every pair of positions, ordered by `i` then `j`.
/// Generated one at a time; nothing is collected.
pub struct Pairs<'a> {
    nums: &'a [i64],
    i: usize,
    j: usize,
}

impl Iterator for Pairs<'_> {
    type Item = Pair;

    fn next(&mut self) -> Option<Pair> {
        if self.j >= self.nums.len() {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.nums.len() {
                return None;
            }
        }
        let pair = Pair {
            i: self.i,
            j: self.j,
            a: self.nums[self.i],
            b: self.nums[self.j],
        };
        self.j += 1;
        Some(pair)
    }
}

pub fn pairs(nums: &[i64]) -> Pairs<'_> {
    Pairs { nums, i: 0, j: 1 }
}

pub fn find_pair(nums: &[i64]) -> Option<Pair> {
    let found = pairs(nums).find(|p| p.sum() == i128::from(TARGET));
    if let Some(p) = found {
        debug!(i = p.i, j = p.j, a = p.a, b = p.b, "found pair");
    }
    found
}
