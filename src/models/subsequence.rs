use crate::models::DistanceMatrix;

/// A summary of a contiguous slice of a route, closed under concatenation.
///
/// `first`/`last` are route-node ids (not positions). `identity()` is the
/// neutral element of `concat`: concatenating it onto either side leaves the
/// other operand unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Subsequence {
    /// Delay weight: number of arrivals inside the subsequence that shift
    /// forward when it is appended after a non-empty prefix.
    pub w: f64,
    /// Duration: total edge length along the subsequence.
    pub t: f64,
    /// Cumulative latency contributed when `first` sits at time zero.
    pub c: f64,
    pub first: Option<usize>,
    pub last: Option<usize>,
}

impl Subsequence {
    pub fn identity() -> Self {
        Self {
            w: 0.0,
            t: 0.0,
            c: 0.0,
            first: None,
            last: None,
        }
    }

    /// A single-position subsequence at route index `pos` holding `node`.
    /// The depot at position 0 never delays anything that follows it.
    pub fn singleton(pos: usize, node: usize) -> Self {
        Self {
            w: if pos > 0 { 1.0 } else { 0.0 },
            t: 0.0,
            c: 0.0,
            first: Some(node),
            last: Some(node),
        }
    }

    /// Concatenates `self` then `other`, joined by the edge between their
    /// bounding nodes. Total for non-identity operands; an identity operand
    /// on either side is absorbed without consulting `distances`.
    pub fn concat(&self, other: &Subsequence, distances: &DistanceMatrix) -> Subsequence {
        if self.first.is_none() {
            return *other;
        }
        if other.first.is_none() {
            return *self;
        }
        let edge = distances.get(self.last.unwrap(), other.first.unwrap());
        Subsequence {
            w: self.w + other.w,
            t: self.t + edge + other.t,
            c: self.c + other.w * (self.t + edge) + other.c,
            first: self.first,
            last: other.last,
        }
    }
}
