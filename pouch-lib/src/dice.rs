use crate::error::Error;
use crate::error::Result;
use crate::roll;
use crate::roll::RandomSource;
use rand::Rng;

pub mod limits {
    /// Arbitrary limits to avoid oom
    pub const MAX_DICE_AMOUNT: u64 = 5000;
    pub const MAX_DICE_SIDES: u64 = 5000;
}

/// A group of dice sharing the same number of faces, rolled together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceGroup {
    sign: bool,
    quantity: u64,
    faces: u64,
    results: Vec<u64>,
}

impl DiceGroup {
    /// New unrolled group, `sign` is true for a positive contribution.
    ///
    /// Fails on an empty group, a die without faces, or sizes over [`limits`].
    pub fn new(sign: bool, quantity: u64, faces: u64) -> Result<Self> {
        if quantity == 0 {
            return Err(Error::ZeroQuantity);
        }
        if faces == 0 {
            return Err(Error::ZeroFaces);
        }
        if quantity > limits::MAX_DICE_AMOUNT {
            return Err(Error::Limit(format!(
                "exceeded max allowed amount of dices `{}`",
                limits::MAX_DICE_AMOUNT
            )));
        }
        if faces > limits::MAX_DICE_SIDES {
            return Err(Error::Limit(format!(
                "exceeded max allowed number of dice sides `{}`",
                limits::MAX_DICE_SIDES
            )));
        }
        Ok(DiceGroup {
            sign,
            quantity,
            faces,
            results: Vec::new(),
        })
    }

    pub fn sign(&self) -> bool {
        self.sign
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn faces(&self) -> u64 {
        self.faces
    }

    /// Outcomes of the last roll, empty if never rolled
    pub fn results(&self) -> &[u64] {
        &self.results
    }

    /// Roll every die using the thread local generator
    pub fn roll(&mut self) {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll every die using the provided Rng
    pub fn roll_with<R: Rng>(&mut self, generator: &mut R) {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Roll every die using the provided source, replacing the previous outcomes
    pub fn roll_with_source<S: roll::Source>(&mut self, source: &mut S) {
        let faces = self.faces;
        self.results = (0..self.quantity).map(|_| source.throw(faces)).collect();
        tracing::trace!(dice = %self, results = ?self.results, "rolled");
    }

    /// Sum of the last outcomes, negated for a negative group
    pub fn total(&self) -> i64 {
        let sum = self.results.iter().fold(0i64, |acc, &r| {
            acc.saturating_add(i64::try_from(r).unwrap_or(i64::MAX))
        });
        if self.sign {
            sum
        } else {
            sum.saturating_neg()
        }
    }
}

impl std::fmt::Display for DiceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.sign { '+' } else { '-' };
        write!(f, "{sign}{}d{}", self.quantity, self.faces)
    }
}
