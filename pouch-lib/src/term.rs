use crate::dice::DiceGroup;
use crate::roll;
use rand::Rng;

/// A flat modifier added to or subtracted from the total
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bonus(i64);

impl Bonus {
    pub fn new(value: i64) -> Self {
        Bonus(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Bonus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

/// One summand of a pouch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Dice(DiceGroup),
    Bonus(Bonus),
}

impl Term {
    pub fn roll(&mut self) {
        self.roll_with(&mut rand::thread_rng())
    }

    pub fn roll_with<R: Rng>(&mut self, generator: &mut R) {
        match self {
            Term::Dice(dice) => dice.roll_with(generator),
            Term::Bonus(_) => (),
        }
    }

    /// Roll the term using the provided source, bonuses are left untouched
    pub fn roll_with_source<S: roll::Source>(&mut self, source: &mut S) {
        match self {
            Term::Dice(dice) => dice.roll_with_source(source),
            Term::Bonus(_) => (),
        }
    }

    /// Contribution of the term to the pouch total
    pub fn total(&self) -> i64 {
        match self {
            Term::Dice(dice) => dice.total(),
            Term::Bonus(bonus) => bonus.value(),
        }
    }

    /// Single die outcomes, `None` for a bonus which has none to show
    pub fn partials(&self) -> Option<&[u64]> {
        match self {
            Term::Dice(dice) => Some(dice.results()),
            Term::Bonus(_) => None,
        }
    }

    pub fn as_dice(&self) -> Option<&DiceGroup> {
        match self {
            Term::Dice(dice) => Some(dice),
            Term::Bonus(_) => None,
        }
    }

    pub fn as_bonus(&self) -> Option<&Bonus> {
        match self {
            Term::Dice(_) => None,
            Term::Bonus(bonus) => Some(bonus),
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Dice(dice) => write!(f, "{dice}"),
            Term::Bonus(bonus) => write!(f, "{bonus}"),
        }
    }
}
