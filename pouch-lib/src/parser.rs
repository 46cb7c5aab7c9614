use crate::dice::DiceGroup;
use crate::error::Error;
use crate::error::Result;
use crate::term::Bonus;
use crate::term::Term;
use pest::iterators::Pair;
use pest::Parser as _;
use pest_derive::Parser;
use std::str::FromStr;

/// Pest parser
#[derive(Parser)]
#[grammar = "pouch.pest"]
pub struct Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Skip what can't be understood, coerce bad numbers to zero
    Lenient,
    /// Reject anything that is not a well formed term
    Strict,
}

/// Parse a notation into its terms, never fails.
///
/// Unknown characters are skipped, a lone sign counts as a `+0` bonus and
/// numbers too large to fit are read as zero. A dice group left without
/// faces or over the [`limits`](crate::limits) is dropped.
pub fn parse(source: &str) -> Vec<Term> {
    let notation = strip_whitespace(source);
    let pairs = match Parser::parse(Rule::notation, &notation) {
        Ok(mut pairs) => match pairs.next() {
            Some(root) => root.into_inner(),
            None => return Vec::new(),
        },
        Err(error) => {
            tracing::warn!(%error, source, "notation not understood");
            return Vec::new();
        }
    };
    pairs
        .filter_map(|pair| {
            let text = pair.as_str().to_owned();
            match build_term(pair, Mode::Lenient) {
                Ok(term) => term,
                Err(error) => {
                    tracing::warn!(%error, term = %text, "dropping term");
                    None
                }
            }
        })
        .collect()
}

/// Parse a notation into its terms, rejecting stray characters, lone signs,
/// numbers that do not fit, dice without faces and dice over the limits.
///
/// Error positions refer to the notation with its whitespace removed.
pub fn parse_strict(source: &str) -> Result<Vec<Term>> {
    let notation = strip_whitespace(source);
    let root = Parser::parse(Rule::strict_notation, &notation)?
        .next()
        .ok_or("empty parse tree")?;
    root.into_inner()
        .filter_map(|pair| build_term(pair, Mode::Strict).transpose())
        .collect()
}

fn strip_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

fn build_term(pair: Pair<Rule>, mode: Mode) -> Result<Option<Term>> {
    match pair.as_rule() {
        Rule::dice => Ok(Some(Term::Dice(build_dice(pair, mode)?))),
        Rule::bonus => Ok(Some(Term::Bonus(Bonus::new(number(pair.as_str(), mode)?)))),
        Rule::stray_sign => Ok(Some(Term::Bonus(Bonus::new(0)))),
        Rule::EOI => Ok(None),
        _ => unreachable!("{:?}", pair),
    }
}

fn build_dice(pair: Pair<Rule>, mode: Mode) -> Result<DiceGroup> {
    let mut sign = true;
    let mut quantity = 0;
    let mut faces = 0;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::sign => sign = inner.as_str() != "-",
            Rule::quantity => quantity = number(inner.as_str(), mode)?,
            Rule::faces => faces = number(inner.as_str(), mode)?,
            _ => unreachable!("{:?}", inner),
        }
    }
    // `d8` and `0d8` both mean a single die
    if quantity == 0 {
        quantity = 1;
    }
    DiceGroup::new(sign, quantity, faces)
}

/// The grammar only lets digits and a leading sign through, so the only
/// failure left is a number that does not fit
fn number<T: FromStr + Default>(digits: &str, mode: Mode) -> Result<T> {
    match (digits.parse::<T>(), mode) {
        (Ok(value), _) => Ok(value),
        (Err(_), Mode::Lenient) => Ok(T::default()),
        (Err(_), Mode::Strict) => Err(Error::Overflow(digits.to_owned())),
    }
}
