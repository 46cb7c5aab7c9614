use crate::error::Result;
use crate::parser;
use crate::roll;
use crate::roll::RandomSource;
use crate::term::Term;
use itertools::Itertools;
use rand::Rng;

const SEPARATOR: &str = "-------------------------";
const LABEL_WIDTH: usize = 6;
const TOTAL_WIDTH: usize = 4;

/// An ordered collection of terms parsed from one notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pouch {
    src: String,
    terms: Vec<Term>,
}

impl Pouch {
    /// Build a pouch with lenient parsing, see [`parser::parse`]
    pub fn new(src: &str) -> Self {
        let terms = parser::parse(src);
        tracing::debug!(src, terms = terms.len(), "new pouch");
        Pouch {
            src: src.to_owned(),
            terms,
        }
    }

    /// Build a pouch with strict parsing, see [`parser::parse_strict`]
    pub fn try_new(src: &str) -> Result<Self> {
        let terms = parser::parse_strict(src)?;
        tracing::debug!(src, terms = terms.len(), "new pouch");
        Ok(Pouch {
            src: src.to_owned(),
            terms,
        })
    }

    /// Roll every term using the thread local generator
    pub fn roll(&mut self) {
        self.roll_with(&mut rand::thread_rng())
    }

    /// Roll every term using the provided Rng
    pub fn roll_with<R: Rng>(&mut self, generator: &mut R) {
        self.roll_with_source(&mut RandomSource { generator })
    }

    /// Roll every term once, in order, using the provided source
    pub fn roll_with_source<S: roll::Source>(&mut self, source: &mut S) {
        self.terms
            .iter_mut()
            .for_each(|term| term.roll_with_source(source));
        tracing::debug!(src = %self.src, total = self.total(), "rolled pouch");
    }

    /// Sum of the terms as of the last roll, saturating at the i64 bounds
    pub fn total(&self) -> i64 {
        self.terms
            .iter()
            .fold(0i64, |acc, term| acc.saturating_add(term.total()))
    }

    /// Multi line report of every term and the total
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn terms_mut(&mut self) -> &mut [Term] {
        &mut self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Return the notation the pouch was built from
    pub fn as_str(&self) -> &str {
        &self.src
    }
}

impl std::str::FromStr for Pouch {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Pouch::try_new(s)
    }
}

impl<'a> IntoIterator for &'a Pouch {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl std::fmt::Display for Pouch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for term in self.terms.iter() {
            write!(
                f,
                "{:<label$} = {:+total$}",
                term.to_string(),
                term.total(),
                label = LABEL_WIDTH,
                total = TOTAL_WIDTH,
            )?;
            if let Some(partials) = term.partials() {
                write!(f, " [{}]", partials.iter().format(", "))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{SEPARATOR}")?;
        write!(
            f,
            "{:<label$} = {:+total$}",
            "Total",
            self.total(),
            label = LABEL_WIDTH,
            total = TOTAL_WIDTH,
        )
    }
}
