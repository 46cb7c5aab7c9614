use colored::Colorize;
use pouch_lib::parser;
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::validate::ValidationContext;
use rustyline::validate::ValidationResult;
use rustyline::validate::Validator;
use rustyline::Result;
use rustyline_derive::Completer;
use rustyline_derive::Helper;
use rustyline_derive::Hinter;
use std::borrow::Cow;
use std::borrow::Cow::Borrowed;
use std::borrow::Cow::Owned;

const REROLL: &str = "reroll";
const REROLL_SHORT: &str = "rr";

pub(crate) fn is_reroll(line: &str) -> bool {
    line == REROLL || line == REROLL_SHORT
}

#[derive(Helper, Completer, Hinter)]
pub(crate) struct ReplHelper {
    #[rustyline(Hinter)]
    pub(crate) hinter: HistoryHinter,
    pub(crate) colored: String,
    /// Accept anything, the lenient parser skips what it can't read
    pub(crate) lenient: bool,
}

impl Highlighter for ReplHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.dimmed().to_string())
    }
}

impl ReplHelper {
    fn check(&self, input: &str) -> ValidationResult {
        let input = input.trim();
        if self.lenient || input.is_empty() || is_reroll(input) {
            return ValidationResult::Valid(None);
        }
        match parser::parse_strict(input) {
            Ok(_) => ValidationResult::Valid(None),
            Err(error) => {
                ValidationResult::Invalid(Some(format!("\n{}", error).red().to_string()))
            }
        }
    }
}

impl Validator for ReplHelper {
    /// Keep a malformed notation on the line so it can be fixed in place
    fn validate(&self, ctx: &mut ValidationContext) -> Result<ValidationResult> {
        Ok(self.check(ctx.input()))
    }
}
