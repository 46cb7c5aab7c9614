use clap::crate_authors;
use clap::crate_description;
use clap::crate_version;
pub use clap::Parser;

const POUCH_AUTHOR: &str = crate_authors!();
const POUCH_VERSION: &str = crate_version!();
const POUCH_ABOUT: &str = crate_description!();
const POUCH_FLAG_D_SHORT: char = 'd';
const POUCH_FLAG_D_HELP: &str = "Enable Debug logging";
const POUCH_FLAG_L_SHORT: char = 'l';
const POUCH_FLAG_L_HELP: &str = "Skip what can't be parsed instead of rejecting it";
const POUCH_NOTATION_HELP: &str = "Roll each notation once and exit, use `--` before a notation starting with `-`";

#[derive(Parser, Debug)]
#[command(author = POUCH_AUTHOR, version = POUCH_VERSION, about = POUCH_ABOUT)]
pub struct Args {
    #[arg(short = POUCH_FLAG_D_SHORT, long, help = POUCH_FLAG_D_HELP, action)]
    pub debug: bool,
    #[arg(short = POUCH_FLAG_L_SHORT, long, help = POUCH_FLAG_L_HELP, action)]
    pub lenient: bool,
    #[arg(value_name = "NOTATION", help = POUCH_NOTATION_HELP)]
    pub notations: Vec<String>,
}
