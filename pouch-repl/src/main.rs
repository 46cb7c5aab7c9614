mod cli;
mod helper;
use helper::is_reroll;
use helper::ReplHelper;

use cli::Parser;
use colored::Colorize;
use pouch_lib::Pouch;
use rustyline::error::ReadlineError;
use rustyline::hint::HistoryHinter;
use rustyline::CompletionType;
use rustyline::Config;
use rustyline::EditMode;
use rustyline::Editor;
use rustyline::Result;
use tracing::Level;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    if args.notations.is_empty() {
        repl(args.lenient)
    } else {
        let failed = roll_all(&args.notations, args.lenient);
        if failed > 0 {
            tracing::debug!(failed, "some notations were rejected");
            std::process::exit(1);
        }
        Ok(())
    }
}

fn build(notation: &str, lenient: bool) -> pouch_lib::error::Result<Pouch> {
    if lenient {
        Ok(Pouch::new(notation))
    } else {
        Pouch::try_new(notation)
    }
}

fn roll_and_print(pouch: &mut Pouch) {
    pouch.roll();
    println!("{}", pouch.render().magenta());
}

fn roll_once(notation: &str, lenient: bool) -> pouch_lib::error::Result<()> {
    match build(notation, lenient) {
        Ok(mut pouch) => {
            println!("{}", notation.bold());
            roll_and_print(&mut pouch);
            Ok(())
        }
        Err(error) => {
            eprintln!("{}", format!("{}: {}", notation, error).bold().red());
            Err(error)
        }
    }
}

/// Roll every notation once, returning how many could not be parsed
fn roll_all(notations: &[String], lenient: bool) -> usize {
    let mut failed = 0;
    for notation in notations {
        if roll_once(notation, lenient).is_err() {
            failed += 1;
        }
    }
    failed
}

fn repl(lenient: bool) -> Result<()> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .edit_mode(EditMode::Emacs)
        .build();
    let helper = ReplHelper {
        hinter: HistoryHinter {},
        colored: "".to_owned(),
        lenient,
    };
    let mut rline = Editor::with_config(config)?;
    rline.set_helper(Some(helper));
    let mut last: Option<Pouch> = None;
    let mut count = 1u64;
    loop {
        let prompt = format!("pouch: {}> ", count);
        if let Some(helper) = rline.helper_mut() {
            helper.colored = prompt.bold().green().to_string();
        }
        let readline = rline.readline(&prompt);
        match readline {
            Ok(line) => {
                rline.add_history_entry(line.as_str())?;
                match line.trim() {
                    "" => (),
                    reroll if is_reroll(reroll) => match last.as_mut() {
                        Some(pouch) => {
                            println!("{} {}", "rerolling".bold(), pouch.as_str());
                            roll_and_print(pouch)
                        }
                        None => eprintln!("{}", "pouch: error: no previous roll".bold().red()),
                    },
                    notation => match build(notation, lenient) {
                        Ok(mut pouch) => {
                            roll_and_print(&mut pouch);
                            last = Some(pouch);
                        }
                        Err(error) => eprintln!("{}", format!("{}", error).bold().red()),
                    },
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("{}", "pouch: signal: CTRL-C".bold().yellow());
                break;
            }
            Err(ReadlineError::Eof) => {
                eprintln!("{}", "pouch: signal: CTRL-D".bold().yellow());
                break;
            }
            Err(error) => {
                eprintln!("{}", format!("pouch: error: `{:?}`", error).bold().red());
                break;
            }
        }
        count += 1;
    }
    Ok(())
}
