//! Prints the SLR parse table of the bundled expression grammar, either human
//! readable (default) or in the machine readable serialization (`--header`).

use clap::{arg, ArgMatches, Command};
use lang_lr::expr::expr_grammar;
use lang_lr::{write_table, GrammarAnalyzer, GrammarClasses};

fn command() -> ArgMatches {
    Command::new("expr-table")
        .version("0.1.0")
        .about("Print the SLR parse table of the bundled expression grammar.")
        .arg(
            arg!(--header "Output the machine readable table serialization")
                .required(false),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<String, String> {
    let grammar = expr_grammar().map_err(|err| err.to_string())?;
    let analyzer =
        GrammarAnalyzer::analyze(grammar, GrammarClasses::SLR).map_err(|err| err.to_string())?;

    let mut out = String::new();
    if matches.get_flag("header") {
        let table = analyzer
            .create_slr_parse_table()
            .map_err(|err| err.to_string())?;
        write_table(&mut out, &table).map_err(|err| err.to_string())?;
    } else {
        analyzer
            .dump_slr_parse_table(&mut out)
            .map_err(|err| err.to_string())?;
    }
    Ok(out)
}

fn main() {
    let matches = command();
    match run(&matches) {
        Ok(out) => print!("{}", out),
        Err(message) => {
            eprintln!("Error: {}", message);
            std::process::exit(1);
        }
    }
}
