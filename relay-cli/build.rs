use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &["runs-json", "runs-table", "events-simple", "irc-escaped"];

const FORMATS: &[&str] = &["irc", "markdown", "plain"];

fn input_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .help("Input file path, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn format_arg(name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS))
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("relay")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert chat formatting between IRC control codes and Discord markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("verbose").long("verbose").short('v').action(ArgAction::SetTrue))
        .subcommand(
            Command::new("inspect")
                .arg(input_arg("path"))
                .arg(
                    Arg::new("transform")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(format_arg("from")),
        )
        .subcommand(
            Command::new("convert")
                .arg(input_arg("input"))
                .arg(format_arg("from"))
                .arg(format_arg("to").required(true))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("split")
                .arg(input_arg("input"))
                .arg(Arg::new("author").long("author").required(true))
                .arg(Arg::new("reply-to").long("reply-to"))
                .arg(Arg::new("edited").long("edited").action(ArgAction::SetTrue))
                .arg(
                    Arg::new("attachment")
                        .long("attachment")
                        .action(ArgAction::Append),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "relay", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "relay", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "relay", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
