// Command-line interface for the relay formatting toolkit
//
// This binary exposes the conversions a relay performs between IRC and Discord, so they can be
// tried out and debugged without connecting to either network.
//
// The core capabilities use the relay-babel crate; settings come from relay-config.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. Use "-" as the input to read stdin.
// Usage:
//  relay <input> --to <format> [--from <format>] [--output <file>]    - Convert between formats (default)
//  relay convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  relay inspect <path> [<transform>]      - Execute a transform (defaults to "runs-table")
//  relay split <input> --author <name>     - Show the IRC lines a Discord message is relayed as
//  relay --list-formats                    - List available formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Keys matching a configuration knob override it instead.
// Example:
//  relay convert notice.irc --to markdown --extra-escape-asterisks true

use relay_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use relay_babel::formats::markdown::MarkdownFormat;
use relay_babel::relay::{
    author_prefix, discord_to_irc, irc_lines, DiscordMessage, MemoryDirectory, RelayOptions,
};
use relay_babel::FormatRegistry;
use relay_config::{Loader, RelayConfig};
use std::collections::HashMap;
use std::fs;
use std::io::Read;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("relay")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert chat formatting between IRC control codes and Discord markdown")
        .long_about(
            "relay is a command-line tool for the formatting side of an IRC <-> Discord relay.\n\n\
            Commands:\n  \
            - convert: Transform between formats (irc, markdown, plain)\n  \
            - inspect: View the runs and events a message parses into\n  \
            - split:   Show the IRC lines a Discord message would be relayed as\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            relay msg.irc --to markdown                # Convert to markdown (outputs to stdout)\n  \
            relay - --from markdown --to irc           # Read stdin\n  \
            relay inspect msg.irc runs-json            # View runs as JSON\n  \
            relay split long.md --author alice         # Chunk for IRC"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a relay.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr (RUST_LOG is honored as well)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a message is parsed")
                .long_about(
                    "View a message at different processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - runs-table:     one line per run (default)\n  \
                    - runs-json:      runs as JSON\n  \
                    - events-simple:  open/close/text events\n  \
                    - irc-escaped:    re-serialized control codes, escaped\n\n\
                    Extra Parameters:\n  \
                    --extra-normalize    Merge neighbouring runs with the same style\n\n\
                    Examples:\n  \
                    relay inspect msg.irc                      # Run table (default)\n  \
                    relay inspect msg.md events-simple         # Markdown events\n  \
                    relay inspect - --from irc runs-json       # From stdin"
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the message file, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'runs-table'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert messages between formats.\n\n\
                    Supported formats:\n  \
                    - irc:      IRC control codes (.irc)\n  \
                    - markdown: Discord markdown (.md)\n  \
                    - plain:    Text without formatting (.txt)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    relay convert msg.irc --to markdown           # Convert to markdown (stdout)\n  \
                    relay convert msg.md --to irc -o msg.irc      # Markdown to IRC file\n  \
                    relay msg.irc --to plain                      # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("split")
                .about("Show the IRC lines a Discord message is relayed as")
                .long_about(
                    "Converts a Discord message to IRC text and splits it into lines that\n\
                    fit the configured maximum length, prefixed with the author.\n\n\
                    Examples:\n  \
                    relay split message.md --author alice\n  \
                    relay split message.md --author alice --reply-to bob --edited"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or - for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("author")
                        .long("author")
                        .help("Discord name of the message author")
                        .required(true),
                )
                .arg(
                    Arg::new("reply-to")
                        .long("reply-to")
                        .help("Name of the user being replied to"),
                )
                .arg(
                    Arg::new("edited")
                        .long("edited")
                        .help("Tag the message as an edit")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("attachment")
                        .long("attachment")
                        .help("Attachment URL to append (repeatable)")
                        .action(ArgAction::Append),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that looks like a file means the subcommand was left out
            if cleaned_args.len() > 1
                && (!cleaned_args[1].starts_with('-') || cleaned_args[1] == "-")
                && !["inspect", "convert", "split", "help"].contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    initialize_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required_arg(sub_matches, "path");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("runs-table");
            let from = resolve_from(sub_matches.get_one::<String>("from"), path);
            handle_inspect_command(path, &from, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let to = required_arg(sub_matches, "to");
            let from = resolve_from(sub_matches.get_one::<String>("from"), input);
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("split", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let author = required_arg(sub_matches, "author");
            let reply_to = sub_matches.get_one::<String>("reply-to").map(|s| s.as_str());
            let edited = sub_matches.get_flag("edited");
            let attachments: Vec<String> = sub_matches
                .get_many::<String>("attachment")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            handle_split_command(input, author, reply_to, edited, attachments, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn initialize_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let fallback = if verbose {
        "relay=debug,relay_cli=debug,relay_babel=trace"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument '{name}'");
            std::process::exit(1);
        }
    }
}

/// The explicit --from value, or the format detected from the input's extension.
fn resolve_from(explicit: Option<&String>, input: &str) -> String {
    if let Some(from) = explicit {
        return from.to_string();
    }

    let registry = FormatRegistry::default();
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

fn read_input(path: &str) -> String {
    let result = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(path)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

/// The default registry with the markdown format following the configuration.
fn registry_from_config(config: &RelayConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(MarkdownFormat::with_options(config.markdown_options()));
    registry
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    from: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &RelayConfig,
) {
    let source = read_input(path);
    let registry = registry_from_config(config);

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let output = transforms::execute_transform(&doc, transform, extra_params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &RelayConfig,
) {
    let registry = registry_from_config(config);

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    // Serialize (format-specific parameters allowed via --extra-*)
    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, result).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{result}"),
    }
}

/// Handle the split command
fn handle_split_command(
    input: &str,
    author: &str,
    reply_to: Option<&str>,
    edited: bool,
    attachments: Vec<String>,
    config: &RelayConfig,
) {
    let options = RelayOptions::from(config);
    if edited && !options.include_edited {
        tracing::debug!("edits are not relayed with the current configuration");
        return;
    }

    let message = DiscordMessage {
        content: read_input(input),
        attachments,
    };
    let text = discord_to_irc(&message, &MemoryDirectory::new(), &options);

    let reply = reply_to.map(relay_babel::relay::ReplyTarget::User);
    let prefix = author_prefix(author, reply, edited);
    for line in irc_lines(&prefix, &text, options.max_message_length) {
        println!("{}", transforms::escape_controls(&line));
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Conversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        let description = registry
            .get(&format_name)
            .map(|format| format.description().to_string())
            .unwrap_or_default();
        println!("  {format_name:<10} {description}");
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> RelayConfig {
    let loader = Loader::new().with_optional_file("relay.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut RelayConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["escape-notice-asterisks", "escape-notice"]) {
        config.render.escape_notice_asterisks = parse_bool_arg("escape-notice-asterisks", &raw);
    }
    if let Some(raw) = extra_params.remove("tint-roles") {
        config.mentions.tint_roles = parse_bool_arg("tint-roles", &raw);
    }
    if let Some(raw) = extra_params.remove("escape-mass-mentions") {
        config.mentions.escape_mass_mentions = parse_bool_arg("escape-mass-mentions", &raw);
    }
    if let Some(raw) = extra_params.remove("underscore-italics") {
        config.markup.underscore_italics = parse_bool_arg("underscore-italics", &raw);
    }
    if let Some(raw) = extra_params.remove("include-edited") {
        config.outbound.include_edited = parse_bool_arg("include-edited", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["max-message-length", "max-length"]) {
        config.outbound.max_message_length = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid number '{raw}' for --extra-max-message-length");
            std::process::exit(1);
        });
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
