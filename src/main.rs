mod debug_report;

use shaleian_gloss::{Dictionary, Options, analyze_verbose};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

/// Fallback for `--dictionary`.
const DICTIONARY_ENV: &str = "SHALEIAN_GLOSS_DICTIONARY";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let dictionary = match Dictionary::load(&config.dictionary) {
        Ok(dictionary) => dictionary,
        Err(err) => {
            eprintln!("error: {}: {err}", config.dictionary.display());
            std::process::exit(1);
        }
    };

    let res = analyze_verbose(&dictionary, &config.input, &config.options);
    debug_report::print_run(&res, &config.options, config.color);
}

struct CliConfig {
    input: String,
    dictionary: PathBuf,
    options: Options,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut dictionary: Option<PathBuf> = std::env::var_os(DICTIONARY_ENV).map(PathBuf::from);
    let mut options = Options::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("shaleian-gloss {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--ignore-diacritic" => options.ignore_diacritic = true,
            "--dictionary" | "-d" => {
                let value = args.next().ok_or_else(|| "error: --dictionary expects a value".to_string())?;
                dictionary = Some(PathBuf::from(value));
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--dictionary=") => {
                dictionary = Some(PathBuf::from(arg.trim_start_matches("--dictionary=")));
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                set_input(&mut input, std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" "))?;
                break;
            }
        }
    }

    let dictionary =
        dictionary.ok_or_else(|| format!("error: no dictionary given (--dictionary or {DICTIONARY_ENV})"))?;

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, dictionary, options, color })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.replace(value).is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "shaleian-gloss {version}

Usage: shaleian-gloss [OPTIONS] [--] [text...]

Glosses the text, or stdin when no text is given.

Options:
  -d, --dictionary <path>    Dictionary snapshot (JSON). Falls back to ${env}.
  -i, --input <text>         Text to gloss.
  --ignore-diacritic         Match words ignoring diacritics.
  --color, --no-color        Force or disable ANSI color.
  -h, --help                 Show this help.
  -V, --version              Print the version.

Set SHALEIAN_GLOSS_DEBUG=1 to trace search steps on stderr.
Exits with 2 on bad arguments and 1 when the dictionary fails to load.
",
        version = env!("CARGO_PKG_VERSION"),
        env = DICTIONARY_ENV
    )
}
