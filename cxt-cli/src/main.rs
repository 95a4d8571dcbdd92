// Command-line interface for cxt
//
// This binary converts cxt markup to HTML (and a few other outputs) and lets you look at the
// parsed tree while writing a document.
//
// The core capabilities use the cxt-babel crate, the collection of formats built on top of the
// cxt-core parser and renderer. Settings come from cxt-config.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. Only cxt can be read.
// Usage:
//  cxt <input> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  cxt convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  cxt inspect <path> [<transform>]      - Show a transform (defaults to "ast-tag")
//  cxt --list-transforms                 - List available transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/transform.
// Example:
//  cxt notes.cxt --to html --extra-title "Notes" --extra-css site.css

use cxt_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use cxt_babel::formats::HtmlFormat;
use cxt_babel::FormatRegistry;
use cxt_config::{CxtConfig, Loader};
use std::collections::HashMap;
use std::fs;

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

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
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
    Command::new("cxt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting cxt files")
        .long_about(
            "cxt is a command-line tool for working with cxt markup files.\n\n\
            Commands:\n  \
            - convert: Render a cxt file to HTML or Markdown, or dump its tree\n  \
            - inspect: View the parsed tree or the rendered fragments\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            cxt notes.cxt --to html                    # Standalone HTML on stdout\n  \
            cxt notes.cxt --to html -o notes.html      # Write to a file\n  \
            cxt notes.cxt --to html --extra-standalone false  # Bare fragments\n  \
            cxt inspect notes.cxt                      # View the tree as XML tags",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a cxt.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parser and renderer progress to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the parsed tree of a cxt file")
                .long_about(
                    "View a cxt file at different processing stages.\n\n\
                    Transforms (stage-format):\n  \
                    - ast-tag:         Element tree as XML-like tags (default)\n  \
                    - ast-json:        Element tree as JSON\n  \
                    - html-fragments:  Rendered HTML, one string per top-level element\n\n\
                    Extra Parameters:\n  \
                    --extra-show-attrs false   Hide attribute maps in ast-tag output\n\n\
                    Examples:\n  \
                    cxt inspect notes.cxt                   # XML-like output (default)\n  \
                    cxt inspect notes.cxt ast-json          # JSON tree\n  \
                    cxt inspect notes.cxt html-fragments    # Rendered fragments",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the cxt file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'ast-tag'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a cxt file to another format (default command)")
                .long_about(
                    "Convert cxt documents to other formats.\n\n\
                    Supported targets:\n  \
                    - html:     Standalone HTML document or bare fragments (.html)\n  \
                    - markdown: Rendered HTML blocks in a Markdown file (.md)\n  \
                    - tag:      XML-like dump of the element tree\n  \
                    - json:     JSON dump of the element tree\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    cxt convert notes.cxt --to html              # HTML on stdout\n  \
                    cxt convert notes.cxt --to markdown -o n.md  # Markdown file\n  \
                    cxt notes.cxt --to html                      # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
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
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: html, markdown, tag, json\n\
                            Use the format name, not the file extension.",
                        )
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
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first argument that looks like a file means "convert" was left out
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
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

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("missing path");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let (Some(input), Some(to)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("to"),
            ) else {
                fail("convert needs an input file and --to");
            };

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => FormatRegistry::default()
                    .detect_format_from_filename(input)
                    .unwrap_or_else(|| {
                        fail(&format!(
                            "Could not detect format from filename '{input}'; \
                             specify --from explicitly"
                        ))
                    }),
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &CxtConfig,
) {
    let source = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("reading file '{path}': {e}")));

    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params)
        .unwrap_or_else(|e| fail(&e));

    print!("{output}");
}

fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &CxtConfig,
) {
    let mut registry = FormatRegistry::default();
    registry.register(HtmlFormat::new((&config.convert.html).into()));

    for format in [from, to] {
        if let Err(e) = registry.get(format) {
            fail(&e.to_string());
        }
    }

    let source = fs::read_to_string(input)
        .unwrap_or_else(|e| fail(&format!("reading file '{input}': {e}")));

    let doc = registry
        .parse(&source, from)
        .unwrap_or_else(|e| fail(&e.to_string()));

    let mut format_options = convert_params_from_config(config, to);
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    let result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| fail(&e.to_string()));

    match output {
        Some(path) => {
            fs::write(path, result)
                .unwrap_or_else(|e| fail(&format!("writing file '{path}': {e}")));
        }
        None => print!("{result}"),
    }
}

fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  ast         - Parsed element tree (variables unresolved)");
    println!("  html        - Rendered output (variables resolved)\n");

    println!("Formats:");
    println!("  tag         - XML-like tag format");
    println!("  json        - JSON output");
    println!("  fragments   - One HTML string per top-level element\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        println!("  {format_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> CxtConfig {
    let loader = Loader::new().with_optional_file("cxt.toml");
    let loader = match explicit_path {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

fn apply_config_overrides(config: &mut CxtConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["standalone"]) {
        config.convert.html.standalone = parse_bool_arg("standalone", &raw);
    }
    if let Some(title) = take_override(extra_params, &["title"]) {
        config.convert.html.title = title;
    }
    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.convert.html.custom_css = path;
    }
    if let Some(raw) = take_override(extra_params, &["show-attrs", "showattrs"]) {
        config.inspect.tag.show_attrs = parse_bool_arg("show-attrs", &raw);
    }
}

fn build_inspect_params(
    config: &CxtConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert(
        "show-attrs".to_string(),
        config.inspect.tag.show_attrs.to_string(),
    );
    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }
    params
}

/// Options the target format understands, taken from the configuration.
/// Html's `standalone` and `title` travel in the registered format itself.
fn convert_params_from_config(config: &CxtConfig, to: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    match to {
        "html" => {
            if let Some(path) = config.convert.html.css_path() {
                params.insert("css-path".to_string(), path.to_string());
            }
        }
        "tag" => {
            params.insert(
                "show-attrs".to_string(),
                config.inspect.tag.show_attrs.to_string(),
            );
        }
        _ => {}
    }
    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    cxt_babel::parse_bool(raw)
        .unwrap_or_else(|| fail(&format!("Invalid boolean value '{raw}' for --extra-{flag}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_extra_args_empty() {
        let (cleaned, extras) = parse_extra_args(&args(&["cxt", "notes.cxt", "--to", "html"]));
        assert_eq!(cleaned, args(&["cxt", "notes.cxt", "--to", "html"]));
        assert!(extras.is_empty());
    }

    #[test]
    fn test_parse_extra_args_with_value() {
        let (cleaned, extras) = parse_extra_args(&args(&[
            "cxt",
            "notes.cxt",
            "--extra-title",
            "My Notes",
            "--to",
            "html",
        ]));
        assert_eq!(cleaned, args(&["cxt", "notes.cxt", "--to", "html"]));
        assert_eq!(extras.get("title"), Some(&"My Notes".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag() {
        let (cleaned, extras) = parse_extra_args(&args(&[
            "cxt",
            "inspect",
            "notes.cxt",
            "--extra-show-attrs",
            "--verbose",
        ]));
        assert_eq!(cleaned, args(&["cxt", "inspect", "notes.cxt", "--verbose"]));
        assert_eq!(extras.get("show-attrs"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_boolean_flag_at_end() {
        let (_, extras) = parse_extra_args(&args(&["cxt", "notes.cxt", "--extra-standalone"]));
        assert_eq!(extras.get("standalone"), Some(&"true".to_string()));
    }

    #[test]
    fn test_parse_extra_args_allows_extras_alias() {
        let (_, extras) = parse_extra_args(&args(&["cxt", "--extras-css", "site.css"]));
        assert_eq!(extras.get("css"), Some(&"site.css".to_string()));
    }

    #[test]
    fn apply_config_overrides_updates_known_flags() {
        let mut config = cxt_config::load_defaults().unwrap();
        let mut extras = HashMap::new();
        extras.insert("standalone".to_string(), "no".to_string());
        extras.insert("title".to_string(), "Notes".to_string());
        extras.insert("css".to_string(), "site.css".to_string());
        extras.insert("show-attrs".to_string(), "false".to_string());
        extras.insert("unrelated".to_string(), "kept".to_string());

        apply_config_overrides(&mut config, &mut extras);

        assert!(!config.convert.html.standalone);
        assert_eq!(config.convert.html.title, "Notes");
        assert_eq!(config.convert.html.css_path(), Some("site.css"));
        assert!(!config.inspect.tag.show_attrs);
        assert_eq!(extras.len(), 1);
        assert!(extras.contains_key("unrelated"));
    }

    #[test]
    fn apply_config_overrides_accepts_on_off() {
        let mut config = cxt_config::load_defaults().unwrap();
        let mut extras = HashMap::new();
        extras.insert("standalone".to_string(), "off".to_string());
        extras.insert("show-attrs".to_string(), "OFF".to_string());
        apply_config_overrides(&mut config, &mut extras);
        assert!(!config.convert.html.standalone);
        assert!(!config.inspect.tag.show_attrs);

        extras.insert("standalone".to_string(), "on".to_string());
        apply_config_overrides(&mut config, &mut extras);
        assert!(config.convert.html.standalone);
    }

    #[test]
    fn inspect_params_include_configured_defaults() {
        let config = cxt_config::load_defaults().unwrap();
        let params = build_inspect_params(&config, &HashMap::new());
        assert_eq!(params.get("show-attrs"), Some(&"true".to_string()));
    }

    #[test]
    fn convert_params_only_target_known_options() {
        let mut config = cxt_config::load_defaults().unwrap();
        assert!(convert_params_from_config(&config, "html").is_empty());
        assert!(convert_params_from_config(&config, "json").is_empty());

        config.convert.html.custom_css = "site.css".to_string();
        let params = convert_params_from_config(&config, "html");
        assert_eq!(params.get("css-path"), Some(&"site.css".to_string()));
    }
}
