use crate::api::{ProgramApi, SearchFilters};
use crate::cards::parse_program_cards;
use crate::catalog::ContentCatalog;
use crate::config::Settings;
use crate::errors::{AppError, AppResult};
use crate::formatter::format_original_response;
use crate::generator::Advisor;
use crate::loader::{load_program, load_programs};
use crate::models::ProgramDescriptor;
use crate::report::{render_info_body, render_print_document, render_results_table, ProgramInfo};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");
const PRINT_DATE_FORMAT: &str = "%d/%m/%Y";

fn json_flag() -> Arg<'static> {
    Arg::new("json")
        .long("json")
        .help("Print JSON instead of HTML")
        .action(ArgAction::SetTrue)
}

fn path_arg(name: &'static str, help: &'static str) -> Arg<'static> {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
}

fn text_opt(name: &'static str, short: char, help: &'static str) -> Arg<'static> {
    Arg::new(name)
        .short(short)
        .long(name)
        .help(help)
        .action(ArgAction::Set)
}

/// Builds the command-line definition.
pub fn command() -> Command<'static> {
    Command::new("financing-advisor")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a TOML settings file")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .help("Path to a TOML content catalog (overrides catalog_path in settings)")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("info")
                .about("Generate the advisory sections for one program")
                .after_help("Example:\n  financing-advisor info -n \"Kit Digital\" -t Subvención -c \"Convocatoria permanente\"")
                .arg(text_opt("name", 'n', "Program name").required(true))
                .arg(text_opt("type", 't', "Aid type (subvención, préstamo, aval, ...)"))
                .arg(text_opt("description", 'd', "Program description"))
                .arg(text_opt("convocatoria", 'c', "Application round text (status, dates)"))
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("program")
                .about("Generate the advisory sections for a program JSON file")
                .arg(path_arg("file", "Path to the program JSON file"))
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("batch")
                .about("Render a printable document for every program JSON file in a directory")
                .arg(path_arg("dir", "Directory searched recursively for *.json files"))
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the document to this file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("cards")
                .about("Generate advisory sections for every program card of a results page")
                .arg(path_arg("file", "Path to the results page HTML"))
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("format")
                .about("Format a raw advisor response as HTML")
                .arg(path_arg("file", "Path to the response text")),
        )
        .subcommand(
            Command::new("fetch")
                .about("Fetch a program from the API and generate its advisory sections")
                .arg(Arg::new("id").help("Program id").required(true))
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("search")
                .about("Search programs through the API and render the results table")
                .arg(Arg::new("search").long("search").help("Free-text query").action(ArgAction::Set))
                .arg(Arg::new("organismo").long("organismo").help("Managing body").action(ArgAction::Set))
                .arg(Arg::new("estado").long("estado").help("Application round status").action(ArgAction::Set))
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("save")
                .about("Create or update a program through the API")
                .arg(path_arg("file", "Path to the program JSON file")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a program through the API")
                .arg(Arg::new("id").help("Program id").required(true)),
        )
}

/// Loads settings from `--config`, or the defaults when it is absent.
pub fn load_settings(matches: &ArgMatches) -> AppResult<Settings> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Settings::from_toml_file(path),
        None => Ok(Settings::default()),
    }
}

fn build_advisor(matches: &ArgMatches, settings: &Settings) -> AppResult<Advisor> {
    let catalog_path = matches
        .get_one::<PathBuf>("catalog")
        .or(settings.catalog_path.as_ref());
    let catalog = match catalog_path {
        Some(path) => ContentCatalog::from_toml_file(path)?,
        None => ContentCatalog::default(),
    };
    Ok(Advisor::new(catalog))
}

fn opt_text(matches: &ArgMatches, name: &str) -> String {
    matches.get_one::<String>(name).cloned().unwrap_or_default()
}

fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render_info(advisor: &Advisor, descriptor: &ProgramDescriptor, json: bool) -> AppResult<String> {
    let info = ProgramInfo::build(advisor, descriptor);
    if json {
        to_json(&info)
    } else {
        Ok(render_info_body(&info))
    }
}

/// Executes the parsed command line and returns what should go to stdout.
///
/// Subcommands that only talk to the API never load the content catalog.
///
/// # Errors
///
/// Returns an error if input files cannot be read or parsed, the catalog is
/// invalid, or an API call fails.
pub async fn run(matches: &ArgMatches, settings: &Settings) -> AppResult<String> {
    match matches.subcommand() {
        Some(("info", sub)) => {
            let advisor = build_advisor(matches, settings)?;
            let descriptor = ProgramDescriptor::new(
                opt_text(sub, "name"),
                opt_text(sub, "type"),
                opt_text(sub, "description"),
                opt_text(sub, "convocatoria"),
            );
            render_info(&advisor, &descriptor, sub.get_flag("json"))
        }
        Some(("program", sub)) => {
            let advisor = build_advisor(matches, settings)?;
            let path = sub.get_one::<PathBuf>("file").expect("file is required");
            let program = load_program(path)?;
            render_info(&advisor, &ProgramDescriptor::from(&program), sub.get_flag("json"))
        }
        Some(("batch", sub)) => {
            let advisor = build_advisor(matches, settings)?;
            let dir = sub.get_one::<PathBuf>("dir").expect("dir is required");
            let descriptors: Vec<ProgramDescriptor> = load_programs(dir)?
                .iter()
                .map(ProgramDescriptor::from)
                .collect();
            let date = chrono::Local::now().format(PRINT_DATE_FORMAT).to_string();
            let count = descriptors.len();

            // Sections render on the rayon pool, off the async runtime
            let document = tokio::task::spawn_blocking(move || {
                render_print_document(&advisor, &descriptors, &date)
            })
            .await
            .map_err(|e| AppError::IoError(format!("Task join error: {e}")))?;
            info!(programs = count, dir = %dir.display(), "Rendered print document");

            match sub.get_one::<PathBuf>("output") {
                Some(output) => {
                    fs::write(output, document)?;
                    info!(output = %output.display(), "Print document written");
                    Ok(String::new())
                }
                None => Ok(document),
            }
        }
        Some(("cards", sub)) => {
            let advisor = build_advisor(matches, settings)?;
            let path = sub.get_one::<PathBuf>("file").expect("file is required");
            let html = fs::read_to_string(path)?;
            let sections = parse_program_cards(&html)?
                .iter()
                .map(|descriptor| ProgramInfo::build(&advisor, descriptor))
                .collect::<Vec<_>>();
            if sub.get_flag("json") {
                to_json(&sections)
            } else {
                Ok(sections.iter().map(render_info_body).collect::<Vec<_>>().join("\n"))
            }
        }
        Some(("format", sub)) => {
            let path = sub.get_one::<PathBuf>("file").expect("file is required");
            let text = fs::read_to_string(path)?;
            Ok(format_original_response(&text))
        }
        Some(("fetch", sub)) => {
            let advisor = build_advisor(matches, settings)?;
            let api = ProgramApi::new(&settings.api_base_url)?;
            let id = sub.get_one::<String>("id").expect("id is required");
            let program = api.fetch_program(id).await?;
            render_info(&advisor, &ProgramDescriptor::from(&program), sub.get_flag("json"))
        }
        Some(("search", sub)) => {
            let api = ProgramApi::new(&settings.api_base_url)?;
            let filters = SearchFilters {
                search: sub.get_one::<String>("search").cloned(),
                organismo: sub.get_one::<String>("organismo").cloned(),
                estado: sub.get_one::<String>("estado").cloned(),
            };
            let programs = api.search_programs(&filters).await?;
            if sub.get_flag("json") {
                to_json(&programs)
            } else {
                Ok(render_results_table(&programs))
            }
        }
        Some(("save", sub)) => {
            let api = ProgramApi::new(&settings.api_base_url)?;
            let path = sub.get_one::<PathBuf>("file").expect("file is required");
            let program = load_program(path)?;
            api.save_program(&program).await
        }
        Some(("delete", sub)) => {
            let api = ProgramApi::new(&settings.api_base_url)?;
            let id = sub.get_one::<String>("id").expect("id is required");
            api.delete_program(id).await?;
            Ok(String::new())
        }
        _ => {
            let mut cmd = command();
            cmd.print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
            Ok(String::new())
        }
    }
}
