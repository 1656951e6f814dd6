// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, bail, Result};
use std::env;
use std::io;
use std::path::PathBuf;
use tracing::{debug, warn, Level};
use typecoach::{validate_catalog, CatalogFile, Category, Lesson, LessonLibrary};

fn print_usage() {
    println!("typecoach - Typing Practice Lessons");
    println!();
    println!("Usage: typecoach [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --list [CATEGORY]       List lessons (all categories if none given)");
    println!("  --random <CATEGORY>     Show a random lesson from CATEGORY");
    println!("  --show <ID>             Show the lesson with the given id");
    println!("  --dump [yaml|toml]      Print the active catalog (default yaml)");
    println!("  --help                  Show this help message");
    println!();
    println!("Options:");
    println!("  --catalog <PATH>        Load lessons from a YAML or TOML catalog file");
    println!("  --seed <N>              Seed for repeatable random picks");
    println!("  --verbose, -v           Debug logging on stderr");
    println!();
    println!("Categories: warmup, accuracy, fluency");
}

/// Output format for `--dump`
#[derive(Debug, Clone, Copy, PartialEq)]
enum DumpFormat {
    Yaml,
    Toml,
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Banner,
    Help,
    List(Option<Category>),
    Random(Category),
    Show(String),
    Dump(DumpFormat),
}

#[derive(Debug, Clone, PartialEq)]
struct Options {
    catalog: Option<PathBuf>,
    seed: Option<u64>,
    verbose: bool,
    command: Command,
}

fn parse_category(value: &str) -> Result<Category> {
    Category::from_str(value).ok_or_else(|| anyhow!("Unknown category: {}", value))
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut catalog = None;
    let mut seed = None;
    let mut verbose = false;
    let mut command = None;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        let value = args.get(i + 1).map(String::as_str);

        let parsed = match arg {
            "--catalog" => {
                let path = value.ok_or_else(|| anyhow!("--catalog requires a file path"))?;
                catalog = Some(PathBuf::from(path));
                i += 2;
                continue;
            }
            "--seed" => {
                let text = value.ok_or_else(|| anyhow!("--seed requires a number"))?;
                let number = text
                    .parse()
                    .map_err(|_| anyhow!("Invalid seed: {}", text))?;
                seed = Some(number);
                i += 2;
                continue;
            }
            "--verbose" | "-v" => {
                verbose = true;
                i += 1;
                continue;
            }
            "--help" | "-h" => (Command::Help, 1),
            "--list" => match value.filter(|v| !v.starts_with('-')) {
                Some(name) => (Command::List(Some(parse_category(name)?)), 2),
                None => (Command::List(None), 1),
            },
            "--random" => {
                let name = value.ok_or_else(|| anyhow!("--random requires a category"))?;
                (Command::Random(parse_category(name)?), 2)
            }
            "--show" => {
                let id = value.ok_or_else(|| anyhow!("--show requires a lesson id"))?;
                (Command::Show(id.to_string()), 2)
            }
            "--dump" => match value.filter(|v| !v.starts_with('-')) {
                Some("yaml") | Some("yml") => (Command::Dump(DumpFormat::Yaml), 2),
                Some("toml") => (Command::Dump(DumpFormat::Toml), 2),
                Some(other) => bail!("Unknown dump format: {}", other),
                None => (Command::Dump(DumpFormat::Yaml), 1),
            },
            _ => bail!("Unknown option: {}", arg),
        };

        if command.is_some() {
            bail!("Only one command may be given (extra: {})", arg);
        }
        command = Some(parsed.0);
        i += parsed.1;
    }

    Ok(Options {
        catalog,
        seed,
        verbose,
        command: command.unwrap_or(Command::Banner),
    })
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_library(options: &Options) -> Result<LessonLibrary> {
    let Some(path) = &options.catalog else {
        return Ok(match options.seed {
            Some(seed) => LessonLibrary::with_seed(seed),
            None => LessonLibrary::new(),
        });
    };

    debug!(path = %path.display(), "loading catalog");
    let catalog = CatalogFile::load(path)?;
    for issue in validate_catalog(&catalog) {
        warn!("{}: {}", path.display(), issue);
    }

    Ok(match options.seed {
        Some(seed) => catalog.into_library_with_seed(seed),
        None => catalog.into_library(),
    })
}

fn list_lessons(library: &LessonLibrary, only: Option<Category>) {
    let categories: Vec<Category> = match only {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    for (n, category) in categories.into_iter().enumerate() {
        if n > 0 {
            println!();
        }
        let lessons = library.lessons(category);
        println!("{} ({})", category, lessons.len());
        for lesson in lessons {
            println!(
                "  {:<24} {} ({} words)",
                lesson.id(),
                lesson,
                lesson.word_count()
            );
        }
    }
}

fn print_lesson(lesson: &Lesson, category: Option<Category>) {
    println!("{}", lesson.title());
    println!("Focus: {}", lesson.focus_area());
    if let Some(category) = category {
        println!("Category: {}", category);
    }
    println!("Id: {}", lesson.id());
    println!();
    println!("{}", lesson.passage());
    println!();
    println!("Coaching tip: {}", lesson.coaching_tip());
}

fn run(options: &Options) -> Result<()> {
    let library = load_library(options)?;

    match &options.command {
        Command::Banner => {
            println!("typecoach - Typing Practice Lessons");
            println!("{} lessons available", library.len());
            println!("Run with --help for usage information");
        }
        Command::Help => print_usage(),
        Command::List(only) => list_lessons(&library, *only),
        Command::Random(category) => {
            let lesson = library.random(*category)?;
            print_lesson(lesson, Some(*category));
        }
        Command::Show(id) => {
            let lesson = library
                .find(id)
                .ok_or_else(|| anyhow!("No lesson with id: {}", id))?;
            print_lesson(lesson, library.category_of(id));
        }
        Command::Dump(format) => {
            let catalog = CatalogFile::from(&library);
            let text = match format {
                DumpFormat::Yaml => catalog.to_yaml()?,
                DumpFormat::Toml => catalog.to_toml()?,
            };
            print!("{}", text);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("Error: {}", err);
            print_usage();
            std::process::exit(1);
        }
    };

    init_logging(options.verbose);
    run(&options)
}
