use bible_lookup::{
    full_text_search, lookup, Lookup, RegistryBuilder, TranslationCode, TranslationLibrary,
    VerseResult,
};
use std::env;
use std::path::PathBuf;

const USAGE: &str = "Usage: bible-lookup [--data-dir DIR] [--translation CODE] [--limit N] [--search] <query...>";

struct Options {
    data_dir: PathBuf,
    translation: TranslationCode,
    limit: Option<usize>,
    search_only: bool,
    query: String,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut data_dir = env::var_os("BIBLE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    let mut translation = TranslationCode::RST;
    let mut limit = None;
    let mut search_only = false;
    let mut words = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--data-dir" => {
                let dir = iter.next().ok_or("--data-dir flag requires an argument.")?;
                data_dir = PathBuf::from(dir);
            }
            "--translation" => {
                let code = iter.next().ok_or("--translation flag requires an argument.")?;
                translation = TranslationCode::new(code);
            }
            "--limit" => {
                let value = iter.next().ok_or("--limit flag requires an argument.")?;
                let parsed = value
                    .parse::<usize>()
                    .map_err(|_| format!("Invalid limit '{}'. Expected a number.", value))?;
                limit = Some(parsed);
            }
            "--search" => search_only = true,
            _ => words.push(arg.as_str()),
        }
    }

    let query = words.join(" ");
    if query.trim().is_empty() {
        return Err("No query given.".to_string());
    }
    Ok(Options {
        data_dir,
        translation,
        limit,
        search_only,
        query,
    })
}

fn print_matches(matches: &[VerseResult]) {
    for (i, hit) in matches.iter().enumerate() {
        println!("  {}. [{}] {}", i + 1, hit.reference, hit.text);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return;
    }
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("ERROR: {}", message);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let library = TranslationLibrary::new(&options.data_dir);
    let tree = match library.get(&options.translation) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("ERROR: Failed to load translation {}", options.translation);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    // Translation book names (e.g. Kazakh titles) are accepted as aliases too.
    let registry = match RegistryBuilder::standard()
        .tree_aliases(&options.translation, &tree)
        .build()
    {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = if options.search_only {
        full_text_search(
            &registry,
            &options.query,
            Some(&tree),
            &options.translation,
            options.limit,
        )
        .map(|matches| {
            if matches.is_empty() {
                Lookup::Nothing
            } else {
                Lookup::Matches(matches)
            }
        })
    } else {
        lookup(
            &registry,
            &options.query,
            Some(&tree),
            &options.translation,
            options.limit,
        )
    };

    match outcome {
        Ok(Lookup::Passage(passage)) => {
            println!("{} ({})", passage.reference, options.translation);
            println!("{}", passage.text);
        }
        Ok(Lookup::Matches(matches)) => {
            println!("Search results for '{}' ({}): {}", options.query, options.translation, matches.len());
            print_matches(&matches);
        }
        Ok(Lookup::Nothing) => {
            println!("Nothing found for '{}' in {}", options.query, options.translation);
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
