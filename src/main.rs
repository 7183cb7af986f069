use clap::Parser;
use quire::application::manage_config::CONFIG_KEYS;
use quire::application::{
    init::init, table_of_contents, ConfigService, ListTagsService, PostsByTagService,
    TagListOptions, TagSort, TocOptions,
};
use quire::cli::{format_post_list, format_tag_list, format_toc, Cli, Commands};
use quire::error::{QuireError, Result};
use quire::infrastructure::{FileSystemRepository, SiteRepository, TocConfig};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// RUST_LOG wins over the verbosity flags. Logs go to stderr so stdout only
/// carries command output.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, content_dir } => init(&path, content_dir),
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                // No key provided, show usage
                println!("Usage: quire config [--list | <key> [<value>]]");
                println!("Valid keys: {}", CONFIG_KEYS.join(", "));
                Ok(())
            }
        }
        Commands::Toc {
            file,
            min_level,
            max_level,
            skip_code_fences,
            strip_markup,
        } => {
            let options = TocOptions {
                min_level,
                max_level,
                skip_code_fences,
                strip_markup,
            };
            let headings = table_of_contents(&file, site_toc_config()?, options)?;
            println!("{}", format_toc(&headings).trim_end());
            Ok(())
        }
        Commands::Tags { popular, sort } => {
            let sort = TagSort::from_str(&sort).map_err(QuireError::Config)?;
            let repo = FileSystemRepository::discover()?;
            let tags = ListTagsService::new(repo).execute(TagListOptions { popular, sort })?;
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(())
        }
        Commands::Posts { tag } => {
            let repo = FileSystemRepository::discover()?;
            let posts = PostsByTagService::new(repo).execute(&tag)?;
            println!("{}", format_post_list(&posts).trim_end());
            Ok(())
        }
    }
}

/// `[toc]` settings of the enclosing site, or the defaults outside a site.
fn site_toc_config() -> Result<TocConfig> {
    match FileSystemRepository::discover() {
        Ok(repo) => Ok(repo.load_config()?.toc),
        Err(QuireError::NotQuireSite(_)) => Ok(TocConfig::default()),
        Err(e) => Err(e),
    }
}
