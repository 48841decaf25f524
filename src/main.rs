use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use shelf::areas::repository::Repository;
use shelf::artifacts::core::PagerWriter;

#[derive(Parser)]
#[command(
    name = "shelf",
    version = "0.1.0",
    about = "A minimal content-addressable version control system",
    long_about = "Shelf records snapshots of files as content-addressed objects. \
    It supports staging files, committing them with a message and inspecting \
    the resulting history.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command snapshots the given files into the object database and \
        records them in the staging index."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command creates a new commit from the staging index with the specified commit message."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command walks the commit chain from HEAD and prints each commit, newest first."
    )]
    Log,
    #[command(
        name = "show",
        about = "Show the changes introduced by a commit",
        long_about = "This command prints the files recorded in a commit together with a \
        line diff against the parent commit."
    )]
    Show {
        #[arg(index = 1, help = "The commit to show (full or abbreviated oid)")]
        revision: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes an object file and can write it to the object database. \
        It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
}

/// Page `log` and `show` output only when stdout is an interactive terminal
/// and the user has not opted out via `NO_PAGER`.
fn should_page() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_PAGER").is_none()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let mut repository = match path {
                Some(path) => Repository::new(path, Box::new(std::io::stdout()))?,
                None => {
                    let pwd = std::env::current_dir()?;
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?
                }
            };

            repository.init().await?
        }
        Commands::Add { paths } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.add(paths).await?
        }
        Commands::Commit { message } => {
            let pwd = std::env::current_dir()?;
            let mut repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.commit(message.as_str()).await?
        }
        Commands::Log => {
            let pwd = std::env::current_dir()?;

            if should_page() {
                let pager = Pager::new();
                let repository = Repository::new(
                    &pwd.to_string_lossy(),
                    Box::new(PagerWriter::new(pager.clone())),
                )?;

                repository.log()?;
                minus::page_all(pager)?
            } else {
                let repository =
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

                repository.log()?
            }
        }
        Commands::Show { revision } => {
            let pwd = std::env::current_dir()?;

            if should_page() {
                let pager = Pager::new();
                let repository = Repository::new(
                    &pwd.to_string_lossy(),
                    Box::new(PagerWriter::new(pager.clone())),
                )?;

                repository.show(revision)?;
                minus::page_all(pager)?
            } else {
                let repository =
                    Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

                repository.show(revision)?
            }
        }
        Commands::CatFile { sha } => {
            let pwd = std::env::current_dir()?;
            let repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.cat_file(sha)?
        }
        Commands::HashObject { write, file } => {
            let pwd = std::env::current_dir()?;
            let repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.hash_object(file, *write)?
        }
    }

    Ok(())
}
