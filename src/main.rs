use clap::Parser;
use sprout::{AppError, CliOverrides};

#[derive(Parser)]
#[command(name = "sprout")]
#[command(version)]
#[command(
    about = "Bootstrap a new GitHub repository from a template",
    long_about = None
)]
struct Cli {
    /// Name for the new repository (skips interactive naming)
    #[arg(short, long)]
    name: Option<String>,
    /// Template repository to seed from (owner/name)
    #[arg(short, long)]
    template: Option<String>,
    /// GitHub API token
    #[arg(long)]
    github_token: Option<String>,
    /// GitHub account that owns the new repository
    #[arg(long)]
    github_username: Option<String>,
    /// Author email for the initial commit
    #[arg(long)]
    git_email: Option<String>,
    /// Author name for the initial commit
    #[arg(long)]
    git_name: Option<String>,
    /// Replicate API token for banner generation
    #[arg(long)]
    replicate_token: Option<String>,
    /// Print each underlying command and its output
    #[arg(short, long)]
    verbose: bool,
    /// Print five candidate repository names and exit
    #[arg(short, long)]
    generate: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.generate {
        for name in sprout::generate_names() {
            println!("{name}");
        }
        return;
    }

    let overrides = CliOverrides {
        name: cli.name,
        template: cli.template,
        github_token: cli.github_token,
        github_username: cli.github_username,
        git_email: cli.git_email,
        git_name: cli.git_name,
        replicate_token: cli.replicate_token,
        verbose: cli.verbose,
    };

    let result: Result<(), AppError> = sprout::bootstrap(overrides).map(|_| ());
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
