use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gitscope_core::{
    daily_activity, language_breakdown, read_commit_feed, top_contributors, GitAction,
    GitHubClient, GitHubRepository, GitscopeConfig, LocalWalker, RepoSnapshot, Selection,
};
use graph::{
    build_dashboard, Charset, CommitRecord, Dashboard, FixedConflictFiles, RandomConflictFiles,
    TextRenderer,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "gitscope")]
#[command(about = "Commit graph, risk alerts and git command suggestions for a repository", long_about = None)]
struct Cli {
    /// Path to a gitscope.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug, Clone)]
struct Source {
    /// Local repository to walk
    #[arg(long, conflicts_with_all = ["feed", "github"])]
    repo: Option<PathBuf>,
    /// GitHub commits JSON saved to a file
    #[arg(long, conflicts_with = "github")]
    feed: Option<PathBuf>,
    /// GitHub repository as OWNER/REPO
    #[arg(long)]
    github: Option<String>,
    /// Maximum number of commits in the window
    #[arg(short, long, default_value = "100")]
    limit: usize,
    /// Skip diff statistics for local repositories
    #[arg(long)]
    no_stats: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the commit graph with alerts and recommendations
    Analyze {
        #[command(flatten)]
        source: Source,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
        /// Report the first conflict-prone files deterministically
        #[arg(long)]
        fixed_files: bool,
    },
    /// Draw the commit graph only
    Graph {
        #[command(flatten)]
        source: Source,
        /// Line width in columns
        #[arg(short, long, default_value = "100")]
        width: usize,
        /// Use ASCII glyphs
        #[arg(long)]
        ascii: bool,
        /// Colorize lanes with ANSI escapes
        #[arg(long)]
        color: bool,
    },
    /// Print the command for a dashboard action
    Command {
        /// Action name, e.g. checkout, create-branch, abort-merge
        action: Option<String>,
        /// Selected branch
        #[arg(short, long, default_value = "main")]
        branch: String,
        /// Name for a new branch
        #[arg(short, long, default_value = "")]
        name: String,
        /// Commit message for amend
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Show commit activity per day
    Activity {
        #[command(flatten)]
        source: Source,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = GitscopeConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { source, format, fixed_files } => {
            let Window { commits, snapshot } = load_window(&source, &config, format == Format::Text)?;
            let options = config.dashboard_options();
            let dashboard = if fixed_files {
                build_dashboard(&commits, &options, FixedConflictFiles::prefix(1))
            } else {
                build_dashboard(&commits, &options, RandomConflictFiles)
            };

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&dashboard)?),
                Format::Text => {
                    if let Some(snapshot) = &snapshot {
                        print_repo_header(&snapshot.repository);
                    }
                    print_dashboard(&dashboard);
                }
            }
        }
        Commands::Graph { source, width, ascii, color } => {
            let commits = load_window(&source, &config, false)?.commits;
            let dashboard = build_dashboard(&commits, &config.dashboard_options(), RandomConflictFiles);
            let charset = if ascii { Charset::Ascii } else { Charset::Utf8 };
            let renderer = TextRenderer::new(width).charset(charset).ansi(color);
            print!("{}", renderer.render(&dashboard.graph(), None));
        }
        Commands::Command { action, branch, name, message } => {
            let selection = Selection {
                branch,
                new_branch: name,
                message,
            };
            match action {
                Some(action) => {
                    let action = GitAction::from_name(&action, &selection)
                        .with_context(|| format!("Unknown action '{}'", action))?;
                    println!("{}", action.command());
                }
                None => {
                    for action in gitscope_core::catalog(&selection) {
                        println!("{:<40} # {}", action.command(), action.description());
                    }
                }
            }
        }
        Commands::Activity { source, format } => {
            let Window { commits, snapshot } = load_window(&source, &config, true)?;
            let days = daily_activity(&commits);
            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&days)?),
                Format::Text => {
                    for day in days {
                        println!(
                            "{}  {:>3} commits  +{:<6} -{:<6} {}",
                            day.date,
                            day.commits,
                            day.additions,
                            day.deletions,
                            day.authors.join(", ")
                        );
                    }
                }
            }
            if let Some(snapshot) = &snapshot {
                print_github_extras(snapshot);
            }
        }
    }

    Ok(())
}

/// Commit window plus the GitHub snapshot it came from, when fetched
struct Window {
    commits: Vec<CommitRecord>,
    snapshot: Option<RepoSnapshot>,
}

/// Load up to `limit` commits. For `--github`, `with_snapshot` also fetches
/// repository info, contributors and languages in the same round trip.
fn load_window(source: &Source, config: &GitscopeConfig, with_snapshot: bool) -> Result<Window> {
    let mut snapshot = None;
    let mut commits = if let Some(path) = &source.feed {
        read_commit_feed(path)?
    } else if let Some(slug) = &source.github {
        let (owner, repo) = split_slug(slug)?;
        let runtime = tokio::runtime::Runtime::new()?;
        let client = GitHubClient::new(&config.github)?;
        let raw = if with_snapshot {
            let fetched = runtime.block_on(client.snapshot(owner, repo, source.limit))?;
            let raw = fetched.commits.clone();
            snapshot = Some(fetched);
            raw
        } else {
            runtime.block_on(client.commit_window(owner, repo, source.limit))?
        };
        gitscope_core::feed::normalize(raw)?
    } else {
        let path = source.repo.clone().unwrap_or_else(|| PathBuf::from("."));
        LocalWalker::open(&path)?.commits(Some(source.limit), !source.no_stats)?
    };

    commits.truncate(source.limit);
    info!(commits = commits.len(), "loaded commit window");
    Ok(Window { commits, snapshot })
}

fn print_repo_header(repository: &GitHubRepository) {
    println!("{}", repository.full_name);
    if let Some(description) = &repository.description {
        println!("  {}", description);
    }
    println!(
        "  stars {}  forks {}  open issues {}  language {}  default branch {}\n",
        repository.stargazers_count,
        repository.forks_count,
        repository.open_issues_count,
        repository.language.as_deref().unwrap_or("-"),
        repository.default_branch
    );
}

fn print_github_extras(snapshot: &RepoSnapshot) {
    println!();
    print_repo_header(&snapshot.repository);

    println!("Top contributors:");
    for contributor in top_contributors(&snapshot.contributors, 10) {
        println!("  {:<24} {}", contributor.login, contributor.contributions);
    }

    println!("\nLanguages:");
    for share in language_breakdown(&snapshot.languages) {
        println!("  {:<24} {:>5.1}%", share.language, share.percent);
    }
}

fn split_slug(slug: &str) -> Result<(&str, &str)> {
    match slug.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() => Ok((owner, repo)),
        _ => bail!("Expected OWNER/REPO, got '{}'", slug),
    }
}

fn print_dashboard(dashboard: &Dashboard) {
    let graph = dashboard.graph();
    let stats = graph.stats();
    println!("Commits: {}  Merges: {}  Lanes: {}", stats.total_commits, stats.merge_commits, stats.lane_count);

    println!("\nBranches:");
    for branch in &dashboard.branches {
        let marker = if branch.is_active { "* " } else { "  " };
        let short = branch.last_commit_sha.get(..7).unwrap_or(&branch.last_commit_sha);
        println!("{}{:<10} lane {}  {}", marker, branch.name, branch.lane, short);
    }

    println!("\nGraph:");
    print!("{}", TextRenderer::new(100).render(&graph, Some(30)));

    if !dashboard.alerts.is_empty() {
        println!("\nAlerts:");
        for alert in &dashboard.alerts {
            println!("  [{:?}] {}: {}", alert.kind, alert.title, alert.description);
            if let Some(files) = &alert.files {
                println!("      files: {}", files.join(", "));
            }
            if let Some(action) = &alert.action {
                println!("      {}: {}", action.label, action.command);
            }
        }
    }

    if !dashboard.recommendations.is_empty() {
        println!("\nRecommendations:");
        for rec in &dashboard.recommendations {
            println!("  [{:?}/{:?}] {} - {}", rec.kind, rec.priority, rec.title, rec.description);
            for cmd in &rec.commands {
                println!("      {:<40} # {}", cmd.command, cmd.description);
            }
        }
    }
}
