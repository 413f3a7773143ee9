//! Bunian Content Admin CLI
//!
//! Operator interface over the marketing-site content store:
//! 1. Manage development and agriculture project listings
//! 2. Triage property requests and export them for the sales team
//! 3. Edit the market-trends block shown on the public site
//!
//! Usage:
//!   bunian-admin login --email admin@bunian.com --password ...
//!   bunian-admin projects list --category residential
//!   bunian-admin requests export --out ./exports
//!
//! Content lives as JSON blobs under the data directory; everything this
//! binary does goes through the `AdminPanel` in `bunian-admin`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use bunian_admin::AdminPanel;
use bunian_model::{
    AgricultureProject, AgricultureProjectPatch, AgricultureType, MarketTrendPatch,
    NewAgricultureProject, NewProject, NewPropertyRequest, Project, ProjectCategory, ProjectPatch,
    PropertyRequest, RequestStatus,
};
use bunian_session::{Credentials, SESSION_TTL_SECS};
use bunian_types::{now_secs, RecordId};
use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bunian-admin")]
#[command(about = "Bunian marketing-site content admin")]
#[command(version)]
struct Cli {
    /// Data directory for the content store
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// JSON file holding the admin credential pair
    #[arg(long, value_name = "FILE")]
    credentials_file: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an admin session
    Login {
        /// Admin email
        #[arg(long)]
        email: String,

        /// Admin password
        #[arg(long)]
        password: String,
    },

    /// End the admin session
    Logout,

    /// Show session state and dashboard counts
    Status,

    /// Manage development project listings
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },

    /// Manage agriculture project listings
    Agriculture {
        #[command(subcommand)]
        command: AgricultureCommands,
    },

    /// Triage and export property requests
    Requests {
        #[command(subcommand)]
        command: RequestCommands,
    },

    /// Show or edit the market-trends block
    Trends {
        #[command(subcommand)]
        command: TrendCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ProjectCommands {
    /// List projects
    List {
        /// Only one category (residential, commercial)
        #[arg(long)]
        category: Option<ProjectCategory>,

        /// Only homepage-featured projects
        #[arg(long)]
        featured: bool,
    },

    /// Show one project as JSON
    Show {
        /// Project id
        id: String,
    },

    /// Add a project from a JSON file
    Add {
        /// Path to the new-project JSON document
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Apply a JSON patch to one project
    Update {
        /// Project id
        id: String,

        /// Patch document (camelCase fields, only supplied fields change)
        #[arg(long, value_name = "JSON")]
        patch: String,
    },

    /// Delete a project
    Delete {
        /// Project id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum AgricultureCommands {
    /// List agriculture projects
    List {
        /// Only one operation type (crop, livestock, processing)
        #[arg(long = "type", value_name = "TYPE")]
        kind: Option<AgricultureType>,

        /// Only homepage-featured projects
        #[arg(long)]
        featured: bool,
    },

    /// Show one agriculture project as JSON
    Show {
        /// Project id
        id: String,
    },

    /// Add an agriculture project from a JSON file
    Add {
        /// Path to the new-project JSON document
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Apply a JSON patch to one agriculture project
    Update {
        /// Project id
        id: String,

        /// Patch document (camelCase fields, only supplied fields change)
        #[arg(long, value_name = "JSON")]
        patch: String,
    },

    /// Delete an agriculture project
    Delete {
        /// Project id
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum RequestCommands {
    /// List property requests
    List {
        /// Only one status (pending, handled, archived)
        #[arg(long)]
        status: Option<RequestStatus>,
    },

    /// File a request from a JSON document (the website form's payload)
    Submit {
        /// Path to the request JSON document
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Move a request to a new status
    SetStatus {
        /// Request id
        id: String,

        /// New status (pending, handled, archived)
        status: RequestStatus,
    },

    /// Export all requests as CSV
    Export {
        /// Directory to write the dated export file into; prints to
        /// stdout when omitted
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
enum TrendCommands {
    /// Show the market-trends block as JSON
    Show,

    /// Apply a JSON patch; lastUpdated is restamped with the current month
    Update {
        /// Patch document (camelCase fields, only supplied fields change)
        #[arg(long, value_name = "JSON")]
        patch: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    debug!("data directory: {}", data_dir.display());
    let credentials = Credentials::resolve(cli.credentials_file.as_deref());
    let mut panel =
        AdminPanel::open_with(&data_dir, credentials).context("cannot open content store")?;

    match cli.command {
        Commands::Login { email, password } => cmd_login(&panel, &email, &password),
        Commands::Logout => cmd_logout(&panel),
        Commands::Status => cmd_status(&panel),
        Commands::Projects { command } => match command {
            ProjectCommands::List { category, featured } => {
                cmd_projects_list(&panel, category, featured)
            }
            ProjectCommands::Show { id } => cmd_projects_show(&panel, &id),
            ProjectCommands::Add { file } => {
                require_session(&panel)?;
                cmd_projects_add(&mut panel, &file)
            }
            ProjectCommands::Update { id, patch } => {
                require_session(&panel)?;
                cmd_projects_update(&mut panel, &id, &patch)
            }
            ProjectCommands::Delete { id } => {
                require_session(&panel)?;
                cmd_projects_delete(&mut panel, &id)
            }
        },
        Commands::Agriculture { command } => match command {
            AgricultureCommands::List { kind, featured } => {
                cmd_agriculture_list(&panel, kind, featured)
            }
            AgricultureCommands::Show { id } => cmd_agriculture_show(&panel, &id),
            AgricultureCommands::Add { file } => {
                require_session(&panel)?;
                cmd_agriculture_add(&mut panel, &file)
            }
            AgricultureCommands::Update { id, patch } => {
                require_session(&panel)?;
                cmd_agriculture_update(&mut panel, &id, &patch)
            }
            AgricultureCommands::Delete { id } => {
                require_session(&panel)?;
                cmd_agriculture_delete(&mut panel, &id)
            }
        },
        Commands::Requests { command } => match command {
            // Submitting stays open: it is the public contact form's path.
            RequestCommands::Submit { file } => cmd_requests_submit(&mut panel, &file),
            RequestCommands::List { status } => {
                require_session(&panel)?;
                cmd_requests_list(&panel, status)
            }
            RequestCommands::SetStatus { id, status } => {
                require_session(&panel)?;
                cmd_requests_set_status(&mut panel, &id, status)
            }
            RequestCommands::Export { out } => {
                require_session(&panel)?;
                cmd_requests_export(&panel, out.as_deref())
            }
        },
        Commands::Trends { command } => match command {
            TrendCommands::Show => cmd_trends_show(&panel),
            TrendCommands::Update { patch } => {
                require_session(&panel)?;
                cmd_trends_update(&mut panel, &patch)
            }
        },
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bunian")
        .join("admin")
}

fn require_session(panel: &AdminPanel) -> Result<()> {
    if panel.is_authenticated() {
        Ok(())
    } else {
        bail!("no active admin session; run 'bunian-admin login' first");
    }
}

fn cmd_login(panel: &AdminPanel, email: &str, password: &str) -> Result<()> {
    if !panel.login(email, password)? {
        bail!("invalid email or password");
    }
    println!(
        "Logged in. Session valid for {} hours.",
        SESSION_TTL_SECS / 3600
    );
    Ok(())
}

fn cmd_logout(panel: &AdminPanel) -> Result<()> {
    panel.logout()?;
    println!("Logged out.");
    Ok(())
}

fn cmd_status(panel: &AdminPanel) -> Result<()> {
    match panel.current_session() {
        Some(session) if panel.is_authenticated() => {
            let left = session.expires_at() - now_secs();
            println!(
                "Session:              active (expires in {}h {:02}m)",
                left / 3600,
                left % 3600 / 60
            );
        }
        Some(_) => println!("Session:              expired"),
        None => println!("Session:              none"),
    }

    let stats = panel.stats();
    println!("Projects:             {}", stats.total_projects);
    println!("Agriculture projects: {}", stats.agriculture_projects);
    println!(
        "Requests:             {} ({} pending, {} handled)",
        stats.total_requests, stats.pending_requests, stats.handled_requests
    );
    println!("Trends last updated:  {}", panel.trends().last_updated);
    Ok(())
}

// ── Projects ─────────────────────────────────────────────────────

fn print_project_row(p: &Project) {
    println!(
        "{:<16} {:<36} {:<12} {:<10} {}",
        p.id,
        p.title,
        p.category.as_str(),
        p.status.as_str(),
        if p.featured { "featured" } else { "" }
    );
}

fn cmd_projects_list(
    panel: &AdminPanel,
    category: Option<ProjectCategory>,
    featured: bool,
) -> Result<()> {
    let mut rows: Vec<&Project> = panel.projects().iter().collect();
    if let Some(category) = category {
        rows.retain(|p| p.category == category);
    }
    if featured {
        rows.retain(|p| p.featured);
    }
    for p in &rows {
        print_project_row(p);
    }
    println!("{} project(s)", rows.len());
    Ok(())
}

fn cmd_projects_show(panel: &AdminPanel, id: &str) -> Result<()> {
    let id = RecordId::parse(id)?;
    let Some(project) = panel.project(&id) else {
        bail!("no project with id {id}");
    };
    println!("{}", serde_json::to_string_pretty(project)?);
    Ok(())
}

fn cmd_projects_add(panel: &mut AdminPanel, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let new: NewProject = serde_json::from_str(&raw).context("invalid project JSON")?;
    let id = panel.add_project(new)?;
    println!("Added project {id}");
    Ok(())
}

fn cmd_projects_update(panel: &mut AdminPanel, id: &str, patch: &str) -> Result<()> {
    let id = RecordId::parse(id)?;
    let patch: ProjectPatch = serde_json::from_str(patch).context("invalid patch JSON")?;
    panel.update_project(&id, patch)?;
    println!("Updated project {id}");
    Ok(())
}

fn cmd_projects_delete(panel: &mut AdminPanel, id: &str) -> Result<()> {
    let id = RecordId::parse(id)?;
    panel.delete_project(&id)?;
    println!("Deleted project {id}");
    Ok(())
}

// ── Agriculture projects ─────────────────────────────────────────

fn print_agriculture_row(p: &AgricultureProject) {
    println!(
        "{:<16} {:<36} {:<12} {:<10} {}",
        p.id,
        p.title,
        p.kind.as_str(),
        p.status.as_str(),
        if p.featured { "featured" } else { "" }
    );
}

fn cmd_agriculture_list(
    panel: &AdminPanel,
    kind: Option<AgricultureType>,
    featured: bool,
) -> Result<()> {
    let mut rows: Vec<&AgricultureProject> = panel.agriculture_projects().iter().collect();
    if let Some(kind) = kind {
        rows.retain(|p| p.kind == kind);
    }
    if featured {
        rows.retain(|p| p.featured);
    }
    for p in &rows {
        print_agriculture_row(p);
    }
    println!("{} project(s)", rows.len());
    Ok(())
}

fn cmd_agriculture_show(panel: &AdminPanel, id: &str) -> Result<()> {
    let id = RecordId::parse(id)?;
    let Some(project) = panel.agriculture_project(&id) else {
        bail!("no agriculture project with id {id}");
    };
    println!("{}", serde_json::to_string_pretty(project)?);
    Ok(())
}

fn cmd_agriculture_add(panel: &mut AdminPanel, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let new: NewAgricultureProject =
        serde_json::from_str(&raw).context("invalid agriculture project JSON")?;
    let id = panel.add_agriculture_project(new)?;
    println!("Added agriculture project {id}");
    Ok(())
}

fn cmd_agriculture_update(panel: &mut AdminPanel, id: &str, patch: &str) -> Result<()> {
    let id = RecordId::parse(id)?;
    let patch: AgricultureProjectPatch =
        serde_json::from_str(patch).context("invalid patch JSON")?;
    panel.update_agriculture_project(&id, patch)?;
    println!("Updated agriculture project {id}");
    Ok(())
}

fn cmd_agriculture_delete(panel: &mut AdminPanel, id: &str) -> Result<()> {
    let id = RecordId::parse(id)?;
    panel.delete_agriculture_project(&id)?;
    println!("Deleted agriculture project {id}");
    Ok(())
}

// ── Property requests ────────────────────────────────────────────

fn print_request_row(r: &PropertyRequest) {
    println!(
        "{:<16} {:<24} {:<28} {:<9} {}",
        r.id, r.name, r.property_type, r.status, r.created_at
    );
}

fn cmd_requests_list(panel: &AdminPanel, status: Option<RequestStatus>) -> Result<()> {
    let mut rows: Vec<&PropertyRequest> = panel.requests().iter().collect();
    if let Some(status) = status {
        rows.retain(|r| r.status == status);
    }
    for r in &rows {
        print_request_row(r);
    }
    println!("{} request(s)", rows.len());
    Ok(())
}

fn cmd_requests_submit(panel: &mut AdminPanel, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("cannot read {}", file.display()))?;
    let new: NewPropertyRequest = serde_json::from_str(&raw).context("invalid request JSON")?;
    let id = panel.submit_request(new)?;
    println!("Request filed under id {id}");
    Ok(())
}

fn cmd_requests_set_status(panel: &mut AdminPanel, id: &str, status: RequestStatus) -> Result<()> {
    let id = RecordId::parse(id)?;
    panel.update_request_status(&id, status)?;
    println!("Request {id} is now {status}");
    Ok(())
}

fn cmd_requests_export(panel: &AdminPanel, out: Option<&Path>) -> Result<()> {
    match out {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("cannot create {}", dir.display()))?;
            let path = panel.write_requests_csv(dir)?;
            println!("Wrote {}", path.display());
        }
        None => {
            print!("{}", panel.export_requests_csv()?);
        }
    }
    Ok(())
}

// ── Market trends ────────────────────────────────────────────────

fn cmd_trends_show(panel: &AdminPanel) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(panel.trends())?);
    Ok(())
}

fn cmd_trends_update(panel: &mut AdminPanel, patch: &str) -> Result<()> {
    let patch: MarketTrendPatch = serde_json::from_str(patch).context("invalid patch JSON")?;
    panel.update_trends(patch)?;
    println!(
        "Market trends updated (lastUpdated: {})",
        panel.trends().last_updated
    );
    Ok(())
}
