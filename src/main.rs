use std::net::SocketAddr;
use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use admin_console::api::{Ack, ApiClient, ApiError};
use admin_console::config::{self, RedirectSettings, DEFAULT_HOST, DEFAULT_PORT};
use admin_console::console::{AdminConsole, AssetsState};
use admin_console::models::{AlertKind, AppState};
use admin_console::theme::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, ThemeManager};
use admin_console::utils::{format_date, format_last_login, mb_to_gb};

fn build_console() -> AdminConsole<ApiClient> {
    let api_base_url = config::get_api_base_url();
    let client = match ApiClient::new(&api_base_url, config::get_auth_token()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::new("Failed to create HTTP client").red(), e);
            process::exit(1);
        }
    };
    AdminConsole::new(client, RedirectSettings::from_env())
}

fn build_theme(no_persist: bool) -> ThemeManager {
    let store: Box<dyn PreferenceStore> = if no_persist {
        Box::new(MemoryPreferenceStore::new())
    } else {
        Box::new(FilePreferenceStore::new(config::get_theme_file()))
    };
    ThemeManager::new(store)
}

async fn start_server(host: &str, port: u16, stylesheet: Option<String>, no_persist_theme: bool) {
    let console = build_console();
    let api_base_url = console.api().base_url().to_string();
    let mut state = AppState::new(console, build_theme(no_persist_theme), api_base_url);

    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::new("Failed to read custom stylesheet at").red(), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::new("Invalid host/port format").red(), e);
            process::exit(1);
        }
    };
    let app = admin_console::build_router(state);
    tracing::info!(%addr, "Starting admin console");
    println!(
        "{} {}",
        yansi::Paint::new("Admin console running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                yansi::Paint::new(format!("Failed to bind to {}", addr)).red(),
                e,
                yansi::Paint::new("Stop whatever is using this port, or pass a different --port value.").yellow()
            );
            process::exit(1);
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

/// Print queued alerts; exits when the console has scheduled a redirect.
fn flush_console(console: &mut AdminConsole<ApiClient>) {
    for alert in console.take_alerts() {
        match alert.kind {
            AlertKind::Success => println!("{}", yansi::Paint::new(&alert.message).green()),
            AlertKind::Error => eprintln!("{}", yansi::Paint::new(&alert.message).red()),
        }
    }
    if let Some(redirect) = console.pending_redirect() {
        eprintln!(
            "{} {}",
            yansi::Paint::new("Session cannot continue; sign in at").yellow(),
            yansi::Paint::new(&redirect.location).cyan()
        );
        process::exit(1);
    }
}

async fn prompt_yes_no(message: &str) -> bool {
    println!("{} [y/N]", yansi::Paint::new(message).yellow().bold());
    let mut line = String::new();
    let mut reader = BufReader::new(tokio::io::stdin());
    match reader.read_line(&mut line).await {
        Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(e) => {
            tracing::warn!(%e, "Failed to read confirmation answer");
            false
        }
    }
}

/// Walk the bound confirmation the same way the web dialog does.
async fn resolve_confirmation(console: &mut AdminConsole<ApiClient>, assume_yes: bool) {
    let Some(message) = console.dialog().message().map(|m| m.to_string()) else {
        return;
    };
    let outcome = if assume_yes || prompt_yes_no(&message).await {
        console.confirm().await
    } else {
        console.cancel();
        println!("{}", yansi::Paint::new("Cancelled").dim());
        None
    };
    flush_console(console);
    if action_failed(&outcome) {
        process::exit(1);
    }
}

/// A cancelled or absent confirmation is not a failure; an API error is.
fn action_failed(outcome: &Option<Result<Ack, ApiError>>) -> bool {
    matches!(outcome, Some(Err(_)))
}

fn assets_loaded(console: &AdminConsole<ApiClient>) -> bool {
    matches!(
        console.assets_modal().map(|m| &m.state),
        Some(AssetsState::Loaded(_))
    )
}

/// Print alerts, then exit non-zero when a fetch did not succeed.
fn finish_load(console: &mut AdminConsole<ApiClient>, loaded: bool) {
    flush_console(console);
    if !loaded {
        process::exit(1);
    }
}

fn print_stats(console: &AdminConsole<ApiClient>) {
    let Some(stats) = console.stats() else {
        return;
    };
    let mut table = new_table();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Total users".to_string(), stats.total_users.to_string()]);
    table.add_row(vec!["Admin users".to_string(), stats.admin_users.to_string()]);
    table.add_row(vec!["Active users (30 days)".to_string(), stats.active_users.to_string()]);
    table.add_row(vec!["Logged in now".to_string(), stats.currently_logged_in_users.to_string()]);
    table.add_row(vec!["Storage used".to_string(), format!("{}GB", mb_to_gb(stats.total_storage_used))]);
    println!("\n{table}\n");
}

fn print_users(console: &AdminConsole<ApiClient>) {
    let users = console.visible_users();
    if users.is_empty() {
        println!("No users found");
        return;
    }
    let mut table = new_table();
    table.set_header(vec!["ID", "Username", "Admin", "Storage (MB)", "Created", "Last Login"]);
    for u in users {
        table.add_row(vec![
            u.id.to_string(),
            u.username.clone(),
            if u.is_admin { "yes".to_string() } else { String::new() },
            format!("{:.1}", u.storage_used_mb),
            format_date(&u.created_at),
            format_last_login(u.last_login.as_ref()),
        ]);
    }
    println!("\n{table}\n");
}

fn print_assets(console: &AdminConsole<ApiClient>) {
    let Some(modal) = console.assets_modal() else {
        return;
    };
    match &modal.state {
        AssetsState::Loaded(assets) if assets.is_empty() => {
            println!("No assets found for user \"{}\"", modal.username);
        }
        AssetsState::Loaded(assets) => {
            let mut table = new_table();
            table.set_header(vec!["ID", "Name", "Inventory", "Folder"]);
            for a in assets {
                table.add_row(vec![a.id.to_string(), a.name.clone(), a.inventory_name.clone(), a.folder_name.clone()]);
            }
            println!("\nAssets for user: {} ({} items)\n{table}\n", modal.username, assets.len());
        }
        AssetsState::Failed(msg) => eprintln!("{}", yansi::Paint::new(msg).red()),
        AssetsState::Loading => {}
    }
}

/// Look up a username for confirmation text; falls back to `#id`.
async fn username_for(console: &mut AdminConsole<ApiClient>, user_id: i64) -> String {
    console.load_users().await;
    flush_console(console);
    console
        .users()
        .iter()
        .find(|u| u.id == user_id)
        .map(|u| u.username.clone())
        .unwrap_or_else(|| format!("#{}", user_id))
}

#[derive(Parser)]
#[command(
    name = "admin-console",
    author,
    version,
    about = "Admin console for the file-hosting service",
    long_about = r#"Administer users, their assets and storage usage through the service's admin API.

Run the web console with `serve`, or use the subcommands directly from a terminal. The API location
and session come from the environment (or an .env file):

  ADMIN_API_BASE_URL   base URL of the service (default http://localhost:8080)
  ADMIN_AUTH_TOKEN     value of an admin's auth_token session cookie

Examples:
  admin-console serve --port 5050
  admin-console users list --search ali
  admin-console users grant-admin 42
"#,
    after_help = "Use `admin-console <subcommand> --help` for subcommand options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y', global = true)]
    yes: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web console
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
        /// Keep the theme preference in memory only
        #[arg(long)]
        no_persist_theme: bool,
    },
    /// Show the effective configuration and try one stats request
    CheckConfig,
    /// Show aggregate user and storage statistics
    Stats,
    /// List and administer users
    Users {
        #[command(subcommand)]
        sub: UserCommands,
    },
    /// List and delete a user's assets
    Assets {
        #[command(subcommand)]
        sub: AssetCommands,
    },
    /// Show or toggle the console theme
    Theme {
        #[command(subcommand)]
        sub: ThemeCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// List users, optionally filtered by a case-insensitive username search
    List {
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    /// Grant admin privileges
    GrantAdmin { user_id: i64 },
    /// Remove admin privileges
    RevokeAdmin { user_id: i64 },
    /// Delete a user and all their data
    Delete { user_id: i64 },
}

#[derive(Subcommand)]
enum AssetCommands {
    /// List a user's assets
    List { user_id: i64 },
    /// Delete one asset by item id
    Delete {
        item_id: i64,
        /// Asset name shown in the confirmation prompt
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Print the saved theme
    Show,
    /// Switch between light and dark and save the choice
    Toggle,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    config::load_env_file(cli.env_file.as_deref());

    let Some(command) = cli.command else {
        println!("No subcommand given; try `admin-console --help`.");
        return;
    };

    match command {
        Commands::Serve { host, port, stylesheet, no_persist_theme } => {
            start_server(&host, port, stylesheet, no_persist_theme).await;
        }
        Commands::CheckConfig => {
            let api_base_url = config::get_api_base_url();
            println!("{} {}", yansi::Paint::new("API base URL:").bold(), api_base_url);
            println!(
                "{} {}",
                yansi::Paint::new("Session token:").bold(),
                if config::get_auth_token().is_some() { "set" } else { "missing (ADMIN_AUTH_TOKEN)" }
            );
            println!("{} {}", yansi::Paint::new("Theme file:").bold(), config::get_theme_file());
            let mut console = build_console();
            console.initialize().await;
            flush_console(&mut console);
            if console.stats().is_none() {
                process::exit(1);
            }
            println!("{}", yansi::Paint::new("Admin API reachable and session accepted").green());
        }
        Commands::Stats => {
            let mut console = build_console();
            let loaded = console.load_stats().await;
            finish_load(&mut console, loaded);
            print_stats(&console);
        }
        Commands::Users { sub } => {
            let mut console = build_console();
            match sub {
                UserCommands::List { search } => {
                    let loaded = console.load_users().await;
                    finish_load(&mut console, loaded);
                    console.set_search(search.as_deref().unwrap_or(""));
                    print_users(&console);
                }
                UserCommands::GrantAdmin { user_id } => {
                    console.request_toggle_admin(user_id, true);
                    resolve_confirmation(&mut console, cli.yes).await;
                }
                UserCommands::RevokeAdmin { user_id } => {
                    console.request_toggle_admin(user_id, false);
                    resolve_confirmation(&mut console, cli.yes).await;
                }
                UserCommands::Delete { user_id } => {
                    let username = username_for(&mut console, user_id).await;
                    console.request_delete_user(user_id, &username);
                    resolve_confirmation(&mut console, cli.yes).await;
                }
            }
        }
        Commands::Assets { sub } => {
            let mut console = build_console();
            match sub {
                AssetCommands::List { user_id } => {
                    let username = username_for(&mut console, user_id).await;
                    console.view_user_assets(user_id, &username).await;
                    let loaded = assets_loaded(&console);
                    flush_console(&mut console);
                    print_assets(&console);
                    if !loaded {
                        process::exit(1);
                    }
                }
                AssetCommands::Delete { item_id, name } => {
                    let name = name.unwrap_or_else(|| format!("#{}", item_id));
                    console.request_delete_asset(item_id, &name);
                    resolve_confirmation(&mut console, cli.yes).await;
                }
            }
        }
        Commands::Theme { sub } => {
            let mut theme = build_theme(false);
            if let ThemeCommands::Toggle = sub {
                theme.toggle();
            }
            let current = theme.current();
            println!("{} {}", yansi::Paint::new("Theme:").bold(), current.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_confirmation_sets_error_status() {
        let rejected = Some(Err(ApiError::Status {
            status: 400,
            message: "Cannot delete your own account".into(),
        }));
        assert!(action_failed(&rejected));
        assert!(action_failed(&Some(Err(ApiError::Forbidden))));
    }

    #[test]
    fn success_or_cancel_is_not_a_failure() {
        assert!(!action_failed(&Some(Ok(Ack::default()))));
        assert!(!action_failed(&None));
    }

    #[test]
    fn no_assets_modal_counts_as_not_loaded() {
        let client = ApiClient::new("http://127.0.0.1:9", None).unwrap();
        let console = AdminConsole::new(client, RedirectSettings::new("http://127.0.0.1:9"));
        assert!(!assets_loaded(&console));
    }
}
