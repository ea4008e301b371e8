use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use committee_ledger::auth::StaticCredentials;
use committee_ledger::cli::{
    handle_auth_command, handle_budget_command, handle_dashboard_command, handle_event_command,
    handle_export_command, handle_fundraising_command, handle_report_command,
    handle_settings_command, handle_transaction_command, AuthCommands, BudgetCommands,
    EventCommands, ExportArgs, FundraisingCommands, ReportCommands, SettingsCommands,
    TransactionCommands,
};
use committee_ledger::config::{paths::LedgerPaths, settings::Settings};
use committee_ledger::storage::{initialize_storage, Storage};
use committee_ledger::{LedgerResult, Session};

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "LEDGER_LOG";

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Bookkeeping for a school committee",
    long_about = "Committee Ledger records the committee's income and expenses against \
                  an authorization matrix, tracks the budget, events and fundraising \
                  initiatives, and produces monthly reports."
)]
struct Cli {
    /// Username to sign in as
    #[arg(short, long, global = true, env = "LEDGER_USER")]
    user: Option<String>,

    /// Password (prompted for when omitted)
    #[arg(long, global = true, env = "LEDGER_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory with default settings and budget
    Init,

    /// Show current configuration and paths
    Config,

    /// Funds snapshot, recent transactions and budget against actuals
    #[command(alias = "home")]
    Dashboard,

    /// Post and list transactions
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget categories and planned amounts
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Event planning and tracking
    #[command(subcommand)]
    Event(EventCommands),

    /// Fundraising initiatives
    #[command(subcommand)]
    Fundraising(FundraisingCommands),

    /// Monthly report and audit trail
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the books
    Export(ExportArgs),

    /// Settings and committee roster
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Account information and password hashing
    #[command(subcommand)]
    Auth(AuthCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let paths = LedgerPaths::new()?;

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Committee Ledger - bookkeeping for a school committee");
            println!();
            println!("Run 'ledger init' to set up, then 'ledger dashboard' to sign in.");
            println!("Run 'ledger --help' for usage information.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            println!("Initializing Committee Ledger at: {}", paths.base_dir().display());
            if initialize_storage(&paths)? {
                println!("Initialization complete!");
                println!();
                println!("Default budget categories have been created:");
                println!("  Income:   Fundraising Events, Merchandise Sales, Sponsorships, Other Income");
                println!("  Expenses: Event Expenses, Merchandise Production, Marketing/Promotion,");
                println!("            Yearbook, Graduation, School Trips, Emergency Reserve, Other Expenses");
            } else {
                println!("Already initialized; existing files were left unchanged.");
            }
            return Ok(());
        }
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Committee Ledger Configuration");
            println!("==============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Books file:       {}", paths.books_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Credentials file: {}", paths.credentials_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Organization: {}", settings.organization_name);
            println!("Currency:     {}", settings.currency_code);
            return Ok(());
        }
        Commands::Auth(cmd) if !cmd.needs_session() => {
            handle_auth_command(None, cmd)?;
            return Ok(());
        }
        _ => {}
    }

    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;
    let mut session = open_session(&storage, cli.user, cli.password)?;

    match command {
        Commands::Dashboard => handle_dashboard_command(&settings, &session)?,
        Commands::Transaction(cmd) => {
            handle_transaction_command(&storage, &settings, &mut session, cmd)?
        }
        Commands::Budget(cmd) => handle_budget_command(&storage, &settings, &mut session, cmd)?,
        Commands::Event(cmd) => handle_event_command(&storage, &settings, &mut session, cmd)?,
        Commands::Fundraising(cmd) => {
            handle_fundraising_command(&storage, &settings, &mut session, cmd)?
        }
        Commands::Report(cmd) => handle_report_command(&storage, &settings, &session, cmd)?,
        Commands::Export(args) => handle_export_command(&settings, &session, args)?,
        Commands::Settings(cmd) => {
            handle_settings_command(&storage, &mut settings, &session, cmd)?
        }
        Commands::Auth(cmd) => handle_auth_command(Some(&session), cmd)?,
        Commands::Init | Commands::Config => {}
    }

    session.logout();
    Ok(())
}

/// Sign in with the given credentials, prompting for whatever is missing
fn open_session(
    storage: &Storage,
    user: Option<String>,
    password: Option<String>,
) -> LedgerResult<Session> {
    let credentials = StaticCredentials::load_or_builtin(&storage.paths().credentials_file())?;
    let books = storage.load_books()?;

    let username = match user {
        Some(user) => user,
        None => {
            print!("Username: ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let password = match password {
        Some(password) => Zeroizing::new(password),
        None => committee_ledger::cli::auth::prompt_password("Password: ")?,
    };

    Session::login(&credentials, &username, &password, books)
}
