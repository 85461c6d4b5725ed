use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use coopera_core::NormalizedTransaction;
use coopera_ledger::{AccountService, HttpLedgerClient};

mod config;
mod session;
mod state;

#[derive(Parser, Debug)]
#[command(name = "coopera", version, about = "Coopera account CLI")]
struct Cli {
    /// Log ledger requests to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One-time setup: write the default config and capture a session
    Setup,

    /// Show the balance of the session account
    Balance,

    /// Load money into the session account
    Deposit {
        amount: f64,
    },

    /// List movements of the session account
    History {
        /// Filter by ledger status
        #[arg(long)]
        status: Option<String>,

        /// Lower bound, YYYY-MM-DD (requires --to)
        #[arg(long)]
        from: Option<String>,

        /// Upper bound, YYYY-MM-DD (requires --from)
        #[arg(long)]
        to: Option<String>,
    },

    /// The latest movements (last 15 days, at most 5)
    Latest,

    /// Manage the stored session (token + account id)
    Session {
        #[command(subcommand)]
        command: SessionCommand,
    },
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    /// Paste a bearer token and account id
    Set,
    /// Show the stored session
    Show,
    /// Forget the stored session
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Command::Setup => {
            config::init_config()?;
            session::set_interactive()?;
        }

        Command::Session { command } => match command {
            SessionCommand::Set => session::set_interactive()?,
            SessionCommand::Show => session::show()?,
            SessionCommand::Clear => session::clear()?,
        },

        Command::Balance => {
            let svc = build_service()?;
            match svc.balance().await {
                Some(b) => println!("Saldo: ${:.2}", b.balance),
                None => print_unavailable(),
            }
        }

        Command::Deposit { amount } => {
            if amount <= 0.0 {
                bail!("amount must be positive");
            }
            let svc = build_service()?;
            match svc.deposit(amount).await {
                Some(b) => println!("Saldo: ${:.2}", b.balance),
                None => print_unavailable(),
            }
        }

        Command::History { status, from, to } => {
            let svc = build_service()?;
            let movements = match (status, from, to) {
                (Some(status), None, None) => svc.history_by_status(&status).await?,
                (None, Some(from), Some(to)) => svc.history_by_dates(&from, &to).await?,
                (None, None, None) => svc.full_history().await?,
                _ => bail!("use either --status, or both --from and --to"),
            };
            print_movements(movements);
        }

        Command::Latest => {
            let svc = build_service()?;
            println!("Últimos movimientos\n");
            print_movements(svc.latest().await?);
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_service() -> Result<AccountService<session::StoredSession, HttpLedgerClient<session::StoredSession>>> {
    let cfg = config::load_config()?;
    let session = session::stored()?;
    let client = HttpLedgerClient::new(cfg.ledger.base_url, session.clone());
    Ok(AccountService::new(session, client))
}

fn print_movements(movements: Option<Vec<NormalizedTransaction>>) {
    let Some(movements) = movements else {
        print_unavailable();
        return;
    };

    if movements.is_empty() {
        println!("Sin movimientos");
        return;
    }

    for t in &movements {
        let sign = if t.direction.is_outgoing() { "-" } else { "" };
        println!(
            "{}  {}  |  {}  |  {sign}${:.2}",
            t.display_date, t.category, t.description, t.raw.amount
        );
    }
}

fn print_unavailable() {
    println!("No data available. Check `coopera session set` and the ledger URL in ~/.coopera/config.toml");
}
