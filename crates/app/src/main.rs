use std::io::IsTerminal;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use quiz_core::model::QuestionBank;
use services::QuizService;
use storage::{ProgressStore, Storage};
use ui::views::render_stats;
use ui::{TerminalApp, Theme};

mod config;

use config::{Args, Command, prepare_sqlite_file, print_usage};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn terminal_theme() -> Theme {
    if std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none() {
        Theme::colored()
    } else {
        Theme::plain()
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_env().inspect_err(|_| print_usage())?;
    if args.command == Command::Help {
        print_usage();
        return Ok(());
    }

    // Open + migrate SQLite at startup so the services only see a repository.
    prepare_sqlite_file(&args.db_url)?;
    let storage = Storage::sqlite(&args.db_url).await?;
    let store = ProgressStore::new(Arc::clone(&storage.snapshots));
    info!(db = %args.db_url, command = ?args.command, "storage ready");

    match args.command {
        Command::Play => {
            let bank = Arc::new(QuestionBank::fablab());
            let mut service = QuizService::restore(bank, args.settings, store).await;
            if let Some(seed) = args.seed {
                service = service.with_seed(seed);
            }

            let mut app = TerminalApp::new(service, terminal_theme());
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout().lock();
            app.run(stdin, &mut stdout).await?;
        }
        Command::Stats => {
            let bank = Arc::new(QuestionBank::fablab());
            let service = QuizService::restore(bank, args.settings, store).await;
            let stats = service.stats_view();
            if stats.is_visible() {
                print!("{}", render_stats(&stats, &terminal_theme()));
            } else {
                println!("Aucune partie jouée pour le moment.");
            }
        }
        Command::Reset => {
            store.try_clear().await?;
            println!("Progression réinitialisée.");
        }
        Command::Help => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
