use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use library_manager::application::service::LibraryService;
use library_manager::infra::json_store::JsonCatalogRepository;
use library_manager::interface::menu;

/// Personal Library Manager - keep a catalog of your books in a JSON file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the catalog file
    #[arg(env = "LIBRARY_FILE", default_value = "library.json")]
    file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let repo = JsonCatalogRepository::new(args.file);
    let mut svc = LibraryService::open(repo);
    tracing::info!(
        path = %svc.repository().path().display(),
        count = svc.list_all().len(),
        "Library opened"
    );

    let stdin = std::io::stdin();
    menu::run(&mut svc, stdin.lock(), std::io::stdout())
}

// ============================================================================
// Initialization
// ============================================================================

/// ログはstderrへ。stdoutはメニュー表示に使う。
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
