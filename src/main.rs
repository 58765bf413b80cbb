use anyhow::{Context, Result};
use clap::Parser;

use mbti_board::cli::{Args, Repl};
use mbti_board::config::Config;
use mbti_board::logging::init_tracing;
use mbti_board::remote::BoardClient;
use mbti_board::session::BoardSession;
use mbti_board::ui::board::BoardController;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading config")?;
    args.apply(&mut config);
    config.validate()?;

    let board = BoardController::new(config.category_set()?, config.items_per_page()?);
    let client = BoardClient::new(&config.remote)?;
    let session = BoardSession::new(client, board, config.composer_category()?);

    tracing::debug!(base_url = %config.remote.base_url, "Starting board");

    let stdin = std::io::stdin();
    let mut repl = Repl::new(session, stdin.lock(), std::io::stdout());
    repl.run().await?;
    Ok(())
}
