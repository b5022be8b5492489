use anyhow::Result;
use clap::Parser;
use streamchat::{
    ChatClient,
    config::Cli,
    surface::{self, ChatSession},
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_tracing();

    let params = cli.generation_parameters()?;
    let adapter = cli.adapter()?;
    tracing::info!(base_url = adapter.base_url(), model = %params.model, "starting streamchat");

    let mut session = ChatSession::new(ChatClient::new(adapter), params);
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = std::io::stdout().lock();

    surface::run(&mut session, stdin, stdout, tokio::signal::ctrl_c).await?;

    tracing::info!(turns = session.history().len(), "streamchat shutdown complete");
    Ok(())
}
