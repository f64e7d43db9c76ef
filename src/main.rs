mod config;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use botgram_client::methods::SendMessageRequest;
use botgram_client::{Client, UpdatePoller};
use botgram_types::Update;

#[derive(Parser)]
#[command(name = "botgram", version, about = "Telegram Bot API client — echo bot example")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the long-polling echo bot.
    Start,
    /// Print basic information about the bot account.
    Me,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cfg = config::load(&cli.config)?;
    let token = cfg
        .telegram
        .resolve_token()
        .context("no bot token configured; set telegram.bot_token or TELEGRAM_BOT_TOKEN")?;
    let client = Client::with_client(&token, reqwest::Client::new(), &cfg.telegram.api_url);

    match cli.command {
        Commands::Me => {
            let me = client.get_me().await?;
            println!("id:       {}", me.id);
            println!("name:     {}", me.display_name());
            println!("is_bot:   {}", me.is_bot);
            Ok(())
        }
        Commands::Start => run_echo_bot(client, cfg).await,
    }
}

async fn run_echo_bot(client: Client, cfg: config::Config) -> anyhow::Result<()> {
    let me = client.get_me().await.context("getMe failed; check token")?;
    info!("logged in as {}", me.display_name());

    let poller = UpdatePoller::new(client.clone(), cfg.polling.to_poller_config());
    let (mut updates, handle) = poller.start().context("invalid polling config")?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                handle.stop();
                break;
            }
            maybe_update = updates.recv() => match maybe_update {
                Some(update) => handle_update(&client, update).await,
                None => break,
            },
        }
    }

    // Let the in-flight poll wind down before exiting.
    handle.join().await;
    Ok(())
}

/// Echo every text message back to its chat.
async fn handle_update(client: &Client, update: Update) {
    let msg = match update.message {
        Some(m) => m,
        None => return,
    };
    let text = match msg.text {
        Some(t) => t,
        None => return,
    };

    if let Some(ref from) = msg.from {
        info!(chat_id = msg.chat.id, "message from {}", from.display_name());
    }

    if let Err(e) = client.send_chat_action(msg.chat.id, "typing").await {
        warn!("sendChatAction failed: {e}");
    }

    let mut reply = SendMessageRequest::new(msg.chat.id, text);
    reply.reply_to_message_id = Some(msg.message_id);
    if let Err(e) = client.send_message(&reply).await {
        error!("sendMessage failed: {e}");
    }
}
