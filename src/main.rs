use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use rand::rngs::{StdRng, SysRng};
use rand::{SeedableRng, TryRng};
use tokio::io::AsyncBufReadExt;

use ocean_assist::config::Config;
use ocean_assist::error::{AssistantError, Result};
use ocean_assist::interfaces::voice::SpeechCapability;
use ocean_assist::session::{Conversation, Rejection, SubmitOutcome};
use ocean_assist::ui::TranscriptViewport;
use ocean_assist::voice::{HostSpeechProbe, SpeechAvailable, SpeechUnavailable};
use ocean_assist::logging;

#[derive(Parser, Debug)]
#[command(name = "ocean-assist")]
#[command(about = "ARGO float data assistant console")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), "+", env!("OCEAN_ASSIST_GIT_SHA")))]
struct Cli {
    /// JSON session config; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the reply RNG; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Force the speech capability instead of probing the host.
    #[arg(long)]
    speech: Option<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing("ocean_assist");
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if cli.speech.is_some() {
        config.speech = cli.speech;
    }

    let capability: Arc<dyn SpeechCapability> = match config.speech {
        Some(true) => Arc::new(SpeechAvailable),
        Some(false) => Arc::new(SpeechUnavailable),
        None => Arc::new(HostSpeechProbe),
    };
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut seed = <StdRng as SeedableRng>::Seed::default();
            let mut sys = SysRng;
            sys.try_fill_bytes(&mut seed)
                .map_err(|e| AssistantError::Runtime(e.to_string()))?;
            StdRng::from_seed(seed)
        }
    };

    let mut conversation = Conversation::new(&config, capability, rng)?;
    let mut viewport = TranscriptViewport::new();
    viewport.render_new(conversation.messages());
    viewport.hints();
    println!("Commands: /voice toggles listening, /quit exits.");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", if conversation.listening() { "(listening) >" } else { ">" });
        std::io::stdout()
            .flush()
            .map_err(|e| AssistantError::Runtime(e.to_string()))?;

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| AssistantError::Runtime(e.to_string()))?
        else {
            break;
        };

        match line.trim() {
            "/quit" => break,
            "/voice" => {
                let listening = conversation.toggle_voice();
                println!(
                    "listening {}",
                    if listening { "enabled" } else { "disabled" }
                );
                continue;
            }
            _ => {}
        }

        match conversation.submit(&line)? {
            SubmitOutcome::Rejected(Rejection::Empty) => continue,
            SubmitOutcome::Rejected(Rejection::Busy) => {
                println!("please wait for the current reply");
                continue;
            }
            SubmitOutcome::Accepted => {
                viewport.render_new(conversation.messages());
                viewport.composing();
                conversation.await_reply().await?;
                viewport.render_new(conversation.messages());
            }
        }
    }

    Ok(())
}
