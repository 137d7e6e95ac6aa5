use clap::Parser;
use santulan_core::{EngineConfig, EngineError, Language};
use santulan_engine::{GeminiAugmentor, WellnessEngine};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config replacing the built-in lexicon and templates
    #[arg(short, long, default_value = "santulan.toml")]
    config: String,

    /// User identifier for the conversation context
    #[arg(short, long, default_value = "cli-user")]
    user: String,

    /// Display name used in composed replies
    #[arg(short, long)]
    name: Option<String>,

    /// Greet in Hindi instead of English
    #[arg(long)]
    hindi: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let config = EngineConfig::load_or_default(&args.config);
    let augment = config.augment.clone();
    let mut engine = WellnessEngine::new(config);
    if let Some(gemini) = GeminiAugmentor::from_env(&augment) {
        info!("Generative augmentation enabled (model {})", augment.model);
        engine = engine.with_augmentor(Arc::new(gemini));
    }

    let greeting_language = if args.hindi { Language::Hi } else { Language::En };
    println!("{}", engine.greeting(greeting_language));
    println!("Type 'quit' to exit, 'context' to inspect your conversation record.");
    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let trimmed = input.trim();

        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        if trimmed == "context" {
            match engine.get_context(&args.user).await? {
                Some(context) => {
                    println!("dominant emotion: {}", context.dominant_emotion.as_deref().unwrap_or("-"));
                    println!("mode: {}", context.mode);
                    if let Some(trend) = &context.trend {
                        println!("trend: {}", trend.classification);
                    }
                    println!("trigger topics: {:?}", context.trigger_topics);
                    for exchange in &context.recent_exchanges {
                        println!("  [{}] you: {}", exchange.detected_emotion, exchange.user_message);
                    }
                }
                None => println!("No conversation yet."),
            }
            print!("> ");
            io::stdout().flush()?;
            continue;
        }

        match engine
            .process_message(trimmed, &args.user, args.name.as_deref())
            .await
        {
            Ok(turn) => {
                println!("\n{}\n", turn.reply);
                if turn.is_crisis {
                    println!("(Please reach out to the helpline above right away.)\n");
                }
            }
            Err(EngineError::EmptyMessage) => {}
            Err(e) => {
                tracing::error!("Turn failed: {}", e);
                println!("\n[error] {e}\n");
            }
        }

        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
