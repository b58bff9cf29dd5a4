use anyhow::Result;
use azchat::cli::{Cli, Commands};
use azchat::{platform, utils, AgentConfig, AgentError, ChatAgent};
use clap::Parser;
use tokio::io::{self, AsyncBufReadExt, BufReader};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Platform setup must precede the runtime so it runs before the first
    // suspension point.
    platform::init();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
    let config = AgentConfig::from_env()?;

    match cli.command {
        Commands::Chat { prompt, system } => handle_chat(config, prompt, system).await,
        Commands::Interactive { system } => handle_interactive(config, system).await,
    }
}

async fn handle_chat(config: AgentConfig, prompt: String, system: Option<String>) -> Result<()> {
    let config = match system {
        Some(sys) => config.with_instructions(sys),
        None => config,
    };

    let mut agent = ChatAgent::new(config)?;
    agent.initialize()?;

    let response = agent.get_response(&prompt).await?;
    println!("{}", response);

    Ok(())
}

async fn handle_interactive(config: AgentConfig, system: Option<String>) -> Result<()> {
    let config = match system {
        Some(sys) => config.with_instructions(sys),
        None => config,
    };

    let mut agent = ChatAgent::new(config)?;
    agent.initialize()?;

    utils::print_header("Interactive Mode");
    utils::print_info("Each message is an independent exchange (Ctrl+C to exit)\n");

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin);

    loop {
        utils::print_prompt("You: ");
        let mut input = String::new();
        if reader.read_line(&mut input).await? == 0 {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match agent.get_response(input).await {
            Ok(response) => println!("Assistant: {}\n", response),
            // A failed exchange does not end the session.
            Err(err @ AgentError::Dispatch { .. }) => {
                utils::print_error(&format!("{}\n", err));
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
