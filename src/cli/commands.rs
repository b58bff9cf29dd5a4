use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "azchat")]
#[command(author, version, about = "Chat with an Azure OpenAI deployment", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a single prompt and print the reply
    Chat {
        prompt: String,

        /// Override the agent instructions for this run
        #[arg(short = 's', long)]
        system: Option<String>,
    },

    /// Start an interactive chat session
    Interactive {
        #[arg(short = 's', long)]
        system: Option<String>,
    },
}
