use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "projdash")]
#[command(about = "Project board with a validated input form and live project lists", long_about = None)]
pub struct Cli {
    /// Without a subcommand the TUI board is launched
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit one project through the form and print the resulting lists
    Add {
        /// Project title
        #[arg(long, default_value = "")]
        title: String,

        /// Project description (at least 5 characters)
        #[arg(long, default_value = "")]
        description: String,

        /// Team size, 1 to 11
        #[arg(long, default_value = "")]
        people: String,

        /// Print the store contents as JSON instead of the two lists
        #[arg(long)]
        json: bool,
    },

    /// Show config status and location, or create default config if missing
    InitConfig,
}

pub fn parse() -> Cli {
    Cli::parse()
}
