use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Register the acting user
    Register {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,
    },

    /// Show the acting user
    Me,
}
