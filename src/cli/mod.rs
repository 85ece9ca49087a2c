use clap::Subcommand;

use crate::QueryMode;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5001")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Send a single prompt to the model and print the answer
    Ask {
        prompt: String,

        /// generic, formula or prime
        #[arg(short, long, default_value = "generic")]
        mode: QueryMode,
    },
}
