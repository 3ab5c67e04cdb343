use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Classify text with labels and a primary category
    Classify { text: String },

    /// Analyze sentiment and detect emotions
    Sentiment { text: String },

    /// Summarize text with key points
    Summarize { text: String },

    /// Detect the intent behind text
    Intent { text: String },

    /// Start the HTTP API server
    Serve {
        #[arg(long, env = "SERVER_PORT", default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
