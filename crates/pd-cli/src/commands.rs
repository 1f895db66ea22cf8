use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out of the current session
    Logout,

    /// Show the session state and where the dashboard lands
    Status,

    /// List profiles, newest first
    List {
        /// Only show profiles whose name contains this text
        #[arg(long)]
        query: Option<String>,
    },

    /// Add a profile
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        url: String,
        /// Color tag (blue, green, red, yellow, purple, pink, indigo, gray)
        #[arg(long)]
        color: Option<String>,
    },
}
