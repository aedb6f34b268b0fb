use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "coursecraft")]
#[command(about = "coursecraft - lessons and tutorial videos for any topic")]
#[command(version)]
#[command(after_help = "\x1b[1;36mQuick Start:\x1b[0m
  coursecraft video \"photosynthesis\"              Recommend one tutorial video
  coursecraft videos cells atoms \"plate tectonics\" Recommend a video per topic
  coursecraft lesson \"tides\" --audience adults    Generate a full lesson with video

\x1b[1;36mCredentials:\x1b[0m
  coursecraft config set youtube                  Store a YouTube Data API key
  coursecraft config set gemini                   Store a Gemini API key
  coursecraft config test youtube                 Check that a key works
  coursecraft config show                         View stored configuration

  Keys may also come from YOUTUBE_API_KEY, GEMINI_API_KEY or GOOGLE_API_KEY.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (-v debug logs, -vv everything)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Per-request timeout in seconds for provider calls
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend a tutorial video for a topic
    ///
    /// Searches for "<topic> tutorial", prefers videos of five minutes or
    /// more and picks the most viewed. Never fails: when the lookup cannot
    /// complete a placeholder video is shown instead.
    #[command(after_help = "\x1b[1;33mExamples:\x1b[0m
  coursecraft video photosynthesis
  coursecraft video \"linear algebra\" --output json")]
    Video {
        /// Topic to find a video for
        topic: String,
    },

    /// Recommend tutorial videos for several topics at once
    #[command(after_help = "\x1b[1;33mExamples:\x1b[0m
  coursecraft videos cells atoms stars
  coursecraft videos \"the water cycle\" erosion --output yaml")]
    Videos {
        /// Topics to find videos for
        #[arg(required = true, num_args = 1..)]
        topics: Vec<String>,
    },

    /// Generate a complete lesson with slides, quiz and a recommended video
    #[command(after_help = "\x1b[1;33mExamples:\x1b[0m
  coursecraft lesson \"black holes\"
  coursecraft lesson fractions --audience \"5th graders\" --output json")]
    Lesson {
        /// Lesson topic
        topic: String,
        /// Who the lesson is written for
        #[arg(short, long, default_value = "college students")]
        audience: String,
    },

    /// Manage provider credentials
    #[command(after_help = "\x1b[1;33mExamples:\x1b[0m
  coursecraft config show                       Show stored providers (values masked)
  coursecraft config set youtube                Prompt for the YouTube API key
  coursecraft config set gemini --value AIza... Store a Gemini API key
  coursecraft config set gemini --key model --value gemini-1.5-pro
  coursecraft config test gemini                Test Gemini credentials
  coursecraft config remove youtube             Remove YouTube credentials")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Store a value for a provider (youtube, gemini)
    Set {
        /// Provider name
        provider: String,
        /// Field to set
        #[arg(long, default_value = "api_key")]
        key: String,
        /// Value to store; prompted for (hidden) when omitted
        #[arg(long)]
        value: Option<String>,
    },
    /// Remove stored credentials for a provider
    Remove {
        /// Provider name
        provider: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Test credentials for a provider
    Test {
        /// Provider name
        provider: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Plain text output
    Text,
}
