use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "inkcheck", version, about = "Transcribe handwritten notes, critique the transcription and score it")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an extracted text against its validation offline
    Score(ScoreArgs),
    /// Transcribe, validate and score an image
    Process(ProcessArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ScoreArgs {
    /// Extracted text file ('-' for stdin)
    #[arg(short, long)]
    pub extracted: String,

    /// Validated text file ('-' for stdin, unless --extracted already is)
    #[arg(long)]
    pub validated: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the score components
    #[arg(long)]
    pub breakdown: bool,

    /// Show a unified line diff
    #[arg(long)]
    pub diff: bool,

    /// Also write deliverables to this directory
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Clone)]
pub struct ProcessArgs {
    /// JPEG or PNG image of the notes
    #[arg(short, long)]
    pub image: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Gemini model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Gemini API key (or set GEMINI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Output directory for results
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_args_parse() {
        let cli = Cli::try_parse_from([
            "inkcheck", "score", "--extracted", "-", "--validated", "v.txt", "--breakdown", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Score(args) => {
                assert_eq!(args.extracted, "-");
                assert!(args.breakdown);
                assert!(!args.json);
                assert!(args.output.is_none());
            }
            _ => panic!("expected score"),
        }
    }

    #[test]
    fn test_process_requires_image() {
        assert!(Cli::try_parse_from(["inkcheck", "process"]).is_err());
    }
}
