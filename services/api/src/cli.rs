use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use maison_talent::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Maison Talent",
    about = "Score assessments, project careers and match talent to luxury retail roles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Walk a sample talent through assessment, projection and matching
    Demo(DemoArgs),
    /// Score one talent against one opportunity and print the match as JSON
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
        Command::Score(args) => run_score(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["maison-talent-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_requires_both_documents() {
        let result = Cli::try_parse_from(["maison-talent-api", "score", "--talent", "t.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli =
            Cli::try_parse_from(["maison-talent-api", "serve", "--port", "9090"]).expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(9090));
                assert!(args.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
