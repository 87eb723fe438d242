use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod cgi;
mod check;
mod serve;

#[derive(Parser)]
#[command(name = "areacheck")]
#[command(about = "Point-in-area check service and gateway adapters")]
#[command(version = areacheck::VERSION)]
struct Cmd {
    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", env = "AREACHECK_LOG")]
    log_level: Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Answer one gateway request: REQUEST_METHOD, CONTENT_TYPE and
    /// CONTENT_LENGTH from the environment, body on stdin, envelope on stdout
    Cgi,
    /// Serve every path over HTTP with the same request handler
    Serve {
        #[arg(long, default_value = "127.0.0.1", env = "AREACHECK_HOST")]
        host: String,
        #[arg(short, long, default_value_t = 8080, env = "AREACHECK_PORT")]
        port: u16,
    },
    /// Validate and evaluate one point, print the JSON body
    Check {
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long, allow_hyphen_values = true)]
        r: i64,
    },
    /// Print the informational HTML page
    Page,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    // stdout carries responses in cgi mode; logs always go to stderr.
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Cgi => cgi::run(),
        Action::Serve { host, port } => serve::run(&host, port),
        Action::Check { x, y, r } => check::run(x, y, r),
        Action::Page => {
            print!("{}", areacheck::handler::INFO_PAGE);
            Ok(())
        }
    }
}
