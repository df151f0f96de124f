//! iconkit — entry point.

use std::sync::Arc;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use iconkit::{
    CustomizationOptions, HtmlOptions, IconResolver, ResolverConfig, DEFAULT_SIZE,
    DEFAULT_STROKE_WIDTH,
};
use iconkit_cli::{execute, IconCommand};

#[derive(Parser)]
#[command(
    name = "iconkit",
    about = "Fetch, customize, and embed SVG icons from a remote icon CDN",
    version
)]
struct Cli {
    /// Icon CDN base URL (also reads ICONKIT_BASE_URL).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in milliseconds (also reads ICONKIT_TIMEOUT_MS).
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print customized SVG markup for an icon.
    Get {
        name: String,

        #[arg(long, default_value_t = DEFAULT_SIZE)]
        width: u32,

        #[arg(long, default_value_t = DEFAULT_SIZE)]
        height: u32,

        #[arg(long, default_value_t = DEFAULT_STROKE_WIDTH)]
        stroke_width: f64,

        /// Class attribute added to the root <svg>.
        #[arg(long = "class")]
        class_name: Option<String>,

        /// Omit aria-hidden="true".
        #[arg(long)]
        no_aria_hidden: bool,
    },

    /// Print the icon's <path> elements, one per line.
    Paths { name: String },

    /// Print the icon wrapped in a container element.
    Html {
        name: String,

        /// Wrapper tag name.
        #[arg(long, default_value = "div")]
        wrapper: String,

        /// Print the bare <svg> without a wrapper.
        #[arg(long, conflicts_with = "wrapper")]
        no_wrapper: bool,

        #[arg(long)]
        wrapper_class: Option<String>,

        /// Width and height of the icon.
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: u32,

        /// Class attribute added to the root <svg>.
        #[arg(long = "class")]
        class_name: Option<String>,
    },

    /// Suggest icon names for a keyword.
    Suggest {
        keyword: String,

        /// Print as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Check whether an icon exists. Exits with status 1 if not.
    Check { name: String },

    /// Print the effective configuration as JSON.
    Info,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   iconkit completions bash > ~/.local/share/bash-completion/completions/iconkit
    ///   iconkit completions zsh > ~/.zfunc/_iconkit
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },

    /// Launch interactive REPL mode.
    Repl,
}

impl Commands {
    /// The icon operation for this subcommand.
    ///
    /// `None` for the subcommands `main` handles itself.
    fn icon_command(&self) -> Option<IconCommand> {
        let command = match self {
            Commands::Get {
                name,
                width,
                height,
                stroke_width,
                class_name,
                no_aria_hidden,
            } => IconCommand::Get {
                name: name.clone(),
                options: CustomizationOptions {
                    width: *width,
                    height: *height,
                    stroke_width: *stroke_width,
                    class_name: class_name.clone(),
                    aria_hidden: !no_aria_hidden,
                },
            },

            Commands::Paths { name } => IconCommand::Paths { name: name.clone() },

            Commands::Html {
                name,
                wrapper,
                no_wrapper,
                wrapper_class,
                size,
                class_name,
            } => IconCommand::Html {
                name: name.clone(),
                options: HtmlOptions {
                    wrapper: (!no_wrapper).then(|| wrapper.clone()),
                    wrapper_class: wrapper_class.clone(),
                    size: *size,
                    icon: CustomizationOptions {
                        class_name: class_name.clone(),
                        ..Default::default()
                    },
                },
            },

            Commands::Suggest { keyword, json } => IconCommand::Suggest {
                keyword: keyword.clone(),
                json: *json,
            },

            Commands::Check { name } => IconCommand::Check { name: name.clone() },

            Commands::Info | Commands::Completions { .. } | Commands::Repl => return None,
        };
        Some(command)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ResolverConfig::resolve(cli.base_url.as_deref(), cli.timeout_ms)?;

    let command = match cli.command.icon_command() {
        Some(command) => command,
        None => {
            match cli.command {
                Commands::Info => {
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                Commands::Completions { shell } => {
                    let mut cmd = Cli::command();
                    clap_complete::generate(shell, &mut cmd, "iconkit", &mut std::io::stdout());
                }
                Commands::Repl => {
                    let resolver = Arc::new(IconResolver::new(config)?);
                    let handle = tokio::runtime::Handle::current();
                    tokio::task::spawn_blocking(move || iconkit_cli::repl::run(resolver, handle))
                        .await??;
                }
                _ => {}
            }
            return Ok(());
        }
    };

    tracing::debug!("Using icon CDN {}", config.base_url);
    let resolver = IconResolver::new(config)?;
    let output = execute(&resolver, &command).await?;
    if !output.text.is_empty() {
        println!("{}", output.text);
    }

    let code = output.exit_code();
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
