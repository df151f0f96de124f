//! Icon commands shared by the one-shot CLI and the REPL.

use iconkit::{suggest, CustomizationOptions, HtmlOptions, IconResolver, IconSource};

/// A single icon operation.
#[derive(Debug, Clone, PartialEq)]
pub enum IconCommand {
    /// Print customized markup.
    Get {
        name: String,
        options: CustomizationOptions,
    },
    /// Print the icon's `<path>` elements, one per line.
    Paths { name: String },
    /// Print embeddable HTML.
    Html { name: String, options: HtmlOptions },
    /// Print suggested icon names.
    Suggest { keyword: String, json: bool },
    /// Report whether the icon exists.
    Check { name: String },
}

/// What a command printed and whether it counts as success.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    /// Process exit status for this output.
    pub fn exit_code(&self) -> i32 {
        if self.success {
            0
        } else {
            1
        }
    }
}

/// Execute a command against a resolver.
pub async fn execute<S: IconSource>(
    resolver: &IconResolver<S>,
    command: &IconCommand,
) -> anyhow::Result<CommandOutput> {
    let output = match command {
        IconCommand::Get { name, options } => {
            CommandOutput::ok(resolver.resolve(name, options).await)
        }
        IconCommand::Paths { name } => {
            let paths = resolver.get_paths(name).await;
            CommandOutput {
                success: !paths.is_empty(),
                text: paths.join("\n"),
            }
        }
        IconCommand::Html { name, options } => {
            CommandOutput::ok(resolver.to_html(name, options).await)
        }
        IconCommand::Suggest { keyword, json } => {
            let names = suggest(keyword);
            let text = if *json {
                serde_json::to_string_pretty(&names)?
            } else {
                names.join("\n")
            };
            CommandOutput::ok(text)
        }
        IconCommand::Check { name } => {
            let available = resolver.is_available(name).await;
            CommandOutput {
                text: format!(
                    "{name}: {}",
                    if available { "available" } else { "not found" }
                ),
                success: available,
            }
        }
    };

    Ok(output)
}

/// Parse a REPL line (without the leading `/`) into a command.
///
/// Returns `None` for lines that are not icon commands.
pub fn parse_line(cmd: &str, args: &str) -> Result<Option<IconCommand>, String> {
    let mut words = args.split_whitespace();
    let first = words.next();

    let need_name = |what: &str| -> Result<String, String> {
        first
            .map(str::to_string)
            .ok_or_else(|| format!("Usage: /{cmd} <{what}>"))
    };

    let command = match cmd {
        "get" => {
            let name = need_name("name> [size]")?;
            let mut options = CustomizationOptions::default();
            if let Some(size) = words.next() {
                let size = size
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid size '{size}'"))?;
                options = options.with_size(size);
            }
            IconCommand::Get { name, options }
        }
        "paths" => IconCommand::Paths {
            name: need_name("name")?,
        },
        "html" => {
            let name = need_name("name> [wrapper-class]")?;
            let options = HtmlOptions {
                wrapper_class: words.next().map(str::to_string),
                ..Default::default()
            };
            IconCommand::Html { name, options }
        }
        "suggest" => IconCommand::Suggest {
            keyword: need_name("keyword")?,
            json: false,
        },
        "check" => IconCommand::Check {
            name: need_name("name")?,
        },
        _ => return Ok(None),
    };

    Ok(Some(command))
}
