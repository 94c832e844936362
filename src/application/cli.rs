#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::TypedValueParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::KeyValueStore;
use crate::domain::services::actions::help_text;
use crate::domain::services::SessionIdentity;
use crate::infrastructure::storage::LocalStorage;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

pub fn log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("PARLEY_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("parley");
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for Parley")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Parley with environment variable RUST_LOG=parley")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_session() -> Command {
    return Command::new("session")
        .about("Manage the sender ID identifying you to the webhook.")
        .arg_required_else_help(true)
        .subcommand(Command::new("show").about("Print the sender ID, creating one if it doesn't exist yet."))
        .subcommand(Command::new("reset").about("Forget the sender ID. The next chat starts a new conversation."))
        .subcommand(Command::new("path").about("Print the path of the file storing the sender ID."));
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("parley")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(Command::new("chat").about("Start chatting. This is the default command."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .subcommand(subcommand_session())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("PARLEY_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::WebhookURL.to_string())
                .short('w')
                .long(ConfigKey::WebhookURL.to_string())
                .env("PARLEY_WEBHOOK_URL")
                .num_args(1)
                .help(format!("Rasa compatible REST webhook to send messages to. [default: {}]", Config::default(ConfigKey::WebhookURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::HealthCheckTimeout.to_string())
                .long(ConfigKey::HealthCheckTimeout.to_string())
                .env("PARLEY_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .value_parser(value_parser!(u64).map(|e| return e.to_string()))
                .help(format!("Time to wait in milliseconds before timing out when checking the webhook is reachable. [default: {}]", Config::default(ConfigKey::HealthCheckTimeout)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::StoreFile.to_string())
                .long(ConfigKey::StoreFile.to_string())
                .env("PARLEY_STORE_FILE")
                .num_args(1)
                .help(format!("Path to the file storing the persistent sender ID. [default: {}]", Config::default(ConfigKey::StoreFile)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::Username.to_string())
                .short('u')
                .long(ConfigKey::Username.to_string())
                .env("PARLEY_USERNAME")
                .num_args(1)
                .help("Your user name displayed in all chat bubbles.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::BotName.to_string())
                .long(ConfigKey::BotName.to_string())
                .env("PARLEY_BOT_NAME")
                .num_args(1)
                .help(format!("Display name used for replies from the remote agent. [default: {}]", Config::default(ConfigKey::BotName)))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        Some(("session", subcmd_matches)) => {
            Config::load(vec![&matches, subcmd_matches]).await?;
            let store = LocalStorage::default();

            match subcmd_matches.subcommand() {
                Some(("show", _)) => {
                    let sender_id = SessionIdentity::get_or_create(&store).await;
                    println!("{sender_id}");
                }
                Some(("reset", _)) => {
                    store.clear().await?;
                    println!("Forgot sender ID. The next chat starts a new conversation.");
                }
                Some(("path", _)) => {
                    println!("{}", store.path.to_string_lossy());
                }
                _ => {
                    subcommand_session().print_long_help()?;
                }
            }

            return Ok(false);
        }
        _ => {
            Config::load(vec![&matches]).await?;
        }
    }

    return Ok(true);
}
