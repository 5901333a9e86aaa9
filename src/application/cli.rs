use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::IntoEnumIterator;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::services::actions::help_text;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
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
        .about("Debug helpers for Frameseek")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to the debug log file generated when running Frameseek with environment variable RUST_LOG=frameseek")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn arg_retrieval_url() -> Arg {
    return Arg::new(ConfigKey::RetrievalUrl.to_string())
        .long(ConfigKey::RetrievalUrl.to_string())
        .env("FRAMESEEK_RETRIEVAL_URL")
        .num_args(1)
        .help(format!(
            "Retrieval backend base URL serving the search endpoints. [default: {}]",
            Config::default(ConfigKey::RetrievalUrl)
        ))
        .global(true);
}

fn arg_processing_url() -> Arg {
    return Arg::new(ConfigKey::ProcessingUrl.to_string())
        .long(ConfigKey::ProcessingUrl.to_string())
        .env("FRAMESEEK_PROCESSING_URL")
        .num_args(1)
        .help(format!(
            "Processing backend base URL handling edit instructions. [default: {}]",
            Config::default(ConfigKey::ProcessingUrl)
        ))
        .global(true);
}

fn arg_topk() -> Arg {
    return Arg::new(ConfigKey::Topk.to_string())
        .short('k')
        .long(ConfigKey::Topk.to_string())
        .env("FRAMESEEK_TOPK")
        .num_args(1)
        .help(format!(
            "How many results each search requests. [default: {}]",
            Config::default(ConfigKey::Topk)
        ))
        .global(true);
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .short('u')
        .long(ConfigKey::Username.to_string())
        .env("FRAMESEEK_USERNAME")
        .num_args(1)
        .help("Your user name shown before each instruction in the conversation log.")
        .global(true);
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("COMMANDS:") || line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}")).underline().bold().to_string();
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

    return Command::new("frameseek")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("FRAMESEEK_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(arg_retrieval_url())
        .arg(arg_processing_url())
        .arg(arg_topk())
        .arg(arg_username());
}

/// Returns whether the UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("create", _)) => {
                    create_config_file().await?;
                }
                Some(("default", _)) => {
                    println!("{}", Config::serialize_default(build()));
                }
                Some(("path", _)) => {
                    println!("{}", Config::default(ConfigKey::ConfigFile));
                }
                _ => (),
            }
            return Ok(false);
        }
        Some(("debug", subcmd_matches)) => {
            match subcmd_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = dirs::cache_dir().unwrap().join("frameseek/debug.log");
                    println!("{}", log_path.to_str().unwrap());
                }
                Some(("enum-config", _)) => {
                    let keys = ConfigKey::iter()
                        .map(|key| {
                            return key.to_string();
                        })
                        .collect::<Vec<String>>();
                    println!("{}", keys.join("\n"));
                }
                _ => (),
            }
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
            return Ok(true);
        }
    }
}
