//! commander 命令行入口

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commander_cli::config::DEFAULT_CONFIG_FILE;
use commander_cli::{CommandGenerator, CommandInputParser, GeneratorConfig, logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "commander", version, about = "Command bus scaffolding")]
struct Cli {
    /// 配置文件路径
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new command and handler.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// The type path for the command to generate, e.g. shop/orders/PlaceOrderCommand
    path: String,

    /// A comma-separated list of properties for the command
    #[arg(long, default_value = "")]
    properties: String,

    /// The directory where your domain root is located
    #[arg(long)]
    base: Option<PathBuf>,

    /// Directory containing command.hbs and handler.hbs
    #[arg(long)]
    templates: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GeneratorConfig::load_from_file(&cli.config)?;
    logging::init(&config.log)?;

    match cli.command {
        Commands::Generate(args) => {
            if let Some(base) = args.base {
                config.base = base;
            }
            if let Some(templates) = args.templates {
                config.templates = Some(templates);
            }

            let input = CommandInputParser::new().parse(&args.path, &args.properties)?;
            CommandGenerator::new().generate(&input, &config)?;

            println!("All done! Your command and handler have now been generated.");
        }
    }

    Ok(())
}
