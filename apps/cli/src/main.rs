use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use forexscript_core::{
    CategoryId, ChatCompletionsClient, DurationLabel, InputKind, Language, OPENAI,
    SECRETS_PATH_ENV, ScriptRequest, ScriptSegments, Session, TranscreationRequest,
    default_secrets_path, get_export_dir, load_export, save_script, taxonomy, transcreate_script,
};

mod display;

/// CLI wrapper for InputKind (needed for clap ValueEnum)
#[derive(Clone, Copy, Default, ValueEnum)]
enum CliInputKind {
    #[default]
    Topic,
    Hook,
    Cta,
}

impl From<CliInputKind> for InputKind {
    fn from(cli: CliInputKind) -> Self {
        match cli {
            CliInputKind::Topic => InputKind::Topic,
            CliInputKind::Hook => InputKind::Hook,
            CliInputKind::Cta => InputKind::Cta,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
enum CliCategory {
    Educational,
    NewsAnalysis,
    RawStories,
    ViralContent,
}

impl From<CliCategory> for CategoryId {
    fn from(cli: CliCategory) -> Self {
        match cli {
            CliCategory::Educational => CategoryId::Educational,
            CliCategory::NewsAnalysis => CategoryId::NewsAnalysis,
            CliCategory::RawStories => CategoryId::RawStories,
            CliCategory::ViralContent => CategoryId::ViralContent,
        }
    }
}

#[derive(Parser)]
#[command(name = "forexscript")]
#[command(about = "Generate short-form forex video scripts with AI and transcreate them")]
struct Cli {
    /// Secrets file holding OPENAI_API_KEY (used when the env var is unset)
    #[arg(long, global = true, env = SECRETS_PATH_ENV)]
    secrets: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a hook/body/CTA script, optionally transcreating it
    Generate {
        /// Seed text: a topic, a hook or a CTA
        input: String,

        /// What the seed text is
        #[arg(short, long, value_enum, default_value = "topic")]
        kind: CliInputKind,

        /// Content category
        #[arg(short, long, value_enum, default_value = "educational")]
        category: CliCategory,

        /// Script length: 15s, 30s or 60s
        #[arg(short, long, default_value = "30s")]
        length: DurationLabel,

        /// Transcreate into these languages (th, vi, zhs, zht; other codes pass through)
        #[arg(short, long = "translate")]
        translate: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Transcreate a previously exported script
    Transcreate {
        /// Exported script file
        file: PathBuf,

        /// Target languages (th, vi, zhs, zht; other codes pass through)
        #[arg(short, long = "lang", required = true)]
        lang: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List content categories
    Categories,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Save each script as a text file
    #[arg(short, long)]
    save: bool,

    /// Directory for saved scripts
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl OutputArgs {
    async fn save(&self, language: Option<&Language>, segments: &ScriptSegments) -> Result<()> {
        if !self.save {
            return Ok(());
        }
        let dir = self.out.clone().unwrap_or_else(get_export_dir);
        let path = save_script(&dir, language, segments).await?;
        println!("{} {}", style("Saved:").dim(), style(path.display()).cyan());
        Ok(())
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

async fn build_client(secrets_path: Option<PathBuf>) -> Result<ChatCompletionsClient> {
    let secrets_path = secrets_path.unwrap_or_else(default_secrets_path);
    let api_key = OPENAI.resolve_api_key(&secrets_path).await?;
    Ok(ChatCompletionsClient::new(&OPENAI, api_key))
}

/// Resolve credentials and print the banner, or exit when no key is available
async fn connect(secrets_path: Option<PathBuf>) -> ChatCompletionsClient {
    let client = match build_client(secrets_path).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            eprintln!(
                "{}",
                style(format!(
                    "Set OPENAI_API_KEY or add it to {}",
                    default_secrets_path().display()
                ))
                .dim()
            );
            std::process::exit(1);
        }
    };

    println!(
        "\n{}  {}\n",
        style("forexscript").cyan().bold(),
        style(format!("Script Generator ({})", client.model())).dim()
    );
    client
}

fn warn_unknown_language(language: &Language) {
    if !language.is_known() {
        println!(
            "{} {}",
            style("!").yellow().bold(),
            style(format!(
                "'{}' is not a known language code, passing it through as-is",
                language.code()
            ))
            .dim()
        );
    }
}

async fn transcreate_into(
    client: &ChatCompletionsClient,
    source: &ScriptSegments,
    languages: Vec<String>,
    output: &OutputArgs,
) -> Result<()> {
    for code in languages {
        let request = TranscreationRequest {
            source: source.clone(),
            language: Language::new(code),
        };
        warn_unknown_language(&request.language);
        let spinner = create_spinner(&format!(
            "Transcreating to {}...",
            request.language.display_name()
        ));
        match transcreate_script(client, &request).await {
            Ok(result) => {
                spinner.finish_with_message(format!(
                    "{} Transcreation complete!",
                    style("✓").green().bold()
                ));
                display::print_transcreation(&result);
                output.save(Some(&result.language), &result.segments).await?;
            }
            // one failed language does not stop the others
            Err(e) => {
                spinner.finish_with_message(format!("{} {}", style("✗").red().bold(), e));
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Categories => {
            display::print_categories(taxonomy::categories());
        }
        Command::Generate {
            input,
            kind,
            category,
            length,
            translate,
            output,
        } => {
            let client = connect(cli.secrets).await;
            let request = ScriptRequest {
                input_text: input,
                input_kind: kind.into(),
                category: category.into(),
                duration: length,
            };
            let mut session = Session::new();
            tracing::debug!(session = %session.id(), "session started");

            let spinner = create_spinner(&format!(
                "Generating {} {} script from {}...",
                request.duration,
                request.category.category().name,
                request.input_kind.display_name()
            ));
            let script = match session.generate(&client, &request).await {
                Ok(script) => script,
                Err(e) => {
                    spinner.finish_with_message(format!("{} {}", style("✗").red().bold(), e));
                    std::process::exit(1);
                }
            };
            spinner.finish_with_message(format!("{} Generated!", style("✓").green().bold()));

            display::print_script(script);
            output.save(None, &script.segments).await?;

            for code in translate {
                let language = Language::new(code);
                warn_unknown_language(&language);
                let spinner =
                    create_spinner(&format!("Transcreating to {}...", language.display_name()));
                match session.transcreate(&client, &language).await {
                    Ok(result) => {
                        spinner.finish_with_message(format!(
                            "{} Transcreation complete!",
                            style("✓").green().bold()
                        ));
                        display::print_transcreation(result);
                        output.save(Some(&result.language), &result.segments).await?;
                    }
                    Err(e) => {
                        spinner.finish_with_message(format!("{} {}", style("✗").red().bold(), e));
                    }
                }
            }
        }
        Command::Transcreate { file, lang, output } => {
            let client = connect(cli.secrets).await;
            let source = load_export(&file).await?;
            println!(
                "{} Loaded {}",
                style("✓").green().bold(),
                style(file.display()).dim()
            );
            transcreate_into(&client, &source, lang, &output).await?;
        }
    }

    Ok(())
}
