use anyhow::{Context, Result};
use clap::Parser;
use medscribe::cli::{Cli, Commands, ModelsAction};
use medscribe::export::PatientDetails;
use medscribe::models::catalog;
use medscribe::session::{DictationSession, ProcessedClip};
use medscribe::{OutputMode, SessionOptions};
use owo_colors::OwoColorize;
use std::io::Read;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Process {
            inputs,
            model,
            language,
            mode,
            translation_backend,
            no_autocorrect,
            keywords,
            patient_name,
            patient_age,
            export,
            highlight,
            no_download,
        } => {
            let options = build_options(
                model,
                language,
                mode,
                translation_backend,
                no_autocorrect,
                keywords,
            )?;
            let patient = PatientDetails::new(
                patient_name.as_deref().unwrap_or(""),
                patient_age.as_deref().unwrap_or(""),
            );
            run_process(
                options,
                &inputs,
                &patient,
                export.as_deref(),
                highlight,
                no_download,
                cli.quiet,
            )
        }
        Commands::Models { action } => handle_models_command(action),
        Commands::Keywords => {
            for term in medscribe::KeywordSet::new().terms() {
                println!("{term}");
            }
            Ok(())
        }
    }
}

/// Route log records to stderr; default level hides everything below
/// warnings so transcripts stay clean on stdout.
fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to initialize logging")
}

/// Merge CLI flags over defaults and environment overrides.
fn build_options(
    model: Option<String>,
    language: Option<String>,
    mode: Option<String>,
    translation_backend: Option<String>,
    no_autocorrect: bool,
    keywords: Option<String>,
) -> Result<SessionOptions> {
    let mut options = SessionOptions::new().with_env_overrides();

    if let Some(model) = model {
        options.model = model.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(language) = language {
        options.language = language.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(mode) = mode {
        options.mode = mode.parse().map_err(anyhow::Error::msg)?;
    }
    if let Some(backend) = translation_backend {
        options.translation_backend = backend.parse().map_err(anyhow::Error::msg)?;
    }
    options.autocorrect = !no_autocorrect;
    if let Some(keywords) = keywords {
        options = options.with_keyword_string(&keywords);
    }

    Ok(options)
}

#[allow(clippy::too_many_arguments)]
fn run_process(
    options: SessionOptions,
    inputs: &[PathBuf],
    patient: &PatientDetails,
    export: Option<&Path>,
    highlight: bool,
    no_download: bool,
    quiet: bool,
) -> Result<()> {
    if no_download {
        ensure_model_installed(&options)?;
    }

    let mut session = DictationSession::new(options);

    for input in inputs {
        let bytes = read_clip(input)?;

        match session
            .process_clip(&bytes)
            .with_context(|| format!("processing {}", input.display()))?
        {
            None => {
                if !quiet {
                    eprintln!("{}: empty recording, skipped", input.display());
                }
            }
            Some(clip) => {
                print_outcome(&session, &clip, highlight, quiet);
                if let Some(path) = export {
                    let document = session.export_document(patient, &clip);
                    std::fs::write(path, document)
                        .with_context(|| format!("writing export to {}", path.display()))?;
                    if !quiet {
                        eprintln!("{} {}", "Exported:".green(), path.display());
                    }
                }
            }
        }
    }

    if !quiet && session.history().len() > 1 {
        eprintln!();
        eprintln!("{}", "Session history:".bold());
        for record in session.history().iter_recent() {
            eprintln!("  {} | {}", record.time_label().dimmed(), record.mode);
            eprintln!("  {}", record.preview());
        }
    }

    Ok(())
}

/// Read one clip's WAV bytes from a file or stdin ("-").
fn read_clip(input: &Path) -> Result<Vec<u8>> {
    if input == Path::new("-") {
        let mut buffer = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("reading WAV data from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read(input).with_context(|| format!("reading {}", input.display()))
    }
}

fn print_outcome(session: &DictationSession, clip: &ProcessedClip, highlight: bool, quiet: bool) {
    if !quiet {
        let detail = match clip.mode {
            OutputMode::Transcribe => format!("Keywords Found: {}", clip.keywords_found),
            _ => format!("Detected Language: {}", clip.detected_language),
        };
        eprintln!(
            "{} {}  {} {}  {}",
            "Model:".dimmed(),
            clip.model,
            "Mode:".dimmed(),
            clip.mode.label(),
            detail.dimmed(),
        );
    }

    println!("{}", clip.transcript);
    if highlight {
        println!("{}", session.highlight(&clip.transcript));
    }
}

/// Fail early when --no-download is set and the model is missing.
#[cfg(feature = "model-download")]
fn ensure_model_installed(options: &SessionOptions) -> Result<()> {
    use medscribe::models::download;

    let name = options.model.as_str();
    if !download::is_model_installed(name) {
        anyhow::bail!(
            "model '{}' is not installed and --no-download is set (try: medscribe models download {})",
            name,
            name
        );
    }
    Ok(())
}

#[cfg(not(feature = "model-download"))]
fn ensure_model_installed(_options: &SessionOptions) -> Result<()> {
    Ok(())
}

#[cfg(feature = "model-download")]
fn handle_models_command(action: ModelsAction) -> Result<()> {
    use medscribe::models::download;

    match action {
        ModelsAction::List => {
            for info in catalog::list_models() {
                println!("{}", download::format_model_info(info));
            }
        }
        ModelsAction::Download { name } => {
            let path = download::download_model(&name, true)?;
            println!("{}", path.display());
        }
        ModelsAction::Path { name } => {
            catalog::get_model(&name)
                .ok_or_else(|| anyhow::anyhow!("unknown model: {name}"))?;
            println!("{}", download::model_path(&name).display());
        }
    }
    Ok(())
}

#[cfg(not(feature = "model-download"))]
fn handle_models_command(action: ModelsAction) -> Result<()> {
    match action {
        ModelsAction::List => {
            for info in catalog::list_models() {
                println!("{:<8} {:>5} MB", info.name, info.size_mb);
            }
            Ok(())
        }
        _ => anyhow::bail!("model downloads require the model-download feature"),
    }
}
