use std::path::{Component, Path, PathBuf};
use std::process;

use clap::Parser;

use face_label_core::labeling::label_deriver::LabelDeriver;
use face_label_core::pipeline::label_frames_use_case::LabelFramesUseCase;
use face_label_core::pipeline::pipeline_logger::LogPipelineLogger;
use face_label_core::shared::constants::DEFAULT_PROGRESS_EVERY;
use face_label_core::video::domain::frame_writer::FrameWriter;
use face_label_core::video::infrastructure::json_lines_reader::JsonLinesReader;
use face_label_core::video::infrastructure::json_lines_writer::JsonLinesWriter;

/// Label detected faces with age, gender and emotion from recorded
/// classifier outputs.
#[derive(Parser)]
#[command(name = "face-label")]
struct Cli {
    /// Input frames, one JSON object per line.
    input: PathBuf,

    /// Output file for labeled frames (stdout if omitted).
    output: Option<PathBuf>,

    /// Log progress every N frames.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_EVERY)]
    progress_every: usize,

    /// Skip the end-of-run timing summary.
    #[arg(long)]
    no_summary: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let writer: Box<dyn FrameWriter> = match &cli.output {
        Some(path) => Box::new(JsonLinesWriter::create(path)?),
        None => Box::new(JsonLinesWriter::stdout()),
    };
    let mut logger = LogPipelineLogger::new(cli.progress_every);
    if cli.no_summary {
        logger = logger.without_summary();
    }

    let mut use_case = LabelFramesUseCase::new(
        Box::new(JsonLinesReader::new()),
        writer,
        Box::new(LabelDeriver::new()),
        Box::new(logger),
    );
    let stats = use_case.execute(&cli.input)?;

    if stats.stopped_early {
        log::warn!("Pipeline stopped early after {} frames", stats.frames);
    }
    log::info!(
        "Labeled {} tensors across {} faces in {} frames",
        stats.labels,
        stats.regions,
        stats.frames
    );
    if let Some(path) = &cli.output {
        log::info!("Output written to {}", path.display());
    }
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.progress_every == 0 {
        return Err("--progress-every must be at least 1".into());
    }
    if let Some(output) = &cli.output {
        if is_same_file(&cli.input, output) {
            return Err(format!(
                "Output must differ from input: {} is {}",
                output.display(),
                cli.input.display()
            )
            .into());
        }
    }
    Ok(())
}

fn is_same_file(input: &Path, output: &Path) -> bool {
    match (input.canonicalize(), resolve_path(output)) {
        (Ok(input), Some(output)) => input == output,
        _ => false,
    }
}

/// Resolves a path that may not exist yet. Existing prefixes are
/// canonicalized; `..` in the missing tail is applied lexically, which is
/// what the writer gets once it creates those directories.
fn resolve_path(path: &Path) -> Option<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => {
                resolved.push(other);
                if let Ok(real) = resolved.canonicalize() {
                    resolved = real;
                }
            }
        }
    }
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("face-label").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["frames.jsonl"]);
        assert_eq!(cli.input, PathBuf::from("frames.jsonl"));
        assert!(cli.output.is_none());
        assert_eq!(cli.progress_every, 10);
        assert!(!cli.no_summary);
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&["in.jsonl", "out.jsonl", "--progress-every", "50", "--no-summary"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.jsonl")));
        assert_eq!(cli.progress_every, 50);
        assert!(cli.no_summary);
    }

    #[test]
    fn test_validate_missing_input() {
        let cli = parse(&["/definitely/not/here.jsonl"]);
        let err = validate(&cli).unwrap_err();
        assert!(err.to_string().contains("Input file not found"));
    }

    #[test]
    fn test_validate_zero_progress_every() {
        let input = std::env::current_exe().unwrap();
        let cli = Cli {
            input,
            output: None,
            progress_every: 0,
            no_summary: false,
        };
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_validate_output_same_as_input() {
        let input = std::env::current_exe().unwrap();
        let cli = Cli {
            output: Some(input.clone()),
            input,
            progress_every: 1,
            no_summary: false,
        };
        let err = validate(&cli).unwrap_err();
        assert!(err.to_string().contains("differ"));
    }

    fn cli_for(input: PathBuf, output: PathBuf) -> Cli {
        Cli {
            input,
            output: Some(output),
            progress_every: 1,
            no_summary: false,
        }
    }

    fn input_file(dir: &tempfile::TempDir) -> PathBuf {
        let input = dir.path().join("in.jsonl");
        std::fs::write(&input, "{\"index\":0}\n").unwrap();
        input
    }

    #[test]
    fn test_validate_rejects_parent_dir_alias_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_file(&dir);
        let alias = dir.path().join("sub").join("..").join("in.jsonl");

        let err = validate(&cli_for(input.clone(), alias)).unwrap_err();

        assert!(err.to_string().contains("differ"));
        assert_eq!(std::fs::read_to_string(&input).unwrap(), "{\"index\":0}\n");
    }

    #[test]
    fn test_validate_rejects_alias_through_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_file(&dir);
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let alias = dir.path().join("sub").join("..").join(".").join("in.jsonl");

        assert!(validate(&cli_for(input, alias)).is_err());
    }

    #[test]
    fn test_validate_accepts_distinct_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = input_file(&dir);
        let output = dir.path().join("sub").join("..").join("out.jsonl");

        assert!(validate(&cli_for(input, output)).is_ok());
    }

    #[test]
    fn test_resolve_path_applies_parent_dir_in_missing_tail() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().canonicalize().unwrap();
        let path = dir.path().join("a").join("b").join("..").join("c.jsonl");

        assert_eq!(resolve_path(&path), Some(base.join("a").join("c.jsonl")));
    }
}
