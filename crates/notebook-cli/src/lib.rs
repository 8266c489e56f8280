use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use notebook_core::{
    clear_outputs, from_document, fs, markdownize, stream_text, strip_markdown, to_document,
    Notebook, StreamSelection,
};
use notebook_format::{from_percent, outline, to_percent, to_starboard, to_starboard_html};

#[derive(Parser)]
#[command(
    name = "notebook-convert",
    version,
    about = "Convert Jupyter notebooks between formats",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the notebook as a py-percent script
    Percent(InputArgs),

    /// Parse a py-percent script into an .ipynb document
    ImportPercent(ImportArgs),

    /// Render the notebook in Starboard format
    Starboard(StarboardArgs),

    /// Print a tree-style outline of the notebook structure
    Outline(InputArgs),

    /// Replace every code cell with its fenced-markdown equivalent
    Markdownize(TransformArgs),

    /// Keep only the code cells
    CodeOnly(TransformArgs),

    /// Strip cell outputs and reset execution counts
    ClearOutputs(TransformArgs),

    /// Extract the text written to output streams
    Stream(StreamArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Path to the .ipynb file (use '-' for stdin)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ImportArgs {
    /// Path to the py-percent script (use '-' for stdin)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Notebook format version to stamp on the result
    #[arg(long, value_name = "VERSION", default_value = "4.5")]
    version: String,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct StarboardArgs {
    /// Path to the .ipynb file (use '-' for stdin)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Emit a self-contained Starboard HTML document
    #[arg(long)]
    html: bool,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct TransformArgs {
    /// Path to the .ipynb file (use '-' for stdin)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct StreamArgs {
    /// Path to the .ipynb file (use '-' for stdin)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Include stderr stream output
    #[arg(long)]
    stderr: bool,

    /// Exclude stdout stream output
    #[arg(long = "no-stdout")]
    no_stdout: bool,
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Command::Percent(args) => {
            let notebook = load_input(&args.file)?;
            emit(&to_percent(&notebook), args.output.as_deref())
        }
        Command::ImportPercent(args) => {
            let text = read_text(&args.file)?;
            let notebook = from_percent(&text, &args.version);
            emit_notebook(&notebook, args.output.as_deref())
        }
        Command::Starboard(args) => {
            let notebook = load_input(&args.file)?;
            let rendered = if args.html {
                to_starboard_html(&notebook)
            } else {
                to_starboard(&notebook)
            };
            emit(&rendered, args.output.as_deref())
        }
        Command::Outline(args) => {
            let notebook = load_input(&args.file)?;
            emit(&outline(&notebook), args.output.as_deref())
        }
        Command::Markdownize(args) => {
            let notebook = load_input(&args.file)?;
            emit_notebook(&markdownize(&notebook), args.output.as_deref())
        }
        Command::CodeOnly(args) => {
            let notebook = load_input(&args.file)?;
            emit_notebook(&strip_markdown(&notebook), args.output.as_deref())
        }
        Command::ClearOutputs(args) => {
            let notebook = load_input(&args.file)?;
            emit_notebook(&clear_outputs(&notebook), args.output.as_deref())
        }
        Command::Stream(args) => {
            let notebook = load_input(&args.file)?;
            let selection = StreamSelection {
                stdout: !args.no_stdout,
                stderr: args.stderr,
            };
            emit(&stream_text(&notebook, selection), None)
        }
    }
}

fn load_input(file: &Path) -> Result<Notebook> {
    let document = if file == Path::new("-") {
        serde_json::from_str(&read_stdin()?).context("stdin is not a JSON document")?
    } else {
        fs::read_document(file)
            .with_context(|| format!("unable to read notebook: {}", file.display()))?
    };

    from_document(&document).with_context(|| format!("unable to load notebook: {}", file.display()))
}

fn read_text(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        read_stdin()
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("unable to read file: {}", file.display()))
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read stdin")?;
    Ok(buffer)
}

fn emit_notebook(notebook: &Notebook, output: Option<&Path>) -> Result<i32> {
    match output {
        Some(path) => {
            fs::save_notebook(notebook, path)
                .with_context(|| format!("unable to write notebook: {}", path.display()))?;
            Ok(0)
        }
        None => {
            let document = to_document(notebook)?;
            emit(&serde_json::to_string_pretty(&document)?, None)
        }
    }
}

fn emit(text: &str, output: Option<&Path>) -> Result<i32> {
    if let Some(path) = output {
        let mut content = text.to_string();
        if !content.ends_with('\n') {
            content.push('\n');
        }
        fs::write_atomic(path, &content)
            .with_context(|| format!("unable to write output: {}", path.display()))?;
        return Ok(0);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    match writeln!(handle, "{text}") {
        Ok(()) => {}
        Err(err) if is_pipe_error(&err) => return Ok(0),
        Err(err) => return Err(err).context("failed to write to stdout"),
    }
    match handle.flush() {
        Ok(()) => Ok(0),
        Err(err) if is_pipe_error(&err) => Ok(0),
        Err(err) => Err(err).context("failed to flush stdout"),
    }
}

fn is_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
