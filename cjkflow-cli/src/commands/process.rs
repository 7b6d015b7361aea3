//! Process command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::input::{resolve_patterns, FileReader};
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use cjkflow_core::{
    collapse_consecutive_duplicate_lines, sanitize_invisible, ReflowOptions, Reflower, Segment,
};
use clap::Args;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Input name that selects stdin
const STDIN_INPUT: &str = "-";

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout); results of several inputs are concatenated
    #[arg(short, long, value_name = "FILE", conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write one output file per input into this directory
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// File-name suffix for --out-dir output [config default: _reflow]
    #[arg(long, value_name = "SUFFIX", requires = "out_dir")]
    pub suffix: Option<String>,

    /// Output format [config default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Separate segments with one newline instead of a blank line
    #[arg(long)]
    pub compact: bool,

    /// Input carries page markers; trust blank lines as paragraph breaks
    #[arg(long)]
    pub page_header: bool,

    /// Drop lines that repeat the previous line
    #[arg(long)]
    pub dedupe_lines: bool,

    /// Keep zero-width and directional marks
    #[arg(long)]
    pub keep_invisible: bool,

    /// Input encoding label (gbk, big5, shift_jis, ...)
    #[arg(short, long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CJKFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing (default: one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective settings after merging flags over the configuration file
#[derive(Debug)]
struct Settings {
    options: ReflowOptions,
    strip_invisible: bool,
    dedupe_lines: bool,
    format: OutputFormat,
    pretty_json: bool,
    suffix: String,
    reader: FileReader,
    threads: usize,
}

/// One reflowed input
struct Document {
    source: String,
    path: Option<PathBuf>,
    segments: Vec<Segment>,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> CliResult<()> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.settings(&config)?;
        log::debug!("Effective settings: {:?}", settings);

        let documents = if self.reads_stdin() {
            let text = settings.reader.read_stdin()?;
            vec![Document {
                source: "<stdin>".to_string(),
                path: None,
                segments: process_text(&text, &settings),
            }]
        } else {
            let files = resolve_patterns(&self.input)?;
            log::info!("Reflowing {} file(s)", files.len());
            self.process_files(&files, &settings)?
        };

        match &self.out_dir {
            Some(dir) => write_per_file(dir, &documents, &settings),
            None => self.write_combined(&documents, &settings),
        }
    }

    fn reads_stdin(&self) -> bool {
        self.input.len() == 1 && self.input[0] == STDIN_INPUT
    }

    /// Merge command-line flags over the configuration file
    fn settings(&self, config: &CliConfig) -> Result<Settings> {
        let format = match self.format {
            Some(format) => format,
            None => config.output_format()?,
        };

        let options = ReflowOptions::new()
            .with_compact(self.compact || config.reflow.compact)
            .with_page_header(self.page_header || config.reflow.add_pdf_page_header);

        let label = self.encoding.as_deref().or(config.input.encoding.as_deref());
        let reader = FileReader::new(label)?;

        let threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };

        Ok(Settings {
            options,
            strip_invisible: config.cleanup.strip_invisible && !self.keep_invisible,
            dedupe_lines: self.dedupe_lines || config.cleanup.collapse_duplicate_lines,
            format,
            pretty_json: config.output.pretty_json,
            suffix: self
                .suffix
                .clone()
                .unwrap_or_else(|| config.output.suffix.clone()),
            reader,
            threads,
        })
    }

    /// Reflow every file; a failing file is logged and skipped
    fn process_files(&self, files: &[PathBuf], settings: &Settings) -> Result<Vec<Document>> {
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let run = |path: &PathBuf| -> Option<Document> {
            let name = path.display().to_string();
            match process_file(path, settings) {
                Ok(document) => {
                    // The bar already reports each file
                    if !progress.is_active() {
                        let structural = document
                            .segments
                            .iter()
                            .filter(|segment| segment.kind.is_structural())
                            .count();
                        log::info!(
                            "{}: {} segments ({} structural)",
                            name,
                            document.segments.len(),
                            structural
                        );
                    }
                    progress.file_completed(&name);
                    Some(document)
                }
                Err(e) => {
                    log::error!("Skipping {}: {:#}", name, e);
                    progress.file_skipped(&name);
                    None
                }
            }
        };

        let parallel = files.len() > 1 && (self.parallel || self.threads.is_some_and(|n| n > 1));
        let results: Vec<Option<Document>> = if parallel {
            log::debug!("Using {} worker threads", settings.threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(settings.threads)
                .build()
                .context("Failed to build worker pool")?;
            pool.install(|| files.par_iter().map(run).collect())
        } else {
            files.iter().map(run).collect()
        };

        progress.finish();

        let documents: Vec<Document> = results.into_iter().flatten().collect();
        if documents.is_empty() {
            anyhow::bail!("All {} input file(s) failed", files.len());
        }
        if progress.skipped() > 0 {
            log::warn!("{} of {} file(s) skipped", progress.skipped(), files.len());
        }

        Ok(documents)
    }

    /// Write all documents to one destination, stdout by default
    fn write_combined(&self, documents: &[Document], settings: &Settings) -> Result<()> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                write_documents(BufWriter::new(file), documents, settings)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                log::info!("Wrote {}", path.display());
                Ok(())
            }
            None => write_documents(io::stdout(), documents, settings),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

/// Cleanup passes followed by reflow
fn process_text(text: &str, settings: &Settings) -> Vec<Segment> {
    let mut text = if settings.strip_invisible {
        sanitize_invisible(text)
    } else {
        text.to_string()
    };
    if settings.dedupe_lines {
        text = collapse_consecutive_duplicate_lines(&text);
    }
    Reflower::new(settings.options).segments(&text)
}

fn process_file(path: &Path, settings: &Settings) -> Result<Document> {
    let text = settings.reader.read_text(path)?;
    Ok(Document {
        source: path.display().to_string(),
        path: Some(path.to_path_buf()),
        segments: process_text(&text, settings),
    })
}

fn write_documents<W>(writer: W, documents: &[Document], settings: &Settings) -> Result<()>
where
    W: Write + Send + Sync,
{
    let mut formatter =
        settings
            .format
            .formatter(writer, settings.options.compact, settings.pretty_json);

    for document in documents {
        formatter.start_document(&document.source)?;
        for (index, segment) in document.segments.iter().enumerate() {
            formatter.format_segment(segment, index)?;
        }
    }

    formatter
        .finish()
        .map_err(|e| anyhow::Error::from(CliError::Output(e.to_string())))
}

/// Write each document to `dir/<stem><suffix>.<ext>`
fn write_per_file(dir: &Path, documents: &[Document], settings: &Settings) -> Result<()> {
    let targets = output_targets(dir, documents, settings)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    for (document, target) in documents.iter().zip(&targets) {
        let file = File::create(target)
            .with_context(|| format!("Failed to create output file: {}", target.display()))?;
        write_documents(BufWriter::new(file), std::slice::from_ref(document), settings)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        log::info!("Wrote {}", target.display());
    }

    Ok(())
}

/// Output path per document; two inputs sharing a target is an error, so
/// nothing is written over another result.
fn output_targets(
    dir: &Path,
    documents: &[Document],
    settings: &Settings,
) -> Result<Vec<PathBuf>, CliError> {
    let mut claimed: HashMap<PathBuf, &str> = HashMap::new();
    let mut targets = Vec::with_capacity(documents.len());

    for document in documents {
        let target = output_path(dir, document, settings);
        if let Some(first) = claimed.insert(target.clone(), &document.source) {
            return Err(CliError::Output(format!(
                "{} and {} would both be written to {}",
                first,
                document.source,
                target.display()
            )));
        }
        targets.push(target);
    }

    Ok(targets)
}

fn output_path(dir: &Path, document: &Document, settings: &Settings) -> PathBuf {
    let stem = document
        .path
        .as_deref()
        .and_then(Path::file_stem)
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string());
    dir.join(format!(
        "{stem}{}.{}",
        settings.suffix,
        settings.format.extension()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ProcessArgs,
    }

    fn parse(args: &[&str]) -> ProcessArgs {
        let mut argv = vec!["cjkflow"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().args
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig::parse(
            "[output]\ndefault_format = \"markdown\"\nsuffix = \"_cfg\"\n[cleanup]\nstrip_invisible = true\n",
        )
        .unwrap();
        let args = parse(&[
            "-i",
            "a.txt",
            "-f",
            "json",
            "--compact",
            "--keep-invisible",
            "--threads",
            "3",
        ]);
        let settings = args.settings(&config).unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.options.compact);
        assert!(!settings.options.add_pdf_page_header);
        assert!(!settings.strip_invisible);
        assert_eq!(settings.suffix, "_cfg");
        assert_eq!(settings.threads, 3);
    }

    #[test]
    fn test_config_defaults_apply() {
        let config = CliConfig::parse("[reflow]\nadd_pdf_page_header = true\n").unwrap();
        let settings = parse(&["-i", "a.txt"]).settings(&config).unwrap();

        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.options.add_pdf_page_header);
        assert!(settings.strip_invisible);
        assert!(!settings.dedupe_lines);
        assert!(settings.threads >= 1);
    }

    #[test]
    fn test_unknown_encoding_flag() {
        let args = parse(&["-i", "a.txt", "--encoding", "nope"]);
        assert!(args.settings(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_process_text_cleanup() {
        let args = parse(&["-i", "a.txt", "--dedupe-lines"]);
        let settings = args.settings(&CliConfig::default()).unwrap();
        let segments = process_text("页眉文字\n页眉\u{200B}文字\n正文。", &settings);

        let texts: Vec<_> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["页眉文字", "正文。"]);
    }

    #[test]
    fn test_output_path() {
        let settings = parse(&["-i", "a.txt", "--out-dir", "out", "-f", "markdown"])
            .settings(&CliConfig::default())
            .unwrap();
        let document = Document {
            source: "books/第一卷.txt".to_string(),
            path: Some(PathBuf::from("books/第一卷.txt")),
            segments: Vec::new(),
        };
        assert_eq!(
            output_path(Path::new("out"), &document, &settings),
            PathBuf::from("out/第一卷_reflow.md")
        );
    }

    #[test]
    fn test_colliding_output_names() {
        let settings = parse(&["-i", "a.txt", "--out-dir", "out"])
            .settings(&CliConfig::default())
            .unwrap();
        let document = |path: &str| Document {
            source: path.to_string(),
            path: Some(PathBuf::from(path)),
            segments: Vec::new(),
        };

        let distinct = [document("甲/序.txt"), document("甲/正文.txt")];
        assert_eq!(
            output_targets(Path::new("out"), &distinct, &settings)
                .unwrap()
                .len(),
            2
        );

        let clashing = [document("甲/ch.txt"), document("乙/ch.txt")];
        let err = output_targets(Path::new("out"), &clashing, &settings).unwrap_err();
        assert!(matches!(err, CliError::Output(_)));
        assert!(err.to_string().contains("甲/ch.txt"));
        assert!(err.to_string().contains("乙/ch.txt"));
    }

    #[test]
    fn test_stdin_detection() {
        assert!(parse(&["-i", "-"]).reads_stdin());
        assert!(!parse(&["-i", "-", "-i", "b.txt"]).reads_stdin());
    }
}
