use bai2_parser::{Bai2Document, Encoding, OutputFormat, ParseError, ParseOptions};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "bai2_converter",
    version,
    about = "Разбирает BAI2-выписки и выгружает транзакции в CSV или JSON.",
    long_about = None,
)]
struct Args {
    /// Входные файлы (можно через запятую)
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    input: Vec<PathBuf>,

    /// Формат выгрузки
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Каталог для результатов; без него выгрузка идёт в stdout
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Имена выходных файлов, по одному на входной файл
    #[arg(long, value_delimiter = ',', requires = "output_dir")]
    output_file_names: Vec<String>,

    /// Не сверять счётчики записей в трейлерах
    #[arg(long)]
    no_validation: bool,

    /// Кодировка входных файлов (utf-8, latin-1)
    #[arg(long, default_value = "utf-8")]
    encoding: Encoding,

    /// Разделитель полей
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Считать неизвестный type code ошибкой
    #[arg(long)]
    strict_type_codes: bool,

    /// Подробное логирование
    #[arg(long)]
    debug: bool,
}

/// Поддерживаемые форматы выгрузки для CLI
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => OutputFormat::Csv,
            Format::Json => OutputFormat::Json,
        }
    }
}

impl Args {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_delimiter(self.delimiter)
            .with_validation(!self.no_validation)
            .with_encoding(self.encoding)
            .with_ignore_unknown_type_codes(!self.strict_type_codes)
    }
}

fn main() {
    let args = Args::parse();
    setup_logging(args.debug);

    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn setup_logging(debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("bai2_parser={level},bai2_converter={level}"))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(args: Args) -> Result<(), ParseError> {
    debug!(?args, "parsed arguments");

    if !args.output_file_names.is_empty() && args.output_file_names.len() != args.input.len() {
        return Err(invalid_input(format!(
            "expected {} output file names, got {}",
            args.input.len(),
            args.output_file_names.len()
        )));
    }

    // в stdout помещается только одна выгрузка с одной строкой заголовков
    if args.output_dir.is_none() && args.input.len() > 1 {
        return Err(invalid_input(format!(
            "{} input files need --output-dir",
            args.input.len()
        )));
    }

    let options = args.parse_options();
    let format = OutputFormat::from(args.format);

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    for (idx, input) in args.input.iter().enumerate() {
        let document = Bai2Document::from_path(input, &options)?;

        match &args.output_dir {
            Some(dir) => {
                let name = match args.output_file_names.get(idx) {
                    Some(name) => name.clone(),
                    None => default_file_name(input, format)?,
                };
                let target = dir.join(name);

                let file = File::create(&target)?;
                document.write(BufWriter::new(file), format)?;
                info!(input = %input.display(), output = %target.display(), "export written");
            }
            None => {
                let stdout = io::stdout();
                let handle = stdout.lock();
                document.write(handle, format)?;
            }
        }
    }

    Ok(())
}

/// `<имя входного файла>_<UTC время>.<расширение>`
fn default_file_name(input: &Path, format: OutputFormat) -> Result<String, ParseError> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| invalid_input(format!("bad input file name: {}", input.display())))?;
    let stamp = Utc::now().format("%Y-%m-%dT%H-%M-%S");

    Ok(format!("{stem}_{stamp}.{}", format.extension()))
}

fn invalid_input(message: String) -> ParseError {
    ParseError::Io(io::Error::new(io::ErrorKind::InvalidInput, message))
}
