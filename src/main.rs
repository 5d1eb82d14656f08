use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use article_blocks::{Config, Error};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "article-blocks")]
#[command(about = "Render article bodies written with blank-line paragraphs, ** emphasis and simple lists")]
struct Cli {
    /// Input article file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Output file (PDF defaults to input name with .pdf extension, other formats to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Pdf)]
    format: Format,

    /// Rendering config file
    #[arg(short, long, default_value = "article-blocks.toml")]
    config: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pdf,
    Typst,
    Json,
    Text,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = Config::load(&cli.config)?;
    let body = read_input(cli.input.as_deref())?;

    match cli.format {
        Format::Pdf => {
            let output = match (cli.output, &cli.input) {
                (Some(output), _) => output,
                (None, Some(input)) => input.with_extension("pdf"),
                (None, None) => return Err(Error::MissingOutput),
            };
            let pdf_bytes = article_blocks::article_to_pdf_with_config(&body, &config)?;
            write_output(&output, &pdf_bytes)?;
            println!("Created {}", output.display());
        }
        Format::Typst => {
            let typst = article_blocks::article_to_typst_with_config(&body, &config);
            emit(cli.output.as_deref(), &typst)?;
        }
        Format::Json => {
            let json = article_blocks::article_to_json(&body)?;
            emit(cli.output.as_deref(), &json)?;
        }
        Format::Text => {
            let text = article_blocks::article_to_text(&body);
            emit(cli.output.as_deref(), &text)?;
        }
    }

    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String, Error> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .map_err(|source| Error::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            Ok(body)
        }
    }
}

fn emit(output: Option<&Path>, content: &str) -> Result<(), Error> {
    match output {
        Some(path) => {
            write_output(path, content.as_bytes())?;
            log::info!("wrote {}", path.display());
            Ok(())
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    fs::write(path, bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
