use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Arc,
};

pub use cli::CLIParser;
use error::Error;
use huffman::{Encoded, Symbol};
use threadpool::ThreadPool;

pub mod batch;
mod cli;
pub mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SymbolUnit {
    Char,
    Byte,
}

pub struct Arguments {
    texts: Vec<String>,
    input_file: Option<PathBuf>,
    symbol_unit: SymbolUnit,
    number_of_threads: usize,
    show_tree: bool,
}

fn read_input_file(file_path: &Path) -> Result<Vec<u8>> {
    fs::read(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn collect_inputs(arguments: &Arguments) -> Result<Vec<Vec<u8>>> {
    match &arguments.input_file {
        Some(path) => Ok(vec![read_input_file(path)?]),
        None => Ok(arguments
            .texts
            .iter()
            .map(|text| text.as_bytes().to_vec())
            .collect()),
    }
}

fn write_encoding<S: Symbol, W: Write>(
    output: &mut W,
    input: &[S],
    encoded: &Encoded<S>,
    show_tree: bool,
) -> std::io::Result<()> {
    let code_book = encoded.code_book();
    if show_tree {
        write!(output, "{}", code_book.tree())?;
    }
    for entry in code_book.table().codes() {
        writeln!(output, "{:?}: {}", entry.symbol, entry.code)?;
    }
    writeln!(output, "encoded: {}", encoded.bits())?;
    let round_trip = match encoded.decode() {
        Ok(decoded) if decoded == input => "ok",
        _ => "failed",
    };
    writeln!(output, "round trip: {}", round_trip)?;
    writeln!(output, "{}", code_book.report())
}

fn write_result<S: Symbol, W: Write>(
    output: &mut W,
    index: usize,
    input: &[S],
    result: &Result<Encoded<S>>,
    show_tree: bool,
) -> std::io::Result<()> {
    writeln!(output, "input {}:", index)?;
    match result {
        Ok(encoded) => write_encoding(output, input, encoded, show_tree),
        Err(error) => writeln!(output, "failed: {}", error),
    }
}

fn write_all_encodings<S, W>(
    arguments: &Arguments,
    output: &mut W,
    inputs: Vec<Vec<S>>,
) -> Result<usize>
where
    S: Symbol + Send + Sync + 'static,
    W: Write,
{
    let inputs: Vec<Arc<[S]>> = inputs.into_iter().map(Arc::from).collect();
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let results = batch::encode_all(&threadpool, &inputs);
    let mut failures = 0;
    for (index, (input, result)) in inputs.iter().zip(results).enumerate() {
        write_result(output, index, input, &result, arguments.show_tree)
            .map_err(Error::FailedToWriteOutput)?;
        if result.is_err() {
            failures += 1;
        }
    }
    Ok(failures)
}

/// Encode every input named by `arguments` and print code tables, bits and statistics.
/// Returns the number of inputs that could not be encoded.
pub fn encode_inputs<W: Write>(arguments: &Arguments, output: &mut W) -> Result<usize> {
    let inputs = collect_inputs(arguments)?;
    log::info!(
        "Encoding {} inputs on {} threads",
        inputs.len(),
        arguments.number_of_threads
    );
    match arguments.symbol_unit {
        SymbolUnit::Byte => write_all_encodings(arguments, output, inputs),
        SymbolUnit::Char => {
            let inputs = inputs
                .into_iter()
                .map(|bytes| {
                    String::from_utf8(bytes)
                        .map(|text| text.chars().collect())
                        .map_err(|_| Error::InputIsNotValidUtf8)
                })
                .collect::<Result<Vec<Vec<char>>>>()?;
            write_all_encodings(arguments, output, inputs)
        }
    }
}
