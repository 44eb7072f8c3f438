use crate::{Arguments, SymbolUnit};
use clap::{
    arg, builder::PossibleValue, crate_authors, crate_description, crate_name, crate_version,
    value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl ValueEnum for SymbolUnit {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Char, Self::Byte]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Char => Some(PossibleValue::new("char")),
            Self::Byte => Some(PossibleValue::new("byte")),
        }
    }
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_texts_argument(command);
        let command = Self::register_input_file_argument(command);
        let command = Self::register_symbol_unit_argument(command);
        let command = Self::register_threads_argument(command);
        Self::register_tree_argument(command)
    }

    fn register_texts_argument(command: Command) -> Command {
        command.arg(Self::create_texts_argument())
    }

    fn register_input_file_argument(command: Command) -> Command {
        command.arg(Self::create_input_file_argument())
    }

    fn register_symbol_unit_argument(command: Command) -> Command {
        command.arg(Self::create_symbol_unit_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_tree_argument(command: Command) -> Command {
        command.arg(Self::create_tree_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_texts_argument() -> Arg {
        Arg::new("texts")
            .help("Texts to encode, each with its own code")
            .num_args(1..)
            .required_unless_present("input_file")
            .conflicts_with("input_file")
    }

    fn create_input_file_argument() -> Arg {
        arg!(input_file: -f --input_file <PATH> "Encode the contents of a file instead")
            .value_parser(value_parser!(PathBuf))
    }

    fn create_symbol_unit_argument() -> Arg {
        arg!(symbol_unit: -u --unit <UNIT> "Unit of the input treated as one symbol")
            .default_value("char")
            .value_parser(value_parser!(SymbolUnit))
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of Threads")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_tree_argument() -> Arg {
        arg!(--tree "Print the Huffman tree of each input").action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            texts: Self::extract_texts_argument(matches),
            input_file: Self::extract_input_file_argument(matches),
            symbol_unit: Self::extract_symbol_unit_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            show_tree: Self::extract_tree_argument(matches),
        }
    }

    fn extract_texts_argument(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("texts")
            .map(|texts| texts.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_input_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("input_file").cloned()
    }

    fn extract_symbol_unit_argument(matches: &ArgMatches) -> SymbolUnit {
        matches
            .get_one::<SymbolUnit>("symbol_unit")
            .expect("Symbol unit must be provided, but was unset.")
            .to_owned()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("tree")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, SymbolUnit};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_texts_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let command = CLIParser::register_texts_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "abc", "DAEBCBACBBBC"]);
        let texts = CLIParser::extract_texts_argument(&matches);
        assert_eq!(texts, ["abc", "DAEBCBACBBBC"]);
    }

    #[test]
    fn parse_input_file_argument() {
        let input_file_name = "testfile.txt";
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--input_file", input_file_name]);
        let input_file = CLIParser::extract_input_file_argument(&matches).unwrap();
        assert_eq!(input_file.file_name().unwrap(), input_file_name);
    }

    #[test]
    fn parse_texts_and_input_file_conflict() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let command = CLIParser::register_texts_argument(command);
        let result =
            command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "abc", "-f", "input.txt"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::ArgumentConflict);
        } else {
            panic!("Conflicting inputs not detected");
        }
    }

    #[test]
    fn parse_missing_input() {
        let command = Command::new("test");
        let command = CLIParser::register_input_file_argument(command);
        let command = CLIParser::register_texts_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        } else {
            panic!("Missing input not detected");
        }
    }

    #[test]
    fn parse_symbol_unit_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_symbol_unit_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--unit", "byte"]);
        let actual = CLIParser::extract_symbol_unit_argument(&matches);
        assert_eq!(actual, SymbolUnit::Byte);
    }

    #[test]
    fn parse_symbol_unit_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_symbol_unit_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--unit", "word"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for unit not detected");
        }
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        assert_eq!(actual, 5);
    }

    #[test]
    fn parse_tree_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_tree_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--tree"]);
        assert!(CLIParser::extract_tree_argument(&matches));
    }

    #[test]
    fn parse_required_arguments_only() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, "hello", "-t", "8"]);
        assert_eq!(arguments.texts, ["hello"], "texts do not match");
        assert!(arguments.input_file.is_none(), "input file must be unset");
        assert_eq!(
            arguments.symbol_unit,
            SymbolUnit::Char,
            "symbol_unit does not match"
        );
        assert_eq!(
            arguments.number_of_threads, 8,
            "number_of_threads does not match"
        );
        assert!(!arguments.show_tree, "show_tree does not match");
    }
}
