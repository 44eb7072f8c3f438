use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    Decode { remainder: String, decoded: usize },
    UnknownSymbol { position: usize },
    InvalidBitCharacter { character: char, position: usize },
    EmptyCode,
    DuplicateSymbol { index: usize },
    PrefixConflict { code: String, prefix: String },
    UnableToOpenInputFileForReading(String, std::io::Error),
    InputIsNotValidUtf8,
    FailedToWriteOutput(std::io::Error),
    WorkerFailed(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "Cannot build a static code over an empty input sequence")
            }
            Self::Decode { remainder, decoded } => {
                write!(
                    f,
                    "Bits '{}' left undecodable after {} symbols",
                    remainder, decoded
                )
            }
            Self::UnknownSymbol { position } => {
                write!(
                    f,
                    "Symbol at position {} is not present in the code table",
                    position
                )
            }
            Self::InvalidBitCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Invalid bit character '{}' at position {}. Expected '0' or '1'.",
                    character, position
                )
            }
            Self::EmptyCode => write!(f, "Code words must contain at least one bit"),
            Self::DuplicateSymbol { index } => {
                write!(f, "Symbol of entry {} already has a code word", index)
            }
            Self::PrefixConflict { code, prefix } => {
                write!(f, "Code word '{}' is a prefix of '{}'", prefix, code)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::InputIsNotValidUtf8 => {
                write!(f, "Input is not valid UTF-8, use the byte unit instead")
            }
            Self::FailedToWriteOutput(error) => write!(f, "Failed to write output: {}", error),
            Self::WorkerFailed(index) => {
                write!(f, "Worker encoding input {} terminated without a result", index)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToOpenInputFileForReading(_, error) => Some(error),
            Self::FailedToWriteOutput(error) => Some(error),
            _ => None,
        }
    }
}
