use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug)]
pub enum MenuError {
    Io(io::Error),
    InvalidInput { input: String },
    InvalidSelection { choice: u32 },
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read menu choice: {}", e),
            Self::InvalidInput { input } => {
                write!(f, "expected a menu number, got {:?}", input)
            }
            Self::InvalidSelection { choice } => write!(
                f,
                "menu choice {} is not between 1 and {}",
                choice,
                FractalKinds::ALL.len()
            ),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

pub fn write_menu<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Choose a fractal:")?;

    for (index, kind) in FractalKinds::ALL.iter().enumerate() {
        writeln!(writer, "  {}. {}", index + 1, kind)?;
    }

    write!(writer, "> ")?;
    writer.flush()
}

/// Reads the first whitespace-separated token of a line as a menu number.
pub fn parse_menu_choice(line: &str) -> Result<FractalKinds, MenuError> {
    let token = line.split_whitespace().next().unwrap_or_default();
    let choice: u32 = token.parse().map_err(|_| MenuError::InvalidInput {
        input: line.trim().to_string(),
    })?;

    FractalKinds::from_menu_choice(choice).ok_or(MenuError::InvalidSelection { choice })
}

/// Shows the menu and reads one line. There is no retry: an invalid answer
/// is returned as an error and the caller decides whether to exit.
pub fn prompt_fractal_choice<R, W>(reader: &mut R, writer: &mut W) -> Result<FractalKinds, MenuError>
where
    R: BufRead,
    W: Write,
{
    write_menu(writer)?;

    let mut line = String::new();
    reader.read_line(&mut line)?;

    parse_menu_choice(&line)
}
