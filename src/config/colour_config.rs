use crate::core::palette::coefficients::ColourCoefficients;
use log::{info, warn};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.txt";

const COEFFICIENT_COUNT: usize = 6;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    MissingValues { found: usize },
    InvalidValue { position: usize, token: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not open config file: {}", err),
            Self::MissingValues { found } => write!(
                f,
                "invalid config file format: expected {} integers, found {}",
                COEFFICIENT_COUNT, found
            ),
            Self::InvalidValue { position, token } => write!(
                f,
                "invalid config file format: value {} ({:?}) is not a non-negative integer",
                position, token
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Reads `r_mult g_mult b_mult r_shift g_shift b_shift` from a file.
pub fn read_colour_config(path: impl AsRef<Path>) -> Result<ColourCoefficients, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_colour_config(&contents)
}

/// Parses the first six whitespace-separated integers; anything after them is ignored.
pub fn parse_colour_config(contents: &str) -> Result<ColourCoefficients, ConfigError> {
    let mut values = [0u32; COEFFICIENT_COUNT];
    let mut found = 0;

    for (index, token) in contents.split_whitespace().take(COEFFICIENT_COUNT).enumerate() {
        values[index] = token.parse().map_err(|_| ConfigError::InvalidValue {
            position: index + 1,
            token: token.to_string(),
        })?;
        found += 1;
    }

    if found < COEFFICIENT_COUNT {
        return Err(ConfigError::MissingValues { found });
    }

    let [r_mult, g_mult, b_mult, r_shift, g_shift, b_shift] = values;

    Ok(ColourCoefficients {
        r_mult,
        g_mult,
        b_mult,
        r_shift,
        g_shift,
        b_shift,
    })
}

/// Reads the colour configuration, falling back to the defaults on any error.
#[must_use]
pub fn load_colour_config(path: impl AsRef<Path>) -> ColourCoefficients {
    let path = path.as_ref();

    match read_colour_config(path) {
        Ok(coefficients) => {
            info!("loaded colour configuration from {}", path.display());
            coefficients
        }
        Err(err) => {
            warn!("{}: {}; using default colour configuration", path.display(), err);
            ColourCoefficients::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn parses_six_integers() {
        let coefficients = parse_colour_config("9 2 5\n0 0 3\n").unwrap();

        assert_eq!(
            coefficients,
            ColourCoefficients {
                r_mult: 9,
                g_mult: 2,
                b_mult: 5,
                r_shift: 0,
                g_shift: 0,
                b_shift: 3,
            }
        );
    }

    #[test]
    fn trailing_content_is_ignored() {
        assert!(parse_colour_config("1 2 3 4 5 6 seven").is_ok());
    }

    #[test]
    fn too_few_values_is_an_error() {
        let result = parse_colour_config("1 2 3");

        assert!(matches!(result, Err(ConfigError::MissingValues { found: 3 })));
    }

    #[test]
    fn empty_file_is_an_error() {
        assert!(matches!(
            parse_colour_config(""),
            Err(ConfigError::MissingValues { found: 0 })
        ));
    }

    #[test]
    fn non_integer_value_is_an_error() {
        let result = parse_colour_config("1 2 x 4 5 6");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { position: 3, ref token }) if token == "x"
        ));
    }

    #[test]
    fn negative_value_is_an_error() {
        assert!(matches!(
            parse_colour_config("1 2 3 -4 5 6"),
            Err(ConfigError::InvalidValue { position: 4, .. })
        ));
    }

    #[test]
    fn reads_from_file() {
        let file = config_file("6 1 4 1 2 1");

        assert_eq!(read_colour_config(file.path()).unwrap(), ColourCoefficients::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_colour_config(dir.path().join("missing.txt"));

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn load_falls_back_to_defaults_on_malformed_file() {
        let file = config_file("not a config");

        assert_eq!(load_colour_config(file.path()), ColourCoefficients::default());
    }

    #[test]
    fn load_falls_back_to_defaults_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            load_colour_config(dir.path().join("config.txt")),
            ColourCoefficients::default()
        );
    }

    #[test]
    fn load_uses_file_values_when_valid() {
        let file = config_file("9 2 5 0 0 0");

        assert_eq!(load_colour_config(file.path()).g_mult, 2);
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            format!("{}", ConfigError::MissingValues { found: 2 }),
            "invalid config file format: expected 6 integers, found 2"
        );
    }
}
