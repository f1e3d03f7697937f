use argh::FromArgs;
use base::options::HeapOptions;
use std::fs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgumentParseError {
    #[error("failed to read the config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse the TOML heap options: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(FromArgs, Debug)]
/// keep the largest records of a stream of `value [label]` lines
pub struct Arguments {
    /// maximum number of records to keep, overrides the config file
    #[argh(option, short = 'c')]
    pub capacity: Option<u32>,

    /// heap options in a TOML file
    #[argh(option)]
    pub config: Option<String>,

    /// print the records as a JSON array
    #[argh(switch)]
    pub json: bool,

    /// verbose
    #[argh(switch, short = 'v')]
    pub verbose: bool,

    /// input file, stdin when absent
    #[argh(positional)]
    pub file: Option<String>,
}

impl Arguments {
    pub fn get_heap_options(&self) -> Result<HeapOptions, ArgumentParseError> {
        let mut options = match &self.config {
            Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
            None => HeapOptions::default(),
        };
        if let Some(capacity) = self.capacity {
            options.capacity = capacity;
        }
        Ok(options)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn capacity_overrides_defaults() {
        let args =
            Arguments::from_args(&["topk"], &["-c", "3", "--json", "input.txt"]).unwrap();
        assert!(args.json);
        assert_eq!(args.file.as_deref(), Some("input.txt"));
        let options = args.get_heap_options().unwrap();
        assert_eq!(options.capacity, 3);
        assert!(options.reject_unordered);
    }

    #[test]
    fn missing_config_file() {
        let args =
            Arguments::from_args(&["topk"], &["--config", "/nonexistent/topk.toml"]).unwrap();
        assert!(matches!(
            args.get_heap_options(),
            Err(ArgumentParseError::Read(_))
        ));
    }
}
