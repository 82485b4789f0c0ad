use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "warehouse", version)]
#[command(about = "Browse warehouse stock, search items and place orders", long_about = None)]
pub struct Cli {
    /// Inventory file (JSON) to use instead of the bundled stock
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Store the --data path in config.json for later sessions
    #[arg(long, requires = "data")]
    pub remember: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["warehouse"]).unwrap();
        assert!(cli.data.is_none());
        assert!(!cli.verbose);
        assert!(!cli.no_color);
        assert!(!cli.remember);
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::try_parse_from([
            "warehouse",
            "-d",
            "stock.json",
            "--config-dir",
            "/tmp/wh",
            "-v",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("stock.json")));
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/wh")));
        assert!(cli.verbose);
        assert!(cli.no_color);
    }

    #[test]
    fn remember_requires_a_data_file() {
        assert!(Cli::try_parse_from(["warehouse", "--remember"]).is_err());
        let cli = Cli::try_parse_from(["warehouse", "--remember", "-d", "stock.json"]).unwrap();
        assert!(cli.remember);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["warehouse", "laptop"]).is_err());
    }
}
