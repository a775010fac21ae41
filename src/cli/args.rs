use clap::{Parser, Subcommand};

/// Command-line arguments for netbox-loader
#[derive(Parser, Debug, Clone)]
#[command(name = "netbox-loader")]
#[command(about = "Launcher for the NetBox Java import tools")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// JVM launcher executable used to run the import tools
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "NETBOX_JAVA",
        default_value = "java",
        global = true
    )]
    pub java: String,

    /// Print the command that would run instead of executing it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Output format for --dry-run: shell or json
    #[arg(
        long = "output-format",
        value_name = "FORMAT",
        default_value = "shell",
        requires = "dry_run",
        global = true
    )]
    pub output_format: String,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Import tool to launch
    #[command(subcommand)]
    pub command: LoadCommand,
}

/// The import tools exposed as subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum LoadCommand {
    /// Import an HPRD interactions flat file
    LoadHprd {
        /// Path to the HPRD interactions file
        #[arg(value_name = "INTERACTIONS_FILE")]
        interactions_file: String,
    },

    /// Import a SIF interactions file under a named data source
    LoadSif {
        /// Path to the interactions file in SIF format
        #[arg(value_name = "INTERACTIONS_FILE")]
        interactions_file: String,

        /// Data source name recorded for the imported interactions
        #[arg(value_name = "DATA_SOURCE_NAME")]
        data_source: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_hprd_takes_exactly_one_argument() {
        Cli::try_parse_from(["netbox-loader", "load-hprd"]).unwrap_err();
        Cli::try_parse_from(["netbox-loader", "load-hprd", "a.txt", "extra"]).unwrap_err();

        let cli = Cli::try_parse_from(["netbox-loader", "load-hprd", "a.txt"]).unwrap();
        match cli.command {
            LoadCommand::LoadHprd { interactions_file } => {
                assert_eq!(interactions_file, "a.txt");
            }
            LoadCommand::LoadSif { .. } => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn load_sif_takes_exactly_two_arguments() {
        Cli::try_parse_from(["netbox-loader", "load-sif", "net.sif"]).unwrap_err();
        Cli::try_parse_from(["netbox-loader", "load-sif", "net.sif", "SRC", "extra"])
            .unwrap_err();

        let cli = Cli::try_parse_from(["netbox-loader", "load-sif", "net.sif", "CELL_MAP"]).unwrap();
        match cli.command {
            LoadCommand::LoadSif {
                interactions_file,
                data_source,
            } => {
                assert_eq!(interactions_file, "net.sif");
                assert_eq!(data_source, "CELL_MAP");
            }
            LoadCommand::LoadHprd { .. } => panic!("parsed the wrong subcommand"),
        }
    }

    #[test]
    fn java_defaults_and_overrides() {
        let cli = Cli::try_parse_from(["netbox-loader", "load-hprd", "a.txt"]).unwrap();
        assert_eq!(cli.java, "java");
        assert!(!cli.dry_run);

        let cli = Cli::try_parse_from([
            "netbox-loader",
            "--java",
            "/usr/bin/java17",
            "load-hprd",
            "a.txt",
        ])
        .unwrap();
        assert_eq!(cli.java, "/usr/bin/java17");
    }

    #[test]
    fn output_format_requires_dry_run() {
        Cli::try_parse_from([
            "netbox-loader",
            "--output-format",
            "json",
            "load-hprd",
            "a.txt",
        ])
        .unwrap_err();

        let cli = Cli::try_parse_from([
            "netbox-loader",
            "--dry-run",
            "--output-format",
            "json",
            "load-hprd",
            "a.txt",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.output_format, "json");
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli =
            Cli::try_parse_from(["netbox-loader", "load-hprd", "a.txt", "--dry-run"]).unwrap();
        assert!(cli.dry_run);
    }
}
