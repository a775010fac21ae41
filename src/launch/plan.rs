//! Command-line construction for the Java import tools

use crate::classpath::Classpath;
use crate::cli::LoadCommand;
use crate::config::Settings;
use serde::Serialize;

/// Java import tools this launcher knows how to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTool {
    /// HPRD flat-file importer
    Hprd,
    /// SIF interaction importer
    Sif,
}

impl ImportTool {
    /// Fully qualified class name of the import tool's entry point
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Hprd => "org.mskcc.netbox.script.ImportHprd",
            Self::Sif => "org.mskcc.netbox.script.ImportSif",
        }
    }
}

/// The exact external command the launcher will run
///
/// `java -classpath <classpath> <import class> <tool arguments>`, held as
/// a program plus argument vector so nothing ever passes through a shell.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchPlan {
    /// Program to spawn (the configured JVM launcher)
    pub program: String,
    /// Arguments handed to the program, in order
    pub args: Vec<String>,
}

impl LaunchPlan {
    /// Build the plan for one import tool invocation
    #[must_use]
    pub fn new(
        settings: &Settings,
        classpath: &Classpath,
        tool: ImportTool,
        tool_args: &[String],
    ) -> Self {
        let mut args = vec![
            "-classpath".to_owned(),
            classpath.as_str().to_owned(),
            tool.class().to_owned(),
        ];
        args.extend(tool_args.iter().cloned());

        Self {
            program: settings.java.clone(),
            args,
        }
    }

    /// Build the plan for a parsed CLI subcommand
    #[must_use]
    pub fn for_command(settings: &Settings, classpath: &Classpath, command: &LoadCommand) -> Self {
        match *command {
            LoadCommand::LoadHprd {
                ref interactions_file,
            } => Self::new(
                settings,
                classpath,
                ImportTool::Hprd,
                &[interactions_file.clone()],
            ),
            LoadCommand::LoadSif {
                ref interactions_file,
                ref data_source,
            } => Self::new(
                settings,
                classpath,
                ImportTool::Sif,
                &[interactions_file.clone(), data_source.clone()],
            ),
        }
    }
}
