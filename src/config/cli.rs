use crate::config::{toml_config::TomlConfig, AdapterConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "wb")]
#[command(about = "Create folders and upload files through WaterButler")]
pub struct CliArgs {
    /// TOML configuration file; WB_HOST, WATERBUTLER_OSF_TOKEN and OSF_NODE are used when absent
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Parent folder path, overriding the configured one
    #[arg(long, global = true)]
    pub parent: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a folder under the parent folder
    Mkdir { name: String },

    /// Upload a local file into the parent folder
    Upload {
        file: PathBuf,

        /// Remote file name, defaults to the local file name
        #[arg(long)]
        name: Option<String>,
    },
}

impl CliArgs {
    pub fn adapter_config(&self) -> Result<AdapterConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_adapter_config()?,
            None => AdapterConfig::from_env()?,
        };

        if let Some(parent) = &self.parent {
            config = config.with_parent_folder(parent.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mkdir() {
        let args = CliArgs::parse_from(["wb", "--parent", "/abc/", "mkdir", "photos"]);
        assert_eq!(args.parent.as_deref(), Some("/abc/"));
        assert!(matches!(args.command, Command::Mkdir { ref name } if name == "photos"));
    }

    #[test]
    fn test_parse_upload_with_global_flag_after_subcommand() {
        let args = CliArgs::parse_from([
            "wb", "upload", "./notes.txt", "--name", "remote.txt", "--verbose",
        ]);
        assert!(args.verbose);
        match args.command {
            Command::Upload { file, name } => {
                assert_eq!(file, PathBuf::from("./notes.txt"));
                assert_eq!(name.as_deref(), Some("remote.txt"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
