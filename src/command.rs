//! The download command, minus argument parsing
//!
//! Glues the download core together the way a CLI runs it: check the user
//! config, resolve params from flags, fetch, write files and metadata, then
//! report where everything went. Output goes to caller-provided sinks.

use crate::config::UserConfig;
use crate::download::{Download, DownloadParams, DownloadWriter};
use crate::error::{Error, Result};
use crate::flags::FlagSource;
use std::io::Write;
use std::path::PathBuf;

/// Binary name used in guidance messages when none is given
pub const DEFAULT_BINARY_NAME: &str = "exercism";

/// Runs downloads for one user configuration
#[derive(Clone, Debug)]
pub struct DownloadCommand<'a> {
    config: &'a UserConfig,
    binary_name: &'a str,
}

impl<'a> DownloadCommand<'a> {
    /// Create a command bound to `config`
    pub fn new(config: &'a UserConfig) -> Self {
        Self {
            config,
            binary_name: DEFAULT_BINARY_NAME,
        }
    }

    /// Name the binary in guidance messages
    pub fn with_binary_name(mut self, binary_name: &'a str) -> Self {
        self.binary_name = binary_name;
        self
    }

    /// Check the user config before doing any work
    ///
    /// A missing token gets the welcome message with the settings URL; a
    /// missing workspace or API URL asks to re-run `configure`.
    pub fn validate_config(&self) -> Result<()> {
        if self.config.token.is_empty() {
            return Err(Error::config(
                format!(
                    "\n\n    Welcome!\n\n    To get started, you need to configure the tool with your API token.\n    Find your token at\n\n        {}\n\n    Then run the configure command:\n\n        {} configure --token=YOUR_TOKEN\n\n",
                    self.config.settings_url(),
                    self.binary_name
                ),
                Some("token"),
            ));
        }
        if self.config.workspace.is_empty() || self.config.apibaseurl.is_empty() {
            let key = if self.config.workspace.is_empty() {
                "workspace"
            } else {
                "apibaseurl"
            };
            return Err(Error::config(
                format!(
                    "\n\n    Please re-run the configure command to define where\n    to download the exercises.\n\n        {} configure\n",
                    self.binary_name
                ),
                Some(key),
            ));
        }
        Ok(())
    }

    /// Download the solution selected by `flags`
    ///
    /// Prints a header to `err` and the exercise directory to `out`, and
    /// returns that directory.
    pub async fn run<O, E>(
        &self,
        flags: &impl FlagSource,
        out: &mut O,
        err: &mut E,
    ) -> Result<PathBuf>
    where
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        self.validate_config()?;

        let params = DownloadParams::from_flags(self.config, flags)?;
        let download = Download::fetch(params).await?;
        let writer = DownloadWriter::new(download)?;

        writer.write_solution_files().await?;
        writer.write_metadata().await?;

        let dir = writer.exercise().metadata_dir();
        print_result(&dir, out, err)?;
        Ok(dir)
    }
}

fn print_result<O, E>(dir: &std::path::Path, out: &mut O, err: &mut E) -> Result<()>
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    write!(err, "\nDownloaded to\n")?;
    writeln!(out, "{}", dir.display())?;
    Ok(())
}
