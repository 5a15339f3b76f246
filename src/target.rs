use crate::error::{NextVersionError, Result};
use semver::Version;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;

/// Where and how the computed version is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Plain version string on stdout
    Version,
    /// JSON object on stdout
    Json,
    /// Key-value pairs appended to the file named by $GITHUB_OUTPUT
    GithubAction,
}

impl OutputTarget {
    /// Parse a target name from configuration or the command line
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "version" => Ok(OutputTarget::Version),
            "json" => Ok(OutputTarget::Json),
            "github-action" => Ok(OutputTarget::GithubAction),
            other => Err(NextVersionError::config(format!(
                "invalid target '{}' (expected version, json or github-action)",
                other
            ))),
        }
    }
}

#[derive(Serialize)]
struct JsonOutput {
    version: String,
    #[serde(rename = "hasNextVersion")]
    has_next_version: bool,
}

/// Write the computed version to the selected target.
///
/// The prefix is purely textual ("v" turns 1.2.3 into v1.2.3) and is
/// applied to every target the same way.
pub fn write_output(
    version: &Version,
    has_next_version: bool,
    target: OutputTarget,
    prefix: &str,
) -> Result<()> {
    let rendered = format!("{}{}", prefix, version);

    match target {
        OutputTarget::Version => {
            println!("{}", rendered);
        }
        OutputTarget::Json => {
            let output = JsonOutput {
                version: rendered,
                has_next_version,
            };
            let json = serde_json::to_string(&output)
                .map_err(|e| NextVersionError::output(e.to_string()))?;
            println!("{}", json);
        }
        OutputTarget::GithubAction => {
            let path = std::env::var("GITHUB_OUTPUT").map_err(|_| {
                NextVersionError::output("GITHUB_OUTPUT environment variable is not set")
            })?;

            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "version={}", rendered)?;
            writeln!(file, "hasNextVersion={}", has_next_version)?;
        }
    }

    Ok(())
}
