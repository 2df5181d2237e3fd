use clap::Args;
use serde::Serialize;

use themeboy::manifest::{ContentSource, MANIFEST};

use super::CmdResult;

#[derive(Args)]
pub struct ManifestArgs {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestOutput {
    pub command: &'static str,
    pub entries: Vec<ManifestEntryOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntryOutput {
    pub target: &'static str,
    pub source: &'static str,
    pub template: &'static str,
}

pub fn run(_args: ManifestArgs) -> CmdResult<ManifestOutput> {
    let entries = MANIFEST
        .iter()
        .map(|spec| ManifestEntryOutput {
            target: spec.target,
            source: match spec.source {
                ContentSource::Raw(_) => "raw",
                ContentSource::Templated(_) => "templated",
            },
            template: spec.source.template(),
        })
        .collect();

    Ok((
        ManifestOutput {
            command: "manifest",
            entries,
        },
        0,
    ))
}
