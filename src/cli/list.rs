//! List command: shows the stored jump data

use anyhow::Result;
use clap::ValueEnum;

use super::output::Output;
use crate::storage::QuickJump;

/// Part of the jump data to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKey {
    #[value(name = "lastPath", alias = "last")]
    LastPath,
    #[value(name = "prevPath", alias = "prev")]
    PrevPath,
    #[value(name = "namedPaths", alias = "named")]
    NamedPaths,
    #[value(name = "histories", alias = "history")]
    Histories,
}

pub fn run(output: &Output, jumper: &QuickJump, key: Option<ListKey>, with_id: bool) -> Result<()> {
    let doc = jumper.document();

    match key {
        None if with_id => output.data(&doc),
        None => output.data(&doc.into_list()),

        Some(ListKey::LastPath) => single(output, "lastPath", &doc.last_path),
        Some(ListKey::PrevPath) => single(output, "prevPath", &doc.prev_path),

        Some(ListKey::NamedPaths) => {
            if output.is_json() {
                output.data(&doc.named_paths);
            } else if doc.named_paths.is_empty() {
                println!("No named paths. Add one with 'qj set <name> [path]'.");
            } else {
                for (name, path) in &doc.named_paths {
                    output.row(&[name.as_str(), path.as_str()]);
                }
            }
        }

        Some(ListKey::Histories) => {
            if output.is_json() {
                if with_id {
                    output.data(&doc.histories);
                } else {
                    output.data(&doc.histories.paths());
                }
            } else {
                for entry in doc.histories.iter() {
                    if with_id {
                        output.row(&[entry.id.as_str(), entry.path.as_str()]);
                    } else {
                        output.row(&[entry.path.as_str()]);
                    }
                }
            }
        }
    }

    Ok(())
}

fn single(output: &Output, key: &str, value: &str) {
    if output.is_json() {
        let mut map = serde_json::Map::new();
        map.insert(key.to_string(), value.into());
        output.data(&map);
    } else {
        println!("{}", value);
    }
}
