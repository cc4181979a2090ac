use std::fs;

use anyhow::{bail, Context, Result};
use spdlog::{info, warn};

use crate::config::Config;
use crate::indexes::{build_indexes, Catalog, ChronoEntry};
use crate::post::Post;
use crate::post_list::PostList;

/// Runs the whole indexing batch: discover post files, parse each one,
/// build the two index views and write them to the output directory.
/// Per-file parse failures are reported and skipped; an empty batch is
/// a terminal error and nothing is written.
pub fn run_index(config: &Config) -> Result<()> {
    let posts_dir = &config.paths.posts_dir;
    let post_list = PostList {
        root_dir: posts_dir.clone(),
    };
    let files = post_list.retrieve_files().with_context(|| {
        format!(
            "Could not read posts directory {} (create it and add your .txt post files)",
            posts_dir.display()
        )
    })?;

    if files.is_empty() {
        bail!("No .txt post files found in {}", posts_dir.display());
    }
    info!("Found {} post file(s)", files.len());

    let mut posts = vec![];
    for file in &files {
        match Post::from_file(file) {
            Ok(post) => {
                info!("Parsed {}: '{}'", file.display(), post.title);
                posts.push(post);
            }
            Err(err) => warn!("Skipping {}: {}", file.display(), err),
        }
    }

    if posts.is_empty() {
        bail!("None of the {} post file(s) could be parsed", files.len());
    }

    info!("Generating indexes for {} post(s)", posts.len());
    let (chrono, catalog) = build_indexes(posts);

    write_indexes(config, &chrono, &catalog)
}

fn write_indexes(config: &Config, chrono: &[ChronoEntry], catalog: &Catalog) -> Result<()> {
    let output_dir = &config.paths.output_dir;

    let chrono_path = output_dir.join("chrono.json");
    let chrono_json = serde_json::to_string_pretty(chrono)?;
    fs::write(&chrono_path, chrono_json)
        .with_context(|| format!("Error writing {}", chrono_path.display()))?;
    info!("Created {} ({} date(s))", chrono_path.display(), chrono.len());

    let catalog_path = output_dir.join("catalog.json");
    let catalog_json = serde_json::to_string_pretty(catalog)?;
    fs::write(&catalog_path, catalog_json)
        .with_context(|| format!("Error writing {}", catalog_path.display()))?;
    info!(
        "Created {} ({} categor{})",
        catalog_path.display(),
        catalog.len(),
        if catalog.len() == 1 { "y" } else { "ies" }
    );

    Ok(())
}
