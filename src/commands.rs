//! CLI command implementations

use anyhow::Context;
use apexmap_core::{docs, Difficulty, TopicGraph};
use std::path::{Path, PathBuf};

fn load(manifest: &Path) -> anyhow::Result<TopicGraph> {
    TopicGraph::load_path(manifest)
        .with_context(|| format!("failed to load manifest {}", manifest.display()))
}

pub fn validate(manifest: PathBuf) -> anyhow::Result<()> {
    let graph = load(&manifest)?;
    let info = graph.info();
    println!(
        "{} v{}: {} topics, {} edges",
        info.name,
        info.version,
        graph.topic_count(),
        graph.edge_count()
    );
    Ok(())
}

pub fn show(manifest: PathBuf, name: String) -> anyhow::Result<()> {
    let graph = load(&manifest)?;
    let topic = graph.get_by_name(&name)?;
    println!("{}", serde_json::to_string_pretty(topic)?);
    Ok(())
}

pub fn path(manifest: PathBuf, name: String) -> anyhow::Result<()> {
    let graph = load(&manifest)?;
    for (i, topic) in graph.recommended_path(&name)?.iter().enumerate() {
        println!("{}. {} [{}]", i + 1, topic.name, topic.difficulty);
    }
    Ok(())
}

pub fn list(
    manifest: PathBuf,
    difficulty: Option<String>,
    tag: Option<String>,
    use_case: Option<String>,
) -> anyhow::Result<()> {
    let graph = load(&manifest)?;
    let difficulty = match difficulty {
        Some(d) => Some(Difficulty::from_str(&d).ok_or_else(|| {
            anyhow::anyhow!("unknown difficulty `{d}`; expected beginner, intermediate, or advanced")
        })?),
        None => None,
    };

    let topics = graph.filter(|topic| {
        difficulty.map_or(true, |d| topic.difficulty == d)
            && tag.as_deref().map_or(true, |t| topic.has_tag(t))
            && use_case.as_deref().map_or(true, |u| topic.has_use_case(u))
    });
    for topic in topics {
        println!("{} [{}] {}", topic.name, topic.difficulty, topic.file);
    }
    Ok(())
}

pub fn doc(manifest: PathBuf, name: String) -> anyhow::Result<()> {
    let graph = load(&manifest)?;
    let topic = graph.get_by_name(&name)?;

    // Bodies resolve relative to the manifest's directory.
    let root = manifest.parent().unwrap_or_else(|| Path::new("."));
    tracing::debug!("corpus root: {}", root.display());

    let body = docs::read_body(root, topic)
        .with_context(|| format!("failed to read body for `{}`", topic.name))?;
    print!("{}", body);
    Ok(())
}
