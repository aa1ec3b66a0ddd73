use anyhow::{Result, bail};
use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;
use std::path::PathBuf;
use std::time::SystemTime;
use zhuanyu_config::expand_user_path;
use zhuanyu_engine::{BlockContent, RecipeStore, decode, encode, io};

/// Raw recipe text together with where it was read from
pub struct LoadedRecipe {
    pub markdown: String,
    pub path: PathBuf,
}

/// Read a recipe given either a file name inside the store or a path.
///
/// Inputs that contain `/` once `~` and variables are expanded are treated
/// as paths; anything else is looked up in the store. Unreadable inputs give
/// empty markdown.
pub fn load_recipe(store: &RecipeStore, input: &str) -> LoadedRecipe {
    let path = expand_user_path(input);
    if path.to_string_lossy().contains('/') {
        let markdown = io::read_path(&path).unwrap_or_else(|e| {
            log::debug!("Could not read {}: {e}", path.display());
            String::new()
        });
        return LoadedRecipe { markdown, path };
    }

    LoadedRecipe {
        markdown: store.read(input),
        path: store.path_for(input),
    }
}

fn load_non_empty(store: &RecipeStore, input: &str) -> Result<LoadedRecipe> {
    let loaded = load_recipe(store, input);
    if loaded.markdown.is_empty() {
        bail!("No markdown found at {}", loaded.path.display());
    }
    Ok(loaded)
}

fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn list(store: &RecipeStore, out: &mut impl Write) -> Result<()> {
    store.ensure_directory();
    let mut files = store.list_files();
    files.sort();

    if files.is_empty() {
        writeln!(out, "No recipes found in {}", store.root().display())?;
        return Ok(());
    }

    writeln!(out, "Recipes in {}:", store.root().display())?;
    for name in files {
        let document = decode(&store.read(&name));
        let updated = store
            .modification_time(&name)
            .map(format_timestamp)
            .unwrap_or_else(|| "unknown".to_string());
        writeln!(out, "- {name} | {} | updated {updated}", document.title)?;
    }
    Ok(())
}

pub fn show(store: &RecipeStore, input: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let loaded = load_non_empty(store, input)?;
    let document = decode(&loaded.markdown);

    if json {
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Title: {}", document.title)?;
    writeln!(out, "Blocks: {}", document.blocks.len())?;

    let summary = document
        .kind_counts()
        .into_iter()
        .map(|(kind, count)| format!("{}={count}", kind.display_name()))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "Block types: {summary}")?;

    for (index, block) in document.blocks.iter().enumerate() {
        writeln!(out, "Block {}: {}", index + 1, block.kind().display_name())?;
        write_block_details(&block.content, out)?;
    }
    Ok(())
}

fn write_block_details(content: &BlockContent, out: &mut impl Write) -> Result<()> {
    let mut detail = |label: &str, value: &str| -> std::io::Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        writeln!(out, "  {label}: {value}")
    };

    match content {
        BlockContent::Hero(hero) => {
            detail("servings", &hero.servings)?;
            detail("time", &hero.total_time)?;
            detail("nutrition", &hero.nutrition)?;
            detail("image", &hero.image_name)?;
        }
        BlockContent::Ingredients(ingredients) => {
            detail("ingredients", &ingredients.items.len().to_string())?;
        }
        BlockContent::Step(step) => {
            detail("title", &step.title)?;
            if let Some(minutes) = step.duration_minutes {
                detail("time", &format!("{minutes}m"))?;
            }
            if let Some(heat) = step.heat {
                detail("heat", heat.as_str())?;
            }
            detail("icon", step.icon.as_deref().unwrap_or_default())?;
            detail("text", &step.text)?;
        }
        BlockContent::Note(note) => {
            detail("text", &note.text)?;
        }
    }
    Ok(())
}

pub fn cat(store: &RecipeStore, input: &str, out: &mut impl Write) -> Result<()> {
    let loaded = load_non_empty(store, input)?;
    writeln!(out, "{}", loaded.markdown)?;
    Ok(())
}

pub fn new_recipe(store: &RecipeStore, title: &str, out: &mut impl Write) -> Result<()> {
    let title = title.trim();
    if title.is_empty() {
        bail!("Title cannot be empty");
    }

    let Some(name) = store.create_new(title) else {
        bail!("Could not create a recipe in {}", store.root().display());
    };
    writeln!(out, "Created {name} in {}", store.root().display())?;
    Ok(())
}

pub fn sample(store: &RecipeStore, out: &mut impl Write) -> Result<()> {
    if store.bootstrap_sample_if_needed().is_none() && store.list_files().is_empty() {
        bail!("Could not write the sample recipe to {}", store.root().display());
    }
    writeln!(out, "Sample ensured in {}", store.root().display())?;
    Ok(())
}

/// Report whether re-encoding the decoded recipe reproduces the file.
///
/// A difference is not an error: hand-written files are allowed to deviate
/// from the canonical layout.
pub fn validate(store: &RecipeStore, input: &str, out: &mut impl Write) -> Result<()> {
    let loaded = load_non_empty(store, input)?;
    let reencoded = encode(&decode(&loaded.markdown));

    let name = loaded
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());

    if loaded.markdown.trim() == reencoded.trim() {
        writeln!(out, "Round-trip OK for {name}")?;
    } else {
        log::debug!("Re-encoded {name}:\n{reencoded}");
        writeln!(out, "Round-trip differs for {name}")?;
        writeln!(out, "Use 'cat' to compare the encoded output if needed.")?;
    }
    Ok(())
}
