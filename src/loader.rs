use crate::models::ContentInput;
use anyhow::{Context, Result, bail};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use serde::Deserialize;
use std::fs;
use std::path::Path;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("meta description selector should be valid")
});
static META_KEYWORDS_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='keywords']").expect("meta keywords selector should be valid")
});
static OG_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[property='og:description']")
        .expect("og:description selector should be valid")
});
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("body selector should be valid"));

/// A document paired with where it came from, for report display.
#[derive(Debug, Clone)]
pub struct Document {
    pub source: String,
    pub input: ContentInput,
}

/// Builds a [`ContentInput`] from a full HTML page: title tag, meta
/// description/keywords, og:description as excerpt, body markup as
/// content. Head text never leaks into the word count because only the
/// body is kept.
pub fn input_from_html(html: &str) -> ContentInput {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let meta_description = document
        .select(&META_DESC_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let keywords = document
        .select(&META_KEYWORDS_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|content| {
            content
                .split(',')
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let excerpt = document
        .select(&OG_DESC_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let content = document
        .select(&BODY_SELECTOR)
        .next()
        .map(|body| body.inner_html())
        .unwrap_or_else(|| html.to_string());

    ContentInput {
        title,
        content,
        excerpt,
        meta_description,
        keywords,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocuments {
    Many(Vec<ContentInput>),
    One(Box<ContentInput>),
}

fn load_json_file(path: &Path) -> Result<Vec<Document>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let parsed: JsonDocuments = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse JSON input: {}", path.display()))?;

    let inputs = match parsed {
        JsonDocuments::Many(list) => list,
        JsonDocuments::One(input) => vec![*input],
    };

    Ok(inputs
        .into_iter()
        .enumerate()
        .map(|(idx, input)| Document {
            source: if idx == 0 {
                path.display().to_string()
            } else {
                format!("{}#{}", path.display(), idx)
            },
            input,
        })
        .collect())
}

fn load_html_file(path: &Path) -> Result<Document> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    Ok(Document {
        source: path.display().to_string(),
        input: input_from_html(&contents),
    })
}

fn scan_directory(dir: &Path, documents: &mut Vec<Document>) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .collect::<std::io::Result<_>>()
        .with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            scan_directory(&path, documents)?;
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            match ext.to_lowercase().as_str() {
                "json" => documents.extend(load_json_file(&path)?),
                "html" | "htm" => documents.push(load_html_file(&path)?),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Loads documents from a file or directory. Directories are scanned
/// recursively in path order; only `.json`, `.html` and `.htm` files are
/// picked up.
pub fn load_path(path: &Path) -> Result<Vec<Document>> {
    if !path.exists() {
        bail!("Input path does not exist: {}", path.display());
    }

    if path.is_dir() {
        let mut documents = Vec::new();
        scan_directory(path, &mut documents)?;
        if documents.is_empty() {
            bail!(
                "No scoreable files (.json, .html) found in {}",
                path.display()
            );
        }
        return Ok(documents);
    }

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json_file(path),
        Some(ext) if ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm") => {
            Ok(vec![load_html_file(path)?])
        }
        _ => bail!(
            "Unsupported input file type: {} (expected .json, .html or .htm)",
            path.display()
        ),
    }
}
