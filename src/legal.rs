use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use dashmap::DashMap;
#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use rust_embed::Embed;
#[cfg(feature = "ssr")]
use std::sync::LazyLock;

#[cfg(feature = "ssr")]
pub static GLOBAL_LEGAL_CACHE: LazyLock<DashMap<LegalDoc, LegalPage>> =
    LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "legal"]
pub struct Assets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalDoc {
    Mentions,
    Privacy,
}

impl LegalDoc {
    pub const fn file_name(self) -> &'static str {
        match self {
            LegalDoc::Mentions => "mentions-legales.md",
            LegalDoc::Privacy => "confidentialite.md",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LegalDoc::Mentions => "Mentions légales",
            LegalDoc::Privacy => "Politique de confidentialité",
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug)]
struct FrontMatter {
    title: String,
    updated: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalPage {
    pub title: String,
    pub updated: NaiveDate,
    pub html: String,
}

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

impl LegalPage {
    /// `23 février 2026`
    pub fn updated_label(&self) -> String {
        let month = MONTHS[self.updated.month0() as usize];
        format!("{} {} {}", self.updated.day(), month, self.updated.year())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LegalError {
    #[error("Legal document not found")]
    NotFound,
    #[error("Couldn't parse legal document")]
    ParseError,
}

#[cfg(feature = "ssr")]
pub fn get_legal(doc: LegalDoc) -> Result<LegalPage, LegalError> {
    let cache = &*GLOBAL_LEGAL_CACHE;
    if let Some(page) = cache.get(&doc) {
        return Ok(page.clone());
    }
    let file = Assets::get(doc.file_name()).ok_or(LegalError::NotFound)?;
    let content = String::from_utf8(file.data.into()).map_err(|_| LegalError::ParseError)?;
    let page = render(&content)?;
    cache.insert(doc, page.clone());
    Ok(page)
}

#[cfg(feature = "ssr")]
fn render(content: &str) -> Result<LegalPage, LegalError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or(LegalError::ParseError)?;

    let parser = Parser::new_ext(&parsed.content, Options::all());
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);

    Ok(LegalPage {
        title: parsed.data.title,
        updated: parsed.data.updated,
        html,
    })
}
