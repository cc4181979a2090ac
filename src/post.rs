use std::fmt::Formatter;
use std::path::PathBuf;
use std::{fmt, fs};

use anyhow::Context;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::text_utils::{make_excerpt, parse_date};

#[derive(Debug)]
pub struct Post {
    pub path: String,
    pub title: String,
    pub thumbnail: String,
    pub content: String,
    pub date: String,
    pub published: NaiveDate,
    pub category: String,
    pub excerpt: String,
}

#[derive(Debug, PartialEq)]
pub enum ParseError {
    MissingField(&'static str),
    InvalidDate(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingField(field) => write!(f, "missing required field '{}'", field),
            ParseError::InvalidDate(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Default)]
struct Sections {
    title: String,
    thumbnail: String,
    content: String,
    date: String,
    category: String,
}

impl Sections {
    fn store(&mut self, name: &str, lines: &[String]) {
        // A header that accumulated no lines leaves the stored value alone
        if lines.is_empty() {
            return;
        }
        let body = lines.join("\n").trim().to_string();
        match name.to_lowercase().as_str() {
            "title" => self.title = body,
            "thumbnail" => self.thumbnail = body,
            "content" => self.content = body,
            "date" => self.date = body,
            "category" => self.category = body,
            _ => {}
        }
    }
}

/// Example of post
/// [Title]
/// What I learned after 20 years of blogging
/// [Date]
/// 04/02/2022
/// [Category]
/// career
/// [Content]
/// How to be a great software engineer?
impl Post {
    pub fn from_file(file_name: &PathBuf) -> anyhow::Result<Post> {
        let text = fs::read_to_string(file_name)
            .with_context(|| format!("Error reading post file {}", file_name.display()))?;
        let name = file_name.file_name().unwrap().to_str().unwrap();

        Ok(Self::from_string(&text, name)?)
    }

    pub fn from_string(text: &str, file_name: &str) -> Result<Post, ParseError> {
        let mut sections = Sections::default();
        let mut current: Option<&str> = None;
        let mut pending: Vec<String> = vec![];

        for line in text.lines() {
            if let Some(name) = Self::extract_section_header(line) {
                if let Some(open) = current {
                    sections.store(open, &pending);
                }
                current = Some(name);
                pending.clear();
            } else if current.is_some() {
                // Unescape \[ to [
                pending.push(line.replace(r"\[", "["));
            }
            // Lines before the first header are discarded
        }
        if let Some(open) = current {
            sections.store(open, &pending);
        }

        if sections.title.is_empty() {
            return Err(ParseError::MissingField("title"));
        }
        if sections.date.is_empty() {
            return Err(ParseError::MissingField("date"));
        }
        if sections.category.is_empty() {
            return Err(ParseError::MissingField("category"));
        }

        let published = parse_date(&sections.date).map_err(ParseError::InvalidDate)?;
        let excerpt = make_excerpt(&sections.content);

        Ok(Post {
            path: format!("posts/{}", file_name),
            title: sections.title,
            thumbnail: sections.thumbnail,
            content: sections.content,
            date: sections.date,
            published,
            category: sections.category,
            excerpt,
        })
    }

    fn extract_section_header(line: &str) -> Option<&str> {
        lazy_static! {
            static ref SECTION_REGEX: Regex = Regex::new(
                r"^\[(?P<name>\w+)\]$"
            ).unwrap();
        }

        // A leading backslash escapes the bracket, so `\[Name]` never matches
        SECTION_REGEX.captures(line).and_then(|cap| {
            cap.name("name").map(|name| name.as_str())
        })
    }
}
