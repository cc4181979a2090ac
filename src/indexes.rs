use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::post::Post;

#[derive(Serialize, Debug)]
pub struct ChronoEntry {
    pub date: String,
    pub posts: Vec<ChronoPost>,
}

#[derive(Serialize, Debug)]
pub struct ChronoPost {
    pub path: String,
    pub title: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub category: String,
}

#[derive(Serialize, Debug)]
pub struct CatalogPost {
    pub path: String,
    pub title: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub date: String,
}

#[derive(Debug, Default)]
pub struct Catalog {
    pub categories: Vec<(String, Vec<CatalogPost>)>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

// catalog.json keeps categories in first-seen order; serde_json's own map
// type reorders keys, so the object is emitted entry by entry
impl Serialize for Catalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (category, posts) in &self.categories {
            map.serialize_entry(category, posts)?;
        }
        map.end()
    }
}

/// Builds the two index views over a single newest-first sort of the posts.
/// Both views contain every input post exactly once.
pub fn build_indexes(posts: Vec<Post>) -> (Vec<ChronoEntry>, Catalog) {
    let mut sorted = posts;
    // Stable sort: same-date posts keep their input order, the grouping
    // below relies on it
    sorted.sort_by(|a, b| b.published.cmp(&a.published));

    let mut chrono: Vec<ChronoEntry> = vec![];
    let mut date_slots: HashMap<String, usize> = HashMap::new();
    for post in &sorted {
        let slot = match date_slots.get(&post.date) {
            Some(&slot) => slot,
            None => {
                chrono.push(ChronoEntry {
                    date: post.date.clone(),
                    posts: vec![],
                });
                date_slots.insert(post.date.clone(), chrono.len() - 1);
                chrono.len() - 1
            }
        };
        chrono[slot].posts.push(ChronoPost {
            path: post.path.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            thumbnail: post.thumbnail.clone(),
            category: post.category.clone(),
        });
    }

    let mut catalog = Catalog::default();
    let mut category_slots: HashMap<String, usize> = HashMap::new();
    for post in &sorted {
        let slot = match category_slots.get(&post.category) {
            Some(&slot) => slot,
            None => {
                catalog.categories.push((post.category.clone(), vec![]));
                category_slots.insert(post.category.clone(), catalog.categories.len() - 1);
                catalog.categories.len() - 1
            }
        };
        catalog.categories[slot].1.push(CatalogPost {
            path: post.path.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            thumbnail: post.thumbnail.clone(),
            date: post.date.clone(),
        });
    }

    (chrono, catalog)
}
