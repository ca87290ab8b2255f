//! Grouping of a result set's items into the sections the results page shows.
//!
//! The split is purely presentational: the first [`APPETIZER_COUNT`] items go
//! under "appetizers", the rest under "main course". Nothing about the items
//! themselves decides which section they land in.

use api::MenuItem;

use crate::core::{ImageResolver, ItemKey};

/// Number of leading items shown in the appetizer section.
pub const APPETIZER_COUNT: usize = 2;

/// Everything needed to render one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardEntry {
    pub key: ItemKey,
    pub item: MenuItem,
    pub resolver: ImageResolver,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuSections {
    pub appetizers: Vec<CardEntry>,
    pub main_course: Vec<CardEntry>,
}

impl MenuSections {
    pub fn partition(mut entries: Vec<CardEntry>) -> Self {
        let main_course = entries.split_off(APPETIZER_COUNT.min(entries.len()));
        Self {
            appetizers: entries,
            main_course,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.appetizers.is_empty() && self.main_course.is_empty()
    }
}
