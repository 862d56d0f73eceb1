use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Where activating a catalog card leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Mount the quiz with this id.
    Quiz(String),
    /// Show the card's own description page.
    Detail,
}

/// A lesson step or implementation pattern shown as a card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub button_text: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub quiz: Option<String>,
}

impl CatalogEntry {
    pub fn route(&self) -> Route {
        match &self.quiz {
            Some(id) => Route::Quiz(id.clone()),
            None => Route::Detail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Steps,
    Patterns,
}

impl Section {
    pub fn title(self) -> &'static str {
        match self {
            Section::Steps => "Learning steps",
            Section::Patterns => "Implementation patterns",
        }
    }
}

/// Lesson steps followed by patterns; cards are addressed by a flat index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    pub steps: Vec<CatalogEntry>,
    pub patterns: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.steps.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<(Section, &CatalogEntry)> {
        match index.checked_sub(self.steps.len()) {
            None => self.steps.get(index).map(|entry| (Section::Steps, entry)),
            Some(offset) => self
                .patterns
                .get(offset)
                .map(|entry| (Section::Patterns, entry)),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Section, &CatalogEntry)> {
        self.steps
            .iter()
            .map(|entry| (Section::Steps, entry))
            .chain(self.patterns.iter().map(|entry| (Section::Patterns, entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, quiz: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            id,
            title: format!("Entry {id}"),
            description: String::new(),
            button_text: "Open".into(),
            disabled: false,
            difficulty: None,
            quiz: quiz.map(str::to_string),
        }
    }

    #[test]
    fn flat_index_spans_both_sections() {
        let catalog = Catalog {
            steps: vec![entry(1, Some("intro")), entry(2, None)],
            patterns: vec![entry(1, None)],
        };

        assert_eq!(catalog.len(), 3);
        assert!(matches!(catalog.get(1), Some((Section::Steps, e)) if e.id == 2));
        assert!(matches!(catalog.get(2), Some((Section::Patterns, e)) if e.id == 1));
        assert!(catalog.get(3).is_none());
        assert_eq!(catalog.entries().count(), 3);
    }

    #[test]
    fn route_follows_quiz_link() {
        assert_eq!(entry(1, Some("intro")).route(), Route::Quiz("intro".into()));
        assert_eq!(entry(2, None).route(), Route::Detail);
    }

    #[test]
    fn difficulty_parses_lowercase() {
        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
        assert_eq!(parsed.label(), "Advanced");
    }
}
