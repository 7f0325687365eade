/// The user's favorites list
///
/// An insertion-ordered, duplicate-free (by title) list of movies. The
/// list is serialized to JSON and mirrored to the store after every
/// mutation; a stored value that is absent or unreadable degrades to the
/// empty list.

use super::data::MovieRecord;

/// Duplicate-free, insertion-ordered list of favorite movies
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    movies: Vec<MovieRecord>,
}

impl Favorites {
    /// Create an empty favorites list
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a favorites list from its stored JSON value
    ///
    /// Malformed JSON degrades to the empty list. Duplicate titles in the
    /// stored value are dropped, keeping the first occurrence, so the
    /// at-most-once invariant holds even for values this app did not write.
    pub fn from_json(raw: &str) -> Self {
        let stored: Vec<MovieRecord> = serde_json::from_str(raw).unwrap_or_default();

        let mut favorites = Favorites::new();
        for movie in stored {
            favorites.insert(movie);
        }
        favorites
    }

    /// Serialize the full list for storage (full overwrite, no deltas)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.movies)
    }

    /// Append a movie unless one with the same title is already present
    pub fn insert(&mut self, movie: MovieRecord) {
        if !self.contains(&movie.title) {
            self.movies.push(movie);
        }
    }

    /// Remove the movie with the given title, if present.
    /// Returns whether anything was removed.
    pub fn remove(&mut self, title: &str) -> bool {
        match self.movies.iter().position(|movie| movie.title == title) {
            Some(index) => {
                self.movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip membership: append if absent, remove if present
    pub fn toggle(&mut self, movie: MovieRecord) {
        if !self.remove(&movie.title) {
            self.insert(movie);
        }
    }

    /// Whether a movie with this title is in the list
    pub fn contains(&self, title: &str) -> bool {
        self.movies.iter().any(|movie| movie.title == title)
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Favorites in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, MovieRecord> {
        self.movies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            image: format!("https://posters.example/{}.jpg", title),
            rating: 4.0,
            description: "Una película de prueba.".to_string(),
        }
    }

    #[test]
    fn test_toggle_twice_restores_list() {
        let mut favorites = Favorites::new();
        favorites.insert(sample("Oppenheimer"));
        let before = favorites.clone();

        favorites.toggle(sample("The Batman"));
        favorites.toggle(sample("The Batman"));

        assert_eq!(favorites, before);
    }

    #[test]
    fn test_insert_never_duplicates() {
        let mut favorites = Favorites::new();

        favorites.insert(sample("Interstellar"));
        favorites.insert(sample("Interstellar"));
        favorites.insert(sample("Interstellar"));

        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let mut favorites = Favorites::new();

        favorites.toggle(sample("The Batman"));
        favorites.toggle(sample("Oppenheimer"));
        let titles: Vec<&str> = favorites.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["The Batman", "Oppenheimer"]);

        favorites.toggle(sample("The Batman"));
        let titles: Vec<&str> = favorites.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Oppenheimer"]);
    }

    #[test]
    fn test_malformed_json_degrades_to_empty() {
        assert!(Favorites::from_json("").is_empty());
        assert!(Favorites::from_json("not json at all").is_empty());
        assert!(Favorites::from_json("{\"title\":\"not an array\"}").is_empty());
    }

    #[test]
    fn test_restore_dedupes_stored_value() {
        // Build a stored value with a duplicate by hand
        let raw = format!(
            "[{},{},{}]",
            serde_json::to_string(&sample("The Batman")).unwrap(),
            serde_json::to_string(&sample("Oppenheimer")).unwrap(),
            serde_json::to_string(&sample("The Batman")).unwrap(),
        );

        let restored = Favorites::from_json(&raw);
        let titles: Vec<&str> = restored.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["The Batman", "Oppenheimer"]);
    }

    #[test]
    fn test_stored_value_restores_list() {
        let mut favorites = Favorites::new();
        favorites.insert(sample("Interstellar"));
        favorites.insert(sample("The Batman"));

        let restored = Favorites::from_json(&favorites.to_json().unwrap());

        assert_eq!(restored, favorites);
    }
}
