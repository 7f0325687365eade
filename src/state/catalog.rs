/// The movie catalog and the title search filter
///
/// The catalog is an immutable, ordered list of movies embedded at build
/// time. The session only consumes the `Catalog` type, so a future real
/// data source can be swapped in without touching filter or favorites
/// logic.

use super::data::MovieRecord;

/// An immutable, ordered collection of movies
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    movies: Vec<MovieRecord>,
}

impl Catalog {
    /// Create a catalog from an arbitrary list of movies
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Catalog { movies }
    }

    /// The catalog shipped with the app
    pub fn builtin() -> Self {
        Catalog::new(vec![
            movie(
                "The Batman",
                "https://image.tmdb.org/t/p/w500/74xTEgt7R36Fpooo50r9T25onhq.jpg",
                4.5,
                "Un nuevo caballero oscuro aparece en Gotham.",
            ),
            movie(
                "Oppenheimer",
                "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTqzPdSwrwUVF0AjKzfnGSeW6VoPT5lrM627A&s",
                4.8,
                "Una exploración del subconsciente en los sueños.",
            ),
            movie(
                "Interstellar",
                "https://image.tmdb.org/t/p/w500/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
                5.0,
                "Una misión épica a través del espacio y el tiempo.",
            ),
        ])
    }

    /// All movies, in catalog order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Look a movie up by its exact title
    pub fn find(&self, title: &str) -> Option<&MovieRecord> {
        self.movies.iter().find(|movie| movie.title == title)
    }

    /// Movies whose title contains `query`, case-insensitively
    ///
    /// The empty query matches everything. Catalog order is preserved;
    /// there is no re-ranking. Only the title is searched.
    pub fn filter(&self, query: &str) -> Vec<&MovieRecord> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Helper to build a catalog entry from literals
fn movie(title: &str, image: &str, rating: f32, description: &str) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        image: image.to_string(),
        rating,
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(movies: &[&MovieRecord]) -> Vec<String> {
        movies.iter().map(|movie| movie.title.clone()).collect()
    }

    #[test]
    fn test_builtin_catalog_contents() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.movies().len(), 3);
        assert_eq!(catalog.movies()[0].title, "The Batman");
        assert_eq!(catalog.movies()[1].title, "Oppenheimer");
        assert_eq!(catalog.movies()[2].title, "Interstellar");
    }

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let catalog = Catalog::builtin();
        let filtered = catalog.filter("");

        assert_eq!(
            titles(&filtered),
            vec!["The Batman", "Oppenheimer", "Interstellar"]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let catalog = Catalog::builtin();

        assert_eq!(titles(&catalog.filter("inter")), vec!["Interstellar"]);
        assert_eq!(titles(&catalog.filter("INTER")), vec!["Interstellar"]);
        assert_eq!(titles(&catalog.filter("iNtEr")), vec!["Interstellar"]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = Catalog::builtin();

        // Both Oppenheimer and Interstellar contain "er"; catalog order wins
        assert_eq!(
            titles(&catalog.filter("er")),
            vec!["Oppenheimer", "Interstellar"]
        );
    }

    #[test]
    fn test_filter_without_match_is_empty() {
        let catalog = Catalog::builtin();

        assert!(catalog.filter("zzz").is_empty());
        assert!(catalog.filter("¿batman?").is_empty());
    }

    #[test]
    fn test_find_by_exact_title() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.find("Oppenheimer").map(|m| m.rating), Some(4.8));
        assert!(catalog.find("oppenheimer").is_none());
        assert!(catalog.find("Dune").is_none());
    }
}
