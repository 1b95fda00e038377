use log::{debug, info};
use serde::Deserialize;
use std::fmt;

pub mod fetch;
pub mod routes;

/// Remote endpoints and the base document title.
pub mod defaults {
    pub const APP_TITLE: &str = "Pokedex";
    pub const CATALOG_URL: &str = "https://gist.githubusercontent.com/jherr/23ae3f96cf5ac341c98cd9aa164d2fe3/raw/f8d792f5b2cf97eaaf9f0c2119918f333e348823/pokemon.json";
    pub const ARTWORK_BASE_URL: &str =
        "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/";
}

pub use fetch::FetchError;

pub type PokemonId = i64;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub types: Vec<String>,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub special_attack: i64,
    pub special_defense: i64,
    pub speed: i64,
}

/// The six numeric attributes, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special_attack",
            Stat::SpecialDefense => "special_defense",
            Stat::Speed => "speed",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Pokemon {
    pub fn stat(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    /// `(stat, value)` pairs in display order.
    pub fn stats(&self) -> impl Iterator<Item = (Stat, i64)> + '_ {
        Stat::ALL.into_iter().map(move |s| (s, self.stat(s)))
    }

    pub fn image_url(&self) -> String {
        image_url(self.id)
    }

    /// Case-insensitive substring match on the name. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Official artwork URL for an id.
pub fn image_url(id: PokemonId) -> String {
    format!("{}{}.png", defaults::ARTWORK_BASE_URL, id)
}

/// Id of the entry shown by the "Previous" link. Not bounds checked against the catalog.
#[inline]
pub fn previous_id(id: PokemonId) -> PokemonId {
    id.saturating_sub(1)
}

/// Id of the entry shown by the "Next" link. Not bounds checked against the catalog.
#[inline]
pub fn next_id(id: PokemonId) -> PokemonId {
    id.saturating_add(1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    Empty,
    NotANumber(String),
}

impl fmt::Display for IdParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdParseError::Empty => write!(f, "Pokemon id cannot be empty"),
            IdParseError::NotANumber(raw) => write!(f, "Pokemon id '{}' is not a number", raw),
        }
    }
}

impl std::error::Error for IdParseError {}

/// Parse a route parameter into an id.
///
/// Accepts base-10 integers with an optional `+`/`-` sign and leading zeros,
/// so `"+1"` and `"01"` both parse to `1`. Whitespace and decimals are rejected.
pub fn parse_id(raw: &str) -> Result<PokemonId, IdParseError> {
    if raw.is_empty() {
        return Err(IdParseError::Empty);
    }
    raw.parse::<PokemonId>()
        .map_err(|_| IdParseError::NotANumber(raw.to_string()))
}

/// Keep the entries whose name matches `query`, preserving catalog order.
pub fn filter_by_name(pokemon: &[Pokemon], query: &str) -> Vec<Pokemon> {
    pokemon.iter().filter(|p| p.matches(query)).cloned().collect()
}

pub fn find_by_id(pokemon: &[Pokemon], id: PokemonId) -> Option<&Pokemon> {
    pokemon.iter().find(|p| p.id == id)
}

/// Lifecycle of the session catalog fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<Pokemon>),
    Failed(FetchError),
}

/// What the detail page shows for a given route parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<'a> {
    Loading,
    Found(&'a Pokemon),
    NotFound,
    Failed(&'a FetchError),
}

impl DetailState<'_> {
    /// Document title for the detail page: the entry name when found, the base title otherwise.
    pub fn title(&self) -> String {
        match self {
            DetailState::Found(p) => format!("{} | {}", p.name, defaults::APP_TITLE),
            _ => defaults::APP_TITLE.to_string(),
        }
    }
}

impl CatalogState {
    /// Full collection, empty until the fetch completes.
    pub fn entries(&self) -> &[Pokemon] {
        match self {
            CatalogState::Loaded(pokemon) => pokemon,
            CatalogState::Loading | CatalogState::Failed(_) => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            CatalogState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The search-filtered view of the collection.
    pub fn filtered(&self, query: &str) -> Vec<Pokemon> {
        filter_by_name(self.entries(), query)
    }

    /// Resolve a raw route id against the full collection.
    pub fn resolve(&self, raw_id: &str) -> DetailState<'_> {
        let pokemon = match self {
            CatalogState::Loading => return DetailState::Loading,
            CatalogState::Failed(err) => return DetailState::Failed(err),
            CatalogState::Loaded(pokemon) => pokemon,
        };

        let id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(e) => {
                debug!("{}", e);
                return DetailState::NotFound;
            }
        };

        match find_by_id(pokemon, id) {
            Some(found) => DetailState::Found(found),
            None => {
                debug!("No pokemon with id {} in a catalog of {}", id, pokemon.len());
                DetailState::NotFound
            }
        }
    }
}

impl From<Result<Vec<Pokemon>, FetchError>> for CatalogState {
    fn from(result: Result<Vec<Pokemon>, FetchError>) -> Self {
        match result {
            Ok(pokemon) => {
                info!("Catalog ready with {} pokemon", pokemon.len());
                CatalogState::Loaded(pokemon)
            }
            Err(e) => CatalogState::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mon(id: PokemonId, name: &str) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            types: vec!["Grass".to_string()],
            hp: 45 + id,
            attack: 49 + id,
            defense: 49 + id,
            special_attack: 65 + id,
            special_defense: 65 + id,
            speed: 45 + id,
        }
    }

    fn starters() -> Vec<Pokemon> {
        vec![mon(1, "Bulbasaur"), mon(2, "Ivysaur"), mon(4, "Charmander")]
    }

    #[test]
    fn search_is_case_insensitive_subsequence() {
        let all = starters();
        for query in ["", "saur", "SAUR", "b", "char", "zzz", "Ivy"] {
            let view = filter_by_name(&all, query);
            assert!(view.iter().all(|p| all.contains(p)));
            assert!(view
                .iter()
                .all(|p| p.name.to_lowercase().contains(&query.to_lowercase())));
            // order preserved
            let ids: Vec<_> = view.iter().map(|p| p.id).collect();
            let mut sorted = ids.clone();
            sorted.sort();
            assert_eq!(ids, sorted);
        }
        assert_eq!(filter_by_name(&all, "SAUR").len(), 2);
    }

    #[test]
    fn empty_search_restores_full_collection() {
        let catalog = CatalogState::Loaded(starters());
        assert_eq!(catalog.filtered("Bulb").len(), 1);
        assert_eq!(catalog.filtered(""), starters());
    }

    #[test]
    fn unmatched_search_yields_empty_view() {
        let catalog = CatalogState::Loaded(starters());
        assert!(catalog.filtered("zzz").is_empty());
    }

    #[test]
    fn pending_catalog_has_no_entries() {
        let catalog = CatalogState::default();
        assert!(catalog.is_loading());
        assert!(catalog.filtered("").is_empty());
        assert_eq!(catalog.resolve("1"), DetailState::Loading);
    }

    #[test]
    fn failed_catalog_never_resolves() {
        let catalog = CatalogState::Failed(FetchError::Status(503));
        assert!(catalog.entries().is_empty());
        assert_eq!(catalog.error(), Some(&FetchError::Status(503)));
        assert_eq!(
            catalog.resolve("1"),
            DetailState::Failed(&FetchError::Status(503))
        );
    }

    #[test]
    fn detail_lookup_ignores_search() {
        let catalog = CatalogState::Loaded(starters());
        // Filtering by "Bulb" must not hide Charmander from the detail page.
        assert!(catalog.filtered("Bulb").iter().all(|p| p.id != 4));
        match catalog.resolve("4") {
            DetailState::Found(p) => assert_eq!(p.name, "Charmander"),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn missing_and_malformed_ids_are_not_found() {
        let catalog = CatalogState::Loaded(starters());
        for raw in ["3", "0", "-1", "999", "abc", "", "1.0", " 1"] {
            assert_eq!(catalog.resolve(raw), DetailState::NotFound, "id {:?}", raw);
        }
    }

    #[test]
    fn parse_id_reports_reason() {
        assert_eq!(parse_id("25"), Ok(25));
        assert_eq!(parse_id("-3"), Ok(-3));
        assert_eq!(parse_id(""), Err(IdParseError::Empty));
        assert_eq!(
            parse_id("pika"),
            Err(IdParseError::NotANumber("pika".to_string()))
        );
        assert_eq!(parse_id("+1"), Ok(1));
        assert_eq!(parse_id("01"), Ok(1));
        assert!(parse_id(" 1").is_err());
        assert!(parse_id("1.0").is_err());
    }

    #[test]
    fn signed_and_zero_padded_ids_resolve() {
        let catalog = CatalogState::Loaded(starters());
        for raw in ["01", "+1", "001"] {
            match catalog.resolve(raw) {
                DetailState::Found(p) => assert_eq!(p.name, "Bulbasaur"),
                other => panic!("expected Found for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn detail_title_names_found_entry_only() {
        let catalog = CatalogState::Loaded(starters());
        assert_eq!(catalog.resolve("1").title(), "Bulbasaur | Pokedex");
        assert_eq!(catalog.resolve("3").title(), defaults::APP_TITLE);
        assert_eq!(CatalogState::Loading.resolve("1").title(), "Pokedex");
        assert_eq!(
            CatalogState::Failed(FetchError::Status(500)).resolve("1").title(),
            "Pokedex"
        );
    }

    #[test]
    fn stats_are_listed_in_fixed_order() {
        let bulbasaur = mon(1, "Bulbasaur");
        let labels: Vec<_> = bulbasaur.stats().map(|(s, _)| s.label()).collect();
        assert_eq!(
            labels,
            [
                "hp",
                "attack",
                "defense",
                "special_attack",
                "special_defense",
                "speed"
            ]
        );
        let values: Vec<_> = bulbasaur.stats().map(|(_, v)| v).collect();
        assert_eq!(values, [46, 50, 50, 66, 66, 46]);
    }

    #[test]
    fn paging_is_plain_arithmetic() {
        assert_eq!(previous_id(1), 0);
        assert_eq!(next_id(1), 2);
        assert_eq!(previous_id(0), -1);
        assert_eq!(next_id(PokemonId::MAX), PokemonId::MAX);
    }

    #[test]
    fn image_url_depends_only_on_id() {
        assert_eq!(
            image_url(25),
            format!("{}25.png", defaults::ARTWORK_BASE_URL)
        );
        assert_eq!(mon(25, "Pikachu").image_url(), image_url(25));
    }

    #[test]
    fn browse_scenario() {
        let catalog = CatalogState::Loaded(vec![mon(1, "Bulbasaur"), mon(2, "Ivysaur")]);

        let view = catalog.filtered("Bulb");
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 1);

        let DetailState::Found(first) = catalog.resolve("1") else {
            panic!("Bulbasaur should be found");
        };
        assert_eq!(first.name, "Bulbasaur");

        let DetailState::Found(second) = catalog.resolve(&next_id(first.id).to_string()) else {
            panic!("Ivysaur should be found");
        };
        assert_eq!(second.name, "Ivysaur");

        assert_eq!(
            catalog.resolve(&next_id(second.id).to_string()),
            DetailState::NotFound
        );
    }
}
