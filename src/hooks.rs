use log::warn;
use pokedex::fetch::fetch_catalog;
use pokedex::{CatalogState, FetchError, Pokemon};
use std::rc::Rc;
use yew::prelude::*;

/// Session state shared by every view: the fetched catalog and the search text.
#[derive(Clone, PartialEq)]
pub struct PokemonStore {
    /// The full catalog. Detail lookups always go through this, never the filtered view.
    pub catalog: Rc<CatalogState>,
    /// The current search text.
    pub search: String,
    /// Catalog entries matching `search`, recomputed when either input changes.
    pub pokemon: Rc<Vec<Pokemon>>,
    /// Replaces the search text.
    pub set_search: Callback<String>,
}

impl PokemonStore {
    /// Store handed out when no provider is mounted. Reports as failed so the
    /// wiring error shows on screen instead of an endless loading page.
    pub fn detached() -> Self {
        PokemonStore {
            catalog: Rc::new(CatalogState::Failed(FetchError::Network(
                "pokemon store provider is not mounted".to_string(),
            ))),
            search: String::new(),
            pokemon: Rc::new(Vec::new()),
            set_search: Callback::noop(),
        }
    }
}

/// Owns the catalog and search state. Mount once at the root and share via context.
#[hook]
pub fn use_pokemon_store(url: &'static str) -> PokemonStore {
    let catalog_handle: UseStateHandle<Rc<CatalogState>> =
        use_state(|| Rc::new(CatalogState::Loading));
    let search_handle: UseStateHandle<String> = use_state(String::new);

    // Fetch the catalog once on mount
    {
        let catalog_setter = catalog_handle.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_catalog(url).await;
                if let Err(e) = &result {
                    warn!("{}", e);
                }
                catalog_setter.set(Rc::new(CatalogState::from(result)));
            });
        });
    }

    let set_search = {
        let search_setter = search_handle.clone();
        Callback::from(move |text: String| search_setter.set(text))
    };

    let pokemon = use_memo(
        ((*catalog_handle).clone(), (*search_handle).clone()),
        |(catalog, search)| catalog.filtered(search),
    );

    PokemonStore {
        catalog: (*catalog_handle).clone(),
        search: (*search_handle).clone(),
        pokemon,
        set_search,
    }
}

/// Read the store provided by the root component.
#[hook]
pub fn use_pokemon() -> PokemonStore {
    use_context::<PokemonStore>().unwrap_or_else(|| {
        warn!("use_pokemon called outside of the store provider");
        PokemonStore::detached()
    })
}
