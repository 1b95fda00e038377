//! Main module for the Pokedex application using Yew.
//! Owns the session store and wires routes to views.

use pokedex::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod hooks;

use components::{PokemonDetail, PokemonList, SearchBox};
use config::CATALOG_URL;
use hooks::{use_pokemon_store, PokemonStore};

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <>
                <SearchBox />
                <PokemonList />
            </>
        },
        Route::Pokemon { id } => html! { <PokemonDetail {id} /> },
    }
}

/// Root component: holds the store for the whole session and provides it to every route.
#[function_component]
pub fn App() -> Html {
    let store = use_pokemon_store(CATALOG_URL);

    html! {
        <ContextProvider<PokemonStore> context={store}>
            <BrowserRouter>
                <div class="app-container">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<PokemonStore>>
    }
}

/// Entry point: initializes Yew renderer for the App component.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
