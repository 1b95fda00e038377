//! Yew view components for the Pokedex UI.
//!
//! Every component reads the shared store through `use_pokemon`; only
//! `SearchBox` writes to it.

use crate::config::*;
use crate::hooks::use_pokemon;
use gloo_utils::document;
use pokedex::routes::Route;
use pokedex::{DetailState, Pokemon};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Text input bound to the store's search field.
#[function_component(SearchBox)]
pub fn search_box() -> Html {
    let store = use_pokemon();

    let oninput = {
        let set_search = store.set_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_search.emit(input.value());
        })
    };

    html! {
        <input class="search-box"
            placeholder={SEARCH_PLACEHOLDER}
            value={store.search.clone()}
            {oninput}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct PokemonCardProps {
    pub pokemon: Pokemon,
}

#[function_component(PokemonCard)]
pub fn pokemon_card(props: &PokemonCardProps) -> Html {
    let p = &props.pokemon;
    html! {
        <li class="pokemon-card">
            <Link<Route> to={Route::pokemon(p.id)}>
                <img class="pokemon-card-image" src={p.image_url()} alt="" />
                <h3 class="pokemon-card-name">{ &p.name }</h3>
            </Link<Route>>
        </li>
    }
}

/// Grid of the entries matching the current search.
#[function_component(PokemonList)]
pub fn pokemon_list() -> Html {
    let store = use_pokemon();

    html! {
        <div>
            if store.catalog.is_loading() {
                <p class="status-message">{ LOADING_MESSAGE }</p>
            }
            if let Some(err) = store.catalog.error() {
                <p class="status-message error">{ err.to_string() }</p>
            }
            <ul class="pokemon-grid">
                { store.pokemon.iter().map(|p| html! {
                    <PokemonCard key={p.id} pokemon={p.clone()} />
                }).collect::<Html>() }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PokemonDetailProps {
    /// Raw `:id` route parameter.
    pub id: AttrValue,
}

/// Detail page for one entry, looked up in the full catalog.
#[function_component(PokemonDetail)]
pub fn pokemon_detail(props: &PokemonDetailProps) -> Html {
    let store = use_pokemon();
    let state = store.catalog.resolve(&props.id);

    // Restore the base title when leaving the detail page
    use_effect_with(state.title(), |title| {
        document().set_title(title);
        || document().set_title(APP_TITLE)
    });

    match state {
        DetailState::Loading => html! {
            <div class="centered-page">
                <p class="status-message">{ LOADING_MESSAGE }</p>
            </div>
        },
        DetailState::Failed(err) => html! {
            <div class="centered-page">
                <h1 class="status-heading error">{ err.to_string() }</h1>
                { back_home() }
            </div>
        },
        DetailState::NotFound => html! {
            <div class="centered-page">
                <h1 class="status-heading">{ NOT_FOUND_MESSAGE }</h1>
                { back_home() }
            </div>
        },
        DetailState::Found(p) => render_found(p),
    }
}

fn render_found(p: &Pokemon) -> Html {
    html! {
        <div class="detail-page">
            <div class="detail-body">
                <img class="detail-image" src={p.image_url()} alt="" />
                <div>
                    <h2 class="detail-name">{ &p.name }</h2>
                    if !p.types.is_empty() {
                        <div class="detail-types">
                            { p.types.iter().map(|t| html! {
                                <span class="type-badge">{ t }</span>
                            }).collect::<Html>() }
                        </div>
                    }
                    <ul class="detail-stats">
                        { p.stats().map(|(stat, value)| html! {
                            <li key={stat.label()} class="stat-row">
                                <span class="stat-label">{ stat.label() }</span>
                                <span class="stat-value">{ value }</span>
                            </li>
                        }).collect::<Html>() }
                    </ul>
                </div>
            </div>
            <div class="detail-nav">
                { back_home() }
                <div class="detail-paging">
                    <Link<Route> classes="nav-button" to={Route::previous(p.id)}>
                        { PREVIOUS_LABEL }
                    </Link<Route>>
                    <Link<Route> classes="nav-button" to={Route::next(p.id)}>
                        { NEXT_LABEL }
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

fn back_home() -> Html {
    html! {
        <Link<Route> classes="nav-button" to={Route::Home}>{ BACK_HOME_LABEL }</Link<Route>>
    }
}
