//! Client-side routes.

use crate::{next_id, previous_id, PokemonId};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pokemon/:id")]
    Pokemon { id: String },
}

impl Route {
    pub fn pokemon(id: PokemonId) -> Self {
        Route::Pokemon { id: id.to_string() }
    }

    /// Detail route one id below `id`, whether or not that entry exists.
    pub fn previous(id: PokemonId) -> Self {
        Route::pokemon(previous_id(id))
    }

    /// Detail route one id above `id`, whether or not that entry exists.
    pub fn next(id: PokemonId) -> Self {
        Route::pokemon(next_id(id))
    }
}
