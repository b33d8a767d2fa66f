pub mod registration;
pub mod roster_query;

pub use registration::{register_country, register_player, register_tournament};
pub use roster_query::{
    get_tournament_detail, list_countries, list_positions, list_tournaments,
    list_tournaments_by_country, search_players,
};
