//! Display ordering for a tournament roster.
//!
//! Players are ranked by position (goalkeepers first, forwards last), then
//! starters before substitutes, then by name. Name order is the store's
//! collation: rows arrive sorted by name and are regrouped with a stable sort.
//! The ordered list is split into starters (`titulares`) and substitutes
//! (`suplentes`) without reordering.

use std::cmp::Ordering;

use infra::models::RosterPlayerRow;
use serde::Serialize;

/// Position names in display order. Rank is the index + 1.
const POSITION_ORDER: [&str; 4] = ["Portero", "Defensa", "Mediocampista", "Delantero"];

/// Rank given to any position not listed in [`POSITION_ORDER`]; sorts last.
pub const UNRANKED_POSITION: u8 = POSITION_ORDER.len() as u8 + 1;

pub fn position_rank(position_name: &str) -> u8 {
    POSITION_ORDER
        .iter()
        .position(|name| *name == position_name)
        .map(|idx| idx as u8 + 1)
        .unwrap_or(UNRANKED_POSITION)
}

/// Position rank, then starters first. Names are deliberately not compared
/// here; ties keep the incoming (collated) order.
fn display_order(a: &RosterPlayerRow, b: &RosterPlayerRow) -> Ordering {
    position_rank(&a.position_name)
        .cmp(&position_rank(&b.position_name))
        .then_with(|| b.titular.cmp(&a.titular))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Roster {
    pub titulares: Vec<RosterPlayerRow>,
    pub suplentes: Vec<RosterPlayerRow>,
}

impl Roster {
    /// Groups a name-ordered player list by position and partitions it by
    /// `titular`. `players` must already be sorted by name.
    pub fn from_players(mut players: Vec<RosterPlayerRow>) -> Self {
        players.sort_by(display_order);
        let (titulares, suplentes): (Vec<_>, Vec<_>) =
            players.into_iter().partition(|p| p.titular);
        Self {
            titulares,
            suplentes,
        }
    }
}
