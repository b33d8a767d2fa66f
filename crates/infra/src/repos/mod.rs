pub mod countries;
pub mod players;
pub mod positions;
pub mod tournaments;

pub use players::CreatePlayer;
