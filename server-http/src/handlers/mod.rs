pub mod health;
pub mod lineups;
pub mod players;

pub use health::health_check;
pub use lineups::{
    add_lineup_player, create_lineup, delete_lineup, get_lineup, remove_lineup_player,
    update_lineup,
};
pub use players::{create_player, delete_player, list_players, update_player};
