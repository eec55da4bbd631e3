//! In-memory tables standing in for the relational store. The handlers only
//! ever touch this thin CRUD surface, so the storage backend can be swapped
//! without touching the HTTP layer.

use crate::models::{Formation, Lineup, LineupUpdate, Player, PlayerUpdate, Position};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// A lineup holds at most a full starting eleven.
pub const MAX_LINEUP_PLAYERS: usize = 11;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
    #[error("player not found")]
    PlayerNotFound,
    #[error("lineup not found")]
    LineupNotFound,
    #[error("lineup has reached maximum players")]
    LineupFull,
}

#[derive(Debug, Clone)]
struct LineupRow {
    lineup_id: i64,
    formation: Formation,
    is_local: bool,
}

pub struct SquadDb {
    players: DashMap<i64, Player>,
    lineups: DashMap<i64, LineupRow>,
    // lineup_id -> member player ids
    lineup_players: DashMap<i64, Vec<i64>>,
    player_seq: AtomicI64,
    lineup_seq: AtomicI64,
}

impl SquadDb {
    pub fn new() -> Self {
        Self {
            players: DashMap::new(),
            lineups: DashMap::new(),
            lineup_players: DashMap::new(),
            player_seq: AtomicI64::new(1),
            lineup_seq: AtomicI64::new(1),
        }
    }

    // === Players ===

    pub fn create_player(&self, display_name: String, number: i32, position: Position) -> i64 {
        let player_id = self.player_seq.fetch_add(1, Ordering::SeqCst);
        self.players.insert(
            player_id,
            Player {
                player_id,
                display_name,
                number,
                position,
            },
        );
        player_id
    }

    /// Players ordered by id, optionally filtered by position.
    pub fn list_players(
        &self,
        position: Option<Position>,
        offset: usize,
        limit: usize,
    ) -> Vec<Player> {
        let mut players: Vec<Player> = self
            .players
            .iter()
            .filter(|entry| position.is_none_or(|p| entry.value().position == p))
            .map(|entry| entry.value().clone())
            .collect();
        players.sort_by_key(|player| player.player_id);
        players.into_iter().skip(offset).take(limit).collect()
    }

    pub fn update_player(&self, player_id: i64, update: PlayerUpdate) -> Result<(), DbError> {
        let mut player = self
            .players
            .get_mut(&player_id)
            .ok_or(DbError::PlayerNotFound)?;

        if let Some(display_name) = update.display_name {
            player.display_name = display_name;
        }
        if let Some(number) = update.number {
            player.number = number;
        }
        if let Some(position) = update.position {
            player.position = position;
        }
        Ok(())
    }

    pub fn delete_player(&self, player_id: i64) -> Result<(), DbError> {
        self.players
            .remove(&player_id)
            .ok_or(DbError::PlayerNotFound)?;
        // Memberships cascade with the player.
        for mut members in self.lineup_players.iter_mut() {
            members.retain(|id| *id != player_id);
        }
        Ok(())
    }

    // === Lineups ===

    pub fn create_lineup(&self, formation: Formation, is_local: bool) -> i64 {
        let lineup_id = self.lineup_seq.fetch_add(1, Ordering::SeqCst);
        self.lineups.insert(
            lineup_id,
            LineupRow {
                lineup_id,
                formation,
                is_local,
            },
        );
        lineup_id
    }

    pub fn get_lineup(&self, lineup_id: i64, with_players: bool) -> Result<Lineup, DbError> {
        let row = self
            .lineups
            .get(&lineup_id)
            .map(|entry| entry.value().clone())
            .ok_or(DbError::LineupNotFound)?;

        let players = if with_players {
            Some(self.lineup_members(lineup_id))
        } else {
            None
        };

        Ok(Lineup {
            lineup_id: row.lineup_id,
            formation: row.formation,
            is_local: row.is_local,
            players,
        })
    }

    pub fn update_lineup(&self, lineup_id: i64, update: LineupUpdate) -> Result<(), DbError> {
        let mut row = self
            .lineups
            .get_mut(&lineup_id)
            .ok_or(DbError::LineupNotFound)?;

        if let Some(formation) = update.formation {
            row.formation = formation;
        }
        if let Some(is_local) = update.is_local {
            row.is_local = is_local;
        }
        Ok(())
    }

    pub fn delete_lineup(&self, lineup_id: i64) -> Result<(), DbError> {
        self.lineups
            .remove(&lineup_id)
            .ok_or(DbError::LineupNotFound)?;
        self.lineup_players.remove(&lineup_id);
        Ok(())
    }

    pub fn add_lineup_player(&self, lineup_id: i64, player_id: i64) -> Result<(), DbError> {
        if !self.lineups.contains_key(&lineup_id) {
            return Err(DbError::LineupNotFound);
        }
        if !self.players.contains_key(&player_id) {
            return Err(DbError::PlayerNotFound);
        }

        let mut members = self.lineup_players.entry(lineup_id).or_default();
        if members.contains(&player_id) {
            // Composite-key upsert: re-adding a member is not an error.
            return Ok(());
        }
        if members.len() >= MAX_LINEUP_PLAYERS {
            return Err(DbError::LineupFull);
        }
        members.push(player_id);
        Ok(())
    }

    pub fn remove_lineup_player(&self, lineup_id: i64, player_id: i64) -> Result<(), DbError> {
        if !self.lineups.contains_key(&lineup_id) {
            return Err(DbError::LineupNotFound);
        }
        if let Some(mut members) = self.lineup_players.get_mut(&lineup_id) {
            members.retain(|id| *id != player_id);
        }
        Ok(())
    }

    fn lineup_members(&self, lineup_id: i64) -> Vec<Player> {
        let mut ids = self
            .lineup_players
            .get(&lineup_id)
            .map(|members| members.value().clone())
            .unwrap_or_default();
        ids.sort_unstable();

        ids.into_iter()
            .filter_map(|id| self.players.get(&id).map(|entry| entry.value().clone()))
            .collect()
    }
}

impl Default for SquadDb {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let db = SquadDb::new();
        assert_eq!(db.create_player("Foo".into(), 1, Position::Goalkeeper), 1);
        assert_eq!(db.create_player("Bar".into(), 7, Position::Striker), 2);
        assert_eq!(db.create_lineup(Formation::FourFourTwo, true), 1);
    }

    #[test]
    fn list_filters_and_paginates_in_id_order() {
        let db = SquadDb::new();
        db.create_player("Foo".into(), 1, Position::Goalkeeper);
        db.create_player("Bar".into(), 7, Position::Striker);
        db.create_player("Baz".into(), 9, Position::Striker);

        let strikers = db.list_players(Some(Position::Striker), 0, 100);
        assert_eq!(
            strikers.iter().map(|p| p.player_id).collect::<Vec<_>>(),
            vec![2, 3]
        );

        let page_two = db.list_players(None, 2, 2);
        assert_eq!(page_two.len(), 1);
        assert_eq!(page_two[0].player_id, 3);
    }

    #[test]
    fn deleting_a_player_cascades_out_of_lineups() {
        let db = SquadDb::new();
        let player_id = db.create_player("Foo".into(), 1, Position::Defender);
        let lineup_id = db.create_lineup(Formation::FourThreeThree, false);
        db.add_lineup_player(lineup_id, player_id).unwrap();

        db.delete_player(player_id).unwrap();

        let lineup = db.get_lineup(lineup_id, true).unwrap();
        assert_eq!(lineup.players.unwrap().len(), 0);
    }

    #[test]
    fn lineup_caps_at_eleven_players() {
        let db = SquadDb::new();
        let lineup_id = db.create_lineup(Formation::FourFourTwo, false);
        for i in 0..12 {
            db.create_player(format!("P{i}"), i, Position::Middlefield);
        }
        for player_id in 1..=11 {
            db.add_lineup_player(lineup_id, player_id).unwrap();
        }
        assert_eq!(
            db.add_lineup_player(lineup_id, 12),
            Err(DbError::LineupFull)
        );
        // Re-adding an existing member stays fine.
        assert_eq!(db.add_lineup_player(lineup_id, 3), Ok(()));
    }
}
