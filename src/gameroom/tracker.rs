use crate::N_SEATS;
use crate::Score;
use crate::Seat;
use crate::policy::StateKey;
use std::collections::BTreeSet;

/// Minimal hand state of one session.
///
/// Trusts its inputs: callers check that an event belongs to the
/// tracked seat before mutating.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tracker {
    seat: Option<Seat>,
    soft: bool,
    upcard: Option<Score>,
    occupied: BTreeSet<Seat>,
}

impl Tracker {
    pub fn assign_seat(&mut self, seat: Seat) {
        self.seat = Some(seat);
        self.occupied.insert(seat);
    }
    pub fn observe_card(&mut self, seat: Seat, rank: &str) {
        if is_ace(rank) {
            log::trace!("[tracker] S{} holds an ace", seat);
            self.soft = true;
        }
    }
    pub fn observe_upcard(&mut self, upcard: Score) {
        self.upcard = Some(upcard);
    }
    pub fn occupy(&mut self, seat: Seat) {
        self.occupied.insert(seat);
    }
    /// Forgets everything about the previous hand.
    pub fn new_hand(&mut self) {
        self.soft = false;
        self.upcard = None;
    }
}

impl Tracker {
    pub fn seat(&self) -> Option<Seat> {
        self.seat
    }
    pub fn soft(&self) -> bool {
        self.soft
    }
    pub fn upcard(&self) -> Option<Score> {
        self.upcard
    }
    /// Highest-numbered free seat.
    pub fn empty_seat(&self) -> Option<Seat> {
        (0..N_SEATS).rev().find(|s| !self.occupied.contains(s))
    }
    /// Policy index for the current hand. A missing upcard reads as 0.
    pub fn key(&self, score: Score, upcard: Option<Score>) -> StateKey {
        StateKey::new(score, upcard.unwrap_or(0), self.soft)
    }
}

pub fn is_ace(rank: &str) -> bool {
    let rank = rank.trim();
    rank.eq_ignore_ascii_case("a") || rank.eq_ignore_ascii_case("ace")
}
