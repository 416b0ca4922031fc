use super::*;
use crate::Seat;
use crate::SessionId;
use crate::policy::Library;
use std::sync::Arc;

/// Routes each engine event of one session to exactly one handler.
///
/// Owns the session's table handle and tracker; nothing here is shared
/// with other sessions except the read-only policy [`Library`].
pub struct Dispatcher {
    id: SessionId,
    table: Box<dyn Table>,
    tracker: Tracker,
    stakes: Stakes,
    library: Arc<Library>,
    emitter: Emitter,
}

impl Dispatcher {
    pub fn new(
        id: SessionId,
        table: Box<dyn Table>,
        stakes: Stakes,
        library: Arc<Library>,
        emitter: Emitter,
    ) -> Self {
        Self {
            id,
            table,
            stakes,
            library,
            emitter,
            tracker: Tracker::default(),
        }
    }
    pub fn id(&self) -> SessionId {
        self.id
    }
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Handles one event. Only transport faults escape; they end the session.
    pub async fn dispatch(&mut self, event: Event) -> Result<(), Fault> {
        log::debug!("[session {}] {}", self.id, event);
        match event {
            Event::Subscribe => self.subscribe().await,
            Event::SeatAssigned { seat } => Ok(self.tracker.occupy(seat)),
            Event::BetsOpen { game } => self.bets_open(&game).await,
            Event::Card { seat, rank } => Ok(self.card(seat, &rank)),
            Event::DecisionRequest(prompt) => self.decide(prompt).await,
            Event::Decision { .. } => Ok(()),
        }
    }

    /// Gives the table back, consuming the dispatcher so it happens once.
    pub async fn release(mut self) {
        log::info!("[session {}] releasing table", self.id);
        self.table.release(self.tracker.seat()).await;
    }
}

impl Dispatcher {
    async fn subscribe(&mut self) -> Result<(), Fault> {
        if let Some(seat) = self.tracker.seat() {
            log::debug!("[session {}] already seated at S{}", self.id, seat);
            return Ok(());
        }
        let Some(wanted) = self.tracker.empty_seat() else {
            log::warn!("[session {}] no empty seat", self.id);
            return Ok(());
        };
        match self.table.sit(wanted).await? {
            Some(seat) => self.seated(seat),
            None => log::warn!("[session {}] table refused S{}", self.id, wanted),
        }
        Ok(())
    }

    fn seated(&mut self, seat: Seat) {
        log::info!("[session {}] sat down at S{}", self.id, seat);
        self.tracker.assign_seat(seat);
        if self.emitter.is_open() {
            self.emitter.emit(&ServerMessage::sat_down(seat));
        }
    }

    async fn bets_open(&mut self, game: &str) -> Result<(), Fault> {
        self.tracker.new_hand();
        match self.tracker.seat() {
            Some(seat) => self.table.bet(seat, game, self.stakes.min()).await,
            None => Ok(log::warn!("[session {}] bets open for {} but not seated", self.id, game)),
        }
    }

    fn card(&mut self, seat: Seat, rank: &str) {
        if self.tracker.seat() == Some(seat) {
            self.tracker.observe_card(seat, rank);
        }
    }

    async fn decide(&mut self, prompt: Prompt) -> Result<(), Fault> {
        if self.tracker.seat() != Some(prompt.seat) {
            return Ok(());
        }
        if let Some(upcard) = prompt.dealer {
            self.tracker.observe_upcard(upcard);
        }
        self.library.ensure().await;
        let key = self.tracker.key(prompt.score, prompt.dealer);
        let choice = self
            .library
            .engine()
            .choose(key, prompt.can_double, prompt.can_split);
        log::info!(
            "[session {}] {} -> {} {:?}",
            self.id,
            key,
            choice.play,
            choice.values
        );
        self.table.play(prompt.seat, &prompt.game, choice.play).await?;
        self.emitter
            .emit(&ServerMessage::decision(Decision::from((&prompt, &choice))));
        Ok(())
    }
}
