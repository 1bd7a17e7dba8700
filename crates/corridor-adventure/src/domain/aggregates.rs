//! Aggregate root for an adventure run.

use chrono::{DateTime, Utc};
use corridor_core::aggregate::AggregateRoot;
use corridor_core::clock::Clock;
use corridor_core::error::DomainError;
use corridor_core::event::EventMetadata;
use tracing::warn;
use uuid::Uuid;

use super::cue::{CueTimings, PendingCue};
use super::events::{
    AdventureEvent, AdventureEventKind, CueFired, EndingReached, GameStarted, LetterCollected,
    LifeLossCause, LifeLost, NarrationLogged, PendantTaken, RunOpened, SceneChanged,
};
use super::narration;
use super::player::PlayerState;
use super::puzzle::{Room, check_answer};
use super::scene::{Action, DeathStage, Ending, EscapeStage, Scene};

/// The aggregate root for one run of the game, from title screen to exit.
#[derive(Debug)]
pub struct AdventureRun {
    /// Aggregate identifier.
    pub id: Uuid,
    /// Current version (event count).
    pub(crate) version: i64,
    pub(crate) scene: Scene,
    pub(crate) player: PlayerState,
    pub(crate) pending_cue: Option<PendingCue>,
    pub(crate) ending: Option<Ending>,
    /// Journal of everything narrated since the game started.
    pub(crate) narration: Vec<String>,
    /// Uncommitted events pending persistence.
    uncommitted_events: Vec<AdventureEvent>,
}

/// What every event recorded by one command shares.
#[derive(Debug, Clone, Copy)]
struct Step {
    correlation_id: Uuid,
    now: DateTime<Utc>,
    timings: CueTimings,
}

impl AdventureRun {
    /// Creates an empty run. Call [`AdventureRun::open`] or replay events.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            version: 0,
            scene: Scene::Title,
            player: PlayerState::default(),
            pending_cue: None,
            ending: None,
            narration: Vec::new(),
            uncommitted_events: Vec::new(),
        }
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene
    }

    #[must_use]
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    #[must_use]
    pub fn pending_cue(&self) -> Option<PendingCue> {
        self.pending_cue
    }

    #[must_use]
    pub fn ending(&self) -> Option<Ending> {
        self.ending
    }

    #[must_use]
    pub fn narration(&self) -> &[String] {
        &self.narration
    }

    /// Returns the next sequence number for a new event.
    #[allow(clippy::cast_possible_wrap)]
    fn next_sequence_number(&self) -> i64 {
        self.version + self.uncommitted_events.len() as i64 + 1
    }

    /// Opens the run on the title screen, producing a `RunOpened` event.
    pub fn open(&mut self, correlation_id: Uuid, clock: &dyn Clock) {
        let step = Step {
            correlation_id,
            now: clock.now(),
            timings: CueTimings::default(),
        };
        self.record(
            AdventureEventKind::RunOpened(RunOpened { run_id: self.id }),
            &step,
        );
    }

    /// Fires every cue that is due at `clock.now()`, returning how many fired.
    pub fn fire_due_cues(
        &mut self,
        correlation_id: Uuid,
        clock: &dyn Clock,
        timings: &CueTimings,
    ) -> usize {
        let step = Step {
            correlation_id,
            now: clock.now(),
            timings: *timings,
        };
        self.fire_due(&step)
    }

    /// Applies a player action to the current scene.
    ///
    /// Due cues fire first, so an action sent after a cinematic has elapsed
    /// lands on the scene the cinematic led to.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a cinematic is still playing or
    /// the scene does not accept the action.
    pub fn perform(
        &mut self,
        action: Action,
        correlation_id: Uuid,
        clock: &dyn Clock,
        timings: &CueTimings,
    ) -> Result<(), DomainError> {
        let step = Step {
            correlation_id,
            now: clock.now(),
            timings: *timings,
        };
        self.fire_due(&step);

        if let Some(cue) = self.pending_cue {
            return Err(DomainError::validation(format!(
                "{} is still playing until {}",
                cue.scene, cue.due_at
            )));
        }

        match (self.scene, action) {
            (Scene::Title, Action::StartGame { name }) => {
                let name = PlayerState::resolve_name(&name);
                let introduction = narration::introduction(&name);
                self.record(
                    AdventureEventKind::GameStarted(GameStarted { player_name: name }),
                    &step,
                );
                self.narrate(vec![introduction], &step);
                self.enter(Scene::MansionOut, step.now, &step);
            }
            (Scene::Title, Action::ShowCredits) => self.enter(Scene::Credits, step.now, &step),
            (Scene::Title, Action::ShowWalkthrough) => {
                self.enter(Scene::Walkthrough, step.now, &step);
            }
            (Scene::Credits | Scene::Walkthrough, Action::Back) => {
                self.enter(Scene::Title, step.now, &step);
            }
            (Scene::MansionOut, Action::ApproachMansion) => {
                self.enter(Scene::MansionIn, step.now, &step);
            }
            (Scene::MansionIn, Action::InspectPendant) => {
                self.narrate(vec![narration::pendant_inspection(self.player.lives)], &step);
            }
            (Scene::MansionIn, Action::TakePendant) if !self.player.pendant_taken => {
                self.record(
                    AdventureEventKind::PendantTaken(PendantTaken {
                        lives: self.player.lives,
                    }),
                    &step,
                );
                self.narrate(vec![narration::PENDANT_TAKEN.to_owned()], &step);
                self.enter(Scene::PendantTaken, step.now, &step);
            }
            (Scene::Hallway, Action::EnterRoom { room }) => {
                self.enter(Scene::PuzzleRoom(room), step.now, &step);
            }
            (Scene::Hallway, Action::TrySouthDoor) => {
                self.narrate(vec![narration::DOOR_PULL.to_owned()], &step);
                self.enter(Scene::SouthDoorAttempt, step.now, &step);
            }
            (Scene::PuzzleRoom(room), Action::InspectRoom) => {
                self.narrate(vec![room.inspect_hint().to_owned()], &step);
            }
            (Scene::PuzzleRoom(room), Action::Solve { answer }) => {
                self.solve(room, answer.as_deref(), &step)?;
            }
            (Scene::PuzzleRoom(_), Action::Back) => self.enter(Scene::Hallway, step.now, &step),
            (
                Scene::Death(DeathStage::Final) | Scene::Escape(EscapeStage::Final),
                Action::Restart,
            ) => self.enter(Scene::Title, step.now, &step),
            (
                Scene::Death(DeathStage::Final) | Scene::Escape(EscapeStage::Final),
                Action::Exit,
            ) => self.enter(Scene::Exited, step.now, &step),
            (scene, action) => {
                return Err(DomainError::validation(format!(
                    "{} is not available in the {scene} scene",
                    action.kind()
                )));
            }
        }
        Ok(())
    }

    fn solve(&mut self, room: Room, answer: Option<&str>, step: &Step) -> Result<(), DomainError> {
        if self.player.ended {
            return Err(DomainError::validation("the run has already ended"));
        }
        if self.player.is_solved(room) {
            self.narrate(vec![room.already_solved_line().to_owned()], step);
            return Ok(());
        }

        if check_answer(room, answer) {
            self.record(
                AdventureEventKind::LetterCollected(LetterCollected {
                    room,
                    letter: room.letter(),
                }),
                step,
            );
            self.narrate(vec![room.success_line().to_owned()], step);
            return Ok(());
        }

        self.narrate(vec![room.failure_line().to_owned()], step);
        let remaining = self.lose_life(LifeLossCause::WrongAnswer(room), step);
        self.narrate(narration::lock_stanza(remaining, remaining), step);
        if remaining == 0 {
            self.enter(Scene::Death(DeathStage::Shudder), step.now, step);
        } else {
            self.narrate(vec![narration::PUZZLE_CHILL.to_owned()], step);
            self.enter(Scene::PuzzleFailed(room), step.now, step);
        }
        Ok(())
    }

    fn fire_due(&mut self, step: &Step) -> usize {
        let mut fired = 0;
        while let Some(cue) = self.pending_cue.filter(|cue| cue.is_due(step.now)) {
            self.record(
                AdventureEventKind::CueFired(CueFired {
                    scene: cue.scene,
                    due_at: cue.due_at,
                }),
                step,
            );
            self.follow_cue(cue, step);
            fired += 1;
        }
        fired
    }

    /// Moves on from a cinematic. Follow-up cues are scheduled from the due
    /// time of the cue that fired, not from when it was observed.
    fn follow_cue(&mut self, cue: PendingCue, step: &Step) {
        let at = cue.due_at;
        match cue.scene {
            Scene::PendantTaken => self.enter(Scene::Blackout, at, step),
            Scene::Blackout | Scene::SouthDoorResisted => self.enter(Scene::Hallway, at, step),
            Scene::PuzzleFailed(room) => self.enter(Scene::PuzzleRoom(room), at, step),
            Scene::SouthDoorAttempt => self.resolve_south_door(at, step),
            Scene::Death(DeathStage::Shudder) => {
                self.enter(Scene::Death(DeathStage::Blackout), at, step);
            }
            Scene::Death(DeathStage::Blackout) => {
                self.enter(Scene::Death(DeathStage::Shadows), at, step);
            }
            Scene::Death(DeathStage::Shadows) => {
                self.enter(Scene::Death(DeathStage::Final), at, step);
            }
            Scene::Escape(EscapeStage::Light) => {
                self.enter(Scene::Escape(EscapeStage::Final), at, step);
            }
            other => warn!(
                run_id = %self.id,
                scene = %other,
                "cue fired for a non-cinematic scene"
            ),
        }
    }

    fn resolve_south_door(&mut self, at: DateTime<Utc>, step: &Step) {
        if self.player.has_all_letters() {
            self.narrate(vec![narration::DOOR_ACCEPTS.to_owned()], step);
            self.enter(Scene::Escape(EscapeStage::Light), at, step);
            return;
        }

        let before = self.player.lives;
        self.narrate(vec![narration::DOOR_RESISTS.to_owned()], step);
        let remaining = self.lose_life(LifeLossCause::LockResisted, step);
        self.narrate(narration::lock_stanza(remaining, before), step);
        if remaining == 0 {
            self.enter(Scene::Death(DeathStage::Shudder), at, step);
        } else {
            self.enter(Scene::SouthDoorResisted, at, step);
        }
    }

    fn lose_life(&mut self, cause: LifeLossCause, step: &Step) -> u8 {
        let lives_remaining = self.player.lives_after_loss();
        self.record(
            AdventureEventKind::LifeLost(LifeLost {
                cause,
                lives_remaining,
            }),
            step,
        );
        lives_remaining
    }

    fn enter(&mut self, to: Scene, entered_at: DateTime<Utc>, step: &Step) {
        let ending = match to {
            Scene::Death(DeathStage::Shudder) => Some(Ending::Death),
            Scene::Escape(EscapeStage::Light) => Some(Ending::Escape),
            _ => None,
        };
        if let Some(ending) = ending {
            self.record(
                AdventureEventKind::EndingReached(EndingReached { ending }),
                step,
            );
        }

        let cue = step.timings.schedule(to, entered_at);
        self.record(
            AdventureEventKind::SceneChanged(SceneChanged {
                from: self.scene,
                to,
                cue,
            }),
            step,
        );
    }

    fn narrate(&mut self, lines: Vec<String>, step: &Step) {
        if lines.is_empty() {
            return;
        }
        self.record(
            AdventureEventKind::NarrationLogged(NarrationLogged { lines }),
            step,
        );
    }

    /// Stamps metadata on a payload, applies it and queues it for persistence.
    fn record(&mut self, kind: AdventureEventKind, step: &Step) {
        let event = AdventureEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                aggregate_id: self.id,
                sequence_number: self.next_sequence_number(),
                correlation_id: step.correlation_id,
                causation_id: step.correlation_id,
                occurred_at: step.now,
            },
            kind,
        };
        self.mutate(&event.kind);
        self.uncommitted_events.push(event);
    }

    /// State changes shared by recording and replay.
    fn mutate(&mut self, kind: &AdventureEventKind) {
        match kind {
            AdventureEventKind::RunOpened(_) => {
                self.scene = Scene::Title;
            }
            AdventureEventKind::GameStarted(payload) => {
                self.player = PlayerState::new(payload.player_name.clone());
                self.ending = None;
                self.narration.clear();
            }
            AdventureEventKind::SceneChanged(payload) => {
                self.scene = payload.to;
                self.pending_cue = payload.cue;
            }
            AdventureEventKind::PendantTaken(_) => {
                self.player.pendant_taken = true;
            }
            AdventureEventKind::LetterCollected(payload) => {
                self.player.letters.insert(payload.letter);
                self.player.solved.insert(payload.room, true);
            }
            AdventureEventKind::LifeLost(payload) => {
                self.player.lives = payload.lives_remaining;
            }
            AdventureEventKind::NarrationLogged(payload) => {
                self.narration.extend(payload.lines.iter().cloned());
            }
            AdventureEventKind::CueFired(_) => {
                self.pending_cue = None;
            }
            AdventureEventKind::EndingReached(payload) => {
                self.player.ended = true;
                self.ending = Some(payload.ending);
            }
        }
    }
}

impl AggregateRoot for AdventureRun {
    type Event = AdventureEvent;

    fn aggregate_id(&self) -> Uuid {
        self.id
    }

    fn version(&self) -> i64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        self.mutate(&event.kind);
        self.version += 1;
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}
