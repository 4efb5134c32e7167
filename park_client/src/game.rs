//! The frame loop driver.
//!
//! Owns the whole session state (actor, camera, targets, score, timer) as one
//! struct; there are no module-level globals. Each frame runs input
//! aggregation, then movement, then proximity scoring, then hands the scene
//! to the render collaborator. The countdown runs off its own 1-second
//! schedule polled from the same loop.

use std::time::Instant;

use tracing::{debug, info};

use park_shared::{
    actor::{Actor, CameraRig, CharacterModel},
    assets::SceneEntity,
    event::{EventQueue, GameEvent},
    input::{self, GamepadSnapshot, KeyboardState},
    math::Vec2,
    movement,
    render::{FrameScene, RenderBackend, UiSink},
    scoring::{self, Session},
    timer::CountdownTimer,
    world::Target,
};

/// A running game session and its collaborators.
pub struct Game<R: RenderBackend, U: UiSink> {
    model: CharacterModel,
    character: SceneEntity,
    actor: Actor,
    camera: CameraRig,
    session: Session,
    targets: Vec<Target>,
    events: EventQueue,
    timer: CountdownTimer,
    renderer: R,
    ui: U,
    debug_overlay: bool,
}

impl<R: RenderBackend, U: UiSink> Game<R, U> {
    pub fn new(
        model: CharacterModel,
        character: SceneEntity,
        targets: Vec<Target>,
        session_seconds: u32,
        renderer: R,
        mut ui: U,
        now: Instant,
    ) -> Self {
        let session = Session::new(session_seconds);
        ui.set_score(session.score);
        ui.set_time_left(session.time_left);
        info!(
            character = model.asset_id(),
            trees = targets.len(),
            seconds = session_seconds,
            "Session started"
        );
        Self {
            model,
            character,
            actor: Actor::spawn(model),
            camera: CameraRig::default(),
            session,
            targets,
            events: Default::default(),
            timer: CountdownTimer::start(now),
            renderer,
            ui,
            debug_overlay: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn set_debug_overlay(&mut self, on: bool) {
        self.debug_overlay = on;
        debug!(on, "Debug overlay toggled");
    }

    /// Drives timer ticks due by `now`, then one frame tick. This is the
    /// only entry point the binary needs.
    pub fn advance(&mut self, now: Instant, keys: &KeyboardState, pad: Option<&GamepadSnapshot>) {
        for _ in 0..self.timer.poll(now) {
            self.second_tick();
        }
        self.frame(keys, pad);
    }

    /// One frame tick: aggregate → move → score → render. After the session
    /// ends the simulation is suppressed but the frozen scene keeps
    /// rendering.
    pub fn frame(&mut self, keys: &KeyboardState, pad: Option<&GamepadSnapshot>) {
        if self.session.is_active() {
            let control = input::aggregate(keys, pad);
            movement::step(&control, &mut self.actor, &mut self.camera, self.model);

            self.ui
                .set_markable_hint(scoring::markable(self.actor.position, &self.targets));
            if control.action {
                self.session
                    .try_mark(self.actor.position, &mut self.targets, &mut self.events);
            }
            self.flush_events();
        }
        self.render();
    }

    /// One wall-clock second elapsed.
    pub fn second_tick(&mut self) {
        self.session.timer_tick(&mut self.events);
        self.ui.set_time_left(self.session.time_left);
        self.flush_events();
    }

    fn flush_events(&mut self) {
        for event in self.events.drain() {
            match event {
                GameEvent::TargetMarked { target, score } => {
                    info!(target, score, "Target marked");
                    self.ui.set_score(score);
                }
                GameEvent::SessionEnded { final_score } => {
                    info!(final_score, "Session ended");
                    self.timer.cancel();
                    self.ui.set_markable_hint(false);
                    self.ui.show_summary(final_score);
                }
            }
        }
    }

    fn render(&mut self) {
        let pose = movement::camera_pose(&self.actor, &self.camera, self.model);
        let trees: Vec<(Vec2, bool)> = self
            .targets
            .iter()
            .map(|t| (t.position, t.marked))
            .collect();
        let scene = FrameScene {
            character: &self.character,
            character_pos: self.actor.position,
            character_heading: self.actor.heading,
            trees: &trees,
        };
        self.renderer.render_frame(&scene, &pose);

        if self.debug_overlay {
            let text = debug_text(self.model, &self.actor, &pose);
            self.ui.set_debug_text(&text);
        }
    }
}

/// Textual pose snapshot for the debug overlay.
fn debug_text(model: CharacterModel, actor: &Actor, pose: &movement::CameraPose) -> String {
    format!(
        "DEBUG MODE\n{name}\nActor: x {ax:.2} z {az:.2} heading {h:.2}\nCamera: x {cx:.2} y {cy:.2} z {cz:.2}",
        name = model.display_name(),
        ax = actor.position.x,
        az = actor.position.z,
        h = actor.heading,
        cx = pose.position.x,
        cy = pose.position.y,
        cz = pose.position.z,
    )
}
