use tracing::{trace, warn};

use crate::config::EditorConfig;
use crate::dispatch::{self, InputEvent};
use crate::doc::{ObjectId, ObjectKind, PartialRect, SceneObject, SceneStore};
use crate::error::InvariantViolation;
use crate::hit::{self, ResizeDirection};
use crate::input::{InputState, Mode, Modifiers, Target, UiState, WheelDelta};
use crate::selection::{self, Propagation};
use crate::viewport::{Point, Viewport};
use crate::{drag, factory, resize};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// One state transition of the scene. Every core operation is one variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetMode(Mode),
    ClickObject(ObjectId),
    ClickBackground,
    PointerEnter(ObjectId),
    PointerLeave(ObjectId),
    /// Hover implied by the target of a click: the object under the pointer,
    /// or none over empty canvas.
    HoverTarget(Option<ObjectId>),
    DoubleClickObject(ObjectId),
    /// Screen-space point of the double-click.
    DoubleClickBackground(Point),
    BeginDrag { id: ObjectId, cursor: Point },
    UpdateDrag(Point),
    EndDrag,
    BeginResize { direction: ResizeDirection, cursor: Point },
    UpdateResize(Point),
    EndResize,
    Pan(WheelDelta),
    ResizeSurface { width: f64, height: f64 },
    UpsertRect { id: ObjectId, rect: PartialRect },
    UpsertData { id: ObjectId, data: serde_json::Value },
    /// Scene-space point of the new object's top-left corner.
    CreateObject { kind: ObjectKind, at: Point },
}

/// Effects returned from a transition for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ObjectCreated(ObjectId),
    ObjectUpdated(ObjectId),
    /// Move input focus into the text editing widget of this object.
    FocusEditingSurface(ObjectId),
    RenderNeeded,
}

/// Everything the renderer draws from, plus the in-flight gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub store: SceneStore,
    pub viewport: Viewport,
    pub ui: UiState,
    pub input: InputState,
    pub config: EditorConfig,
}

/// Apply one action to a scene value.
#[must_use]
pub fn reduce(mut scene: Scene, action: Action) -> (Scene, Vec<Effect>) {
    let effects = scene.apply(action);
    (scene, effects)
}

/// Deliver one physical event to a scene value.
#[must_use]
pub fn reduce_event(mut scene: Scene, event: &InputEvent) -> (Scene, Vec<Effect>) {
    let effects = scene.handle(event);
    (scene, effects)
}

impl Scene {
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self { config, ..Default::default() }
    }

    /// Apply one action in place.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        self.run(std::iter::once(action))
    }

    /// Route a physical event to its handlers and run them in order, stopping
    /// once an object handler consumes it.
    pub fn handle(&mut self, event: &InputEvent) -> Vec<Effect> {
        trace!(?event, "input event");
        let actions = dispatch::route(self, event);
        self.run(actions)
    }

    fn run<I>(&mut self, actions: I) -> Vec<Effect>
    where
        I: IntoIterator<Item = Action>,
    {
        let ui_before = self.ui.clone();
        let viewport_before = self.viewport;
        let input_before = self.input.clone();

        let mut effects = Vec::new();
        for action in actions {
            if self.step(action, &mut effects) == Propagation::Stop {
                break;
            }
        }
        let repaired = !self.repair().is_empty();

        let changed = repaired
            || !effects.is_empty()
            || self.ui != ui_before
            || self.viewport != viewport_before
            || self.input != input_before;
        if changed {
            effects.push(Effect::RenderNeeded);
        }
        effects
    }

    fn step(&mut self, action: Action, effects: &mut Vec<Effect>) -> Propagation {
        match action {
            Action::SetMode(mode) => {
                selection::set_mode(self, mode);
            }
            Action::ClickObject(id) => return selection::click_object(self, &id),
            Action::ClickBackground => {
                selection::click_background(self);
            }
            Action::PointerEnter(id) => {
                selection::pointer_enter(self, &id);
            }
            Action::PointerLeave(id) => {
                selection::pointer_leave(self, &id);
            }
            Action::HoverTarget(id) => {
                selection::hover_target(self, id.as_deref());
            }
            Action::DoubleClickObject(id) => {
                if let Some(id) = selection::double_click_object(self, &id) {
                    effects.push(Effect::FocusEditingSurface(id));
                }
            }
            Action::DoubleClickBackground(point) => {
                if let Some(id) = selection::double_click_background(self, point) {
                    effects.push(Effect::ObjectCreated(id));
                }
            }
            Action::BeginDrag { id, cursor } => {
                drag::begin_drag(self, &id, cursor);
            }
            Action::UpdateDrag(cursor) => {
                if let Some(id) = drag::update_drag(self, cursor) {
                    effects.push(Effect::ObjectUpdated(id));
                }
            }
            Action::EndDrag => {
                drag::end_drag(self);
            }
            Action::BeginResize { direction, cursor } => {
                resize::begin_resize(self, direction, cursor);
            }
            Action::UpdateResize(cursor) => {
                if let Some(id) = resize::update_resize(self, cursor) {
                    effects.push(Effect::ObjectUpdated(id));
                }
            }
            Action::EndResize => {
                if let Some(id) = resize::end_resize(self) {
                    effects.push(Effect::ObjectUpdated(id));
                }
            }
            Action::Pan(delta) => self.viewport = self.viewport.panned(delta),
            Action::ResizeSurface { width, height } => self.viewport = self.viewport.resized(width, height),
            Action::UpsertRect { id, rect } => {
                if self.store.upsert_rect(&id, &rect) {
                    effects.push(Effect::ObjectUpdated(id));
                }
            }
            Action::UpsertData { id, data } => {
                if self.store.upsert_data(&id, &data) {
                    effects.push(Effect::ObjectUpdated(id));
                }
            }
            Action::CreateObject { kind, at } => {
                let id = factory::create_object(&mut self.store, kind, at, &self.config);
                effects.push(Effect::ObjectCreated(id));
            }
        }
        Propagation::Continue
    }

    /// Clear any reference to an object that no longer exists, logging each
    /// repair. Returns what was repaired.
    pub fn repair(&mut self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();

        if let Some(id) = self.ui.selected_id.take_if(|id| !self.store.contains(id.as_str())) {
            violations.push(InvariantViolation::DanglingSelection(id));
        }
        if let Some(id) = self.ui.hovered_id.take_if(|id| !self.store.contains(id.as_str())) {
            violations.push(InvariantViolation::DanglingHover(id));
        }
        let dangling_gesture = self.input.target_id().filter(|id| !self.store.contains(id.as_str())).cloned();
        if let Some(id) = dangling_gesture {
            self.input = InputState::Idle;
            violations.push(InvariantViolation::DanglingGesture(id));
        }

        for violation in &violations {
            warn!(error = %violation, "scene invariant repaired");
        }
        violations
    }

    /// The selected object, if any.
    #[must_use]
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.ui.selected_id.as_deref().and_then(|id| self.store.get(id))
    }

    /// Whether text objects accept editing input (only in text mode).
    #[must_use]
    pub fn text_editable(&self) -> bool {
        self.ui.mode == Mode::Text
    }

    /// CSS cursor to show over `target`: `move` over the selected object's
    /// body, the matching resize cursor over a handle, default otherwise.
    #[must_use]
    pub fn cursor_for(&self, target: &Target) -> Option<&'static str> {
        match target {
            Target::Object(id) if self.ui.selected_id.as_ref() == Some(id) => Some("move"),
            Target::Handle(direction) => Some(direction.cursor()),
            Target::Object(_) | Target::Background => None,
        }
    }
}

/// Mutable façade over [`Scene`] with one method per host input.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub scene: Scene,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { scene: Scene::new(config) }
    }

    /// Apply a single action.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        self.scene.apply(action)
    }

    /// Deliver a physical event.
    pub fn handle(&mut self, event: &InputEvent) -> Vec<Effect> {
        self.scene.handle(event)
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, target: Target, point: Point, modifiers: Modifiers) -> Vec<Effect> {
        self.handle(&InputEvent::PointerDown { target, point, modifiers })
    }

    pub fn on_pointer_move(&mut self, point: Point) -> Vec<Effect> {
        self.handle(&InputEvent::PointerMove { point })
    }

    pub fn on_pointer_up(&mut self, point: Point) -> Vec<Effect> {
        self.handle(&InputEvent::PointerUp { point })
    }

    pub fn on_pointer_enter(&mut self, target: Target) -> Vec<Effect> {
        self.handle(&InputEvent::PointerEnter { target })
    }

    pub fn on_pointer_leave(&mut self, target: Target) -> Vec<Effect> {
        self.handle(&InputEvent::PointerLeave { target })
    }

    pub fn on_click(&mut self, target: Target) -> Vec<Effect> {
        self.handle(&InputEvent::Click { target })
    }

    pub fn on_double_click(&mut self, target: Target, point: Point) -> Vec<Effect> {
        self.handle(&InputEvent::DoubleClick { target, point })
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Effect> {
        self.handle(&InputEvent::Wheel(delta))
    }

    pub fn on_surface_resized(&mut self, width: f64, height: f64) -> Vec<Effect> {
        self.handle(&InputEvent::SurfaceResized { width, height })
    }

    // --- Mode / text ---

    /// Switch the interaction mode (toolbar).
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Effect> {
        self.dispatch(Action::SetMode(mode))
    }

    /// Commit text from the host editor into the object's data.
    pub fn set_text(&mut self, id: &str, text: &str) -> Vec<Effect> {
        self.dispatch(Action::UpsertData { id: id.to_string(), data: serde_json::json!({ "text": text }) })
    }

    // --- Queries ---

    /// The currently selected object id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        self.scene.ui.selected_id.as_deref()
    }

    /// The currently hovered object id, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.scene.ui.hovered_id.as_deref()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.scene.ui.mode
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.scene.viewport
    }

    /// Look up an object by id.
    #[must_use]
    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.scene.store.get(id)
    }

    /// Resolve a screen point to the target under it.
    #[must_use]
    pub fn hit(&self, screen_pt: Point) -> Target {
        hit::hit_test(
            screen_pt,
            &self.scene.store,
            &self.scene.viewport,
            self.selection(),
            self.scene.config.handle_slop_px,
        )
    }
}
