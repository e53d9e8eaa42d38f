//! Drives a parsed script through an input adapter and the router.
//!
//! Steps are normalized into `InputEvent`s and queued on a
//! `PointerDispatcher`; draining the queue feeds the selected adapter the
//! way a host event loop would. In touch mode each event is re-expressed as
//! a `TouchInput` whose `touches` list holds every contact still down.
//! In pointer mode a contact is primary when it goes down while no other
//! contact is down, as browsers report `isPrimary`.

use crate::scene::Scene;
use crate::script::{Script, Step, StepKind};
use std::collections::BTreeMap;
use std::fmt;
use swerve_app_shell::{InputAdapter, InputCapabilities, TouchInput, TouchPoint};
use swerve_foundation::{
    ContactId, GestureConfig, GestureIntent, GestureIntentRouter, InputEvent, MoveDisposition,
    Point, PointerDispatcher, PointerEventKind,
};
use swerve_ui::RegionTree;

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Started,
    NotStarted,
    Moved(MoveDisposition),
    Released,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub line: usize,
    pub contact: ContactId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub outcome: Outcome,
    pub prevented: bool,
    pub intent: Option<GestureIntent>,
    pub offsets: Vec<(String, f32)>,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = format!(
            "{:?}@{} ({}, {})",
            self.kind, self.contact, self.position.x, self.position.y
        );
        let outcome = match &self.outcome {
            Outcome::Moved(disposition) => format!("{disposition:?}"),
            other => format!("{other:?}"),
        };
        write!(f, "{:>4}  {:<24} {:<40}", self.line, event, outcome)?;
        if self.prevented {
            f.write_str(" prevented")?;
        }
        for (name, offset) in &self.offsets {
            write!(f, " {name}={offset}")?;
        }
        Ok(())
    }
}

pub struct Replay {
    scene: Scene,
    router: GestureIntentRouter<RegionTree>,
    adapter: InputAdapter,
    down: BTreeMap<ContactId, Point>,
    primary: Option<ContactId>,
}

impl Replay {
    pub fn new(script: &Script, config: GestureConfig, capabilities: InputCapabilities) -> Self {
        let (scene, tree) = Scene::build(script);
        let router = GestureIntentRouter::with_config(
            std::rc::Rc::new(scene.body.clone()),
            tree,
            config,
        );
        Self {
            scene,
            router,
            adapter: InputAdapter::select(capabilities),
            down: BTreeMap::new(),
            primary: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn adapter_name(&self) -> &'static str {
        self.adapter.name()
    }

    pub fn run(&mut self, steps: &[Step]) -> Vec<Record> {
        let mut dispatcher = PointerDispatcher::new();
        for step in steps {
            dispatcher.push(self.normalize(step));
        }

        let mut records = Vec::with_capacity(steps.len());
        let mut pending = steps.iter();
        dispatcher.drain(|_, event| {
            let Some(step) = pending.next() else {
                return;
            };
            records.push(self.apply(step, event));
        });
        records
    }

    /// Up and cancel carry no coordinates; `apply` reports them at the
    /// contact's last tracked position.
    fn normalize(&self, step: &Step) -> InputEvent {
        match step.kind {
            StepKind::Down { x, y, .. } => InputEvent::down(step.contact, x, y),
            StepKind::Move { x, y } => InputEvent::moved(step.contact, x, y),
            StepKind::Up => InputEvent::new(PointerEventKind::Up, step.contact, Point::ZERO),
            StepKind::Cancel => InputEvent::cancel(step.contact),
        }
    }

    fn apply(&mut self, step: &Step, event: InputEvent) -> Record {
        let origin = match &step.kind {
            StepKind::Down { region, .. } => self.scene.origin(region.as_deref()),
            _ => self.scene.origin(None),
        };
        if event.kind == PointerEventKind::Down
            && self.down.keys().all(|&contact| contact == event.contact)
        {
            self.primary = Some(event.contact);
        }
        let is_primary = self.primary == Some(event.contact);
        let event = event.with_primary(is_primary);
        let position = match event.kind {
            PointerEventKind::Down | PointerEventKind::Move => {
                self.down.insert(event.contact, event.position);
                event.position
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.primary == Some(event.contact) {
                    self.primary = None;
                }
                self.down.remove(&event.contact).unwrap_or(event.position)
            }
        };

        let (outcome, prevented) = match &mut self.adapter {
            InputAdapter::Pointer(pointer) => {
                let outcome = match event.kind {
                    PointerEventKind::Down => {
                        if pointer.on_pointer_down(&mut self.router, &event, &origin).is_started() {
                            Outcome::Started
                        } else {
                            Outcome::NotStarted
                        }
                    }
                    PointerEventKind::Move => {
                        Outcome::Moved(pointer.on_pointer_move(&mut self.router, &event))
                    }
                    PointerEventKind::Up => {
                        pointer.on_pointer_up(&mut self.router, &event);
                        Outcome::Released
                    }
                    PointerEventKind::Cancel => {
                        pointer.on_pointer_cancel(&mut self.router, &event);
                        Outcome::Released
                    }
                };
                (outcome, event.is_default_prevented())
            }
            InputAdapter::Touch(touch) => {
                let changed = TouchPoint::new(event.contact, position.x, position.y);
                let input = TouchInput::new(
                    event.kind,
                    [changed],
                    self.down
                        .iter()
                        .map(|(&id, point)| TouchPoint::new(id, point.x, point.y)),
                );
                let outcome = match event.kind {
                    PointerEventKind::Down => {
                        if touch.on_touch_start(&mut self.router, &input, &origin) {
                            Outcome::Started
                        } else {
                            Outcome::NotStarted
                        }
                    }
                    PointerEventKind::Move => {
                        Outcome::Moved(touch.on_touch_move(&mut self.router, &input))
                    }
                    PointerEventKind::Up => {
                        touch.on_touch_end(&mut self.router, &input);
                        Outcome::Released
                    }
                    PointerEventKind::Cancel => {
                        touch.on_touch_cancel(&mut self.router, &input);
                        Outcome::Released
                    }
                };
                (outcome, input.is_default_prevented())
            }
        };

        log::trace!("line {}: {:?} -> {:?}", step.line, event.kind, outcome);

        Record {
            line: step.line,
            contact: event.contact,
            kind: event.kind,
            position,
            outcome,
            prevented,
            intent: self.router.intent(),
            offsets: self.scene.offsets(),
        }
    }
}
