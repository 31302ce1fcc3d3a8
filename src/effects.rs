//! Celebration effects. Drives the page's global `confetti` function when one
//! is loaded; otherwise every call is a no-op. Nothing here touches game state.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use tracing::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::model::{CosmeticTier, Effect, LEVEL_UP_EFFECT_MS};

#[derive(Serialize, Default)]
struct Origin {
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
}

#[derive(Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfettiOptions {
    particle_count: u32,
    spread: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    angle: Option<u32>,
    origin: Origin,
    colors: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    gravity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_velocity: Option<u32>,
    #[serde(skip_serializing_if = "no_shapes")]
    shapes: &'static [&'static str],
}

fn no_shapes(shapes: &&'static [&'static str]) -> bool {
    shapes.is_empty()
}

const FIRE_COLORS: &[&str] = &["#FF4500", "#FF8C00", "#FFD700", "#FFFFFF"];

fn confetti(opts: &ConfettiOptions) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&win, &JsValue::from_str("confetti")) else {
        return;
    };
    let Some(func) = func.dyn_ref::<js_sys::Function>() else {
        return;
    };
    let Ok(json) = serde_json::to_string(opts) else {
        return;
    };
    if let Ok(arg) = js_sys::JSON::parse(&json) {
        let _ = func.call1(&JsValue::NULL, &arg);
    }
}

fn standard_burst() {
    confetti(&ConfettiOptions {
        particle_count: 50,
        spread: 70,
        origin: Origin { x: None, y: Some(0.6) },
        colors: &["#00ff9d", "#00eaff", "#e94560"],
        ..Default::default()
    });
}

// Two flames from the bottom corners.
fn fire_burst() {
    for (angle, x) in [(60, 0.0), (120, 1.0)] {
        confetti(&ConfettiOptions {
            particle_count: 80,
            spread: 80,
            angle: Some(angle),
            origin: Origin { x: Some(x), y: Some(0.8) },
            colors: FIRE_COLORS,
            gravity: Some(0.5),
            decay: Some(0.94),
            start_velocity: Some(60),
            shapes: &["circle"],
        });
    }
}

fn side_cannons() {
    confetti(&ConfettiOptions {
        particle_count: 5,
        spread: 55,
        angle: Some(60),
        origin: Origin { x: Some(0.0), y: None },
        colors: &["#00ff9d", "#00eaff"],
        ..Default::default()
    });
    confetti(&ConfettiOptions {
        particle_count: 5,
        spread: 55,
        angle: Some(120),
        origin: Origin { x: Some(1.0), y: None },
        colors: &["#e94560", "#fff"],
        ..Default::default()
    });
}

/// Fires side cannons every animation frame until the time budget runs out.
fn level_up_loop() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let end = js_sys::Date::now() + LEVEL_UP_EFFECT_MS;
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let frame_loop = frame.clone();
    let window_loop = window.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        side_cannons();
        if js_sys::Date::now() >= end {
            let _ = frame_loop.borrow_mut().take();
            return;
        }
        if let Some(cb) = frame_loop.borrow().as_ref() {
            let _ = window_loop.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = frame.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn play(effect: Effect) {
    match effect {
        Effect::Burst(CosmeticTier::Standard) => standard_burst(),
        Effect::Burst(CosmeticTier::Elevated) => fire_burst(),
        Effect::LevelUp => level_up_loop(),
    }
}

pub fn tutorial_finished() {
    standard_burst();
}

const TRAIL_SPAWN_CHANCE: f64 = 0.3;
const TRAIL_DRIFT_PX: f64 = 60.0;
/// Downward bias so particles tend to fall.
const TRAIL_FALL_PX: f64 = 20.0;
const TRAIL_PARTICLE_MS: i32 = 1200;

/// One cursor-trail particle, rolled from uniform samples in `[0, 1)`.
#[derive(Clone, Debug, PartialEq)]
struct TrailParticle {
    hue: u32,
    drift_x: f64,
    drift_y: f64,
}

impl TrailParticle {
    fn roll(spawn: f64, hue: f64, drift_x: f64, drift_y: f64) -> Option<Self> {
        if spawn > TRAIL_SPAWN_CHANCE {
            return None;
        }
        Some(Self {
            hue: (hue * 360.0).floor() as u32 % 360,
            drift_x: (drift_x - 0.5) * TRAIL_DRIFT_PX,
            drift_y: (drift_y - 0.5) * TRAIL_DRIFT_PX + TRAIL_FALL_PX,
        })
    }

    fn color(&self) -> String {
        format!("hsl({}, 70%, 80%)", self.hue)
    }
}

fn spawn_trail_particle(doc: &Document, x: i32, y: i32) {
    let rand = js_sys::Math::random;
    let Some(particle) = TrailParticle::roll(rand(), rand(), rand(), rand()) else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };
    let Some(el) = doc.create_element("div").ok().and_then(|e| e.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let _ = el.class_list().add_1("legend-particle");
    let color = particle.color();
    let style = el.style();
    for (prop, value) in [
        ("left", format!("{}px", x)),
        ("top", format!("{}px", y)),
        ("background", color.clone()),
        ("box-shadow", format!("0 0 10px {}", color)),
        ("--drift-x", format!("{}px", particle.drift_x)),
        ("--drift-y", format!("{}px", particle.drift_y)),
    ] {
        let _ = style.set_property(prop, &value);
    }
    if body.append_child(&el).is_err() {
        return;
    }
    if let Some(win) = web_sys::window() {
        let cleanup = Closure::once_into_js(move || el.remove());
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cleanup.unchecked_ref(), TRAIL_PARTICLE_MS);
    }
}

/// Cursor trail shown in legendary mode. The `mousemove` listener lives as
/// long as this value and is detached on drop.
pub struct LegendaryTrail {
    doc: Document,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl LegendaryTrail {
    pub fn attach() -> Option<Self> {
        let doc = web_sys::window()?.document()?;
        let target = doc.clone();
        let listener = Closure::wrap(Box::new(move |e: MouseEvent| {
            spawn_trail_particle(&target, e.client_x(), e.client_y());
        }) as Box<dyn FnMut(MouseEvent)>);
        doc.add_event_listener_with_callback("mousemove", listener.as_ref().unchecked_ref())
            .ok()?;
        info!("legendary trail attached");
        Some(Self { doc, listener })
    }
}

impl Drop for LegendaryTrail {
    fn drop(&mut self) {
        let _ = self
            .doc
            .remove_event_listener_with_callback("mousemove", self.listener.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_spawns_on_roughly_a_third_of_moves() {
        assert!(TrailParticle::roll(0.0, 0.5, 0.5, 0.5).is_some());
        assert!(TrailParticle::roll(0.3, 0.5, 0.5, 0.5).is_some());
        assert!(TrailParticle::roll(0.31, 0.5, 0.5, 0.5).is_none());
        assert!(TrailParticle::roll(0.99, 0.5, 0.5, 0.5).is_none());
    }

    #[test]
    fn trail_particle_hue_and_drift_ranges() {
        let centre = TrailParticle::roll(0.0, 0.5, 0.5, 0.5).unwrap();
        assert_eq!(centre, TrailParticle { hue: 180, drift_x: 0.0, drift_y: 20.0 });
        assert_eq!(centre.color(), "hsl(180, 70%, 80%)");

        let low = TrailParticle::roll(0.0, 0.0, 0.0, 0.0).unwrap();
        assert_eq!((low.hue, low.drift_x, low.drift_y), (0, -30.0, -10.0));

        let high = TrailParticle::roll(0.0, 0.999, 0.999, 0.999).unwrap();
        assert_eq!(high.hue, 359);
        assert!(high.drift_x < 30.0 && high.drift_y < 50.0);
    }
}
