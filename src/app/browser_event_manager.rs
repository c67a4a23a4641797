// src/app/browser_event_manager.rs
//! Attaches and detaches the window `mousemove` listener that keeps the shared pointer snapshot current.

use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, MouseEvent};

use crate::input::pointer::{PointerSnapshot, ScreenPoint, Viewport};

pub(crate) type ListenerSlot = Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>;

/// ブラウザの client 座標 (左上原点) を、左下原点のスクリーン座標に直す。
pub fn client_to_screen(client_x: f32, client_y: f32, viewport: Viewport) -> ScreenPoint {
    ScreenPoint::new(client_x, viewport.height - client_y)
}

/// 今のウィンドウの内側サイズ。取れなかったら None。
pub(crate) fn window_viewport() -> Option<Viewport> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width as f32, height as f32))
}

/// Attaches a mousemove listener to the window that writes every move into `pointer`.
pub(crate) fn attach_pointer_listener(
    pointer: Arc<Mutex<PointerSnapshot>>,
    slot: &ListenerSlot,
) -> Result<(), JsValue> {
    // 二重に付けないように、前のは先に外しておく
    detach_pointer_listener(slot)?;

    let mousemove_closure = Closure::wrap(Box::new(move |event: Event| {
        let Ok(mouse_event) = event.dyn_into::<MouseEvent>() else {
            error!("Failed to cast event to MouseEvent in mousemove listener");
            return;
        };
        match pointer.lock() {
            Ok(mut snapshot) => {
                if let Some(viewport) = window_viewport() {
                    snapshot.viewport = viewport;
                }
                snapshot.position = client_to_screen(
                    mouse_event.client_x() as f32,
                    mouse_event.client_y() as f32,
                    snapshot.viewport,
                );
            }
            Err(e) => error!("Failed to lock pointer snapshot in mousemove listener: {}", e),
        }
    }) as Box<dyn FnMut(Event)>);

    let window = window().ok_or("Failed to get window")?;
    window.add_event_listener_with_callback("mousemove", mousemove_closure.as_ref().unchecked_ref())?;
    let mut guard = slot
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock mousemove closure slot: {}", e)))?;
    *guard = Some(mousemove_closure);
    debug!("Attached mousemove listener.");
    Ok(())
}

/// Detaches the mousemove listener from the window, if one is attached.
pub(crate) fn detach_pointer_listener(slot: &ListenerSlot) -> Result<(), JsValue> {
    let closure = slot
        .lock()
        .map_err(|e| JsValue::from_str(&format!("Failed to lock mousemove closure slot: {}", e)))?
        .take();
    let Some(closure) = closure else {
        return Ok(());
    };
    let window = window().ok_or("Failed to get window")?;
    window.remove_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    debug!("Detached mousemove listener.");
    Ok(())
}
