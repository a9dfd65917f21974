#![forbid(unsafe_code)]

//! Scripted edge-triggered input double.

use std::collections::HashSet;

use imdom_core::{ClickQuery, InputPoll, Key, KeyOpts, VirtualRect};

/// An input poller fed by the test: queue edges before running widgets,
/// then assert on what was consumed.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    down_edges: HashSet<Key>,
    up_edges: HashSet<Key>,
    click_pending: bool,
    pointer_locked: bool,
    consumed_click_bounds: Vec<VirtualRect>,
    keyboard_eaten: u32,
    pointer_lock_reasons: Vec<&'static str>,
    last_key_opts: Option<KeyOpts>,
}

impl ScriptedInput {
    /// Queue a key-press edge for the current tick.
    pub fn press(&mut self, key: Key) {
        self.down_edges.insert(key);
    }

    /// Queue a key-release edge for the current tick.
    pub fn release(&mut self, key: Key) {
        self.up_edges.insert(key);
    }

    /// Queue an unconsumed click for the current tick.
    pub fn queue_click(&mut self) {
        self.click_pending = true;
    }

    /// Whether the pointer is locked (also settable for preconditions).
    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
    }

    /// Bounds passed to `consume_clicks_in`, in call order.
    #[must_use]
    pub fn consumed_click_bounds(&self) -> &[VirtualRect] {
        &self.consumed_click_bounds
    }

    /// Number of `eat_keyboard_input` calls.
    #[must_use]
    pub fn keyboard_eaten(&self) -> u32 {
        self.keyboard_eaten
    }

    /// Reasons passed to `pointer_lock_enter`, in call order.
    #[must_use]
    pub fn pointer_lock_reasons(&self) -> &[&'static str] {
        &self.pointer_lock_reasons
    }

    /// Options of the most recent key query.
    #[must_use]
    pub fn last_key_opts(&self) -> Option<KeyOpts> {
        self.last_key_opts
    }

    /// Drop any un-consumed edges (end of tick).
    pub fn clear_edges(&mut self) {
        self.down_edges.clear();
        self.up_edges.clear();
        self.click_pending = false;
    }
}

impl InputPoll for ScriptedInput {
    fn key_down_edge(&mut self, key: Key, opts: KeyOpts) -> bool {
        self.last_key_opts = Some(opts);
        self.down_edges.remove(&key)
    }

    fn key_up_edge(&mut self, key: Key, opts: KeyOpts) -> bool {
        self.last_key_opts = Some(opts);
        let hit = self.up_edges.remove(&key);
        if hit && opts.pointer_lock_on_event {
            // The platform grants pointer lock from within the event.
            self.pointer_locked = true;
            self.pointer_lock_reasons.push("in_event");
        }
        hit
    }

    fn click(&mut self, query: ClickQuery) -> bool {
        if query.peek {
            self.click_pending
        } else {
            std::mem::take(&mut self.click_pending)
        }
    }

    fn consume_clicks_in(&mut self, bounds: VirtualRect) {
        self.consumed_click_bounds.push(bounds);
    }

    fn eat_keyboard_input(&mut self) {
        self.keyboard_eaten += 1;
    }

    fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    fn pointer_lock_enter(&mut self, reason: &'static str) {
        self.pointer_locked = true;
        self.pointer_lock_reasons.push(reason);
    }

    fn pointer_lock_exit(&mut self) {
        self.pointer_locked = false;
    }
}
