//! Keyboard shortcut registry for the CodeRelay editor shell.
//!
//! Chords pair a key with ctrl/alt/shift/meta modifier flags. The registry
//! keys entries by the chord's canonical id, so re-registering the same
//! combination replaces the earlier binding. Dispatch walks entries in
//! registration order and fires the first match; a disabled registry
//! swallows nothing and matches nothing.
//!
//! The registry is constructed by the application's composition root and
//! owned by the event loop; callbacks run synchronously on that thread.

pub mod chord;
pub mod event;

pub use chord::{KeyChord, Modifiers, ParseError, parse_chord};
pub use event::KeyPress;

use std::fmt;

struct ShortcutEntry {
    chord: KeyChord,
    description: String,
    callback: Box<dyn FnMut()>,
}

/// Ordered collection of key chord bindings with first-match dispatch.
pub struct ShortcutRegistry {
    shortcuts: Vec<ShortcutEntry>,
    enabled: bool,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self {
            shortcuts: Vec::new(),
            enabled: true,
        }
    }

    /// Bind a callback to a chord. Registering a chord whose canonical id
    /// is already bound replaces that binding in place, keeping its
    /// position in dispatch order.
    pub fn register(
        &mut self,
        chord: KeyChord,
        description: impl Into<String>,
        callback: impl FnMut() + 'static,
    ) {
        let entry = ShortcutEntry {
            chord,
            description: description.into(),
            callback: Box::new(callback),
        };
        let id = entry.chord.canonical_id();
        match self
            .shortcuts
            .iter_mut()
            .find(|existing| existing.chord.canonical_id() == id)
        {
            Some(existing) => {
                log::debug!("Replacing shortcut binding for {id}");
                *existing = entry;
            }
            None => self.shortcuts.push(entry),
        }
    }

    /// Remove the binding for a chord, if any.
    pub fn unregister(&mut self, chord: &KeyChord) {
        let id = chord.canonical_id();
        self.shortcuts
            .retain(|entry| entry.chord.canonical_id() != id);
    }

    /// Dispatch a key press: fire the first matching binding's callback and
    /// report whether the press was consumed. A disabled registry consumes
    /// nothing.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        if !self.enabled {
            return false;
        }
        for entry in &mut self.shortcuts {
            if entry.chord.matches(press) {
                log::debug!("Shortcut {} fired", entry.chord);
                (entry.callback)();
                return true;
            }
        }
        false
    }

    /// Description registered for a chord, if bound.
    pub fn description_for(&self, chord: &KeyChord) -> Option<&str> {
        let id = chord.canonical_id();
        self.shortcuts
            .iter()
            .find(|entry| entry.chord.canonical_id() == id)
            .map(|entry| entry.description.as_str())
    }

    /// Registered chords and descriptions in dispatch order.
    pub fn shortcuts(&self) -> impl Iterator<Item = (&KeyChord, &str)> {
        self.shortcuts
            .iter()
            .map(|entry| (&entry.chord, entry.description.as_str()))
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}

impl fmt::Debug for ShortcutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("enabled", &self.enabled)
            .field(
                "shortcuts",
                &self
                    .shortcuts
                    .iter()
                    .map(|entry| entry.chord.canonical_id())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn press(chord: &str) -> KeyPress {
        let chord = parse_chord(chord).unwrap();
        KeyPress::new(chord.key.clone(), chord.modifiers)
    }

    #[test]
    fn new_registry_is_enabled_and_empty() {
        let registry = ShortcutRegistry::new();
        assert!(registry.is_enabled());
        assert!(registry.is_empty());
    }

    #[test]
    fn dispatch_fires_matching_callback() {
        let mut registry = ShortcutRegistry::new();
        let fired = Rc::new(Cell::new(false));

        let flag = Rc::clone(&fired);
        registry.register(parse_chord("Ctrl+S").unwrap(), "Save", move || {
            flag.set(true);
        });

        assert!(registry.handle_key(&press("Ctrl+S")));
        assert!(fired.get());
    }

    #[test]
    fn unmatched_press_is_not_consumed() {
        let mut registry = ShortcutRegistry::new();
        registry.register(parse_chord("Ctrl+S").unwrap(), "Save", || {});

        assert!(!registry.handle_key(&press("Ctrl+N")));
        assert!(!registry.handle_key(&press("Ctrl+Shift+S")));
        assert!(!registry.handle_key(&press("S")));
    }

    #[test]
    fn reregistering_replaces_the_binding() {
        let mut registry = ShortcutRegistry::new();
        let winner = Rc::new(Cell::new(0));

        let first = Rc::clone(&winner);
        registry.register(parse_chord("Ctrl+S").unwrap(), "Old", move || {
            first.set(1);
        });
        let second = Rc::clone(&winner);
        registry.register(parse_chord("ctrl+s").unwrap(), "New", move || {
            second.set(2);
        });

        assert_eq!(registry.len(), 1);
        assert!(registry.handle_key(&press("Ctrl+S")));
        assert_eq!(winner.get(), 2);
        assert_eq!(
            registry.description_for(&parse_chord("Ctrl+S").unwrap()),
            Some("New")
        );
    }

    #[test]
    fn unregister_removes_the_binding() {
        let mut registry = ShortcutRegistry::new();
        let chord = parse_chord("Ctrl+S").unwrap();
        registry.register(chord.clone(), "Save", || {});

        registry.unregister(&chord);
        assert!(registry.is_empty());
        assert!(!registry.handle_key(&press("Ctrl+S")));
    }

    #[test]
    fn disabled_registry_consumes_nothing() {
        let mut registry = ShortcutRegistry::new();
        let fired = Rc::new(Cell::new(false));

        let flag = Rc::clone(&fired);
        registry.register(parse_chord("Ctrl+S").unwrap(), "Save", move || {
            flag.set(true);
        });

        registry.disable();
        assert!(!registry.handle_key(&press("Ctrl+S")));
        assert!(!fired.get());

        registry.enable();
        assert!(registry.handle_key(&press("Ctrl+S")));
        assert!(fired.get());
    }

    #[test]
    fn only_the_first_match_fires() {
        let mut registry = ShortcutRegistry::new();
        let order = Rc::new(Cell::new(0));

        // Two distinct chords that both match the same press are not
        // representable, so this exercises ordering with an identical key
        // under differing modifiers plus a catch-all on the same key.
        let first = Rc::clone(&order);
        registry.register(parse_chord("Ctrl+K").unwrap(), "First", move || {
            first.set(first.get() + 1);
        });
        let second = Rc::clone(&order);
        registry.register(parse_chord("K").unwrap(), "Second", move || {
            second.set(second.get() + 10);
        });

        assert!(registry.handle_key(&press("Ctrl+K")));
        assert_eq!(order.get(), 1);
        assert!(registry.handle_key(&press("K")));
        assert_eq!(order.get(), 11);
    }

    #[test]
    fn listing_preserves_registration_order() {
        let mut registry = ShortcutRegistry::new();
        registry.register(parse_chord("Ctrl+S").unwrap(), "Save", || {});
        registry.register(parse_chord("Ctrl+O").unwrap(), "Open", || {});

        let listed: Vec<_> = registry
            .shortcuts()
            .map(|(chord, description)| (chord.canonical_id(), description.to_string()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("ctrl+s".to_string(), "Save".to_string()),
                ("ctrl+o".to_string(), "Open".to_string()),
            ]
        );
    }
}
