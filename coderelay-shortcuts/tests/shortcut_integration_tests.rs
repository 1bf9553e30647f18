//! End-to-end tests for the shortcut pipeline: parse chord strings,
//! register callbacks, dispatch key presses.

use coderelay_shortcuts::{KeyPress, Modifiers, ShortcutRegistry, parse_chord};
use std::cell::Cell;
use std::rc::Rc;

fn press(chord: &str) -> KeyPress {
    let chord = parse_chord(chord).unwrap();
    KeyPress::new(chord.key.clone(), chord.modifiers)
}

#[test]
fn default_editor_bindings_dispatch() {
    let mut registry = ShortcutRegistry::new();
    let saved = Rc::new(Cell::new(0));
    let opened = Rc::new(Cell::new(0));
    let palette = Rc::new(Cell::new(0));

    let count = Rc::clone(&saved);
    registry.register(parse_chord("Ctrl+S").unwrap(), "Save file", move || {
        count.set(count.get() + 1);
    });
    let count = Rc::clone(&opened);
    registry.register(parse_chord("Ctrl+O").unwrap(), "Open file", move || {
        count.set(count.get() + 1);
    });
    let count = Rc::clone(&palette);
    registry.register(
        parse_chord("Ctrl+Shift+P").unwrap(),
        "Command palette",
        move || {
            count.set(count.get() + 1);
        },
    );

    assert!(registry.handle_key(&press("Ctrl+S")));
    assert!(registry.handle_key(&press("Ctrl+Shift+P")));
    assert!(registry.handle_key(&press("Ctrl+S")));
    assert!(!registry.handle_key(&press("Ctrl+P")));

    assert_eq!(saved.get(), 2);
    assert_eq!(opened.get(), 0);
    assert_eq!(palette.get(), 1);
}

#[test]
fn alias_spellings_collide_on_the_same_binding() {
    let mut registry = ShortcutRegistry::new();
    let winner = Rc::new(Cell::new("none"));

    let cell = Rc::clone(&winner);
    registry.register(parse_chord("Cmd+K").unwrap(), "First", move || {
        cell.set("first");
    });
    let cell = Rc::clone(&winner);
    registry.register(parse_chord("Super+k").unwrap(), "Second", move || {
        cell.set("second");
    });

    assert_eq!(registry.len(), 1);
    let meta = Modifiers {
        meta: true,
        ..Default::default()
    };
    assert!(registry.handle_key(&KeyPress::new("K", meta)));
    assert_eq!(winner.get(), "second");
}

#[test]
fn disable_blocks_dispatch_without_losing_bindings() {
    let mut registry = ShortcutRegistry::new();
    let fired = Rc::new(Cell::new(0));

    let count = Rc::clone(&fired);
    registry.register(parse_chord("F5").unwrap(), "Run", move || {
        count.set(count.get() + 1);
    });

    registry.disable();
    assert!(!registry.handle_key(&press("F5")));
    assert_eq!(registry.len(), 1);

    registry.enable();
    assert!(registry.handle_key(&press("F5")));
    assert_eq!(fired.get(), 1);
}

#[test]
fn unregister_then_press_falls_through() {
    let mut registry = ShortcutRegistry::new();
    let chord = parse_chord("Ctrl+W").unwrap();
    registry.register(chord.clone(), "Close tab", || {});

    registry.unregister(&chord);
    assert!(!registry.handle_key(&press("Ctrl+W")));
    assert_eq!(registry.description_for(&chord), None);
}

#[test]
fn named_keys_match_case_insensitively() {
    let mut registry = ShortcutRegistry::new();
    let fired = Rc::new(Cell::new(false));

    let flag = Rc::clone(&fired);
    registry.register(parse_chord("Ctrl+enter").unwrap(), "Submit", move || {
        flag.set(true);
    });

    let ctrl = Modifiers {
        ctrl: true,
        ..Default::default()
    };
    assert!(registry.handle_key(&KeyPress::new("Enter", ctrl)));
    assert!(fired.get());
}
