//! Leptos Keyboard Accessibility Utilities
//!
//! Keyboard helpers for card grids, tab bars and dialogs.
//! Index arithmetic is kept pure; the DOM-facing helpers only look up
//! elements and move focus.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Elements that can take keyboard focus inside a dialog
pub const FOCUSABLE_SELECTOR: &str =
    "button:not([disabled]), [href], input:not([disabled]), select, textarea, [tabindex]:not([tabindex=\"-1\"])";

/// Which arrow keys a roving group listens to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Left/Right only (tab bars)
    Horizontal,
    /// All four arrows (card grids)
    Grid,
}

/// A focus move inside a roving group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RovingMove {
    Next,
    Previous,
    First,
    Last,
}

/// Enter and Space activate role="button" elements
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Map a key to a roving move for the given orientation
pub fn roving_move(key: &str, orientation: Orientation) -> Option<RovingMove> {
    match (key, orientation) {
        ("ArrowRight", _) => Some(RovingMove::Next),
        ("ArrowLeft", _) => Some(RovingMove::Previous),
        ("ArrowDown", Orientation::Grid) => Some(RovingMove::Next),
        ("ArrowUp", Orientation::Grid) => Some(RovingMove::Previous),
        ("Home", _) => Some(RovingMove::First),
        ("End", _) => Some(RovingMove::Last),
        _ => None,
    }
}

/// Target index for a move, wrapping at both ends
pub fn roving_index(current: usize, len: usize, mv: RovingMove) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let current = current.min(len - 1);
    Some(match mv {
        RovingMove::Next => (current + 1) % len,
        RovingMove::Previous => (current + len - 1) % len,
        RovingMove::First => 0,
        RovingMove::Last => len - 1,
    })
}

/// Where Tab should land to stay inside a trap.
///
/// Returns `None` when the browser's default move already stays inside.
/// `current` is `None` when focus is outside the trap.
pub fn trap_index(current: Option<usize>, len: usize, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match current {
        None => Some(if backwards { len - 1 } else { 0 }),
        Some(0) if backwards => Some(len - 1),
        Some(i) if !backwards && i + 1 >= len => Some(0),
        Some(_) => None,
    }
}

// ========================
// DOM helpers
// ========================

/// Currently focused element, if it is an HTML element
pub fn active_element() -> Option<web_sys::HtmlElement> {
    document()
        .active_element()
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Move focus, ignoring elements that were removed from the page
pub fn focus_element(el: &web_sys::HtmlElement) {
    if el.is_connected() {
        let _ = el.focus();
    }
}

/// All elements under `root` matching `selector`, in document order
pub fn html_elements(root: &web_sys::Element, selector: &str) -> Vec<web_sys::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Focusable elements inside `container`
pub fn focusable_within(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    html_elements(container, FOCUSABLE_SELECTOR)
}

fn position_of(elements: &[web_sys::HtmlElement], node: &web_sys::Node) -> Option<usize> {
    elements.iter().position(|el| el.is_same_node(Some(node)))
}

/// Move focus among the `items` inside the closest `scope` of the event target.
/// Returns true when the key was handled.
pub fn rove_focus(
    ev: &web_sys::KeyboardEvent,
    scope: &str,
    items: &str,
    orientation: Orientation,
) -> bool {
    let Some(mv) = roving_move(&ev.key(), orientation) else {
        return false;
    };
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    let Ok(Some(scope_el)) = target.closest(scope) else {
        return false;
    };
    let elements = html_elements(&scope_el, items);
    let Some(current) = position_of(&elements, &target) else {
        return false;
    };
    if let Some(next) = roving_index(current, elements.len(), mv) {
        ev.prevent_default();
        focus_element(&elements[next]);
    }
    true
}

/// Run `on_activate` for Enter/Space. Returns true when the key was handled.
pub fn activate_on_key(ev: &web_sys::KeyboardEvent, on_activate: impl FnOnce()) -> bool {
    if is_activation_key(&ev.key()) {
        ev.prevent_default();
        on_activate();
        true
    } else {
        false
    }
}

/// Keep Tab / Shift+Tab inside `container`
pub fn trap_tab(ev: &web_sys::KeyboardEvent, container: &web_sys::Element) {
    if ev.key() != "Tab" {
        return;
    }
    let elements = focusable_within(container);
    let current = document()
        .active_element()
        .and_then(|active| position_of(&elements, &active));
    if let Some(target) = trap_index(current, elements.len(), ev.shift_key()) {
        ev.prevent_default();
        focus_element(&elements[target]);
    }
}

/// Create keydown handler for a roving group (tab bar, toolbar)
pub fn make_on_roving_keydown(
    scope: &'static str,
    items: &'static str,
    orientation: Orientation,
) -> impl Fn(web_sys::KeyboardEvent) + Copy + 'static {
    move |ev: web_sys::KeyboardEvent| {
        rove_focus(&ev, scope, items, orientation);
    }
}

/// Create keydown handler that traps focus inside the element it is bound to
pub fn make_on_trap_keydown() -> impl Fn(web_sys::KeyboardEvent) + Copy + 'static {
    move |ev: web_sys::KeyboardEvent| {
        if let Some(container) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        {
            trap_tab(&ev, &container);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn test_horizontal_ignores_vertical_arrows() {
        assert_eq!(roving_move("ArrowDown", Orientation::Horizontal), None);
        assert_eq!(roving_move("ArrowDown", Orientation::Grid), Some(RovingMove::Next));
        assert_eq!(roving_move("ArrowLeft", Orientation::Horizontal), Some(RovingMove::Previous));
        assert_eq!(roving_move("End", Orientation::Horizontal), Some(RovingMove::Last));
    }

    #[test]
    fn test_roving_index_wraps() {
        assert_eq!(roving_index(2, 3, RovingMove::Next), Some(0));
        assert_eq!(roving_index(0, 3, RovingMove::Previous), Some(2));
        assert_eq!(roving_index(1, 3, RovingMove::First), Some(0));
        assert_eq!(roving_index(1, 3, RovingMove::Last), Some(2));
        assert_eq!(roving_index(0, 0, RovingMove::Next), None);
    }

    #[test]
    fn test_trap_index() {
        // Forward past the last element wraps to the first
        assert_eq!(trap_index(Some(2), 3, false), Some(0));
        // Backward past the first wraps to the last
        assert_eq!(trap_index(Some(0), 3, true), Some(2));
        // Moves inside the trap are left to the browser
        assert_eq!(trap_index(Some(1), 3, false), None);
        assert_eq!(trap_index(Some(1), 3, true), None);
        // Focus outside the trap is pulled back in
        assert_eq!(trap_index(None, 3, false), Some(0));
        assert_eq!(trap_index(None, 3, true), Some(2));
        assert_eq!(trap_index(None, 0, false), None);
    }

    #[test]
    fn test_single_element_trap() {
        assert_eq!(trap_index(Some(0), 1, false), Some(0));
        assert_eq!(trap_index(Some(0), 1, true), Some(0));
    }
}
