//! Leader sequence state machine
//!
//! The controller owns only its position in the tree. The tree itself is
//! passed into every call so a reload can never leave the controller looking
//! at a stale copy.
//!
//! ```text
//! Inactive --activate()--> Active(root)
//! Active(p) --group key--> Active(p + i)
//! Active(p) --action key--> Inactive   (Dispatch)
//! Active(p) --unknown key--> Active(p)
//! Active(p) --cancel()--> Inactive
//! ```

use std::time::{Duration, Instant};

use crate::config::{find_item, Action, Group, KeyItem, Path};
use crate::keys::{normalize, resolve, KeyEvent};

/// Result of feeding a key to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Matched an action; the sequence is over and the action should run
    Dispatch(Action),
    /// Matched a group; now positioned at this path
    Entered(Path),
    /// No child has this key; position unchanged
    NoMatch,
    /// The controller was not active; the key was not consumed
    Inactive,
}

/// Observable controller state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    Inactive,
    Active(Path),
}

#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    active: bool,
    current_path: Path,
    last_input: Option<Instant>,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a leader sequence at the root
    pub fn activate(&mut self) {
        self.active = true;
        self.current_path.clear();
        self.last_input = Some(Instant::now());
        tracing::debug!("Navigation activated");
    }

    /// Abandon the sequence without dispatching
    pub fn cancel(&mut self) {
        if self.active {
            tracing::debug!("Navigation cancelled at {:?}", self.current_path);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.active = false;
        self.current_path.clear();
        self.last_input = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_path(&self) -> &[usize] {
        &self.current_path
    }

    pub fn state(&self) -> NavigationState {
        if self.active {
            NavigationState::Active(self.current_path.clone())
        } else {
            NavigationState::Inactive
        }
    }

    /// Time of the last activation or key press in this sequence
    pub fn last_input(&self) -> Option<Instant> {
        self.last_input
    }

    /// How long the active sequence has been waiting for input
    pub fn idle_for(&self, now: Instant) -> Option<Duration> {
        if !self.active {
            return None;
        }
        self.last_input
            .map(|last| now.saturating_duration_since(last))
    }

    /// The group whose children are currently selectable
    pub fn current_group<'a>(&self, root: &'a Group) -> Option<&'a Group> {
        if !self.active {
            return None;
        }
        find_item(root, &self.current_path)?.as_group()
    }

    /// Resolve a raw key event and feed the result to [`Self::on_key`]
    ///
    /// Events that resolve to nothing (bare modifiers) are a no-match.
    pub fn on_event(
        &mut self,
        root: &Group,
        event: &KeyEvent,
        force_standard_layout: bool,
    ) -> KeyOutcome {
        if !self.active {
            return KeyOutcome::Inactive;
        }
        match resolve(event, force_standard_layout) {
            Some(glyph) => self.on_key(root, &glyph),
            None => KeyOutcome::NoMatch,
        }
    }

    /// Advance by one key
    ///
    /// Keys compare case-sensitively after glyph normalization. When several
    /// children share a key the first one in array order wins.
    pub fn on_key(&mut self, root: &Group, glyph: &str) -> KeyOutcome {
        if !self.active {
            return KeyOutcome::Inactive;
        }
        self.last_input = Some(Instant::now());

        let Some(group) = find_item(root, &self.current_path).and_then(|item| item.as_group())
        else {
            tracing::warn!(
                "Navigation path {:?} no longer resolves to a group, returning to root",
                self.current_path
            );
            self.current_path.clear();
            return KeyOutcome::NoMatch;
        };

        let Some((idx, item)) = find_child(group, glyph) else {
            tracing::debug!("No binding for {:?} at {:?}", glyph, self.current_path);
            return KeyOutcome::NoMatch;
        };

        match item {
            KeyItem::Group(_) => {
                self.current_path.push(idx);
                tracing::debug!("Entered group {:?}", self.current_path);
                KeyOutcome::Entered(self.current_path.clone())
            }
            KeyItem::Action(action) => {
                tracing::debug!(
                    "Dispatching {} {:?} for {:?}",
                    action.action_type,
                    action.value,
                    glyph
                );
                self.reset();
                KeyOutcome::Dispatch(action.clone())
            }
        }
    }

    /// Labels of the groups entered so far, for an overlay breadcrumb
    pub fn breadcrumbs<'a>(&self, root: &'a Group) -> Vec<&'a str> {
        let mut labels = Vec::with_capacity(self.current_path.len());
        let mut group = root;
        for &idx in &self.current_path {
            let Some(KeyItem::Group(child)) = group.actions.get(idx) else {
                break;
            };
            labels.push(child.display_label());
            group = child;
        }
        labels
    }
}

/// First child whose normalized key equals the normalized glyph
fn find_child<'a>(group: &'a Group, glyph: &str) -> Option<(usize, &'a KeyItem)> {
    let wanted = normalize(glyph);
    if wanted.is_empty() {
        return None;
    }
    group
        .actions
        .iter()
        .enumerate()
        .find(|(_, item)| item.key().is_some_and(|key| normalize(key) == wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionType;

    fn cmd(key: &str, value: &str) -> KeyItem {
        Action::new(key, ActionType::Command, value).into()
    }

    fn sample_root() -> Group {
        Group::root(vec![
            cmd("a", "first-a"),
            cmd("a", "second-a"),
            Group::new("g", vec![cmd("x", "nested")]).with_label("Git").into(),
            cmd("R", "upper"),
            cmd(" ", "space"),
        ])
    }

    #[test]
    fn test_inactive_ignores_keys() {
        let root = sample_root();
        let mut nav = NavigationController::new();
        assert_eq!(nav.on_key(&root, "a"), KeyOutcome::Inactive);
        assert_eq!(nav.state(), NavigationState::Inactive);
        assert!(nav.current_group(&root).is_none());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let root = sample_root();
        let mut nav = NavigationController::new();
        nav.activate();
        match nav.on_key(&root, "a") {
            KeyOutcome::Dispatch(action) => assert_eq!(action.value, "first-a"),
            other => panic!("expected dispatch, got {:?}", other),
        }
    }

    #[test]
    fn test_descend_then_dispatch_resets() {
        let root = sample_root();
        let mut nav = NavigationController::new();
        nav.activate();
        assert_eq!(nav.on_key(&root, "g"), KeyOutcome::Entered(vec![2]));
        assert_eq!(nav.breadcrumbs(&root), vec!["Git"]);
        assert_eq!(nav.current_group(&root).map(|g| g.actions.len()), Some(1));

        assert!(matches!(nav.on_key(&root, "x"), KeyOutcome::Dispatch(_)));
        assert!(!nav.is_active());
        assert!(nav.current_path().is_empty());
    }

    #[test]
    fn test_unknown_key_stays_put() {
        let root = sample_root();
        let mut nav = NavigationController::new();
        nav.activate();
        nav.on_key(&root, "g");
        assert_eq!(nav.on_key(&root, "q"), KeyOutcome::NoMatch);
        assert_eq!(nav.state(), NavigationState::Active(vec![2]));
    }

    #[test]
    fn test_case_sensitive_matching() {
        let root = sample_root();
        let mut nav = NavigationController::new();
        nav.activate();
        assert_eq!(nav.on_key(&root, "r"), KeyOutcome::NoMatch);
        assert!(matches!(nav.on_key(&root, "R"), KeyOutcome::Dispatch(_)));
    }

    #[test]
    fn test_space_matches_space_glyph() {
        let root = sample_root();
        let mut nav = NavigationController::new();
        nav.activate();
        match nav.on_key(&root, "␣") {
            KeyOutcome::Dispatch(action) => assert_eq!(action.value, "space"),
            other => panic!("expected dispatch, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_path_returns_to_root() {
        let root = sample_root();
        let mut nav = NavigationController::new();
        nav.activate();
        nav.on_key(&root, "g");

        let replaced = Group::root(vec![cmd("g", "now-an-action")]);
        assert_eq!(nav.on_key(&replaced, "x"), KeyOutcome::NoMatch);
        assert_eq!(nav.state(), NavigationState::Active(vec![]));
        assert!(matches!(nav.on_key(&replaced, "g"), KeyOutcome::Dispatch(_)));
    }

    #[test]
    fn test_idle_for() {
        let mut nav = NavigationController::new();
        assert_eq!(nav.idle_for(Instant::now()), None);
        nav.activate();
        let last = nav.last_input().unwrap();
        let later = last + Duration::from_millis(250);
        assert_eq!(nav.idle_for(later), Some(Duration::from_millis(250)));
        nav.cancel();
        assert_eq!(nav.idle_for(later), None);
    }
}
