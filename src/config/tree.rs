//! Keybinding tree: groups of actions nested under single-key bindings
//!
//! The on-disk form is JSON. Every item carries a `type`; `"group"` items hold
//! an `actions` array, every other type is a leaf action with a `value`. The
//! root object is a group without a key.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Index path from the root through each group's `actions`; empty is the root
pub type Path = Vec<usize>;

/// What an action does when selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Application,
    Url,
    Command,
    Folder,
}

impl ActionType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Application => "application",
            ActionType::Url => "url",
            ActionType::Command => "command",
            ActionType::Folder => "folder",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "application" => Ok(ActionType::Application),
            "url" => Ok(ActionType::Url),
            "command" => Ok(ActionType::Command),
            "folder" => Ok(ActionType::Folder),
            _ => Err(ConfigError::UnknownActionType(s.to_string())),
        }
    }
}

/// A leaf binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub key: Option<String>,
    pub action_type: ActionType,
    pub value: String,
    pub label: Option<String>,
}

impl Action {
    pub fn new(key: impl Into<String>, action_type: ActionType, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            action_type,
            value: value.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Label, or the last path component / the value itself
    pub fn display_label(&self) -> &str {
        if let Some(label) = self.label.as_deref().filter(|l| !l.is_empty()) {
            return label;
        }
        match self.action_type {
            ActionType::Application | ActionType::Folder => {
                let trimmed = self.value.trim_end_matches('/');
                let name = trimmed.rsplit('/').next().unwrap_or(trimmed);
                name.strip_suffix(".app").unwrap_or(name)
            }
            ActionType::Url | ActionType::Command => &self.value,
        }
    }
}

/// A folder of bindings; the tree root is a group with no key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub actions: Vec<KeyItem>,
}

impl Group {
    pub fn new(key: impl Into<String>, actions: Vec<KeyItem>) -> Self {
        Self {
            key: Some(key.into()),
            label: None,
            actions,
        }
    }

    /// Keyless root group
    pub fn root(actions: Vec<KeyItem>) -> Self {
        Self {
            key: None,
            label: None,
            actions,
        }
    }

    /// The fallback configuration used when nothing can be loaded
    pub fn empty_root() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or("Group")
    }

    /// Total number of items beneath this group
    pub fn item_count(&self) -> usize {
        self.actions
            .iter()
            .map(|item| match item {
                KeyItem::Action(_) => 1,
                KeyItem::Group(group) => 1 + group.item_count(),
            })
            .sum()
    }

    /// Sort children A → Z by key, recursively
    ///
    /// Keys compare case-insensitively, then case-sensitively so `a` sorts
    /// before `A`. Items without a key go last. The sort is stable.
    pub fn sort_by_key(&mut self) {
        self.actions.sort_by(|a, b| compare_keys(a.key(), b.key()));
        for item in &mut self.actions {
            if let KeyItem::Group(group) = item {
                group.sort_by_key();
            }
        }
    }
}

fn compare_keys(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.filter(|k| !k.is_empty());
    let b = b.filter(|k| !k.is_empty());
    match (a, b) {
        (Some(a), Some(b)) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| b.cmp(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// One node of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem", into = "RawItem")]
pub enum KeyItem {
    Action(Action),
    Group(Group),
}

impl KeyItem {
    pub fn key(&self) -> Option<&str> {
        match self {
            KeyItem::Action(action) => action.key.as_deref(),
            KeyItem::Group(group) => group.key.as_deref(),
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            KeyItem::Action(action) => action.label.as_deref(),
            KeyItem::Group(group) => group.label.as_deref(),
        }
    }

    pub fn display_label(&self) -> &str {
        match self {
            KeyItem::Action(action) => action.display_label(),
            KeyItem::Group(group) => group.display_label(),
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            KeyItem::Group(group) => Some(group),
            KeyItem::Action(_) => None,
        }
    }

    pub fn as_action(&self) -> Option<&Action> {
        match self {
            KeyItem::Action(action) => Some(action),
            KeyItem::Group(_) => None,
        }
    }
}

impl From<Action> for KeyItem {
    fn from(action: Action) -> Self {
        KeyItem::Action(action)
    }
}

impl From<Group> for KeyItem {
    fn from(group: Group) -> Self {
        KeyItem::Group(group)
    }
}

const GROUP_TYPE: &str = "group";

/// Wire form of a tree item
#[derive(Debug, Serialize, Deserialize)]
struct RawItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "type")]
    item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actions: Option<Vec<KeyItem>>,
}

impl TryFrom<RawItem> for KeyItem {
    type Error = ConfigError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        if raw.item_type == GROUP_TYPE {
            return Ok(KeyItem::Group(Group {
                key: raw.key,
                label: raw.label,
                actions: raw.actions.unwrap_or_default(),
            }));
        }

        Ok(KeyItem::Action(Action {
            key: raw.key,
            action_type: raw.item_type.parse()?,
            value: raw.value.unwrap_or_default(),
            label: raw.label,
        }))
    }
}

impl From<KeyItem> for RawItem {
    fn from(item: KeyItem) -> Self {
        match item {
            KeyItem::Action(action) => RawItem {
                key: action.key,
                item_type: action.action_type.as_str().to_string(),
                label: action.label,
                value: Some(action.value),
                actions: None,
            },
            KeyItem::Group(group) => RawItem {
                key: group.key,
                item_type: GROUP_TYPE.to_string(),
                label: group.label,
                value: None,
                actions: Some(group.actions),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root_without_type() {
        let json = r#"{
            "actions": [
                { "key": "t", "type": "application", "value": "/Applications/Terminal.app" },
                { "key": "o", "type": "group", "label": "Open", "actions": [
                    { "key": "g", "type": "url", "value": "https://github.com" }
                ]}
            ]
        }"#;

        let root: Group = serde_json::from_str(json).unwrap();
        assert_eq!(root.key, None);
        assert_eq!(root.actions.len(), 2);
        assert_eq!(root.actions[0].key(), Some("t"));
        let group = root.actions[1].as_group().expect("second item is a group");
        assert_eq!(group.label.as_deref(), Some("Open"));
        let action = group.actions[0].as_action().unwrap();
        assert_eq!(action.action_type, ActionType::Url);
    }

    #[test]
    fn test_unknown_type_is_parse_error() {
        let json = r#"{ "actions": [ { "key": "x", "type": "teleport", "value": "" } ] }"#;
        let err = serde_json::from_str::<Group>(json).unwrap_err();
        assert!(err.to_string().contains("teleport"));
    }

    #[test]
    fn test_missing_key_parses() {
        let json = r#"{ "actions": [ { "type": "command", "value": "ls" } ] }"#;
        let root: Group = serde_json::from_str(json).unwrap();
        assert_eq!(root.actions[0].key(), None);
    }

    #[test]
    fn test_serialize_writes_type_tags() {
        let root = Group::root(vec![
            Action::new("a", ActionType::Command, "echo hi").into(),
            Group::new("g", vec![]).into(),
        ]);
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["actions"][0]["type"], "command");
        assert_eq!(json["actions"][1]["type"], "group");
        assert!(json["actions"][1]["actions"].is_array());
        assert!(json.get("key").is_none());
    }

    #[test]
    fn test_display_labels() {
        let app = Action::new("s", ActionType::Application, "/Applications/Safari.app");
        assert_eq!(app.display_label(), "Safari");
        let url = Action::new("g", ActionType::Url, "https://github.com");
        assert_eq!(url.display_label(), "https://github.com");
        let labelled = url.clone().with_label("GitHub");
        assert_eq!(labelled.display_label(), "GitHub");
        assert_eq!(Group::new("x", vec![]).display_label(), "Group");
    }

    #[test]
    fn test_sort_by_key() {
        let mut root = Group::root(vec![
            Action::new("b", ActionType::Command, "1").into(),
            Action {
                key: None,
                action_type: ActionType::Command,
                value: "2".into(),
                label: None,
            }
            .into(),
            Action::new("A", ActionType::Command, "3").into(),
            Group::new(
                "a",
                vec![
                    Action::new("z", ActionType::Command, "4").into(),
                    Action::new("c", ActionType::Command, "5").into(),
                ],
            )
            .into(),
        ]);

        root.sort_by_key();

        let keys: Vec<_> = root.actions.iter().map(|i| i.key()).collect();
        assert_eq!(keys, vec![Some("a"), Some("A"), Some("b"), None]);
        let nested: Vec<_> = root.actions[0]
            .as_group()
            .unwrap()
            .actions
            .iter()
            .map(|i| i.key())
            .collect();
        assert_eq!(nested, vec![Some("c"), Some("z")]);
    }

    #[test]
    fn test_item_count() {
        let root = Group::root(vec![
            Action::new("a", ActionType::Command, "1").into(),
            Group::new("g", vec![Action::new("b", ActionType::Command, "2").into()]).into(),
        ]);
        assert_eq!(root.item_count(), 3);
    }
}
