//! User record model
//!
//! Records describe what an example user is allowed to do in the editor. The
//! permission fields are descriptive data handed to the rendering layer; they
//! are never evaluated here.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ds_core::{DsError, DsResult};
use serde::{Serialize, Serializer};

/// Three-valued flag: set, cleared, or never specified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ternary {
    True,
    False,
    #[default]
    Unknown,
}

impl Ternary {
    pub fn as_option(self) -> Option<bool> {
        match self {
            Ternary::True => Some(true),
            Ternary::False => Some(false),
            Ternary::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, Ternary::Unknown)
    }
}

impl From<Option<bool>> for Ternary {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Ternary::True,
            Some(false) => Ternary::False,
            None => Ternary::Unknown,
        }
    }
}

impl From<bool> for Ternary {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

impl Serialize for Ternary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

/// Comment actions that can be scoped to groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentAction {
    View,
    Edit,
    Remove,
}

impl CommentAction {
    pub const ALL: [CommentAction; 3] = [CommentAction::View, CommentAction::Edit, CommentAction::Remove];

    pub fn as_str(self) -> &'static str {
        match self {
            CommentAction::View => "view",
            CommentAction::Edit => "edit",
            CommentAction::Remove => "remove",
        }
    }
}

impl fmt::Display for CommentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentAction {
    type Err = DsError;

    fn from_str(s: &str) -> DsResult<Self> {
        CommentAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DsError::invalid("comment_action", format!("unknown action '{}'", s)))
    }
}

/// Capabilities that can be switched off for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeniedAction {
    Copy,
    Download,
    Print,
    Protect,
}

impl DeniedAction {
    pub const ALL: [DeniedAction; 4] = [
        DeniedAction::Copy,
        DeniedAction::Download,
        DeniedAction::Print,
        DeniedAction::Protect,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DeniedAction::Copy => "copy",
            DeniedAction::Download => "download",
            DeniedAction::Print => "print",
            DeniedAction::Protect => "protect",
        }
    }
}

impl fmt::Display for DeniedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeniedAction {
    type Err = DsError;

    fn from_str(s: &str) -> DsResult<Self> {
        DeniedAction::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DsError::invalid("denied_action", format!("unknown action '{}'", s)))
    }
}

/// Groups allowed per comment action.
///
/// A present action with no groups is kept distinct from an absent action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CommentPermissions(BTreeMap<CommentAction, Vec<String>>);

impl CommentPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<I, S>(mut self, action: CommentAction, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(action, groups.into_iter().map(Into::into).collect());
        self
    }

    pub fn get(&self, action: CommentAction) -> Option<&[String]> {
        self.0.get(&action).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no action carries any group
    pub fn has_no_restrictions(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CommentAction, &[String])> {
        self.0.iter().map(|(action, groups)| (*action, groups.as_slice()))
    }
}

/// One example user and its permission descriptors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Empty when the user belongs to no group
    pub group: String,
    pub viewer_groups: Option<Vec<String>>,
    pub comment_permissions: CommentPermissions,
    pub review_groups: Option<Vec<String>>,
    pub is_reviewer: Ternary,
    pub denied_actions: Vec<DeniedAction>,
    /// Capability summary lines, rendered in order
    pub description: Vec<String>,
    pub is_default_favorite: bool,
}

impl UserRecord {
    /// The guest record carries neither name nor email
    pub fn is_guest(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Guest")
    }

    pub fn has_group(&self) -> bool {
        !self.group.is_empty()
    }

    pub fn is_denied(&self, action: DeniedAction) -> bool {
        self.denied_actions.contains(&action)
    }

    /// Contact projection; `None` unless both name and email are present
    pub fn summary(&self) -> Option<UserSummary> {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => Some(UserSummary {
                id: self.id.clone(),
                name: name.clone(),
                email: email.clone(),
            }),
            _ => None,
        }
    }
}

/// Contact entry: id, name and email only
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: Option<&str>, email: Option<&str>) -> UserRecord {
        UserRecord {
            id: id.to_string(),
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            group: String::new(),
            viewer_groups: None,
            comment_permissions: CommentPermissions::new(),
            review_groups: None,
            is_reviewer: Ternary::Unknown,
            denied_actions: vec![],
            description: vec![],
            is_default_favorite: false,
        }
    }

    #[test]
    fn test_ternary_conversions() {
        assert_eq!(Ternary::from(Some(true)), Ternary::True);
        assert_eq!(Ternary::from(Some(false)), Ternary::False);
        assert_eq!(Ternary::from(None), Ternary::Unknown);
        assert_eq!(Ternary::from(false).as_option(), Some(false));
        assert!(!Ternary::default().is_known());
    }

    #[test]
    fn test_ternary_serializes_as_nullable_bool() {
        assert_eq!(serde_json::to_string(&Ternary::True).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Ternary::False).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Ternary::Unknown).unwrap(), "null");
    }

    #[test]
    fn test_action_parsing() {
        assert_eq!("edit".parse::<CommentAction>().unwrap(), CommentAction::Edit);
        assert_eq!("print".parse::<DeniedAction>().unwrap(), DeniedAction::Print);
        assert!("delete".parse::<CommentAction>().is_err());
        assert!("Print".parse::<DeniedAction>().is_err());
    }

    #[test]
    fn test_comment_permissions_empty_vs_absent() {
        let perms = CommentPermissions::new()
            .with(CommentAction::View, Vec::<String>::new())
            .with(CommentAction::Edit, ["group-2", ""]);

        assert_eq!(perms.get(CommentAction::View), Some(&[][..]));
        assert_eq!(perms.get(CommentAction::Remove), None);
        assert_eq!(
            perms.get(CommentAction::Edit).unwrap(),
            &["group-2".to_string(), String::new()]
        );
        assert!(!perms.is_empty());
        assert!(!perms.has_no_restrictions());
        assert!(CommentPermissions::new().has_no_restrictions());
    }

    #[test]
    fn test_comment_permissions_json_shape() {
        let perms = CommentPermissions::new()
            .with(CommentAction::Remove, ["group-2"])
            .with(CommentAction::View, ["group-3"]);
        let json = serde_json::to_value(&perms).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "view": ["group-3"], "remove": ["group-2"] })
        );
    }

    #[test]
    fn test_summary_requires_name_and_email() {
        let full = record("uid-9", Some("Ann"), Some("ann@example.com"));
        assert_eq!(
            full.summary(),
            Some(UserSummary {
                id: "uid-9".to_string(),
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
            })
        );
        assert!(record("uid-8", Some("Bob"), None).summary().is_none());
        assert!(record("uid-7", None, None).summary().is_none());
    }

    #[test]
    fn test_guest_helpers() {
        let guest = record("uid-0", None, None);
        assert!(guest.is_guest());
        assert_eq!(guest.display_name(), "Guest");
        assert!(!guest.has_group());

        let named = record("uid-1", Some("John Smith"), Some("smith@example.com"));
        assert!(!named.is_guest());
        assert_eq!(named.display_name(), "John Smith");
    }

    #[test]
    fn test_record_json_uses_camel_case() {
        let mut user = record("uid-5", None, None);
        user.denied_actions = vec![DeniedAction::Protect];
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], "uid-5");
        assert!(json["name"].is_null());
        assert!(json["isReviewer"].is_null());
        assert_eq!(json["deniedActions"], serde_json::json!(["protect"]));
        assert_eq!(json["isDefaultFavorite"], false);
        assert!(json.get("viewerGroups").is_some());
    }
}
