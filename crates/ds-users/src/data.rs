//! The example user set
//!
//! Built once on first access and never mutated afterwards.

use std::sync::LazyLock;

use crate::model::{CommentAction, CommentPermissions, DeniedAction, Ternary, UserRecord};

pub const FALLBACK_USER_ID: &str = "uid-1";
pub const GUEST_USER_ID: &str = "uid-0";

/// All example users, fallback record first
pub static EXAMPLE_USERS: LazyLock<Vec<UserRecord>> = LazyLock::new(build_users);

const DESCR_USER_1: &[&str] = &[
    "File author by default",
    "Doesn’t belong to any group",
    "Can review all the changes",
    "Can perform all actions with comments",
    "The file favorite state is undefined",
    "Can create files from templates using data from the editor",
    "Can see the information about all users",
];

const DESCR_USER_2: &[&str] = &[
    "Belongs to Group2",
    "Can review only his own changes or changes made by users with no group",
    "Can view comments, edit his own comments and comments left by users with no group. \
     Can remove his own comments only",
    "This file is marked as favorite",
    "Can create new files from the editor",
    "Can see the information about users from Group2 and users who don’t belong to any group",
];

const DESCR_USER_3: &[&str] = &[
    "Belongs to Group3",
    "Can review changes made by Group2 users",
    "Can view comments left by Group2 and Group3 users. Can edit comments left by the Group2 users",
    "This file isn’t marked as favorite",
    "Can’t copy data from the file to clipboard",
    "Can’t download the file",
    "Can’t print the file",
    "Can create new files from the editor",
    "Can see the information about Group2 users",
];

const DESCR_USER_0: &[&str] = &[
    "The name is requested when the editor is opened",
    "Doesn’t belong to any group",
    "Can review all the changes",
    "Can perform all actions with comments",
    "The file favorite state is undefined",
    "Can't mention others in comments",
    "Can't create new files from the editor",
    "Can’t see anyone’s information",
    "Can't rename files from the editor",
    "Can't view chat",
    "View file without collaboration",
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn build_users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: FALLBACK_USER_ID.to_string(),
            name: Some("John Smith".to_string()),
            email: Some("smith@example.com".to_string()),
            group: String::new(),
            viewer_groups: None,
            comment_permissions: CommentPermissions::new(),
            review_groups: None,
            is_reviewer: Ternary::Unknown,
            denied_actions: vec![],
            description: strings(DESCR_USER_1),
            is_default_favorite: true,
        },
        UserRecord {
            id: "uid-2".to_string(),
            name: Some("Mark Pottato".to_string()),
            email: Some("pottato@example.com".to_string()),
            group: "group-2".to_string(),
            viewer_groups: Some(strings(&["group-2", ""])),
            comment_permissions: CommentPermissions::new()
                .with(CommentAction::View, Vec::<String>::new())
                .with(CommentAction::Edit, ["group-2", ""])
                .with(CommentAction::Remove, ["group-2"]),
            review_groups: Some(strings(&["group-2", ""])),
            is_reviewer: Ternary::True,
            denied_actions: vec![],
            description: strings(DESCR_USER_2),
            is_default_favorite: false,
        },
        UserRecord {
            id: "uid-3".to_string(),
            name: Some("Hamish Mitchell".to_string()),
            email: Some("mitchell@example.com".to_string()),
            group: "group-3".to_string(),
            viewer_groups: Some(strings(&["group-2"])),
            comment_permissions: CommentPermissions::new()
                .with(CommentAction::View, ["group-3", "group-2"])
                .with(CommentAction::Edit, ["group-2"])
                .with(CommentAction::Remove, Vec::<String>::new()),
            review_groups: Some(strings(&["group-2"])),
            is_reviewer: Ternary::False,
            denied_actions: vec![DeniedAction::Copy, DeniedAction::Download, DeniedAction::Print],
            description: strings(DESCR_USER_3),
            is_default_favorite: false,
        },
        UserRecord {
            id: GUEST_USER_ID.to_string(),
            name: None,
            email: None,
            group: String::new(),
            viewer_groups: None,
            comment_permissions: CommentPermissions::new(),
            review_groups: Some(vec![]),
            is_reviewer: Ternary::Unknown,
            denied_actions: vec![DeniedAction::Protect],
            description: strings(DESCR_USER_0),
            is_default_favorite: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_four_records_in_fixed_order() {
        let ids: Vec<&str> = EXAMPLE_USERS.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["uid-1", "uid-2", "uid-3", "uid-0"]);
    }

    #[test]
    fn test_ids_unique_and_non_empty() {
        let ids: HashSet<&str> = EXAMPLE_USERS.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids.len(), EXAMPLE_USERS.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_fallback_is_first() {
        assert_eq!(EXAMPLE_USERS[0].id, FALLBACK_USER_ID);
    }

    #[test]
    fn test_guest_lacks_name_and_email() {
        let guest = EXAMPLE_USERS
            .iter()
            .find(|u| u.id == GUEST_USER_ID)
            .unwrap();
        assert!(guest.is_guest());
        assert_eq!(guest.denied_actions, vec![DeniedAction::Protect]);
        assert_eq!(guest.review_groups, Some(vec![]));
        // only the guest is anonymous
        assert_eq!(EXAMPLE_USERS.iter().filter(|u| u.is_guest()).count(), 1);
    }

    #[test]
    fn test_description_lengths_and_order() {
        let lens: Vec<usize> = EXAMPLE_USERS.iter().map(|u| u.description.len()).collect();
        assert_eq!(lens, [7, 6, 9, 11]);
        assert_eq!(EXAMPLE_USERS[0].description[0], "File author by default");
        assert_eq!(
            EXAMPLE_USERS[3].description.last().unwrap(),
            "View file without collaboration"
        );
    }

    #[test]
    fn test_group_two_permissions() {
        let mark = &EXAMPLE_USERS[1];
        assert_eq!(mark.group, "group-2");
        assert_eq!(mark.is_reviewer, Ternary::True);
        assert_eq!(mark.comment_permissions.get(CommentAction::View), Some(&[][..]));
        assert_eq!(
            mark.comment_permissions.get(CommentAction::Remove).unwrap(),
            &["group-2".to_string()]
        );
    }

    #[test]
    fn test_group_three_denials() {
        let hamish = &EXAMPLE_USERS[2];
        assert!(hamish.is_denied(DeniedAction::Copy));
        assert!(hamish.is_denied(DeniedAction::Download));
        assert!(hamish.is_denied(DeniedAction::Print));
        assert!(!hamish.is_denied(DeniedAction::Protect));
        assert_eq!(hamish.is_reviewer, Ternary::False);
    }

    #[test]
    fn test_only_first_user_is_default_favorite() {
        let flags: Vec<bool> = EXAMPLE_USERS.iter().map(|u| u.is_default_favorite).collect();
        assert_eq!(flags, [true, false, false, false]);
    }
}
