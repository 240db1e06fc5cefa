//! Text and JSON rendering for the CLI

use std::io::Write;

use ds_users::{Lookup, UserRecord, UserSummary};
use serde::Serialize;

pub fn json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn group_label(user: &UserRecord) -> &str {
    if user.has_group() {
        &user.group
    } else {
        "-"
    }
}

/// One line per user: id, name, email, group
pub fn user_line<W: Write>(out: &mut W, user: &UserRecord) -> anyhow::Result<()> {
    writeln!(
        out,
        "{:<6} {:<16} {:<22} {}",
        user.id,
        user.display_name(),
        user.email.as_deref().unwrap_or("-"),
        group_label(user)
    )?;
    Ok(())
}

pub fn user_list<W: Write>(out: &mut W, users: &[UserRecord]) -> anyhow::Result<()> {
    for user in users {
        user_line(out, user)?;
    }
    Ok(())
}

/// Full record, description lines last
pub fn user_detail<W: Write>(out: &mut W, lookup: Lookup<'_>) -> anyhow::Result<()> {
    let user = lookup.record();
    if !lookup.is_found() {
        writeln!(out, "(no match, showing default user)")?;
    }
    writeln!(out, "id:       {}", user.id)?;
    writeln!(out, "name:     {}", user.display_name())?;
    writeln!(out, "email:    {}", user.email.as_deref().unwrap_or("-"))?;
    writeln!(out, "group:    {}", group_label(user))?;
    if let Some(reviewer) = user.is_reviewer.as_option() {
        writeln!(out, "reviewer: {}", reviewer)?;
    }
    if !user.denied_actions.is_empty() {
        let denied: Vec<&str> = user.denied_actions.iter().map(|a| a.as_str()).collect();
        writeln!(out, "denied:   {}", denied.join(", "))?;
    }
    for line in &user.description {
        writeln!(out, "  - {}", line)?;
    }
    Ok(())
}

pub fn summaries<W: Write>(out: &mut W, users: &[UserSummary]) -> anyhow::Result<()> {
    for user in users {
        writeln!(out, "{:<6} {:<16} {}", user.id, user.name, user.email)?;
    }
    Ok(())
}
