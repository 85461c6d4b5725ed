//! File-backed session store under ~/.coopera/session.json.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use coopera_ledger::SessionAccess;

use crate::state::ensure_coopera_home;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub account_id: Option<String>,
}

fn session_path() -> Result<PathBuf> {
    Ok(ensure_coopera_home()?.join("session.json"))
}

pub fn load_session() -> Result<SessionState> {
    let p = session_path()?;
    if !p.exists() {
        return Ok(SessionState::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn save_session(session: &SessionState) -> Result<()> {
    let p = session_path()?;
    let s = serde_json::to_string_pretty(session)?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

/// Session loaded once at startup, handed to the services as their
/// [`SessionAccess`] capability.
#[derive(Debug, Clone)]
pub struct StoredSession(SessionState);

pub fn stored() -> Result<StoredSession> {
    Ok(StoredSession(load_session()?))
}

impl SessionAccess for StoredSession {
    fn account_id(&self) -> Option<String> {
        self.0.account_id.clone()
    }

    fn token(&self) -> Option<String> {
        self.0.token.clone()
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

pub fn set_interactive() -> Result<()> {
    let mut session = load_session()?;
    let token = prompt("Paste bearer token")?;
    let account_id = prompt("Account id")?;
    session.token = Some(token);
    session.account_id = Some(account_id);
    save_session(&session)?;
    println!("Saved session to ~/.coopera/session.json");
    Ok(())
}

pub fn show() -> Result<()> {
    let session = load_session()?;
    match (&session.account_id, &session.token) {
        (Some(account), Some(_)) => println!("Active session for account {account} (token stored)"),
        (Some(account), None) => println!("Account {account} set, but no token stored"),
        _ => println!("No active session. Run: coopera session set"),
    }
    Ok(())
}

pub fn clear() -> Result<()> {
    let p = session_path()?;
    if p.exists() {
        fs::remove_file(&p).with_context(|| format!("remove {}", p.display()))?;
    }
    println!("Session cleared");
    Ok(())
}
