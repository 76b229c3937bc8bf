//! Tests for resolve and redirect.

use super::parse;
use crate::cli::CliCommand;
use amapr_core::redirect::ACTION_VIEW;
use clap::Parser;

#[test]
fn cli_parse_resolve() {
    match parse(&["amapr", "resolve", "geo:0,0?q=Tiananmen"]) {
        CliCommand::Resolve { uri, json } => {
            assert_eq!(uri, "geo:0,0?q=Tiananmen");
            assert!(!json);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_json() {
    match parse(&["amapr", "resolve", "--json", "google.navigation:q=X"]) {
        CliCommand::Resolve { uri, json } => {
            assert_eq!(uri, "google.navigation:q=X");
            assert!(json);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_redirect_defaults() {
    match parse(&["amapr", "redirect", "https://maps.google.com/?daddr=X"]) {
        CliCommand::Redirect {
            uri,
            action,
            mode,
            json,
        } => {
            assert_eq!(uri, "https://maps.google.com/?daddr=X");
            assert_eq!(action, ACTION_VIEW);
            assert!(mode.is_none());
            assert!(!json);
        }
        _ => panic!("expected Redirect"),
    }
}

#[test]
fn cli_parse_redirect_mode_and_action() {
    match parse(&[
        "amapr",
        "redirect",
        "google.navigation:q=X",
        "--mode",
        "2",
        "--action",
        "android.intent.action.SEND",
    ]) {
        CliCommand::Redirect { action, mode, .. } => {
            assert_eq!(action, "android.intent.action.SEND");
            assert_eq!(mode.as_deref(), Some("2"));
        }
        _ => panic!("expected Redirect"),
    }
}

#[test]
fn cli_parse_redirect_requires_uri() {
    assert!(crate::cli::Cli::try_parse_from(["amapr", "redirect"]).is_err());
}
