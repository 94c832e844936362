use anyhow::Result;
use clap::error::ErrorKind;

use super::build;
use crate::configuration::ConfigKey;

#[test]
fn it_builds_a_valid_command() {
    build().debug_assert();
}

#[test]
fn it_has_an_arg_for_every_config_key() {
    let cmd = build();
    for key in [
        ConfigKey::BotName,
        ConfigKey::ConfigFile,
        ConfigKey::HealthCheckTimeout,
        ConfigKey::StoreFile,
        ConfigKey::Username,
        ConfigKey::WebhookURL,
    ] {
        let long = key.to_string();
        assert!(
            cmd.get_arguments()
                .any(|arg| return arg.get_long() == Some(long.as_str())),
            "missing --{long}"
        );
    }
}

#[test]
fn it_parses_global_args_after_subcommands() -> Result<()> {
    let matches = build().try_get_matches_from(vec![
        "parley",
        "chat",
        "--webhook-url",
        "http://rasa:5005/webhooks/rest/webhook",
    ])?;

    let (name, chat_matches) = matches.subcommand().unwrap();
    assert_eq!(name, "chat");
    assert_eq!(
        chat_matches.get_one::<String>("webhook-url"),
        Some(&"http://rasa:5005/webhooks/rest/webhook".to_string())
    );

    return Ok(());
}

#[test]
fn it_rejects_non_numeric_timeouts() {
    let res = build().try_get_matches_from(vec!["parley", "--health-check-timeout", "soon"]);
    assert_eq!(res.unwrap_err().kind(), ErrorKind::ValueValidation);
}

#[test]
fn it_requires_a_session_subcommand() {
    let res = build().try_get_matches_from(vec!["parley", "session"]);
    assert!(res.is_err());
}
