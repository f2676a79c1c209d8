use super::*;

use crate::model::tag::{LabelTag, StatusTag};

/// Tests `bug fix` routed through the registry.
///
/// Expected: Executed with the fixed tag applied and the thread archived
#[tokio::test]
async fn bug_fix_subcommand_closes_thread() {
    let config = test_config();
    let api = tracker_api(&[TAG_BUG_ID, TAG_IN_PROGRESS_ID]);
    let responder = MockResponder::new();
    let (_dir, store) = scratch_store();

    let outcome = dispatch_default(
        &api,
        &responder,
        &store,
        &config,
        &invocation("bug", Some("fix")),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::Executed);
    let thread = api.stored_thread(ChannelId::new(THREAD_ID)).unwrap();
    assert_eq!(
        thread.applied_tags,
        vec![
            config.tags.label_id(LabelTag::Bug),
            config.tags.id(StatusTag::Fixed)
        ]
    );
    assert!(thread.archived);
}

/// Tests the standalone status commands.
///
/// Expected: each command applies its own status tag
#[tokio::test]
async fn standalone_commands_apply_their_status() {
    let config = test_config();

    for (name, tag, closes) in [
        ("fix", TAG_FIXED_ID, true),
        ("in-progress", TAG_IN_PROGRESS_ID, false),
        ("investigate", TAG_INVESTIGATING_ID, false),
        ("resolved", TAG_RESOLVED_ID, true),
    ] {
        let api = tracker_api(&[TAG_PENDING_ID]);
        let responder = MockResponder::new();
        let (_dir, store) = scratch_store();

        let outcome =
            dispatch_default(&api, &responder, &store, &config, &invocation(name, None)).await;

        assert_eq!(outcome, DispatchOutcome::Executed);
        let thread = api.stored_thread(ChannelId::new(THREAD_ID)).unwrap();
        assert_eq!(thread.applied_tags.len(), 1);
        assert_eq!(thread.applied_tags[0].get(), tag);
        assert_eq!(thread.archived, closes);
    }
}

/// Tests `bug` with a missing or unknown subcommand.
///
/// Expected: Executed with no Discord call and no reply
#[tokio::test]
async fn bug_without_known_subcommand_is_noop() {
    let config = test_config();

    for subcommand in [None, Some("reopen")] {
        let api = tracker_api(&[TAG_PENDING_ID]);
        let responder = MockResponder::new();
        let (_dir, store) = scratch_store();

        let outcome = dispatch_default(
            &api,
            &responder,
            &store,
            &config,
            &invocation("bug", subcommand),
        )
        .await;

        assert_eq!(outcome, DispatchOutcome::Executed);
        assert!(api.calls().is_empty());
        assert!(responder.calls().is_empty());
    }
}

/// Tests `duplicate` pointing at another thread.
///
/// Expected: Executed with the jump URL of the original built from the guild
#[tokio::test]
async fn duplicate_links_selected_thread() {
    let config = test_config();
    let api = tracker_api(&[TAG_PENDING_ID]);
    let responder = MockResponder::new();
    let (_dir, store) = scratch_store();
    let mut invocation = invocation("duplicate", None);
    invocation.options.push(CommandOption {
        name: "thread".to_string(),
        value: OptionValue::Channel {
            id: ChannelId::new(4242),
            name: Some("Crash when opening settings".to_string()),
        },
    });

    let outcome = dispatch_default(&api, &responder, &store, &config, &invocation).await;

    assert_eq!(outcome, DispatchOutcome::Executed);
    let expected = embed::bug_duplicate(
        "Crash when opening settings",
        &format!("https://discord.com/channels/{}/4242", GUILD_ID),
    );
    assert!(api.calls().iter().any(|call| matches!(
        call,
        ApiCall::SendMessage { message, .. } if message.embed == expected
    )));
    assert!(api.stored_thread(ChannelId::new(THREAD_ID)).unwrap().archived);
}
