use super::*;

use crate::data::pending_tester::PendingTesterStore;

fn tester_invocation(target: u64, name: &str) -> CommandInvocation {
    let mut invocation = invocation("tester", None);
    invocation.options.push(CommandOption {
        name: "user".to_string(),
        value: OptionValue::User {
            id: UserId::new(target),
            name: name.to_string(),
        },
    });
    invocation
}

/// Tests `tester` for a user who has not joined the guild.
///
/// Expected: public deferral, the ID queued on disk, and the pending embed
#[tokio::test]
async fn tester_for_absent_user_queues() {
    let config = test_config();
    let api = MockDiscordApi::new();
    let responder = MockResponder::new();
    let (_dir, store) = scratch_store();

    let outcome = dispatch_default(
        &api,
        &responder,
        &store,
        &config,
        &tester_invocation(8000, "newcomer"),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::Executed);
    assert!(api.calls().is_empty());
    assert!(store.contains(UserId::new(8000)).await.unwrap());
    assert_eq!(
        responder.calls(),
        vec![
            ResponderCall::Defer { ephemeral: false },
            ResponderCall::Respond(Reply::embed(embed::tester_pending("newcomer"))),
        ]
    );
}

/// Tests `tester` invoked outside a guild.
///
/// Expected: the server-only embed and no lookup or grant
#[tokio::test]
async fn tester_outside_guild_is_rejected() {
    let config = test_config();
    let api = MockDiscordApi::new();
    let responder = MockResponder::new();
    let (_dir, store) = scratch_store();
    let mut invocation = tester_invocation(8000, "newcomer");
    invocation.guild_id = None;

    let outcome = dispatch_default(&api, &responder, &store, &config, &invocation).await;

    assert_eq!(outcome, DispatchOutcome::Executed);
    assert!(api.calls().is_empty());
    assert_eq!(
        responder.replies(),
        vec![Reply::embed(embed::guild_only())]
    );
}

/// Tests that a failed final reply reaches the router's failure boundary.
///
/// Expected: Failed after the tester reply could not be sent
#[tokio::test]
async fn tester_reply_failure_is_contained() {
    let config = test_config();
    let api = MockDiscordApi::new();
    let responder = MockResponder::failing_responses();
    let (_dir, store) = scratch_store();

    let outcome = dispatch_default(
        &api,
        &responder,
        &store,
        &config,
        &tester_invocation(8000, "newcomer"),
    )
    .await;

    assert_eq!(outcome, DispatchOutcome::Failed);
    assert!(store.contains(UserId::new(8000)).await.unwrap());
}
