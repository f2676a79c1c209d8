use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use serenity::{
    all::{ChannelId, CreateCommand, GuildId, RoleId, UserId},
    async_trait,
};
use test_utils::serenity::{create_test_forum, create_test_thread};

use crate::{
    bot::command::{CommandContext, CommandRegistry, DispatchOutcome, SlashCommand},
    config::{test::*, Config},
    data::pending_tester::FilePendingTesterStore,
    error::{discord::DiscordError, AppError},
    model::{
        command::{CommandInvocation, CommandOption, InvokingMember, OptionValue},
        message::Reply,
        thread::{Forum, ForumThread},
    },
    service::{
        discord::mock::{ApiCall, MockDiscordApi, MockResponder, ResponderCall},
        embed,
    },
};

mod status;
mod tester;

const THREAD_ID: u64 = 5000;
const OWNER_ID: u64 = 6000;

fn moderator(roles: &[u64]) -> InvokingMember {
    InvokingMember {
        user_id: UserId::new(7000),
        name: "moderator".to_string(),
        roles: roles.iter().copied().map(RoleId::new).collect(),
    }
}

fn invocation(name: &str, subcommand: Option<&str>) -> CommandInvocation {
    CommandInvocation {
        name: name.to_string(),
        subcommand: subcommand.map(str::to_string),
        member: Some(moderator(&[REQUIRED_ROLE_ID])),
        guild_id: Some(GuildId::new(GUILD_ID)),
        channel_id: ChannelId::new(THREAD_ID),
        options: Vec::new(),
    }
}

fn tracker_api(applied_tags: &[u64]) -> MockDiscordApi {
    let forum = create_test_forum(
        FORUM_ID,
        GUILD_ID,
        "tester-log",
        &[
            (TAG_PENDING_ID, "Pending"),
            (TAG_IN_PROGRESS_ID, "In Progress"),
            (TAG_INVESTIGATING_ID, "Investigating"),
            (TAG_FIXED_ID, "Fixed"),
            (TAG_RESOLVED_ID, "Resolved"),
            (TAG_DUPLICATE_ID, "Duplicate"),
            (TAG_BUG_ID, "Bug"),
        ],
    );
    let thread = create_test_thread(
        THREAD_ID,
        GUILD_ID,
        FORUM_ID,
        OWNER_ID,
        "Crash on start",
        applied_tags,
    );

    MockDiscordApi::new()
        .with_forum(Forum::from_channel(&forum).unwrap())
        .with_thread(ForumThread::from_channel(&thread).unwrap())
}

/// Runs `invocation` through the full default registry.
async fn dispatch_default(
    api: &MockDiscordApi,
    responder: &MockResponder,
    store: &FilePendingTesterStore,
    config: &Config,
    invocation: &CommandInvocation,
) -> DispatchOutcome {
    let ctx = CommandContext {
        api,
        responder,
        store,
        config,
    };

    CommandRegistry::with_default_commands()
        .dispatch(&ctx, invocation)
        .await
}

fn scratch_store() -> (tempfile::TempDir, FilePendingTesterStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePendingTesterStore::new(dir.path().join("pending_testers.txt"));
    (dir, store)
}
