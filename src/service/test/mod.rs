use std::{collections::HashSet, sync::Mutex};

use serenity::{
    all::{ChannelId, ForumTagId, GuildId, RoleId, UserId},
    async_trait,
};
use test_utils::serenity::{create_test_forum, create_test_thread};

use crate::{
    config::test::*,
    data::pending_tester::PendingTesterStore,
    error::store::StoreError,
    model::{
        command::{CommandInvocation, InvokingMember},
        member::GuildMember,
        thread::{Forum, ForumThread},
    },
    service::discord::mock::{ApiCall, Failure, MockDiscordApi, MockResponder, ResponderCall},
};


const THREAD_ID: u64 = 5000;
const OWNER_ID: u64 = 6000;
const OTHER_FORUM_ID: u64 = 2001;

/// The tracking forum offering every configured tag except those in `missing`.
fn tracker_forum_without(missing: &[u64]) -> Forum {
    let tags: Vec<(u64, &str)> = [
        (TAG_PENDING_ID, "Pending"),
        (TAG_IN_PROGRESS_ID, "In Progress"),
        (TAG_INVESTIGATING_ID, "Investigating"),
        (TAG_FIXED_ID, "Fixed"),
        (TAG_RESOLVED_ID, "Resolved"),
        (TAG_DUPLICATE_ID, "Duplicate"),
        (TAG_BUG_ID, "Bug"),
        (TAG_FEATURE_ID, "Feature"),
        (TAG_FEEDBACK_ID, "Feedback"),
    ]
    .into_iter()
    .filter(|(id, _)| !missing.contains(id))
    .collect();

    Forum::from_channel(&create_test_forum(FORUM_ID, GUILD_ID, "tester-log", &tags)).unwrap()
}

fn tracker_forum() -> Forum {
    tracker_forum_without(&[])
}

fn thread_in(parent_id: u64, tags: &[u64]) -> ForumThread {
    ForumThread::from_channel(&create_test_thread(
        THREAD_ID,
        GUILD_ID,
        parent_id,
        OWNER_ID,
        "Crash on start",
        tags,
    ))
    .unwrap()
}

fn tags(ids: &[u64]) -> Vec<ForumTagId> {
    ids.iter().copied().map(ForumTagId::new).collect()
}

fn invocation(name: &str, channel_id: u64) -> CommandInvocation {
    CommandInvocation {
        name: name.to_string(),
        subcommand: None,
        member: Some(InvokingMember {
            user_id: UserId::new(7000),
            name: "moderator".to_string(),
            roles: vec![RoleId::new(REQUIRED_ROLE_ID)],
        }),
        guild_id: Some(GuildId::new(GUILD_ID)),
        channel_id: ChannelId::new(channel_id),
        options: Vec::new(),
    }
}

fn role_grant(user_id: u64, role_id: u64) -> ApiCall {
    ApiCall::AddRole {
        guild_id: GuildId::new(GUILD_ID),
        user_id: UserId::new(user_id),
        role_id: RoleId::new(role_id),
    }
}

fn member(user_id: u64, name: &str) -> GuildMember {
    GuildMember {
        user_id: UserId::new(user_id),
        name: name.to_string(),
    }
}

/// Pending tester set held in memory, with switchable failures.
#[derive(Default)]
struct MemoryStore {
    ids: Mutex<HashSet<UserId>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    fn with(ids: &[u64]) -> Self {
        let store = Self::default();
        store
            .ids
            .lock()
            .unwrap()
            .extend(ids.iter().copied().map(UserId::new));
        store
    }

    fn ids(&self) -> HashSet<UserId> {
        self.ids.lock().unwrap().clone()
    }

    fn failure() -> StoreError {
        StoreError::Io {
            path: "pending_testers.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        }
    }
}

#[async_trait]
impl PendingTesterStore for MemoryStore {
    async fn add(&self, user_id: UserId) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(Self::failure());
        }
        self.ids.lock().unwrap().insert(user_id);
        Ok(())
    }

    async fn remove(&self, user_id: UserId) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(Self::failure());
        }
        self.ids.lock().unwrap().remove(&user_id);
        Ok(())
    }

    async fn contains(&self, user_id: UserId) -> Result<bool, StoreError> {
        if self.fail_reads {
            return Err(Self::failure());
        }
        Ok(self.ids.lock().unwrap().contains(&user_id))
    }
}
