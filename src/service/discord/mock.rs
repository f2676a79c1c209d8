//! Recording doubles for the Discord seam.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use serenity::{
    all::{ChannelId, ForumTagId, GuildId, RoleId, UserId},
    async_trait,
};

use crate::{
    error::discord::DiscordError,
    model::{
        member::GuildMember,
        message::{OutgoingMessage, Reply},
        thread::{Forum, ForumThread},
    },
    service::discord::{DiscordApi, Responder},
};

/// A mutating call received by `MockDiscordApi`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    SetAppliedTags {
        thread_id: ChannelId,
        tags: Vec<ForumTagId>,
    },
    ArchiveThread {
        thread_id: ChannelId,
    },
    SendMessage {
        channel_id: ChannelId,
        message: OutgoingMessage,
    },
    AddRole {
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    },
}

/// Operations a test can make fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    FetchChannel,
    FetchMember,
    SetAppliedTags,
    ArchiveThread,
    SendMessage,
}

fn rejected() -> DiscordError {
    DiscordError::Rejected("mock failure".to_string())
}

/// In-memory Discord that records every mutation.
///
/// Failed calls are recorded too, so tests can tell "attempted and failed" from "never tried".
#[derive(Default)]
pub struct MockDiscordApi {
    threads: Mutex<HashMap<ChannelId, ForumThread>>,
    forums: Mutex<HashMap<ChannelId, Forum>>,
    members: Mutex<HashMap<(GuildId, UserId), GuildMember>>,
    failures: Mutex<HashSet<Failure>>,
    failing_roles: Mutex<HashSet<RoleId>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockDiscordApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread(self, thread: ForumThread) -> Self {
        self.threads.lock().unwrap().insert(thread.id, thread);
        self
    }

    pub fn with_forum(self, forum: Forum) -> Self {
        self.forums.lock().unwrap().insert(forum.id, forum);
        self
    }

    pub fn with_member(self, guild_id: GuildId, member: GuildMember) -> Self {
        self.members
            .lock()
            .unwrap()
            .insert((guild_id, member.user_id), member);
        self
    }

    pub fn failing(self, failure: Failure) -> Self {
        self.failures.lock().unwrap().insert(failure);
        self
    }

    pub fn failing_role(self, role_id: RoleId) -> Self {
        self.failing_roles.lock().unwrap().insert(role_id);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Current state of a registered thread, reflecting tag and archive updates.
    pub fn stored_thread(&self, id: ChannelId) -> Option<ForumThread> {
        self.threads.lock().unwrap().get(&id).cloned()
    }

    fn fails(&self, failure: Failure) -> bool {
        self.failures.lock().unwrap().contains(&failure)
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DiscordApi for MockDiscordApi {
    async fn thread(&self, channel_id: ChannelId) -> Result<Option<ForumThread>, DiscordError> {
        if self.fails(Failure::FetchChannel) {
            return Err(rejected());
        }

        Ok(self.stored_thread(channel_id))
    }

    async fn forum(&self, channel_id: ChannelId) -> Result<Option<Forum>, DiscordError> {
        if self.fails(Failure::FetchChannel) {
            return Err(rejected());
        }

        Ok(self.forums.lock().unwrap().get(&channel_id).cloned())
    }

    async fn set_applied_tags(
        &self,
        thread_id: ChannelId,
        tags: &[ForumTagId],
    ) -> Result<(), DiscordError> {
        self.record(ApiCall::SetAppliedTags {
            thread_id,
            tags: tags.to_vec(),
        });
        if self.fails(Failure::SetAppliedTags) {
            return Err(rejected());
        }

        if let Some(thread) = self.threads.lock().unwrap().get_mut(&thread_id) {
            thread.applied_tags = tags.to_vec();
        }

        Ok(())
    }

    async fn archive_thread(&self, thread_id: ChannelId) -> Result<(), DiscordError> {
        self.record(ApiCall::ArchiveThread { thread_id });
        if self.fails(Failure::ArchiveThread) {
            return Err(rejected());
        }

        if let Some(thread) = self.threads.lock().unwrap().get_mut(&thread_id) {
            thread.archived = true;
        }

        Ok(())
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<(), DiscordError> {
        self.record(ApiCall::SendMessage {
            channel_id,
            message,
        });
        if self.fails(Failure::SendMessage) {
            return Err(rejected());
        }

        Ok(())
    }

    async fn member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<GuildMember>, DiscordError> {
        if self.fails(Failure::FetchMember) {
            return Err(rejected());
        }

        Ok(self
            .members
            .lock()
            .unwrap()
            .get(&(guild_id, user_id))
            .cloned())
    }

    async fn add_role(
        &self,
        guild_id: GuildId,
        user_id: UserId,
        role_id: RoleId,
    ) -> Result<(), DiscordError> {
        self.record(ApiCall::AddRole {
            guild_id,
            user_id,
            role_id,
        });
        if self.failing_roles.lock().unwrap().contains(&role_id) {
            return Err(rejected());
        }

        Ok(())
    }
}

/// A call received by `MockResponder`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponderCall {
    Defer { ephemeral: bool },
    Respond(Reply),
}

/// Responder that records replies instead of sending them.
#[derive(Default)]
pub struct MockResponder {
    calls: Mutex<Vec<ResponderCall>>,
    fail_responses: bool,
}

impl MockResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `respond` fail after being recorded.
    pub fn failing_responses() -> Self {
        Self {
            calls: Mutex::default(),
            fail_responses: true,
        }
    }

    pub fn calls(&self) -> Vec<ResponderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn replies(&self) -> Vec<Reply> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ResponderCall::Respond(reply) => Some(reply),
                ResponderCall::Defer { .. } => None,
            })
            .collect()
    }
}

#[async_trait]
impl Responder for MockResponder {
    async fn defer(&self, ephemeral: bool) -> Result<(), DiscordError> {
        self.calls
            .lock()
            .unwrap()
            .push(ResponderCall::Defer { ephemeral });

        Ok(())
    }

    async fn respond(&self, reply: Reply) -> Result<(), DiscordError> {
        self.calls
            .lock()
            .unwrap()
            .push(ResponderCall::Respond(reply));
        if self.fail_responses {
            return Err(rejected());
        }

        Ok(())
    }
}
