//! Forum and thread views read from Discord channels.

use serenity::all::{ChannelId, ChannelType, ForumTagId, GuildChannel, GuildId, UserId};

/// A tag offered by a forum channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableTag {
    pub id: ForumTagId,
    pub name: String,
}

/// A forum channel and the tags it offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forum {
    pub id: ChannelId,
    pub name: String,
    pub available_tags: Vec<AvailableTag>,
}

impl Forum {
    /// Reads a forum from a guild channel.
    ///
    /// # Returns
    /// - `Some(Forum)` - The channel is a forum channel
    /// - `None` - Any other channel type
    pub fn from_channel(channel: &GuildChannel) -> Option<Self> {
        if channel.kind != ChannelType::Forum {
            return None;
        }

        Some(Self {
            id: channel.id,
            name: channel.name.clone(),
            available_tags: channel
                .available_tags
                .iter()
                .map(|tag| AvailableTag {
                    id: tag.id,
                    name: tag.name.clone(),
                })
                .collect(),
        })
    }

    pub fn find_tag(&self, id: ForumTagId) -> Option<&AvailableTag> {
        self.available_tags.iter().find(|tag| tag.id == id)
    }
}

/// A thread and the attributes the workflow reads or mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumThread {
    pub id: ChannelId,
    pub guild_id: GuildId,
    pub name: String,
    pub parent_id: Option<ChannelId>,
    pub owner_id: Option<UserId>,
    pub applied_tags: Vec<ForumTagId>,
    pub archived: bool,
}

impl ForumThread {
    /// Reads a thread from a guild channel.
    ///
    /// # Returns
    /// - `Some(ForumThread)` - The channel is a public, private, or news thread
    /// - `None` - Any other channel type
    pub fn from_channel(channel: &GuildChannel) -> Option<Self> {
        if !matches!(
            channel.kind,
            ChannelType::PublicThread | ChannelType::PrivateThread | ChannelType::NewsThread
        ) {
            return None;
        }

        Some(Self {
            id: channel.id,
            guild_id: channel.guild_id,
            name: channel.name.clone(),
            parent_id: channel.parent_id,
            owner_id: channel.owner_id,
            applied_tags: channel.applied_tags.clone(),
            archived: channel
                .thread_metadata
                .as_ref()
                .is_some_and(|metadata| metadata.archived),
        })
    }

    pub fn is_in_forum(&self, forum_id: ChannelId) -> bool {
        self.parent_id == Some(forum_id)
    }
}

/// Builds the jump URL Discord uses to link directly to a channel or thread.
pub fn channel_jump_url(guild_id: GuildId, channel_id: ChannelId) -> String {
    format!("https://discord.com/channels/{}/{}", guild_id, channel_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_forum, create_test_text_channel, create_test_thread};

    /// Tests reading a forum channel and its available tags.
    ///
    /// Expected: Some with every tag carried over in order
    #[test]
    fn reads_forum_channel() {
        let channel = create_test_forum(200, 100, "tester-log", &[(1, "Pending"), (2, "Fixed")]);

        let forum = Forum::from_channel(&channel).unwrap();

        assert_eq!(forum.id, ChannelId::new(200));
        assert_eq!(forum.name, "tester-log");
        assert_eq!(forum.available_tags.len(), 2);
        assert_eq!(forum.find_tag(ForumTagId::new(2)).unwrap().name, "Fixed");
        assert!(forum.find_tag(ForumTagId::new(3)).is_none());
    }

    /// Tests reading a thread channel with applied tags and an owner.
    ///
    /// Expected: Some with parent, owner and tags populated
    #[test]
    fn reads_thread_channel() {
        let channel = create_test_thread(300, 100, 200, 500, "crash on start", &[1, 7]);

        let thread = ForumThread::from_channel(&channel).unwrap();

        assert_eq!(thread.parent_id, Some(ChannelId::new(200)));
        assert_eq!(thread.owner_id, Some(UserId::new(500)));
        assert_eq!(
            thread.applied_tags,
            vec![ForumTagId::new(1), ForumTagId::new(7)]
        );
        assert!(!thread.archived);
        assert!(thread.is_in_forum(ChannelId::new(200)));
        assert!(!thread.is_in_forum(ChannelId::new(201)));
    }

    /// Tests that non-matching channel types are rejected by both readers.
    ///
    /// Expected: None for a text channel read as thread or forum
    #[test]
    fn rejects_other_channel_types() {
        let channel = create_test_text_channel(400, 100, "general");

        assert!(ForumThread::from_channel(&channel).is_none());
        assert!(Forum::from_channel(&channel).is_none());
    }

    /// Tests the jump URL format.
    ///
    /// Expected: guild and channel IDs in Discord's channel link layout
    #[test]
    fn builds_jump_url() {
        assert_eq!(
            channel_jump_url(GuildId::new(1), ChannelId::new(2)),
            "https://discord.com/channels/1/2"
        );
    }
}
