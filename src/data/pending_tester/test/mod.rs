use serenity::all::UserId;
use test_utils::builder::TestBuilder;

use crate::data::pending_tester::{
    DatabasePendingTesterStore, FilePendingTesterStore, PendingTesterStore,
};
