pub use super::pending_tester::Entity as PendingTester;
