#![allow(dead_code)]

use reader_core::{AuthProvider, Group, GroupMembership, Invite, User, UserStatus};
use reader_db::{GroupMembershipRepository, GroupRepository, InviteRepository, UserRepository};
use reader_signup::{ConfirmationEmailSender, SignupService, UsernamePolicy};

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use log::{LevelFilter, Log, Metadata, Record};
use mockable::Clock;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    reader_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Fixed "now" for every test
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
}

/// Clock pinned to [`test_now`]
struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Email collaborator that records who it was asked to confirm
pub struct RecordingEmailSender {
    succeed: bool,
    sent_to: Mutex<Vec<Uuid>>,
}

impl RecordingEmailSender {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            succeed: true,
            sent_to: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            succeed: false,
            sent_to: Mutex::new(Vec::new()),
        })
    }

    pub fn sent_to(&self) -> Vec<Uuid> {
        self.sent_to.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationEmailSender for RecordingEmailSender {
    async fn send_confirmation_email(&self, user: &User) -> bool {
        self.sent_to.lock().unwrap().push(user.id);
        self.succeed
    }
}

pub fn create_service(pool: &SqlitePool, email: Arc<RecordingEmailSender>) -> SignupService {
    SignupService::new(
        pool.clone(),
        UsernamePolicy::default(),
        email,
        Arc::new(FixtureClock {
            utc_now: test_now(),
        }),
    )
}

/// Inserts a user that owns groups in tests
pub async fn insert_group_owner(pool: &SqlitePool) -> User {
    let owner = User::new(
        AuthProvider::Email,
        format!("owner-{}@example.com", Uuid::new_v4()),
        "Group Owner".to_string(),
        None,
        UserStatus::Active,
        test_now(),
    );
    UserRepository::create(pool, &owner)
        .await
        .expect("Failed to insert owner");
    owner
}

/// Inserts a group with one invite
pub async fn insert_group_with_invite(
    pool: &SqlitePool,
    code: &str,
    expires_in: Duration,
    max_members: i64,
) -> (Group, Invite) {
    let owner = insert_group_owner(pool).await;
    let group = Group::new("Slow Readers".to_string(), owner.id, test_now());
    GroupRepository::create(pool, &group)
        .await
        .expect("Failed to insert group");

    let invite = Invite::new(
        code.to_string(),
        group.id,
        owner.id,
        test_now() + expires_in,
        max_members,
        test_now(),
    );
    InviteRepository::create(pool, &invite)
        .await
        .expect("Failed to insert invite");

    (group, invite)
}

/// Redeems the invite for `count` freshly inserted users
pub async fn fill_invite(pool: &SqlitePool, group: &Group, invite: &Invite, count: usize) {
    for _ in 0..count {
        let member = insert_group_owner(pool).await;
        let membership = GroupMembership::new(member.id, group.id, invite.id, test_now());
        GroupMembershipRepository::create(pool, &membership)
            .await
            .expect("Failed to insert membership");
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

/// Process-wide `log` sink that keeps every formatted record in memory.
pub struct CapturedLogs {
    lines: Mutex<Vec<String>>,
}

static CAPTURED_LOGS: CapturedLogs = CapturedLogs {
    lines: Mutex::new(Vec::new()),
};
static INSTALL_LOGGER: Once = Once::new();

impl Log for CapturedLogs {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("{} {}", record.level(), record.args()));
    }

    fn flush(&self) {}
}

impl CapturedLogs {
    /// Lines mentioning `needle`. Tests share the logger, so filter by an id
    /// unique to the test.
    pub fn lines_containing(&self, needle: &str) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .cloned()
            .collect()
    }
}

/// Installs the capturing logger on first use.
pub fn captured_logs() -> &'static CapturedLogs {
    INSTALL_LOGGER.call_once(|| {
        log::set_logger(&CAPTURED_LOGS).expect("Another logger is already installed");
        log::set_max_level(LevelFilter::Info);
    });
    &CAPTURED_LOGS
}
