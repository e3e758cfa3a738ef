use super::UserSource;
use crate::error::{Result, UserdirError};
use crate::model::{DraftUser, StatusCode, User, UserId};
use std::cell::RefCell;

/// A request as received by [`InMemorySource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Create(DraftUser),
    Update(User),
    Delete(UserId),
}

impl Request {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Request::List)
    }
}

/// In-memory user collection for testing.
///
/// Uses `RefCell` for interior mutability since the client is single-threaded,
/// which lets `UserSource` take `&self` everywhere. Every request is recorded,
/// including the ones made to fail.
pub struct InMemorySource {
    users: RefCell<Vec<User>>,
    requests: RefCell<Vec<Request>>,
    next_id: RefCell<UserId>,
    fail_reads: RefCell<bool>,
    fail_writes: RefCell<bool>,
    corrupt_reads: RefCell<bool>,
    write_status: RefCell<StatusCode>,
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self {
            users: RefCell::new(Vec::new()),
            requests: RefCell::new(Vec::new()),
            next_id: RefCell::new(1),
            fail_reads: RefCell::new(false),
            fail_writes: RefCell::new(false),
            corrupt_reads: RefCell::new(false),
            write_status: RefCell::new(StatusCode(201)),
        }
    }
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        let source = Self::default();
        *source.users.borrow_mut() = users;
        *source.next_id.borrow_mut() = next_id;
        source
    }

    /// Make reads fail as if the connection were refused.
    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.borrow_mut() = fail;
    }

    /// Make reads fail as if the body were not a user array.
    pub fn set_corrupt_reads(&self, corrupt: bool) {
        *self.corrupt_reads.borrow_mut() = corrupt;
    }

    /// Make mutations fail as if the connection were refused.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }

    /// Status answered to mutations. Non-success statuses leave the collection untouched.
    pub fn set_write_status(&self, status: StatusCode) {
        *self.write_status.borrow_mut() = status;
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, matcher: impl Fn(&Request) -> bool) -> usize {
        self.requests.borrow().iter().filter(|r| matcher(r)).count()
    }

    pub fn list_count(&self) -> usize {
        self.count(|r| matches!(r, Request::List))
    }

    pub fn mutation_count(&self) -> usize {
        self.count(Request::is_mutation)
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    pub fn users(&self) -> Vec<User> {
        self.users.borrow().clone()
    }

    fn record(&self, request: Request) {
        self.requests.borrow_mut().push(request);
    }

    fn write_outcome(&self) -> Result<StatusCode> {
        if *self.fail_writes.borrow() {
            return Err(transport_failure());
        }
        Ok(*self.write_status.borrow())
    }
}

fn transport_failure() -> UserdirError {
    // CURLE_COULDNT_CONNECT
    UserdirError::Transport(curl::Error::new(7))
}

impl UserSource for InMemorySource {
    fn list_users(&self) -> Result<Vec<User>> {
        self.record(Request::List);
        if *self.fail_reads.borrow() {
            return Err(transport_failure());
        }
        if *self.corrupt_reads.borrow() {
            return serde_json::from_str::<Vec<User>>("{}").map_err(Into::into);
        }
        Ok(self.users.borrow().clone())
    }

    fn create_user(&self, draft: &DraftUser) -> Result<StatusCode> {
        self.record(Request::Create(draft.clone()));
        let status = self.write_outcome()?;
        if status.is_success() {
            let mut next_id = self.next_id.borrow_mut();
            self.users.borrow_mut().push(User {
                id: *next_id,
                name: draft.name.clone(),
                lastname: draft.lastname.clone(),
                phone: draft.phone.clone(),
            });
            *next_id += 1;
        }
        Ok(status)
    }

    fn update_user(&self, user: &User) -> Result<StatusCode> {
        self.record(Request::Update(user.clone()));
        let status = self.write_outcome()?;
        if status.is_success() {
            let mut users = self.users.borrow_mut();
            if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
                *existing = user.clone();
            }
        }
        Ok(status)
    }

    fn delete_user(&self, id: UserId) -> Result<StatusCode> {
        self.record(Request::Delete(id));
        let status = self.write_outcome()?;
        if status.is_success() {
            self.users.borrow_mut().retain(|u| u.id != id);
        }
        Ok(status)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn user(id: UserId, name: &str, lastname: &str, phone: &str) -> User {
        User {
            id,
            name: name.to_string(),
            lastname: lastname.to_string(),
            phone: phone.to_string(),
        }
    }

    pub struct SourceFixture {
        pub source: InMemorySource,
    }

    impl Default for SourceFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SourceFixture {
        pub fn new() -> Self {
            Self {
                source: InMemorySource::new(),
            }
        }

        pub fn with_users(count: usize) -> Self {
            let users = (1..=count as UserId)
                .map(|i| {
                    let name = format!("User{}", letter(i));
                    user(i, &name, "Test", &format!("555-{}", i))
                })
                .collect();
            Self {
                source: InMemorySource::with_users(users),
            }
        }

        pub fn with_user(self, name: &str, lastname: &str, phone: &str) -> Self {
            let mut users = self.source.users();
            let id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
            users.push(user(id, name, lastname, phone));
            Self {
                source: InMemorySource::with_users(users),
            }
        }
    }

    // Names must stay digit-free to pass validation.
    fn letter(i: UserId) -> char {
        (b'A' + ((i - 1) % 26) as u8) as char
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{user, SourceFixture};
    use super::*;

    #[test]
    fn records_requests_in_order() {
        let source = InMemorySource::new();
        source.list_users().unwrap();
        source
            .create_user(&DraftUser::new("Ana", "Ruiz", "555"))
            .unwrap();
        source.delete_user(1).unwrap();

        assert_eq!(
            source.requests(),
            vec![
                Request::List,
                Request::Create(DraftUser::new("Ana", "Ruiz", "555")),
                Request::Delete(1),
            ]
        );
        assert_eq!(source.list_count(), 1);
        assert_eq!(source.mutation_count(), 2);
    }

    #[test]
    fn create_assigns_next_id() {
        let source = SourceFixture::with_users(2).source;
        let status = source
            .create_user(&DraftUser::new("Ana", "Ruiz", "555"))
            .unwrap();
        assert!(status.is_success());
        let users = source.list_users().unwrap();
        assert_eq!(users.last().unwrap().id, 3);
    }

    #[test]
    fn rejected_create_leaves_collection() {
        let source = InMemorySource::new();
        source.set_write_status(StatusCode(500));
        let status = source
            .create_user(&DraftUser::new("Ana", "Ruiz", "555"))
            .unwrap();
        assert!(!status.is_success());
        assert!(source.users().is_empty());
    }

    #[test]
    fn failed_reads_and_writes_are_still_recorded() {
        let source = InMemorySource::new();
        source.set_fail_reads(true);
        source.set_fail_writes(true);
        assert!(matches!(
            source.list_users(),
            Err(UserdirError::Transport(_))
        ));
        assert!(source.delete_user(1).is_err());
        assert_eq!(source.requests().len(), 2);
    }

    #[test]
    fn corrupt_reads_are_serialization_errors() {
        let source = InMemorySource::new();
        source.set_corrupt_reads(true);
        assert!(matches!(
            source.list_users(),
            Err(UserdirError::Serialization(_))
        ));
    }

    #[test]
    fn update_and_delete_change_collection() {
        let source = InMemorySource::with_users(vec![user(1, "Ana", "Ruiz", "1")]);
        source.update_user(&user(1, "Eva", "Ruiz", "1")).unwrap();
        assert_eq!(source.users()[0].name, "Eva");
        source.delete_user(1).unwrap();
        assert!(source.users().is_empty());
    }

    #[test]
    fn fixture_names_are_digit_free() {
        let source = SourceFixture::with_users(3).with_user("Eva", "Lopez", "").source;
        let names: Vec<_> = source.users().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["UserA", "UserB", "UserC", "Eva"]);
    }
}
