use crm_core::{
    CustomerMigrationFacade, CustomerRecord, CustomerRepository, MigrationError,
    PostalCodeResolver, PostalError, PostalResult, RepoError, RepoResult,
};
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    ResolveCity(String),
    ResolveState(String),
    Record(CustomerRecord),
}

type CallLog = RefCell<Vec<Call>>;

struct StubResolver<'log> {
    log: &'log CallLog,
    city: PostalResult<String>,
    state: PostalResult<String>,
}

impl PostalCodeResolver for StubResolver<'_> {
    fn resolve_city(&self, postal_code: &str) -> PostalResult<String> {
        self.log
            .borrow_mut()
            .push(Call::ResolveCity(postal_code.to_string()));
        self.city.clone()
    }

    fn resolve_state(&self, postal_code: &str) -> PostalResult<String> {
        self.log
            .borrow_mut()
            .push(Call::ResolveState(postal_code.to_string()));
        self.state.clone()
    }
}

struct StubRepository<'log> {
    log: &'log CallLog,
    outcome: RepoResult<()>,
}

impl CustomerRepository for StubRepository<'_> {
    fn record_customer(&self, record: CustomerRecord) -> RepoResult<()> {
        self.log.borrow_mut().push(Call::Record(record));
        self.outcome.clone()
    }
}

fn build_facade<'log>(
    log: &'log CallLog,
    city: PostalResult<String>,
    state: PostalResult<String>,
    outcome: RepoResult<()>,
) -> CustomerMigrationFacade<StubResolver<'log>, StubRepository<'log>> {
    CustomerMigrationFacade::new(
        StubResolver { log, city, state },
        StubRepository { log, outcome },
    )
}

#[test]
fn migrate_resolves_city_then_state_then_records_once() {
    let log = CallLog::default();
    let facade = build_facade(
        &log,
        Ok("Springfield".to_string()),
        Ok("IL".to_string()),
        Ok(()),
    );

    facade.migrate_customer("Jane Doe", "12345").unwrap();

    assert_eq!(
        log.take(),
        vec![
            Call::ResolveCity("12345".to_string()),
            Call::ResolveState("12345".to_string()),
            Call::Record(CustomerRecord::new("Jane Doe", "12345", "Springfield", "IL")),
        ]
    );
}

#[test]
fn migrate_passes_inputs_through_without_validation() {
    let log = CallLog::default();
    let facade = build_facade(&log, Ok(String::new()), Ok(String::new()), Ok(()));

    facade.migrate_customer("", "  not-a-cep ").unwrap();

    let calls = log.take();
    assert_eq!(calls[0], Call::ResolveCity("  not-a-cep ".to_string()));
    assert_eq!(
        calls[2],
        Call::Record(CustomerRecord::new("", "  not-a-cep ", "", ""))
    );
}

#[test]
fn city_failure_stops_before_state_lookup_and_write() {
    let log = CallLog::default();
    let failure = PostalError::UnknownPostalCode("00000".to_string());
    let facade = build_facade(
        &log,
        Err(failure.clone()),
        Ok("IL".to_string()),
        Ok(()),
    );

    let err = facade.migrate_customer("Jane Doe", "00000").unwrap_err();

    assert_eq!(err, MigrationError::Postal(failure));
    assert_eq!(log.take(), vec![Call::ResolveCity("00000".to_string())]);
}

#[test]
fn state_failure_stops_before_write() {
    let log = CallLog::default();
    let failure = PostalError::Unavailable("lookup timed out".to_string());
    let facade = build_facade(
        &log,
        Ok("Springfield".to_string()),
        Err(failure.clone()),
        Ok(()),
    );

    let err = facade.migrate_customer("Jane Doe", "12345").unwrap_err();

    assert_eq!(err, MigrationError::Postal(failure));
    assert_eq!(
        log.take(),
        vec![
            Call::ResolveCity("12345".to_string()),
            Call::ResolveState("12345".to_string()),
        ]
    );
}

#[test]
fn persistence_failure_propagates_unchanged() {
    let log = CallLog::default();
    let failure = RepoError::Rejected("duplicate customer".to_string());
    let facade = build_facade(
        &log,
        Ok("Springfield".to_string()),
        Ok("IL".to_string()),
        Err(failure.clone()),
    );

    let err = facade.migrate_customer("Jane Doe", "12345").unwrap_err();

    assert_eq!(err.to_string(), failure.to_string());
    match err {
        MigrationError::Repo(inner) => assert_eq!(inner, failure),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(log.take().len(), 3);
}

#[test]
fn repeated_migrations_are_independent() {
    let log = CallLog::default();
    let facade = build_facade(
        &log,
        Ok("Springfield".to_string()),
        Ok("IL".to_string()),
        Ok(()),
    );

    facade.migrate_customer("Jane Doe", "12345").unwrap();
    facade.migrate_customer("John Roe", "12345").unwrap();

    let writes = log
        .into_inner()
        .into_iter()
        .filter_map(|call| match call {
            Call::Record(record) => Some(record.name),
            _ => None,
        })
        .collect::<Vec<_>>();
    assert_eq!(writes, vec!["Jane Doe", "John Roe"]);
}
