//! Delivering successive outcomes from a producer thread.
//!
//! A repository reports `Loading` before it resolves a lookup and then sends
//! the final outcome. Consumers decorate or default the stream with the
//! ordinary combinators.

use std::{collections::HashMap, fmt, sync::mpsc, thread};

use resultat::{Fault, Outcome};
use rstest::{fixture, rstest};
use test_helpers::{Hook, HookRecorder};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Customer {
    first_name: String,
    last_name: String,
}

impl Customer {
    fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

struct CustomerRepository {
    customers: HashMap<u32, Customer>,
}

impl CustomerRepository {
    /// Looks up `id` on a worker thread, sending `Loading` first.
    fn customer_by_id(&self, id: u32) -> mpsc::Receiver<Outcome<Customer>> {
        let (tx, rx) = mpsc::channel();
        let found = self.customers.get(&id).cloned();
        thread::spawn(move || {
            let resolved = found.map_or_else(
                || Outcome::failure(Fault::msg(format!("Unknown customer with ID: {id}"))),
                Outcome::success,
            );
            for outcome in [Outcome::loading(), resolved] {
                if tx.send(outcome).is_err() {
                    break;
                }
            }
        });
        rx
    }
}

#[fixture]
fn repository() -> CustomerRepository {
    let customers = [
        (1, Customer::new("Erich", "Gamma")),
        (2, Customer::new("Richard", "Helm")),
        (3, Customer::new("Ralph", "Johnson")),
        (4, Customer::new("John", "Vlissides")),
    ];
    CustomerRepository {
        customers: customers.into_iter().collect(),
    }
}

fn greet(outcome: &Outcome<Customer>, id: u32) -> String {
    outcome.as_ref().fold(
        |customer| format!("Hello, {customer} !"),
        |fault| format!("Error: {}", fault.message()),
        || format!("Loading customer with ID: {id}..."),
    )
}

#[rstest]
#[case::known(1, "Hello, Erich Gamma !")]
#[case::unknown(5, "Error: Unknown customer with ID: 5")]
fn greeter_sees_loading_then_result(
    repository: CustomerRepository,
    #[case] id: u32,
    #[case] last: &str,
) {
    let greetings: Vec<String> = repository
        .customer_by_id(id)
        .iter()
        .map(|outcome| greet(&outcome, id))
        .collect();
    assert_eq!(
        greetings,
        [format!("Loading customer with ID: {id}..."), last.to_owned()]
    );
}

#[rstest]
fn hooks_fire_once_per_delivered_outcome(repository: CustomerRepository) {
    let recorder = HookRecorder::new();
    for id in [2, 9] {
        for outcome in repository.customer_by_id(id) {
            let returned = recorder.observe(outcome.clone());
            assert_eq!(returned, outcome);
        }
    }
    assert_eq!(
        recorder.hooks(),
        [
            Hook::Loading,
            Hook::Success("Richard Helm".to_owned()),
            Hook::Loading,
            Hook::Failure("Unknown customer with ID: 9".to_owned()),
        ]
    );
}

#[rstest]
fn map_decorates_only_the_resolved_value(repository: CustomerRepository) {
    let decorated: Vec<Outcome<Customer>> = repository
        .customer_by_id(3)
        .into_iter()
        .map(|outcome| {
            outcome.map(|customer| Customer {
                first_name: format!("Sir {}", customer.first_name),
                ..customer
            })
        })
        .collect();
    assert_eq!(
        decorated,
        [
            Outcome::Loading,
            Outcome::Success(Customer::new("Sir Ralph", "Johnson")),
        ]
    );
}

#[rstest]
fn fold_substitutes_a_default_customer(repository: CustomerRepository) {
    let fallback = Customer::new("John", "Doe");
    let resolved: Vec<Customer> = repository
        .customer_by_id(7)
        .into_iter()
        .map(|outcome| outcome.fold(|c| c, |_| fallback.clone(), || fallback.clone()))
        .collect();
    assert_eq!(resolved, [fallback.clone(), fallback]);
}

#[test]
fn outcomes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Outcome<Customer>>();
    assert_send_sync::<Outcome<String, std::io::Error>>();
}
