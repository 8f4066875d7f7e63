//! People use-case service.
//!
//! # Invariants
//! - The "old" threshold is fixed at `OLD_AGE_THRESHOLD` and inclusive.
//! - Service layer remains storage-agnostic.

use crate::model::person::Person;
use crate::repo::person_repo::{PersonQuery, PersonRepository, RepoResult, ResultOrder};

/// Minimum age (inclusive) for a person to count as old.
pub const OLD_AGE_THRESHOLD: i64 = 50;

/// Use-case service wrapper for person reads.
pub struct PeopleService<R: PersonRepository> {
    repo: R,
}

impl<R: PersonRepository> PeopleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every person aged `OLD_AGE_THRESHOLD` or older, in engine order.
    pub fn old_people(&self) -> RepoResult<Vec<Person>> {
        self.old_people_ordered(ResultOrder::Engine)
    }

    /// Same as [`Self::old_people`] with an explicit row order.
    pub fn old_people_ordered(&self, order: ResultOrder) -> RepoResult<Vec<Person>> {
        self.repo
            .list_people(&PersonQuery::at_least(OLD_AGE_THRESHOLD).ordered_by(order))
    }
}

#[cfg(test)]
mod tests {
    use super::{PeopleService, OLD_AGE_THRESHOLD};
    use crate::model::person::{Age, Person};
    use crate::repo::person_repo::{PersonQuery, PersonRepository, RepoResult, ResultOrder};
    use std::cell::RefCell;

    struct RecordingRepo {
        people: Vec<Person>,
        seen: RefCell<Vec<PersonQuery>>,
    }

    impl PersonRepository for RecordingRepo {
        fn list_people(&self, query: &PersonQuery) -> RepoResult<Vec<Person>> {
            self.seen.borrow_mut().push(*query);
            Ok(self
                .people
                .iter()
                .filter(|person| {
                    matches!(person.age, Age::Integer(age) if age >= query.min_age)
                })
                .cloned()
                .collect())
        }
    }

    #[test]
    fn old_people_uses_fixed_threshold_and_engine_order() {
        let repo = RecordingRepo {
            people: vec![
                Person::new("Alice", 52),
                Person::new("Bob", 30),
                Person::new("Carol", 50),
            ],
            seen: RefCell::new(Vec::new()),
        };
        let service = PeopleService::new(repo);

        let people = service.old_people().unwrap();
        assert_eq!(
            people,
            vec![Person::new("Alice", 52), Person::new("Carol", 50)]
        );

        let seen = service.repo.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].min_age, OLD_AGE_THRESHOLD);
        assert_eq!(seen[0].order, ResultOrder::Engine);
    }
}
