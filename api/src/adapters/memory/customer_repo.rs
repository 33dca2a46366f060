//! In-memory adapter for CustomerRepository

use std::collections::HashMap;
use std::sync::RwLock;

use super::{read_lock, write_lock};
use crate::domain::entities::{Customer, CustomerId};
use crate::domain::ports::CustomerRepository;
use crate::error::{DomainError, EntityKind};

/// In-memory implementation of CustomerRepository
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the demo customer
    pub fn seeded() -> Self {
        Self::new().with_customer(Customer::new(
            "customer-1",
            "John Smith",
            "john.smith@example.com",
        ))
    }

    /// Pre-populate with a customer, replacing any with the same ID
    pub fn with_customer(self, customer: Customer) -> Self {
        write_lock(&self.customers).insert(customer.id.clone(), customer);
        self
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        read_lock(&self.customers).len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        read_lock(&self.customers).is_empty()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn get_by_id(&self, id: &CustomerId) -> Result<Customer, DomainError> {
        read_lock(&self.customers)
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::customer_not_found(id.as_str()))
    }

    fn create(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut customers = write_lock(&self.customers);
        if customers.contains_key(&customer.id) {
            return Err(DomainError::already_exists(
                EntityKind::Customer,
                customer.id.as_str(),
            ));
        }
        customers.insert(customer.id.clone(), customer.clone());
        Ok(())
    }

    fn update(&self, customer: &Customer) -> Result<(), DomainError> {
        let mut customers = write_lock(&self.customers);
        match customers.get_mut(&customer.id) {
            Some(existing) => {
                *existing = customer.clone();
                Ok(())
            }
            None => Err(DomainError::customer_not_found(customer.id.as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_customer_named;

    #[test]
    fn seeded_store_contains_demo_customer() {
        let repo = InMemoryCustomerRepository::seeded();

        let customer = repo.get_by_id(&CustomerId::from("customer-1")).unwrap();

        assert_eq!(customer.name, "John Smith");
        assert_eq!(customer.email, "john.smith@example.com");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn get_missing_customer_is_not_found() {
        let repo = InMemoryCustomerRepository::new();

        let err = repo.get_by_id(&CustomerId::from("nobody")).unwrap_err();

        assert_eq!(err, DomainError::customer_not_found("nobody"));
    }

    #[test]
    fn create_then_get() {
        let repo = InMemoryCustomerRepository::new();
        let customer = test_customer_named("customer-7");

        repo.create(&customer).unwrap();

        assert_eq!(repo.get_by_id(&customer.id).unwrap(), customer);
    }

    #[test]
    fn create_duplicate_fails_and_keeps_original() {
        let original = test_customer_named("customer-7");
        let repo = InMemoryCustomerRepository::new().with_customer(original.clone());
        let mut duplicate = original.clone();
        duplicate.name = "Impostor".to_string();

        let err = repo.create(&duplicate).unwrap_err();

        assert!(matches!(
            err,
            DomainError::AlreadyExists {
                entity: EntityKind::Customer,
                ..
            }
        ));
        assert_eq!(repo.get_by_id(&original.id).unwrap().name, original.name);
    }

    #[test]
    fn update_replaces_existing_customer() {
        let customer = test_customer_named("customer-7");
        let repo = InMemoryCustomerRepository::new().with_customer(customer.clone());
        let mut changed = customer.clone();
        changed.email = "new@example.com".to_string();

        repo.update(&changed).unwrap();

        assert_eq!(repo.get_by_id(&customer.id).unwrap().email, "new@example.com");
    }

    #[test]
    fn update_missing_customer_fails() {
        let repo = InMemoryCustomerRepository::new();

        let err = repo.update(&test_customer_named("ghost")).unwrap_err();

        assert!(err.is_not_found());
        assert!(repo.is_empty());
    }

    #[test]
    fn concurrent_creates_with_same_id_admit_exactly_one() {
        let repo = InMemoryCustomerRepository::new();
        let customer = test_customer_named("contested");

        let successes = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| repo.create(&customer).is_ok()))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count()
        });

        assert_eq!(successes, 1);
        assert_eq!(repo.len(), 1);
    }
}
