use serde::{Deserialize, Serialize};

use tillbook_core::{CustomerId, Entity};

/// A bank customer: name + address, immutable after creation.
///
/// Identity is the `CustomerId`, never the name: two customers constructed
/// with the same name are distinct entities. Name and address are opaque
/// strings; empty values are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            address: address.into(),
        }
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let customer = Customer::new("Artem", "Example Str");
        assert_eq!(customer.name(), "Artem");
        assert_eq!(customer.address(), "Example Str");
    }

    #[test]
    fn same_name_is_still_a_distinct_customer() {
        let a = Customer::new("Artem", "Example Str");
        let b = Customer::new("Artem", "Example Str");
        assert_ne!(a.id_typed(), b.id_typed());
        assert_ne!(a, b);
    }

    #[test]
    fn empty_strings_are_accepted() {
        let customer = Customer::new("", "");
        assert_eq!(customer.name(), "");
        assert_eq!(customer.address(), "");
    }
}
