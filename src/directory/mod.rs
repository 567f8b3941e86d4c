use crate::models::Customer;

static CUSTOMERS: &[(i32, &str, &str, &str)] = &[
    (1, "Hari Krishna", "harikrishna@gmail.com", "male"),
    (2, "Rakesh Kumar", "rakesh@gmail.com", "male"),
    (3, "Tarun Kumar", "tarun@gmail.com", "male"),
];

/// The fixed customer list served by `GET /customers`, in response order.
pub fn default_customers() -> Vec<Customer> {
    CUSTOMERS
        .iter()
        .map(|&(id, name, email, gender)| Customer::new(id, name, email, gender))
        .collect()
}
