//! Records the API starts with.

use super::{Product, User};

pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Laptop Gaming".to_string(),
            description: "Intel i7, RTX 3060".to_string(),
            price: 15_000_000.0,
        },
        Product {
            id: 2,
            name: "Keyboard Mekanikal".to_string(),
            description: "Blue Switch, RGB".to_string(),
            price: 800_000.0,
        },
        Product {
            id: 3,
            name: "Mouse Wireless".to_string(),
            description: "Ergonomic, Silent Click".to_string(),
            price: 300_000.0,
        },
    ]
}

pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Ujang".to_string(),
            email: "ujang@gmail.com".to_string(),
            status: "Admin".to_string(),
            role: "Manager".to_string(),
        },
        User {
            id: 2,
            name: "Haikal".to_string(),
            email: "haikal@gmail.com".to_string(),
            status: "User".to_string(),
            role: "Cashier".to_string(),
        },
        User {
            id: 3,
            name: "MuZaky".to_string(),
            email: "muzaky@gmail.com".to_string(),
            status: "Moderator".to_string(),
            role: "Management".to_string(),
        },
    ]
}
