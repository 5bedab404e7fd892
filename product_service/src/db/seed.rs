// product_service/src/db/seed.rs

use rust_decimal::Decimal;

use crate::models::NewProduct;

// (name, description, price in cents, stock)
const CATALOG: [(&str, &str, i64, i32); 10] = [
  (
    "Wireless Mouse",
    "Ergonomic wireless mouse with adjustable DPI and long battery life.",
    2599,
    100,
  ),
  (
    "Gaming Keyboard",
    "Mechanical keyboard with RGB lighting and programmable keys.",
    8999,
    50,
  ),
  (
    "HD Monitor",
    "27-inch full HD monitor with ultra-thin bezels and vivid colors.",
    17999,
    30,
  ),
  (
    "USB-C Hub",
    "Multiport adapter offering HDMI, USB 3.0, and Ethernet connections.",
    3999,
    200,
  ),
  (
    "External Hard Drive",
    "2TB portable external hard drive with fast data transfer speeds.",
    6499,
    80,
  ),
  (
    "Bluetooth Speaker",
    "Portable speaker with deep bass, crisp sound quality, and water resistance.",
    4550,
    120,
  ),
  (
    "Smartwatch",
    "Fitness tracker smartwatch with heart rate monitoring and GPS.",
    9999,
    70,
  ),
  (
    "Laptop Stand",
    "Adjustable aluminum laptop stand for ergonomic comfort and cooling.",
    2999,
    150,
  ),
  (
    "Wireless Earbuds",
    "True wireless earbuds featuring noise cancellation and long battery life.",
    5999,
    90,
  ),
  (
    "Portable Charger",
    "10,000mAh power bank with fast charging capabilities and multiple ports.",
    1999,
    250,
  ),
];

/// The fixed sample products used by `seed-db`.
pub fn catalog() -> Vec<NewProduct> {
  CATALOG
    .iter()
    .map(|&(name, description, price_cents, stock)| NewProduct {
      name: name.to_string(),
      description: Some(description.to_string()),
      price: Some(Decimal::new(price_cents, 2)),
      stock: Some(stock),
    })
    .collect()
}
