use crate::model::product::Product as ProductModel;
use anyhow::Result;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};
use rust_decimal::Decimal;

const ADJECTIVES: &[&str] = &[
    "Small",
    "Ergonomic",
    "Rustic",
    "Intelligent",
    "Gorgeous",
    "Incredible",
    "Fantastic",
    "Practical",
    "Sleek",
    "Awesome",
    "Generic",
    "Handcrafted",
    "Handmade",
    "Licensed",
    "Refined",
    "Unbranded",
];

const MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen",
];

const NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Cheese", "Bacon", "Pizza",
    "Salad", "Sausages", "Chips",
];

const LOREM: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "eiusmod",
    "tempor",
    "incididunt",
    "labore",
    "dolore",
    "magna",
    "aliqua",
    "enim",
    "minim",
    "veniam",
    "nostrud",
];

// price is sampled in cents to stay at currency precision
const MIN_PRICE_CENTS: i64 = 1_000;
const MAX_PRICE_CENTS: i64 = 50_000;
const MIN_STOCK: i32 = 1;
const MAX_STOCK: i32 = 100;

/// Synthetic product generator standing in for a faker library: composed
/// commerce-style names, lorem-style descriptions, price in [10, 500],
/// stock in [1, 100].
pub struct ProductFaker {
    rng: StdRng,
}

impl ProductFaker {
    pub fn new() -> Result<Self> {
        let mut seed = [0u8; 32];
        OsRng.try_fill_bytes(&mut seed)?;

        Ok(Self {
            rng: StdRng::from_seed(seed),
        })
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<ProductModel> {
        (0..count).map(|_| self.product()).collect()
    }

    fn product(&mut self) -> ProductModel {
        let name = format!(
            "{} {} {}",
            self.pick(ADJECTIVES),
            self.pick(MATERIALS),
            self.pick(NOUNS)
        );
        let description = self.sentence();
        let price = Decimal::new(
            self.rng.random_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS),
            2,
        );
        let stock = self.rng.random_range(MIN_STOCK..=MAX_STOCK);

        ProductModel::new(name, description, price, stock)
    }

    fn sentence(&mut self) -> String {
        let len = self.rng.random_range(5..=9);
        let words: Vec<&str> = (0..len).map(|_| self.pick(LOREM)).collect();

        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }

    fn pick<'a>(&mut self, words: &'a [&'a str]) -> &'a str {
        words[self.rng.random_range(0..words.len())]
    }
}
