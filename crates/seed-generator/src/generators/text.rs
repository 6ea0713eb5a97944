//! Text value generators backed by the `fake` crate.

use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Sentence, Word};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

/// A lowercase email address. Uniqueness is the caller's concern.
pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let email: String = SafeEmail().fake_with_rng(rng);
    email.to_lowercase()
}

/// Append a numeric discriminator to the local part of an email address.
pub fn email_with_suffix(email: &str, suffix: u64) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}{suffix}@{domain}"),
        None => format!("{email}{suffix}"),
    }
}

/// Single-line postal address.
pub fn address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateAbbr().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{number} {street}, {city}, {state} {zip}")
}

pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    CompanyName().fake_with_rng(rng)
}

/// A single title-cased word, used as a dish name.
pub fn dish_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word: String = Word().fake_with_rng(rng);
    title_case(&word)
}

/// A sentence with exactly `words` words.
pub fn sentence<R: Rng + ?Sized>(rng: &mut R, words: usize) -> String {
    Sentence(words..words + 1).fake_with_rng(rng)
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
