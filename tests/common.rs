#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use deck_carousel::{Card, Category, Deck, Navigator, NavigatorConfig};

/// Build a deck whose cards carry the given category names, in order.
pub fn deck_from(categories: &[&str]) -> Deck {
    let mut declared: Vec<Category> = Vec::new();
    for name in categories {
        if !declared.iter().any(|c| c.name == *name) {
            declared.push(Category::new(*name));
        }
    }
    let cards = categories
        .iter()
        .enumerate()
        .map(|(i, category)| Card::new(format!("card-{i}"), *category, format!("Card {i}")))
        .collect();
    Deck::new("Test deck", declared, cards).expect("valid test deck")
}

/// Single-category deck of `n` cards.
pub fn flat_deck(n: usize) -> Deck {
    deck_from(&vec!["X"; n])
}

/// Navigator with the default config and a 300px viewport (60px threshold).
pub fn navigator(deck: &Deck) -> Navigator {
    let mut nav = Navigator::new(deck, NavigatorConfig::default()).expect("valid navigator");
    nav.set_viewport_width(300.0);
    nav
}

/// Runs the release binary's subcommands against scratch files.
pub struct CliHarness {
    dir: PathBuf,
}

impl CliHarness {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("deck-carousel-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("Failed to create scratch dir");
        Self { dir }
    }

    pub fn write_deck(&self, file: &str, json: &str) -> PathBuf {
        let path = self.dir.join(file);
        fs::write(&path, json).expect("Failed to write deck");
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_deck-carousel"))
            .arg("--log-file")
            .arg(self.dir.join("test.log"))
            .args(args)
            .output()
            .expect("Failed to spawn deck-carousel")
    }

    pub fn log(&self) -> String {
        fs::read_to_string(self.dir.join("test.log")).unwrap_or_default()
    }
}

impl Drop for CliHarness {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}
