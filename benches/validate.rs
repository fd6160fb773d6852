use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deck_legality::cards::{Card, CardRequirement, Investigator};
use deck_legality::rules::{DeckMeta, DeckOption};
use deck_legality::validation::DeckValidator;

fn investigator() -> Investigator {
    Investigator::new(Card::new("01001a", "Spider-Man", "hero", "hero"))
        .with_deck_size(40)
        .requiring(CardRequirement::new("01002"))
        .with_option(DeckOption::new().with_factions(["hero"]))
        .with_option(DeckOption::new().with_text([r"[Hh]eals? (\d+ damage (and|or) )?(\d+ )?horror"]).negated())
        .with_option(DeckOption::new().with_faction_select(["aggression", "justice"]).with_limit(20))
        .with_option(DeckOption::new().with_factions(["basic"]).with_atleast(1, 5))
}

fn deck() -> Vec<Card> {
    let mut cards = vec![Card::new("01002", "Spider-Tracer", "upgrade", "hero").with_deck_limit(1)];
    for i in 0..20 {
        cards.push(
            Card::new(format!("j{i}"), format!("Justice {i}"), "event", "justice")
                .with_deck_limit(3)
                .with_text("Deal 2 damage to an enemy."),
        );
    }
    for i in 0..19 {
        cards.push(Card::new(format!("b{i}"), format!("Basic {i}"), "resource", "basic").with_deck_limit(3));
    }
    cards
}

fn bench_validate(c: &mut Criterion) {
    let investigator = investigator();
    let validator = DeckValidator::new(&investigator, Some(DeckMeta::with_faction("justice"))).unwrap();
    let cards = deck();

    c.bench_function("problem_40_cards", |b| b.iter(|| validator.problem(black_box(&cards))));

    let probe = Card::new("j99", "Justice 99", "event", "justice");
    c.bench_function("can_include_card", |b| b.iter(|| validator.can_include_card(black_box(&probe))));
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
