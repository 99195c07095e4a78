//! Hand comparison tests.

use bigtwo::Rank::{Ace, Eight, Five, Four, Jack, King, Nine, Queen, Seven, Six, Ten, Three, Two};
use bigtwo::Suit::{Block, Heart, Plum, Spades};
use bigtwo::{
    Card, Category, CompareError, HandError, Rank, Suit, Winner, classify, compare,
    compare_classified, showdown,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// One hand per category, weakest category first. Stronger categories use
/// the weakest ranks available so that only the category can decide.
fn hands_by_category() -> Vec<Vec<Card>> {
    vec![
        vec![card(Spades, Two)],
        vec![card(Spades, Two), card(Heart, Two)],
        vec![card(Spades, Two), card(Heart, Two), card(Block, Two)],
        vec![
            card(Heart, Ace),
            card(Block, Two),
            card(Plum, Three),
            card(Plum, Four),
            card(Plum, Five),
        ],
        vec![
            card(Plum, Three),
            card(Block, Three),
            card(Heart, Three),
            card(Plum, Four),
            card(Block, Four),
        ],
        vec![
            card(Plum, Three),
            card(Block, Three),
            card(Heart, Three),
            card(Spades, Three),
            card(Plum, Four),
        ],
        vec![
            card(Plum, Ace),
            card(Plum, Two),
            card(Plum, Three),
            card(Plum, Four),
            card(Plum, Five),
        ],
    ]
}

#[test]
fn representative_hands_cover_every_category() {
    let categories: Vec<Category> = hands_by_category()
        .iter()
        .map(|hand| classify(hand).unwrap().category)
        .collect();
    assert_eq!(categories, Category::ALL);
}

#[test_log::test]
fn stronger_category_always_wins() {
    let hands = hands_by_category();

    for (i, weaker) in hands.iter().enumerate() {
        for stronger in &hands[i + 1..] {
            assert_eq!(compare(stronger, weaker), Ok(Winner::First));
            assert_eq!(compare(weaker, stronger), Ok(Winner::Second));
        }
    }
}

#[test]
fn single_ranks_follow_adjusted_order() {
    let order = [
        Three, Four, Five, Six, Seven, Rank::Eight, Nine, Ten, Jack, Queen, King, Ace, Two,
    ];

    for (i, &low) in order.iter().enumerate() {
        for &high in &order[i + 1..] {
            // Suit favours the lower rank so only the rank can decide.
            let low_hand = [card(Spades, low)];
            let high_hand = [card(Plum, high)];
            assert_eq!(compare(&high_hand, &low_hand), Ok(Winner::First));
            assert_eq!(compare(&low_hand, &high_hand), Ok(Winner::Second));
        }
    }
}

#[test]
fn two_beats_ace_beats_king() {
    let two = [card(Plum, Two)];
    let ace = [card(Spades, Ace)];
    let king = [card(Spades, King)];

    assert_eq!(compare(&two, &ace), Ok(Winner::First));
    assert_eq!(compare(&ace, &king), Ok(Winner::First));
    assert_eq!(compare(&king, &two), Ok(Winner::Second));
}

#[test]
fn equal_rank_singles_fall_back_to_suit() {
    for (i, &low) in Suit::ALL.iter().enumerate() {
        for &high in &Suit::ALL[i + 1..] {
            assert_eq!(
                compare(&[card(high, Nine)], &[card(low, Nine)]),
                Ok(Winner::First)
            );
        }
    }
}

#[test_log::test]
fn straight_flush_beats_three_of_a_kind() {
    let straight_flush = [
        card(Spades, Six),
        card(Spades, Eight),
        card(Spades, Nine),
        card(Spades, Seven),
        card(Spades, Five),
    ];
    let trips = [
        card(Plum, Two),
        card(Heart, Two),
        card(Spades, Two),
        card(Plum, King),
        card(Block, Queen),
    ];

    let result = showdown(&straight_flush, &trips).unwrap();
    assert_eq!(result.winner, Winner::First);
    assert_eq!(result.first.category, Category::StraightFlush);
    assert_eq!(result.second.category, Category::ThreeOfAKind);
    assert_eq!(result.winning().deciding, card(Spades, Nine));
}

#[test]
fn full_house_beats_pair_regardless_of_rank() {
    let sevens_over_sixes = [
        card(Plum, Six),
        card(Heart, Six),
        card(Plum, Seven),
        card(Heart, Seven),
        card(Block, Seven),
    ];
    let pair_of_twos = [card(Spades, Two), card(Heart, Two)];

    assert_eq!(
        compare(&sevens_over_sixes, &pair_of_twos),
        Ok(Winner::First)
    );
}

#[test]
fn straights_rank_by_anchor() {
    let run = |ranks: [Rank; 5], anchor_suit: Suit| -> Vec<Card> {
        ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| card(if i == 0 { anchor_suit } else { Block }, rank))
            .collect()
    };

    // Strongest to weakest; the first rank of each run is its anchor.
    let straights = [
        run([Two, Three, Four, Five, Six], Plum),
        run([Ace, Ten, Jack, Queen, King], Plum),
        run([King, Nine, Ten, Jack, Queen], Plum),
        run([Seven, Three, Four, Five, Six], Plum),
        run([Five, Ace, Two, Three, Four], Plum),
    ];

    for (i, stronger) in straights.iter().enumerate() {
        assert_eq!(classify(stronger).unwrap().category, Category::Straight);
        for weaker in &straights[i + 1..] {
            assert_eq!(compare(stronger, weaker), Ok(Winner::First));
        }
    }

    let spade_anchor = run([Seven, Three, Four, Five, Six], Spades);
    let heart_anchor = run([Seven, Three, Four, Five, Six], Heart);
    assert_eq!(compare(&heart_anchor, &spade_anchor), Ok(Winner::Second));
}

#[test]
fn pairs_of_equal_rank_compare_by_highest_suit() {
    let kings_with_spade = [card(Spades, King), card(Plum, King)];
    let kings_with_heart = [card(Heart, King), card(Block, King)];

    assert_eq!(
        compare(&kings_with_spade, &kings_with_heart),
        Ok(Winner::First)
    );
}

#[test]
fn four_of_a_kind_ignores_kicker_rank() {
    let nines = [
        card(Plum, Nine),
        card(Block, Nine),
        card(Heart, Nine),
        card(Spades, Nine),
        card(Plum, Three),
    ];
    let eights = [
        card(Plum, Rank::Eight),
        card(Block, Rank::Eight),
        card(Heart, Rank::Eight),
        card(Spades, Rank::Eight),
        card(Spades, Two),
    ];

    assert_eq!(compare(&nines, &eights), Ok(Winner::First));
}

#[test]
fn four_of_a_kind_with_same_rank_breaks_on_group_suit() {
    // Only reachable with cards from more than one deck.
    let topped_by_heart = [
        card(Plum, Seven),
        card(Block, Seven),
        card(Heart, Seven),
        card(Heart, Seven),
        card(Spades, Three),
    ];
    let topped_by_spades = [
        card(Plum, Seven),
        card(Block, Seven),
        card(Heart, Seven),
        card(Spades, Seven),
        card(Plum, Three),
    ];

    assert_eq!(
        compare(&topped_by_spades, &topped_by_heart),
        Ok(Winner::First)
    );
}

#[test_log::test]
fn identical_hands_exhaust_the_comparison() {
    let hand = [card(Heart, Queen), card(Block, Queen)];
    assert_eq!(
        compare(&hand, &hand),
        Err(CompareError::ComparisonExhausted)
    );

    let first = classify(&[card(Heart, Queen)]).unwrap();
    assert_eq!(
        compare_classified(&first, &first),
        Err(CompareError::ComparisonExhausted)
    );
}

#[test_log::test]
fn invalid_hands_are_reported_by_side() {
    let valid = [card(Plum, Three)];
    let oversized = [
        card(Plum, Three),
        card(Plum, Four),
        card(Plum, Five),
        card(Plum, Six),
        card(Plum, Seven),
        card(Plum, Nine),
    ];

    assert_eq!(
        compare(&oversized, &valid),
        Err(CompareError::FirstHand(HandError::InvalidHandSize {
            len: 6
        }))
    );
    assert_eq!(
        compare(&valid, &[]),
        Err(CompareError::SecondHand(HandError::InvalidHandSize {
            len: 0
        }))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        HandError::InvalidHandSize { len: 7 }.to_string(),
        "invalid hand size 7, expected 1 to 5 cards"
    );
    assert_eq!(
        CompareError::SecondHand(HandError::InvalidHandSize { len: 0 }).to_string(),
        "second hand: invalid hand size 0, expected 1 to 5 cards"
    );
    assert_eq!(
        CompareError::ComparisonExhausted.to_string(),
        "hands tie on category, rank and suit"
    );
}
