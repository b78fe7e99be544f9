//! Интеграционные тесты для доменной модели (crate::domain).

use poker_payouts::domain::*;

/// Утилита: карта удобным конструктором.
fn card(rank: Rank, suit: Suit) -> Card {
    Card { rank, suit }
}

/// Тестируем разбор токенов карт: регистр ранга и масти не важен.
#[test]
fn card_parses_two_char_tokens() {
    assert_eq!("Ah".parse::<Card>(), Ok(card(Rank::Ace, Suit::Hearts)));
    assert_eq!("td".parse::<Card>(), Ok(card(Rank::Ten, Suit::Diamonds)));
    assert_eq!("7C".parse::<Card>(), Ok(card(Rank::Seven, Suit::Clubs)));
    assert_eq!("kS".parse::<Card>(), Ok(card(Rank::King, Suit::Spades)));
}

#[test]
fn card_parse_errors() {
    assert_eq!(
        "A".parse::<Card>(),
        Err(CardParseError::BadLength("A".to_string()))
    );
    assert_eq!(
        "10h".parse::<Card>(),
        Err(CardParseError::BadLength("10h".to_string()))
    );
    assert_eq!("1h".parse::<Card>(), Err(CardParseError::BadRank('1')));
    assert_eq!("Ax".parse::<Card>(), Err(CardParseError::BadSuit('x')));
}

/// Display и FromStr согласованы: ранг заглавный, масть строчная.
#[test]
fn card_display_is_canonical_token() {
    let c: Card = "qH".parse().unwrap();
    assert_eq!(c.to_string(), "Qh");
    assert_eq!(card(Rank::Two, Suit::Clubs).to_string(), "2c");
    assert_eq!(card(Rank::Ten, Suit::Spades).to_string(), "Ts");
}

/// На проводе карта – строка из двух символов.
#[test]
fn card_serde_uses_string_token() {
    let c = card(Rank::Jack, Suit::Diamonds);
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"Jd\"");

    let back: Card = serde_json::from_str("\"jd\"").unwrap();
    assert_eq!(back, c);

    assert!(serde_json::from_str::<Card>("\"Zz\"").is_err());
}

#[test]
fn rank_order_follows_poker_strength() {
    assert!(Rank::Ace > Rank::King);
    assert!(Rank::Ten > Rank::Nine);
    assert!(Rank::Two < Rank::Three);
}

/// Борд: полнота и список выложенных карт.
#[test]
fn board_completeness_and_cards() {
    let full = Board::full(
        [
            card(Rank::Two, Suit::Clubs),
            card(Rank::Seven, Suit::Diamonds),
            card(Rank::Ten, Suit::Spades),
        ],
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
    );
    assert!(full.is_complete());
    assert_eq!(full.cards().len(), 5);

    let flop_only = Board {
        turn: None,
        river: None,
        ..full
    };
    assert!(!flop_only.is_complete());
    assert_eq!(flop_only.cards().len(), 3);

    let mut gap = full;
    gap.flop[1] = None;
    assert!(!gap.is_complete());
    assert_eq!(
        gap.cards(),
        vec![
            card(Rank::Two, Suit::Clubs),
            card(Rank::Ten, Suit::Spades),
            card(Rank::Nine, Suit::Hearts),
            card(Rank::Ace, Suit::Spades),
        ]
    );

    assert!(!Board::default().is_complete());
    assert!(Board::default().cards().is_empty());
}

/// Вклад = сумма четырёх улиц, NaN и бесконечность считаются нулём.
#[test]
fn commitments_total_and_per_street() {
    let c = Commitments::new(10.0, 20.0, 0.5, 4.5);
    assert_eq!(c.total(), Amount(35.0));
    assert_eq!(c.on(Street::Turn), Amount(0.5));

    let broken = Commitments::new(f64::INFINITY, 5.0, f64::NAN, 0.0);
    assert_eq!(broken.total(), Amount(5.0));

    assert_eq!(Commitments::default().total(), Amount::ZERO);
    assert_eq!(Commitments::preflop_only(7.0).on(Street::Preflop), Amount(7.0));
}

/// Пропущенные улицы в JSON – нули.
#[test]
fn commitments_deserialize_with_missing_streets() {
    let c: Commitments = serde_json::from_str(r#"{"preflop": 10, "river": 2.5}"#).unwrap();
    assert_eq!(c, Commitments::new(10.0, 0.0, 0.0, 2.5));
}

/// Contender – только при двух картах.
#[test]
fn player_contender_requires_both_hole_cards() {
    let ah = card(Rank::Ace, Suit::Hearts);
    let kd = card(Rank::King, Suit::Diamonds);

    let full = Player::new(1, Commitments::preflop_only(10.0)).with_cards(ah, kd);
    assert!(full.has_full_hand());
    assert_eq!(
        full.contender(),
        Some(Contender {
            id: 1,
            hole: [ah, kd]
        })
    );

    let mut half = Player::new(2, Commitments::default());
    half.hole_cards[0] = Some(ah);
    assert!(!half.has_full_hand());
    assert_eq!(half.contender(), None);

    assert_eq!(full.total_committed(), Amount(10.0));
}

/// Снимок: на шоудаун идут только несфолдившие с двумя картами.
#[test]
fn snapshot_contenders_and_folds() {
    let ah = card(Rank::Ace, Suit::Hearts);
    let kd = card(Rank::King, Suit::Diamonds);
    let qs = card(Rank::Queen, Suit::Spades);
    let jc = card(Rank::Jack, Suit::Clubs);

    let snapshot = Snapshot::new(
        vec![
            Player::new(1, Commitments::default()).with_cards(ah, kd),
            Player::new(2, Commitments::default()).with_cards(qs, jc).folded(),
            Player::new(3, Commitments::default()),
        ],
        vec![],
    );

    let ids: Vec<PlayerId> = snapshot.contenders().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1]);

    assert!(snapshot.is_folded(2));
    assert!(!snapshot.is_folded(1));
    // неизвестный id – не сфолдил
    assert!(!snapshot.is_folded(42));

    assert!(snapshot.player(3).is_some());
    assert!(snapshot.player(42).is_none());
}

/// Amount: округление до центов, центы, проценты.
#[test]
fn amount_helpers() {
    assert_eq!(Amount(33.333_333).round_cents(), Amount(33.33));
    assert_eq!(Amount(0.125).round_cents(), Amount(0.13));
    assert_eq!(Amount(12.34).to_cents(), 1234);
    assert_eq!(Amount::from_cents(667), Amount(6.67));

    assert_eq!(Amount(25.0).percent_of(Amount(100.0)), 25.0);
    assert_eq!(Amount(33.33).percent_of(Amount(100.0)), 33.33);
    assert_eq!(Amount(5.0).percent_of(Amount::ZERO), 0.0);

    assert_eq!(Amount(f64::NAN).sanitized(), Amount::ZERO);
    assert_eq!(Amount(3.0).sanitized(), Amount(3.0));

    let parts = [Amount(1.5), Amount(2.5)];
    assert_eq!(parts.iter().sum::<Amount>(), Amount(4.0));
    assert_eq!(Amount(9.0) / 3, Amount(3.0));
    assert_eq!(Amount(9.0) - Amount(4.0), Amount(5.0));

    let mut acc = Amount::ZERO;
    acc += Amount(0.5);
    assert!(acc.is_positive());
    assert!(!acc.is_zero());
}

/// Amount на проводе – просто число.
#[test]
fn amount_serializes_as_plain_number() {
    assert_eq!(serde_json::to_string(&Amount(12.5)).unwrap(), "12.5");
    let back: Amount = serde_json::from_str("7").unwrap();
    assert_eq!(back, Amount(7.0));
}

#[test]
fn street_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Street::Preflop).unwrap(), "\"preflop\"");
    assert_eq!(Street::ALL.len(), 4);
}
