//! Тесты шоудауна по бордам: разбиение на тиры через внешний оценщик.
//!
//! Оценщики здесь – заглушки со скриптованной силой рук и сбоями по номеру вызова.

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};

use poker_payouts::domain::{Board, Card, Commitments, Contender, Player, PlayerId, Snapshot};
use poker_payouts::ranking::{
    determine_winners, evaluate_boards, evaluate_boards_by_strength, rank_tiers,
    rank_tiers_by_score, Advisory, BoardResult, ByScore, HandRanker, RankerError, ScoredRanker,
};

fn c(token: &str) -> Card {
    token.parse().unwrap()
}

fn board_a() -> Board {
    Board::full([c("2c"), c("7d"), c("Ts")], c("9h"), c("As"))
}

fn board_b() -> Board {
    Board::full([c("3c"), c("8d"), c("Js")], c("4h"), c("Ks"))
}

/// Претенденты с разными картами (карты оценщику-заглушке не важны).
fn contenders(ids: &[PlayerId]) -> Vec<Contender> {
    let pool = ["Ah", "Ad", "Kh", "Kd", "Qh", "Qd", "Jh", "Jd", "Th", "Td", "9c", "9d"];
    ids.iter()
        .enumerate()
        .map(|(i, id)| Contender {
            id: *id,
            hole: [c(pool[2 * i]), c(pool[2 * i + 1])],
        })
        .collect()
}

/// Сила руки по (борд, id).
struct BoardScores(HashMap<Board, HashMap<PlayerId, u32>>);

impl ScoredRanker for BoardScores {
    type Score = u32;

    fn score(&self, contender: &Contender, board: &Board) -> Result<u32, RankerError> {
        self.0
            .get(board)
            .and_then(|m| m.get(&contender.id))
            .copied()
            .ok_or_else(|| RankerError::Evaluation {
                player_id: contender.id,
                reason: "нет руки".into(),
            })
    }

    fn describe(&self, score: &u32) -> Option<String> {
        Some(format!("score {score}"))
    }
}

fn scores_on(board: Board, pairs: &[(PlayerId, u32)]) -> BoardScores {
    BoardScores(HashMap::from([(board, pairs.iter().copied().collect())]))
}

/// Оценщик, который падает на N-м запросе победителей (счёт с нуля).
struct FlakyRanker {
    scores: HashMap<PlayerId, u32>,
    fail_on_call: usize,
    calls: Cell<usize>,
}

impl FlakyRanker {
    fn new(pairs: &[(PlayerId, u32)], fail_on_call: usize) -> Self {
        Self {
            scores: pairs.iter().copied().collect(),
            fail_on_call,
            calls: Cell::new(0),
        }
    }
}

impl HandRanker for FlakyRanker {
    type Hand = u32;

    fn evaluate(&self, contender: &Contender, _board: &Board) -> Result<u32, RankerError> {
        Ok(self.scores[&contender.id])
    }

    fn winners(&self, hands: &[&u32]) -> Result<Vec<usize>, RankerError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if call == self.fail_on_call {
            return Err(RankerError::Comparison("сбой оценщика".into()));
        }
        let best = hands.iter().copied().max().copied().unwrap_or(0);
        Ok(hands
            .iter()
            .enumerate()
            .filter(|(_, h)| ***h == best)
            .map(|(i, _)| i)
            .collect())
    }
}

/// Оценщик, который на любой запрос отвечает заданным списком индексов.
struct StubbornRanker(Vec<usize>);

impl HandRanker for StubbornRanker {
    type Hand = ();

    fn evaluate(&self, _contender: &Contender, _board: &Board) -> Result<(), RankerError> {
        Ok(())
    }

    fn winners(&self, _hands: &[&()]) -> Result<Vec<usize>, RankerError> {
        Ok(self.0.clone())
    }
}

//
// ====================== ОСНОВНОЙ ЦИКЛ ======================
//

/// 4 игрока: 2 > 1 = 3 > 4. Внутри тира – порядок входа.
#[test]
fn tiers_follow_strength_with_ties_grouped() {
    let ranker = ByScore(scores_on(board_a(), &[(1, 5), (2, 9), (3, 5), (4, 1)]));

    let tiers = rank_tiers(Some(&ranker), &contenders(&[1, 2, 3, 4]), &board_a());

    assert_eq!(tiers, vec![vec![2], vec![1, 3], vec![4]]);
}

/// Тиры покрывают всех претендентов ровно по одному разу.
#[test]
fn tiers_partition_contenders() {
    let ranker = ByScore(scores_on(
        board_a(),
        &[(1, 3), (2, 3), (3, 3), (4, 7), (5, 1), (6, 7)],
    ));
    let input = contenders(&[1, 2, 3, 4, 5, 6]);

    let tiers = rank_tiers(Some(&ranker), &input, &board_a());

    let mut seen: Vec<PlayerId> = tiers.iter().flatten().copied().collect();
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    assert!(tiers.iter().all(|t| !t.is_empty()));
}

/// Ничья за первое место: первый тир = ответ determine_winners.
#[test]
fn tie_for_best_matches_determine_winners() {
    let ranker = ByScore(scores_on(board_a(), &[(1, 7), (2, 7), (3, 1)]));
    let input = contenders(&[1, 2, 3]);

    let tiers = rank_tiers(Some(&ranker), &input, &board_a());
    let winners = determine_winners(Some(&ranker), &input, &board_a());

    assert_eq!(tiers[0], vec![1, 2]);
    assert_eq!(winners, tiers[0]);
}

/// Один игрок – один тир, оценщика не спрашиваем (даже если он бы упал).
#[test]
fn single_contender_forms_single_tier() {
    let ranker = FlakyRanker::new(&[(5, 1)], 0);

    let tiers = rank_tiers(Some(&ranker), &contenders(&[5]), &board_a());

    assert_eq!(tiers, vec![vec![5]]);
    assert_eq!(ranker.calls.get(), 0);
}

#[test]
fn no_contenders_means_no_tiers() {
    let ranker = ByScore(scores_on(board_a(), &[]));
    assert!(rank_tiers(Some(&ranker), &[], &board_a()).is_empty());
}

#[test]
fn absent_ranker_means_no_tiers() {
    let tiers = rank_tiers::<FlakyRanker>(None, &contenders(&[1, 2]), &board_a());
    assert!(tiers.is_empty());

    let winners = determine_winners::<FlakyRanker>(None, &contenders(&[1, 2]), &board_a());
    assert!(winners.is_empty());
}

//
// ====================== СБОИ ОЦЕНЩИКА ======================
//

/// Сбой на втором сравнении: первый тир сохраняется, остальные отбрасываются.
#[test]
fn comparison_fault_keeps_partial_tiers() {
    let ranker = FlakyRanker::new(&[(1, 4), (2, 3), (3, 2), (4, 1)], 1);

    let tiers = rank_tiers(Some(&ranker), &contenders(&[1, 2, 3, 4]), &board_a());

    assert_eq!(tiers, vec![vec![1]]);
}

#[test]
fn comparison_fault_on_first_call_gives_empty_tiers() {
    // Счётчик вызовов у каждого оценщика свой.
    let ranker = FlakyRanker::new(&[(1, 4), (2, 3)], 0);
    assert!(rank_tiers(Some(&ranker), &contenders(&[1, 2]), &board_a()).is_empty());

    let ranker = FlakyRanker::new(&[(1, 4), (2, 3)], 0);
    assert!(determine_winners(Some(&ranker), &contenders(&[1, 2]), &board_a()).is_empty());
}

/// Ошибка оценки руки – тиров нет совсем.
#[test]
fn evaluation_fault_gives_empty_tiers() {
    // У игрока 3 нет силы руки на этом борде.
    let ranker = ByScore(scores_on(board_a(), &[(1, 4), (2, 3)]));

    let tiers = rank_tiers(Some(&ranker), &contenders(&[1, 2, 3]), &board_a());
    assert!(tiers.is_empty());

    let by_score = rank_tiers_by_score(Some(&ranker.0), &contenders(&[1, 2, 3]), &board_a());
    assert!(by_score.is_empty());
}

/// Пустой ответ оценщика не должен зацикливать разбиение.
#[test]
fn empty_winner_set_stops_reduction() {
    let ranker = StubbornRanker(Vec::new());

    let tiers = rank_tiers(Some(&ranker), &contenders(&[1, 2, 3]), &board_a());

    assert!(tiers.is_empty());
}

/// Индекс за пределами списка – тоже сбой.
#[test]
fn out_of_range_winner_index_is_a_fault() {
    let ranker = StubbornRanker(vec![0, 17]);

    assert!(rank_tiers(Some(&ranker), &contenders(&[1, 2]), &board_a()).is_empty());
}

/// Дубли индексов схлопываются, остальные игроки уходят в следующий тир.
#[test]
fn duplicate_winner_indices_are_collapsed() {
    let ranker = StubbornRanker(vec![0, 0]);

    let tiers = rank_tiers(Some(&ranker), &contenders(&[1, 2, 3]), &board_a());

    // Каждый раз "выигрывает" первый из оставшихся.
    assert_eq!(tiers, vec![vec![1], vec![2], vec![3]]);
}

//
// ====================== СОРТИРОВКА ПО СИЛЕ ======================
//

/// Одна сортировка даёт то же разбиение, что и цикл запросов победителей.
#[test]
fn score_sort_matches_repeated_winners() {
    let scores = scores_on(
        board_a(),
        &[(1, 2), (2, 8), (3, 8), (4, 2), (5, 5), (6, 0), (7, 8)],
    );
    let input = contenders(&[1, 2, 3, 4, 5, 6]);

    let by_score = rank_tiers_by_score(Some(&scores), &input, &board_a());
    let ranker = ByScore(scores);
    let by_loop = rank_tiers(Some(&ranker), &input, &board_a());

    assert_eq!(by_score, vec![vec![2, 3], vec![5], vec![1, 4], vec![6]]);
    assert_eq!(by_score, by_loop);
}

//
// ====================== ОЦЕНКА БОРДОВ ======================
//

fn snapshot_two_boards() -> Snapshot {
    Snapshot::new(
        vec![
            Player::new(1, Commitments::preflop_only(50.0)).with_cards(c("Ah"), c("Ad")),
            Player::new(2, Commitments::preflop_only(50.0)).with_cards(c("Kh"), c("Kd")),
            // Сфолдил – на шоудаун не идёт.
            Player::new(3, Commitments::preflop_only(20.0))
                .with_cards(c("Qh"), c("Qd"))
                .folded(),
            // Одна карта – не претендент.
            Player {
                hole_cards: [Some(c("Jh")), None],
                ..Player::new(4, Commitments::preflop_only(50.0))
            },
        ],
        vec![board_a(), board_b()],
    )
}

#[test]
fn evaluate_boards_ranks_each_board_independently() {
    let ranker = ByScore(BoardScores(HashMap::from([
        (board_a(), HashMap::from([(1, 9), (2, 1), (3, 50)])),
        (board_b(), HashMap::from([(1, 1), (2, 9), (3, 50)])),
    ])));

    let eval = evaluate_boards(Some(&ranker), &snapshot_two_boards());

    assert!(eval.advisory.is_none());
    assert_eq!(eval.results.len(), 2);
    assert_eq!(eval.results[0].tiers, vec![vec![1], vec![2]]);
    assert_eq!(eval.results[1].tiers, vec![vec![2], vec![1]]);

    // Названия рук только для претендентов.
    let hands = &eval.results[0].hands;
    assert_eq!(hands.len(), 2);
    assert_eq!(hands[&1].as_deref(), Some("score 9"));
    assert!(!hands.contains_key(&3));
    assert!(!hands.contains_key(&4));
}

/// Сбой на одном борде не трогает другой.
#[test]
fn evaluation_fault_is_local_to_board() {
    let ranker = ByScore(BoardScores(HashMap::from([(
        board_b(),
        HashMap::from([(1, 3), (2, 3)]),
    )])));

    let eval = evaluate_boards(Some(&ranker), &snapshot_two_boards());

    assert!(eval.results[0].tiers.is_empty());
    assert!(eval.results[0].hands.is_empty());
    assert_eq!(eval.results[1].tiers, vec![vec![1, 2]]);
}

/// Нет оценщика – пустые результаты по каждому борду и одно предупреждение.
#[test]
fn missing_ranker_yields_advisory() {
    let eval = evaluate_boards::<FlakyRanker>(None, &snapshot_two_boards());

    assert_eq!(eval.advisory, Some(Advisory::RankerUnavailable));
    assert_eq!(eval.results.len(), 2);
    assert!(eval.results.iter().all(|r| r.tiers.is_empty()));
}

/// Никто не дошёл до шоудауна – пустой результат без обращения к оценщику.
#[test]
fn board_without_contenders_is_empty() {
    let snapshot = Snapshot::new(
        vec![Player::new(1, Commitments::preflop_only(10.0)).folded()],
        vec![board_a()],
    );
    let ranker = FlakyRanker::new(&[], 0);

    let eval = evaluate_boards(Some(&ranker), &snapshot);

    assert_eq!(eval.results.len(), 1);
    assert!(eval.results[0].tiers.is_empty());
    assert_eq!(ranker.calls.get(), 0);
}

/// Дубли физических карт – бессмыслица на входе, но не паника.
#[test]
fn duplicate_cards_do_not_crash() {
    let snapshot = Snapshot::new(
        vec![
            Player::new(1, Commitments::preflop_only(10.0)).with_cards(c("As"), c("As")),
            Player::new(2, Commitments::preflop_only(10.0)).with_cards(c("As"), c("2c")),
        ],
        vec![board_a(), board_a()],
    );
    let ranker = ByScore(scores_on(board_a(), &[(1, 1), (2, 1)]));

    let eval = evaluate_boards(Some(&ranker), &snapshot);

    assert_eq!(eval.results[0].tiers, vec![vec![1, 2]]);
    assert_eq!(eval.results[0], eval.results[1]);
}

//
// ====================== ТАБЛИЦЫ СИЛЫ ======================
//

fn heads_up_on_empty_boards(boards: usize) -> Snapshot {
    Snapshot::new(
        vec![
            Player::new(1, Commitments::preflop_only(50.0)).with_cards(c("Ah"), c("Ad")),
            Player::new(2, Commitments::preflop_only(50.0)).with_cards(c("Kh"), c("Kd")),
        ],
        vec![Board::default(); boards],
    )
}

/// Два одинаковых (пустых) борда: каждый получает свою таблицу по номеру.
#[test]
fn strength_tables_follow_board_position() {
    let snapshot = heads_up_on_empty_boards(2);
    let strengths = vec![
        BTreeMap::from([(1, 9), (2, 1)]),
        BTreeMap::from([(1, 1), (2, 9)]),
    ];

    let results = evaluate_boards_by_strength(&snapshot, &strengths);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].tiers, vec![vec![1], vec![2]]);
    assert_eq!(results[1].tiers, vec![vec![2], vec![1]]);
    assert_eq!(results[1].hands[&2].as_deref(), Some("strength 9"));
}

/// Борд без таблицы или с пропущенным игроком – пустой результат.
#[test]
fn missing_strengths_give_empty_board_result() {
    let snapshot = heads_up_on_empty_boards(3);
    let strengths = vec![BTreeMap::from([(1, 3), (2, 3)]), BTreeMap::from([(1, 5)])];

    let results = evaluate_boards_by_strength(&snapshot, &strengths);

    assert_eq!(results[0].tiers, vec![vec![1, 2]]);
    assert_eq!(results[1], BoardResult::default());
    assert_eq!(results[2], BoardResult::default());
}
