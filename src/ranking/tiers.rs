use log::error;

use crate::domain::{Board, Contender, PlayerId, Tier};
use crate::ranking::capability::{HandRanker, RankerError, ScoredRanker};

/// Разложить претендентов на тиры для одного борда (лучшие первыми).
///
/// Схема: оцениваем руки, спрашиваем оценщика "кто лучший среди оставшихся",
/// записываем их тиром, убираем, повторяем, пока никого не останется.
///
/// - нет оценщика или нет претендентов – пустой список;
/// - сбой при оценке рук – пустой список;
/// - сбой при сравнении – возвращаем уже посчитанные тиры.
///
/// Пустой результат означает "неизвестно", а не "победителей нет".
pub fn rank_tiers<R: HandRanker>(
    ranker: Option<&R>,
    contenders: &[Contender],
    board: &Board,
) -> Vec<Tier> {
    let Some(ranker) = ranker else {
        return Vec::new();
    };

    match evaluate_all(ranker, contenders, board) {
        Ok(hands) => reduce_tiers(ranker, hands),
        Err(err) => {
            error!("оценка рук не удалась: {err}");
            Vec::new()
        }
    }
}

/// Только первый тир: один запрос победителей среди всех претендентов.
pub fn determine_winners<R: HandRanker>(
    ranker: Option<&R>,
    contenders: &[Contender],
    board: &Board,
) -> Vec<PlayerId> {
    let Some(ranker) = ranker else {
        return Vec::new();
    };

    let hands = match evaluate_all(ranker, contenders, board) {
        Ok(hands) => hands,
        Err(err) => {
            error!("оценка рук не удалась: {err}");
            return Vec::new();
        }
    };

    if hands.len() <= 1 {
        return hands.into_iter().map(|(id, _)| id).collect();
    }

    match query_winners(ranker, &hands) {
        Ok(winners) => winners.into_iter().map(|idx| hands[idx].0).collect(),
        Err(err) => {
            error!("ошибка сравнения рук: {err}");
            Vec::new()
        }
    }
}

/// То же разбиение на тиры, но через полную силу руки: одна стабильная
/// сортировка по убыванию и группировка равных.
pub fn rank_tiers_by_score<S: ScoredRanker>(
    ranker: Option<&S>,
    contenders: &[Contender],
    board: &Board,
) -> Vec<Tier> {
    let Some(ranker) = ranker else {
        return Vec::new();
    };

    let scored: Result<Vec<(PlayerId, S::Score)>, RankerError> = contenders
        .iter()
        .map(|c| ranker.score(c, board).map(|s| (c.id, s)))
        .collect();

    let mut scored = match scored {
        Ok(scored) => scored,
        Err(err) => {
            error!("оценка рук не удалась: {err}");
            return Vec::new();
        }
    };

    scored.sort_by(|(_, a), (_, b)| b.cmp(a));

    let mut tiers: Vec<Tier> = Vec::new();
    let mut current: Option<S::Score> = None;
    for (id, score) in scored {
        if current.as_ref() == Some(&score) {
            if let Some(tier) = tiers.last_mut() {
                tier.push(id);
            }
        } else {
            tiers.push(vec![id]);
            current = Some(score);
        }
    }
    tiers
}

/// Оценить руку каждого претендента один раз.
pub(crate) fn evaluate_all<R: HandRanker>(
    ranker: &R,
    contenders: &[Contender],
    board: &Board,
) -> Result<Vec<(PlayerId, R::Hand)>, RankerError> {
    contenders
        .iter()
        .map(|c| ranker.evaluate(c, board).map(|h| (c.id, h)))
        .collect()
}

/// Цикл "убрать победителей" над уже оценёнными руками.
pub(crate) fn reduce_tiers<R: HandRanker>(
    ranker: &R,
    mut remaining: Vec<(PlayerId, R::Hand)>,
) -> Vec<Tier> {
    let mut tiers = Vec::new();

    while !remaining.is_empty() {
        // Один игрок – сам себе тир, оценщика не дёргаем.
        if remaining.len() == 1 {
            tiers.push(vec![remaining[0].0]);
            break;
        }

        let winners = match query_winners(ranker, &remaining) {
            Ok(winners) => winners,
            Err(err) => {
                error!("ошибка сравнения рук, тиры обрезаны на {}: {err}", tiers.len());
                break;
            }
        };

        let mut tier = Vec::with_capacity(winners.len());
        let mut rest = Vec::with_capacity(remaining.len() - winners.len());
        for (idx, (id, hand)) in remaining.into_iter().enumerate() {
            if winners.contains(&idx) {
                tier.push(id);
            } else {
                rest.push((id, hand));
            }
        }

        tiers.push(tier);
        remaining = rest;
    }

    tiers
}

/// Запрос победителей с проверкой ответа: непустой, без дублей, индексы в пределах.
/// Без этой проверки пустой ответ зациклил бы `reduce_tiers`.
fn query_winners<R: HandRanker>(
    ranker: &R,
    entries: &[(PlayerId, R::Hand)],
) -> Result<Vec<usize>, RankerError> {
    let hands: Vec<&R::Hand> = entries.iter().map(|(_, h)| h).collect();
    let mut winners = ranker.winners(&hands)?;

    winners.sort_unstable();
    winners.dedup();

    if winners.is_empty() || winners.iter().any(|&idx| idx >= entries.len()) {
        return Err(RankerError::BadWinners);
    }
    Ok(winners)
}
