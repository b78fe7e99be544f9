use log::debug;

use crate::domain::{Amount, Player, PlayerId};
use crate::engine::pot::Pot;

/// Посчитать поты из суммарных вкладов игроков.
///
/// Вход: весь снимок игроков (сфолдившие тоже – их фишки остаются в банке).
/// Выход: список потов в порядке возрастания порога. Первым идёт пот с самым
/// низким уровнем вклада, в котором участвуют все, последним – самый "узкий".
pub fn build_pots(players: &[Player]) -> Vec<Pot> {
    // Собираем (id, вклад > 0).
    let mut entries: Vec<(PlayerId, Amount)> = players
        .iter()
        .map(|p| (p.id, p.total_committed()))
        .filter(|(_, total)| total.is_positive())
        .collect();

    if entries.is_empty() {
        return Vec::new();
    }

    // Сортируем по размеру вклада (возрастание). Сортировка стабильная:
    // при равных вкладах сохраняется порядок снимка.
    entries.sort_by(|(_, a), (_, b)| a.0.total_cmp(&b.0));

    let mut pots = Vec::new();
    let mut prev_level = Amount::ZERO;

    for (i, &(_, level)) in entries.iter().enumerate() {
        let contribution = level - prev_level;
        if contribution.0 <= 0.0 {
            // Тот же уровень, что и у предыдущего игрока.
            continue;
        }

        // Все, кто вложил хотя бы `level`, – это хвост отсортированного списка.
        let eligible: Vec<PlayerId> = entries[i..].iter().map(|(id, _)| *id).collect();
        let amount = Amount(contribution.0 * eligible.len() as f64);

        debug!(
            "пот #{}: уровень {:.2}, сумма {:.2}, участники {:?}",
            pots.len(),
            level.0,
            amount.0,
            eligible
        );

        pots.push(Pot::new(amount, eligible));
        prev_level = level;
    }

    pots
}
