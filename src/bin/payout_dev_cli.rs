// src/bin/payout_dev_cli.rs
//
// Dev-CLI: читает JSON с раздачей (файл из аргумента или stdin) и печатает
// поты, тиры по бордам и выплаты.
//
// Оценщика рук тут нет. Вместо него во входе можно передать силу рук по бордам:
//   "strengths": [ { "1": 7, "2": 3 }, { "1": 2, "2": 9 } ]
// Таблица i относится к борду i по порядку (неполные борды могут совпадать).
// Больше – сильнее, равные значения – сплит. Без "strengths" (и без готовых
// "boardResults") шоудаун пустой, и поты делятся fallback-ом.
//
// Логи: RUST_LOG=debug cargo run --bin payout_dev_cli -- hand.json

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use poker_payouts::api::{handle_payout_request, ApiError, PayoutRequest, PayoutResponse};
use poker_payouts::domain::PlayerId;
use poker_payouts::infra::mapping::{snapshot_from_records, PlayerNameResolver, RecordNameResolver};
use poker_payouts::ranking::{evaluate_boards_by_strength, ByScore, StrengthTable};

/// Поле "strengths" того же JSON, что и сам запрос; остальные поля игнорируются.
#[derive(Deserialize)]
struct Strengths {
    #[serde(default)]
    strengths: Option<Vec<BTreeMap<PlayerId, u32>>>,
}

fn read_input() -> Result<String, String> {
    let mut raw = String::new();
    match std::env::args().nth(1) {
        Some(path) => {
            raw = std::fs::read_to_string(&path).map_err(|e| format!("{path}: {e}"))?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|e| format!("stdin: {e}"))?;
        }
    }
    Ok(raw)
}

fn run(raw: &str) -> Result<(PayoutRequest, PayoutResponse), ApiError> {
    let mut request: PayoutRequest = serde_json::from_str(raw)?;
    let strengths = serde_json::from_str::<Strengths>(raw)?.strengths;

    // Готовые boardResults важнее таблиц силы.
    let supplied = request
        .board_results
        .as_ref()
        .map_or(false, |results| !results.is_empty());

    if let (Some(strengths), false) = (&strengths, supplied) {
        let snapshot = snapshot_from_records(&request.players, &request.boards)?;
        request.board_results = Some(evaluate_boards_by_strength(&snapshot, strengths));
    }

    let response = handle_payout_request::<ByScore<StrengthTable<'static>>>(&request, None)?;
    Ok((request, response))
}

fn print_report(request: &PayoutRequest, resp: &PayoutResponse) {
    let names = RecordNameResolver::new(&request.players);

    println!("=== POTS ===");
    for (idx, pot) in resp.pots.iter().enumerate() {
        let who: Vec<String> = pot
            .eligible_player_ids
            .iter()
            .map(|id| names.resolve_name(*id))
            .collect();
        println!("  #{idx}: {:.2}  [{}]", pot.amount.0, who.join(", "));
    }

    println!("\n=== BOARDS ===");
    for (idx, result) in resp.board_results.iter().enumerate() {
        println!("  Борд #{idx}:");
        for (place, tier) in result.tiers.iter().enumerate() {
            let who: Vec<String> = tier.iter().map(|id| names.resolve_name(*id)).collect();
            println!("    {}. {}", place + 1, who.join(" = "));
        }
    }

    if let Some(advisory) = &resp.advisory {
        println!("\n  ! {advisory}");
    }

    println!("\n=== PAYOUTS ===");
    for (idx, pot) in resp.payouts.per_pot.iter().enumerate() {
        println!("  Пот #{idx} ({:.2}):", pot.amount.0);
        for a in &pot.allocations {
            println!(
                "    {:<16} {:>10.2}  {:>6.2}%",
                names.resolve_name(a.player_id),
                a.amount.0,
                a.percent
            );
        }
        if !pot.unallocated.is_zero() {
            println!("    (никому не досталось: {:.2})", pot.unallocated.0);
        }
    }

    println!("\n  Итого:");
    for (id, total) in &resp.payouts.totals {
        println!("    {:<16} {:>10.2}", names.resolve_name(*id), total.0);
    }

    if !resp.readiness.can_evaluate {
        println!("\n  (ввод неполный: шоудаун считался по тому, что есть)");
    }
}

fn main() {
    env_logger::init();

    let raw = match read_input() {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("Не удалось прочитать вход: {err}");
            std::process::exit(2);
        }
    };

    match run(&raw) {
        Ok((request, response)) => print_report(&request, &response),
        Err(err) => {
            eprintln!("Ошибка: {err:?}");
            std::process::exit(1);
        }
    }
}
