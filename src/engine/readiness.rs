use crate::domain::{Board, Player, Snapshot};

/// Борд готов к оценке: 3 карты флопа + тёрн + ривер.
pub fn is_board_complete(board: &Board) -> bool {
    board.is_complete()
}

/// Есть хотя бы один борд, и все борды полные.
pub fn all_boards_complete(boards: &[Board]) -> bool {
    !boards.is_empty() && boards.iter().all(is_board_complete)
}

/// У игрока обе карманные карты.
pub fn is_player_complete(player: &Player) -> bool {
    player.has_full_hand()
}

/// Можно ли считать шоудаун и выплаты.
///
/// Нужно минимум 2 игрока, у каждого по 2 карты, и все борды полные.
/// Сфолдившие игроки тоже обязаны иметь карты – так устроен ввод в UI.
pub fn can_evaluate(snapshot: &Snapshot) -> bool {
    let enough_players = snapshot.players.len() > 1;
    let players_complete = enough_players && snapshot.players.iter().all(is_player_complete);
    players_complete && all_boards_complete(&snapshot.boards)
}
