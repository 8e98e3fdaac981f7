use crate::{
    models::{
        card::BingoCard,
        game_session::{GameSession, GameStatus},
        player::Player,
    },
    services::errors::bingo_service_errors::BingoServiceError,
};

/// The 12 winning index patterns on a 5x5 card: five rows, five columns,
/// and the two diagonals.
pub const WIN_PATTERNS: [[usize; 5]; 12] = [
    [0, 1, 2, 3, 4],
    [5, 6, 7, 8, 9],
    [10, 11, 12, 13, 14],
    [15, 16, 17, 18, 19],
    [20, 21, 22, 23, 24],
    [0, 5, 10, 15, 20],
    [1, 6, 11, 16, 21],
    [2, 7, 12, 17, 22],
    [3, 8, 13, 18, 23],
    [4, 9, 14, 19, 24],
    [0, 6, 12, 18, 24],
    [4, 8, 12, 16, 20],
];

#[derive(Clone)]
pub struct BingoService;

impl BingoService {
    pub fn new() -> Self {
        BingoService
    }

    /// Seat a second player on a waiting session and start the game.
    pub fn join_game(
        &self,
        game_session: &mut GameSession,
        player_id: &str,
    ) -> Result<(), BingoServiceError> {
        if game_session.status != GameStatus::WaitingForPlayer {
            return Err(BingoServiceError::GameAlreadyStarted);
        }
        if game_session.is_full() {
            return Err(BingoServiceError::GameFull);
        }
        // Seating one id twice would leave the session without a real
        // opponent, so the turn could never alternate.
        if game_session.has_player(player_id) {
            return Err(BingoServiceError::AlreadyJoined);
        }

        game_session.players.push(Player::new(player_id, false));
        game_session.status = GameStatus::Active;

        Ok(())
    }

    /// Validate and apply a mark on the game session.
    /// Updates the player's marked numbers, the called-number history, and
    /// the turn; promotes the session to Finished when the mark wins.
    pub fn validate_and_mark_number(
        &self,
        game_session: &mut GameSession,
        player_id: &str,
        number: u8,
    ) -> Result<(), BingoServiceError> {
        if game_session.status != GameStatus::Active {
            return Err(BingoServiceError::GameNotActive);
        }

        if game_session.current_turn != player_id {
            return Err(BingoServiceError::NotYourTurn);
        }

        // current_turn always names a seated player, so the lookup cannot
        // miss; the error mapping keeps this panic-free regardless.
        let player = game_session
            .player(player_id)
            .ok_or(BingoServiceError::NotYourTurn)?;

        if !player.card.contains(number) {
            return Err(BingoServiceError::NumberNotOnCard);
        }
        if player.marked_numbers.contains(&number) {
            return Err(BingoServiceError::NumberAlreadyMarked);
        }

        let next_turn = game_session
            .opponent_id(player_id)
            .unwrap_or_else(|| player_id.to_string());

        let won = {
            let player = game_session
                .player_mut(player_id)
                .ok_or(BingoServiceError::NotYourTurn)?;
            player.marked_numbers.push(number);
            Self::has_won(&player.card, &player.marked_numbers)
        };

        game_session.called_numbers.push(number);
        game_session.current_turn = next_turn;

        // Only the acting player is evaluated, so the winner is always the
        // player who just moved.
        if won {
            game_session.status = GameStatus::Finished;
            game_session.winner = Some(player_id.to_string());
        }

        Ok(())
    }

    /// True when at least one winning pattern has every cell marked.
    pub fn has_won(card: &BingoCard, marked_numbers: &[u8]) -> bool {
        let cells = card.numbers();
        WIN_PATTERNS.iter().any(|pattern| {
            pattern
                .iter()
                .all(|&idx| cells.get(idx).is_some_and(|n| marked_numbers.contains(n)))
        })
    }
}

impl Default for BingoService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn identity_card() -> BingoCard {
        BingoCard::from_cells((1..=25).collect())
    }

    fn active_session() -> GameSession {
        let mut session = GameSession::new("AB12C", "host");
        BingoService::new().join_game(&mut session, "guest").unwrap();
        session
    }

    #[test]
    fn test_join_game_starts_the_session() {
        let mut session = GameSession::new("AB12C", "host");
        let service = BingoService::new();

        let result = service.join_game(&mut session, "guest");

        assert!(result.is_ok());
        assert_eq!(session.status, GameStatus::Active);
        assert_eq!(session.players.len(), 2);
        assert_eq!(session.players[1].id, "guest");
        assert!(!session.players[1].is_host);
        assert!(session.players[1].marked_numbers.is_empty());
        // Joining never moves the turn; the host still opens.
        assert_eq!(session.current_turn, "host");
    }

    #[test]
    fn test_join_game_rejects_started_session() {
        let mut session = active_session();
        let service = BingoService::new();

        let result = service.join_game(&mut session, "third");

        match result.unwrap_err() {
            BingoServiceError::GameAlreadyStarted => {}
            other => panic!("Expected GameAlreadyStarted, got {:?}", other),
        }
        assert_eq!(session.players.len(), 2);
    }

    #[test]
    fn test_join_game_rejects_full_session() {
        let mut session = GameSession::new("AB12C", "host");
        session.players.push(Player::new("guest", false));
        let service = BingoService::new();

        let result = service.join_game(&mut session, "third");

        match result.unwrap_err() {
            BingoServiceError::GameFull => {}
            other => panic!("Expected GameFull, got {:?}", other),
        }
    }

    #[test]
    fn test_join_game_rejects_the_host_joining_their_own_session() {
        let mut session = GameSession::new("AB12C", "host");
        let service = BingoService::new();

        let result = service.join_game(&mut session, "host");

        match result.unwrap_err() {
            BingoServiceError::AlreadyJoined => {}
            other => panic!("Expected AlreadyJoined, got {:?}", other),
        }
        // The session is untouched and still waiting for a real opponent.
        assert_eq!(session.players.len(), 1);
        assert_eq!(session.status, GameStatus::WaitingForPlayer);
        assert_eq!(session.current_turn, "host");
    }

    #[test]
    fn test_mark_number_applies_and_flips_turn() {
        let mut session = active_session();
        let service = BingoService::new();
        let number = session.players[0].card.numbers()[0];

        let result = service.validate_and_mark_number(&mut session, "host", number);

        assert!(result.is_ok());
        assert_eq!(session.players[0].marked_numbers, vec![number]);
        assert_eq!(session.called_numbers, vec![number]);
        assert_eq!(session.current_turn, "guest");
        assert_eq!(session.status, GameStatus::Active);
        assert!(session.winner.is_none());
    }

    #[test]
    fn test_mark_number_rejects_wrong_turn() {
        let mut session = active_session();
        let service = BingoService::new();
        let number = session.players[1].card.numbers()[0];

        let result = service.validate_and_mark_number(&mut session, "guest", number);

        match result.unwrap_err() {
            BingoServiceError::NotYourTurn => {}
            other => panic!("Expected NotYourTurn, got {:?}", other),
        }
        assert!(session.players[1].marked_numbers.is_empty());
        assert!(session.called_numbers.is_empty());
        assert_eq!(session.current_turn, "host");
    }

    #[test]
    fn test_mark_number_rejects_waiting_session() {
        let mut session = GameSession::new("AB12C", "host");
        let service = BingoService::new();

        let result = service.validate_and_mark_number(&mut session, "host", 1);

        match result.unwrap_err() {
            BingoServiceError::GameNotActive => {}
            other => panic!("Expected GameNotActive, got {:?}", other),
        }
    }

    #[test_case(0; "zero")]
    #[test_case(26; "just past the range")]
    #[test_case(99; "far out of range")]
    fn test_mark_number_rejects_number_not_on_card(number: u8) {
        let mut session = active_session();
        let service = BingoService::new();

        let result = service.validate_and_mark_number(&mut session, "host", number);

        match result.unwrap_err() {
            BingoServiceError::NumberNotOnCard => {}
            other => panic!("Expected NumberNotOnCard, got {:?}", other),
        }
        assert!(session.called_numbers.is_empty());
        assert_eq!(session.current_turn, "host");
    }

    #[test]
    fn test_mark_number_rejects_remarking_same_number() {
        let mut session = active_session();
        let service = BingoService::new();
        let number = session.players[0].card.numbers()[0];
        let guest_number = session.players[1].card.numbers()[0];

        service
            .validate_and_mark_number(&mut session, "host", number)
            .unwrap();
        service
            .validate_and_mark_number(&mut session, "guest", guest_number)
            .unwrap();

        let result = service.validate_and_mark_number(&mut session, "host", number);

        match result.unwrap_err() {
            BingoServiceError::NumberAlreadyMarked => {}
            other => panic!("Expected NumberAlreadyMarked, got {:?}", other),
        }
        assert_eq!(session.players[0].marked_numbers, vec![number]);
        assert_eq!(session.called_numbers, vec![number, guest_number]);
        assert_eq!(session.current_turn, "host");
    }

    #[test]
    fn test_both_players_may_mark_the_same_number() {
        let mut session = active_session();
        let service = BingoService::new();
        let number = session.players[0].card.numbers()[0];

        service
            .validate_and_mark_number(&mut session, "host", number)
            .unwrap();
        // Cards are independent permutations; the guest marking the same
        // number on their own card is a legitimate move.
        let result = service.validate_and_mark_number(&mut session, "guest", number);

        assert!(result.is_ok());
        assert_eq!(session.called_numbers, vec![number, number]);
    }

    #[test]
    fn test_turns_alternate_strictly() {
        let mut session = active_session();
        let service = BingoService::new();
        let host_numbers: Vec<u8> = session.players[0].card.numbers()[0..3].to_vec();
        let guest_numbers: Vec<u8> = session.players[1].card.numbers()[0..3].to_vec();

        for i in 0..3 {
            assert_eq!(session.current_turn, "host");
            service
                .validate_and_mark_number(&mut session, "host", host_numbers[i])
                .unwrap();
            assert_eq!(session.current_turn, "guest");
            service
                .validate_and_mark_number(&mut session, "guest", guest_numbers[i])
                .unwrap();
        }

        assert_eq!(session.called_numbers.len(), 6);
    }

    #[test]
    fn test_completing_a_pattern_finishes_the_game() {
        let mut session = active_session();
        let service = BingoService::new();
        let host_row: Vec<u8> = session.players[0].card.numbers()[0..5].to_vec();
        let guest_filler: Vec<u8> = session.players[1].card.numbers()[0..4].to_vec();

        for i in 0..4 {
            service
                .validate_and_mark_number(&mut session, "host", host_row[i])
                .unwrap();
            service
                .validate_and_mark_number(&mut session, "guest", guest_filler[i])
                .unwrap();
        }
        service
            .validate_and_mark_number(&mut session, "host", host_row[4])
            .unwrap();

        assert_eq!(session.status, GameStatus::Finished);
        assert_eq!(session.winner, Some("host".to_string()));
    }

    #[test]
    fn test_no_moves_after_the_game_finished() {
        let mut session = active_session();
        let service = BingoService::new();
        let host_row: Vec<u8> = session.players[0].card.numbers()[0..5].to_vec();
        let guest_filler: Vec<u8> = session.players[1].card.numbers()[0..4].to_vec();

        for i in 0..4 {
            service
                .validate_and_mark_number(&mut session, "host", host_row[i])
                .unwrap();
            service
                .validate_and_mark_number(&mut session, "guest", guest_filler[i])
                .unwrap();
        }
        service
            .validate_and_mark_number(&mut session, "host", host_row[4])
            .unwrap();

        let result =
            service.validate_and_mark_number(&mut session, "guest", guest_filler[3]);

        match result.unwrap_err() {
            BingoServiceError::GameNotActive => {}
            other => panic!("Expected GameNotActive, got {:?}", other),
        }
    }

    #[test_case(&[1, 2, 3, 4, 5], true; "first row")]
    #[test_case(&[11, 12, 13, 14, 15], true; "middle row")]
    #[test_case(&[21, 22, 23, 24, 25], true; "last row")]
    #[test_case(&[1, 6, 11, 16, 21], true; "first column")]
    #[test_case(&[5, 10, 15, 20, 25], true; "last column")]
    #[test_case(&[1, 7, 13, 19, 25], true; "main diagonal")]
    #[test_case(&[5, 9, 13, 17, 21], true; "anti diagonal")]
    #[test_case(&[1, 2, 3, 4], false; "incomplete row")]
    #[test_case(&[2, 3, 4, 5, 6], false; "row straddling a boundary")]
    #[test_case(&[1, 7, 3, 19, 23], false; "five scattered marks")]
    #[test_case(&[], false; "nothing marked")]
    fn test_has_won_on_identity_card(marked: &[u8], expected: bool) {
        let card = identity_card();

        assert_eq!(BingoService::has_won(&card, marked), expected);
    }

    #[test]
    fn test_every_row_and_column_wins_on_identity_card() {
        let card = identity_card();

        for row in 0..5u8 {
            let marked: Vec<u8> = (1..=5).map(|n| row * 5 + n).collect();
            assert!(
                BingoService::has_won(&card, &marked),
                "row {} should win with {:?}",
                row,
                marked
            );
        }

        for col in 0..5u8 {
            let marked: Vec<u8> = (0..5).map(|row| row * 5 + col + 1).collect();
            assert!(
                BingoService::has_won(&card, &marked),
                "column {} should win with {:?}",
                col,
                marked
            );
        }
    }

    #[test]
    fn test_has_won_ignores_extra_marks() {
        let card = identity_card();
        let marked = [22, 1, 9, 2, 3, 17, 4, 5];

        assert!(BingoService::has_won(&card, &marked));
    }

    #[test]
    fn test_has_won_follows_the_card_layout() {
        // Reversed layout: cell 0 holds 25, cell 24 holds 1. The first row
        // is now {25, 24, 23, 22, 21}.
        let card = BingoCard::from_cells((1..=25).rev().collect());

        assert!(BingoService::has_won(&card, &[25, 24, 23, 22, 21]));
        assert!(!BingoService::has_won(&card, &[25, 24, 23, 22]));
        // The anti-diagonal maps onto values {21, 17, 13, 9, 5} here.
        assert!(BingoService::has_won(&card, &[21, 17, 13, 9, 5]));
    }

    #[test]
    fn test_fully_marked_card_always_wins() {
        let card = BingoCard::random();
        let marked: Vec<u8> = (1..=25).collect();

        assert!(BingoService::has_won(&card, &marked));
    }
}
