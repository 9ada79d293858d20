/*
 * Unit tests for the lift state machine
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - boarding limits (weight, passenger count)
 * - exit detection and removal
 * - movement decisions and single floor steps
 *
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod state_tests {
    use crate::lift::LiftState;
    use crate::shared::Direction::{Down, None, Up};
    use crate::shared::{Lift, Passenger};

    #[test]
    fn test_can_board_allowed() {
        // Arrange
        let lift_state = LiftState::standard(Lift::new(200, 2));

        // Act & Assert
        assert!(lift_state.can_board(&Passenger::new(50, 3)));
    }

    #[test]
    fn test_can_board_denied_weight() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(200, 2));
        lift_state.board(Passenger::new(160, 2)).unwrap();

        // Act & Assert
        assert!(!lift_state.can_board(&Passenger::new(50, 3)));
    }

    #[test]
    fn test_can_board_exact_weight_is_allowed() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(200, 3));
        lift_state.board(Passenger::new(150, 2)).unwrap();

        // Act & Assert
        assert!(lift_state.can_board(&Passenger::new(50, 3)));
        assert!(!lift_state.can_board(&Passenger::new(51, 3)));
    }

    #[test]
    fn test_can_board_heavy_riders_near_u32_max() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(u32::MAX, 2));
        lift_state.board(Passenger::new(3_000_000_000, 3)).unwrap();

        // Act
        let allowed = lift_state.can_board(&Passenger::new(3_000_000_000, 3));
        let result = lift_state.board(Passenger::new(3_000_000_000, 3));

        // Assert
        assert!(!allowed);
        assert_eq!(result.unwrap_err().load, 3_000_000_000);
        assert_eq!(lift_state.load(), 3_000_000_000);
        assert!(lift_state.can_board(&Passenger::new(u32::MAX - 3_000_000_000, 3)));
    }

    #[test]
    fn test_can_board_denied_capacity() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2));
        lift_state.board(Passenger::new(160, 2)).unwrap();
        lift_state.board(Passenger::new(150, 2)).unwrap();

        // Act & Assert
        assert!(!lift_state.can_board(&Passenger::new(50, 3)));
    }

    #[test]
    fn test_board_over_capacity_fails() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(200, 2));
        lift_state.board(Passenger::new(190, 3)).unwrap();

        // Act
        let result = lift_state.board(Passenger::new(20, 3));

        // Assert
        let err = result.unwrap_err();
        assert_eq!(err.passenger, Passenger::new(20, 3));
        assert_eq!(err.load, 190);
        assert_eq!(lift_state.passengers().len(), 1);
        assert_eq!(lift_state.load(), 190);
    }

    #[test]
    fn test_needs_exit_true() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2)).starting_at(3);
        lift_state.board(Passenger::new(160, 3)).unwrap();
        lift_state.board(Passenger::new(150, 3)).unwrap();

        // Act & Assert
        assert!(lift_state.needs_exit());
    }

    #[test]
    fn test_needs_exit_false() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2)).starting_at(3);
        lift_state.board(Passenger::new(160, 5)).unwrap();
        lift_state.board(Passenger::new(150, 5)).unwrap();

        // Act & Assert
        assert!(!lift_state.needs_exit());
    }

    #[test]
    fn test_exit() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2)).starting_at(3);
        lift_state.board(Passenger::new(160, 5)).unwrap();
        lift_state.board(Passenger::new(150, 3)).unwrap();
        assert!(lift_state.needs_exit());

        // Act
        let delivered = lift_state.exit();

        // Assert
        assert_eq!(delivered, vec![Passenger::new(150, 3)]);
        assert_eq!(lift_state.passengers(), &[Passenger::new(160, 5)]);
        assert!(!lift_state.needs_exit());
    }

    #[test]
    fn test_exit_without_pending_riders_is_noop() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2)).starting_at(2);
        lift_state.board(Passenger::new(160, 5)).unwrap();

        // Act
        let delivered = lift_state.exit();

        // Assert
        assert!(delivered.is_empty());
        assert_eq!(lift_state.passengers().len(), 1);
    }

    #[test]
    fn test_board_travel_exit_round_trip() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(200, 2));
        let passenger = Passenger::new(70, 3);
        lift_state.board(passenger).unwrap();

        // Act
        while lift_state.floor() < passenger.floor {
            lift_state.move_in(Up);
        }
        lift_state.exit();

        // Assert
        assert!(!lift_state.passengers().contains(&passenger));
        assert!(!lift_state.needs_exit());
    }

    #[test]
    fn test_should_move_in_up_floor1() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2));
        lift_state.board(Passenger::new(160, 2)).unwrap();
        lift_state.board(Passenger::new(150, 3)).unwrap();

        // Act & Assert
        assert_eq!(lift_state.should_move_in(), Up);
    }

    #[test]
    fn test_should_move_in_none_when_exit_pending() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2)).starting_at(3);
        lift_state.board(Passenger::new(160, 2)).unwrap();
        lift_state.board(Passenger::new(150, 3)).unwrap();

        // Act & Assert
        assert_eq!(lift_state.should_move_in(), None);
    }

    #[test]
    fn test_should_move_in_down_when_empty() {
        // Arrange
        let lift_state = LiftState::standard(Lift::new(2000, 2)).starting_at(3);

        // Act & Assert
        assert_eq!(lift_state.should_move_in(), Down);
    }

    #[test]
    fn test_should_move_in_none_at_ground_floor() {
        // Arrange
        let lift_state = LiftState::standard(Lift::new(2000, 2));

        // Act & Assert
        assert_eq!(lift_state.should_move_in(), None);
    }

    #[test]
    fn test_move_up() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2));

        // Act
        lift_state.move_in(Up);

        // Assert
        assert_eq!(lift_state.floor(), 2);
    }

    #[test]
    fn test_move_down() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2)).starting_at(2);

        // Act
        lift_state.move_in(Down);

        // Assert
        assert_eq!(lift_state.floor(), 1);
    }

    #[test]
    fn test_move_down_never_below_ground_floor() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2));

        // Act
        lift_state.move_in(Down);

        // Assert
        assert_eq!(lift_state.floor(), 1);
    }

    #[test]
    fn test_move_none_is_noop() {
        // Arrange
        let mut lift_state = LiftState::standard(Lift::new(2000, 2)).starting_at(4);

        // Act
        lift_state.move_in(None);

        // Assert
        assert_eq!(lift_state.floor(), 4);
    }
}
